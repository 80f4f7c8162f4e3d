pub mod chat;
pub mod config;
pub mod event;
pub mod export;
pub mod meta;
pub mod player;
pub mod roles;
