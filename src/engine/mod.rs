pub mod game;
pub mod log;
pub mod quota;
pub mod roster;
pub mod session;

pub mod advisor;
pub mod llm_client;
pub mod prompt;
