#![warn(clippy::all)]
#![deny(rust_2018_idioms)]

pub mod engine;
pub mod model;
pub mod storage;

pub use engine::advisor::Advisor;
pub use engine::game::Game;
pub use engine::session::{Session, SessionState};
pub use model::config::{AiConfig, AiProvider, SetupConfig};
pub use model::event::{EventKind, GameEvent};
pub use model::player::Player;
pub use model::roles::{PlayerStatus, PlayerTag, Role};
pub use storage::Store;
