// Crate root - export modules
pub mod board;
pub mod engine;

pub use engine::{BotReply, Engine, EngineConfig};
