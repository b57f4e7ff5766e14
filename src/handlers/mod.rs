pub mod filter_handlers;

pub use filter_handlers::{apply_overrides, replay_actions, EngineOverrides};
