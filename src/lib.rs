// Iterative-deepening alpha-beta agent for knight's Isolation
pub mod agent;
pub mod config;
pub mod error;
pub mod game;
pub mod search;

pub use agent::Agent;
pub use config::AgentConfig;
pub use error::{ConfigError, SearchError, StateError};
pub use game::{GameState, PlayerId};
