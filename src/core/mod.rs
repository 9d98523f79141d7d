//! Core engine types: configuration, errors, RNG.
//!
//! Nothing in here knows about cards on a table; the game modules build on it.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{GameConfig, DEFAULT_REFILL_STEP, DEFAULT_TABLE_SIZE, MAX_ATTRIBUTES};
pub use error::{ConfigError, SetError};
pub use rng::GameRng;
