//! Game configuration.
//!
//! Callers configure a game at startup with `GameConfig`:
//! - how many attributes vary across the deck (1-4, so 3 to 81 cards)
//! - how many cards the table is refilled to
//! - how many extra cards are dealt while no set is showing
//! - an optional shuffle seed
//!
//! The defaults are the standard game: 81 cards, 12 on the table, 3 at a time.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Number of attributes in the full game.
pub const MAX_ATTRIBUTES: u8 = 4;

/// Cards on the table after a refill, when the deck allows.
pub const DEFAULT_TABLE_SIZE: usize = 12;

/// Cards added per step while the table shows no set.
pub const DEFAULT_REFILL_STEP: usize = 3;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Attributes that vary across the deck (1-4). The rest are fixed
    /// to their first value.
    pub attribute_count: u8,

    /// Target table size for the refill protocol.
    pub table_size: usize,

    /// Cards drawn per step while no set is on the table.
    pub refill_step: usize,

    /// Shuffle seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            attribute_count: MAX_ATTRIBUTES,
            table_size: DEFAULT_TABLE_SIZE,
            refill_step: DEFAULT_REFILL_STEP,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of varying attributes.
    #[must_use]
    pub fn with_attribute_count(mut self, count: u8) -> Self {
        self.attribute_count = count;
        self
    }

    /// Set the refill target size.
    #[must_use]
    pub fn with_table_size(mut self, size: usize) -> Self {
        self.table_size = size;
        self
    }

    /// Set the number of cards added per no-set step.
    #[must_use]
    pub fn with_refill_step(mut self, step: usize) -> Self {
        self.refill_step = step;
        self
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every field against its domain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_ATTRIBUTES).contains(&self.attribute_count) {
            return Err(ConfigError::AttributeCount(self.attribute_count));
        }
        if self.table_size < 3 {
            return Err(ConfigError::TableSize(self.table_size));
        }
        if self.refill_step == 0 {
            return Err(ConfigError::RefillStep(self.refill_step));
        }
        Ok(())
    }

    /// Number of cards in a deck built from this configuration.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        3usize.pow(u32::from(self.attribute_count))
    }
}
