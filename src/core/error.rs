//! Error types.
//!
//! Two layers:
//! - `ConfigError`: the game was set up wrong (bad attribute count, a card
//!   value outside its attribute's domain). Fatal, surfaced immediately.
//! - `SetError`: a runtime request the engine refuses (drawing past the end
//!   of the deck, addressing a slot that doesn't exist).
//!
//! Every mutating operation checks its inputs before touching state, so an
//! `Err` always means nothing changed.

use thiserror::Error;

use crate::cards::{Attribute, Card};

/// Invalid game or card configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("attribute count must be in 1..=4, got {0}")]
    AttributeCount(u8),

    #[error("value index {index} is outside the {attribute} domain")]
    ValueOutOfDomain { attribute: Attribute, index: u8 },

    #[error("duplicate card {0} in deck")]
    DuplicateCard(Card),

    #[error("table size must be at least 3, got {0}")]
    TableSize(usize),

    #[error("refill step must be at least 1, got {0}")]
    RefillStep(usize),
}

/// Errors raised by deck and table operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cannot draw {requested} cards, only {remaining} remain")]
    InsufficientCards { requested: usize, remaining: usize },

    #[error("slot {slot} is out of range for a table of {len} cards")]
    InvalidSlot { slot: usize, len: usize },

    #[error("slot {0} selected more than once")]
    DuplicateSlot(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SetError::InsufficientCards {
            requested: 3,
            remaining: 2,
        };
        assert_eq!(err.to_string(), "cannot draw 3 cards, only 2 remain");

        let err = ConfigError::ValueOutOfDomain {
            attribute: Attribute::Fill,
            index: 3,
        };
        assert_eq!(err.to_string(), "value index 3 is outside the fill domain");
    }

    #[test]
    fn test_config_error_converts() {
        let err: SetError = ConfigError::AttributeCount(5).into();
        assert_eq!(err, SetError::Config(ConfigError::AttributeCount(5)));
        assert_eq!(err.to_string(), "attribute count must be in 1..=4, got 5");
    }
}
