//! # set-engine
//!
//! Rules engine for the card game Set.
//!
//! ## The game
//!
//! Every card has four attributes (color, shape, number, fill), each taking
//! one of three values, for 81 distinct cards. Twelve are dealt to the
//! table. Three cards form a *set* when, on every attribute, they are all
//! the same or all different. A found set leaves the table, which is then
//! refilled; if no set is showing, three more cards are dealt until one is
//! or the deck runs out. The game ends when the deck is empty and the table
//! shows no set.
//!
//! ## Design
//!
//! - **Value cards**: `Card` is an immutable `Copy` tuple; equality is
//!   structural.
//! - **Explicit failure**: drawing past the end of the deck or addressing a
//!   missing slot is an error, never a short or padded result.
//! - **Persistent state**: deck and table use `im` vectors, so a whole
//!   `GameSession` clones in O(1).
//! - **No UI**: the `view` module holds geometry and layout helpers a host
//!   toolkit can draw with, but nothing here opens a window.
//!
//! ## Modules
//!
//! - `core`: configuration, errors, RNG
//! - `cards`: attributes and cards
//! - `zones`: deck and table, including the refill protocol
//! - `rules`: the set predicate
//! - `game`: game session and player selection
//! - `view`: rendering helpers
//!
//! ```
//! use set_engine::{GameConfig, GameSession};
//!
//! let mut session = GameSession::from_config(&GameConfig::new().with_seed(7)).unwrap();
//! while let Some(slots) = session.hint() {
//!     session.claim(slots).unwrap();
//! }
//! assert!(session.deck().is_empty());
//! assert!(!session.is_active());
//! ```

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod game;
pub mod view;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{ConfigError, GameConfig, GameRng, SetError};

pub use crate::cards::{Attribute, Card, Color, Fill, Number, Shape};

pub use crate::zones::{Deck, SlotTriple, Table};

pub use crate::rules::{completing_card, is_set_valid};

pub use crate::game::{Claim, GameSession, GameStatus, Pick, Selection};
