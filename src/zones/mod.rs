//! Where cards live: the draw pile and the table.
//!
//! Cards move one way only, deck to table, and leave the table when a set
//! is claimed.

pub mod deck;
pub mod table;

pub use deck::Deck;
pub use table::{SlotTriple, Table};
