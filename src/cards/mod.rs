//! Cards and the attribute space they are drawn from.
//!
//! - `attributes`: the four attribute axes and their three values each
//! - `card`: immutable card values

pub mod attributes;
pub mod card;

pub use attributes::{Attribute, Color, Fill, Number, Shape, VALUES_PER_ATTRIBUTE};
pub use card::Card;
