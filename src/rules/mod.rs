//! Game rules.
//!
//! The only rule Set has: three cards are a set when every attribute is
//! all-same or all-different across them. Table search and refill build on
//! `is_set_valid`.

pub mod validator;

pub use validator::{attribute_is_valid, completing_card, is_set_valid};
