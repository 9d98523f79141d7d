//! The draw pile.
//!
//! A `Deck` is built once as the Cartesian product of attribute values,
//! shuffled, then drawn down from the end. Cards never go back in.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::cards::{Card, Color, Fill, Number, Shape};
use crate::core::config::MAX_ATTRIBUTES;
use crate::core::error::{ConfigError, SetError};
use crate::core::rng::GameRng;

/// Ordered pile of undrawn cards.
///
/// Index 0 is the bottom; draws take from the end. Backed by a persistent
/// vector so cloning a deck is O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Build the full product over the first `attribute_count` attributes.
    ///
    /// Attributes past the count are fixed to their first value, so the
    /// deck holds `3^attribute_count` distinct cards. Cards come out in
    /// product order: color varies slowest, fill fastest.
    ///
    /// ```
    /// use set_engine::zones::Deck;
    ///
    /// assert_eq!(Deck::new(4).unwrap().len(), 81);
    /// assert_eq!(Deck::new(2).unwrap().len(), 9);
    /// assert!(Deck::new(0).is_err());
    /// ```
    pub fn new(attribute_count: u8) -> Result<Self, ConfigError> {
        if !(1..=MAX_ATTRIBUTES).contains(&attribute_count) {
            return Err(ConfigError::AttributeCount(attribute_count));
        }

        Ok(Self {
            cards: product(attribute_count),
        })
    }

    /// The standard 81-card deck.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            cards: product(MAX_ATTRIBUTES),
        }
    }

    /// Build a deck in the given order (last card is drawn first).
    ///
    /// Rejects duplicates, since a real deck never holds the same card twice.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, ConfigError> {
        let mut seen = FxHashSet::default();
        for card in &cards {
            if !seen.insert(*card) {
                return Err(ConfigError::DuplicateCard(*card));
            }
        }
        Ok(Self {
            cards: cards.into_iter().collect(),
        })
    }

    /// Shuffle the remaining cards into a uniformly random order.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<Card> = self.cards.iter().copied().collect();
        rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
    }

    /// Remove and return the last `n` cards, in deck order.
    ///
    /// `n` must not exceed `len()`. Asking for more fails with
    /// `SetError::InsufficientCards` and leaves the deck untouched; there is
    /// no short or padded draw.
    pub fn draw_cards(&mut self, n: usize) -> Result<Vec<Card>, SetError> {
        let remaining = self.cards.len();
        if n > remaining {
            return Err(SetError::InsufficientCards {
                requested: n,
                remaining,
            });
        }

        let drawn = self.cards.split_off(remaining - n);
        trace!(drawn = n, remaining = self.cards.len(), "drew cards");
        Ok(drawn.into_iter().collect())
    }

    /// Draw `min(n, len())` cards. For dealing an opening table, where a
    /// short deck just means a short table.
    pub fn draw_at_most(&mut self, n: usize) -> Vec<Card> {
        let at = self.cards.len().saturating_sub(n);
        self.cards.split_off(at).into_iter().collect()
    }

    /// True once every card has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards left to draw.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Remaining cards, bottom first.
    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }
}

/// Cartesian product over the first `attribute_count` attributes; later
/// attributes are held at their first value.
fn product(attribute_count: u8) -> Vector<Card> {
    let span = |position: u8| -> usize {
        if position < attribute_count {
            3
        } else {
            1
        }
    };

    let mut cards = Vector::new();
    for &color in &Color::ALL[..span(0)] {
        for &shape in &Shape::ALL[..span(1)] {
            for &number in &Number::ALL[..span(2)] {
                for &fill in &Fill::ALL[..span(3)] {
                    cards.push_back(Card::new(color, shape, number, fill));
                }
            }
        }
    }
    cards
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes_per_attribute_count() {
        for (count, expected) in [(1u8, 3usize), (2, 9), (3, 27), (4, 81)] {
            let deck = Deck::new(count).unwrap();
            assert_eq!(deck.len(), expected);

            let unique: FxHashSet<Card> = deck.cards().copied().collect();
            assert_eq!(unique.len(), expected);
        }
    }

    #[test]
    fn test_invalid_attribute_count() {
        assert_eq!(Deck::new(0), Err(ConfigError::AttributeCount(0)));
        assert_eq!(Deck::new(5), Err(ConfigError::AttributeCount(5)));
    }

    #[test]
    fn test_fixed_attributes_use_first_value() {
        let deck = Deck::new(1).unwrap();
        for card in deck.cards() {
            assert_eq!(card.shape(), Shape::Circle);
            assert_eq!(card.number(), Number::One);
            assert_eq!(card.fill(), Fill::Full);
        }
    }

    #[test]
    fn test_standard_matches_new() {
        assert_eq!(Deck::standard(), Deck::new(4).unwrap());
    }

    #[test]
    fn test_product_order() {
        let deck = Deck::new(4).unwrap();
        let ids: Vec<u8> = deck.cards().map(Card::id).collect();
        let expected: Vec<u8> = (0..81).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_draw_takes_from_end() {
        let mut deck = Deck::new(2).unwrap();
        let tail: Vec<Card> = deck.cards().skip(6).copied().collect();

        let drawn = deck.draw_cards(3).unwrap();
        assert_eq!(drawn, tail);
        assert_eq!(deck.len(), 6);
        assert!(deck.cards().all(|c| !drawn.contains(c)));
    }

    #[test]
    fn test_draw_zero() {
        let mut deck = Deck::new(1).unwrap();
        assert!(deck.draw_cards(0).unwrap().is_empty());
        assert_eq!(deck.len(), 3);
    }

    #[test]
    fn test_draw_too_many_leaves_deck_unchanged() {
        let mut deck = Deck::new(1).unwrap();
        let before = deck.clone();

        assert_eq!(
            deck.draw_cards(4),
            Err(SetError::InsufficientCards {
                requested: 4,
                remaining: 3,
            })
        );
        assert_eq!(deck, before);
    }

    #[test]
    fn test_draw_everything() {
        let mut deck = Deck::new(2).unwrap();
        assert_eq!(deck.draw_cards(9).unwrap().len(), 9);
        assert!(deck.is_empty());
    }

    #[test]
    fn test_draw_at_most_clamps() {
        let mut deck = Deck::new(1).unwrap();
        assert_eq!(deck.draw_at_most(2).len(), 2);
        assert_eq!(deck.draw_at_most(12).len(), 1);
        assert!(deck.is_empty());
        assert!(deck.draw_at_most(3).is_empty());
    }

    #[test]
    fn test_from_cards_rejects_duplicates() {
        let card = Card::new(Color::Red, Shape::Circle, Number::One, Fill::Full);
        assert_eq!(
            Deck::from_cards(vec![card, card]),
            Err(ConfigError::DuplicateCard(card))
        );
    }

    #[test]
    fn test_shuffle_is_deterministic_permutation() {
        let mut a = Deck::standard();
        let mut b = Deck::standard();
        a.shuffle(&mut GameRng::new(7));
        b.shuffle(&mut GameRng::new(7));
        assert_eq!(a, b);
        assert_ne!(a, Deck::standard());

        let mut sorted: Vec<Card> = a.cards().copied().collect();
        sorted.sort();
        let mut original: Vec<Card> = Deck::standard().cards().copied().collect();
        original.sort();
        assert_eq!(sorted, original);
    }
}
