//! Immutable card values.
//!
//! A `Card` is a plain 4-tuple: two cards with the same attribute values are
//! the same card. There is no entity ID and no mutable state.

use serde::{Deserialize, Serialize};

use super::attributes::{Attribute, Color, Fill, Number, Shape};
use crate::core::error::ConfigError;

/// A Set card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    color: Color,
    shape: Shape,
    number: Number,
    fill: Fill,
}

impl Card {
    /// Create a card from one value per attribute.
    #[must_use]
    pub const fn new(color: Color, shape: Shape, number: Number, fill: Fill) -> Self {
        Self {
            color,
            shape,
            number,
            fill,
        }
    }

    /// Create a card from value indices in attribute order
    /// (color, shape, number, fill).
    ///
    /// Fails if any index is outside `0..3`.
    pub fn from_indices(indices: [u8; 4]) -> Result<Self, ConfigError> {
        let out_of_domain = |attribute: Attribute, index: u8| ConfigError::ValueOutOfDomain {
            attribute,
            index,
        };
        let [c, s, n, f] = indices;

        Ok(Self {
            color: Color::from_index(c).ok_or(out_of_domain(Attribute::Color, c))?,
            shape: Shape::from_index(s).ok_or(out_of_domain(Attribute::Shape, s))?,
            number: Number::from_index(n).ok_or(out_of_domain(Attribute::Number, n))?,
            fill: Fill::from_index(f).ok_or(out_of_domain(Attribute::Fill, f))?,
        })
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    #[must_use]
    pub const fn number(&self) -> Number {
        self.number
    }

    #[must_use]
    pub const fn fill(&self) -> Fill {
        self.fill
    }

    /// Value index for one attribute.
    #[must_use]
    pub const fn value(&self, attribute: Attribute) -> u8 {
        match attribute {
            Attribute::Color => self.color.index(),
            Attribute::Shape => self.shape.index(),
            Attribute::Number => self.number.index(),
            Attribute::Fill => self.fill.index(),
        }
    }

    /// All value indices in attribute order.
    #[must_use]
    pub const fn indices(&self) -> [u8; 4] {
        [
            self.color.index(),
            self.shape.index(),
            self.number.index(),
            self.fill.index(),
        ]
    }

    /// Canonical identity in `0..81`: the value indices read as a base-3
    /// number, color most significant.
    #[must_use]
    pub fn id(&self) -> u8 {
        self.indices().iter().fold(0, |acc, &v| acc * 3 + v)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{},{}", self.color, self.shape, self.number, self.fill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let card = Card::new(Color::Green, Shape::Square, Number::Two, Fill::Half);
        assert_eq!(card.color(), Color::Green);
        assert_eq!(card.shape(), Shape::Square);
        assert_eq!(card.number(), Number::Two);
        assert_eq!(card.fill(), Fill::Half);
        assert_eq!(card.indices(), [1, 2, 1, 1]);
        assert_eq!(card.value(Attribute::Shape), 2);
    }

    #[test]
    fn test_from_indices() {
        let card = Card::from_indices([2, 0, 1, 2]).unwrap();
        assert_eq!(card, Card::new(Color::Blue, Shape::Circle, Number::Two, Fill::Empty));
    }

    #[test]
    fn test_from_indices_rejects_out_of_domain() {
        assert_eq!(
            Card::from_indices([0, 0, 3, 0]),
            Err(ConfigError::ValueOutOfDomain {
                attribute: Attribute::Number,
                index: 3,
            })
        );
        assert_eq!(
            Card::from_indices([9, 0, 0, 0]),
            Err(ConfigError::ValueOutOfDomain {
                attribute: Attribute::Color,
                index: 9,
            })
        );
    }

    #[test]
    fn test_display() {
        let card = Card::new(Color::Red, Shape::Circle, Number::One, Fill::Full);
        assert_eq!(card.to_string(), "red,circle,one,full");
    }

    #[test]
    fn test_id_is_unique_and_dense() {
        let mut seen = [false; 81];
        for c in 0..3 {
            for s in 0..3 {
                for n in 0..3 {
                    for f in 0..3 {
                        let card = Card::from_indices([c, s, n, f]).unwrap();
                        let id = usize::from(card.id());
                        assert!(!seen[id]);
                        seen[id] = true;
                    }
                }
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_structural_equality() {
        let a = Card::new(Color::Blue, Shape::Triangle, Number::Three, Fill::Empty);
        let b = Card::from_indices(a.indices()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.id(), b.id());
    }
}
