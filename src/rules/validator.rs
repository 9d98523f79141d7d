//! The set rule.
//!
//! Three cards form a set when, for every attribute, their values are either
//! all the same or all different. Two equal and one different on any single
//! attribute breaks the set.

use crate::cards::{Attribute, Card, Color, Fill, Number, Shape};

/// Check one attribute of a candidate set.
#[must_use]
pub fn attribute_is_valid(attribute: Attribute, a: &Card, b: &Card, c: &Card) -> bool {
    let (x, y, z) = (a.value(attribute), b.value(attribute), c.value(attribute));
    let all_same = x == y && y == z;
    let all_different = x != y && y != z && x != z;
    all_same || all_different
}

/// Check whether three cards form a set.
///
/// Pure and symmetric: the result does not depend on argument order.
#[must_use]
pub fn is_set_valid(a: &Card, b: &Card, c: &Card) -> bool {
    Attribute::ALL
        .iter()
        .all(|&attribute| attribute_is_valid(attribute, a, b, c))
}

/// The unique card that completes a set with `a` and `b`.
///
/// Per attribute: the shared value if `a` and `b` agree, otherwise the
/// remaining third value. With values `0..3` both cases reduce to
/// `(-(a + b)) mod 3`.
#[must_use]
pub fn completing_card(a: &Card, b: &Card) -> Card {
    fn third(x: u8, y: u8) -> usize {
        usize::from((6 - x - y) % 3)
    }

    Card::new(
        Color::ALL[third(a.color().index(), b.color().index())],
        Shape::ALL[third(a.shape().index(), b.shape().index())],
        Number::ALL[third(a.number().index(), b.number().index())],
        Fill::ALL[third(a.fill().index(), b.fill().index())],
    )
}
