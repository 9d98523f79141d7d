//! Card face layout.
//!
//! A card face is a background rectangle with one to three glyphs stacked
//! down its vertical center line, evenly spaced.

use smallvec::SmallVec;

use super::shapes::{renderer_for, Canvas, Point, ShapeStyle};
use crate::cards::Card;

pub const CARD_WIDTH: u32 = 225;
pub const CARD_HEIGHT: u32 = 300;
pub const GLYPH_RADIUS: f64 = 30.0;

/// Glyph centers for `card` drawn with its top-left corner at `origin`.
///
/// Glyph `i` of `n` sits at `CARD_HEIGHT / (n + 1) * (i + 1)` below the
/// top edge, in whole pixels.
#[must_use]
pub fn glyph_centers(card: &Card, origin: Point) -> SmallVec<[Point; 3]> {
    let n = card.number().count() as u32;
    let x = origin.x + f64::from(CARD_WIDTH / 2);
    let spacing = CARD_HEIGHT / (n + 1);
    (1..=n)
        .map(|i| Point::new(x, origin.y + f64::from(spacing * i)))
        .collect()
}

/// Draw `card` with its top-left corner at `origin`.
pub fn draw_card(canvas: &mut dyn Canvas, card: &Card, origin: Point, selected: bool) {
    let bottom_right = Point::new(
        origin.x + f64::from(CARD_WIDTH),
        origin.y + f64::from(CARD_HEIGHT),
    );
    canvas.card_background(origin, bottom_right, selected);

    let render = renderer_for(card.shape());
    let style = ShapeStyle::for_card(card);
    for center in glyph_centers(card, origin) {
        render(canvas, center, GLYPH_RADIUS, &style);
    }
}
