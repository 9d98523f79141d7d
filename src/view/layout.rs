//! Table grid layout: slot <-> pixel mapping.
//!
//! Cards are laid out row-major in three rows with `ceil(n / 3)` columns.
//! A standard table of 12 is 4 x 3; each extra deal of three adds a column.
//! Near the end of the deck the count may not divide evenly (14 cards is
//! 5 columns with one empty trailing cell); clicks on empty cells map to no
//! slot.

use super::card_view::{CARD_HEIGHT, CARD_WIDTH};
use super::shapes::Point;

/// Rows in the table grid.
pub const ROWS: usize = 3;

/// Grid geometry for a table of a given size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableLayout {
    cards: usize,
    columns: usize,
}

impl TableLayout {
    #[must_use]
    pub fn for_cards(cards: usize) -> Self {
        Self {
            cards,
            columns: cards.div_ceil(ROWS),
        }
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Rows actually used. Fewer than three only for tables under 3 cards.
    #[must_use]
    pub fn rows(&self) -> usize {
        if self.columns == 0 {
            0
        } else {
            self.cards.div_ceil(self.columns)
        }
    }

    /// Slot under a click at pixel `(x, y)`, if a card is there.
    #[must_use]
    pub fn slot_at(&self, x: u32, y: u32) -> Option<usize> {
        let column = (x / CARD_WIDTH) as usize;
        let row = (y / CARD_HEIGHT) as usize;
        if column >= self.columns || row >= self.rows() {
            return None;
        }
        let slot = row * self.columns + column;
        (slot < self.cards).then_some(slot)
    }

    /// Top-left corner of the card in `slot`.
    #[must_use]
    pub fn origin(&self, slot: usize) -> Option<Point> {
        if slot >= self.cards {
            return None;
        }
        let column = (slot % self.columns) as u32;
        let row = (slot / self.columns) as u32;
        Some(Point::new(
            f64::from(column * CARD_WIDTH),
            f64::from(row * CARD_HEIGHT),
        ))
    }

    /// Canvas size in pixels needed to show every card.
    #[must_use]
    pub fn canvas_size(&self) -> (u32, u32) {
        (
            self.columns as u32 * CARD_WIDTH,
            self.rows() as u32 * CARD_HEIGHT,
        )
    }
}
