//! Toolkit-agnostic rendering helpers.
//!
//! Pure functions only: no window, no event loop. A host UI supplies a
//! `Canvas`, asks `TableLayout` where cards go and which slot a click hit,
//! and calls `draw_card` per slot.

pub mod card_view;
pub mod layout;
pub mod shapes;

use std::time::Duration;

pub use card_view::{draw_card, glyph_centers, CARD_HEIGHT, CARD_WIDTH, GLYPH_RADIUS};
pub use layout::TableLayout;
pub use shapes::{renderer_for, Canvas, FillStyle, Point, ShapeRenderer, ShapeStyle};

/// Status-bar timer text, e.g. `"Time: 3:07"`.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("Time: {}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::ZERO), "Time: 0:00");
        assert_eq!(format_elapsed(Duration::from_millis(187_900)), "Time: 3:07");
        assert_eq!(format_elapsed(Duration::from_secs(3600)), "Time: 60:00");
    }
}
