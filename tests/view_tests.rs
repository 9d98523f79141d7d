//! Rendering helper integration tests.
//!
//! A recording canvas stands in for a UI toolkit; the tests check what a
//! full table draw asks it to paint and how clicks map back to slots.

use set_engine::view::{
    draw_card, format_elapsed, Canvas, FillStyle, Point, ShapeStyle, TableLayout, CARD_HEIGHT,
    CARD_WIDTH,
};
use set_engine::{Card, Deck, GameSession};
use std::time::Duration;

#[derive(Default)]
struct CountingCanvas {
    backgrounds: usize,
    selected: usize,
    glyphs: usize,
    hollow: usize,
}

impl Canvas for CountingCanvas {
    fn polygon(&mut self, _points: &[Point], style: &ShapeStyle) {
        self.glyph(style);
    }

    fn rectangle(&mut self, _top_left: Point, _bottom_right: Point, style: &ShapeStyle) {
        self.glyph(style);
    }

    fn card_background(&mut self, _top_left: Point, _bottom_right: Point, selected: bool) {
        self.backgrounds += 1;
        if selected {
            self.selected += 1;
        }
    }
}

impl CountingCanvas {
    fn glyph(&mut self, style: &ShapeStyle) {
        self.glyphs += 1;
        if style.fill == FillStyle::Hollow {
            self.hollow += 1;
        }
    }
}

fn draw_table(canvas: &mut CountingCanvas, session: &GameSession, picked: &[usize]) {
    let layout = TableLayout::for_cards(session.table().len());
    for (slot, card) in session.table().cards().iter().enumerate() {
        let origin = layout.origin(slot).unwrap();
        draw_card(canvas, card, origin, picked.contains(&slot));
    }
}

#[test]
fn test_draw_whole_table() {
    let session = GameSession::new(Deck::standard());
    let mut canvas = CountingCanvas::default();

    draw_table(&mut canvas, &session, &[0, 4]);

    let expected_glyphs: usize = session
        .table()
        .cards()
        .iter()
        .map(|card| card.number().count())
        .sum();
    assert_eq!(canvas.backgrounds, 12);
    assert_eq!(canvas.selected, 2);
    assert_eq!(canvas.glyphs, expected_glyphs);
}

#[test]
fn test_empty_fill_draws_hollow_glyphs() {
    let card = Card::from_indices([1, 2, 2, 2]).unwrap();
    let mut canvas = CountingCanvas::default();

    draw_card(&mut canvas, &card, Point::new(0.0, 0.0), false);

    assert_eq!(canvas.glyphs, 3);
    assert_eq!(canvas.hollow, 3);
}

#[test]
fn test_click_round_trip_over_layouts() {
    for cards in [3, 9, 12, 14, 15, 18, 20] {
        let layout = TableLayout::for_cards(cards);
        for slot in 0..cards {
            let origin = layout.origin(slot).unwrap();
            let x = origin.x as u32 + CARD_WIDTH / 2;
            let y = origin.y as u32 + CARD_HEIGHT / 2;
            assert_eq!(layout.slot_at(x, y), Some(slot), "{cards} cards, slot {slot}");
        }
        assert_eq!(layout.origin(cards), None);
    }
}

#[test]
fn test_growing_table_adds_columns() {
    assert_eq!(TableLayout::for_cards(12).canvas_size(), (4 * CARD_WIDTH, 3 * CARD_HEIGHT));
    assert_eq!(TableLayout::for_cards(15).canvas_size(), (5 * CARD_WIDTH, 3 * CARD_HEIGHT));

    // 14 cards leave the last cell of the grid empty.
    let layout = TableLayout::for_cards(14);
    assert_eq!(layout.columns(), 5);
    assert_eq!(layout.slot_at(4 * CARD_WIDTH + 1, 2 * CARD_HEIGHT + 1), None);
    assert_eq!(layout.slot_at(3 * CARD_WIDTH + 1, 2 * CARD_HEIGHT + 1), Some(13));
}

#[test]
fn test_timer_text() {
    assert_eq!(format_elapsed(Duration::from_secs(59)), "Time: 0:59");
    assert_eq!(format_elapsed(Duration::from_secs(61)), "Time: 1:01");
}
