//! Glyph geometry and shape dispatch.
//!
//! Drawing goes through the `Canvas` trait, so any toolkit can host it. Each
//! `Shape` maps to one renderer function through `renderer_for`; the match
//! is resolved once per card, not per glyph.

use crate::cards::{Card, Color, Fill, Shape};

/// Segments used to approximate a circle.
pub const CIRCLE_SEGMENTS: usize = 30;

/// A point in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// How a glyph's interior is painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillStyle {
    /// Painted in the card color.
    Solid,
    /// Card color through a 25% stipple.
    Stipple25,
    /// Outline only.
    Hollow,
}

impl From<Fill> for FillStyle {
    fn from(fill: Fill) -> Self {
        match fill {
            Fill::Full => FillStyle::Solid,
            Fill::Half => FillStyle::Stipple25,
            Fill::Empty => FillStyle::Hollow,
        }
    }
}

/// Stroke and fill for one glyph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeStyle {
    pub outline: Color,
    pub fill: FillStyle,
    pub width: f64,
}

impl ShapeStyle {
    /// Outline width used for card glyphs.
    pub const GLYPH_OUTLINE: f64 = 2.0;

    /// Style for the glyphs of `card`.
    #[must_use]
    pub fn for_card(card: &Card) -> Self {
        Self {
            outline: card.color(),
            fill: card.fill().into(),
            width: Self::GLYPH_OUTLINE,
        }
    }
}

/// Drawing surface provided by the host toolkit.
pub trait Canvas {
    /// Closed polygon through `points`.
    fn polygon(&mut self, points: &[Point], style: &ShapeStyle);

    /// Axis-aligned rectangle glyph.
    fn rectangle(&mut self, top_left: Point, bottom_right: Point, style: &ShapeStyle);

    /// Plain card background. `selected` cards are drawn highlighted.
    fn card_background(&mut self, top_left: Point, bottom_right: Point, selected: bool);
}

/// Draws one glyph of radius `r` centered on a point.
pub type ShapeRenderer = fn(&mut dyn Canvas, Point, f64, &ShapeStyle);

/// The renderer for a shape.
#[must_use]
pub fn renderer_for(shape: Shape) -> ShapeRenderer {
    match shape {
        Shape::Circle => draw_circle,
        Shape::Triangle => draw_triangle,
        Shape::Square => draw_square,
    }
}

/// `segments + 1` points around a circle, the last repeating the first.
#[must_use]
pub fn circle_points(center: Point, r: f64, segments: usize) -> Vec<Point> {
    let step = std::f64::consts::TAU / segments as f64;
    (0..=segments)
        .map(|i| {
            let angle = step * i as f64;
            Point::new(center.x + angle.cos() * r, center.y + angle.sin() * r)
        })
        .collect()
}

/// Upward triangle inscribed in the square of half-width `r`.
#[must_use]
pub fn triangle_points(center: Point, r: f64) -> [Point; 3] {
    [
        Point::new(center.x - r, center.y + r),
        Point::new(center.x, center.y - r),
        Point::new(center.x + r, center.y + r),
    ]
}

/// Top-left and bottom-right corners of the square of half-width `r`.
#[must_use]
pub fn square_corners(center: Point, r: f64) -> (Point, Point) {
    (
        Point::new(center.x - r, center.y - r),
        Point::new(center.x + r, center.y + r),
    )
}

fn draw_circle(canvas: &mut dyn Canvas, center: Point, r: f64, style: &ShapeStyle) {
    canvas.polygon(&circle_points(center, r, CIRCLE_SEGMENTS), style);
}

fn draw_triangle(canvas: &mut dyn Canvas, center: Point, r: f64, style: &ShapeStyle) {
    canvas.polygon(&triangle_points(center, r), style);
}

fn draw_square(canvas: &mut dyn Canvas, center: Point, r: f64, style: &ShapeStyle) {
    let (top_left, bottom_right) = square_corners(center, r);
    canvas.rectangle(top_left, bottom_right, style);
}
