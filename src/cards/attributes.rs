//! The attribute space: four axes, three values each.
//!
//! Every card carries one value per attribute:
//!
//! | Attribute | Values                   |
//! |-----------|--------------------------|
//! | Color     | red, green, blue         |
//! | Shape     | circle, triangle, square |
//! | Number    | one, two, three          |
//! | Fill      | full, half, none         |
//!
//! Values are addressed by index `0..3` in the order above. The index is what
//! the set rule compares, and what `Card::from_indices` validates.

use serde::{Deserialize, Serialize};

/// Number of values each attribute takes.
pub const VALUES_PER_ATTRIBUTE: u8 = 3;

macro_rules! attribute_values {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// All values, in index order.
            pub const ALL: [Self; 3] = [$(Self::$variant),+];

            /// Position of this value in `ALL`.
            #[must_use]
            pub const fn index(self) -> u8 {
                self as u8
            }

            /// Value at `index`, or `None` outside `0..3`.
            #[must_use]
            pub fn from_index(index: u8) -> Option<Self> {
                Self::ALL.get(usize::from(index)).copied()
            }

            /// Lowercase display name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

attribute_values! {
    /// Card color.
    Color { Red => "red", Green => "green", Blue => "blue" }
}

attribute_values! {
    /// Glyph shape.
    Shape { Circle => "circle", Triangle => "triangle", Square => "square" }
}

attribute_values! {
    /// How many glyphs the card shows.
    Number { One => "one", Two => "two", Three => "three" }
}

attribute_values! {
    /// Glyph shading. `Empty` is the outline-only "none" fill.
    Fill { Full => "full", Half => "half", Empty => "none" }
}

impl Number {
    /// Glyph count (1-3).
    #[must_use]
    pub const fn count(self) -> usize {
        self as usize + 1
    }
}

/// One of the four attribute axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Color,
    Shape,
    Number,
    Fill,
}

impl Attribute {
    /// All attributes in canonical order. Decks vary the first
    /// `attribute_count` of these.
    pub const ALL: [Attribute; 4] = [
        Attribute::Color,
        Attribute::Shape,
        Attribute::Number,
        Attribute::Fill,
    ];

    /// Lowercase display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Attribute::Color => "color",
            Attribute::Shape => "shape",
            Attribute::Number => "number",
            Attribute::Fill => "fill",
        }
    }

    /// Display names of this attribute's values, in index order.
    #[must_use]
    pub fn value_names(self) -> [&'static str; 3] {
        match self {
            Attribute::Color => Color::ALL.map(Color::name),
            Attribute::Shape => Shape::ALL.map(Shape::name),
            Attribute::Number => Number::ALL.map(Number::name),
            Attribute::Fill => Fill::ALL.map(Fill::name),
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
