//! Direction of a move and the display attributes derived from it

use std::fmt;

/// Movement of a value relative to its baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Up,
    Down,
    #[default]
    Flat,
}

impl Direction {
    /// Compare a new value against the previous one.
    /// Equal (or incomparable) values are `Flat`.
    pub fn between(previous: f64, current: f64) -> Self {
        if current > previous {
            Direction::Up
        } else if current < previous {
            Direction::Down
        } else {
            Direction::Flat
        }
    }

    /// Glyph shown next to the price
    pub fn glyph(&self) -> &'static str {
        match self {
            Direction::Up => "↑",
            Direction::Down => "↓",
            Direction::Flat => "-",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Flat => "flat",
        };
        f.write_str(label)
    }
}

/// Emphasis applied to direction cues. Only the top of the book is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTier {
    Highlighted,
    Muted,
}

/// Derived per-side display attributes, recomputed on every render pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayAttributes {
    pub direction: Direction,
    pub color_tier: ColorTier,
    /// Always within [0, 100]
    pub bar_width_percent: f64,
}

/// One side (bid or offer) of a rendered row
#[derive(Debug, Clone, PartialEq)]
pub struct CellDisplay {
    pub attributes: DisplayAttributes,
    pub price_text: String,
    pub quantity_text: String,
}
