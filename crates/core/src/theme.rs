//! Colour themes for the two block kinds.
//!
//! Pure data for renderers; the simulation never looks at colours.

use crate::types::{CellKind, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub block_a: Rgb,
    pub block_b: Rgb,
    pub block_a_dark: Rgb,
    pub block_b_dark: Rgb,
}

impl Theme {
    /// Base colour for a kind, `None` for empty cells
    pub fn light(&self, kind: CellKind) -> Option<Rgb> {
        match kind {
            CellKind::Empty => None,
            CellKind::ColorA => Some(self.block_a),
            CellKind::ColorB => Some(self.block_b),
        }
    }

    /// Shaded colour for a kind, `None` for empty cells
    pub fn dark(&self, kind: CellKind) -> Option<Rgb> {
        match kind {
            CellKind::Empty => None,
            CellKind::ColorA => Some(self.block_a_dark),
            CellKind::ColorB => Some(self.block_b_dark),
        }
    }
}

pub const THEMES: [Theme; 5] = [
    Theme {
        name: "Classic",
        block_a: Rgb::new(255, 153, 36),
        block_b: Rgb::new(219, 219, 219),
        block_a_dark: Rgb::new(184, 105, 15),
        block_b_dark: Rgb::new(143, 143, 143),
    },
    Theme {
        name: "Ocean",
        block_a: Rgb::new(64, 196, 255),
        block_b: Rgb::new(255, 255, 160),
        block_a_dark: Rgb::new(20, 110, 170),
        block_b_dark: Rgb::new(170, 170, 90),
    },
    Theme {
        name: "Forest",
        block_a: Rgb::new(120, 210, 90),
        block_b: Rgb::new(200, 140, 80),
        block_a_dark: Rgb::new(60, 130, 45),
        block_b_dark: Rgb::new(120, 80, 40),
    },
    Theme {
        name: "Neon",
        block_a: Rgb::new(255, 60, 200),
        block_b: Rgb::new(60, 255, 220),
        block_a_dark: Rgb::new(160, 20, 120),
        block_b_dark: Rgb::new(20, 150, 130),
    },
    Theme {
        name: "Mono",
        block_a: Rgb::new(240, 240, 240),
        block_b: Rgb::new(110, 110, 110),
        block_a_dark: Rgb::new(170, 170, 170),
        block_b_dark: Rgb::new(60, 60, 60),
    },
];

pub const THEME_COUNT: usize = THEMES.len();

/// Wrap any integer into a valid theme index
pub fn theme_index(index: i64) -> usize {
    index.rem_euclid(THEME_COUNT as i64) as usize
}

/// Theme for an index, wrapped into range
pub fn theme(index: usize) -> &'static Theme {
    &THEMES[index % THEME_COUNT]
}
