//! Built-in stroke font.
//!
//! Every glyph is a polyline in a 40 x 50 cell (origin top-left, y down). A point
//! with `pen = true` draws from the previous point; `pen = false` lifts the pen and
//! moves. The first point of a glyph is always a move.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Advance used for characters that have no glyph (spaces, unsupported symbols).
pub const DEFAULT_GLYPH_WIDTH: f64 = 20.0;

/// Height of the glyph cell at scale 1.
pub const GLYPH_HEIGHT: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokePoint {
    pub x: f64,
    pub y: f64,
    pub pen: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub points: Vec<StrokePoint>,
}

impl Glyph {
    fn from_table(table: &[(f64, f64, u8)]) -> Self {
        let points = table
            .iter()
            .enumerate()
            .map(|(i, &(x, y, pen))| StrokePoint { x, y, pen: i > 0 && pen == 1 })
            .collect();
        Self { points }
    }

    pub fn width(&self) -> f64 {
        self.points.iter().map(|p| p.x).fold(0.0, f64::max)
    }
}

static STROKE_FONT: Lazy<HashMap<char, Glyph>> = Lazy::new(|| {
    let table: &[(char, &[(f64, f64, u8)])] = &[
        ('A', &[(0.0, 50.0, 0), (20.0, 0.0, 1), (40.0, 50.0, 1), (10.0, 25.0, 0), (30.0, 25.0, 1)]),
        ('B', &[
            (0.0, 0.0, 0), (0.0, 50.0, 1), (20.0, 50.0, 1), (35.0, 40.0, 1), (35.0, 30.0, 1),
            (20.0, 25.0, 1), (0.0, 25.0, 1), (20.0, 25.0, 0), (35.0, 20.0, 1), (35.0, 10.0, 1),
            (20.0, 0.0, 1), (0.0, 0.0, 1),
        ]),
        ('C', &[(40.0, 0.0, 0), (10.0, 0.0, 1), (0.0, 10.0, 1), (0.0, 40.0, 1), (10.0, 50.0, 1), (40.0, 50.0, 1)]),
        ('D', &[(0.0, 0.0, 0), (0.0, 50.0, 1), (25.0, 50.0, 1), (40.0, 35.0, 1), (40.0, 15.0, 1), (25.0, 0.0, 1), (0.0, 0.0, 1)]),
        ('E', &[(40.0, 0.0, 0), (0.0, 0.0, 1), (0.0, 25.0, 1), (30.0, 25.0, 1), (0.0, 25.0, 0), (0.0, 50.0, 1), (40.0, 50.0, 1)]),
        ('F', &[(40.0, 0.0, 0), (0.0, 0.0, 1), (0.0, 50.0, 1), (0.0, 25.0, 0), (30.0, 25.0, 1)]),
        ('G', &[
            (40.0, 10.0, 0), (30.0, 0.0, 1), (10.0, 0.0, 1), (0.0, 10.0, 1), (0.0, 40.0, 1),
            (10.0, 50.0, 1), (30.0, 50.0, 1), (40.0, 40.0, 1), (40.0, 28.0, 1), (22.0, 28.0, 1),
        ]),
        ('H', &[(0.0, 0.0, 0), (0.0, 50.0, 1), (40.0, 0.0, 0), (40.0, 50.0, 1), (0.0, 25.0, 0), (40.0, 25.0, 1)]),
        ('I', &[(5.0, 0.0, 0), (35.0, 0.0, 1), (20.0, 0.0, 0), (20.0, 50.0, 1), (5.0, 50.0, 0), (35.0, 50.0, 1)]),
        ('J', &[(10.0, 0.0, 0), (40.0, 0.0, 1), (30.0, 0.0, 0), (30.0, 40.0, 1), (20.0, 50.0, 1), (10.0, 50.0, 1), (0.0, 40.0, 1)]),
        ('K', &[(0.0, 0.0, 0), (0.0, 50.0, 1), (40.0, 0.0, 0), (0.0, 28.0, 1), (12.0, 20.0, 0), (40.0, 50.0, 1)]),
        ('L', &[(0.0, 0.0, 0), (0.0, 50.0, 1), (35.0, 50.0, 1)]),
        ('M', &[(0.0, 50.0, 0), (0.0, 0.0, 1), (20.0, 25.0, 1), (40.0, 0.0, 1), (40.0, 50.0, 1)]),
        ('N', &[(0.0, 50.0, 0), (0.0, 0.0, 1), (40.0, 50.0, 1), (40.0, 0.0, 1)]),
        ('O', &[
            (10.0, 0.0, 0), (30.0, 0.0, 1), (40.0, 10.0, 1), (40.0, 40.0, 1), (30.0, 50.0, 1),
            (10.0, 50.0, 1), (0.0, 40.0, 1), (0.0, 10.0, 1), (10.0, 0.0, 1),
        ]),
        ('P', &[(0.0, 50.0, 0), (0.0, 0.0, 1), (28.0, 0.0, 1), (38.0, 8.0, 1), (38.0, 20.0, 1), (28.0, 28.0, 1), (0.0, 28.0, 1)]),
        ('Q', &[
            (10.0, 0.0, 0), (30.0, 0.0, 1), (40.0, 10.0, 1), (40.0, 40.0, 1), (30.0, 50.0, 1),
            (10.0, 50.0, 1), (0.0, 40.0, 1), (0.0, 10.0, 1), (10.0, 0.0, 1), (24.0, 36.0, 0), (40.0, 50.0, 1),
        ]),
        ('R', &[
            (0.0, 50.0, 0), (0.0, 0.0, 1), (28.0, 0.0, 1), (38.0, 8.0, 1), (38.0, 20.0, 1),
            (28.0, 28.0, 1), (0.0, 28.0, 1), (18.0, 28.0, 0), (38.0, 50.0, 1),
        ]),
        ('S', &[
            (40.0, 8.0, 0), (32.0, 0.0, 1), (8.0, 0.0, 1), (0.0, 8.0, 1), (0.0, 18.0, 1), (8.0, 25.0, 1),
            (32.0, 25.0, 1), (40.0, 32.0, 1), (40.0, 42.0, 1), (32.0, 50.0, 1), (8.0, 50.0, 1), (0.0, 42.0, 1),
        ]),
        ('T', &[(0.0, 0.0, 0), (40.0, 0.0, 1), (20.0, 0.0, 0), (20.0, 50.0, 1)]),
        ('U', &[(0.0, 0.0, 0), (0.0, 40.0, 1), (10.0, 50.0, 1), (30.0, 50.0, 1), (40.0, 40.0, 1), (40.0, 0.0, 1)]),
        ('V', &[(0.0, 0.0, 0), (20.0, 50.0, 1), (40.0, 0.0, 1)]),
        ('W', &[(0.0, 0.0, 0), (10.0, 50.0, 1), (20.0, 20.0, 1), (30.0, 50.0, 1), (40.0, 0.0, 1)]),
        ('X', &[(0.0, 0.0, 0), (40.0, 50.0, 1), (40.0, 0.0, 0), (0.0, 50.0, 1)]),
        ('Y', &[(0.0, 0.0, 0), (20.0, 25.0, 1), (40.0, 0.0, 1), (20.0, 25.0, 0), (20.0, 50.0, 1)]),
        ('Z', &[(0.0, 0.0, 0), (40.0, 0.0, 1), (0.0, 50.0, 1), (40.0, 50.0, 1)]),
        ('0', &[
            (10.0, 0.0, 0), (30.0, 0.0, 1), (40.0, 10.0, 1), (40.0, 40.0, 1), (30.0, 50.0, 1),
            (10.0, 50.0, 1), (0.0, 40.0, 1), (0.0, 10.0, 1), (10.0, 0.0, 1), (8.0, 42.0, 0), (32.0, 8.0, 1),
        ]),
        ('1', &[(8.0, 10.0, 0), (20.0, 0.0, 1), (20.0, 50.0, 1), (8.0, 50.0, 0), (32.0, 50.0, 1)]),
        ('2', &[(0.0, 10.0, 0), (10.0, 0.0, 1), (30.0, 0.0, 1), (40.0, 10.0, 1), (40.0, 20.0, 1), (0.0, 50.0, 1), (40.0, 50.0, 1)]),
        ('3', &[
            (0.0, 0.0, 0), (40.0, 0.0, 1), (20.0, 22.0, 1), (32.0, 22.0, 1), (40.0, 30.0, 1),
            (40.0, 42.0, 1), (32.0, 50.0, 1), (8.0, 50.0, 1), (0.0, 42.0, 1),
        ]),
        ('4', &[(30.0, 50.0, 0), (30.0, 0.0, 1), (0.0, 35.0, 1), (40.0, 35.0, 1)]),
        ('5', &[
            (40.0, 0.0, 0), (0.0, 0.0, 1), (0.0, 22.0, 1), (30.0, 22.0, 1), (40.0, 30.0, 1),
            (40.0, 42.0, 1), (30.0, 50.0, 1), (0.0, 50.0, 1),
        ]),
        ('6', &[
            (35.0, 0.0, 0), (15.0, 0.0, 1), (0.0, 15.0, 1), (0.0, 40.0, 1), (10.0, 50.0, 1), (30.0, 50.0, 1),
            (40.0, 40.0, 1), (40.0, 30.0, 1), (30.0, 22.0, 1), (10.0, 22.0, 1), (0.0, 30.0, 1),
        ]),
        ('7', &[(0.0, 0.0, 0), (40.0, 0.0, 1), (15.0, 50.0, 1)]),
        ('8', &[
            (10.0, 0.0, 0), (30.0, 0.0, 1), (38.0, 7.0, 1), (38.0, 18.0, 1), (30.0, 25.0, 1), (10.0, 25.0, 1),
            (2.0, 18.0, 1), (2.0, 7.0, 1), (10.0, 0.0, 1), (10.0, 25.0, 0), (0.0, 33.0, 1), (0.0, 42.0, 1),
            (10.0, 50.0, 1), (30.0, 50.0, 1), (40.0, 42.0, 1), (40.0, 33.0, 1), (30.0, 25.0, 1),
        ]),
        ('9', &[
            (40.0, 20.0, 0), (30.0, 28.0, 1), (10.0, 28.0, 1), (0.0, 20.0, 1), (0.0, 8.0, 1), (10.0, 0.0, 1),
            (30.0, 0.0, 1), (40.0, 8.0, 1), (40.0, 35.0, 1), (25.0, 50.0, 1), (5.0, 50.0, 1),
        ]),
        ('.', &[(18.0, 46.0, 0), (22.0, 46.0, 1), (22.0, 50.0, 1), (18.0, 50.0, 1), (18.0, 46.0, 1)]),
        (',', &[(22.0, 42.0, 0), (16.0, 50.0, 1)]),
        ('!', &[(20.0, 0.0, 0), (20.0, 34.0, 1), (20.0, 44.0, 0), (20.0, 50.0, 1)]),
        ('?', &[
            (0.0, 10.0, 0), (10.0, 0.0, 1), (30.0, 0.0, 1), (40.0, 10.0, 1), (40.0, 18.0, 1),
            (20.0, 30.0, 1), (20.0, 36.0, 1), (20.0, 44.0, 0), (20.0, 50.0, 1),
        ]),
        ('-', &[(5.0, 25.0, 0), (35.0, 25.0, 1)]),
    ];

    table
        .iter()
        .map(|(ch, points)| (*ch, Glyph::from_table(points)))
        .collect()
});

pub fn glyph(ch: char) -> Option<&'static Glyph> {
    STROKE_FONT.get(&ch)
}

/// Widest local x of the glyph, or [`DEFAULT_GLYPH_WIDTH`] when the font has none.
pub fn glyph_width(ch: char) -> f64 {
    glyph(ch).map_or(DEFAULT_GLYPH_WIDTH, Glyph::width)
}

pub fn supported_chars() -> impl Iterator<Item = char> {
    STROKE_FONT.keys().copied()
}
