//! Sixteen-segment stroke font.
//!
//! Every glyph is a set of straight strokes inside a unit cell, so labels go
//! through the same triangle pipeline as the bubbles. Lowercase letters are
//! drawn as uppercase and characters without a glyph are left blank.

use glam::Vec2;

const A1: u16 = 1 << 0;
const A2: u16 = 1 << 1;
const B: u16 = 1 << 2;
const C: u16 = 1 << 3;
const D1: u16 = 1 << 4;
const D2: u16 = 1 << 5;
const E: u16 = 1 << 6;
const F: u16 = 1 << 7;
const G1: u16 = 1 << 8;
const G2: u16 = 1 << 9;
const H: u16 = 1 << 10;
const I: u16 = 1 << 11;
const J: u16 = 1 << 12;
const K: u16 = 1 << 13;
const L: u16 = 1 << 14;
const M: u16 = 1 << 15;

const RING: u16 = A1 | A2 | B | C | D1 | D2 | E | F;

/// Stroke endpoints in the unit cell, origin top left and y down. Indexed by
/// bit position.
const SEGMENTS: [(Vec2, Vec2); 16] = [
    (Vec2::new(0.0, 0.0), Vec2::new(0.5, 0.0)),
    (Vec2::new(0.5, 0.0), Vec2::new(1.0, 0.0)),
    (Vec2::new(1.0, 0.0), Vec2::new(1.0, 0.5)),
    (Vec2::new(1.0, 0.5), Vec2::new(1.0, 1.0)),
    (Vec2::new(0.0, 1.0), Vec2::new(0.5, 1.0)),
    (Vec2::new(0.5, 1.0), Vec2::new(1.0, 1.0)),
    (Vec2::new(0.0, 0.5), Vec2::new(0.0, 1.0)),
    (Vec2::new(0.0, 0.0), Vec2::new(0.0, 0.5)),
    (Vec2::new(0.0, 0.5), Vec2::new(0.5, 0.5)),
    (Vec2::new(0.5, 0.5), Vec2::new(1.0, 0.5)),
    (Vec2::new(0.0, 0.0), Vec2::new(0.5, 0.5)),
    (Vec2::new(0.5, 0.0), Vec2::new(0.5, 0.5)),
    (Vec2::new(1.0, 0.0), Vec2::new(0.5, 0.5)),
    (Vec2::new(0.5, 0.5), Vec2::new(1.0, 1.0)),
    (Vec2::new(0.5, 0.5), Vec2::new(0.5, 1.0)),
    (Vec2::new(0.5, 0.5), Vec2::new(0.0, 1.0)),
];

/// Cell size relative to the font size.
const CELL: Vec2 = Vec2::new(0.4, 0.7);

/// Lit segments of `c`.
pub fn segments(c: char) -> u16 {
    match c.to_ascii_uppercase() {
        'A' => A1 | A2 | B | C | E | F | G1 | G2,
        'B' => A1 | A2 | B | C | D1 | D2 | G2 | I | L,
        'C' => A1 | A2 | D1 | D2 | E | F,
        'D' => A1 | A2 | B | C | D1 | D2 | I | L,
        'E' => A1 | A2 | D1 | D2 | E | F | G1,
        'F' => A1 | A2 | E | F | G1,
        'G' => A1 | A2 | C | D1 | D2 | E | F | G2,
        'H' => B | C | E | F | G1 | G2,
        'I' => A1 | A2 | D1 | D2 | I | L,
        'J' => B | C | D1 | D2 | E,
        'K' => E | F | G1 | J | K,
        'L' => D1 | D2 | E | F,
        'M' => B | C | E | F | H | J,
        'N' => B | C | E | F | H | K,
        'O' | '0' => RING,
        'P' => A1 | A2 | B | E | F | G1 | G2,
        'Q' => RING | K,
        'R' => A1 | A2 | B | E | F | G1 | G2 | K,
        'S' | '5' => A1 | A2 | C | D1 | D2 | F | G1 | G2,
        'T' => A1 | A2 | I | L,
        'U' => B | C | D1 | D2 | E | F,
        'V' => E | F | J | M,
        'W' => B | C | E | F | K | M,
        'X' => H | J | K | M,
        'Y' => H | J | L,
        'Z' => A1 | A2 | D1 | D2 | J | M,
        '1' => B | C,
        '2' => A1 | A2 | B | D1 | D2 | E | G1 | G2,
        '3' => A1 | A2 | B | C | D1 | D2 | G2,
        '4' => B | C | F | G1 | G2,
        '6' => A1 | A2 | C | D1 | D2 | E | F | G1 | G2,
        '7' => A1 | A2 | B | C,
        '8' => RING | G1 | G2,
        '9' => A1 | A2 | B | C | D1 | D2 | F | G1 | G2,
        '-' => G1 | G2,
        '\'' => I,
        '/' => J | M,
        _ => 0,
    }
}

/// Strokes for one line of `text` centered on `center`, one glyph every
/// `advance` pixels.
pub fn layout(text: &str, center: Vec2, font_size: f32, advance: f32) -> Vec<(Vec2, Vec2)> {
    let cell = CELL * font_size;
    let count = text.chars().count() as f32;
    let left = center.x - count * advance / 2.0 + (advance - cell.x) / 2.0;
    let top = center.y - cell.y / 2.0;

    let mut strokes = vec![];
    for (i, c) in text.chars().enumerate() {
        let origin = Vec2::new(left + i as f32 * advance, top);
        let lit = segments(c);
        for (bit, (from, to)) in SEGMENTS.iter().enumerate() {
            if lit & (1 << bit) != 0 {
                strokes.push((origin + *from * cell, origin + *to * cell));
            }
        }
    }
    strokes
}
