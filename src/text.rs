//! Vector digit glyphs for the drawn-circle counter overlay.
//!
//! The overlay only ever shows digits, so glyphs are seven-segment
//! rectangles emitted straight into the rasterizer. Segment corners go
//! through the viewport matrix, which keeps the label scaling with the
//! rest of the scene and anti-aliased like any other polygon.

use crate::raster::Rasterizer;
use crate::transform::Affine;

// Segment bits: A top, B top-right, C bottom-right, D bottom,
// E bottom-left, F top-left, G middle.
const SEG_A: u8 = 0x01;
const SEG_B: u8 = 0x02;
const SEG_C: u8 = 0x04;
const SEG_D: u8 = 0x08;
const SEG_E: u8 = 0x10;
const SEG_F: u8 = 0x20;
const SEG_G: u8 = 0x40;

const DIGIT_SEGMENTS: [u8; 10] = [
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F,         // 0
    SEG_B | SEG_C,                                         // 1
    SEG_A | SEG_B | SEG_G | SEG_E | SEG_D,                 // 2
    SEG_A | SEG_B | SEG_G | SEG_C | SEG_D,                 // 3
    SEG_F | SEG_G | SEG_B | SEG_C,                         // 4
    SEG_A | SEG_F | SEG_G | SEG_C | SEG_D,                 // 5
    SEG_A | SEG_F | SEG_G | SEG_E | SEG_D | SEG_C,         // 6
    SEG_A | SEG_B | SEG_C,                                 // 7
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G, // 8
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_F | SEG_G,         // 9
];

// Glyph metrics relative to the nominal size (the glyph height).
const GLYPH_WIDTH: f64 = 0.55;
const STROKE: f64 = 0.14;
const ADVANCE: f64 = 0.75;

/// Horizontal space one character occupies, in logical units.
pub fn advance(size: f64) -> f64 {
    size * ADVANCE
}

/// Append the polygons of `text` to `ras`, transformed by `mtx`.
///
/// (x, y) is the top-left corner of the first glyph in logical
/// coordinates, `size` the glyph height. Characters other than ASCII
/// digits advance the pen without drawing.
pub fn add_label(ras: &mut Rasterizer, mtx: &Affine, text: &str, x: f64, y: f64, size: f64) {
    let mut pen_x = x;
    for ch in text.chars() {
        if let Some(d) = ch.to_digit(10) {
            add_digit(ras, mtx, d as usize, pen_x, y, size);
        }
        pen_x += advance(size);
    }
}

fn add_digit(ras: &mut Rasterizer, mtx: &Affine, digit: usize, x: f64, y: f64, size: f64) {
    let w = size * GLYPH_WIDTH;
    let h = size;
    let t = size * STROKE;
    let hh = h * 0.5;
    let segs = DIGIT_SEGMENTS[digit];

    let mut seg = |x0: f64, y0: f64, x1: f64, y1: f64| {
        add_quad(ras, mtx, x + x0, y + y0, x + x1, y + y1);
    };
    if segs & SEG_A != 0 {
        seg(0.0, 0.0, w, t);
    }
    if segs & SEG_B != 0 {
        seg(w - t, 0.0, w, hh);
    }
    if segs & SEG_C != 0 {
        seg(w - t, hh, w, h);
    }
    if segs & SEG_D != 0 {
        seg(0.0, h - t, w, h);
    }
    if segs & SEG_E != 0 {
        seg(0.0, hh, t, h);
    }
    if segs & SEG_F != 0 {
        seg(0.0, 0.0, t, hh);
    }
    if segs & SEG_G != 0 {
        seg(0.0, hh - t * 0.5, w, hh + t * 0.5);
    }
}

fn add_quad(ras: &mut Rasterizer, mtx: &Affine, x0: f64, y0: f64, x1: f64, y1: f64) {
    let corners = [(x0, y0), (x1, y0), (x1, y1), (x0, y1)];
    for (i, &(cx, cy)) in corners.iter().enumerate() {
        let mut tx = cx;
        let mut ty = cy;
        mtx.transform(&mut tx, &mut ty);
        if i == 0 {
            ras.move_to_d(tx, ty);
        } else {
            ras.line_to_d(tx, ty);
        }
    }
    ras.close_polygon();
}

// ============================================================================
// Tests
// ============================================================================
