//! Color types: floating point `Rgba` for generation-time math and `Rgba8`
//! for the pixel buffer, with the fixed-point helpers used by alpha-over
//! blending.

use crate::basics::{uround, CoverType};

/// RGBA color with f64 components, nominally in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn new_rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Copy of `c` with its alpha replaced.
    pub fn with_opacity(c: &Rgba, a: f64) -> Self {
        Self { a, ..*c }
    }

    pub fn white() -> Self {
        Self::new_rgb(1.0, 1.0, 1.0)
    }

    pub fn black() -> Self {
        Self::new_rgb(0.0, 0.0, 0.0)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

/// RGBA color with 8 bits per component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BASE_MASK: u32 = 255;
    const BASE_SHIFT: u32 = 8;
    const BASE_MSB: u32 = 1 << (Self::BASE_SHIFT - 1);

    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn new_opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Quantize an `Rgba`, clamping each component into [0, 1] first.
    pub fn from_rgba(c: &Rgba) -> Self {
        Self {
            r: Self::from_double(c.r),
            g: Self::from_double(c.g),
            b: Self::from_double(c.b),
            a: Self::from_double(c.a),
        }
    }

    pub fn from_double(v: f64) -> u8 {
        uround(v.clamp(0.0, 1.0) * Self::BASE_MASK as f64) as u8
    }

    /// Fixed-point multiply, exact over u8: `(a * b + 128) >> 8` with
    /// rounding correction.
    #[inline]
    pub fn multiply(a: u8, b: u8) -> u8 {
        let t: u32 = a as u32 * b as u32 + Self::BASE_MSB;
        (((t >> Self::BASE_SHIFT) + t) >> Self::BASE_SHIFT) as u8
    }

    /// Multiply a color component by a coverage value.
    #[inline]
    pub fn mult_cover(a: u8, cover: CoverType) -> u8 {
        Self::multiply(a, cover)
    }

    /// Interpolate p toward q by a.
    #[inline]
    pub fn lerp(p: u8, q: u8, a: u8) -> u8 {
        let t = (q as i32 - p as i32) * a as i32 + Self::BASE_MSB as i32 - (p > q) as i32;
        (p as i32 + (((t >> Self::BASE_SHIFT) + t) >> Self::BASE_SHIFT)) as u8
    }
}

// ============================================================================
// Tests
// ============================================================================
