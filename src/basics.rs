//! Foundation types shared by the rendering pipeline: rounding helpers,
//! path commands, and the `VertexSource` trait that geometry generators
//! implement.

/// Coverage value type for anti-aliased blending (0 = none, 255 = full).
pub type CoverType = u8;

pub const COVER_FULL: CoverType = 255;

pub const PI: f64 = std::f64::consts::PI;

/// Round to nearest i32.
#[inline]
pub fn iround(v: f64) -> i32 {
    if v < 0.0 {
        (v - 0.5) as i32
    } else {
        (v + 0.5) as i32
    }
}

/// Round to nearest u32 (v must be non-negative).
#[inline]
pub fn uround(v: f64) -> u32 {
    (v + 0.5) as u32
}

// ============================================================================
// Path commands
// ============================================================================

pub const PATH_CMD_STOP: u32 = 0;
pub const PATH_CMD_MOVE_TO: u32 = 1;
pub const PATH_CMD_LINE_TO: u32 = 2;
pub const PATH_CMD_END_POLY: u32 = 0x0F;
pub const PATH_CMD_MASK: u32 = 0x0F;

pub const PATH_FLAGS_CCW: u32 = 0x10;
pub const PATH_FLAGS_CLOSE: u32 = 0x40;

#[inline]
pub fn is_vertex(c: u32) -> bool {
    (PATH_CMD_MOVE_TO..PATH_CMD_END_POLY).contains(&(c & PATH_CMD_MASK))
}

#[inline]
pub fn is_stop(c: u32) -> bool {
    c == PATH_CMD_STOP
}

#[inline]
pub fn is_move_to(c: u32) -> bool {
    (c & PATH_CMD_MASK) == PATH_CMD_MOVE_TO
}

#[inline]
pub fn is_end_poly(c: u32) -> bool {
    (c & PATH_CMD_MASK) == PATH_CMD_END_POLY
}

#[inline]
pub fn is_close(c: u32) -> bool {
    is_end_poly(c) && (c & PATH_FLAGS_CLOSE) != 0
}

// ============================================================================
// VertexSource
// ============================================================================

/// A generator of polygon/polyline vertices.
///
/// `rewind` restarts iteration; `vertex` writes the next coordinate pair and
/// returns its path command (`PATH_CMD_STOP` when exhausted).
pub trait VertexSource {
    fn rewind(&mut self, path_id: u32);
    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32;
}

// ============================================================================
// Tests
// ============================================================================
