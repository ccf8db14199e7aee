//! Affine transformations and the resize-aware viewport mapping.
//!
//! `Affine` is either built directly or produced by `ViewportTransform`,
//! which maps the logical canvas onto the current physical viewport —
//! uniformly scaled and centered when aspect ratio is preserved ("meet"
//! policy), stretched otherwise. `Transformed` adapts any `VertexSource`
//! through a matrix.

use crate::basics::{is_vertex, VertexSource};

/// 2D affine transformation matrix.
///
/// Six components `[sx, shy, shx, sy, tx, ty]`:
///
/// ```text
///   | sx  shx tx |
///   | shy  sy ty |
/// ```
///
/// Transform: `x' = x*sx + y*shx + tx`, `y' = x*shy + y*sy + ty`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    pub sx: f64,
    pub shy: f64,
    pub shx: f64,
    pub sy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Affine {
    /// Identity matrix.
    pub fn new() -> Self {
        Self {
            sx: 1.0,
            shy: 0.0,
            shx: 0.0,
            sy: 1.0,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Non-uniform scaling matrix.
    pub fn new_scaling(x: f64, y: f64) -> Self {
        Self {
            sx: x,
            sy: y,
            ..Self::new()
        }
    }

    /// Translation matrix.
    pub fn new_translation(x: f64, y: f64) -> Self {
        Self {
            tx: x,
            ty: y,
            ..Self::new()
        }
    }

    /// Post-translate.
    pub fn translate(&mut self, x: f64, y: f64) -> &mut Self {
        self.tx += x;
        self.ty += y;
        self
    }

    /// Multiply by `m` (self happens first, then `m`).
    pub fn multiply(&mut self, m: &Affine) -> &mut Self {
        let t0 = self.sx * m.sx + self.shy * m.shx;
        let t2 = self.shx * m.sx + self.sy * m.shx;
        let t4 = self.tx * m.sx + self.ty * m.shx + m.tx;
        self.shy = self.sx * m.shy + self.shy * m.sy;
        self.sy = self.shx * m.shy + self.sy * m.sy;
        self.ty = self.tx * m.shy + self.ty * m.sy + m.ty;
        self.sx = t0;
        self.shx = t2;
        self.tx = t4;
        self
    }

    /// Transform a point in place.
    #[inline]
    pub fn transform(&self, x: &mut f64, y: &mut f64) {
        let tmp = *x;
        *x = tmp * self.sx + *y * self.shx + self.tx;
        *y = tmp * self.shy + *y * self.sy + self.ty;
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// ViewportTransform
// ============================================================================

/// Maps the fixed logical canvas to the current physical viewport.
///
/// Holds the most recently computed matrix; `recompute` must be called on
/// every physical-size change, before the pixel buffer is reallocated.
pub struct ViewportTransform {
    logical_w: f64,
    logical_h: f64,
    mtx: Affine,
}

impl ViewportTransform {
    /// Identity mapping for a physical viewport equal to the logical canvas.
    pub fn new(logical_w: f64, logical_h: f64) -> Self {
        Self {
            logical_w,
            logical_h,
            mtx: Affine::new(),
        }
    }

    /// Recompute the mapping for a new physical size.
    ///
    /// With `keep_aspect` the logical canvas is fitted entirely inside the
    /// viewport at uniform scale and the remainder is split evenly on both
    /// sides (centered "meet"). Without it, independent x/y stretch, no
    /// translation.
    pub fn recompute(&mut self, physical_w: f64, physical_h: f64, keep_aspect: bool) {
        if keep_aspect {
            let kx = physical_w / self.logical_w;
            let ky = physical_h / self.logical_h;
            let k = kx.min(ky);
            let mut mtx = Affine::new_scaling(k, k);
            mtx.translate(
                (physical_w - self.logical_w * k) * 0.5,
                (physical_h - self.logical_h * k) * 0.5,
            );
            self.mtx = mtx;
        } else {
            self.mtx = Affine::new_scaling(
                physical_w / self.logical_w,
                physical_h / self.logical_h,
            );
        }
    }

    /// The current logical-to-physical matrix.
    pub fn matrix(&self) -> &Affine {
        &self.mtx
    }

    pub fn logical_width(&self) -> f64 {
        self.logical_w
    }

    pub fn logical_height(&self) -> f64 {
        self.logical_h
    }
}

// ============================================================================
// Transformed
// ============================================================================

/// Vertex source adaptor that applies an affine matrix to every vertex.
pub struct Transformed<'a, V: VertexSource> {
    source: &'a mut V,
    mtx: &'a Affine,
}

impl<'a, V: VertexSource> Transformed<'a, V> {
    pub fn new(source: &'a mut V, mtx: &'a Affine) -> Self {
        Self { source, mtx }
    }
}

impl<'a, V: VertexSource> VertexSource for Transformed<'a, V> {
    fn rewind(&mut self, path_id: u32) {
        self.source.rewind(path_id);
    }

    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
        let cmd = self.source.vertex(x, y);
        if is_vertex(cmd) {
            self.mtx.transform(x, y);
        }
        cmd
    }
}

// ============================================================================
// Tests
// ============================================================================
