//! RGBA8 pixel buffer.
//!
//! Owns its pixel storage (4 bytes per pixel, non-premultiplied, rows
//! top-down) and implements the alpha-over span blending the rasterizer
//! drives. Construction fails for zero-area sizes; callers treat a missing
//! buffer as "nothing to draw into".

use crate::basics::CoverType;
use crate::color::Rgba8;

const BPP: usize = 4;

/// 2-D RGBA8 pixel store sized to the physical viewport.
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a buffer, or `None` if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * BPP],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw pixel bytes, row-major RGBA.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * BPP
    }

    /// Overwrite every pixel with `c`.
    pub fn clear(&mut self, c: &Rgba8) {
        for px in self.data.chunks_exact_mut(BPP) {
            px[0] = c.r;
            px[1] = c.g;
            px[2] = c.b;
            px[3] = c.a;
        }
    }

    /// Read the pixel at (x, y). Panics outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        assert!(x < self.width && y < self.height);
        let off = self.offset(x, y);
        Rgba8::new(
            self.data[off],
            self.data[off + 1],
            self.data[off + 2],
            self.data[off + 3],
        )
    }

    /// Alpha-over blend of one pixel, `cover` scaling the color's alpha.
    #[inline]
    fn blend_pix(px: &mut [u8], c: &Rgba8, alpha: u8) {
        if alpha == 255 {
            px[0] = c.r;
            px[1] = c.g;
            px[2] = c.b;
            px[3] = 255;
        } else {
            px[0] = Rgba8::lerp(px[0], c.r, alpha);
            px[1] = Rgba8::lerp(px[1], c.g, alpha);
            px[2] = Rgba8::lerp(px[2], c.b, alpha);
            px[3] = Rgba8::lerp(px[3], 255, alpha);
        }
    }

    /// Blend a horizontal span at (x, y) with per-pixel coverage.
    ///
    /// The span is clipped against the buffer bounds; out-of-range y or a
    /// fully clipped span is a no-op.
    pub fn blend_solid_hspan(&mut self, x: i32, y: i32, c: &Rgba8, covers: &[CoverType]) {
        if y < 0 || y >= self.height as i32 || c.a == 0 {
            return;
        }
        let mut start = 0usize;
        let mut x0 = x;
        if x0 < 0 {
            start = (-x0) as usize;
            if start >= covers.len() {
                return;
            }
            x0 = 0;
        }
        if x0 >= self.width as i32 {
            return;
        }
        let avail = (self.width as i32 - x0) as usize;
        let covers = &covers[start..covers.len().min(start + avail)];

        let off0 = self.offset(x0 as u32, y as u32);
        let row = &mut self.data[off0..off0 + covers.len() * BPP];
        for (px, &cover) in row.chunks_exact_mut(BPP).zip(covers) {
            let alpha = Rgba8::mult_cover(c.a, cover);
            if alpha > 0 {
                Self::blend_pix(px, c, alpha);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
