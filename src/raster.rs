//! Anti-aliased scanline polygon rasterizer.
//!
//! Collects polygon edges from a `VertexSource`, then sweeps each scanline
//! with vertical subsampling: every sub-row intersects the edge list,
//! crossings are sorted and filled under the nonzero winding rule with
//! exact fractional coverage at span ends. Accumulated coverage is blended
//! into a `PixelBuffer` as one solid-color span per scanline.

use crate::basics::{is_close, is_move_to, is_stop, is_vertex, uround, VertexSource};
use crate::buffer::PixelBuffer;
use crate::color::Rgba8;

/// Vertical sub-rows sampled per scanline.
const SUB_SAMPLES: u32 = 4;

#[derive(Debug, Clone, Copy)]
struct Edge {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    /// +1 for a downward edge, -1 for upward (nonzero winding).
    dir: i32,
}

impl Edge {
    #[inline]
    fn y_min(&self) -> f64 {
        self.y0.min(self.y1)
    }

    #[inline]
    fn y_max(&self) -> f64 {
        self.y0.max(self.y1)
    }

    /// X coordinate where the edge crosses the horizontal line at `y`.
    #[inline]
    fn x_at(&self, y: f64) -> f64 {
        self.x0 + (y - self.y0) * (self.x1 - self.x0) / (self.y1 - self.y0)
    }
}

/// Scanline rasterizer with 256-level anti-aliasing.
///
/// Feed geometry with `move_to_d`/`line_to_d` or `add_path`, then call
/// `render` to composite into a buffer. `reset` clears the edge list for
/// the next shape; scratch storage is reused across shapes.
pub struct Rasterizer {
    edges: Vec<Edge>,
    start_x: f64,
    start_y: f64,
    last_x: f64,
    last_y: f64,
    open: bool,
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
    // Scratch, reused between render calls.
    crossings: Vec<(f64, i32)>,
    cover: Vec<f64>,
    covers_u8: Vec<u8>,
}

impl Rasterizer {
    pub fn new() -> Self {
        Self {
            edges: Vec::new(),
            start_x: 0.0,
            start_y: 0.0,
            last_x: 0.0,
            last_y: 0.0,
            open: false,
            min_x: f64::MAX,
            min_y: f64::MAX,
            max_x: f64::MIN,
            max_y: f64::MIN,
            crossings: Vec::new(),
            cover: Vec::new(),
            covers_u8: Vec::new(),
        }
    }

    /// Discard all edges, keeping scratch allocations.
    pub fn reset(&mut self) {
        self.edges.clear();
        self.open = false;
        self.min_x = f64::MAX;
        self.min_y = f64::MAX;
        self.max_x = f64::MIN;
        self.max_y = f64::MIN;
    }

    /// Begin a new contour, closing any open one.
    pub fn move_to_d(&mut self, x: f64, y: f64) {
        if self.open {
            self.close_polygon();
        }
        self.start_x = x;
        self.start_y = y;
        self.last_x = x;
        self.last_y = y;
        self.open = true;
        self.extend_bounds(x, y);
    }

    /// Append an edge from the current position.
    pub fn line_to_d(&mut self, x: f64, y: f64) {
        self.push_edge(self.last_x, self.last_y, x, y);
        self.last_x = x;
        self.last_y = y;
        self.extend_bounds(x, y);
    }

    /// Close the current contour back to its starting point.
    pub fn close_polygon(&mut self) {
        if self.open {
            self.push_edge(self.last_x, self.last_y, self.start_x, self.start_y);
            self.last_x = self.start_x;
            self.last_y = self.start_y;
            self.open = false;
        }
    }

    /// Consume a whole vertex source.
    pub fn add_path<V: VertexSource>(&mut self, vs: &mut V) {
        vs.rewind(0);
        let mut x = 0.0;
        let mut y = 0.0;
        loop {
            let cmd = vs.vertex(&mut x, &mut y);
            if is_stop(cmd) {
                break;
            }
            if is_move_to(cmd) {
                self.move_to_d(x, y);
            } else if is_vertex(cmd) {
                self.line_to_d(x, y);
            } else if is_close(cmd) {
                self.close_polygon();
            }
        }
        // Unclosed contours still rasterize as if closed.
        self.close_polygon();
    }

    fn extend_bounds(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    fn push_edge(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) {
        if y0 == y1 {
            return; // horizontal edges never cross a sub-row
        }
        let dir = if y1 > y0 { 1 } else { -1 };
        self.edges.push(Edge { x0, y0, x1, y1, dir });
    }

    /// Rasterize the collected edges into `buf` with a uniform color,
    /// alpha-over composited against the existing contents.
    pub fn render(&mut self, buf: &mut PixelBuffer, color: &Rgba8) {
        if self.edges.is_empty() {
            return;
        }
        let w = buf.width() as i32;
        let h = buf.height() as i32;

        let x_lo = (self.min_x.floor() as i64).clamp(0, i64::from(w)) as i32;
        let x_hi = (self.max_x.ceil() as i64).clamp(0, i64::from(w)) as i32;
        let y_lo = (self.min_y.floor() as i64).clamp(0, i64::from(h)) as i32;
        let y_hi = (self.max_y.ceil() as i64).clamp(0, i64::from(h)) as i32;
        if x_lo >= x_hi || y_lo >= y_hi {
            return;
        }

        let row_len = (x_hi - x_lo) as usize;
        self.cover.clear();
        self.cover.resize(row_len, 0.0);
        self.covers_u8.clear();
        self.covers_u8.resize(row_len, 0);

        for y in y_lo..y_hi {
            for c in self.cover.iter_mut() {
                *c = 0.0;
            }
            for s in 0..SUB_SAMPLES {
                let sy = y as f64 + (s as f64 + 0.5) / SUB_SAMPLES as f64;
                self.crossings.clear();
                for e in &self.edges {
                    // Half-open [y_min, y_max) so shared vertices count once.
                    if sy >= e.y_min() && sy < e.y_max() {
                        self.crossings.push((e.x_at(sy), e.dir));
                    }
                }
                if self.crossings.is_empty() {
                    continue;
                }
                self.crossings
                    .sort_unstable_by(|a, b| a.0.total_cmp(&b.0));

                let mut winding = 0;
                let mut span_start = 0.0;
                for &(x, dir) in &self.crossings {
                    let was_inside = winding != 0;
                    winding += dir;
                    if !was_inside && winding != 0 {
                        span_start = x;
                    } else if was_inside && winding == 0 {
                        accumulate_span(&mut self.cover, x_lo, span_start, x);
                    }
                }
            }

            let scale = 255.0 / SUB_SAMPLES as f64;
            for (dst, &c) in self.covers_u8.iter_mut().zip(self.cover.iter()) {
                *dst = uround((c * scale).min(255.0)) as u8;
            }
            buf.blend_solid_hspan(x_lo, y, color, &self.covers_u8);
        }
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Add the horizontal span [a, b) to the coverage row starting at `x_lo`,
/// with fractional weight at partially covered end pixels.
fn accumulate_span(cover: &mut [f64], x_lo: i32, a: f64, b: f64) {
    let lo = x_lo as f64;
    let hi = lo + cover.len() as f64;
    let a = a.max(lo);
    let b = b.min(hi);
    if b <= a {
        return;
    }
    let ia = (a.floor() - lo) as usize;
    let ib = ((b.ceil() - lo) as usize - 1).min(cover.len() - 1);
    if ia == ib {
        cover[ia] += b - a;
        return;
    }
    cover[ia] += (ia as f64 + lo + 1.0) - a;
    for c in &mut cover[ia + 1..ib] {
        *c += 1.0;
    }
    cover[ib] += b - (ib as f64 + lo);
}

// ============================================================================
// Tests
// ============================================================================
