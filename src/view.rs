//! The composed scatter view.
//!
//! `ScatterView` owns the render parameters, point field, viewport
//! transform, and pixel buffer, and exposes the operations an external
//! window/widget layer forwards into: resize notifications, parameter
//! changes, frame rendering, and PNG export. Everything runs synchronously
//! on the calling thread.

use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::buffer::PixelBuffer;
use crate::export::{self, ExportError};
use crate::points::PointField;
use crate::render::{RenderParameters, Renderer};
use crate::spline::ColorSpline;
use crate::transform::ViewportTransform;

/// The scatter demo's whole model behind the (external) display surface.
///
/// A resize runs recompute-transform, reallocate-buffer, re-render in that
/// order; a zero-area viewport leaves no buffer, and rendering degrades to
/// a no-op until the next valid resize.
pub struct ScatterView {
    params: RenderParameters,
    spline: ColorSpline,
    field: PointField,
    viewport: ViewportTransform,
    buffer: Option<PixelBuffer>,
    renderer: Renderer,
    rng: StdRng,
    points_drawn: u32,
    keep_aspect: bool,
}

impl ScatterView {
    /// Build the view over a logical canvas, generate the initial field,
    /// and allocate a buffer at logical == physical size.
    pub fn new(logical_w: f64, logical_h: f64, seed: u64) -> Self {
        let params = RenderParameters::default();
        let spline = ColorSpline::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut field = PointField::new(logical_w, logical_h);
        field.generate(&mut rng, &spline, params.point_count);

        let mut view = Self {
            params,
            spline,
            field,
            viewport: ViewportTransform::new(logical_w, logical_h),
            buffer: PixelBuffer::new(logical_w as u32, logical_h as u32),
            renderer: Renderer::new(),
            rng,
            points_drawn: 0,
            keep_aspect: true,
        };
        view.render();
        view
    }

    /// Whether resizes preserve the logical canvas aspect ratio.
    pub fn set_keep_aspect(&mut self, keep: bool) {
        self.keep_aspect = keep;
    }

    /// Handle a physical-size change from the display surface.
    ///
    /// Order matters: transform first, then buffer, then the frame that
    /// depends on both.
    pub fn resize(&mut self, physical_w: u32, physical_h: u32) {
        debug!(physical_w, physical_h, "viewport resize");
        self.viewport.recompute(
            f64::from(physical_w),
            f64::from(physical_h),
            self.keep_aspect,
        );
        self.buffer = PixelBuffer::new(physical_w, physical_h);
        if self.buffer.is_none() {
            debug!("zero-area viewport, rendering suspended");
        }
        self.render();
    }

    /// Grow or shrink the point count; regenerates the field.
    pub fn change_point_count(&mut self, delta: i64) {
        let count = self.field.resize(&mut self.rng, &self.spline, delta);
        self.params.point_count = count;
        debug!(count, "point field regenerated");
    }

    pub fn set_radius_scale(&mut self, scale: i32) {
        self.params.radius_scale = scale;
    }

    /// Selectivity, clamped to the 0–10 widget range.
    pub fn set_selectivity(&mut self, selectivity: u8) {
        self.params.selectivity = selectivity.min(10);
    }

    /// Depth window bounds, each clamped into [0, 1].
    pub fn set_depth_window(&mut self, low: f64, high: f64) {
        self.params.depth_low = low.clamp(0.0, 1.0);
        self.params.depth_high = high.clamp(0.0, 1.0);
    }

    /// Re-render the current frame. A no-op without a buffer.
    pub fn render(&mut self) {
        if let Some(buf) = self.buffer.as_mut() {
            self.points_drawn = self.renderer.render_frame(
                buf,
                &self.field,
                &self.params,
                self.viewport.matrix(),
            );
        }
    }

    /// Export the current frame as a PNG.
    pub fn export_png(&self, path: &Path) -> Result<(), ExportError> {
        let buf = self.buffer.as_ref().ok_or(ExportError::NoBuffer)?;
        export::write_png(buf, path)?;
        debug!(?path, "frame exported");
        Ok(())
    }

    pub fn params(&self) -> &RenderParameters {
        &self.params
    }

    pub fn point_count(&self) -> usize {
        self.field.len()
    }

    /// Circles drawn in the last rendered frame.
    pub fn points_drawn(&self) -> u32 {
        self.points_drawn
    }

    /// The current frame, if a valid viewport exists. The display surface
    /// blits these bytes; the exporter reads the same buffer.
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }
}

// ============================================================================
// Tests
// ============================================================================
