//! Per-frame rasterization of the point field.
//!
//! Clears the buffer to opaque white, composites every point as an
//! anti-aliased filled circle in field order (alpha from the depth window,
//! fully faded points skipped), then stamps the zero-padded drawn-circle
//! counter over everything through the same viewport matrix.

use crate::buffer::PixelBuffer;
use crate::color::{Rgba, Rgba8};
use crate::ellipse::Ellipse;
use crate::points::PointField;
use crate::raster::Rasterizer;
use crate::text;
use crate::transform::{Affine, Transformed};

/// Circle polygon segments. The circles are small enough that 8 segments
/// read as round once anti-aliased.
const CIRCLE_STEPS: u32 = 8;

const LABEL_SIZE: f64 = 15.0;
const LABEL_X: f64 = 10.0;
const LABEL_BOTTOM_MARGIN: f64 = 20.0;

/// Everything the renderer reads besides the points themselves.
///
/// Mutated by external UI collaborators between frames; `point_count` is
/// consumed by the field, the rest by the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParameters {
    pub point_count: usize,
    /// Circle radius is `radius_scale / 20` logical units.
    pub radius_scale: i32,
    /// 0 (everything opaque) to 10 (full fade strength).
    pub selectivity: u8,
    pub depth_low: f64,
    pub depth_high: f64,
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self {
            point_count: 10_000,
            radius_scale: 20,
            selectivity: 0,
            depth_low: 1.0,
            depth_high: 1.0,
        }
    }
}

/// Alpha for a depth scalar against the [low, high] window.
///
/// Below the window alpha falls off as `1 − (low − z)·s`, above it as
/// `1 − (z − high)·s`, with s = selectivity/10; inside the window it is
/// 1.0. The above-high rule is applied second, so an inverted window
/// (low > high) behaves like two independent thresholds. Result clamped
/// to [0, 1].
pub fn depth_alpha(z: f64, low: f64, high: f64, selectivity: u8) -> f64 {
    let s = f64::from(selectivity) / 10.0;
    let mut alpha = 1.0;
    if z < low {
        alpha = 1.0 - (low - z) * s;
    }
    if z > high {
        alpha = 1.0 - (z - high) * s;
    }
    alpha.clamp(0.0, 1.0)
}

/// Rasterizes frames; owns the reusable rasterizer scratch state.
pub struct Renderer {
    ras: Rasterizer,
    ellipse: Ellipse,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            ras: Rasterizer::new(),
            ellipse: Ellipse::new(0.0, 0.0, 1.0, 1.0, CIRCLE_STEPS),
        }
    }

    /// Render one complete frame into `buf` and return the number of
    /// circles actually drawn (alpha > 0).
    pub fn render_frame(
        &mut self,
        buf: &mut PixelBuffer,
        field: &PointField,
        params: &RenderParameters,
        mtx: &Affine,
    ) -> u32 {
        buf.clear(&Rgba8::new_opaque(255, 255, 255));

        let radius = f64::from(params.radius_scale) / 20.0;
        let mut drawn: u32 = 0;

        for p in field.points() {
            let alpha = depth_alpha(p.z, params.depth_low, params.depth_high, params.selectivity);
            if alpha == 0.0 {
                continue;
            }
            self.ellipse.init(p.x, p.y, radius, radius, CIRCLE_STEPS);
            self.ras.reset();
            self.ras
                .add_path(&mut Transformed::new(&mut self.ellipse, mtx));
            let color = Rgba8::from_rgba(&Rgba::with_opacity(&p.color, alpha));
            self.ras.render(buf, &color);
            drawn += 1;
        }

        let label = format!("{:08}", drawn);
        self.ras.reset();
        text::add_label(
            &mut self.ras,
            mtx,
            &label,
            LABEL_X,
            field.logical_height() - LABEL_BOTTOM_MARGIN,
            LABEL_SIZE,
        );
        self.ras.render(buf, &Rgba8::new_opaque(0, 0, 0));

        drawn
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spline::ColorSpline;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_alpha_zero_selectivity_always_opaque() {
        for i in 0..=10 {
            let z = i as f64 / 10.0;
            assert_eq!(depth_alpha(z, 0.5, 0.5, 0), 1.0);
            assert_eq!(depth_alpha(z, 0.0, 0.0, 0), 1.0);
        }
    }

    #[test]
    fn test_alpha_inside_window_opaque() {
        assert_eq!(depth_alpha(0.5, 0.2, 0.8, 10), 1.0);
        assert_eq!(depth_alpha(0.2, 0.2, 0.8, 10), 1.0);
        assert_eq!(depth_alpha(0.8, 0.2, 0.8, 10), 1.0);
    }

    #[test]
    fn test_alpha_above_high_falloff() {
        // Window collapsed at 0.3, full selectivity, z = 0.5
        let a = depth_alpha(0.5, 0.3, 0.3, 10);
        assert!((a - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_alpha_below_low_falloff() {
        let a = depth_alpha(0.1, 0.3, 0.9, 10);
        assert!((a - 0.8).abs() < 1e-12);
        // Half selectivity fades half as fast
        let a = depth_alpha(0.1, 0.3, 0.9, 5);
        assert!((a - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_alpha_clamped_to_zero() {
        assert_eq!(depth_alpha(0.0, 1.0, 1.0, 10), 0.0);
    }

    fn small_scene(count: usize) -> (PointField, RenderParameters) {
        let mut field = PointField::new(100.0, 100.0);
        let spline = ColorSpline::new();
        let mut rng = StdRng::seed_from_u64(11);
        field.generate(&mut rng, &spline, count);
        (field, RenderParameters {
            point_count: count,
            ..Default::default()
        })
    }

    #[test]
    fn test_drawn_count_all_visible() {
        let (field, params) = small_scene(64);
        let mut buf = PixelBuffer::new(100, 100).unwrap();
        let mut renderer = Renderer::new();
        let drawn = renderer.render_frame(&mut buf, &field, &params, &Affine::new());
        assert_eq!(drawn, 64);
    }

    #[test]
    fn test_fully_faded_points_not_counted() {
        let (field, mut params) = small_scene(64);
        // Window far above any depth: 1 − (low − z)·1 < 0 for all z, so
        // every point clamps to alpha 0 and is skipped.
        params.depth_low = 10.0;
        params.depth_high = 10.0;
        params.selectivity = 10;
        let mut buf = PixelBuffer::new(100, 100).unwrap();
        let mut renderer = Renderer::new();
        let drawn = renderer.render_frame(&mut buf, &field, &params, &Affine::new());
        assert_eq!(drawn, 0);
    }

    #[test]
    fn test_frame_clears_to_white() {
        let (field, params) = small_scene(0);
        let mut buf = PixelBuffer::new(100, 100).unwrap();
        let mut renderer = Renderer::new();
        renderer.render_frame(&mut buf, &field, &params, &Affine::new());
        // A corner away from the (empty) scatter and the label
        assert_eq!(buf.pixel(99, 0), Rgba8::new_opaque(255, 255, 255));
    }

    #[test]
    fn test_label_rendered_even_with_zero_points() {
        let (field, params) = small_scene(0);
        let mut buf = PixelBuffer::new(100, 100).unwrap();
        let mut renderer = Renderer::new();
        renderer.render_frame(&mut buf, &field, &params, &Affine::new());
        // "00000000" starts at logical (10, 80); the first zero's top bar
        // must put dark pixels there.
        let mut found_dark = false;
        for x in 10..18 {
            if buf.pixel(x, 81).r < 100 {
                found_dark = true;
            }
        }
        assert!(found_dark, "counter label missing");
    }

    #[test]
    fn test_circle_center_matches_point_color() {
        // Logical canvas big enough that the scatter ring (center ± ~0.43 of
        // the canvas) can never land on the counter label.
        let mut field = PointField::new(1000.0, 1000.0);
        let spline = ColorSpline::new();
        let mut rng = StdRng::seed_from_u64(11);
        field.generate(&mut rng, &spline, 1);
        let mut params = RenderParameters::default();
        // Radius 5 so the circle center is fully interior
        params.radius_scale = 100;
        let p = field.points()[0];
        let mut buf = PixelBuffer::new(1000, 1000).unwrap();
        let mut renderer = Renderer::new();
        renderer.render_frame(&mut buf, &field, &params, &Affine::new());

        let px = p.x.round() as u32;
        let py = p.y.round() as u32;
        let expected = Rgba8::from_rgba(&p.color);
        let got = buf.pixel(px.min(999), py.min(999));
        assert!((got.r as i32 - expected.r as i32).abs() <= 2);
        assert!((got.g as i32 - expected.g as i32).abs() <= 2);
        assert!((got.b as i32 - expected.b as i32).abs() <= 2);
    }
}
