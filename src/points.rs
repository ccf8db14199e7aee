//! The scattered point field.
//!
//! Points are generated in bulk: a depth scalar picks both an angle on a
//! centered ellipse and the color along the gradient, then a random radial
//! perturbation spreads the ring into a cloud. The field is immutable
//! between regenerations; a count change rebuilds it from scratch.

use rand::Rng;

use crate::basics::PI;
use crate::color::Rgba;
use crate::spline::ColorSpline;

/// One scattered point: logical position, depth scalar, generation color.
///
/// Alpha is fixed at 1.0 here; the renderer modulates visibility per frame
/// from the depth window without touching the stored color.
#[derive(Debug, Clone, Copy)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub color: Rgba,
}

/// Collection of scattered points over a fixed logical canvas.
pub struct PointField {
    points: Vec<ScatterPoint>,
    logical_w: f64,
    logical_h: f64,
}

impl PointField {
    /// Empty field over the given logical canvas.
    pub fn new(logical_w: f64, logical_h: f64) -> Self {
        Self {
            points: Vec::new(),
            logical_w,
            logical_h,
        }
    }

    /// Regenerate the field with exactly `count` points.
    ///
    /// Each point draws z uniformly in [0, 1), sits on the ellipse of radii
    /// (w/3.5, h/3.5) at angle 2πz, and is pushed a uniform distance in
    /// [0, rx/2] at a uniform angle. Color is the gradient at z scaled by
    /// 0.8 per channel.
    pub fn generate<R: Rng>(&mut self, rng: &mut R, spline: &ColorSpline, count: usize) {
        let rx = self.logical_w / 3.5;
        let ry = self.logical_h / 3.5;
        let cx = self.logical_w / 2.0;
        let cy = self.logical_h / 2.0;

        self.points.clear();
        self.points.reserve(count);
        for _ in 0..count {
            let z: f64 = rng.gen_range(0.0..1.0);
            let ex = (z * 2.0 * PI).cos() * rx;
            let ey = (z * 2.0 * PI).sin() * ry;

            let dist: f64 = rng.gen_range(0.0..=rx / 2.0);
            let angle: f64 = rng.gen_range(0.0..2.0 * PI);

            let c = spline.evaluate(z);
            self.points.push(ScatterPoint {
                x: cx + ex + angle.cos() * dist,
                y: cy + ey + angle.sin() * dist,
                z,
                color: Rgba::new(c.r * 0.8, c.g * 0.8, c.b * 0.8, 1.0),
            });
        }
    }

    /// Grow or shrink the field by `delta` points and regenerate.
    ///
    /// A delta that would leave a non-positive count clamps the field to
    /// zero points without regenerating. Returns the new count.
    pub fn resize<R: Rng>(
        &mut self,
        rng: &mut R,
        spline: &ColorSpline,
        delta: i64,
    ) -> usize {
        let new_count = self.points.len() as i64 + delta;
        if new_count > 0 {
            self.generate(rng, spline, new_count as usize);
        } else {
            self.points.clear();
        }
        self.points.len()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[ScatterPoint] {
        &self.points
    }

    pub fn logical_width(&self) -> f64 {
        self.logical_w
    }

    pub fn logical_height(&self) -> f64 {
        self.logical_h
    }
}

// ============================================================================
// Tests
// ============================================================================
