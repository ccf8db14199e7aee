//! Cubic spline interpolation and the fixed depth-to-color gradient.
//!
//! `CubicSpline` interpolates a small ordered set of (x, y) knots with a
//! natural cubic spline and clamps evaluation at the domain boundaries.
//! `ColorSpline` bundles three such curves (R, G, B) over [0, 1].

use crate::color::Rgba;

// Knot tables for the depth gradient, one 6-knot curve per channel.
const SPLINE_R_X: [f64; 6] = [0.0, 0.2, 0.4, 0.910484, 0.957258, 1.0];
const SPLINE_R_Y: [f64; 6] = [1.0, 0.8, 0.6, 0.066667, 0.169697, 0.6];

const SPLINE_G_X: [f64; 6] = [0.0, 0.292244, 0.485655, 0.564859, 0.795607, 1.0];
const SPLINE_G_Y: [f64; 6] = [0.0, 0.60726, 0.964065, 0.892558, 0.435571, 0.0];

const SPLINE_B_X: [f64; 6] = [0.0, 0.055045, 0.143034, 0.433082, 0.764859, 1.0];
const SPLINE_B_Y: [f64; 6] = [0.38548, 0.128493, 0.021416, 0.271507, 0.713974, 1.0];

/// Natural cubic spline through a fixed set of knots.
///
/// Knot x values must be strictly increasing. Inputs outside the knot range
/// clamp to the nearest boundary value rather than extrapolating.
pub struct CubicSpline {
    x: Vec<f64>,
    y: Vec<f64>,
    // Second derivative at each knot (natural boundary: zero at the ends).
    m: Vec<f64>,
}

impl CubicSpline {
    /// Build a spline through the given knots. Needs at least 3 of them.
    pub fn new(x: &[f64], y: &[f64]) -> Self {
        let n = x.len().min(y.len());
        assert!(n >= 3, "cubic spline needs at least 3 knots");
        let x = x[..n].to_vec();
        let y = y[..n].to_vec();
        let m = Self::solve_second_derivatives(&x, &y);
        Self { x, y, m }
    }

    /// Tridiagonal (Thomas) solve for the natural-spline second derivatives.
    fn solve_second_derivatives(x: &[f64], y: &[f64]) -> Vec<f64> {
        let n = x.len();
        let mut m = vec![0.0; n];
        let mut c_prime = vec![0.0; n];
        let mut d_prime = vec![0.0; n];

        for i in 1..n - 1 {
            let h0 = x[i] - x[i - 1];
            let h1 = x[i + 1] - x[i];
            let diag = 2.0 * (h0 + h1);
            let rhs = 6.0 * ((y[i + 1] - y[i]) / h1 - (y[i] - y[i - 1]) / h0);
            let denom = diag - h0 * c_prime[i - 1];
            c_prime[i] = h1 / denom;
            d_prime[i] = (rhs - h0 * d_prime[i - 1]) / denom;
        }
        for i in (1..n - 1).rev() {
            m[i] = d_prime[i] - c_prime[i] * m[i + 1];
        }
        m
    }

    /// Evaluate at `x`, clamped to the knot domain.
    pub fn get(&self, x: f64) -> f64 {
        let n = self.x.len();
        if x <= self.x[0] {
            return self.y[0];
        }
        if x >= self.x[n - 1] {
            return self.y[n - 1];
        }

        let mut lo = 0usize;
        let mut hi = n - 1;
        while hi - lo > 1 {
            let mid = (lo + hi) >> 1;
            if x < self.x[mid] {
                hi = mid;
            } else {
                lo = mid;
            }
        }

        let h = self.x[lo + 1] - self.x[lo];
        let a = (self.x[lo + 1] - x) / h;
        let b = (x - self.x[lo]) / h;
        a * self.y[lo]
            + b * self.y[lo + 1]
            + ((a * a * a - a) * self.m[lo] + (b * b * b - b) * self.m[lo + 1]) * h * h / 6.0
    }
}

/// Depth-to-color gradient: three independent spline curves over z in [0, 1].
pub struct ColorSpline {
    r: CubicSpline,
    g: CubicSpline,
    b: CubicSpline,
}

impl ColorSpline {
    /// The fixed 6-knot gradient used by the scatter demo.
    pub fn new() -> Self {
        Self {
            r: CubicSpline::new(&SPLINE_R_X, &SPLINE_R_Y),
            g: CubicSpline::new(&SPLINE_G_X, &SPLINE_G_Y),
            b: CubicSpline::new(&SPLINE_B_X, &SPLINE_B_Y),
        }
    }

    /// Map a depth scalar to an opaque RGB color, each component in [0, 1].
    pub fn evaluate(&self, z: f64) -> Rgba {
        Rgba::new_rgb(
            self.r.get(z).clamp(0.0, 1.0),
            self.g.get(z).clamp(0.0, 1.0),
            self.b.get(z).clamp(0.0, 1.0),
        )
    }
}

impl Default for ColorSpline {
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

    #[test]
    fn test_passes_through_knots() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [0.0, 1.0, 0.0, -1.0, 0.0, 1.0];
        let s = CubicSpline::new(&x, &y);
        for i in 0..x.len() {
            assert!(
                (s.get(x[i]) - y[i]).abs() < 1e-12,
                "at x={}, expected {}, got {}",
                x[i],
                y[i],
                s.get(x[i])
            );
        }
    }

    #[test]
    fn test_linear_data_reproduced() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y = [0.0, 2.0, 4.0, 6.0, 8.0];
        let s = CubicSpline::new(&x, &y);
        assert!((s.get(0.5) - 1.0).abs() < 1e-10);
        assert!((s.get(2.5) - 5.0).abs() < 1e-10);
        assert!((s.get(3.75) - 7.5).abs() < 1e-10);
    }

    #[test]
    fn test_clamps_outside_domain() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [5.0, 1.0, 4.0, 9.0];
        let s = CubicSpline::new(&x, &y);
        assert_eq!(s.get(-10.0), 5.0);
        assert_eq!(s.get(10.0), 9.0);
    }

    #[test]
    fn test_continuous_near_knots() {
        let x = [0.0, 0.3, 0.5, 0.7, 1.0];
        let y = [0.0, 0.9, 0.2, 0.8, 0.1];
        let s = CubicSpline::new(&x, &y);
        for &k in &x[1..4] {
            let left = s.get(k - 1e-9);
            let right = s.get(k + 1e-9);
            assert!((left - right).abs() < 1e-6);
        }
    }

    #[test]
    fn test_color_spline_knots_exact() {
        let cs = ColorSpline::new();
        for i in 0..6 {
            let c = cs.evaluate(SPLINE_R_X[i]);
            assert!(
                (c.r - SPLINE_R_Y[i].clamp(0.0, 1.0)).abs() < 1e-9,
                "R knot {} mismatch",
                i
            );
        }
        for i in 0..6 {
            let c = cs.evaluate(SPLINE_G_X[i]);
            assert!((c.g - SPLINE_G_Y[i].clamp(0.0, 1.0)).abs() < 1e-9);
        }
        for i in 0..6 {
            let c = cs.evaluate(SPLINE_B_X[i]);
            assert!((c.b - SPLINE_B_Y[i].clamp(0.0, 1.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_color_spline_range() {
        let cs = ColorSpline::new();
        for i in 0..=1000 {
            let z = i as f64 / 1000.0;
            let c = cs.evaluate(z);
            assert!((0.0..=1.0).contains(&c.r), "r out of range at z={}", z);
            assert!((0.0..=1.0).contains(&c.g), "g out of range at z={}", z);
            assert!((0.0..=1.0).contains(&c.b), "b out of range at z={}", z);
            assert_eq!(c.a, 1.0);
        }
    }

    #[test]
    fn test_color_spline_clamps_depth() {
        let cs = ColorSpline::new();
        assert_eq!(cs.evaluate(-0.5), cs.evaluate(0.0));
        assert_eq!(cs.evaluate(1.5), cs.evaluate(1.0));
    }
}
