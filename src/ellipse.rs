//! Ellipse vertex generator.
//!
//! Approximates an ellipse as a closed regular polygon with a fixed number
//! of steps. The scatter renderer uses 8 steps per circle, which at the
//! demo's circle sizes is visually indistinguishable from a true circle
//! once anti-aliased.

use crate::basics::{
    VertexSource, PATH_CMD_END_POLY, PATH_CMD_LINE_TO, PATH_CMD_MOVE_TO, PATH_CMD_STOP,
    PATH_FLAGS_CCW, PATH_FLAGS_CLOSE, PI,
};

/// Closed polygon approximation of an ellipse.
pub struct Ellipse {
    x: f64,
    y: f64,
    rx: f64,
    ry: f64,
    num: u32,
    step: u32,
}

impl Ellipse {
    /// Ellipse centered at (x, y) with radii (rx, ry), `num_steps` segments.
    pub fn new(x: f64, y: f64, rx: f64, ry: f64, num_steps: u32) -> Self {
        Self {
            x,
            y,
            rx,
            ry,
            num: num_steps.max(3),
            step: 0,
        }
    }

    /// Re-initialize with new geometry, keeping the allocation-free state.
    pub fn init(&mut self, x: f64, y: f64, rx: f64, ry: f64, num_steps: u32) {
        self.x = x;
        self.y = y;
        self.rx = rx;
        self.ry = ry;
        self.num = num_steps.max(3);
        self.step = 0;
    }
}

impl VertexSource for Ellipse {
    fn rewind(&mut self, _path_id: u32) {
        self.step = 0;
    }

    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
        if self.step == self.num {
            self.step += 1;
            return PATH_CMD_END_POLY | PATH_FLAGS_CLOSE | PATH_FLAGS_CCW;
        }
        if self.step > self.num {
            return PATH_CMD_STOP;
        }
        let angle = self.step as f64 / self.num as f64 * 2.0 * PI;
        *x = self.x + angle.cos() * self.rx;
        *y = self.y + angle.sin() * self.ry;
        self.step += 1;
        if self.step == 1 {
            PATH_CMD_MOVE_TO
        } else {
            PATH_CMD_LINE_TO
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::{is_close, is_stop};

    #[test]
    fn test_vertex_sequence() {
        let mut e = Ellipse::new(0.0, 0.0, 10.0, 10.0, 8);
        e.rewind(0);
        let mut x = 0.0;
        let mut y = 0.0;

        let cmd = e.vertex(&mut x, &mut y);
        assert_eq!(cmd, PATH_CMD_MOVE_TO);
        assert!((x - 10.0).abs() < 1e-9);
        assert!(y.abs() < 1e-9);

        for _ in 1..8 {
            assert_eq!(e.vertex(&mut x, &mut y), PATH_CMD_LINE_TO);
        }
        assert!(is_close(e.vertex(&mut x, &mut y)));
        assert!(is_stop(e.vertex(&mut x, &mut y)));
    }

    #[test]
    fn test_vertices_on_radii() {
        let mut e = Ellipse::new(5.0, 3.0, 20.0, 10.0, 4);
        e.rewind(0);
        let mut x = 0.0;
        let mut y = 0.0;

        e.vertex(&mut x, &mut y); // angle 0
        assert!((x - 25.0).abs() < 1e-9);
        assert!((y - 3.0).abs() < 1e-9);

        e.vertex(&mut x, &mut y); // angle pi/2
        assert!((x - 5.0).abs() < 1e-9);
        assert!((y - 13.0).abs() < 1e-9);
    }

    #[test]
    fn test_rewind_restarts() {
        let mut e = Ellipse::new(0.0, 0.0, 1.0, 1.0, 8);
        let mut x = 0.0;
        let mut y = 0.0;
        e.rewind(0);
        e.vertex(&mut x, &mut y);
        e.vertex(&mut x, &mut y);
        e.rewind(0);
        assert_eq!(e.vertex(&mut x, &mut y), PATH_CMD_MOVE_TO);
    }

    #[test]
    fn test_minimum_step_count() {
        // Degenerate step counts get bumped to a triangle.
        let mut e = Ellipse::new(0.0, 0.0, 1.0, 1.0, 1);
        e.rewind(0);
        let mut x = 0.0;
        let mut y = 0.0;
        let mut vertices = 0;
        while crate::basics::is_vertex(e.vertex(&mut x, &mut y)) {
            vertices += 1;
        }
        assert_eq!(vertices, 3);
    }

    #[test]
    fn test_init_resets_iteration() {
        let mut e = Ellipse::new(0.0, 0.0, 1.0, 1.0, 8);
        e.rewind(0);
        let mut x = 0.0;
        let mut y = 0.0;
        e.vertex(&mut x, &mut y);
        e.init(100.0, 100.0, 2.0, 2.0, 8);
        let cmd = e.vertex(&mut x, &mut y);
        assert_eq!(cmd, PATH_CMD_MOVE_TO);
        assert!((x - 102.0).abs() < 1e-9);
    }
}
