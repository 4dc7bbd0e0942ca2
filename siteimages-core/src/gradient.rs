//! Linear Gradient Backgrounds
//!
//! Angles use the CSS `linear-gradient` convention: 0° points up, 90° right,
//! 135° towards the bottom-right corner. The projection is normalised over the
//! four canvas corners so `from` and `to` sit exactly on opposite corners.
//!
//! Rows are filled by interpolating between the row's edge colors, sampled
//! every `stride` columns. Stride > 1 bands visibly; that is the accepted
//! look of the published artwork.

use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::color::Color;

pub const DEFAULT_STRIDE: u32 = 4;

fn default_stride() -> u32 {
    DEFAULT_STRIDE
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    pub from: Color,
    pub to: Color,
    pub angle_degrees: f64,
    #[serde(default = "default_stride")]
    pub stride: u32,
}

impl Gradient {
    pub fn new(from: Color, to: Color, angle_degrees: f64) -> Self {
        Self { from, to, angle_degrees, stride: DEFAULT_STRIDE }
    }

    pub fn with_stride(mut self, stride: u32) -> Self {
        self.stride = stride.max(1);
        self
    }

    pub fn paint(&self, canvas: &mut Canvas) {
        let (w, h) = (canvas.width(), canvas.height());
        if w == 0 || h == 0 {
            return;
        }
        let axis = Axis::new(self.angle_degrees, w as f64, h as f64);
        let stride = self.stride.max(1);

        for y in 0..h {
            let left = self.from.lerp(self.to, axis.t(0.0, y as f64));
            let right = self.from.lerp(self.to, axis.t(w as f64, y as f64));
            for x in (0..w).step_by(stride as usize) {
                let color = left.lerp(right, x as f64 / w as f64);
                for xs in x..(x + stride).min(w) {
                    canvas.put(xs, y, color);
                }
            }
        }
    }
}

/// Direction vector plus the projected extent of the canvas.
struct Axis {
    dx: f64,
    dy: f64,
    min: f64,
    span: f64,
}

impl Axis {
    fn new(angle_degrees: f64, w: f64, h: f64) -> Self {
        let rad = angle_degrees.to_radians();
        let (dx, dy) = (rad.sin(), -rad.cos());
        let corners = [(0.0, 0.0), (w, 0.0), (0.0, h), (w, h)].map(|(x, y)| x * dx + y * dy);
        let min = corners.iter().copied().fold(f64::INFINITY, f64::min);
        let max = corners.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self { dx, dy, min, span: (max - min).max(f64::EPSILON) }
    }

    fn t(&self, x: f64, y: f64) -> f64 {
        ((x * self.dx + y * self.dy - self.min) / self.span).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const C1: Color = Color::rgb(15, 55, 80);
    const C2: Color = Color::rgb(40, 100, 130);

    fn distance_sq(a: Color, b: Color) -> u32 {
        let d = |x: u8, y: u8| (x as i32 - y as i32).pow(2) as u32;
        d(a.r, b.r) + d(a.g, b.g) + d(a.b, b.b)
    }

    #[test]
    fn test_diagonal_trend_at_135() {
        let mut canvas = Canvas::new(64, 64);
        Gradient::new(C1, C2, 135.0).paint(&mut canvas);

        let start = canvas.pixel(0, 0);
        let end = canvas.pixel(63, 63);
        assert_eq!(start, C1);
        assert!(distance_sq(start, C1) < distance_sq(start, C2));
        assert!(distance_sq(end, C2) < distance_sq(end, C1));

        let mut prev = canvas.pixel(0, 0);
        for i in 1..64 {
            let p = canvas.pixel(i, i);
            assert!(p.r >= prev.r && p.g >= prev.g && p.b >= prev.b, "step {i}");
            prev = p;
        }
    }

    #[test]
    fn test_stride_replicates_samples() {
        let mut canvas = Canvas::new(32, 8);
        Gradient::new(C1, C2, 90.0).paint(&mut canvas);
        for x in (0..32).step_by(4) {
            for dx in 1..4 {
                assert_eq!(canvas.pixel(x, 3), canvas.pixel(x + dx, 3));
            }
        }
    }

    #[test]
    fn test_stride_one_is_per_pixel() {
        let mut coarse = Canvas::new(200, 10);
        let mut fine = Canvas::new(200, 10);
        let gradient = Gradient::new(Color::rgb(0, 0, 0), Color::rgb(255, 255, 255), 90.0);
        gradient.paint(&mut coarse);
        gradient.with_stride(1).paint(&mut fine);
        assert_ne!(coarse, fine);
        assert_ne!(fine.pixel(1, 0), fine.pixel(0, 0));
    }

    #[test]
    fn test_top_to_bottom_at_180() {
        let mut canvas = Canvas::new(16, 16);
        Gradient::new(C1, C2, 180.0).paint(&mut canvas);
        assert_eq!(canvas.pixel(0, 0), C1);
        let bottom = canvas.pixel(8, 15);
        assert!(distance_sq(bottom, C2) < distance_sq(bottom, C1));
    }

    #[test]
    fn test_zero_stride_treated_as_one() {
        let g = Gradient::new(C1, C2, 45.0).with_stride(0);
        assert_eq!(g.stride, 1);
    }
}
