//! Canvas - Owned RGB Pixel Buffer
//!
//! Coordinates follow bounding-box conventions: every `x1`/`y1` is inclusive.
//! Rasterisation is delegated to `imageproc`; this module only translates
//! boxes and strokes into its calls. Everything is clipped to the canvas.

use image::RgbImage;
use imageproc::drawing::{
    draw_filled_ellipse_mut, draw_filled_rect_mut, draw_line_segment_mut, draw_polygon_mut,
};
use imageproc::point::Point;
use imageproc::rect::Rect;

use crate::color::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// A black canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self { image: RgbImage::new(width, height) }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        (*self.image.get_pixel(x, y)).into()
    }

    pub fn put(&mut self, x: u32, y: u32, color: Color) {
        if x < self.width() && y < self.height() {
            self.image.put_pixel(x, y, color.into());
        }
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }

    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        if x1 < x0 || y1 < y0 {
            return;
        }
        let rect = Rect::at(x0, y0).of_size((x1 - x0 + 1) as u32, (y1 - y0 + 1) as u32);
        draw_filled_rect_mut(&mut self.image, rect, color.into());
    }

    pub fn fill_ellipse(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let (center, rx, ry) = ellipse_geometry(x0, y0, x1, y1);
        draw_filled_ellipse_mut(&mut self.image, center, rx, ry, color.into());
    }

    /// Solid band of `width` pixels drawn inwards from the bounding box.
    ///
    /// A pixel is set when its centre lies inside the outer ellipse and
    /// outside the one inset by `width`.
    pub fn outline_ellipse(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color, width: i32) {
        let ((cx, cy), rx, ry) = ellipse_geometry(x0, y0, x1, y1);
        let width = width.max(1);
        let outer = (rx as f64 + 0.5, ry as f64 + 0.5);
        let inner = ((rx - width) as f64 + 0.5, (ry - width) as f64 + 0.5);
        let inside = |(ax, ay): (f64, f64), dx: f64, dy: f64| {
            ax > 0.0 && ay > 0.0 && (dx / ax).powi(2) + (dy / ay).powi(2) <= 1.0
        };

        let xs = (cx - rx).max(0)..=(cx + rx).min(self.width() as i32 - 1);
        for y in (cy - ry).max(0)..=(cy + ry).min(self.height() as i32 - 1) {
            for x in xs.clone() {
                let (dx, dy) = ((x - cx) as f64, (y - cy) as f64);
                if inside(outer, dx, dy) && !inside(inner, dx, dy) {
                    self.image.put_pixel(x as u32, y as u32, color.into());
                }
            }
        }
    }

    pub fn fill_disc(&mut self, cx: i32, cy: i32, r: i32, color: Color) {
        self.fill_ellipse(cx - r, cy - r, cx + r, cy + r, color);
    }

    pub fn outline_circle(&mut self, cx: i32, cy: i32, r: i32, color: Color, width: i32) {
        self.outline_ellipse(cx - r, cy - r, cx + r, cy + r, color, width);
    }

    pub fn fill_polygon(&mut self, points: &[(i32, i32)], color: Color) {
        let mut poly: Vec<Point<i32>> = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
        // imageproc rejects explicitly closed polygons.
        while poly.len() > 1 && poly.first() == poly.last() {
            poly.pop();
        }
        if poly.len() < 3 {
            return;
        }
        draw_polygon_mut(&mut self.image, &poly, color.into());
    }

    /// Straight stroke of `width` parallel 1px segments centred on the path.
    pub fn line(&mut self, from: (i32, i32), to: (i32, i32), color: Color, width: i32) {
        let width = width.max(1);
        // Offset across the minor axis of the stroke.
        let steep = (to.1 - from.1).abs() > (to.0 - from.0).abs();
        for i in 0..width {
            let offset = (i - (width - 1) / 2) as f32;
            let (ox, oy) = if steep { (offset, 0.0) } else { (0.0, offset) };
            draw_line_segment_mut(
                &mut self.image,
                (from.0 as f32 + ox, from.1 as f32 + oy),
                (to.0 as f32 + ox, to.1 as f32 + oy),
                color.into(),
            );
        }
    }
}

fn ellipse_geometry(x0: i32, y0: i32, x1: i32, y1: i32) -> ((i32, i32), i32, i32) {
    (((x0 + x1) / 2, (y0 + y1) / 2), (x1 - x0) / 2, (y1 - y0) / 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::palette::{RED, WHITE};

    const BLACK: Color = Color::rgb(0, 0, 0);

    #[test]
    fn test_rect_is_inclusive_and_clipped() {
        let mut canvas = Canvas::new(10, 10);
        canvas.fill_rect(2, 2, 4, 3, RED);
        assert_eq!(canvas.pixel(2, 2), RED);
        assert_eq!(canvas.pixel(4, 3), RED);
        assert_eq!(canvas.pixel(5, 3), BLACK);
        assert_eq!(canvas.pixel(4, 4), BLACK);

        canvas.fill_rect(-5, 8, 20, 30, WHITE);
        assert_eq!(canvas.pixel(0, 9), WHITE);
        assert_eq!(canvas.pixel(9, 8), WHITE);
    }

    #[test]
    fn test_disc_covers_centre_not_corners() {
        let mut canvas = Canvas::new(21, 21);
        canvas.fill_disc(10, 10, 8, RED);
        assert_eq!(canvas.pixel(10, 10), RED);
        assert_eq!(canvas.pixel(10, 3), RED);
        assert_eq!(canvas.pixel(1, 1), BLACK);
    }

    #[test]
    fn test_outline_leaves_centre_empty() {
        let mut canvas = Canvas::new(41, 41);
        canvas.outline_circle(20, 20, 15, WHITE, 2);
        assert_eq!(canvas.pixel(20, 20), BLACK);
        assert_eq!(canvas.pixel(35, 20), WHITE);
        assert_eq!(canvas.pixel(34, 20), WHITE);
    }

    #[test]
    fn test_outline_band_has_no_gaps() {
        for (r, width) in [(50, 2), (200, 2), (50, 3), (15, 4)] {
            let mut canvas = Canvas::new(501, 501);
            canvas.outline_circle(250, 250, r, WHITE, width);
            let (lo, hi) = ((r - width) as f64 + 0.6, r as f64 - 0.4);
            let mut band = 0;
            for y in 0..501u32 {
                for x in 0..501u32 {
                    let d = ((x as f64 - 250.0).powi(2) + (y as f64 - 250.0).powi(2)).sqrt();
                    if d >= lo && d <= hi {
                        band += 1;
                        assert_eq!(canvas.pixel(x, y), WHITE, "r={r} width={width} ({x}, {y})");
                    } else if d > r as f64 + 0.6 || d < (r - width) as f64 + 0.4 {
                        assert_eq!(canvas.pixel(x, y), BLACK, "r={r} width={width} ({x}, {y})");
                    }
                }
            }
            assert!(band > 0);
        }
    }

    #[test]
    fn test_outline_clipped_at_edges() {
        let mut canvas = Canvas::new(20, 20);
        canvas.outline_circle(0, 0, 10, RED, 2);
        assert_eq!(canvas.pixel(10, 0), RED);
        assert_eq!(canvas.pixel(0, 9), RED);
        assert_eq!(canvas.pixel(0, 0), BLACK);
    }

    #[test]
    fn test_thick_vertical_line() {
        let mut canvas = Canvas::new(20, 20);
        canvas.line((10, 2), (10, 17), RED, 4);
        for x in 9..=12 {
            assert_eq!(canvas.pixel(x, 10), RED, "column {x}");
        }
        assert_eq!(canvas.pixel(8, 10), BLACK);
        assert_eq!(canvas.pixel(13, 10), BLACK);
    }

    #[test]
    fn test_closed_polygon_accepted() {
        let mut canvas = Canvas::new(20, 20);
        canvas.fill_polygon(&[(2, 2), (17, 2), (10, 17), (2, 2)], RED);
        assert_eq!(canvas.pixel(10, 5), RED);
    }

    #[test]
    fn test_put_outside_is_ignored() {
        let mut canvas = Canvas::new(4, 4);
        canvas.put(4, 0, RED);
        canvas.put(0, 100, RED);
        assert!(canvas.as_image().pixels().all(|p| Color::from(*p) == BLACK));
    }
}
