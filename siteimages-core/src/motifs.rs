//! Motifs shared by several scenes: map grids, texture strokes, pins and
//! buildings.

use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::color::palette::{RED, WHITE};
use crate::color::Color;

/// Width and height of one lit window.
const WINDOW_W: i32 = 6;
const WINDOW_H: i32 = 10;
const WINDOW_COLUMN_PITCH: usize = 14;

/// Faint map grid of 1px lines every `pitch` pixels, starting at the origin.
pub fn grid(canvas: &mut Canvas, pitch: u32, color: Color) {
    let (w, h) = (canvas.width() as i32, canvas.height() as i32);
    let pitch = pitch.max(1) as usize;
    for x in (0..w).step_by(pitch) {
        canvas.line((x, 0), (x, h), color, 1);
    }
    for y in (0..h).step_by(pitch) {
        canvas.line((0, y), (w, y), color, 1);
    }
}

/// Hairline strokes running down-right at 45°, spaced `pitch` apart and
/// covering the whole canvas.
pub fn diagonal_texture(canvas: &mut Canvas, pitch: u32, color: Color) {
    let (w, h) = (canvas.width() as i32, canvas.height() as i32);
    for i in (-h..w + h).step_by(pitch.max(1) as usize) {
        canvas.line((i, 0), (i + h, h), color, 1);
    }
}

/// Teardrop map marker: disc, pointed base and a white centre dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapPin {
    pub head_radius: i32,
    /// Half-width of the base triangle and its vertical offset from the centre.
    pub shoulder: i32,
    /// Distance from the centre down to the point.
    pub tip: i32,
    pub dot_radius: i32,
}

impl MapPin {
    pub const LARGE: MapPin = MapPin { head_radius: 20, shoulder: 12, tip: 45, dot_radius: 7 };
    pub const SMALL: MapPin = MapPin { head_radius: 16, shoulder: 10, tip: 38, dot_radius: 6 };

    pub fn draw(&self, canvas: &mut Canvas, x: i32, y: i32) {
        canvas.fill_disc(x, y, self.head_radius, RED);
        canvas.fill_polygon(
            &[
                (x - self.shoulder, y + self.shoulder),
                (x, y + self.tip),
                (x + self.shoulder, y + self.shoulder),
            ],
            RED,
        );
        canvas.fill_disc(x, y, self.dot_radius, WHITE);
    }
}

/// One skyline building standing on the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    pub x: i32,
    pub width: i32,
    pub height: i32,
    pub roof: bool,
}

impl Building {
    pub const fn new(x: i32, width: i32, height: i32, roof: bool) -> Self {
        Self { x, width, height, roof }
    }

    /// Body plus an optional pointed roof rising `roof_rise` above the top.
    pub fn draw(&self, canvas: &mut Canvas, base_y: i32, roof_rise: i32, color: Color) {
        let top = base_y - self.height;
        canvas.fill_rect(self.x, top, self.x + self.width, base_y, color);
        if self.roof {
            canvas.fill_polygon(
                &[
                    (self.x - 2, top),
                    (self.x + self.width / 2, top - roof_rise),
                    (self.x + self.width + 2, top),
                ],
                color,
            );
        }
    }

    /// Top-left corners of every window slot, row by row.
    pub fn window_slots(&self, base_y: i32, row_pitch: u32) -> Vec<(i32, i32)> {
        let right = self.x + self.width;
        let mut slots = vec![];
        for wy in (base_y - self.height + 12..base_y - 8).step_by(row_pitch.max(1) as usize) {
            for wx in (self.x + 6..right - 6).step_by(WINDOW_COLUMN_PITCH) {
                if wx + WINDOW_W < right - 3 {
                    slots.push((wx, wy));
                }
            }
        }
        slots
    }
}

pub fn draw_window(canvas: &mut Canvas, (x, y): (i32, i32), color: Color) {
    canvas.fill_rect(x, y, x + WINDOW_W, y + WINDOW_H, color);
}
