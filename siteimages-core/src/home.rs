//! Home hero: a plumbing network with joints, water drops, wrenches and glow
//! rings over a blue gradient.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::color::palette::{LIGHT_BLUE, LIGHT_TEAL, MID_BLUE, SKY_BLUE, SOFT_WHITE, TEAL, WHITE};
use crate::color::Color;
use crate::gradient::Gradient;
use crate::motifs::diagonal_texture;
use crate::random::RandomSource;

const PIPE: i32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wrench {
    pub x: i32,
    pub y: i32,
    pub scale: f64,
}

/// Concentric rings shrinking by `step` and fading from light blue to white.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlowRings {
    pub cx: i32,
    pub cy: i32,
    pub radius: i32,
    pub rings: u32,
    pub step: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeScene {
    pub gradient: Gradient,
    pub horizontal_pipes: Vec<i32>,
    pub vertical_pipes: Vec<i32>,
    pub drops: u32,
    pub wrenches: Vec<Wrench>,
    pub glows: Vec<GlowRings>,
    pub texture_pitch: u32,
}

impl Default for HomeScene {
    fn default() -> Self {
        let glow = |cx, cy, radius| GlowRings { cx, cy, radius, rings: 5, step: 15 };
        Self {
            gradient: Gradient::new(Color::rgb(15, 55, 80), Color::rgb(40, 100, 130), 135.0),
            horizontal_pipes: vec![100, 250, 420, 580, 720],
            vertical_pipes: vec![150, 400, 700, 1000, 1300, 1600, 1850],
            drops: 35,
            wrenches: vec![
                Wrench { x: 80, y: 300, scale: 3.0 },
                Wrench { x: 1200, y: 100, scale: 3.5 },
                Wrench { x: 600, y: 500, scale: 2.5 },
            ],
            glows: vec![glow(1650, 180, 200), glow(250, 620, 170), glow(950, 80, 140)],
            texture_pitch: 60,
        }
    }
}

impl HomeScene {
    pub fn paint(&self, canvas: &mut Canvas, rng: &mut impl RandomSource) {
        debug!("home hero: gradient at {} degrees", self.gradient.angle_degrees);
        self.gradient.paint(canvas);
        debug!(
            "home hero: {} horizontal and {} vertical pipes",
            self.horizontal_pipes.len(),
            self.vertical_pipes.len()
        );
        self.pipes(canvas);
        self.joints(canvas);
        debug!("home hero: {} water drops", self.drops);
        self.water_drops(canvas, rng);
        debug!("home hero: {} wrenches", self.wrenches.len());
        for wrench in &self.wrenches {
            wrench.draw(canvas);
        }
        debug!("home hero: {} glow rings", self.glows.len());
        for glow in &self.glows {
            glow.draw(canvas);
        }
        debug!("home hero: texture every {}px", self.texture_pitch);
        diagonal_texture(canvas, self.texture_pitch, TEAL.lerp(LIGHT_TEAL, 0.5));
    }

    fn pipes(&self, canvas: &mut Canvas) {
        let (w, h) = (canvas.width() as i32, canvas.height() as i32);
        for &y in &self.horizontal_pipes {
            canvas.fill_rect(0, y, w, y + PIPE, TEAL);
            canvas.fill_rect(0, y + 3, w, y + 8, LIGHT_TEAL);
            canvas.fill_rect(0, y + PIPE - 3, w, y + PIPE, MID_BLUE);
        }
        for &x in &self.vertical_pipes {
            canvas.fill_rect(x, 0, x + PIPE, h, TEAL);
            canvas.fill_rect(x + 3, 0, x + 8, h, LIGHT_TEAL);
            canvas.fill_rect(x + PIPE - 3, 0, x + PIPE, h, MID_BLUE);
        }
    }

    fn joints(&self, canvas: &mut Canvas) {
        for &x in &self.vertical_pipes {
            for &y in &self.horizontal_pipes {
                let (cx, cy) = (x + PIPE / 2, y + PIPE / 2);
                canvas.fill_disc(cx, cy, 25, LIGHT_BLUE);
                canvas.fill_disc(cx, cy, 17, TEAL);
                canvas.fill_disc(cx, cy, 7, LIGHT_TEAL);
            }
        }
    }

    fn water_drops(&self, canvas: &mut Canvas, rng: &mut impl RandomSource) {
        let (w, h) = (canvas.width() as i32, canvas.height() as i32);
        for _ in 0..self.drops {
            let x = rng.int_in(30, w - 30);
            let y = rng.int_in(30, h - 30);
            let size = rng.int_in(20, 50);
            let color = LIGHT_BLUE.lerp(SKY_BLUE, rng.unit());
            draw_drop(canvas, x, y, size, color);
        }
    }
}

/// Teardrop whose round belly starts at `y`; the point rises `size - 5` above.
fn draw_drop(canvas: &mut Canvas, x: i32, y: i32, size: i32, color: Color) {
    let r = size / 2;
    canvas.fill_ellipse(x - r, y, x + r, y + size, color);
    canvas.fill_polygon(&[(x, y - size + 5), (x - r + 3, y + 5), (x + r - 3, y + 5)], color);
    canvas.fill_ellipse(x - r / 3, y + r / 2, x + r / 3, y + r, WHITE);
}

impl Wrench {
    fn s(&self, v: i32) -> i32 {
        (v as f64 * self.scale) as i32
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        let (x, y) = (self.x, self.y);
        // handle and shine
        canvas.fill_rect(x, y, x + self.s(90), y + self.s(20), SOFT_WHITE);
        canvas.fill_rect(x, y + 2, x + self.s(90), y + self.s(6), WHITE);
        // head and jaw gap
        canvas.fill_rect(x + self.s(80), y - self.s(15), x + self.s(115), y + self.s(35), SOFT_WHITE);
        canvas.fill_rect(x + self.s(88), y + self.s(2), x + self.s(108), y + self.s(18), MID_BLUE);
    }
}

impl GlowRings {
    pub fn draw(&self, canvas: &mut Canvas) {
        for i in 0..self.rings {
            let r = self.radius - i as i32 * self.step;
            if r <= 0 {
                break;
            }
            let color = LIGHT_BLUE.lerp(WHITE, i as f64 / self.rings as f64);
            canvas.outline_circle(self.cx, self.cy, r, color, 2);
        }
    }
}
