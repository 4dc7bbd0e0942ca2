//! Locations hero: a random Bristol skyline, the suspension bridge, map pins
//! and a compass over a map grid.

use std::f64::consts::PI;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::color::palette::{LIGHT_BLUE, LIGHT_TEAL, MID_BLUE, RED, SKY_BLUE, TEAL, WARM_ORANGE, YELLOW_GLOW};
use crate::color::Color;
use crate::gradient::Gradient;
use crate::motifs::{draw_window, grid, Building, MapPin};
use crate::random::RandomSource;

const ROOF_RISE: i32 = 18;
const WINDOW_ROW_PITCH: u32 = 22;

/// Suspension bridge anchored on two towers; x positions are the towers'
/// left edges, heights are measured up from the skyline baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bridge {
    pub left_tower: i32,
    pub right_tower: i32,
    pub tower_width: i32,
    pub tower_height: i32,
    pub sag: i32,
}

/// Orange target rings with cross-hairs and a red north marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompassRose {
    pub cx: i32,
    pub cy: i32,
    pub radii: Vec<i32>,
    pub arm: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationsScene {
    pub gradient: Gradient,
    pub grid_pitch: u32,
    pub bridge: Bridge,
    pub pins: Vec<(i32, i32)>,
    pub compass: CompassRose,
}

impl Default for LocationsScene {
    fn default() -> Self {
        Self {
            gradient: Gradient::new(Color::rgb(12, 45, 70), Color::rgb(35, 90, 120), 150.0),
            grid_pitch: 60,
            bridge: Bridge { left_tower: 750, right_tower: 1145, tower_width: 25, tower_height: 250, sag: 55 },
            pins: vec![(280, 150), (580, 200), (960, 120), (1340, 170), (1680, 140)],
            compass: CompassRose { cx: 960, cy: 280, radii: vec![180, 140, 100], arm: 90 },
        }
    }
}

impl LocationsScene {
    pub fn paint(&self, canvas: &mut Canvas, rng: &mut impl RandomSource) {
        let base_y = canvas.height() as i32 - 10;
        debug!("locations hero: gradient, grid every {}px", self.grid_pitch);
        self.gradient.paint(canvas);
        grid(canvas, self.grid_pitch, TEAL.lerp(LIGHT_TEAL, 0.3));

        let skyline = plan_skyline(canvas.width() as i32, rng);
        debug!("locations hero: {} buildings", skyline.len());
        paint_skyline(canvas, base_y, &skyline, rng);

        debug!("locations hero: bridge span {}px", self.bridge.span());
        self.bridge.draw(canvas, base_y);
        debug!("locations hero: {} pins", self.pins.len());
        for &(x, y) in &self.pins {
            MapPin::LARGE.draw(canvas, x, y);
        }
        debug!("locations hero: compass at ({}, {})", self.compass.cx, self.compass.cy);
        self.compass.draw(canvas);
    }
}

/// Places buildings left to right until the row is full; the random widths
/// and gaps decide how many fit.
pub fn plan_skyline(width: i32, rng: &mut impl RandomSource) -> Vec<Building> {
    let mut buildings = vec![];
    let mut x = 10;
    while x < width - 20 {
        let w = rng.int_in(35, 70);
        let h = rng.int_in(60, 200);
        let roof = rng.unit() > 0.4;
        buildings.push(Building::new(x, w, h, roof));
        x += w + rng.int_in(3, 12);
    }
    buildings
}

fn paint_skyline(canvas: &mut Canvas, base_y: i32, buildings: &[Building], rng: &mut impl RandomSource) {
    let body = MID_BLUE.lerp(TEAL, 0.4);
    for building in buildings {
        let color = body.lerp(LIGHT_TEAL, rng.unit() * 0.3);
        building.draw(canvas, base_y, ROOF_RISE, color);
        for slot in building.window_slots(base_y, WINDOW_ROW_PITCH) {
            if rng.unit() > 0.3 {
                draw_window(canvas, slot, YELLOW_GLOW);
            }
        }
    }
}

impl Bridge {
    fn span(&self) -> i32 {
        self.right_tower + self.tower_width - self.left_tower
    }

    /// Cable height above the deck at `offset` pixels from the left tower.
    fn sag_at(&self, offset: i32) -> i32 {
        let t = offset as f64 / self.span() as f64;
        (self.sag as f64 * (PI * t).sin()) as i32
    }

    pub fn draw(&self, canvas: &mut Canvas, base_y: i32) {
        let top = base_y - self.tower_height;
        for x in [self.left_tower, self.right_tower] {
            canvas.fill_rect(x, top, x + self.tower_width, base_y - 60, SKY_BLUE);
            let mid = x + self.tower_width / 2;
            canvas.fill_polygon(&[(x - 5, top), (mid, top - 25), (x + self.tower_width + 5, top)], SKY_BLUE);
        }

        let deck_left = self.left_tower + self.tower_width;
        canvas.fill_rect(deck_left, base_y - 80, self.right_tower, base_y - 68, LIGHT_BLUE);

        for offset in (0..self.span()).step_by(2) {
            let x = self.left_tower + offset;
            let y = top + self.sag_at(offset);
            canvas.fill_rect(x, y, x + 2, y + 2, LIGHT_BLUE);
        }
        // Suspenders hang from the deck end of the left tower.
        for offset in (30..self.span() - 30).step_by(25) {
            let x = deck_left + offset;
            canvas.line((x, top + self.sag_at(offset)), (x, base_y - 72), LIGHT_BLUE, 1);
        }
    }
}

impl CompassRose {
    pub fn draw(&self, canvas: &mut Canvas) {
        let (cx, cy, arm) = (self.cx, self.cy, self.arm);
        for &r in &self.radii {
            canvas.outline_circle(cx, cy, r, WARM_ORANGE, 2);
        }
        canvas.line((cx, cy - arm), (cx, cy + arm), WARM_ORANGE, 2);
        canvas.line((cx - arm, cy), (cx + arm, cy), WARM_ORANGE, 2);
        canvas.fill_disc(cx, cy - arm + 3, 8, RED);
    }
}
