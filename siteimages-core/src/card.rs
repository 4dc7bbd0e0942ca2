//! Location cards: one 600x400 card per Bristol region, each with its own
//! colour scheme, a literal skyline and a compass pointing at the region.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::color::palette::{RED, WARM_ORANGE, WHITE, YELLOW_GLOW};
use crate::color::Color;
use crate::gradient::Gradient;
use crate::motifs::{diagonal_texture, draw_window, grid, Building, MapPin};

const ROOF_RISE: i32 = 14;
const WINDOW_ROW_PITCH: u32 = 20;
const GRADIENT_ANGLE: f64 = 140.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Center,
}

impl Direction {
    pub const CARDINALS: [Direction; 4] =
        [Direction::North, Direction::South, Direction::East, Direction::West];

    /// Screen angle of the arrow, `None` for the centre.
    pub fn angle_degrees(self) -> Option<f64> {
        match self {
            Direction::North => Some(-90.0),
            Direction::South => Some(90.0),
            Direction::East => Some(0.0),
            Direction::West => Some(180.0),
            Direction::Center => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub start: Color,
    pub end: Color,
    pub accent: Color,
    pub highlight: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompassDial {
    pub cx: i32,
    pub cy: i32,
    pub radius: i32,
}

impl CompassDial {
    pub const CARD: CompassDial = CompassDial { cx: 490, cy: 90, radius: 50 };

    /// Centre of the cardinal mark for `direction`.
    pub fn mark_position(&self, direction: Direction) -> Option<(i32, i32)> {
        let reach = (self.radius + 14) as f64;
        direction.angle_degrees().map(|a| {
            let a = a.to_radians();
            (self.cx + (reach * a.cos()) as i32, self.cy + (reach * a.sin()) as i32)
        })
    }

    pub fn arrow_tip(&self, direction: Direction) -> Option<(i32, i32)> {
        let len = (self.radius - 14) as f64;
        direction.angle_degrees().map(|a| {
            let a = a.to_radians();
            (self.cx + (len * a.cos()) as i32, self.cy + (len * a.sin()) as i32)
        })
    }

    pub fn draw(&self, canvas: &mut Canvas, direction: Direction, highlight: Color) {
        let (cx, cy, r) = (self.cx, self.cy, self.radius);
        canvas.outline_circle(cx, cy, r, WARM_ORANGE, 3);
        canvas.outline_circle(cx, cy, r - 10, highlight, 2);

        match self.arrow_tip(direction) {
            None => {
                canvas.fill_disc(cx, cy, 20, RED);
                canvas.fill_disc(cx, cy, 8, WHITE);
            }
            Some(tip) => {
                canvas.line((cx, cy), tip, WARM_ORANGE, 4);
                canvas.fill_disc(tip.0, tip.1, 7, RED);
            }
        }
        canvas.fill_disc(cx, cy, 5, WARM_ORANGE);

        for cardinal in Direction::CARDINALS {
            if let Some((mx, my)) = self.mark_position(cardinal) {
                let color = if cardinal == direction { RED } else { highlight };
                canvas.fill_disc(mx, my, 4, color);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardScene {
    pub direction: Direction,
    pub scheme: ColorScheme,
    pub buildings: Vec<Building>,
}

impl CardScene {
    pub const GRID_PITCH: u32 = 40;
    pub const TEXTURE_PITCH: u32 = 50;
    pub const PIN: (i32, i32) = (130, 170);
    pub const RINGS: [(i32, i32, i32); 2] = [(60, 70, 70), (350, 250, 50)];

    pub fn new(direction: Direction, scheme: ColorScheme, buildings: Vec<Building>) -> Self {
        Self { direction, scheme, buildings }
    }

    pub fn paint(&self, canvas: &mut Canvas) {
        let ColorScheme { start, end, accent, highlight } = self.scheme;

        debug!("location card {:?}: gradient and grid", self.direction);
        Gradient::new(start, end, GRADIENT_ANGLE).paint(canvas);
        grid(canvas, Self::GRID_PITCH, accent.lerp(highlight, 0.3));
        debug!("location card {:?}: {} buildings", self.direction, self.buildings.len());
        self.skyline(canvas);
        debug!("location card {:?}: compass dial", self.direction);
        CompassDial::CARD.draw(canvas, self.direction, highlight);

        debug!("location card {:?}: pin, rings and texture", self.direction);
        let (px, py) = Self::PIN;
        MapPin::SMALL.draw(canvas, px, py);
        for (cx, cy, r) in Self::RINGS {
            canvas.outline_circle(cx, cy, r, highlight, 2);
        }
        diagonal_texture(canvas, Self::TEXTURE_PITCH, accent.lerp(highlight, 0.4));
    }

    fn skyline(&self, canvas: &mut Canvas) {
        let base_y = canvas.height() as i32 - 10;
        for building in &self.buildings {
            building.draw(canvas, base_y, ROOF_RISE, self.scheme.accent);
            for slot in building.window_slots(base_y, WINDOW_ROW_PITCH) {
                draw_window(canvas, slot, YELLOW_GLOW);
            }
        }
    }
}
