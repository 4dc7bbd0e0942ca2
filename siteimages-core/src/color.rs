//! Colors and the shared palette.

use image::Rgb;
use serde::{Deserialize, Serialize};

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation towards `other`, truncating each channel.
    ///
    /// `t` is clamped to `[0, 1]`, so `t = 0` yields `self` and `t = 1`
    /// yields `other` exactly.
    pub fn lerp(self, other: Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t) as u8;
        Color {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }
}

impl From<Color> for Rgb<u8> {
    fn from(c: Color) -> Self {
        Rgb([c.r, c.g, c.b])
    }
}

impl From<Rgb<u8>> for Color {
    fn from(p: Rgb<u8>) -> Self {
        Color::rgb(p[0], p[1], p[2])
    }
}

/// Named colors shared by every scene.
pub mod palette {
    use super::Color;

    pub const MID_BLUE: Color = Color::rgb(20, 70, 100);
    pub const TEAL: Color = Color::rgb(30, 130, 150);
    pub const LIGHT_TEAL: Color = Color::rgb(60, 180, 200);
    pub const LIGHT_BLUE: Color = Color::rgb(100, 200, 230);
    pub const SKY_BLUE: Color = Color::rgb(140, 210, 240);
    pub const WARM_ORANGE: Color = Color::rgb(244, 162, 97);
    pub const RED: Color = Color::rgb(230, 57, 70);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const SOFT_WHITE: Color = Color::rgb(200, 220, 230);
    pub const YELLOW_GLOW: Color = Color::rgb(255, 220, 120);
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::palette::*;

    #[test]
    fn test_lerp_endpoints_exact() {
        let pairs = [(MID_BLUE, WHITE), (RED, TEAL), (YELLOW_GLOW, MID_BLUE)];
        for (a, b) in pairs {
            assert_eq!(a.lerp(b, 0.0), a);
            assert_eq!(a.lerp(b, 1.0), b);
        }
    }

    #[test]
    fn test_lerp_truncates() {
        let c = Color::rgb(0, 0, 0).lerp(Color::rgb(3, 10, 255), 0.5);
        assert_eq!(c, Color::rgb(1, 5, 127));
        // Descending channels truncate towards zero as well.
        let d = Color::rgb(255, 10, 3).lerp(Color::rgb(0, 0, 0), 0.5);
        assert_eq!(d, Color::rgb(127, 5, 1));
    }

    #[test]
    fn test_lerp_clamps_parameter() {
        assert_eq!(TEAL.lerp(LIGHT_TEAL, -1.0), TEAL);
        assert_eq!(TEAL.lerp(LIGHT_TEAL, 2.5), LIGHT_TEAL);
    }

    #[test]
    fn test_rgb_conversion() {
        let p: Rgb<u8> = WARM_ORANGE.into();
        assert_eq!(p, Rgb([244, 162, 97]));
        assert_eq!(Color::from(p), WARM_ORANGE);
    }
}
