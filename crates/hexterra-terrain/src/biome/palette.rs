//! Display colors for biomes and the greyscale height view.

use serde::{Deserialize, Serialize};

use super::Biome;

/// Linear RGBA color with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha.
    pub a: f32,
}

impl Color {
    /// Water.
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    /// Grass.
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    /// Mountain.
    pub const GREY: Color = Color::rgb(0.5, 0.5, 0.5);
    /// Snow.
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    /// Sand.
    pub const YELLOW: Color = Color::rgb(1.0, 0.92, 0.016);

    /// Opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Opaque grey of the given brightness, clamped to `[0, 1]`.
    pub fn grey(value: f32) -> Self {
        let v = value.clamp(0.0, 1.0);
        Self::rgb(v, v, v)
    }

    /// Quantise to 8-bit RGBA.
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

impl Biome {
    /// Fixed display color of the biome.
    pub fn color(self) -> Color {
        match self {
            Biome::Water => Color::BLUE,
            Biome::Sand => Color::YELLOW,
            Biome::Grass => Color::GREEN,
            Biome::Mountain => Color::GREY,
            Biome::Snow => Color::WHITE,
        }
    }
}
