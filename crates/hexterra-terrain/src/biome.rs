//! Biome system: elevation bands, classification, and display colors.
//!
//! Elevations are split into ordered bands by [`BiomeThresholds`]. Water cells
//! are flattened to the water line so every water tile renders on one plane.

mod classifier;
mod def;
mod palette;

pub use classifier::{BiomeClassifier, BiomeThresholds, BiomeTiering, Classification};
pub use def::Biome;
pub use palette::Color;
