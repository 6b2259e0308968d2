//! Terrain sampling for hex grids: fractal noise heightmaps, elevation
//! quantisation, and biome classification.

mod elevation;
mod error;
mod heightmap;
mod noise_field;
mod seed;

pub mod biome;

pub use biome::{Biome, BiomeClassifier, BiomeThresholds, BiomeTiering, Classification, Color};
pub use elevation::{ElevationMapper, ElevationSpan};
pub use error::TerrainError;
pub use heightmap::{HeightmapParams, HeightmapSampler, octave_weight_sum};
pub use noise_field::{NoiseField, PerlinField};
pub use seed::{OFFSET_RANGE, random_offset};
