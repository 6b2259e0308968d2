//! Threshold-based biome classification.

use serde::{Deserialize, Serialize};

use super::{Biome, Color};

/// Integer elevation cutoffs separating the biome bands.
///
/// Classification is only well defined when the cutoffs are non-decreasing;
/// see [`BiomeThresholds::is_monotonic`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiomeThresholds {
    /// Highest elevation that is still water.
    pub water_height: i32,
    /// Highest elevation that is still grass.
    pub land_ceiling: i32,
    /// Highest elevation that is still mountain.
    pub mountain_ceiling: i32,
}

impl BiomeThresholds {
    /// Create thresholds from the three cutoffs.
    pub const fn new(water_height: i32, land_ceiling: i32, mountain_ceiling: i32) -> Self {
        Self {
            water_height,
            land_ceiling,
            mountain_ceiling,
        }
    }

    /// `water_height <= land_ceiling <= mountain_ceiling`.
    pub fn is_monotonic(&self) -> bool {
        self.water_height <= self.land_ceiling && self.land_ceiling <= self.mountain_ceiling
    }
}

impl Default for BiomeThresholds {
    fn default() -> Self {
        Self::new(6, 9, 10)
    }
}

/// Which band layout the classifier uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BiomeTiering {
    /// Water, Sand, Grass, Mountain, Snow. Sand is the single level above water.
    #[default]
    FiveTier,
    /// Water, Grass, Mountain, Snow. Never yields [`Biome::Sand`].
    FourTier,
}

/// Result of classifying one elevation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    /// Assigned biome.
    pub biome: Biome,
    /// Display color of the biome.
    pub color: Color,
    /// Elevation to build geometry with: the water line for water, otherwise
    /// the input elevation unchanged.
    pub elevation: f32,
}

/// Assigns biomes to elevations using ordered threshold comparisons.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BiomeClassifier {
    thresholds: BiomeThresholds,
    tiering: BiomeTiering,
}

impl BiomeClassifier {
    /// Five-tier classifier over `thresholds`.
    pub fn new(thresholds: BiomeThresholds) -> Self {
        Self::with_tiering(thresholds, BiomeTiering::FiveTier)
    }

    /// Classifier with an explicit band layout.
    pub fn with_tiering(thresholds: BiomeThresholds, tiering: BiomeTiering) -> Self {
        Self {
            thresholds,
            tiering,
        }
    }

    /// Biome for `height`, using its integer part (truncated toward zero).
    pub fn biome(&self, height: f32) -> Biome {
        let h = height.trunc() as i32;
        let t = &self.thresholds;
        match self.tiering {
            BiomeTiering::FiveTier => {
                if h <= t.water_height {
                    Biome::Water
                } else if h == t.water_height.saturating_add(1) {
                    Biome::Sand
                } else if h <= t.land_ceiling {
                    Biome::Grass
                } else if h <= t.mountain_ceiling {
                    Biome::Mountain
                } else {
                    Biome::Snow
                }
            }
            BiomeTiering::FourTier => {
                if h <= t.water_height {
                    Biome::Water
                } else if h <= t.land_ceiling {
                    Biome::Grass
                } else if h <= t.mountain_ceiling {
                    Biome::Mountain
                } else {
                    Biome::Snow
                }
            }
        }
    }

    /// Classify `height`, flattening water to the water line.
    pub fn classify(&self, height: f32) -> Classification {
        let biome = self.biome(height);
        let elevation = match biome {
            Biome::Water => self.thresholds.water_height as f32,
            _ => height,
        };
        Classification {
            biome,
            color: biome.color(),
            elevation,
        }
    }

    /// The cutoffs in use.
    pub fn thresholds(&self) -> &BiomeThresholds {
        &self.thresholds
    }

    /// The band layout in use.
    pub fn tiering(&self) -> BiomeTiering {
        self.tiering
    }
}
