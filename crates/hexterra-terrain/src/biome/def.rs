//! Biome variants.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A terrain category derived from elevation.
///
/// Variants are declared in ascending elevation order, so the derived `Ord`
/// matches the classification bands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Biome {
    /// At or below the water line; flattened to it.
    Water,
    /// The single band directly above the water line.
    Sand,
    /// Lowland up to the land ceiling.
    Grass,
    /// Up to the mountain ceiling.
    Mountain,
    /// Everything above the mountain ceiling.
    Snow,
}

impl Biome {
    /// Every variant, lowest first.
    pub const ALL: [Biome; 5] = [
        Self::Water,
        Self::Sand,
        Self::Grass,
        Self::Mountain,
        Self::Snow,
    ];

    /// Position of the variant in [`Biome::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lower-case display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Sand => "sand",
            Self::Grass => "grass",
            Self::Mountain => "mountain",
            Self::Snow => "snow",
        }
    }
}

impl fmt::Display for Biome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
