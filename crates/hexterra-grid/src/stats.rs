//! Per-pass diagnostics.

use hexterra_terrain::Biome;

/// Running min/max of observed height coefficients.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightStats {
    /// Smallest coefficient seen, `+inf` when empty.
    pub min: f64,
    /// Largest coefficient seen, `-inf` when empty.
    pub max: f64,
    /// Number of samples recorded.
    pub count: usize,
}

impl Default for HeightStats {
    fn default() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            count: 0,
        }
    }
}

impl HeightStats {
    /// Stats with one more sample.
    pub fn with(self, coefficient: f64) -> Self {
        Self {
            min: self.min.min(coefficient),
            max: self.max.max(coefficient),
            count: self.count + 1,
        }
    }

    /// Combine two partial results. Order does not matter.
    pub fn merge(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
            count: self.count + other.count,
        }
    }

    /// No samples recorded yet.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Number of cells assigned to each biome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BiomeCounts([usize; Biome::ALL.len()]);

impl BiomeCounts {
    /// Count one more cell of `biome`.
    pub fn record(&mut self, biome: Biome) {
        self.0[biome.index()] += 1;
    }

    /// Cells assigned to `biome`.
    pub fn get(&self, biome: Biome) -> usize {
        self.0[biome.index()]
    }

    /// Cells across all biomes.
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// `(biome, count)` pairs in [`Biome::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Biome, usize)> + '_ {
        Biome::ALL.iter().map(|&b| (b, self.get(b)))
    }
}
