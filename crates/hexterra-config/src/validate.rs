//! Up-front validation of a configuration.

use crate::config::Config;
use crate::error::ValidationError;

impl Config {
    /// Check that the configuration describes a generatable grid.
    ///
    /// Returns the first problem found; nothing is generated for an invalid
    /// configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let grid = &self.grid;

        if grid.width == 0 || grid.height == 0 {
            return Err(ValidationError::InvalidDimensions {
                width: grid.width,
                height: grid.height,
            });
        }
        if grid.octaves < 1 {
            return Err(ValidationError::InvalidOctaves(grid.octaves));
        }

        let t = &self.biomes.thresholds;
        if !t.is_monotonic() {
            return Err(ValidationError::NonMonotonicThresholds {
                water_height: t.water_height,
                land_ceiling: t.land_ceiling,
                mountain_ceiling: t.mountain_ceiling,
            });
        }

        for (name, value) in [
            ("grid.inner_size", grid.inner_size),
            ("grid.outer_size", grid.outer_size),
            ("grid.min_height", grid.min_height),
            ("grid.max_height", grid.max_height),
        ] {
            if !value.is_finite() {
                return Err(ValidationError::NonFinite(name));
            }
        }
        if !grid.noise_frequency.is_finite() {
            return Err(ValidationError::NonFinite("grid.noise_frequency"));
        }
        if grid.noise_offset.iter().any(|v| !v.is_finite()) {
            return Err(ValidationError::NonFinite("grid.noise_offset"));
        }

        if grid.inner_size < 0.0 || grid.outer_size < 0.0 {
            return Err(ValidationError::NegativeRadius {
                inner: grid.inner_size,
                outer: grid.outer_size,
            });
        }
        if grid.inner_size > grid.outer_size {
            return Err(ValidationError::InnerExceedsOuter {
                inner: grid.inner_size,
                outer: grid.outer_size,
            });
        }
        if grid.min_height > grid.max_height {
            return Err(ValidationError::InvertedHeightRange {
                min: grid.min_height,
                max: grid.max_height,
            });
        }

        Ok(())
    }
}
