//! Conversion of height coefficients into discrete elevations.

use serde::{Deserialize, Serialize};

use crate::error::TerrainError;

/// How the `[0, 1]` coefficient is stretched over the elevation range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElevationSpan {
    /// Scale by `max - min`; a coefficient of 1.0 lands exactly on `max`.
    #[default]
    Exact,
    /// Scale by `max + 1 - min`; the top band is as wide as the others and
    /// values above `max` are clamped back down.
    Inclusive,
}

impl ElevationSpan {
    /// Width of the range the coefficient is multiplied by.
    pub fn range(self, min: f32, max: f32) -> f32 {
        match self {
            Self::Exact => max - min,
            Self::Inclusive => max + 1.0 - min,
        }
    }
}

/// Maps height coefficients to whole-unit elevations within `[min, max]`.
///
/// Rounding is half-away-from-zero, so a coefficient landing exactly halfway
/// between two levels always picks the higher one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElevationMapper {
    min_height: f32,
    max_height: f32,
    span: ElevationSpan,
}

impl ElevationMapper {
    /// Create a mapper.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::InvalidHeightRange`] if either bound is not
    /// finite or `min_height > max_height`.
    pub fn new(min_height: f32, max_height: f32, span: ElevationSpan) -> Result<Self, TerrainError> {
        if !min_height.is_finite() || !max_height.is_finite() || min_height > max_height {
            return Err(TerrainError::InvalidHeightRange {
                min: min_height,
                max: max_height,
            });
        }
        Ok(Self {
            min_height,
            max_height,
            span,
        })
    }

    /// Elevation for a height coefficient.
    pub fn elevation(&self, coefficient: f64) -> f32 {
        let range = f64::from(self.span.range(self.min_height, self.max_height));
        let height = (coefficient * range).round() + f64::from(self.min_height);
        height.clamp(f64::from(self.min_height), f64::from(self.max_height)) as f32
    }

    /// Lower elevation bound.
    pub fn min_height(&self) -> f32 {
        self.min_height
    }

    /// Upper elevation bound.
    pub fn max_height(&self) -> f32 {
        self.max_height
    }
}
