//! Terrain sampling error types.

/// Errors raised when constructing terrain samplers from invalid parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TerrainError {
    /// A fractal sum needs at least one octave.
    #[error("octave count must be at least 1")]
    ZeroOctaves,

    /// The octave weights summed to zero, so the fractal sum cannot be normalised.
    #[error("octave weight normaliser is zero")]
    DegenerateNormalizer,

    /// The base noise frequency is NaN or infinite.
    #[error("noise frequency must be finite, got {0}")]
    NonFiniteFrequency(f64),

    /// The elevation range is inverted or not finite.
    #[error("invalid height range: min {min} > max {max}")]
    InvalidHeightRange {
        /// Lower elevation bound.
        min: f32,
        /// Upper elevation bound.
        max: f32,
    },
}
