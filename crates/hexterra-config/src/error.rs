//! Configuration error types.

/// Errors that can occur when loading, saving, parsing, or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the config file from disk.
    #[error("failed to read config: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to write the config file to disk.
    #[error("failed to write config: {0}")]
    WriteError(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse config: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// Failed to serialize config to RON.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] ron::Error),

    /// The config parsed but describes a grid that cannot be generated.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// A configuration that cannot produce a grid. Reported before any cell is built.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Width or height is zero.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions {
        /// Configured column count.
        width: u32,
        /// Configured row count.
        height: u32,
    },

    /// Fewer than one noise octave.
    #[error("octave count must be at least 1, got {0}")]
    InvalidOctaves(u32),

    /// Biome cutoffs are not non-decreasing.
    #[error(
        "biome thresholds must satisfy water <= land <= mountain, got {water_height}/{land_ceiling}/{mountain_ceiling}"
    )]
    NonMonotonicThresholds {
        /// Configured water line.
        water_height: i32,
        /// Configured land ceiling.
        land_ceiling: i32,
        /// Configured mountain ceiling.
        mountain_ceiling: i32,
    },

    /// A cell radius is negative.
    #[error("cell radii must be non-negative, got inner {inner} / outer {outer}")]
    NegativeRadius {
        /// Configured inner radius.
        inner: f32,
        /// Configured outer radius.
        outer: f32,
    },

    /// The inner ring is larger than the cell.
    #[error("inner size {inner} exceeds outer size {outer}")]
    InnerExceedsOuter {
        /// Configured inner radius.
        inner: f32,
        /// Configured outer radius.
        outer: f32,
    },

    /// `min_height > max_height`.
    #[error("min height {min} exceeds max height {max}")]
    InvertedHeightRange {
        /// Configured lower bound.
        min: f32,
        /// Configured upper bound.
        max: f32,
    },

    /// A numeric field is NaN or infinite.
    #[error("{0} must be finite")]
    NonFinite(&'static str),
}
