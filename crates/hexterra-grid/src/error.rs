//! Generation error types.

use hexterra_config::ValidationError;
use hexterra_terrain::TerrainError;

/// Reasons a generation pass is rejected. No cell is produced in either case.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerationError {
    /// The configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationError),

    /// A terrain sampler rejected its parameters.
    #[error("terrain setup failed: {0}")]
    Terrain(#[from] TerrainError),
}
