//! Hex terrain grid assembly.
//!
//! [`GridAssembler`] runs one generation pass over a bounded grid: validate
//! the configuration, sample heights, classify biomes, build each cell's prism
//! mesh, place it on the plane, and hand the finished cells to a
//! [`CellRenderer`].

mod assembler;
mod cell;
mod error;
mod render;
mod stats;

pub use assembler::{GeneratorState, GridAssembler, PassSummary};
pub use cell::Cell;
pub use error::GenerationError;
pub use render::{CellRenderer, CollectingRenderer};
pub use stats::{BiomeCounts, HeightStats};
