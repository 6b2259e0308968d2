//! Hex grid coordinates: orientation, offset coordinates, and planar placement.
//!
//! Cells are addressed by integer `(column, row)` offset coordinates. A
//! [`HexLayout`] maps those coordinates onto the XZ plane for either hex
//! orientation, and [`HexOrientation`] supplies the corner angles used by the
//! prism mesh builder.

mod coord;
mod layout;
mod orientation;

pub use coord::HexCoord;
pub use layout::HexLayout;
pub use orientation::HexOrientation;

/// `sqrt(3)`, the ratio between a hexagon's short and long diagonals scaled by two.
pub const SQRT_3: f32 = 1.732_050_8;
