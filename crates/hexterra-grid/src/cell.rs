//! A generated grid cell.

use glam::Vec3;
use hexterra_coords::HexCoord;
use hexterra_mesh::CellMesh;
use hexterra_terrain::{Biome, Color};

/// One finished cell: terrain values, display color, placement, and mesh.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    /// Offset coordinate in the grid.
    pub coord: HexCoord,
    /// Normalised fractal noise value in `[0, 1]`.
    pub height_coefficient: f64,
    /// Elevation the mesh was built with. Water cells sit at the water line.
    pub elevation: f32,
    /// Assigned biome.
    pub biome: Biome,
    /// Display color (biome color or greyscale height).
    pub color: Color,
    /// Centre of the cell on the ground plane.
    pub position: Vec3,
    /// Prism mesh relative to `position`.
    pub mesh: CellMesh,
}

impl Cell {
    /// Display label, e.g. `"Hex 3, 4"`.
    pub fn label(&self) -> String {
        self.coord.to_string()
    }

    /// The mesh moved to the cell's world position.
    pub fn world_mesh(&self) -> CellMesh {
        self.mesh.translated(self.position)
    }
}
