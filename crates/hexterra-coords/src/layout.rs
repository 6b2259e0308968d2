//! Placement of offset coordinates on the XZ ground plane.

use glam::{Vec2, Vec3};

use crate::{HexCoord, HexOrientation, SQRT_3};

/// Converts grid coordinates to planar positions for one orientation and cell size.
///
/// `outer_size` is the circumradius of a cell (centre to corner). Rows advance
/// along -Z so that row 0 sits at the top of a top-down view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexLayout {
    /// Orientation of every cell in the grid.
    pub orientation: HexOrientation,
    /// Circumradius of a cell in world units.
    pub outer_size: f32,
}

impl HexLayout {
    /// Create a layout.
    pub fn new(orientation: HexOrientation, outer_size: f32) -> Self {
        Self {
            orientation,
            outer_size,
        }
    }

    /// Extent of one cell along X.
    pub fn cell_width(&self) -> f32 {
        match self.orientation {
            HexOrientation::PointyTopped => SQRT_3 * self.outer_size,
            HexOrientation::FlatTopped => 2.0 * self.outer_size,
        }
    }

    /// Extent of one cell along Z.
    pub fn cell_height(&self) -> f32 {
        match self.orientation {
            HexOrientation::PointyTopped => 2.0 * self.outer_size,
            HexOrientation::FlatTopped => SQRT_3 * self.outer_size,
        }
    }

    /// Distance between the centres of consecutive columns.
    pub fn horizontal_spacing(&self) -> f32 {
        match self.orientation {
            HexOrientation::PointyTopped => self.cell_width(),
            HexOrientation::FlatTopped => self.cell_width() * 0.75,
        }
    }

    /// Distance between the centres of consecutive rows.
    pub fn vertical_spacing(&self) -> f32 {
        match self.orientation {
            HexOrientation::PointyTopped => self.cell_height() * 0.75,
            HexOrientation::FlatTopped => self.cell_height(),
        }
    }

    /// Planar `(x, z)` centre of the cell at `coord`.
    pub fn to_planar(&self, coord: HexCoord) -> Vec2 {
        let column = coord.column as f32;
        let row = coord.row as f32;
        match self.orientation {
            HexOrientation::PointyTopped => {
                let offset = if coord.is_even_row() {
                    self.cell_width() / 2.0
                } else {
                    0.0
                };
                let x = column * self.horizontal_spacing() + offset;
                let z = -(row * self.vertical_spacing());
                Vec2::new(x, z)
            }
            HexOrientation::FlatTopped => {
                let offset = if coord.is_even_column() {
                    self.cell_height() / 2.0
                } else {
                    0.0
                };
                let x = column * self.horizontal_spacing();
                let z = -(row * self.vertical_spacing() - offset);
                Vec2::new(x, z)
            }
        }
    }

    /// World position of the cell at `coord`, resting on `y = 0`.
    pub fn to_world(&self, coord: HexCoord) -> Vec3 {
        let p = self.to_planar(coord);
        Vec3::new(p.x, 0.0, p.y)
    }

    /// Expected centre-to-centre distance between edge-adjacent cells.
    pub fn neighbor_distance(&self) -> f32 {
        SQRT_3 * self.outer_size
    }
}
