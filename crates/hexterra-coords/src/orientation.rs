//! Hexagon orientation and per-corner angles.

use serde::{Deserialize, Serialize};

/// Which way a hexagon is rotated relative to the grid axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HexOrientation {
    /// Edges run horizontally along the top and bottom; a corner points along +X.
    FlatTopped,
    /// A corner points "up" (along -Z on the ground plane); edges run vertically.
    #[default]
    PointyTopped,
}

impl HexOrientation {
    /// Both orientations.
    pub const ALL: [HexOrientation; 2] = [Self::FlatTopped, Self::PointyTopped];

    /// Angle of corner `index` in degrees.
    ///
    /// Flat-topped corners sit at `60·i`, pointy-topped at `60·i - 30`.
    /// `index` is taken modulo 6.
    pub fn corner_angle_degrees(self, index: usize) -> f32 {
        let i = (index % 6) as f32;
        match self {
            Self::FlatTopped => 60.0 * i,
            Self::PointyTopped => 60.0 * i - 30.0,
        }
    }

    /// Angle of corner `index` in radians.
    pub fn corner_angle(self, index: usize) -> f32 {
        self.corner_angle_degrees(index).to_radians()
    }

    /// Returns `true` for [`HexOrientation::FlatTopped`].
    pub fn is_flat_topped(self) -> bool {
        matches!(self, Self::FlatTopped)
    }
}
