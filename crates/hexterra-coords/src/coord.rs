//! Integer offset coordinates on the hex grid.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::HexOrientation;

/// A `(column, row)` offset coordinate.
///
/// Pointy-topped grids shift even rows half a cell along +X; flat-topped grids
/// shift even columns half a cell along +Z. The shift rules live in
/// [`crate::HexLayout`]; [`HexCoord::neighbors`] follows the same parity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HexCoord {
    /// Column index (X axis).
    pub column: i32,
    /// Row index (Z axis, growing towards -Z).
    pub row: i32,
}

impl HexCoord {
    /// Create a coordinate.
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// Returns `true` if the row index is even (negative rows included).
    pub fn is_even_row(self) -> bool {
        self.row.rem_euclid(2) == 0
    }

    /// Returns `true` if the column index is even (negative columns included).
    pub fn is_even_column(self) -> bool {
        self.column.rem_euclid(2) == 0
    }

    /// The six edge-adjacent cells for the given orientation.
    pub fn neighbors(self, orientation: HexOrientation) -> [HexCoord; 6] {
        let (c, r) = (self.column, self.row);
        match orientation {
            HexOrientation::PointyTopped => {
                // Even rows are shifted right, so their diagonal neighbours lean right.
                let lean = if self.is_even_row() { 0 } else { -1 };
                [
                    Self::new(c - 1, r),
                    Self::new(c + 1, r),
                    Self::new(c + lean, r - 1),
                    Self::new(c + lean + 1, r - 1),
                    Self::new(c + lean, r + 1),
                    Self::new(c + lean + 1, r + 1),
                ]
            }
            HexOrientation::FlatTopped => {
                let lean = if self.is_even_column() { -1 } else { 0 };
                [
                    Self::new(c, r - 1),
                    Self::new(c, r + 1),
                    Self::new(c - 1, r + lean),
                    Self::new(c - 1, r + lean + 1),
                    Self::new(c + 1, r + lean),
                    Self::new(c + 1, r + lean + 1),
                ]
            }
        }
    }
}

impl From<(i32, i32)> for HexCoord {
    fn from((column, row): (i32, i32)) -> Self {
        Self::new(column, row)
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hex {}, {}", self.column, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label() {
        assert_eq!(HexCoord::new(3, 7).to_string(), "Hex 3, 7");
    }

    #[test]
    fn test_negative_parity() {
        assert!(HexCoord::new(0, -2).is_even_row());
        assert!(!HexCoord::new(0, -1).is_even_row());
        assert!(!HexCoord::new(-3, 0).is_even_column());
    }

    #[test]
    fn test_neighbors_are_unique_and_exclude_self() {
        for orientation in HexOrientation::ALL {
            for coord in [HexCoord::new(2, 2), HexCoord::new(3, 3), HexCoord::new(-1, 4)] {
                let n = coord.neighbors(orientation);
                assert!(!n.contains(&coord));
                for (i, a) in n.iter().enumerate() {
                    for b in &n[i + 1..] {
                        assert_ne!(a, b, "duplicate neighbour of {coord} ({orientation:?})");
                    }
                }
            }
        }
    }

    #[test]
    fn test_neighbor_relation_is_symmetric() {
        for orientation in HexOrientation::ALL {
            for column in -2..4 {
                for row in -2..4 {
                    let coord = HexCoord::new(column, row);
                    for n in coord.neighbors(orientation) {
                        assert!(
                            n.neighbors(orientation).contains(&coord),
                            "{n} does not list {coord} back ({orientation:?})"
                        );
                    }
                }
            }
        }
    }
}
