//! Hex prism meshing: quad faces, per-cell mesh assembly, and GPU vertex layout.

pub mod builder;
pub mod cell_mesh;
pub mod face;
pub mod vertex;

pub use builder::{HexPrism, build_cell};
pub use cell_mesh::{CellMesh, FACES_PER_CELL, INDICES_PER_CELL, VERTICES_PER_CELL};
pub use face::{FACE_TRIANGLES, FACE_UVS, Face, FaceKind, corner_point};
pub use vertex::{HexVertex, vertex_bytes};
