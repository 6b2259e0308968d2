//! Hex prism construction.
//!
//! A cell is an extruded hexagonal ring: six top quads at `height`, six bottom
//! quads at `y = 0`, and six outer wall quads between them. With
//! `inner_size == 0` the caps close into solid hexagons.

use hexterra_coords::HexOrientation;

use crate::cell_mesh::{CellMesh, FACES_PER_CELL};
use crate::face::{Face, FaceKind};

/// Shape of one prism.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexPrism {
    /// Radius of the cap's inner ring.
    pub inner_size: f32,
    /// Circumradius of the prism.
    pub outer_size: f32,
    /// Height of the top cap above the ground.
    pub height: f32,
    /// Corner layout.
    pub orientation: HexOrientation,
}

impl HexPrism {
    /// Describe a prism.
    pub fn new(inner_size: f32, outer_size: f32, height: f32, orientation: HexOrientation) -> Self {
        Self {
            inner_size,
            outer_size,
            height,
            orientation,
        }
    }

    /// The 18 faces in build order: top, bottom, side, each for corners 0..6.
    pub fn faces(&self) -> Vec<(FaceKind, Face)> {
        let Self {
            inner_size,
            outer_size,
            height,
            orientation,
        } = *self;

        let mut faces = Vec::with_capacity(FACES_PER_CELL);
        for corner in 0..6 {
            let face = Face::create(orientation, inner_size, outer_size, height, height, corner, false);
            faces.push((FaceKind::Top, face));
        }
        for corner in 0..6 {
            let face = Face::create(orientation, inner_size, outer_size, 0.0, 0.0, corner, true);
            faces.push((FaceKind::Bottom, face));
        }
        for corner in 0..6 {
            let face = Face::create(orientation, outer_size, outer_size, height, 0.0, corner, true);
            faces.push((FaceKind::Side, face));
        }
        faces
    }

    /// Build the combined mesh.
    pub fn build(&self) -> CellMesh {
        debug_assert!(self.outer_size >= self.inner_size && self.inner_size >= 0.0);
        CellMesh::combine(&self.faces())
    }
}

/// Build the mesh of one cell.
pub fn build_cell(
    inner_size: f32,
    outer_size: f32,
    height: f32,
    orientation: HexOrientation,
) -> CellMesh {
    HexPrism::new(inner_size, outer_size, height, orientation).build()
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};

    use super::*;
    use crate::cell_mesh::{INDICES_PER_CELL, VERTICES_PER_CELL};
    use crate::vertex::vertex_bytes;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_counts_for_any_shape() {
        for orientation in HexOrientation::ALL {
            for (inner, outer, height) in [(0.0, 1.0, 1.0), (0.5, 1.0, 3.0), (1.0, 1.0, 0.0), (0.2, 4.0, 12.5)] {
                let mesh = build_cell(inner, outer, height, orientation);
                assert_eq!(mesh.vertex_count(), VERTICES_PER_CELL);
                assert_eq!(mesh.indices.len(), INDICES_PER_CELL);
                assert_eq!(mesh.triangle_count(), 36);
                assert_eq!(mesh.uvs.len(), VERTICES_PER_CELL);
                assert_eq!(mesh.normals.len(), VERTICES_PER_CELL);
            }
        }
    }

    #[test]
    fn test_face_kinds_in_build_order() {
        let mesh = build_cell(0.5, 1.0, 2.0, HexOrientation::PointyTopped);
        for kind in FaceKind::ALL {
            assert_eq!(mesh.count_faces(kind), 6);
        }
        assert!(mesh.faces[..6].iter().all(|&k| k == FaceKind::Top));
        assert!(mesh.faces[6..12].iter().all(|&k| k == FaceKind::Bottom));
        assert!(mesh.faces[12..].iter().all(|&k| k == FaceKind::Side));
    }

    #[test]
    fn test_index_offsets_have_no_gaps_or_overlaps() {
        let mesh = build_cell(0.5, 1.0, 2.0, HexOrientation::FlatTopped);
        let mut seen = vec![0usize; VERTICES_PER_CELL];
        for (face, chunk) in mesh.indices.chunks_exact(6).enumerate() {
            let base = 4 * face as u32;
            let local: Vec<u32> = chunk.iter().map(|i| i - base).collect();
            assert_eq!(local, vec![0, 1, 2, 2, 3, 0]);
            for &i in chunk {
                seen[i as usize] += 1;
            }
        }
        assert!(seen.iter().all(|&n| n > 0));
    }

    #[test]
    fn test_cap_heights() {
        let mesh = build_cell(0.5, 1.0, 7.0, HexOrientation::PointyTopped);
        for face in 0..6 {
            assert!(mesh.face_positions(face).iter().all(|p| p.y == 7.0));
        }
        for face in 6..12 {
            assert!(mesh.face_positions(face).iter().all(|p| p.y == 0.0));
        }
        for face in 12..18 {
            let ys: Vec<f32> = mesh.face_positions(face).iter().map(|p| p.y).collect();
            assert_eq!(ys.iter().filter(|&&y| y == 7.0).count(), 2);
            assert_eq!(ys.iter().filter(|&&y| y == 0.0).count(), 2);
        }
    }

    #[test]
    fn test_side_walls_on_outer_radius() {
        let mesh = build_cell(0.25, 2.0, 1.0, HexOrientation::FlatTopped);
        for face in 12..18 {
            for p in mesh.face_positions(face) {
                assert!((Vec2::new(p.x, p.z).length() - 2.0).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn test_normals_face_outward() {
        for orientation in HexOrientation::ALL {
            let mesh = build_cell(0.5, 1.0, 2.0, orientation);
            for (face, kind) in mesh.faces.iter().enumerate() {
                let normals = &mesh.normals[face * 4..face * 4 + 4];
                let centre: Vec3 = mesh.face_positions(face).iter().copied().sum::<Vec3>() / 4.0;
                for n in normals {
                    assert!((n.length() - 1.0).abs() < EPSILON);
                    match kind {
                        FaceKind::Top => assert!(n.y > 0.99, "top normal {n}"),
                        FaceKind::Bottom => assert!(n.y < -0.99, "bottom normal {n}"),
                        FaceKind::Side => {
                            let outward = Vec3::new(centre.x, 0.0, centre.z).normalize();
                            assert!(n.dot(outward) > 0.99, "side normal {n} vs {outward}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_solid_cap_has_degenerate_centre() {
        // With no inner ring, A and B coincide at the centre; the quad still
        // covers its wedge through triangle (C, D, A).
        let mesh = build_cell(0.0, 1.0, 1.0, HexOrientation::PointyTopped);
        let top = mesh.face_positions(0);
        assert_eq!(top[0], top[1]);
        assert!(mesh.normals[0].y > 0.99);
        assert_eq!(mesh.normals[1], Vec3::ZERO);
    }

    #[test]
    fn test_rebuild_is_byte_identical() {
        let a = build_cell(0.3, 1.2, 5.0, HexOrientation::FlatTopped);
        let b = build_cell(0.3, 1.2, 5.0, HexOrientation::FlatTopped);
        assert_eq!(vertex_bytes(&a.interleaved()), vertex_bytes(&b.interleaved()));
        assert_eq!(
            bytemuck::cast_slice::<u32, u8>(&a.indices),
            bytemuck::cast_slice::<u32, u8>(&b.indices)
        );
    }

    #[test]
    fn test_orientation_rotates_corners() {
        let flat = build_cell(0.0, 1.0, 1.0, HexOrientation::FlatTopped);
        let pointy = build_cell(0.0, 1.0, 1.0, HexOrientation::PointyTopped);
        // Vertex 3 of the first top face is corner 0 on the outer ring.
        assert!((flat.positions[3] - Vec3::new(1.0, 1.0, 0.0)).length() < EPSILON);
        let expected = Vec3::new(30f32.to_radians().cos(), 1.0, -(30f32.to_radians().sin()));
        assert!((pointy.positions[3] - expected).length() < EPSILON);
    }
}
