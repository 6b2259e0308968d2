//! Combined mesh of one hex cell.

use glam::{Vec2, Vec3};

use crate::face::{Face, FaceKind};
use crate::vertex::HexVertex;

/// Faces per prism: six top, six bottom, six side.
pub const FACES_PER_CELL: usize = 18;
/// Vertices per prism (four per face, none shared).
pub const VERTICES_PER_CELL: usize = FACES_PER_CELL * 4;
/// Triangle indices per prism (six per face).
pub const INDICES_PER_CELL: usize = FACES_PER_CELL * 6;

/// Flattened vertex, index, and UV buffers for one cell.
///
/// Faces are stored back to back: face `i` owns vertices `4i..4i + 4` and
/// indices `6i..6i + 6`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CellMesh {
    /// Vertex positions, relative to the cell centre at ground level.
    pub positions: Vec<Vec3>,
    /// Per-vertex normals recomputed from the triangles.
    pub normals: Vec<Vec3>,
    /// Per-vertex texture coordinates.
    pub uvs: Vec<Vec2>,
    /// Triangle list into `positions`.
    pub indices: Vec<u32>,
    /// Kind of each face, in face order.
    pub faces: Vec<FaceKind>,
}

impl CellMesh {
    /// Concatenate faces into one mesh.
    ///
    /// Each face's local indices are shifted by four times its position in
    /// `faces`, then normals are recomputed from the result.
    pub fn combine(faces: &[(FaceKind, Face)]) -> Self {
        let mut mesh = Self {
            positions: Vec::with_capacity(faces.len() * 4),
            normals: Vec::new(),
            uvs: Vec::with_capacity(faces.len() * 4),
            indices: Vec::with_capacity(faces.len() * 6),
            faces: Vec::with_capacity(faces.len()),
        };

        for (i, (kind, face)) in faces.iter().enumerate() {
            mesh.positions.extend_from_slice(&face.vertices);
            mesh.uvs.extend_from_slice(&face.uvs);

            let offset = 4 * i as u32;
            mesh.indices
                .extend(face.triangles.iter().map(|&local| local + offset));
            mesh.faces.push(*kind);
        }

        mesh.recalculate_normals();
        mesh
    }

    /// Recompute per-vertex normals from the current positions and indices.
    ///
    /// Each triangle adds its area-weighted normal to its three vertices; the
    /// sums are then normalised. Vertices only touched by zero-area triangles
    /// end up with a zero normal.
    pub fn recalculate_normals(&mut self) {
        let mut normals = vec![Vec3::ZERO; self.positions.len()];
        for tri in self.indices.chunks_exact(3) {
            let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            let n = (self.positions[b] - self.positions[a]).cross(self.positions[c] - self.positions[a]);
            normals[a] += n;
            normals[b] += n;
            normals[c] += n;
        }
        for n in &mut normals {
            *n = n.normalize_or_zero();
        }
        self.normals = normals;
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of faces of the given kind.
    pub fn count_faces(&self, kind: FaceKind) -> usize {
        self.faces.iter().filter(|&&k| k == kind).count()
    }

    /// Positions of the four vertices of face `index`.
    pub fn face_positions(&self, index: usize) -> &[Vec3] {
        &self.positions[index * 4..index * 4 + 4]
    }

    /// Interleave positions, normals, and UVs into a GPU-ready vertex buffer.
    pub fn interleaved(&self) -> Vec<HexVertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.uvs)
            .map(|((p, n), uv)| HexVertex::new(*p, *n, *uv))
            .collect()
    }

    /// Copy of the mesh with every position moved by `offset`.
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            positions: self.positions.iter().map(|p| *p + offset).collect(),
            ..self.clone()
        }
    }
}
