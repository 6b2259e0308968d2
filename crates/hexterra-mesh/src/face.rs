//! Quad faces of a hex prism.

use glam::{Vec2, Vec3};
use hexterra_coords::HexOrientation;

/// Local triangle indices shared by every face: two triangles over A, B, C, D.
pub const FACE_TRIANGLES: [u32; 6] = [0, 1, 2, 2, 3, 0];

/// UVs of every face: the unit square, in vertex order.
pub const FACE_UVS: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
];

/// Which part of the prism a face belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaceKind {
    /// Upper cap, facing +Y.
    Top,
    /// Lower cap at `y = 0`, facing -Y.
    Bottom,
    /// Outer wall, facing away from the prism axis.
    Side,
}

impl FaceKind {
    /// All kinds in build order.
    pub const ALL: [FaceKind; 3] = [Self::Top, Self::Bottom, Self::Side];
}

/// Position of hexagon corner `index` at distance `radius` from the axis.
pub fn corner_point(orientation: HexOrientation, radius: f32, height: f32, index: usize) -> Vec3 {
    let angle = orientation.corner_angle(index);
    Vec3::new(radius * angle.cos(), height, radius * angle.sin())
}

/// A four-vertex quad with its own local triangle indices and UVs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Face {
    /// The four corners in winding order.
    pub vertices: [Vec3; 4],
    /// Indices into `vertices`, always [`FACE_TRIANGLES`].
    pub triangles: [u32; 6],
    /// Per-vertex texture coordinates, always [`FACE_UVS`].
    pub uvs: [Vec2; 4],
}

impl Face {
    /// Build the quad spanning corner `corner` to the next corner.
    ///
    /// The inner edge (A, B) sits at `inner_radius` and `height_b`, the outer
    /// edge (C, D) at `outer_radius` and `height_a`. `reverse` flips the vertex
    /// order, and therefore the facing, while leaving the UVs in place.
    pub fn create(
        orientation: HexOrientation,
        inner_radius: f32,
        outer_radius: f32,
        height_a: f32,
        height_b: f32,
        corner: usize,
        reverse: bool,
    ) -> Self {
        let next = (corner + 1) % 6;
        let a = corner_point(orientation, inner_radius, height_b, corner);
        let b = corner_point(orientation, inner_radius, height_b, next);
        let c = corner_point(orientation, outer_radius, height_a, next);
        let d = corner_point(orientation, outer_radius, height_a, corner);

        let mut vertices = [a, b, c, d];
        if reverse {
            vertices.reverse();
        }

        Self {
            vertices,
            triangles: FACE_TRIANGLES,
            uvs: FACE_UVS,
        }
    }

    /// Unnormalised normal of the first triangle (A, B, C).
    pub fn raw_normal(&self) -> Vec3 {
        let [a, b, c, _] = self.vertices;
        (b - a).cross(c - a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_flat_topped_corner_zero_on_x_axis() {
        let p = corner_point(HexOrientation::FlatTopped, 2.0, 1.0, 0);
        assert!((p - Vec3::new(2.0, 1.0, 0.0)).length() < EPSILON);
    }

    #[test]
    fn test_corners_lie_on_circle() {
        for orientation in HexOrientation::ALL {
            for i in 0..6 {
                let p = corner_point(orientation, 3.0, 0.0, i);
                assert!((Vec2::new(p.x, p.z).length() - 3.0).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn test_vertex_order() {
        let o = HexOrientation::PointyTopped;
        let face = Face::create(o, 0.5, 1.0, 2.0, 1.0, 5, false);
        assert_eq!(face.vertices[0], corner_point(o, 0.5, 1.0, 5));
        assert_eq!(face.vertices[1], corner_point(o, 0.5, 1.0, 0));
        assert_eq!(face.vertices[2], corner_point(o, 1.0, 2.0, 0));
        assert_eq!(face.vertices[3], corner_point(o, 1.0, 2.0, 5));
        assert_eq!(face.triangles, FACE_TRIANGLES);
        assert_eq!(face.uvs, FACE_UVS);
    }

    #[test]
    fn test_reverse_flips_vertices_not_uvs() {
        let o = HexOrientation::FlatTopped;
        let forward = Face::create(o, 0.5, 1.0, 1.0, 1.0, 2, false);
        let reversed = Face::create(o, 0.5, 1.0, 1.0, 1.0, 2, true);
        let mut expected = forward.vertices;
        expected.reverse();
        assert_eq!(reversed.vertices, expected);
        assert_eq!(reversed.uvs, forward.uvs);
        assert!(forward.raw_normal().dot(reversed.raw_normal()) < 0.0);
    }
}
