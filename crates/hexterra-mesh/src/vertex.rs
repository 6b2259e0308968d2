//! Interleaved vertex format for GPU upload.

use glam::{Vec2, Vec3};

/// One interleaved vertex: position, normal, UV.
///
/// Layout (32 bytes total):
///   - `[0..12]`  position `[f32; 3]`
///   - `[12..24]` normal `[f32; 3]`
///   - `[24..32]` uv `[f32; 2]`
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct HexVertex {
    /// Position relative to the cell origin.
    pub position: [f32; 3],
    /// Unit normal, or zero for degenerate corners.
    pub normal: [f32; 3],
    /// Texture coordinates in the unit square.
    pub uv: [f32; 2],
}

static_assertions::assert_eq_size!(HexVertex, [u8; 32]);

impl HexVertex {
    /// Build from glam vectors.
    pub fn new(position: Vec3, normal: Vec3, uv: Vec2) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            uv: uv.to_array(),
        }
    }
}

/// View a vertex slice as raw bytes.
pub fn vertex_bytes(vertices: &[HexVertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}
