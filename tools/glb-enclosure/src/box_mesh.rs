//! Axis-aligned box mesh with per-face UVs

use glam::Vec3;

/// Vertex and index data for one box
#[derive(Debug, Clone)]
pub struct BoxMesh {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u16>,
}

/// Build a box of `size` (glTF axes) centred on the origin.
///
/// 4 vertices per face so every face gets a flat normal and its own UV
/// island. UVs are measured in metres divided by `tile_size`, so one texture
/// repeat covers `tile_size` metres on every face and keeps its aspect.
pub fn box_mesh(size: Vec3, tile_size: f32) -> BoxMesh {
    let h = size / 2.0;
    let (x, y, z) = (h.x, h.y, h.z);

    // Vertex order per face: bottom-left, bottom-right, top-right, top-left
    // as seen from outside, so the winding is counter-clockwise.
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        // Front (+Z)
        (
            [0.0, 0.0, 1.0],
            [[-x, -y, z], [x, -y, z], [x, y, z], [-x, y, z]],
        ),
        // Back (-Z)
        (
            [0.0, 0.0, -1.0],
            [[x, -y, -z], [-x, -y, -z], [-x, y, -z], [x, y, -z]],
        ),
        // Right (+X)
        (
            [1.0, 0.0, 0.0],
            [[x, -y, z], [x, -y, -z], [x, y, -z], [x, y, z]],
        ),
        // Left (-X)
        (
            [-1.0, 0.0, 0.0],
            [[-x, -y, -z], [-x, -y, z], [-x, y, z], [-x, y, -z]],
        ),
        // Top (+Y)
        (
            [0.0, 1.0, 0.0],
            [[-x, y, z], [x, y, z], [x, y, -z], [-x, y, -z]],
        ),
        // Bottom (-Y)
        (
            [0.0, -1.0, 0.0],
            [[-x, -y, -z], [x, -y, -z], [x, -y, z], [-x, -y, z]],
        ),
    ];

    let mut mesh = BoxMesh {
        positions: Vec::with_capacity(24),
        normals: Vec::with_capacity(24),
        uvs: Vec::with_capacity(24),
        indices: Vec::with_capacity(36),
    };

    for (normal, corners) in faces {
        let [bottom_left, bottom_right, _, top_left] = corners.map(Vec3::from);
        let u = bottom_left.distance(bottom_right) / tile_size;
        let v = bottom_left.distance(top_left) / tile_size;

        let base = mesh.positions.len() as u16;
        mesh.positions.extend_from_slice(&corners);
        mesh.normals.extend_from_slice(&[normal; 4]);
        // glTF v grows downwards in the image
        mesh.uvs
            .extend_from_slice(&[[0.0, v], [u, v], [u, 0.0], [0.0, 0.0]]);
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    mesh
}
