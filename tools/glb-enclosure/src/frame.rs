//! Conversion between glTF space and the ground frame.
//!
//! glTF is Y-up. Walls are laid out in a Z-up ground frame where x runs
//! east, y runs north and z is height:
//! `ground = (gltf.x, -gltf.z, gltf.y)`.

use glam::Vec3;

/// glTF (Y-up) point to ground frame (Z-up)
pub fn to_ground(p: Vec3) -> Vec3 {
    Vec3::new(p.x, -p.z, p.y)
}

/// Ground frame (Z-up) point to glTF (Y-up)
pub fn to_gltf(p: Vec3) -> Vec3 {
    Vec3::new(p.x, p.z, -p.y)
}

/// Box extents in the ground frame to glTF extents (always positive)
pub fn extent_to_gltf(size: Vec3) -> Vec3 {
    Vec3::new(size.x, size.z, size.y)
}
