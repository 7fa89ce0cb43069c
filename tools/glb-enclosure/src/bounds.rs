//! Scene bounding box in the ground frame

use crate::error::EnclosureError;
use crate::frame::to_ground;
use glam::{Mat4, Vec2, Vec3};

/// Axis-aligned bounds of every mesh in a scene (Z-up ground frame)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneBounds {
    pub min: Vec3,
    pub max: Vec3,
    /// Footprint centre (x, y)
    pub center: Vec2,
    /// Extent along x
    pub width: f32,
    /// Extent along y
    pub depth: f32,
    /// Extent along z
    pub height: f32,
}

impl SceneBounds {
    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        let size = max - min;
        Self {
            min,
            max,
            center: Vec2::new((min.x + max.x) / 2.0, (min.y + max.y) / 2.0),
            width: size.x,
            depth: size.y,
            height: size.z,
        }
    }

    /// Bounds of ground-frame points
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Result<Self, EnclosureError> {
        let mut acc = BoundsAccumulator::new();
        for p in points {
            acc.add_point(p);
        }
        acc.finish()
    }

    /// Log the building dimensions
    pub fn log_summary(&self) {
        tracing::info!("Building dimensions:");
        tracing::info!("  Center: ({:.2}, {:.2})", self.center.x, self.center.y);
        tracing::info!("  Width (X): {:.2}m", self.width);
        tracing::info!("  Depth (Y): {:.2}m", self.depth);
        tracing::info!("  Height (Z): {:.2}m", self.height);
        tracing::info!("  X range: {:.2} to {:.2}", self.min.x, self.max.x);
        tracing::info!("  Y range: {:.2} to {:.2}", self.min.y, self.max.y);
    }
}

/// Running min/max over ground-frame points
#[derive(Debug, Clone)]
pub struct BoundsAccumulator {
    min: Vec3,
    max: Vec3,
    points: usize,
}

impl BoundsAccumulator {
    pub fn new() -> Self {
        Self {
            min: Vec3::splat(f32::INFINITY),
            max: Vec3::splat(f32::NEG_INFINITY),
            points: 0,
        }
    }

    pub fn add_point(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
        self.points += 1;
    }

    /// Add a local glTF-space box placed by `world`.
    ///
    /// All 8 corners are transformed, then converted to the ground frame.
    pub fn add_aabb(&mut self, min: Vec3, max: Vec3, world: Mat4) {
        for i in 0..8 {
            let corner = Vec3::new(
                if i & 1 == 0 { min.x } else { max.x },
                if i & 2 == 0 { min.y } else { max.y },
                if i & 4 == 0 { min.z } else { max.z },
            );
            self.add_point(to_ground(world.transform_point3(corner)));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points == 0
    }

    pub fn finish(&self) -> Result<SceneBounds, EnclosureError> {
        if self.is_empty() || !self.min.is_finite() || !self.max.is_finite() {
            return Err(EnclosureError::NoMeshGeometry);
        }
        Ok(SceneBounds::from_min_max(self.min, self.max))
    }
}

impl Default for BoundsAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
