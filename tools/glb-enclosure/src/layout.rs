//! Placement of the four enclosure walls around a building

use crate::bounds::SceneBounds;
use crate::error::EnclosureError;
use glam::Vec3;
use serde::Deserialize;

/// Wall dimensions in metres
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct WallParams {
    pub height: f32,
    pub thickness: f32,
    /// Gap between the building footprint and the wall centre lines
    pub margin: f32,
}

impl Default for WallParams {
    fn default() -> Self {
        Self {
            height: 6.0,
            thickness: 1.0,
            margin: 0.5,
        }
    }
}

impl WallParams {
    pub fn validate(&self) -> Result<(), EnclosureError> {
        let all_finite = [self.height, self.thickness, self.margin]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(EnclosureError::InvalidWallParams(
                "values must be finite".to_string(),
            ));
        }
        if self.height <= 0.0 || self.thickness <= 0.0 {
            return Err(EnclosureError::InvalidWallParams(format!(
                "height ({}) and thickness ({}) must be positive",
                self.height, self.thickness
            )));
        }
        if self.margin < 0.0 {
            return Err(EnclosureError::InvalidWallParams(format!(
                "margin ({}) must not be negative",
                self.margin
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSide {
    North,
    South,
    East,
    West,
}

impl WallSide {
    pub const ALL: [WallSide; 4] = [
        WallSide::North,
        WallSide::South,
        WallSide::East,
        WallSide::West,
    ];

    /// Node and mesh name
    pub fn name(self) -> &'static str {
        match self {
            WallSide::North => "Wall_North",
            WallSide::South => "Wall_South",
            WallSide::East => "Wall_East",
            WallSide::West => "Wall_West",
        }
    }
}

/// One wall box in the ground frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSpec {
    pub side: WallSide,
    pub center: Vec3,
    pub size: Vec3,
}

impl WallSpec {
    pub fn name(&self) -> &'static str {
        self.side.name()
    }
}

/// Footprint of the enclosure, used for logging
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnclosureSize {
    pub width: f32,
    pub depth: f32,
}

impl EnclosureSize {
    pub fn new(bounds: &SceneBounds, params: &WallParams) -> Self {
        Self {
            width: bounds.width + 2.0 * params.margin,
            depth: bounds.depth + 2.0 * params.margin,
        }
    }
}

/// Lay out North, South, East and West walls (in that order).
///
/// Wall centre lines sit on the enclosure rectangle; every wall base rests
/// on the lowest point of the building.
pub fn layout_walls(bounds: &SceneBounds, params: &WallParams) -> [WallSpec; 4] {
    let enclosure = EnclosureSize::new(bounds, params);
    let (cx, cy) = (bounds.center.x, bounds.center.y);
    let wall_z = bounds.min.z + params.height / 2.0;

    let along_x = Vec3::new(enclosure.width, params.thickness, params.height);
    let along_y = Vec3::new(params.thickness, enclosure.depth, params.height);

    WallSide::ALL.map(|side| {
        let (center, size) = match side {
            WallSide::North => (Vec3::new(cx, cy + enclosure.depth / 2.0, wall_z), along_x),
            WallSide::South => (Vec3::new(cx, cy - enclosure.depth / 2.0, wall_z), along_x),
            WallSide::East => (Vec3::new(cx + enclosure.width / 2.0, cy, wall_z), along_y),
            WallSide::West => (Vec3::new(cx - enclosure.width / 2.0, cy, wall_z), along_y),
        };
        WallSpec { side, center, size }
    })
}
