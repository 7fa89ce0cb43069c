//! glb-enclosure library
//!
//! Adds four textured enclosure walls around the building in a GLB/glTF
//! asset and writes the combined scene as a single GLB.

pub mod bounds;
pub mod box_mesh;
pub mod config;
pub mod error;
pub mod frame;
pub mod layout;
pub mod material;
pub mod pipeline;
pub mod scene;

pub use bounds::{BoundsAccumulator, SceneBounds};
pub use config::{EnclosureConfig, Overrides, load_config};
pub use error::EnclosureError;
pub use layout::{WallParams, WallSide, WallSpec, layout_walls};
pub use material::{MaterialParams, TextureImage, load_texture};
pub use pipeline::{EnclosureReport, inspect_bounds, run};
pub use scene::{LoadedScene, load_scene};
