//! GLB/GLTF construction utilities
//!
//! This library provides builder-pattern APIs for constructing or extending
//! GLB files:
//! - BufferBuilder: Pack binary data with automatic alignment
//! - MeshBuilder: High-level mesh construction
//! - GltfBuilder: Document construction/editing (meshes, nodes, materials, textures)
//!
//! # Example
//!
//! ```no_run
//! use glb_builder::*;
//!
//! let mut gltf = GltfBuilder::new();
//! let mut buffer = gltf.buffer_builder(Vec::new());
//! let mesh = MeshBuilder::new()
//!     .positions(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.5, 1.0, 0.0]])
//!     .normals(&[[0.0, 0.0, 1.0]; 3])
//!     .indices(&[0, 1, 2])
//!     .build(&mut buffer);
//!
//! let mesh_index = gltf.add_mesh("Triangle", &mesh, None);
//! let node = gltf.add_node("Triangle", Some(mesh_index), None);
//! gltf.add_root_node(node);
//!
//! let (root, data) = gltf.finish(buffer, "glb-builder");
//! let glb_bytes = assemble_glb(&root, &data).unwrap();
//! ```

pub mod buffer;
pub mod document;
pub mod mesh;
pub mod utils;

pub use buffer::{AccessorIndex, BufferBuilder, ViewIndex};
pub use document::GltfBuilder;
pub use mesh::{MeshAccessors, MeshBuilder};
pub use utils::{align_buffer, assemble_glb, compute_bounds};

// Re-export commonly used gltf-json types
pub use gltf_json as json;
pub use gltf_json::validation::Checked::Valid;
