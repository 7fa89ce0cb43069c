//! Domain errors

use std::path::PathBuf;

/// Failures specific to building an enclosure
#[derive(Debug, thiserror::Error)]
pub enum EnclosureError {
    /// The imported scene has no mesh vertices to measure
    #[error("scene contains no mesh geometry to enclose")]
    NoMeshGeometry,

    /// Wall parameters are unusable
    #[error("invalid wall parameters: {0}")]
    InvalidWallParams(String),

    /// A node is its own ancestor
    #[error("node {0} is part of a cycle in the node hierarchy")]
    CyclicNodeHierarchy(usize),

    /// Material parameters are out of range
    #[error("invalid material parameters: {0}")]
    InvalidMaterialParams(String),

    /// Texture file exists but is not an embeddable image
    #[error("unsupported texture format in {0:?} (use PNG or JPEG)")]
    UnsupportedTexture(PathBuf),

    /// No input asset was given on the command line or in the config
    #[error("no input asset given (use --input or set `input` in the config)")]
    MissingInput,

    /// Input asset does not exist
    #[error("input asset not found: {0:?}")]
    InputNotFound(PathBuf),

    /// A buffer could not be merged into the output GLB
    #[error("unsupported buffer: {0}")]
    UnsupportedBuffer(String),
}
