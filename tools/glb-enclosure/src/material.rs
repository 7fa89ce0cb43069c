//! Brick wall material
//!
//! A glTF PBR metallic-roughness material. When the brick texture exists it
//! is embedded in the GLB binary chunk and used as base colour; otherwise
//! a flat brick colour is used and a warning is logged.

use crate::error::EnclosureError;
use anyhow::{Context, Result};
use glb_builder::json;
use glb_builder::{BufferBuilder, GltfBuilder};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Material settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MaterialParams {
    pub name: String,
    pub roughness: f32,
    pub metallic: f32,
    /// Linear RGBA used when no texture is available
    pub fallback_color: [f32; 4],
    /// Metres of wall covered by one texture repeat
    pub tile_size: f32,
}

impl Default for MaterialParams {
    fn default() -> Self {
        Self {
            name: "BrickWall".to_string(),
            roughness: 0.9,
            metallic: 0.0,
            fallback_color: [0.66, 0.33, 0.27, 1.0],
            tile_size: 2.0,
        }
    }
}

impl MaterialParams {
    pub fn validate(&self) -> Result<(), EnclosureError> {
        let unit = 0.0..=1.0;
        if !unit.contains(&self.roughness) || !unit.contains(&self.metallic) {
            return Err(EnclosureError::InvalidMaterialParams(format!(
                "roughness ({}) and metallic ({}) must be within 0..=1",
                self.roughness, self.metallic
            )));
        }
        if !self.fallback_color.iter().all(|c| unit.contains(c)) {
            return Err(EnclosureError::InvalidMaterialParams(
                "fallback_color components must be within 0..=1".to_string(),
            ));
        }
        if !(self.tile_size.is_finite() && self.tile_size > 0.0) {
            return Err(EnclosureError::InvalidMaterialParams(format!(
                "tile_size ({}) must be positive",
                self.tile_size
            )));
        }
        Ok(())
    }
}

/// Image file ready to embed
#[derive(Debug, Clone)]
pub struct TextureImage {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
    pub width: u32,
    pub height: u32,
}

/// Load the brick texture.
///
/// A missing file is not an error: `Ok(None)` is returned and the caller
/// falls back to a flat colour. A file that exists but does not decode as
/// PNG or JPEG is an error.
pub fn load_texture(path: &Path) -> Result<Option<TextureImage>> {
    if !path.exists() {
        tracing::warn!("Texture not found: {}", path.display());
        tracing::warn!("  Using default brick colour");
        return Ok(None);
    }

    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read texture: {:?}", path))?;

    let format = image::guess_format(&bytes)
        .map_err(|_| EnclosureError::UnsupportedTexture(path.to_path_buf()))?;
    let mime_type = match format {
        image::ImageFormat::Png => "image/png",
        image::ImageFormat::Jpeg => "image/jpeg",
        _ => return Err(EnclosureError::UnsupportedTexture(path.to_path_buf()).into()),
    };

    let decoded = image::load_from_memory_with_format(&bytes, format)
        .with_context(|| format!("Failed to decode texture: {:?}", path))?;

    tracing::info!(
        "Brick texture loaded: {} ({}x{})",
        path.display(),
        decoded.width(),
        decoded.height()
    );

    Ok(Some(TextureImage {
        path: path.to_path_buf(),
        bytes,
        mime_type,
        width: decoded.width(),
        height: decoded.height(),
    }))
}

/// Add the brick material, embedding `texture` when given
pub fn add_brick_material(
    gltf: &mut GltfBuilder,
    buffer: &mut BufferBuilder,
    params: &MaterialParams,
    texture: Option<&TextureImage>,
) -> json::Index<json::Material> {
    let (base_color_factor, base_color_texture) = match texture {
        Some(texture) => {
            let view = buffer.pack_bytes(&texture.bytes);
            let image = gltf.add_embedded_image(&params.name, view, texture.mime_type);
            let sampler = gltf.add_repeat_sampler();
            let index = gltf.add_texture(&params.name, image, Some(sampler));
            let info = json::texture::Info {
                index,
                tex_coord: 0,
                extensions: Default::default(),
                extras: Default::default(),
            };
            ([1.0; 4], Some(info))
        }
        None => (params.fallback_color, None),
    };

    let material = json::Material {
        name: Some(params.name.clone()),
        pbr_metallic_roughness: json::material::PbrMetallicRoughness {
            base_color_factor: json::material::PbrBaseColorFactor(base_color_factor),
            base_color_texture,
            metallic_factor: json::material::StrengthFactor(params.metallic),
            roughness_factor: json::material::StrengthFactor(params.roughness),
            ..Default::default()
        },
        ..Default::default()
    };

    gltf.add_material(material)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_png(path: &Path) {
        let img = image::RgbaImage::from_pixel(8, 4, image::Rgba([170, 80, 60, 255]));
        img.save_with_format(path, image::ImageFormat::Png).unwrap();
    }

    #[test]
    fn test_missing_texture_is_none() {
        let dir = tempdir().unwrap();
        let texture = load_texture(&dir.path().join("nope.png")).unwrap();
        assert!(texture.is_none());
    }

    #[test]
    fn test_png_texture_loads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("brick.png");
        write_png(&path);

        let texture = load_texture(&path).unwrap().unwrap();
        assert_eq!(texture.mime_type, "image/png");
        assert_eq!((texture.width, texture.height), (8, 4));
        assert_eq!(&texture.bytes[1..4], b"PNG");
    }

    #[test]
    fn test_garbage_texture_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("brick.png");
        std::fs::write(&path, b"definitely not an image").unwrap();

        assert!(load_texture(&path).is_err());
    }

    #[test]
    fn test_fallback_material() {
        let mut gltf = GltfBuilder::new();
        let mut buffer = gltf.buffer_builder(Vec::new());
        let params = MaterialParams::default();
        let index = add_brick_material(&mut gltf, &mut buffer, &params, None);

        let material = &gltf.root().materials[index.value()];
        let pbr = &material.pbr_metallic_roughness;
        assert_eq!(material.name.as_deref(), Some("BrickWall"));
        assert_eq!(pbr.base_color_factor.0, [0.66, 0.33, 0.27, 1.0]);
        assert!(pbr.base_color_texture.is_none());
        assert_eq!(pbr.roughness_factor.0, 0.9);
        assert_eq!(pbr.metallic_factor.0, 0.0);
        assert!(buffer.data().is_empty());
    }

    #[test]
    fn test_textured_material_embeds_image() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("brick.png");
        write_png(&path);
        let texture = load_texture(&path).unwrap();

        let mut gltf = GltfBuilder::new();
        let mut buffer = gltf.buffer_builder(Vec::new());
        let index =
            add_brick_material(&mut gltf, &mut buffer, &MaterialParams::default(), texture.as_ref());

        let root = gltf.root();
        let pbr = &root.materials[index.value()].pbr_metallic_roughness;
        assert_eq!(pbr.base_color_factor.0, [1.0; 4]);
        assert_eq!(pbr.base_color_texture.as_ref().map(|t| t.index.value()), Some(0));
        assert_eq!(root.images.len(), 1);
        assert_eq!(buffer.views().len(), 1);
        assert!(buffer.data().len() >= texture.unwrap().bytes.len());
    }

    #[test]
    fn test_params_validation() {
        assert!(MaterialParams::default().validate().is_ok());
        let shiny = MaterialParams {
            roughness: 1.5,
            ..Default::default()
        };
        assert!(shiny.validate().is_err());
        let no_tiling = MaterialParams {
            tile_size: 0.0,
            ..Default::default()
        };
        assert!(no_tiling.validate().is_err());
    }
}
