//! Run configuration: TOML file plus command-line overrides

use crate::error::EnclosureError;
use crate::layout::WallParams;
use crate::material::MaterialParams;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Suffix appended to the input stem when no output is given
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_with_wall";

/// Root config structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EnclosureConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub texture: Option<PathBuf>,
    pub walls: WallParams,
    pub material: MaterialParams,
}

/// Values given on the command line; `None` keeps the config value
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub texture: Option<PathBuf>,
    pub height: Option<f32>,
    pub thickness: Option<f32>,
    pub margin: Option<f32>,
    pub tile_size: Option<f32>,
}

/// Load and parse a config file.
///
/// Relative paths inside the file are resolved against its directory.
pub fn load_config(path: &Path) -> Result<EnclosureConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {:?}", path))?;
    let mut config: EnclosureConfig =
        toml::from_str(&content).with_context(|| format!("Failed to parse config: {:?}", path))?;

    if let Some(dir) = path.parent() {
        for field in [&mut config.input, &mut config.output, &mut config.texture] {
            if let Some(p) = field.as_mut() {
                if p.is_relative() {
                    *p = dir.join(&*p);
                }
            }
        }
    }

    Ok(config)
}

impl EnclosureConfig {
    pub fn apply_overrides(&mut self, overrides: Overrides) {
        if overrides.input.is_some() {
            self.input = overrides.input;
        }
        if overrides.output.is_some() {
            self.output = overrides.output;
        }
        if overrides.texture.is_some() {
            self.texture = overrides.texture;
        }
        if let Some(height) = overrides.height {
            self.walls.height = height;
        }
        if let Some(thickness) = overrides.thickness {
            self.walls.thickness = thickness;
        }
        if let Some(margin) = overrides.margin {
            self.walls.margin = margin;
        }
        if let Some(tile_size) = overrides.tile_size {
            self.material.tile_size = tile_size;
        }
    }

    pub fn validate(&self) -> Result<(), EnclosureError> {
        if self.input.is_none() {
            return Err(EnclosureError::MissingInput);
        }
        self.walls.validate()?;
        self.material.validate()
    }

    pub fn input_path(&self) -> Result<&Path, EnclosureError> {
        self.input.as_deref().ok_or(EnclosureError::MissingInput)
    }

    /// Output path, defaulting to `<input stem>_with_wall.glb` next to the input
    pub fn output_path(&self) -> Result<PathBuf, EnclosureError> {
        if let Some(output) = &self.output {
            return Ok(output.clone());
        }
        let input = self.input_path()?;
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "scene".to_string());
        Ok(input.with_file_name(format!("{stem}{DEFAULT_OUTPUT_SUFFIX}.glb")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: EnclosureConfig = toml::from_str("").unwrap();
        assert!(config.input.is_none());
        assert_eq!(config.walls, WallParams::default());
        assert_eq!(config.material, MaterialParams::default());
    }

    #[test]
    fn test_partial_tables() {
        let config: EnclosureConfig = toml::from_str(
            r#"
            input = "college.glb"

            [walls]
            height = 3.5

            [material]
            tile_size = 3.0
            "#,
        )
        .unwrap();

        assert_eq!(config.walls.height, 3.5);
        assert_eq!(config.walls.thickness, 1.0);
        assert_eq!(config.material.tile_size, 3.0);
        assert_eq!(config.material.roughness, 0.9);
    }

    #[test]
    fn test_load_resolves_relative_paths() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("walls.toml");
        std::fs::write(
            &path,
            "input = \"public/college.glb\"\ntexture = \"/abs/brick.png\"\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.input, Some(dir.path().join("public/college.glb")));
        assert_eq!(config.texture, Some(PathBuf::from("/abs/brick.png")));
    }

    #[test]
    fn test_overrides_win() {
        let mut config = EnclosureConfig {
            input: Some(PathBuf::from("a.glb")),
            ..Default::default()
        };
        config.apply_overrides(Overrides {
            input: Some(PathBuf::from("b.glb")),
            margin: Some(2.0),
            ..Default::default()
        });

        assert_eq!(config.input, Some(PathBuf::from("b.glb")));
        assert_eq!(config.walls.margin, 2.0);
        assert_eq!(config.walls.height, 6.0);
    }

    #[test]
    fn test_default_output_path() {
        let config = EnclosureConfig {
            input: Some(PathBuf::from("public/college.glb")),
            ..Default::default()
        };
        assert_eq!(
            config.output_path().unwrap(),
            PathBuf::from("public/college_with_wall.glb")
        );
    }

    #[test]
    fn test_missing_input_fails_validation() {
        let config = EnclosureConfig::default();
        assert!(matches!(
            config.validate(),
            Err(EnclosureError::MissingInput)
        ));
    }
}
