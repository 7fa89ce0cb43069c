//! Scene import: parse a GLB/glTF asset and resolve its buffers

use crate::bounds::{BoundsAccumulator, SceneBounds};
use crate::error::EnclosureError;
use anyhow::{Context, Result};
use glam::{Mat4, Vec3};
use glb_builder::{align_buffer, compute_bounds, json};
use std::path::{Path, PathBuf};

/// An imported asset with every buffer loaded in memory
pub struct LoadedScene {
    pub path: PathBuf,
    pub document: gltf::Document,
    pub buffers: Vec<gltf::buffer::Data>,
}

/// Read and parse a `.glb` or `.gltf` file.
///
/// External buffer URIs are resolved relative to the file's directory.
pub fn load_scene(path: &Path) -> Result<LoadedScene> {
    if !path.exists() {
        return Err(EnclosureError::InputNotFound(path.to_path_buf()).into());
    }

    tracing::info!("Importing {}...", path.display());
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read asset: {:?}", path))?;
    let gltf::Gltf { document, blob } = gltf::Gltf::from_slice(&bytes)
        .with_context(|| format!("Failed to parse glTF: {:?}", path))?;

    let base = path.parent();
    let buffers = gltf::import_buffers(&document, base, blob)
        .with_context(|| format!("Failed to load buffers for {:?}", path))?;

    tracing::info!(
        "Imported {} ({} meshes, {} nodes)",
        path.display(),
        document.meshes().len(),
        document.nodes().len()
    );

    Ok(LoadedScene {
        path: path.to_path_buf(),
        document,
        buffers,
    })
}

impl LoadedScene {
    /// World-space bounds of every mesh instance, in the ground frame.
    ///
    /// Only the scene the walls are added to is walked: the default scene,
    /// else the first one. A document without scenes is walked from its
    /// parentless nodes. A mesh used by several nodes counts once per node.
    pub fn bounds(&self) -> Result<SceneBounds, EnclosureError> {
        let mut acc = BoundsAccumulator::new();
        let mut on_path = vec![false; self.document.nodes().len()];
        for node in self.root_nodes() {
            self.accumulate_node(&node, Mat4::IDENTITY, &mut on_path, &mut acc)?;
        }
        acc.finish()
    }

    fn root_nodes(&self) -> Vec<gltf::Node<'_>> {
        let scene = self
            .document
            .default_scene()
            .or_else(|| self.document.scenes().next());
        if let Some(scene) = scene {
            return scene.nodes().collect();
        }

        let mut has_parent = vec![false; self.document.nodes().len()];
        for node in self.document.nodes() {
            for child in node.children() {
                has_parent[child.index()] = true;
            }
        }
        self.document
            .nodes()
            .filter(|n| !has_parent[n.index()])
            .collect()
    }

    fn accumulate_node(
        &self,
        node: &gltf::Node<'_>,
        parent: Mat4,
        on_path: &mut [bool],
        acc: &mut BoundsAccumulator,
    ) -> Result<(), EnclosureError> {
        if on_path[node.index()] {
            return Err(EnclosureError::CyclicNodeHierarchy(node.index()));
        }
        on_path[node.index()] = true;

        let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());

        if let Some(mesh) = node.mesh() {
            for primitive in mesh.primitives() {
                let reader = primitive
                    .reader(|buffer| Some(self.buffers[buffer.index()].0.as_slice()));
                let Some(positions) = reader.read_positions() else {
                    continue;
                };
                let positions: Vec<[f32; 3]> = positions.collect();
                if positions.is_empty() {
                    continue;
                }
                let (min, max) = compute_bounds(&positions);
                acc.add_aabb(Vec3::from_slice(&min), Vec3::from_slice(&max), world);
            }
        }

        for child in node.children() {
            self.accumulate_node(&child, world, on_path, acc)?;
        }

        on_path[node.index()] = false;
        Ok(())
    }

    /// Convert into an editable root plus a single binary blob.
    ///
    /// Every buffer is appended (4-byte aligned) to buffer 0 and each buffer
    /// view is rebased onto it, so new data can be packed after the blob.
    pub fn into_editable(self) -> Result<(json::Root, Vec<u8>)> {
        let LoadedScene {
            path,
            document,
            buffers,
        } = self;
        let mut root = document.into_json();

        let mut blob = Vec::new();
        let mut bases = Vec::with_capacity(buffers.len());
        for (index, data) in buffers.iter().enumerate() {
            align_buffer(&mut blob);
            bases.push(blob.len() as u64);
            let declared = root.buffers.get(index).map(|b| b.byte_length.0 as usize);
            let used = declared.map_or(data.len(), |len| len.min(data.len()));
            blob.extend_from_slice(&data[..used]);
            tracing::debug!("Buffer {} merged at offset {}", index, bases[index]);
        }

        for view in &mut root.buffer_views {
            let source = view.buffer.value();
            let base = *bases.get(source).ok_or_else(|| {
                EnclosureError::UnsupportedBuffer(format!(
                    "buffer view references missing buffer {}",
                    source
                ))
            })?;
            let offset = view.byte_offset.map_or(0, |o| o.0);
            view.buffer = json::Index::new(0);
            view.byte_offset = Some((base + offset).into());
        }

        let external = root
            .images
            .iter()
            .filter_map(|image| image.uri.as_deref())
            .filter(|uri| !uri.starts_with("data:"));
        for uri in external {
            tracing::warn!(
                "Image {:?} from {} stays an external reference",
                uri,
                path.display()
            );
        }

        Ok((root, blob))
    }
}
