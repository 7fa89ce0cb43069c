//! glTF document construction and editing
//!
//! `GltfBuilder` wraps a `json::Root` that is either brand new or was
//! imported from an existing asset. New objects are appended after the
//! existing ones, so indices already held by the document stay valid.

use crate::{BufferBuilder, MeshAccessors, ViewIndex};
use gltf_json as json;
use gltf_json::validation::Checked::Valid;
use std::collections::BTreeMap;

/// Builder for complete glTF documents
pub struct GltfBuilder {
    root: json::Root,
}

impl GltfBuilder {
    /// Start a fresh, empty document
    pub fn new() -> Self {
        Self {
            root: json::Root::default(),
        }
    }

    /// Continue editing an existing document
    pub fn from_root(root: json::Root) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &json::Root {
        &self.root
    }

    /// Buffer builder that appends after `existing` binary data.
    ///
    /// Must be created after any views/accessors were added to the root
    /// and used for all further packing until [`GltfBuilder::finish`].
    pub fn buffer_builder(&self, existing: Vec<u8>) -> BufferBuilder {
        BufferBuilder::continuing(
            existing,
            self.root.buffer_views.len() as u32,
            self.root.accessors.len() as u32,
        )
    }

    /// Add a single-primitive triangle mesh
    pub fn add_mesh(
        &mut self,
        name: &str,
        accessors: &MeshAccessors,
        material: Option<json::Index<json::Material>>,
    ) -> json::Index<json::Mesh> {
        let mut attributes = BTreeMap::new();
        attributes.insert(
            Valid(json::mesh::Semantic::Positions),
            accessors.positions.as_json_index(),
        );

        if let Some(normals) = accessors.normals {
            attributes.insert(
                Valid(json::mesh::Semantic::Normals),
                normals.as_json_index(),
            );
        }

        if let Some(uvs) = accessors.uvs {
            attributes.insert(
                Valid(json::mesh::Semantic::TexCoords(0)),
                uvs.as_json_index(),
            );
        }

        let primitive = json::mesh::Primitive {
            attributes,
            extensions: Default::default(),
            extras: Default::default(),
            indices: accessors.indices.map(|i| i.as_json_index()),
            material,
            mode: Valid(json::mesh::Mode::Triangles),
            targets: None,
        };

        self.root.meshes.push(json::Mesh {
            extensions: Default::default(),
            extras: Default::default(),
            name: Some(name.to_string()),
            primitives: vec![primitive],
            weights: None,
        });

        json::Index::new(self.root.meshes.len() as u32 - 1)
    }

    /// Add a node, optionally instancing a mesh at a translation
    pub fn add_node(
        &mut self,
        name: &str,
        mesh: Option<json::Index<json::Mesh>>,
        translation: Option<[f32; 3]>,
    ) -> json::Index<json::Node> {
        self.root.nodes.push(json::Node {
            camera: None,
            children: None,
            extensions: Default::default(),
            extras: Default::default(),
            matrix: None,
            mesh,
            name: Some(name.to_string()),
            rotation: None,
            scale: None,
            skin: None,
            translation,
            weights: None,
        });
        json::Index::new(self.root.nodes.len() as u32 - 1)
    }

    /// Make `node` a root node of the default scene.
    ///
    /// A scene is created (and made default) when the document has none.
    pub fn add_root_node(&mut self, node: json::Index<json::Node>) {
        let scene_index = match self.root.scene {
            Some(scene) => scene.value(),
            None if !self.root.scenes.is_empty() => {
                self.root.scene = Some(json::Index::new(0));
                0
            }
            None => {
                self.root.scenes.push(json::Scene {
                    extensions: Default::default(),
                    extras: Default::default(),
                    name: Some("Scene".to_string()),
                    nodes: Vec::new(),
                });
                self.root.scene = Some(json::Index::new(0));
                0
            }
        };
        self.root.scenes[scene_index].nodes.push(node);
    }

    pub fn add_material(&mut self, material: json::Material) -> json::Index<json::Material> {
        self.root.materials.push(material);
        json::Index::new(self.root.materials.len() as u32 - 1)
    }

    /// Add a repeat-wrapped, linearly filtered sampler
    pub fn add_repeat_sampler(&mut self) -> json::Index<json::texture::Sampler> {
        self.root.samplers.push(json::texture::Sampler {
            mag_filter: Some(Valid(json::texture::MagFilter::Linear)),
            min_filter: Some(Valid(json::texture::MinFilter::LinearMipmapLinear)),
            name: None,
            wrap_s: Valid(json::texture::WrappingMode::Repeat),
            wrap_t: Valid(json::texture::WrappingMode::Repeat),
            extensions: Default::default(),
            extras: Default::default(),
        });
        json::Index::new(self.root.samplers.len() as u32 - 1)
    }

    /// Add an image whose bytes live in a buffer view
    pub fn add_embedded_image(
        &mut self,
        name: &str,
        view: ViewIndex,
        mime_type: &str,
    ) -> json::Index<json::Image> {
        self.root.images.push(json::Image {
            buffer_view: Some(view.as_json_index()),
            mime_type: Some(json::image::MimeType(mime_type.to_string())),
            name: Some(name.to_string()),
            uri: None,
            extensions: Default::default(),
            extras: Default::default(),
        });
        json::Index::new(self.root.images.len() as u32 - 1)
    }

    pub fn add_texture(
        &mut self,
        name: &str,
        source: json::Index<json::Image>,
        sampler: Option<json::Index<json::texture::Sampler>>,
    ) -> json::Index<json::Texture> {
        self.root.textures.push(json::Texture {
            name: Some(name.to_string()),
            sampler,
            source,
            extensions: Default::default(),
            extras: Default::default(),
        });
        json::Index::new(self.root.textures.len() as u32 - 1)
    }

    /// Build the final root and binary blob.
    ///
    /// Views and accessors packed by `buffer` are appended and the document
    /// is reduced to a single buffer backed by the GLB BIN chunk.
    pub fn finish(self, buffer: BufferBuilder, generator: &str) -> (json::Root, Vec<u8>) {
        let mut root = self.root;
        let (data, views, accessors) = buffer.into_parts();

        root.buffer_views.extend(views);
        root.accessors.extend(accessors);
        root.buffers = if data.is_empty() {
            Vec::new()
        } else {
            vec![json::Buffer {
                byte_length: data.len().into(),
                extensions: Default::default(),
                extras: Default::default(),
                name: None,
                uri: None,
            }]
        };
        root.asset.generator = Some(generator.to_string());

        (root, data)
    }
}

impl Default for GltfBuilder {
    fn default() -> Self {
        Self::new()
    }
}
