//! The enclosure run: import, measure, build material and walls, export

use crate::bounds::SceneBounds;
use crate::box_mesh::box_mesh;
use crate::config::EnclosureConfig;
use crate::frame::{extent_to_gltf, to_gltf};
use crate::layout::{EnclosureSize, WallParams, WallSpec, layout_walls};
use crate::material::{MaterialParams, add_brick_material, load_texture};
use crate::scene::load_scene;
use anyhow::{Context, Result};
use glb_builder::{BufferBuilder, GltfBuilder, MeshBuilder, assemble_glb, json};
use std::path::{Path, PathBuf};

/// Generator string written into the output asset
pub const GENERATOR: &str = concat!("glb-enclosure ", env!("CARGO_PKG_VERSION"));

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct EnclosureReport {
    pub bounds: SceneBounds,
    pub walls: Vec<WallSpec>,
    pub textured: bool,
    pub output: PathBuf,
    pub bytes_written: usize,
}

/// Import the asset and compute its bounds only
pub fn inspect_bounds(input: &Path) -> Result<SceneBounds> {
    let scene = load_scene(input)?;
    let bounds = scene.bounds()?;
    bounds.log_summary();
    Ok(bounds)
}

/// Run the whole enclosure build described by `config`
pub fn run(config: &EnclosureConfig) -> Result<EnclosureReport> {
    config.validate()?;
    let input = config.input_path()?;
    let output = config.output_path()?;

    // Each run starts from a fresh document; nothing carries over.
    let scene = load_scene(input)?;

    let bounds = scene.bounds()?;
    bounds.log_summary();

    let texture = match &config.texture {
        Some(path) => load_texture(path)?,
        None => {
            tracing::info!("No brick texture configured, using flat colour");
            None
        }
    };

    let (root, blob) = scene.into_editable()?;
    let mut gltf = GltfBuilder::from_root(root);
    let mut buffer = gltf.buffer_builder(blob);

    let material = add_brick_material(&mut gltf, &mut buffer, &config.material, texture.as_ref());
    let walls = build_walls(
        &mut gltf,
        &mut buffer,
        &bounds,
        &config.walls,
        &config.material,
        material,
    );

    let (root, data) = gltf.finish(buffer, GENERATOR);
    let bytes_written = export_glb(&output, &root, &data)?;

    tracing::info!("Done! Output: {}", output.display());
    tracing::info!("Walls added: {}", walls.len());

    Ok(EnclosureReport {
        bounds,
        walls,
        textured: texture.is_some(),
        output,
        bytes_written,
    })
}

/// Add the four wall meshes and their root nodes
pub fn build_walls(
    gltf: &mut GltfBuilder,
    buffer: &mut BufferBuilder,
    bounds: &SceneBounds,
    params: &WallParams,
    material_params: &MaterialParams,
    material: json::Index<json::Material>,
) -> Vec<WallSpec> {
    let enclosure = EnclosureSize::new(bounds, params);
    tracing::info!("Creating enclosure:");
    tracing::info!(
        "  Dimensions: {:.2}m x {:.2}m",
        enclosure.width,
        enclosure.depth
    );
    tracing::info!("  Wall height: {}m", params.height);
    tracing::info!("  Thickness: {}m", params.thickness);
    tracing::info!("  Ground Z: {:.2}m", bounds.min.z);

    let specs = layout_walls(bounds, params);
    for spec in &specs {
        let mesh = box_mesh(extent_to_gltf(spec.size), material_params.tile_size);
        let accessors = MeshBuilder::new()
            .positions(&mesh.positions)
            .normals(&mesh.normals)
            .uvs(&mesh.uvs)
            .indices(&mesh.indices)
            .build(buffer);

        let mesh_index = gltf.add_mesh(spec.name(), &accessors, Some(material));
        let translation = to_gltf(spec.center).to_array();
        let node = gltf.add_node(spec.name(), Some(mesh_index), Some(translation));
        gltf.add_root_node(node);

        tracing::info!(
            "Wall created: {} at ({:.2}, {:.2}, {:.2}) size ({:.2}, {:.2}, {:.2})",
            spec.name(),
            spec.center.x,
            spec.center.y,
            spec.center.z,
            spec.size.x,
            spec.size.y,
            spec.size.z
        );
    }

    specs.to_vec()
}

/// Write `root` and `data` as a GLB file, creating parent directories
pub fn export_glb(path: &Path, root: &json::Root, data: &[u8]) -> Result<usize> {
    tracing::info!("Exporting to {}...", path.display());
    let glb = assemble_glb(root, data)?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {:?}", dir))?;
    }
    std::fs::write(path, &glb).with_context(|| format!("Failed to write GLB: {:?}", path))?;

    tracing::info!("Exported: {} ({} bytes)", path.display(), glb.len());
    Ok(glb.len())
}
