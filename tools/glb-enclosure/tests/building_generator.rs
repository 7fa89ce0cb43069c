//! Programmatic building assets for integration tests.
//!
//! The "college" is two blocks under a translated group node:
//! - main block 40 x 12 x 20 (glTF x, y, z)
//! - annex 10 x 6 x 10 placed east of it

use glb_builder::{GltfBuilder, MeshBuilder, assemble_glb, json};

/// Group translation (glTF)
pub const GROUP_OFFSET: [f32; 3] = [100.0, -2.0, 50.0];

/// Ground-frame bounds of the generated building: (min, max)
pub const EXPECTED_MIN: [f32; 3] = [80.0, -60.0, -2.0];
pub const EXPECTED_MAX: [f32; 3] = [130.0, -40.0, 10.0];

/// Box positions and indices, centred on the origin
fn block(size: [f32; 3]) -> (Vec<[f32; 3]>, Vec<u16>) {
    let [x, y, z] = size.map(|s| s / 2.0);
    let positions = vec![
        [-x, -y, -z],
        [x, -y, -z],
        [x, y, -z],
        [-x, y, -z],
        [-x, -y, z],
        [x, -y, z],
        [x, y, z],
        [-x, y, z],
    ];
    let indices = vec![
        0, 2, 1, 0, 3, 2, // back
        4, 5, 6, 4, 6, 7, // front
        0, 1, 5, 0, 5, 4, // bottom
        3, 7, 6, 3, 6, 2, // top
        1, 2, 6, 1, 6, 5, // right
        0, 4, 7, 0, 7, 3, // left
    ];
    (positions, indices)
}

/// Generate the test building as GLB bytes
pub fn generate_building_glb() -> Vec<u8> {
    let mut gltf = GltfBuilder::new();
    let mut buffer = gltf.buffer_builder(Vec::new());

    let (main_pos, main_idx) = block([40.0, 12.0, 20.0]);
    let main = MeshBuilder::new()
        .positions(&main_pos)
        .indices(&main_idx)
        .build(&mut buffer);
    let (annex_pos, annex_idx) = block([10.0, 6.0, 10.0]);
    let annex = MeshBuilder::new()
        .positions(&annex_pos)
        .indices(&annex_idx)
        .build(&mut buffer);

    let facade = gltf.add_material(json::Material {
        name: Some("Facade".to_string()),
        ..Default::default()
    });
    let main_mesh = gltf.add_mesh("MainBlock", &main, Some(facade));
    let annex_mesh = gltf.add_mesh("Annex", &annex, Some(facade));

    // Main block: local y 0..12 (resting on the group origin)
    let main_node = gltf.add_node("MainBlock", Some(main_mesh), Some([0.0, 6.0, 0.0]));
    // Annex east of the main block: x 20..30, y 0..6
    let annex_node = gltf.add_node("Annex", Some(annex_mesh), Some([25.0, 3.0, 0.0]));
    let group = gltf.add_node("College", None, Some(GROUP_OFFSET));
    gltf.add_root_node(group);

    let (mut root, data) = gltf.finish(buffer, "building-generator");
    root.nodes[group.value()].children = Some(vec![main_node, annex_node]);

    assemble_glb(&root, &data).expect("Failed to assemble building GLB")
}

/// Write a small brick PNG
pub fn write_brick_png(path: &std::path::Path) {
    let img = image::RgbaImage::from_fn(16, 16, |x, y| {
        if y % 8 == 0 || (x + (y / 8) * 4) % 8 == 0 {
            image::Rgba([200, 200, 190, 255])
        } else {
            image::Rgba([168, 84, 68, 255])
        }
    });
    img.save_with_format(path, image::ImageFormat::Png)
        .expect("Failed to write brick PNG");
}
