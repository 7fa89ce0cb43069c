//! Utility functions for GLB construction

use anyhow::{Context, Result};
use gltf_json as json;

const GLB_MAGIC: &[u8; 4] = b"glTF";
const GLB_VERSION: u32 = 2;
const CHUNK_JSON: u32 = 0x4E4F534A;
const CHUNK_BIN: u32 = 0x004E4942;

/// Compute bounding box for positions
pub fn compute_bounds(positions: &[[f32; 3]]) -> (Vec<f32>, Vec<f32>) {
    let mut min = [f32::MAX; 3];
    let mut max = [f32::MIN; 3];

    for pos in positions {
        for i in 0..3 {
            min[i] = min[i].min(pos[i]);
            max[i] = max[i].max(pos[i]);
        }
    }

    (min.to_vec(), max.to_vec())
}

/// Align buffer to 4-byte boundary
pub fn align_buffer(buffer: &mut Vec<u8>) {
    let padded = buffer.len().next_multiple_of(4);
    buffer.resize(padded, 0);
}

/// Assemble GLB binary from JSON and buffer data.
///
/// The BIN chunk is omitted when `buffer_data` is empty.
pub fn assemble_glb(root: &json::Root, buffer_data: &[u8]) -> Result<Vec<u8>> {
    let json_string =
        json::serialize::to_string(root).context("Failed to serialize glTF JSON")?;
    let json_bytes = json_string.as_bytes();

    let json_chunk_length = json_bytes.len().next_multiple_of(4);
    let buffer_chunk_length = buffer_data.len().next_multiple_of(4);
    let bin_chunk_total = if buffer_data.is_empty() {
        0
    } else {
        8 + buffer_chunk_length
    };

    let total_length = 12 + 8 + json_chunk_length + bin_chunk_total;
    let total_u32 = u32::try_from(total_length).context("GLB exceeds 4 GiB")?;

    let mut glb = Vec::with_capacity(total_length);

    glb.extend_from_slice(GLB_MAGIC);
    glb.extend_from_slice(&GLB_VERSION.to_le_bytes());
    glb.extend_from_slice(&total_u32.to_le_bytes());

    // JSON chunk, padded with spaces
    glb.extend_from_slice(&(json_chunk_length as u32).to_le_bytes());
    glb.extend_from_slice(&CHUNK_JSON.to_le_bytes());
    glb.extend_from_slice(json_bytes);
    glb.resize(20 + json_chunk_length, 0x20);

    if !buffer_data.is_empty() {
        glb.extend_from_slice(&(buffer_chunk_length as u32).to_le_bytes());
        glb.extend_from_slice(&CHUNK_BIN.to_le_bytes());
        glb.extend_from_slice(buffer_data);
        glb.resize(total_length, 0);
    }

    Ok(glb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_bounds_simple() {
        let positions = [[0.0, 0.0, 0.0], [1.0, 2.0, 3.0], [-1.0, -2.0, -3.0]];
        let (min, max) = compute_bounds(&positions);
        assert_eq!(min, vec![-1.0, -2.0, -3.0]);
        assert_eq!(max, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_align_buffer() {
        let mut buffer = vec![1, 2, 3];
        align_buffer(&mut buffer);
        assert_eq!(buffer, vec![1, 2, 3, 0]);

        let mut buffer2 = vec![1, 2, 3, 4];
        align_buffer(&mut buffer2);
        assert_eq!(buffer2.len(), 4); // Already aligned
    }

    #[test]
    fn test_assemble_glb_header_and_chunks() {
        let root = json::Root::default();
        let glb = assemble_glb(&root, &[1, 2, 3]).unwrap();

        assert_eq!(&glb[0..4], b"glTF");
        assert_eq!(u32::from_le_bytes(glb[4..8].try_into().unwrap()), 2);
        assert_eq!(
            u32::from_le_bytes(glb[8..12].try_into().unwrap()) as usize,
            glb.len()
        );
        assert_eq!(glb.len() % 4, 0);

        let json_len = u32::from_le_bytes(glb[12..16].try_into().unwrap()) as usize;
        let bin_header = 20 + json_len;
        assert_eq!(
            u32::from_le_bytes(glb[bin_header..bin_header + 4].try_into().unwrap()),
            4
        );
        assert_eq!(&glb[bin_header + 8..bin_header + 11], &[1, 2, 3]);
    }

    #[test]
    fn test_assemble_glb_without_binary() {
        let root = json::Root::default();
        let glb = assemble_glb(&root, &[]).unwrap();
        let json_len = u32::from_le_bytes(glb[12..16].try_into().unwrap()) as usize;
        assert_eq!(glb.len(), 20 + json_len);
    }
}
