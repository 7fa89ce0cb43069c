//! Binary buffer packing with automatic alignment and accessor creation
//!
//! A `BufferBuilder` either starts empty or continues an existing binary
//! blob (e.g. the BIN chunk of an imported GLB). In the latter case every
//! view and accessor it creates is numbered after the ones already present
//! in the document, so indices can be used directly in the final root.

use crate::utils::{align_buffer, compute_bounds};
use gltf_json as json;
use gltf_json::validation::Checked::Valid;

/// Accessor index returned by buffer operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessorIndex(pub u32);

impl AccessorIndex {
    pub fn as_json_index(&self) -> json::Index<json::Accessor> {
        json::Index::new(self.0)
    }
}

/// Buffer view index returned by [`BufferBuilder::pack_bytes`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewIndex(pub u32);

impl ViewIndex {
    pub fn as_json_index(&self) -> json::Index<json::buffer::View> {
        json::Index::new(self.0)
    }
}

/// Builder for the single binary buffer of a GLB
pub struct BufferBuilder {
    buffer: Vec<u8>,
    views: Vec<json::buffer::View>,
    accessors: Vec<json::Accessor>,
    view_base: u32,
    accessor_base: u32,
}

impl BufferBuilder {
    /// Create a new empty buffer builder
    pub fn new() -> Self {
        Self::continuing(Vec::new(), 0, 0)
    }

    /// Continue packing after `existing` data.
    ///
    /// `view_base` and `accessor_base` are the view/accessor counts of the
    /// document the data belongs to.
    pub fn continuing(existing: Vec<u8>, view_base: u32, accessor_base: u32) -> Self {
        let mut buffer = existing;
        align_buffer(&mut buffer);
        Self {
            buffer,
            views: Vec::new(),
            accessors: Vec::new(),
            view_base,
            accessor_base,
        }
    }

    /// Number of accessors created by this builder
    pub fn accessor_count(&self) -> u32 {
        self.accessors.len() as u32
    }

    /// Absolute index the next accessor will get
    pub fn next_accessor_index(&self) -> AccessorIndex {
        AccessorIndex(self.accessor_base + self.accessor_count())
    }

    /// Get the binary buffer data
    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    /// Get the buffer views created by this builder
    pub fn views(&self) -> &[json::buffer::View] {
        &self.views
    }

    /// Get the accessors created by this builder
    pub fn accessors(&self) -> &[json::Accessor] {
        &self.accessors
    }

    /// Split into (data, views, accessors)
    pub fn into_parts(self) -> (Vec<u8>, Vec<json::buffer::View>, Vec<json::Accessor>) {
        (self.buffer, self.views, self.accessors)
    }

    /// Pack Vec3 positions with bounds calculation
    pub fn pack_positions(&mut self, positions: &[[f32; 3]]) -> AccessorIndex {
        let view = self.push_view(
            bytemuck::cast_slice(positions),
            Some(json::buffer::Target::ArrayBuffer),
        );
        let (min, max) = compute_bounds(positions);
        self.push_accessor(
            view,
            positions.len(),
            json::accessor::ComponentType::F32,
            json::accessor::Type::Vec3,
            Some((min, max)),
        )
    }

    /// Pack Vec3 data (normals)
    pub fn pack_vec3(&mut self, data: &[[f32; 3]]) -> AccessorIndex {
        let view = self.push_view(
            bytemuck::cast_slice(data),
            Some(json::buffer::Target::ArrayBuffer),
        );
        self.push_accessor(
            view,
            data.len(),
            json::accessor::ComponentType::F32,
            json::accessor::Type::Vec3,
            None,
        )
    }

    /// Pack Vec2 data (UVs)
    pub fn pack_vec2(&mut self, data: &[[f32; 2]]) -> AccessorIndex {
        let view = self.push_view(
            bytemuck::cast_slice(data),
            Some(json::buffer::Target::ArrayBuffer),
        );
        self.push_accessor(
            view,
            data.len(),
            json::accessor::ComponentType::F32,
            json::accessor::Type::Vec2,
            None,
        )
    }

    /// Pack u16 indices
    pub fn pack_indices_u16(&mut self, indices: &[u16]) -> AccessorIndex {
        let bytes: Vec<u8> = indices.iter().flat_map(|i| i.to_le_bytes()).collect();
        let view = self.push_view(&bytes, Some(json::buffer::Target::ElementArrayBuffer));
        self.push_accessor(
            view,
            indices.len(),
            json::accessor::ComponentType::U16,
            json::accessor::Type::Scalar,
            None,
        )
    }

    /// Pack opaque bytes (embedded images) into a view without accessor
    pub fn pack_bytes(&mut self, bytes: &[u8]) -> ViewIndex {
        self.push_view(bytes, None)
    }

    fn push_view(&mut self, bytes: &[u8], target: Option<json::buffer::Target>) -> ViewIndex {
        let offset = self.buffer.len();
        self.buffer.extend_from_slice(bytes);
        align_buffer(&mut self.buffer);

        self.views.push(json::buffer::View {
            buffer: json::Index::new(0),
            byte_length: bytes.len().into(),
            byte_offset: Some((offset as u64).into()),
            byte_stride: None,
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            target: target.map(Valid),
        });

        ViewIndex(self.view_base + self.views.len() as u32 - 1)
    }

    fn push_accessor(
        &mut self,
        view: ViewIndex,
        count: usize,
        component_type: json::accessor::ComponentType,
        type_: json::accessor::Type,
        bounds: Option<(Vec<f32>, Vec<f32>)>,
    ) -> AccessorIndex {
        let to_value =
            |v: Vec<f32>| json::Value::Array(v.into_iter().map(json::Value::from).collect());
        let (min, max) = match bounds {
            Some((min, max)) => (Some(to_value(min)), Some(to_value(max))),
            None => (None, None),
        };

        let index = self.next_accessor_index();
        self.accessors.push(json::Accessor {
            buffer_view: Some(view.as_json_index()),
            byte_offset: Some(0u64.into()),
            count: count.into(),
            component_type: Valid(json::accessor::GenericComponentType(component_type)),
            extensions: Default::default(),
            extras: Default::default(),
            type_: Valid(type_),
            min,
            max,
            name: None,
            normalized: false,
            sparse: None,
        });
        index
    }
}

impl Default for BufferBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_builder_positions() {
        let mut builder = BufferBuilder::new();
        let positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.5, 1.0, 0.0]];
        let idx = builder.pack_positions(&positions);

        assert_eq!(idx, AccessorIndex(0));
        assert_eq!(builder.accessor_count(), 1);
        assert_eq!(builder.views().len(), 1);
        // 3 positions * 12 bytes = 36 bytes, aligned to 4 = 36
        assert_eq!(builder.data().len(), 36);
        assert!(builder.accessors()[0].min.is_some());
    }

    #[test]
    fn test_buffer_builder_indices() {
        let mut builder = BufferBuilder::new();
        let indices: [u16; 3] = [0, 1, 2];
        let idx = builder.pack_indices_u16(&indices);

        assert_eq!(idx, AccessorIndex(0));
        // 3 indices * 2 bytes = 6 bytes, aligned to 8
        assert_eq!(builder.data().len(), 8);
    }

    #[test]
    fn test_continuing_offsets_indices_and_data() {
        let mut builder = BufferBuilder::continuing(vec![7u8; 10], 3, 5);
        let idx = builder.pack_vec2(&[[0.0, 1.0]]);

        assert_eq!(idx, AccessorIndex(5));
        assert_eq!(
            builder.accessors()[0].buffer_view.map(|v| v.value()),
            Some(3)
        );
        // Existing 10 bytes padded to 12, then 8 bytes of UV
        assert_eq!(builder.views()[0].byte_offset.map(|o| o.0), Some(12));
        assert_eq!(builder.data().len(), 20);
        assert_eq!(&builder.data()[..10], &[7u8; 10]);
    }

    #[test]
    fn test_pack_bytes_has_no_target() {
        let mut builder = BufferBuilder::new();
        let view = builder.pack_bytes(&[1, 2, 3, 4, 5]);

        assert_eq!(view, ViewIndex(0));
        assert!(builder.views()[0].target.is_none());
        assert_eq!(builder.accessor_count(), 0);
        assert_eq!(builder.data().len(), 8);
    }
}
