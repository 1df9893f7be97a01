use super::helpers;
use crate::constants::FIELD_FLOATS_PER_CELL;
use crate::core::DisplacementField;
use wgpu;

/// GPU copy of the displacement field: one Rgba32Float texel per cell,
/// read with `textureLoad` so no float filtering is required.
pub(crate) struct FieldTexture {
    pub(crate) texture: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
    pub(crate) size: u32,
}

impl FieldTexture {
    pub(crate) fn new(device: &wgpu::Device, size: u32) -> Self {
        let size = size.max(1);
        let (texture, view) = helpers::create_texture(
            device,
            "field_tex",
            size,
            size,
            wgpu::TextureFormat::Rgba32Float,
            wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        );
        Self {
            texture,
            view,
            size,
        }
    }

    /// Upload the whole field. Mismatched sizes are skipped.
    pub(crate) fn write(&self, queue: &wgpu::Queue, field: &DisplacementField) -> bool {
        let n = self.size as usize;
        if field.size() != n || field.as_slice().len() != FIELD_FLOATS_PER_CELL * n * n {
            return false;
        }
        let row_bytes = (FIELD_FLOATS_PER_CELL * std::mem::size_of::<f32>()) as u32 * self.size;
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            bytemuck::cast_slice(field.as_slice()),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(row_bytes),
                rows_per_image: Some(self.size),
            },
            wgpu::Extent3d {
                width: self.size,
                height: self.size,
                depth_or_array_layers: 1,
            },
        );
        true
    }

    pub(crate) fn destroy(&self) {
        self.texture.destroy();
    }
}
