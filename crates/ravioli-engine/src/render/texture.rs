use anyhow::Result;

use crate::assets::AtlasImage;

/// Sampled RGBA8 texture holding the sprite atlas.
pub struct AtlasTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    pub size: wgpu::Extent3d,
}

impl AtlasTexture {
    /// Creates the texture and queues the pixel upload.
    ///
    /// The upload lands before the next submission on `queue`.
    pub fn upload(device: &wgpu::Device, queue: &wgpu::Queue, image: &AtlasImage) -> Result<Self> {
        let max = device.limits().max_texture_dimension_2d;
        anyhow::ensure!(
            image.width <= max && image.height <= max,
            "atlas is {}x{}, device limit is {max}",
            image.width,
            image.height,
        );

        let size = wgpu::Extent3d {
            width: image.width,
            height: image.height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("ravioli atlas"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &image.pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(image.width * 4),
                rows_per_image: Some(image.height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        // Pixel art: no filtering, no wrap-around bleeding between cells.
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("ravioli atlas sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });

        log::debug!("atlas uploaded ({}x{})", image.width, image.height);

        Ok(Self {
            texture,
            view,
            sampler,
            size,
        })
    }
}
