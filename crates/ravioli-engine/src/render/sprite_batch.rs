use anyhow::Result;

use crate::assets::AtlasImage;
use crate::render::{Camera2d, CameraUniform, RenderCtx, RenderTarget};
use crate::sprite::{draw_vertex_count, SpriteBatchConfig, SpriteGenerator, SpriteInstance};

use super::AtlasTexture;

/// Byte size of the staging region and of both GPU buffers for `capacity` sprites.
#[inline]
fn batch_byte_size(capacity: u32) -> u64 {
    capacity as u64 * std::mem::size_of::<SpriteInstance>() as u64
}

/// Storage-buffer-driven sprite renderer.
///
/// Every frame the whole batch is regenerated into a CPU staging region,
/// written to an upload buffer, copied into the storage buffer on the frame's
/// encoder, and drawn with one non-indexed draw of `6 × capacity` vertices.
/// The vertex stage builds each quad from `vertex_index`; there is no vertex
/// or index buffer.
///
/// All buffers are sized once from the configured capacity and reused.
pub struct SpriteBatch {
    config: SpriteBatchConfig,
    generator: SpriteGenerator,
    camera: Camera2d,
    staging: Vec<SpriteInstance>,

    // pipeline (rebuilt when the surface format changes)
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    // bindings
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
    camera_ubo: wgpu::Buffer,

    // instance data
    upload_buffer: wgpu::Buffer,
    storage_buffer: wgpu::Buffer,

    atlas: AtlasTexture,
}

impl SpriteBatch {
    /// Allocates the batch buffers and uploads the atlas.
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        atlas_image: &AtlasImage,
        config: SpriteBatchConfig,
    ) -> Result<Self> {
        anyhow::ensure!(config.capacity > 0, "sprite batch capacity must be non-zero");

        let byte_size = batch_byte_size(config.capacity);
        let limits = device.limits();
        let storage_limit = u64::from(limits.max_storage_buffer_binding_size);
        anyhow::ensure!(
            byte_size <= storage_limit && byte_size <= limits.max_buffer_size,
            "{} sprites need {byte_size} bytes, storage binding limit is {storage_limit}",
            config.capacity,
        );

        let atlas = AtlasTexture::upload(device, queue, atlas_image)?;

        let upload_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("ravioli sprite upload buffer"),
            size: byte_size,
            usage: wgpu::BufferUsages::COPY_SRC | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let storage_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("ravioli sprite storage buffer"),
            size: byte_size,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let camera_ubo = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("ravioli camera ubo"),
            size: std::mem::size_of::<CameraUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = create_bind_group_layout(device);

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("ravioli sprite bind group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_ubo.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: storage_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::TextureView(&atlas.view),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: wgpu::BindingResource::Sampler(&atlas.sampler),
                },
            ],
        });

        log::info!(
            "sprite batch ready: {} sprites, {byte_size} bytes per upload",
            config.capacity
        );

        Ok(Self {
            generator: SpriteGenerator::new(&config),
            camera: Camera2d::new(config.spawn_area.viewport()),
            staging: vec![bytemuck::Zeroable::zeroed(); config.capacity as usize],
            config,
            pipeline_format: None,
            pipeline: None,
            bind_group_layout,
            bind_group,
            camera_ubo,
            upload_buffer,
            storage_buffer,
            atlas,
        })
    }

    /// Number of sprites drawn every frame.
    pub fn capacity(&self) -> u32 {
        self.config.capacity
    }

    /// Vertex count of the per-frame draw call.
    pub fn vertex_count(&self) -> u32 {
        draw_vertex_count(self.config.capacity)
    }

    pub fn atlas_size(&self) -> (u32, u32) {
        (self.atlas.size.width, self.atlas.size.height)
    }

    /// Regenerates every sprite into the staging region and returns it.
    pub fn prepare(&mut self) -> &[SpriteInstance] {
        self.generator.fill(&mut self.staging);
        &self.staging
    }

    /// Regenerates the batch, then records its upload and draw into `target`.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        let _ = self.prepare();
        self.encode(ctx, target);
    }

    /// Records the upload of the current staging region and the draw.
    pub fn encode(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        self.ensure_pipeline(ctx);

        let byte_size = batch_byte_size(self.config.capacity);

        ctx.queue
            .write_buffer(&self.camera_ubo, 0, bytemuck::bytes_of(&self.camera.uniform()));
        ctx.queue
            .write_buffer(&self.upload_buffer, 0, bytemuck::cast_slice(&self.staging));

        // One-shot copy scoped to this frame's encoder; it runs before the pass below.
        target
            .encoder
            .copy_buffer_to_buffer(&self.upload_buffer, 0, &self.storage_buffer, 0, byte_size);

        let load = target.take_load_op();
        let Some(pipeline) = self.pipeline.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("ravioli sprite pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.draw(0..self.vertex_count(), 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("ravioli sprite batch shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/sprite_batch.wgsl").into()),
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("ravioli sprite pipeline layout"),
            bind_group_layouts: &[&self.bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("ravioli sprite pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(straight_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // The y-down camera flips winding; sprites are never culled.
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        if self.pipeline_format.is_some() {
            log::debug!("sprite pipeline rebuilt for {:?}", ctx.surface_format);
        }

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
    }
}

fn create_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("ravioli sprite bgl"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(
                        std::mem::size_of::<CameraUniform>() as u64,
                    ),
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Storage { read_only: true },
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(
                        std::mem::size_of::<SpriteInstance>() as u64,
                    ),
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 3,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    })
}

/// Non-premultiplied "over" blending for both color and alpha.
fn straight_alpha_blend() -> wgpu::BlendState {
    let over = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    };
    wgpu::BlendState {
        color: over,
        alpha: over,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffers_hold_exactly_capacity_sprites() {
        assert_eq!(batch_byte_size(1), 64);
        assert_eq!(batch_byte_size(8192), 8192 * 64);
    }

    #[test]
    fn default_batch_fits_default_storage_limit() {
        let limits = wgpu::Limits::default();
        let size = batch_byte_size(SpriteBatchConfig::default().capacity);
        assert!(size <= u64::from(limits.max_storage_buffer_binding_size));
    }

    #[test]
    fn blend_is_source_over() {
        let b = straight_alpha_blend();
        assert_eq!(b.color.src_factor, wgpu::BlendFactor::SrcAlpha);
        assert_eq!(b.color.dst_factor, wgpu::BlendFactor::OneMinusSrcAlpha);
        assert_eq!(b.alpha, b.color);
    }
}
