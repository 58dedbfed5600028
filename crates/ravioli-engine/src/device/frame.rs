/// Surface texture plus the encoder recording into it, for one frame.
///
/// Hand it back to [`super::Gpu::submit`] as soon as recording is done; the
/// swapchain will not give out another texture while this one is held.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
