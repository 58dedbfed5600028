/// Initialization parameters for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    ///
    /// Off by default: the sprite atlas is sampled from an `Rgba8Unorm`
    /// texture and written out unchanged, matching how the art was authored.
    pub prefer_srgb: bool,

    /// Present modes to try, most preferred first.
    ///
    /// The first mode the surface supports wins. `Fifo` is used when none of
    /// them is supported, since every surface is required to offer it.
    pub present_modes: Vec<wgpu::PresentMode>,

    /// Optional alpha mode preference for the surface.
    ///
    /// If provided but unsupported on the current surface, a supported mode is selected.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Required wgpu features.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    ///
    /// The sprite batch reads a storage buffer from the vertex stage, so the
    /// limits must allow at least one vertex-stage storage buffer.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface.
    ///
    /// This value is a hint; support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: false,
            present_modes: vec![wgpu::PresentMode::Immediate, wgpu::PresentMode::Mailbox],
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}
