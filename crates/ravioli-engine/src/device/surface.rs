use winit::dpi::PhysicalSize;

use super::SurfaceErrorAction;

pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    let first = *formats.first()?;

    let wanted_srgb = |f: &wgpu::TextureFormat| f.is_srgb() == prefer_srgb;
    let preferred = [
        wgpu::TextureFormat::Bgra8Unorm,
        wgpu::TextureFormat::Rgba8Unorm,
        wgpu::TextureFormat::Bgra8UnormSrgb,
        wgpu::TextureFormat::Rgba8UnormSrgb,
    ];
    for f in preferred.iter().filter(|f| wanted_srgb(f)) {
        if formats.contains(f) {
            return Some(*f);
        }
    }

    Some(formats.iter().copied().find(wanted_srgb).unwrap_or(first))
}

pub(crate) fn choose_present_mode(
    supported: &[wgpu::PresentMode],
    preferences: &[wgpu::PresentMode],
) -> wgpu::PresentMode {
    preferences
        .iter()
        .copied()
        .find(|m| supported.contains(m))
        .unwrap_or(wgpu::PresentMode::Fifo)
}

pub(crate) fn choose_alpha_mode(
    supported: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| supported.contains(m))
        .or_else(|| supported.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

pub(crate) fn apply_resize(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut PhysicalSize<u32>,
    new_size: PhysicalSize<u32>,
) {
    *size = new_size;

    // wgpu rejects 0x0 configurations (minimized windows); defer until restored.
    if new_size.width == 0 || new_size.height == 0 {
        return;
    }

    config.width = new_size.width;
    config.height = new_size.height;

    surface.configure(device, config);
}

pub(crate) fn map_surface_error(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
    err: &wgpu::SurfaceError,
) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
            if size.width > 0 && size.height > 0 {
                surface.configure(device, config);
            }
            SurfaceErrorAction::Reconfigured
        }
        wgpu::SurfaceError::Timeout => SurfaceErrorAction::SkipFrame,
        wgpu::SurfaceError::OutOfMemory | wgpu::SurfaceError::Other => SurfaceErrorAction::Fatal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::{CompositeAlphaMode, PresentMode, TextureFormat};

    // ── present mode ──────────────────────────────────────────────────────

    #[test]
    fn present_mode_prefers_immediate() {
        let supported = [PresentMode::Fifo, PresentMode::Mailbox, PresentMode::Immediate];
        let prefs = [PresentMode::Immediate, PresentMode::Mailbox];
        assert_eq!(choose_present_mode(&supported, &prefs), PresentMode::Immediate);
    }

    #[test]
    fn present_mode_falls_through_to_mailbox() {
        let supported = [PresentMode::Fifo, PresentMode::Mailbox];
        let prefs = [PresentMode::Immediate, PresentMode::Mailbox];
        assert_eq!(choose_present_mode(&supported, &prefs), PresentMode::Mailbox);
    }

    #[test]
    fn present_mode_defaults_to_fifo() {
        let supported = [PresentMode::Fifo];
        let prefs = [PresentMode::Immediate, PresentMode::Mailbox];
        assert_eq!(choose_present_mode(&supported, &prefs), PresentMode::Fifo);
        assert_eq!(choose_present_mode(&supported, &[]), PresentMode::Fifo);
    }

    // ── surface format ────────────────────────────────────────────────────

    #[test]
    fn format_none_when_surface_reports_nothing() {
        assert_eq!(choose_surface_format(&[], true), None);
    }

    #[test]
    fn format_linear_when_srgb_not_preferred() {
        let formats = [TextureFormat::Bgra8UnormSrgb, TextureFormat::Bgra8Unorm];
        assert_eq!(choose_surface_format(&formats, false), Some(TextureFormat::Bgra8Unorm));
    }

    #[test]
    fn format_srgb_when_preferred() {
        let formats = [TextureFormat::Bgra8Unorm, TextureFormat::Rgba8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, true), Some(TextureFormat::Rgba8UnormSrgb));
    }

    #[test]
    fn format_falls_back_to_first() {
        let formats = [TextureFormat::Rgb10a2Unorm];
        assert_eq!(choose_surface_format(&formats, true), Some(TextureFormat::Rgb10a2Unorm));
    }

    // ── alpha mode ────────────────────────────────────────────────────────

    #[test]
    fn alpha_mode_honors_supported_request() {
        let supported = [CompositeAlphaMode::Opaque, CompositeAlphaMode::PreMultiplied];
        assert_eq!(
            choose_alpha_mode(&supported, Some(CompositeAlphaMode::PreMultiplied)),
            CompositeAlphaMode::PreMultiplied
        );
    }

    #[test]
    fn alpha_mode_ignores_unsupported_request() {
        let supported = [CompositeAlphaMode::Opaque];
        assert_eq!(
            choose_alpha_mode(&supported, Some(CompositeAlphaMode::PostMultiplied)),
            CompositeAlphaMode::Opaque
        );
        assert_eq!(choose_alpha_mode(&[], None), CompositeAlphaMode::Auto);
    }
}
