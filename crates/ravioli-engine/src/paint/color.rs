/// Straight-alpha RGBA color, channels in `[0, 1]`.
///
/// The sprite pipeline blends with `SrcAlpha / OneMinusSrcAlpha`, so colors
/// are kept unpremultiplied end to end.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Converts to an 8-bit RGBA quadruple, clamping out-of-range channels.
    #[inline]
    pub fn to_u8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u8_round_trip_of_extremes() {
        assert_eq!(Color::WHITE.to_u8(), [255, 255, 255, 255]);
        assert_eq!(Color::BLACK.to_u8(), [0, 0, 0, 255]);
        assert_eq!(Color::from_u8(255, 0, 0, 255), Color::rgba(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn to_u8_clamps() {
        assert_eq!(Color::rgba(2.0, -1.0, 0.5, 1.0).to_u8(), [255, 0, 128, 255]);
    }

    #[test]
    fn clear_color_maps_to_wgpu() {
        let c = Color::BLACK.to_wgpu();
        assert_eq!((c.r, c.g, c.b, c.a), (0.0, 0.0, 0.0, 1.0));
    }
}
