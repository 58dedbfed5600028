use winit::dpi::PhysicalSize;

/// Drawable area in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Logical area covered by a backbuffer of `size` at `scale_factor`.
    pub fn from_physical(size: PhysicalSize<u32>, scale_factor: f64) -> Self {
        let scale = if scale_factor.is_finite() && scale_factor > 0.0 { scale_factor } else { 1.0 };
        Self::new(
            (size.width as f64 / scale) as f32,
            (size.height as f64 / scale) as f32,
        )
    }

    /// True when both sides are positive and finite (not minimized).
    #[inline]
    pub fn is_drawable(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn physical_size_is_divided_by_scale() {
        let v = Viewport::from_physical(PhysicalSize::new(1280, 960), 2.0);
        assert_eq!(v, Viewport::new(640.0, 480.0));
    }

    #[test]
    fn bogus_scale_is_treated_as_one() {
        let v = Viewport::from_physical(PhysicalSize::new(640, 480), 0.0);
        assert_eq!(v, Viewport::new(640.0, 480.0));
    }

    #[test]
    fn minimized_window_is_not_drawable() {
        assert!(!Viewport::new(0.0, 480.0).is_drawable());
        assert!(!Viewport::new(f32::NAN, 1.0).is_drawable());
        assert!(Viewport::new(640.0, 480.0).is_drawable());
    }
}
