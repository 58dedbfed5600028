/// Rectangle in normalized texture coordinates.
///
/// `(u, v)` is the top-left corner, `(w, h)` the extent; a full texture is
/// `(0, 0, 1, 1)`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct UvRect {
    pub u: f32,
    pub v: f32,
    pub w: f32,
    pub h: f32,
}

impl UvRect {
    pub const FULL: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    #[inline]
    pub const fn new(u: f32, v: f32, w: f32, h: f32) -> Self {
        Self { u, v, w, h }
    }

    /// Returns `true` if the rect lies within `[0, 1]` on both axes.
    #[inline]
    pub fn is_normalized(self) -> bool {
        self.u >= 0.0
            && self.v >= 0.0
            && self.w >= 0.0
            && self.h >= 0.0
            && self.u + self.w <= 1.0
            && self.v + self.h <= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_is_normalized() {
        assert!(UvRect::FULL.is_normalized());
    }

    #[test]
    fn quarter_cells_are_normalized() {
        assert!(UvRect::new(0.5, 0.5, 0.5, 0.5).is_normalized());
    }

    #[test]
    fn overhanging_rect_is_not_normalized() {
        assert!(!UvRect::new(0.75, 0.0, 0.5, 0.5).is_normalized());
        assert!(!UvRect::new(-0.1, 0.0, 0.5, 0.5).is_normalized());
    }
}
