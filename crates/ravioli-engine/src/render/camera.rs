use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};

use crate::coords::Viewport;

/// Orthographic camera over a logical-pixel area.
///
/// Maps `(0, 0)` to the top-left of the target and `(width, height)` to the
/// bottom-right. Depth passes through unchanged: z = 0 lands on depth 0.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera2d {
    view: Viewport,
}

impl Camera2d {
    pub fn new(view: Viewport) -> Self {
        Self { view }
    }

    pub fn view(&self) -> Viewport {
        self.view
    }

    pub fn view_projection(&self) -> Mat4 {
        let (w, h) = if self.view.is_drawable() {
            (self.view.width, self.view.height)
        } else {
            (1.0, 1.0)
        };
        // left, right, bottom, top, near, far
        Mat4::orthographic_rh(0.0, w, h, 0.0, 0.0, -1.0)
    }

    /// Projects a logical-pixel point to clip space.
    pub fn project(&self, point: Vec3) -> Vec4 {
        self.view_projection() * point.extend(1.0)
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_projection: self.view_projection().to_cols_array_2d(),
        }
    }
}

/// Camera block as laid out in `sprite_batch.wgsl`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_projection: [[f32; 4]; 4],
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera2d {
        Camera2d::new(Viewport::new(640.0, 480.0))
    }

    fn approx(a: Vec4, b: Vec4) -> bool {
        (a - b).abs().max_element() < 1e-5
    }

    #[test]
    fn top_left_maps_to_upper_left_clip_corner() {
        assert!(approx(camera().project(Vec3::ZERO), Vec4::new(-1.0, 1.0, 0.0, 1.0)));
    }

    #[test]
    fn bottom_right_maps_to_lower_right_clip_corner() {
        let p = camera().project(Vec3::new(640.0, 480.0, 0.0));
        assert!(approx(p, Vec4::new(1.0, -1.0, 0.0, 1.0)));
    }

    #[test]
    fn center_maps_to_origin() {
        let p = camera().project(Vec3::new(320.0, 240.0, 0.0));
        assert!(approx(p, Vec4::new(0.0, 0.0, 0.0, 1.0)));
    }

    #[test]
    fn depth_passes_through() {
        let p = camera().project(Vec3::new(0.0, 0.0, 0.5));
        assert!((p.z - 0.5).abs() < 1e-6);
    }

    #[test]
    fn uniform_is_column_major() {
        let u = camera().uniform();
        assert_eq!(std::mem::size_of::<CameraUniform>(), 64);
        assert!((u.view_projection[0][0] - 2.0 / 640.0).abs() < 1e-7);
        assert!((u.view_projection[1][1] + 2.0 / 480.0).abs() < 1e-7);
        assert!((u.view_projection[3][0] + 1.0).abs() < 1e-6);
        assert!((u.view_projection[3][1] - 1.0).abs() < 1e-6);
    }
}
