use bytemuck::{Pod, Zeroable};

use crate::coords::UvRect;
use crate::paint::Color;

/// Vertices synthesized per sprite: two triangles, no index buffer.
pub const VERTICES_PER_SPRITE: u32 = 6;

/// Number of vertices a batch of `sprite_count` sprites is drawn with.
#[inline]
pub const fn draw_vertex_count(sprite_count: u32) -> u32 {
    sprite_count * VERTICES_PER_SPRITE
}

/// One sprite as read by `sprite_batch.wgsl` (64 bytes):
///
///  offset  0  position  vec3<f32>
///  offset 12  rotation  f32
///  offset 16  size      vec2<f32>
///  offset 24  padding   vec2<f32>
///  offset 32  tex_rect  vec4<f32>  (u, v, w, h)
///  offset 48  color     vec4<f32>
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    pub position: [f32; 3],
    pub rotation: f32,
    pub size: [f32; 2],
    pub _padding: [f32; 2],
    pub tex_rect: [f32; 4],
    pub color: [f32; 4],
}

impl SpriteInstance {
    pub fn new(
        position: [f32; 3],
        rotation: f32,
        size: [f32; 2],
        tex_rect: UvRect,
        color: Color,
    ) -> Self {
        Self {
            position,
            rotation,
            size,
            _padding: [0.0; 2],
            tex_rect: [tex_rect.u, tex_rect.v, tex_rect.w, tex_rect.h],
            color: color.to_array(),
        }
    }

    #[inline]
    pub fn uv(&self) -> UvRect {
        let [u, v, w, h] = self.tex_rect;
        UvRect::new(u, v, w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{align_of, offset_of, size_of};

    #[test]
    fn layout_matches_shader_struct() {
        assert_eq!(size_of::<SpriteInstance>(), 64);
        assert_eq!(align_of::<SpriteInstance>(), 4);
        assert_eq!(offset_of!(SpriteInstance, position), 0);
        assert_eq!(offset_of!(SpriteInstance, rotation), 12);
        assert_eq!(offset_of!(SpriteInstance, size), 16);
        assert_eq!(offset_of!(SpriteInstance, _padding), 24);
        assert_eq!(offset_of!(SpriteInstance, tex_rect), 32);
        assert_eq!(offset_of!(SpriteInstance, color), 48);
    }

    #[test]
    fn vertex_count_is_six_per_sprite() {
        assert_eq!(draw_vertex_count(0), 0);
        assert_eq!(draw_vertex_count(1), 6);
        assert_eq!(draw_vertex_count(8192), 49_152);
    }

    #[test]
    fn new_packs_uv_and_color() {
        let s = SpriteInstance::new(
            [1.0, 2.0, 0.0],
            0.5,
            [32.0, 32.0],
            UvRect::new(0.5, 0.0, 0.5, 0.5),
            Color::WHITE,
        );
        assert_eq!(s.tex_rect, [0.5, 0.0, 0.5, 0.5]);
        assert_eq!(s.uv(), UvRect::new(0.5, 0.0, 0.5, 0.5));
        assert_eq!(s.color, [1.0; 4]);
        assert_eq!(s._padding, [0.0; 2]);
    }
}
