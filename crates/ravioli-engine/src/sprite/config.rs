use crate::coords::Viewport;
use crate::paint::Color;

use super::AtlasGrid;

/// Logical area sprites are scattered over, in whole pixels.
///
/// The camera projects exactly this area onto the window, independent of the
/// window's current size.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SpawnArea {
    pub width: u32,
    pub height: u32,
}

impl SpawnArea {
    /// Creates an area; zero dimensions are bumped to 1.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width as f32, self.height as f32)
    }
}

impl Default for SpawnArea {
    fn default() -> Self {
        Self::new(640, 480)
    }
}

/// Sprite batch configuration.
#[derive(Debug, Clone)]
pub struct SpriteBatchConfig {
    /// Number of sprites generated and drawn every frame.
    pub capacity: u32,

    /// Seed for sprite placement. A constant seed gives the same sequence on
    /// every run.
    pub seed: u64,

    pub spawn_area: SpawnArea,

    /// Edge length of every sprite, in logical pixels.
    pub sprite_size: f32,

    /// How the atlas texture is divided into sprite cells.
    pub atlas_grid: AtlasGrid,

    /// Color multiplied with every sampled texel.
    pub tint: Color,

    /// Color the frame is cleared to before sprites are drawn.
    pub clear_color: Color,
}

impl Default for SpriteBatchConfig {
    fn default() -> Self {
        Self {
            capacity: 8192,
            seed: 0,
            spawn_area: SpawnArea::default(),
            sprite_size: 32.0,
            atlas_grid: AtlasGrid::default(),
            tint: Color::WHITE,
            clear_color: Color::BLACK,
        }
    }
}
