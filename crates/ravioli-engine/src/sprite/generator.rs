use std::f32::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{AtlasGrid, SpawnArea, SpriteBatchConfig, SpriteInstance};
use crate::paint::Color;

/// Produces a fresh set of randomly placed sprites each frame.
///
/// The random source is seeded once at construction; successive `fill` calls
/// continue the same sequence.
#[derive(Debug, Clone)]
pub struct SpriteGenerator {
    rng: StdRng,
    area: SpawnArea,
    sprite_size: f32,
    grid: AtlasGrid,
    tint: Color,
}

impl SpriteGenerator {
    pub fn new(config: &SpriteBatchConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(config.seed),
            area: config.spawn_area,
            sprite_size: config.sprite_size,
            grid: config.atlas_grid,
            tint: config.tint,
        }
    }

    /// Overwrites every slot of `dst`.
    pub fn fill(&mut self, dst: &mut [SpriteInstance]) {
        for slot in dst.iter_mut() {
            *slot = self.next_instance();
        }
    }

    fn next_instance(&mut self) -> SpriteInstance {
        let cell = self.rng.random_range(0..self.grid.cell_count());
        let x = self.rng.random_range(0..self.area.width) as f32;
        let y = self.rng.random_range(0..self.area.height) as f32;
        let rotation = self.rng.random_range(0.0..TAU);

        SpriteInstance::new(
            [x, y, 0.0],
            rotation,
            [self.sprite_size, self.sprite_size],
            self.grid.cell(cell),
            self.tint,
        )
    }
}
