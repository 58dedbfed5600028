//! CPU side of the sprite batch.
//!
//! `SpriteInstance` is the exact record the vertex stage reads from the
//! storage buffer. `SpriteGenerator` regenerates a whole batch of them every
//! frame from a seeded random source.

mod atlas;
mod config;
mod generator;
mod instance;

pub use atlas::AtlasGrid;
pub use config::{SpawnArea, SpriteBatchConfig};
pub use generator::SpriteGenerator;
pub use instance::{draw_vertex_count, SpriteInstance, VERTICES_PER_SPRITE};
