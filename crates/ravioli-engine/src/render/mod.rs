//! GPU rendering subsystem.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - The vertex stage converts to clip space with a camera uniform.

mod camera;
mod ctx;
mod sprite_batch;
mod texture;

pub use camera::{Camera2d, CameraUniform};
pub use ctx::{RenderCtx, RenderTarget};
pub use sprite_batch::SpriteBatch;
pub use texture::AtlasTexture;
