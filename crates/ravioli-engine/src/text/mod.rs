//! Font loading and single-line text rasterization (fontdue).

mod font_system;
mod raster;

pub use font_system::{FontId, FontLoadError, FontSystem};
pub use raster::TextBitmap;
