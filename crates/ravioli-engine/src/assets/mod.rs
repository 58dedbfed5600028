//! Startup asset loading.
//!
//! Everything here runs once, before the first frame. Decoding is delegated
//! to `image` (atlas) and `resvg` (SVG); fonts live in [`crate::text`] and
//! music in [`crate::audio`].

mod atlas;
mod paths;
mod svg;

pub use atlas::AtlasImage;
pub use paths::{AssetPaths, ASSET_DIR_ENV};
pub use svg::{rasterize_svg, SvgImage};
