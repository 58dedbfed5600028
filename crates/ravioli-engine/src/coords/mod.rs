//! Coordinate types shared by the runtime and the renderers.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down

mod rect;
mod viewport;

pub use rect::UvRect;
pub use viewport::Viewport;
