//! Ravioli engine crate.
//!
//! Platform + GPU runtime for the sprite batch demo: a winit window with a
//! wgpu surface, a storage-buffer sprite renderer, and the startup asset
//! loaders (atlas image, font, SVG, music).

pub mod assets;
pub mod audio;
pub mod coords;
pub mod core;
pub mod device;
pub mod logging;
pub mod paint;
pub mod render;
pub mod sprite;
pub mod text;
pub mod time;
pub mod window;
