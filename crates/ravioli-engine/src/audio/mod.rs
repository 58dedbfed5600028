//! Music playback on top of `fyrox-sound`.

mod music;

pub use music::{fade_steps, MusicPlayer};
