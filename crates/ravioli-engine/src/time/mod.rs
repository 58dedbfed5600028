//! Frame timing.
//!
//! - one `FrameClock` per window, ticked once per redraw
//! - `FrameStats` folds ticks into a once-per-interval frame rate report

mod frame_clock;
mod frame_stats;

pub use frame_clock::{FrameClock, FrameTime};
pub use frame_stats::{FrameReport, FrameStats};
