use anyhow::Result;
use winit::event::WindowEvent;
use winit::window::WindowId;

use super::ctx::{FrameCtx, StartCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract driven by [`crate::window::Runtime`].
///
/// Any `Err` returned from a callback stops the event loop and is handed back
/// to the caller of `Runtime::run`.
pub trait App {
    /// Called once, after the window and its GPU context exist.
    fn on_start(&mut self, ctx: &mut StartCtx<'_, '_>) -> Result<()>;

    /// Called for window events.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Called once per redraw.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl>;

    /// Called once when the event loop is shutting down, after the window and
    /// GPU context have been released.
    fn on_exit(&mut self) {}
}
