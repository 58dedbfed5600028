/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// No frame target this time around; submit nothing and try again.
    SkipFrame,
    /// The frame target cannot be acquired; the process must stop.
    Fatal,
}
