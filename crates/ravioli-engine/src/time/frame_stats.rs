use std::time::{Duration, Instant};

use super::FrameTime;

/// Frame rate over one reporting interval.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameReport {
    pub frames: u32,
    pub fps: f32,
    pub mean_frame_ms: f32,
}

/// Accumulates frame ticks and yields a `FrameReport` once per interval.
#[derive(Debug, Clone)]
pub struct FrameStats {
    interval: Duration,
    window_start: Option<Instant>,
    frames: u32,
}

impl FrameStats {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            window_start: None,
            frames: 0,
        }
    }

    /// Records one frame. Returns a report when the interval has elapsed.
    pub fn record(&mut self, time: &FrameTime) -> Option<FrameReport> {
        let start = *self.window_start.get_or_insert(time.now);
        self.frames += 1;

        let elapsed = time.now.saturating_duration_since(start);
        if elapsed < self.interval || elapsed.is_zero() {
            return None;
        }

        let secs = elapsed.as_secs_f32();
        let report = FrameReport {
            frames: self.frames,
            fps: self.frames as f32 / secs,
            mean_frame_ms: secs * 1000.0 / self.frames as f32,
        };

        self.window_start = Some(time.now);
        self.frames = 0;

        Some(report)
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(now: Instant, frame_index: u64) -> FrameTime {
        FrameTime { dt: 0.0, now, frame_index }
    }

    #[test]
    fn no_report_before_interval() {
        let mut stats = FrameStats::new(Duration::from_secs(1));
        let base = Instant::now();
        for i in 0..10 {
            assert!(stats.record(&at(base + Duration::from_millis(i * 50), i)).is_none());
        }
    }

    #[test]
    fn report_after_interval_then_restart() {
        let mut stats = FrameStats::new(Duration::from_secs(1));
        let base = Instant::now();
        for i in 0..10 {
            let _ = stats.record(&at(base + Duration::from_millis(i * 100), i));
        }
        let report = stats
            .record(&at(base + Duration::from_millis(1000), 10))
            .unwrap();
        assert_eq!(report.frames, 11);
        assert!((report.fps - 11.0).abs() < 1e-3);

        // The window restarts at the reporting frame.
        assert!(stats.record(&at(base + Duration::from_millis(1100), 11)).is_none());
    }
}
