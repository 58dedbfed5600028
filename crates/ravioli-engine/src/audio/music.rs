use std::path::Path;
use std::time::Duration;

use anyhow::{anyhow, Result};
use fyrox_resource::io::FsResourceIo;
use fyrox_sound::buffer::{DataSource, SoundBufferResource, SoundBufferResourceExtension};
use fyrox_sound::context::SoundContext;
use fyrox_sound::engine::SoundEngine;
use fyrox_sound::futures::executor::block_on;
use fyrox_sound::pool::Handle;
use fyrox_sound::source::{SoundSource, SoundSourceBuilder, Status};

/// Interval between gain updates while fading out.
const FADE_STEP: Duration = Duration::from_millis(20);

/// Plays a single music track on the default output device.
///
/// The mixer runs on fyrox-sound's own thread; dropping the player closes
/// the device.
pub struct MusicPlayer {
    // Kept alive for the device; sources are driven through `context`.
    _engine: SoundEngine,
    context: SoundContext,
    track: Option<Handle<SoundSource>>,
}

impl MusicPlayer {
    /// Opens the default playback device.
    pub fn open() -> Result<Self> {
        let engine =
            SoundEngine::new().map_err(|e| anyhow!("failed to open audio device: {e}"))?;
        let context = SoundContext::new();
        engine.state().add_context(context.clone());

        log::debug!("audio device opened");

        Ok(Self {
            _engine: engine,
            context,
            track: None,
        })
    }

    /// Decodes `path` and starts playing it once, from the beginning.
    ///
    /// Replaces whatever track was playing.
    pub fn play_once(&mut self, path: &Path) -> Result<()> {
        self.stop();

        let source = block_on(DataSource::from_file(path, &FsResourceIo))
            .map_err(|e| anyhow!("failed to read music {}: {e:?}", path.display()))?;
        let buffer = SoundBufferResource::new_generic(source)
            .map_err(|_| anyhow!("unsupported or corrupt music file {}", path.display()))?;

        let source = SoundSourceBuilder::new()
            .with_buffer(buffer)
            .with_looping(false)
            .with_status(Status::Playing)
            .with_spatial_blend_factor(0.0)
            .build()
            .map_err(|e| anyhow!("failed to create music source: {e}"))?;

        self.track = Some(self.context.state().add_source(source));
        log::info!("playing {}", path.display());
        Ok(())
    }

    pub fn is_playing(&self) -> bool {
        let Some(handle) = self.track else { return false };
        let state = self.context.state();
        state.is_valid_handle(handle) && state.source(handle).status() == Status::Playing
    }

    /// Ramps the track's gain to zero over `duration`, then removes it.
    ///
    /// Blocks the calling thread for the length of the fade.
    pub fn fade_out(&mut self, duration: Duration) {
        let Some(handle) = self.track else { return };

        if self.is_playing() {
            let start_gain = self.context.state().source(handle).gain();
            for gain in fade_steps(start_gain, duration, FADE_STEP) {
                let _ = self.context.state().source_mut(handle).set_gain(gain);
                std::thread::sleep(FADE_STEP);
            }
        }

        self.stop();
    }

    /// Stops and removes the current track, if any.
    pub fn stop(&mut self) {
        if let Some(handle) = self.track.take() {
            let mut state = self.context.state();
            if state.is_valid_handle(handle) {
                state.remove_source(handle);
            }
        }
    }
}

/// Gains applied on each step of a linear fade from `start` to silence.
///
/// The last step is always `0.0`; a zero duration fades in one step.
pub fn fade_steps(start: f32, duration: Duration, step: Duration) -> Vec<f32> {
    let steps = if step.is_zero() {
        1
    } else {
        (duration.as_millis() / step.as_millis().max(1)).max(1) as usize
    };
    (1..=steps)
        .map(|i| start * (1.0 - i as f32 / steps as f32))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_second_fade_in_twenty_ms_steps() {
        let steps = fade_steps(1.0, Duration::from_millis(1000), Duration::from_millis(20));
        assert_eq!(steps.len(), 50);
        assert!((steps[0] - 0.98).abs() < 1e-6);
        assert_eq!(*steps.last().unwrap(), 0.0);
    }

    #[test]
    fn fade_is_monotonic_from_start_gain() {
        let steps = fade_steps(0.5, Duration::from_millis(100), Duration::from_millis(10));
        assert!(steps[0] < 0.5);
        assert!(steps.windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn zero_duration_is_immediate_silence() {
        assert_eq!(fade_steps(1.0, Duration::ZERO, Duration::from_millis(20)), vec![0.0]);
        assert_eq!(fade_steps(1.0, Duration::from_secs(1), Duration::ZERO), vec![0.0]);
    }
}
