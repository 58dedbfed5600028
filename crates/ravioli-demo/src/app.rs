use std::time::Duration;

use anyhow::{Context, Result};
use ravioli_engine::assets::{AssetPaths, AtlasImage, SvgImage};
use ravioli_engine::audio::MusicPlayer;
use ravioli_engine::core::{App, AppControl, FrameCtx, StartCtx};
use ravioli_engine::paint::Color;
use ravioli_engine::render::SpriteBatch;
use ravioli_engine::sprite::SpriteBatchConfig;
use ravioli_engine::text::FontSystem;
use ravioli_engine::time::FrameStats;

const GREETING: &str = "Hello SDL!";
const GREETING_PX: f32 = 36.0;
const MUSIC_FADE_OUT: Duration = Duration::from_millis(1000);

/// Loads the demo assets once, then redraws the sprite batch every frame.
pub struct SpriteDemo {
    assets: AssetPaths,
    config: SpriteBatchConfig,

    batch: Option<SpriteBatch>,
    music: Option<MusicPlayer>,
    stats: FrameStats,
}

impl SpriteDemo {
    pub fn new(assets: AssetPaths, config: SpriteBatchConfig) -> Self {
        Self {
            assets,
            config,
            batch: None,
            music: None,
            stats: FrameStats::default(),
        }
    }

    /// Rasterizes the greeting once to show the font path works; the bitmap
    /// is not drawn.
    fn render_greeting(&self) -> Result<()> {
        let path = self.assets.font_path();
        let mut fonts = FontSystem::new();
        let font = fonts
            .load_font_file(&path)
            .with_context(|| format!("failed to load font {}", path.display()))?;

        if let Some(bitmap) = fonts.render_solid(font, GREETING, GREETING_PX, Color::WHITE) {
            log::debug!(
                "rendered {GREETING:?}: {}x{}, {} px inked",
                bitmap.width,
                bitmap.height,
                bitmap.inked_pixels()
            );
        }
        Ok(())
    }

    /// The SVG is decorative; a broken or missing file only warns.
    fn load_svg(&self) {
        match SvgImage::load(&self.assets.svg_path()) {
            Ok(svg) => log::debug!("rasterized SVG: {}x{}", svg.width(), svg.height()),
            Err(e) => log::warn!("{e:#}"),
        }
    }
}

impl App for SpriteDemo {
    fn on_start(&mut self, ctx: &mut StartCtx<'_, '_>) -> Result<()> {
        let atlas = AtlasImage::load(&self.assets.atlas_path())?;
        let batch = SpriteBatch::new(ctx.gpu.device(), ctx.gpu.queue(), &atlas, self.config.clone())?;
        log::info!(
            "atlas {}x{}, {} sprites per frame, present mode {:?}",
            atlas.width,
            atlas.height,
            batch.capacity(),
            ctx.gpu.present_mode()
        );
        self.batch = Some(batch);

        self.render_greeting()?;
        self.load_svg();

        let mut music = MusicPlayer::open()?;
        music.play_once(&self.assets.music_path())?;
        self.music = Some(music);

        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl> {
        if let Some(report) = self.stats.record(&ctx.time) {
            log::debug!(
                "{:.1} fps ({:.2} ms/frame, {} frames)",
                report.fps,
                report.mean_frame_ms,
                report.frames
            );
        }

        let Some(batch) = self.batch.as_mut() else {
            return Ok(AppControl::Continue);
        };

        ctx.render(self.config.clear_color, |rctx, target| batch.render(rctx, target))
    }

    fn on_exit(&mut self) {
        self.batch = None;

        // Blocks until the fade has finished so the music does not cut off.
        if let Some(mut music) = self.music.take() {
            music.fade_out(MUSIC_FADE_OUT);
        }
    }
}
