mod app;

use std::process::ExitCode;

use anyhow::Result;
use ravioli_engine::assets::AssetPaths;
use ravioli_engine::device::GpuInit;
use ravioli_engine::logging::{init_logging, LoggingConfig};
use ravioli_engine::sprite::SpriteBatchConfig;
use ravioli_engine::window::{Runtime, RuntimeConfig};

use app::SpriteDemo;

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    match run() {
        Ok(()) => {
            log::info!("application quit successfully");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let assets = AssetPaths::locate()?;
    log::info!("loading assets from {}", assets.root.display());

    let runtime = RuntimeConfig {
        title: "Ravioli Sprite Batch".to_string(),
        ..RuntimeConfig::default()
    };

    Runtime::run(
        runtime,
        GpuInit::default(),
        SpriteDemo::new(assets, SpriteBatchConfig::default()),
    )
}
