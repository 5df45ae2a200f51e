#![forbid(unsafe_code)]
#![cfg_attr(not(debug_assertions), deny(warnings))] // Forbid warnings in release builds
#![warn(clippy::all, rust_2018_idioms)]

use clap::{CommandFactory, Parser};
use log::info;

use play_hours_timer::{Args, TimerApp, APP_TITLE};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = match Args::parse().into_settings() {
        Ok(settings) => settings,
        Err(e) => Args::command()
            .error(clap::error::ErrorKind::ValueValidation, e)
            .exit(),
    };
    info!("offset {:?}", settings.offset);

    let native_options = eframe::NativeOptions {
        viewport: settings.viewport(),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(move |cc| Box::new(TimerApp::new(cc, settings))),
    )
    .map_err(|e| anyhow::anyhow!("failed to open the window: {e}"))
}
