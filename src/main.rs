mod actions;
mod api;
mod config;
mod engine;
mod error;
mod gui;
mod models;
mod router;
mod sequencer;
mod session;
mod view;

use anyhow::{anyhow, Context};
use config::Config;
use eframe::egui;
use gui::SocietyApp;
use log::info;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::load();
    info!("Using backend at {}", config.api_base_url);

    let runtime = tokio::runtime::Runtime::new().context("Failed to start the async runtime")?;
    let handle = runtime.handle().clone();

    let builder = egui::ViewportBuilder::default()
        .with_title(&config.window_title)
        .with_inner_size(egui::vec2(1024.0, 720.0))
        .with_min_inner_size(egui::vec2(640.0, 480.0));

    let options = eframe::NativeOptions {
        viewport: builder,
        ..Default::default()
    };

    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(SocietyApp::new(cc, &config, handle)))),
    )
    .map_err(|e| anyhow!("Window closed with an error: {e}"))?;

    drop(runtime);
    Ok(())
}
