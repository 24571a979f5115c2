mod api;
mod app;
mod config;
mod constants;
mod data;
mod models;
mod screens;
mod services;
mod state;
mod ui_components;
mod utils;

use app::LikesApp;
use config::AppConfig;
use constants::{APP_HEIGHT, APP_WIDTH};
use eframe::egui;

// App version and metadata
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_NAME: &str = "Reflections";
const APP_DESCRIPTION: &str = "Reading Room Likes";

fn main() -> Result<(), eframe::Error> {
    // Set RUST_LOG=debug for verbose output, RUST_LOG=info for normal logs
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("eframe", log::LevelFilter::Warn)
        .filter_module("egui_glow", log::LevelFilter::Warn)
        .filter_module("winit", log::LevelFilter::Warn)
        .filter_module("reqwest", log::LevelFilter::Warn)
        .init();

    log::info!("[Main] Starting {} v{}", APP_NAME, APP_VERSION);

    // .env is optional; real environment variables win
    match dotenvy::dotenv() {
        Ok(path) => log::info!("[Config] Loaded {}", path.display()),
        Err(e) if e.not_found() => log::debug!("[Config] No .env file, using environment only"),
        Err(e) => log::warn!("[Config] Failed to read .env file: {}", e),
    }

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("[Config] {}", e);
            std::process::exit(1);
        }
    };

    log::info!(
        "[Config] Server {} | page {} | timeout {}",
        config.base_url,
        config.page_path,
        config
            .request_timeout
            .map(|t| format!("{}s", t.as_secs()))
            .unwrap_or_else(|| "transport default".to_string())
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{} - {}",
                APP_NAME, APP_VERSION, APP_DESCRIPTION
            ))
            .with_inner_size([APP_WIDTH, APP_HEIGHT])
            .with_min_inner_size([APP_WIDTH / 2.0, APP_HEIGHT / 2.0])
            .with_resizable(true),
        persist_window: true,
        ..Default::default()
    };

    eframe::run_native(
        &format!("{} v{}", APP_NAME, APP_VERSION),
        options,
        Box::new(move |cc| Ok(Box::new(LikesApp::new(cc, config)))),
    )
}
