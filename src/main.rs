//! Line Code Visualizer - Main Entry Point
//!
//! Opens a window where a bit sequence can be typed and viewed as the
//! waveform of any of the supported line codes.

use linecode_vis::{
    config::{AppConfig, APP_TITLE},
    frontend::LineCodeApp,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,linecode_vis=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting {}", APP_TITLE);

    let config = AppConfig::load_or_default();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_resizable(true)
            .with_title(APP_TITLE),
        ..Default::default()
    };

    let result = eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(|cc| Ok(Box::new(LineCodeApp::new(cc, config)))),
    );

    tracing::info!("Shutting down...");

    result
}
