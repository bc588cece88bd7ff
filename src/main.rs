mod config;
mod core;
mod defaults;
mod osx;
mod permissions;
mod provider;
mod style;
mod toast;
mod types;
mod ui;

use eframe::egui;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = config::AppConfig::from_env();
    tracing::info!("Using reset tool {:?}", config.tccutil);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Privacy Reset")
            .with_inner_size([512.0, 600.0])
            .with_min_inner_size([420.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Privacy Reset",
        native_options,
        Box::new(move |cc| Ok(Box::new(ui::PrivacyResetApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to start UI: {e}"))
}
