//! Threatboard - Threat-Monitoring Dashboard & Trend Chart Viewer
//!
//! A native dashboard that displays fabricated threat-monitoring
//! statistics and refreshes them on a fixed cadence.

mod charts;
mod config;
mod dashboard;
mod gui;
mod metrics;

use config::DashboardConfig;
use eframe::egui;
use gui::ThreatboardApp;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = DashboardConfig::load_or_default();
    tracing::info!(
        interval_ms = config.update_interval_ms,
        endpoint = %config.api_endpoint,
        "dashboard initializing"
    );

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([860.0, 640.0])
            .with_title("Threatboard"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Threatboard",
        options,
        Box::new(move |cc| Ok(Box::new(ThreatboardApp::new(cc, config)))),
    )
}
