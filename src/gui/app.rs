//! Threatboard Main Application
//! Main window with control panel and dashboard board.

use crate::charts::{ImageSurface, Rgb, TrendChart, CAMPAIGN_TRENDS, CHART_HEIGHT, CHART_WIDTH};
use crate::config::DashboardConfig;
use crate::dashboard::{RefreshLoop, SlotRegistry};
use crate::gui::{BoardView, ControlPanel, ControlPanelAction};
use crate::metrics::RandomMetrics;
use egui::SidePanel;
use std::path::Path;
use std::time::Instant;

/// Main application window.
pub struct ThreatboardApp {
    config: DashboardConfig,
    refresh: RefreshLoop,
    control_panel: ControlPanel,
    board: BoardView,
    started: bool,
}

impl ThreatboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: DashboardConfig) -> Self {
        let refresh = RefreshLoop::new(
            &config,
            SlotRegistry::new(),
            Box::new(RandomMetrics::new()),
        );
        Self {
            config,
            refresh,
            control_panel: ControlPanel::new(),
            board: BoardView::new(),
            started: false,
        }
    }

    /// Handle PNG export - render the trend chart offscreen and save it
    fn handle_export_chart(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name("campaign_trends.png")
            .save_file()
        else {
            return; // User cancelled
        };

        match Self::export_chart(&self.config, &path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "chart exported");
                self.control_panel
                    .set_status(&format!("Chart exported: {}", path.display()));
            }
            Err(err) => {
                tracing::warn!(%err, "chart export failed");
                self.control_panel.set_status(&format!("Error: {err}"));
            }
        }
    }

    fn export_chart(config: &DashboardConfig, path: &Path) -> anyhow::Result<()> {
        let mut surface = ImageSurface::new(CHART_WIDTH as u32, CHART_HEIGHT as u32);
        TrendChart::render(
            &mut surface,
            &CAMPAIGN_TRENDS,
            Rgb::new(255, 255, 255),
            config.chart_colors.primary(),
        );
        surface.save_png(path)
    }
}

impl eframe::App for ThreatboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        if !self.started {
            self.refresh.start(now);
            self.started = true;
        }

        // Fire a tick when due and wake up for the next one
        let remaining = self.refresh.poll(now);
        ctx.request_repaint_after(remaining);

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self
                        .control_panel
                        .show(ui, &self.config, self.refresh.ticks());

                    match action {
                        ControlPanelAction::RefreshNow => {
                            self.refresh.refresh_on_demand();
                            self.control_panel.set_status("Manual refresh complete");
                        }
                        ControlPanelAction::ExportChart => {
                            self.handle_export_chart();
                        }
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Dashboard Board
        egui::CentralPanel::default().show(ctx, |ui| {
            self.board
                .show(ui, self.refresh.registry(), &self.config.chart_colors);
        });
    }
}
