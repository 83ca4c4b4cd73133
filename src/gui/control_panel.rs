//! Control Panel Widget
//! Left side panel with the manual refresh and export controls plus
//! the dashboard settings readout.

use crate::config::DashboardConfig;
use egui::{Color32, RichText};

/// Left side control panel.
pub struct ControlPanel {
    pub status: String,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            status: "Ready".to_string(),
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the control panel
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        config: &DashboardConfig,
        ticks: u64,
    ) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🛡 Threatboard")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Rust Edition")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Action Buttons =====
        ui.vertical_centered(|ui| {
            let refresh_button = egui::Button::new(RichText::new("🔄 Refresh Now").size(16.0))
                .min_size(egui::vec2(200.0, 35.0));
            if ui.add(refresh_button).clicked() {
                action = ControlPanelAction::RefreshNow;
            }

            ui.add_space(8.0);

            let export_button = egui::Button::new(RichText::new("🖼 Export Chart PNG").size(14.0))
                .min_size(egui::vec2(180.0, 30.0));
            if ui.add(export_button).clicked() {
                action = ControlPanelAction::ExportChart;
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Settings Section =====
        ui.label(RichText::new("⚙️ Settings").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.label(
                    RichText::new(format!(
                        "Auto refresh: every {} s",
                        config.update_interval_ms / 1000
                    ))
                    .size(12.0),
                );
                ui.label(
                    RichText::new(format!("API endpoint: {}", config.api_endpoint))
                        .size(11.0)
                        .color(Color32::GRAY),
                );
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status Section =====
        ui.label(RichText::new("📊 Status").size(14.0).strong());
        ui.add_space(5.0);

        ui.label(RichText::new(format!("Refresh cycles: {ticks}")).size(12.0));

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("exported") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    /// Set the status line
    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    RefreshNow,
    ExportChart,
}
