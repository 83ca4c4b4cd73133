//! Board View Widget
//! Central panel that lays out the stat cards, activity feeds, report
//! fragments, job badges and the trend chart. Every piece is looked up
//! in the slot registry and skipped when the slot holds nothing.

use crate::charts::{PainterSurface, Rgb, TrendChart, CAMPAIGN_TRENDS, CHART_HEIGHT, CHART_WIDTH};
use crate::config::ChartPalette;
use crate::dashboard::{slots, RenderValue, ReportEntry, SlotRegistry, Tone};
use crate::metrics::JobState;
use egui::{Color32, RichText, ScrollArea};

const CARD_SPACING: f32 = 12.0;
const STAT_CARD_WIDTH: f32 = 180.0;

/// Scrollable dashboard board.
pub struct BoardView;

impl BoardView {
    pub fn new() -> Self {
        Self
    }

    /// Draw the whole board from the registry contents.
    pub fn show(&self, ui: &mut egui::Ui, registry: &SlotRegistry, palette: &ChartPalette) {
        ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🛡 Threat Monitoring Dashboard")
                    .size(20.0)
                    .strong(),
            );
            ui.add_space(10.0);

            // ===== Stat Counters =====
            ui.horizontal(|ui| {
                Self::stat_card(ui, registry, slots::ACTIVE_CAMPAIGNS, "Active Campaigns");
                ui.add_space(CARD_SPACING);
                Self::stat_card(ui, registry, slots::TOTAL_SOURCES, "Total Sources");
                ui.add_space(CARD_SPACING);
                Self::stat_card(ui, registry, slots::DAILY_FINDINGS, "Daily Findings");
            });

            ui.add_space(15.0);

            // ===== Real-Time Data =====
            ui.label(RichText::new("📡 Real-Time Data").size(15.0).strong());
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                Self::feed_card(
                    ui,
                    registry,
                    slots::DATA_COLLECTION_STATUS,
                    "Data Collection",
                );
                ui.add_space(CARD_SPACING);
                Self::feed_card(ui, registry, slots::AI_ANALYSIS_STATUS, "AI Analysis");
            });

            ui.add_space(15.0);

            // ===== Daily Reports =====
            ui.label(RichText::new("📋 Daily Reports").size(15.0).strong());
            ui.add_space(5.0);
            Self::report_card(ui, registry, slots::DAILY_SUMMARY, "Daily Summary");
            ui.add_space(8.0);
            Self::report_card(ui, registry, slots::CRITICAL_FINDINGS, "Critical Findings");
            ui.add_space(8.0);
            Self::report_card(ui, registry, slots::DATA_DISTRIBUTION, "Data Distribution");

            ui.add_space(15.0);

            // ===== Scheduled Jobs =====
            ui.label(RichText::new("⏰ Scheduled Jobs").size(15.0).strong());
            ui.add_space(5.0);
            Self::job_badge(ui, registry, slots::JOB_DATA_COLLECTION, "Data Collection", palette);
            Self::job_badge(ui, registry, slots::JOB_AI_ANALYSIS, "AI Analysis", palette);
            Self::job_badge(ui, registry, slots::JOB_REPORT_GEN, "Report Generation", palette);

            ui.add_space(15.0);

            // ===== Campaign Trends =====
            ui.label(RichText::new("📈 Campaign Trends").size(15.0).strong());
            ui.add_space(5.0);
            Self::trend_chart(ui, palette);

            ui.add_space(10.0);
            if let Some(time) = registry.text(slots::LAST_UPDATED) {
                ui.label(
                    RichText::new(format!("Last updated: {time}"))
                        .size(11.0)
                        .color(Color32::GRAY),
                );
            }
            ui.add_space(10.0);
        });
    }

    /// One counter card: caption above a large number.
    fn stat_card(ui: &mut egui::Ui, registry: &SlotRegistry, slot: &str, caption: &str) {
        let Some(value) = registry.text(slot) else {
            return;
        };
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(8.0)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(STAT_CARD_WIDTH);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(caption).size(12.0).color(Color32::GRAY));
                    ui.label(RichText::new(value).size(26.0).strong());
                });
            });
    }

    /// One activity feed: a titled bullet list.
    fn feed_card(ui: &mut egui::Ui, registry: &SlotRegistry, slot: &str, title: &str) {
        let Some(RenderValue::List(lines)) = registry.get(slot) else {
            return;
        };
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(8.0)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(280.0);
                ui.label(RichText::new(title).size(13.0).strong());
                ui.add_space(4.0);
                for line in lines {
                    ui.label(RichText::new(format!("• {line}")).size(12.0));
                }
            });
    }

    /// One report fragment: emphasised label + body per entry.
    fn report_card(ui: &mut egui::Ui, registry: &SlotRegistry, slot: &str, title: &str) {
        let Some(RenderValue::Entries(entries)) = registry.get(slot) else {
            return;
        };
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(8.0)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new(title).size(13.0).strong());
                ui.add_space(4.0);
                for entry in entries {
                    Self::report_entry(ui, entry);
                }
            });
    }

    fn report_entry(ui: &mut egui::Ui, entry: &ReportEntry) {
        let label_color = match entry.tone {
            Tone::Info => ui.visuals().strong_text_color(),
            Tone::Warning => Color32::from_rgb(230, 126, 34),
            Tone::Danger => Color32::from_rgb(231, 76, 60),
        };
        ui.horizontal_wrapped(|ui| {
            ui.label(
                RichText::new(format!("{}:", entry.label))
                    .size(12.0)
                    .strong()
                    .color(label_color),
            );
            ui.label(RichText::new(&entry.body).size(12.0));
        });
    }

    /// One job row: state dot, job name, current message.
    fn job_badge(
        ui: &mut egui::Ui,
        registry: &SlotRegistry,
        slot: &str,
        name: &str,
        palette: &ChartPalette,
    ) {
        let Some(RenderValue::Status(job)) = registry.get(slot) else {
            return;
        };
        let dot_color = match job.state {
            JobState::Active => palette.success(),
            JobState::Pending => palette.warning(),
            JobState::Error => palette.secondary(),
        };
        ui.horizontal(|ui| {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
            ui.painter()
                .circle_filled(rect.center(), 5.0, dot_color.to_color32());
            ui.label(RichText::new(name).size(12.0).strong());
            ui.label(RichText::new(&job.message).size(12.0).color(Color32::GRAY));
        });
    }

    /// Paint the trend chart into a fixed-size canvas.
    fn trend_chart(ui: &mut egui::Ui, palette: &ChartPalette) {
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(CHART_WIDTH, CHART_HEIGHT),
            egui::Sense::hover(),
        );
        let background = ui.visuals().extreme_bg_color;
        let mut surface = PainterSurface::new(ui.painter_at(rect), rect);
        TrendChart::render(
            &mut surface,
            &CAMPAIGN_TRENDS,
            Rgb::new(background.r(), background.g(), background.b()),
            palette.primary(),
        );
    }
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new()
    }
}
