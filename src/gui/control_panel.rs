//! Control Panel Widget
//! Left side panel with the data source, actions and load status.

use egui::{Color32, RichText};

/// Left side control panel with reload, chart and export controls.
pub struct ControlPanel {
    pub source_url: String,
    pub chart_visible: bool,
    pub has_data: bool,
    pub progress: f32,
    pub status: String,
}

impl ControlPanel {
    pub fn new(source_url: &str) -> Self {
        Self {
            source_url: source_url.to_string(),
            chart_visible: false,
            has_data: false,
            progress: 0.0,
            status: "Ready".to_string(),
        }
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui, is_loading: bool) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📊 Bet Data Analysis")
                    .size(20.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Data Source Section =====
        ui.label(RichText::new("🌐 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                let source = RichText::new(&self.source_url)
                    .size(11.0)
                    .color(Color32::GRAY);
                ui.add(egui::Label::new(source).truncate())
                    .on_hover_text(self.source_url.as_str());
            });

        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(!is_loading, |ui| {
                let button = egui::Button::new(RichText::new("🔄 Reload").size(14.0))
                    .min_size(egui::vec2(150.0, 30.0));
                if ui.add(button).clicked() {
                    action = ControlPanelAction::Reload;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Action Buttons =====
        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(self.has_data, |ui| {
                let text = if self.chart_visible {
                    "Hide Chart"
                } else {
                    "▶ Show Chart"
                };
                let button = egui::Button::new(RichText::new(text).size(16.0))
                    .min_size(egui::vec2(200.0, 35.0));
                if ui.add(button).clicked() {
                    action = ControlPanelAction::ToggleChart;
                }

                ui.add_space(8.0);

                let png_button = egui::Button::new(RichText::new("🖼 Export PNG").size(14.0))
                    .min_size(egui::vec2(150.0, 30.0));
                if ui.add(png_button).clicked() {
                    action = ControlPanelAction::ExportPng;
                }

                ui.add_space(4.0);

                let csv_button = egui::Button::new(RichText::new("📄 Export CSV").size(14.0))
                    .min_size(egui::vec2(150.0, 30.0));
                if ui.add(csv_button).clicked() {
                    action = ControlPanelAction::ExportCsv;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Progress Section =====
        ui.label(RichText::new("📊 Status").size(14.0).strong());
        ui.add_space(5.0);

        ui.add(
            egui::ProgressBar::new(self.progress / 100.0)
                .show_percentage()
                .animate(is_loading),
        );

        ui.add_space(5.0);

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Loaded") || self.status.contains("Exported") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    /// Set progress and status
    pub fn set_progress(&mut self, progress: f32, status: &str) {
        self.progress = progress;
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    Reload,
    ToggleChart,
    ExportPng,
    ExportCsv,
}
