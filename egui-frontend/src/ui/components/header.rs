//! # Header Module
//!
//! App title bar and the feedback message line under it.

use eframe::egui;

use crate::ui::app_state::ClassScheduleApp;
use crate::ui::components::styling::colors;

impl ClassScheduleApp {
    /// Render the header
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            egui::Frame::none()
                .fill(colors::PRIMARY)
                .rounding(egui::Rounding::same(8.0))
                .inner_margin(egui::Margin::symmetric(8.0, 4.0))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new("📖").size(18.0).color(egui::Color32::WHITE));
                });
            ui.add(
                egui::Label::new(egui::RichText::new("MyClassSchedule").size(20.0).strong())
                    .selectable(false),
            );
        });
    }

    /// Render error/success messages with a close button
    pub fn render_messages(&mut self, ui: &mut egui::Ui) {
        if !self.ui_state.has_message() {
            return;
        }

        let (text, color) = match (&self.ui_state.error_message, &self.ui_state.success_message) {
            (Some(error), _) => (error.clone(), colors::DESTRUCTIVE),
            (None, Some(success)) => (success.clone(), colors::SUCCESS),
            (None, None) => return,
        };

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(text).color(color).strong());
            if ui.small_button("✖").clicked() {
                self.ui_state.clear_messages();
            }
        });
        ui.add_space(4.0);
    }
}
