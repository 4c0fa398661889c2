//! # Tab Bar Module
//!
//! Bottom navigation between Today, Week and Setup, plus routing of the
//! central panel to the selected tab.

use eframe::egui;

use crate::ui::app_state::{ClassScheduleApp, MainTab};
use crate::ui::components::styling::colors;

impl ClassScheduleApp {
    /// Render the bottom tab buttons
    pub fn render_tab_bar(&mut self, ui: &mut egui::Ui) {
        let mut selected = None;
        let tab_width = ui.available_width() / MainTab::ALL.len() as f32;

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            for tab in MainTab::ALL {
                let active = self.current_tab == tab;
                let color = if active { colors::PRIMARY } else { colors::MUTED_TEXT };
                let button = egui::Button::new(egui::RichText::new(tab.label()).color(color).strong())
                    .fill(if active { colors::PRIMARY_SOFT } else { egui::Color32::TRANSPARENT })
                    .stroke(egui::Stroke::NONE)
                    .min_size(egui::vec2(tab_width, 40.0));

                if ui.add(button).clicked() && !active {
                    selected = Some(tab);
                }
            }
        });

        if let Some(tab) = selected {
            log::info!("Switching to {:?} tab", tab);
            self.ui_state.clear_messages();
            self.select_tab(tab);
        }
    }

    /// Render the content of the current tab
    pub fn render_main_content(&mut self, ui: &mut egui::Ui) {
        match self.current_tab {
            MainTab::Today => self.render_today_view(ui),
            MainTab::Week => self.render_week_view(ui),
            MainTab::Setup => self.render_setup_view(ui),
        }
    }
}
