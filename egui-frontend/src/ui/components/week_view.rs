//! # Week View Module
//!
//! All six schedule days in order, today's section highlighted.

use eframe::egui;

use crate::ui::app_state::ClassScheduleApp;
use crate::ui::components::class_card::draw_class_card;
use crate::ui::components::styling::{card_frame, colors, section_heading};

impl ClassScheduleApp {
    pub fn render_week_view(&mut self, ui: &mut egui::Ui) {
        let overview = self.backend.view_service.week_overview(&self.schedule);

        section_heading(ui, "Week Overview", None);
        ui.add_space(6.0);

        for agenda in &overview.days {
            let frame = if agenda.is_today {
                card_frame()
                    .fill(colors::PRIMARY_SOFT)
                    .stroke(egui::Stroke::new(2.0, colors::PRIMARY))
            } else {
                card_frame()
            };

            frame.show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    let title_color = if agenda.is_today { colors::PRIMARY } else { colors::TEXT };
                    ui.label(egui::RichText::new(agenda.day.name()).size(17.0).strong().color(title_color));
                    if agenda.is_today {
                        ui.label(egui::RichText::new("Today").size(12.0).color(colors::PRIMARY));
                    }
                });

                if agenda.is_empty() {
                    ui.label(egui::RichText::new("No classes").italics().color(colors::MUTED_TEXT));
                }
                for card in &agenda.classes {
                    draw_class_card(ui, card);
                }
            });
            ui.add_space(4.0);
        }
    }
}
