//! # Today View Module
//!
//! Today's classes (skipped on Sunday) followed by tomorrow's.

use eframe::egui;
use shared::DayAgenda;

use crate::ui::app_state::ClassScheduleApp;
use crate::ui::components::class_card::{draw_class_card, draw_empty_day};
use crate::ui::components::styling::section_heading;

impl ClassScheduleApp {
    pub fn render_today_view(&mut self, ui: &mut egui::Ui) {
        let view = self.backend.view_service.today_tomorrow(&self.schedule);

        if let Some(today) = &view.today {
            draw_agenda(ui, "Today's Classes", today, "No classes today!");
            ui.add_space(16.0);
        }
        draw_agenda(ui, "Tomorrow's Classes", &view.tomorrow, "No classes tomorrow!");
    }
}

fn draw_agenda(ui: &mut egui::Ui, title: &str, agenda: &DayAgenda, empty_message: &str) {
    section_heading(ui, title, Some(agenda.day.name()));
    ui.add_space(6.0);

    if agenda.is_empty() {
        draw_empty_day(ui, empty_message, Some("Enjoy your free day 🎉"));
        return;
    }

    for card in &agenda.classes {
        draw_class_card(ui, card);
    }
}
