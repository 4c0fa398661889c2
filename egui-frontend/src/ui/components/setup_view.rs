//! # Setup View Module
//!
//! Editor for the weekly schedule. Every day is a collapsible section with
//! one row of inputs per class. Widgets never touch the draft directly:
//! they emit [`SetupAction`]s which are applied after the frame is drawn.

use eframe::egui;
use shared::{ClassEntry, ClassField, Weekday};

use crate::backend::domain::class_count_label;
use crate::ui::app_state::ClassScheduleApp;
use crate::ui::components::styling::{card_frame, colors, section_heading};
use crate::ui::state::{SetupAction, SetupState};

impl ClassScheduleApp {
    pub fn render_setup_view(&mut self, ui: &mut egui::Ui) {
        let Some(setup) = self.setup.as_ref() else {
            return;
        };

        let mut actions = Vec::new();
        let mut save_clicked = false;

        ui.horizontal(|ui| {
            section_heading(ui, "Setup Schedule", None);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let save = egui::Button::new(egui::RichText::new("💾 Save").color(egui::Color32::WHITE).strong())
                    .fill(colors::PRIMARY);
                save_clicked = ui.add(save).clicked();
            });
        });
        ui.add_space(6.0);

        for day in Weekday::SCHEDULE_DAYS {
            draw_day_section(ui, setup, day, &mut actions);
            ui.add_space(4.0);
        }

        self.apply_setup_actions(actions);
        if save_clicked {
            self.save_setup();
        }
    }
}

fn draw_day_section(ui: &mut egui::Ui, setup: &SetupState, day: Weekday, actions: &mut Vec<SetupAction>) {
    let classes: &[ClassEntry] = setup
        .draft
        .week()
        .day(day)
        .map(|schedule| schedule.classes.as_slice())
        .unwrap_or(&[]);
    let expanded = setup.is_expanded(day);

    card_frame().inner_margin(egui::Margin::same(0.0)).show(ui, |ui| {
        ui.set_width(ui.available_width());

        let header = egui::Frame::none()
            .inner_margin(egui::Margin::symmetric(12.0, 10.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.add(egui::Label::new(egui::RichText::new(day.name()).strong()).selectable(false));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let chevron = if expanded { "▲" } else { "▼" };
                        ui.add(egui::Label::new(egui::RichText::new(chevron).color(colors::MUTED_TEXT)).selectable(false));
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(class_count_label(classes.len()))
                                    .size(12.0)
                                    .color(colors::MUTED_TEXT),
                            )
                            .selectable(false),
                        );
                    });
                });
            })
            .response
            .interact(egui::Sense::click());

        if header.clicked() {
            actions.push(SetupAction::ToggleDay(day));
        }

        if !expanded {
            return;
        }

        ui.separator();
        egui::Frame::none()
            .inner_margin(egui::Margin::symmetric(12.0, 8.0))
            .show(ui, |ui| {
                for (index, class) in classes.iter().enumerate() {
                    ui.push_id(&class.id, |ui| {
                        draw_class_editor(ui, day, index, class, actions);
                    });
                }

                let add = egui::Button::new("➕ Add Class").min_size(egui::vec2(ui.available_width(), 32.0));
                if ui.add(add).clicked() {
                    actions.push(SetupAction::AddClass(day));
                }
            });
    });
}

fn draw_class_editor(
    ui: &mut egui::Ui,
    day: Weekday,
    index: usize,
    class: &ClassEntry,
    actions: &mut Vec<SetupAction>,
) {
    egui::Frame::none()
        .fill(colors::BACKGROUND)
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::same(8.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let remove_width = 32.0;
                ui.vertical(|ui| {
                    ui.set_width(ui.available_width() - remove_width - 8.0);
                    field_input(ui, "Subject", &class.subject, "e.g. Math 101", |value| {
                        actions.push(SetupAction::UpdateClass {
                            day,
                            index,
                            field: ClassField::Subject,
                            value,
                        })
                    });
                });
                let remove = egui::Button::new(egui::RichText::new("🗑").color(colors::DESTRUCTIVE))
                    .min_size(egui::vec2(remove_width, 32.0));
                if ui.add(remove).on_hover_text("Remove class").clicked() {
                    actions.push(SetupAction::RemoveClass { day, index });
                }
            });

            ui.columns(3, |columns| {
                let fields = [
                    (ClassField::StartTime, "Start", class.start_time.as_str(), "HH:MM"),
                    (ClassField::EndTime, "End", class.end_time.as_str(), "HH:MM"),
                    (ClassField::Location, "Location", class.location.as_deref().unwrap_or(""), "Room"),
                ];
                for (column, (field, label, value, hint)) in columns.iter_mut().zip(fields) {
                    field_input(column, label, value, hint, |value| {
                        actions.push(SetupAction::UpdateClass { day, index, field, value })
                    });
                }
            });
        });
    ui.add_space(4.0);
}

/// Labelled single-line input; `on_change` gets the edited text
fn field_input(ui: &mut egui::Ui, label: &str, current: &str, hint: &str, mut on_change: impl FnMut(String)) {
    ui.label(egui::RichText::new(label).size(12.0).color(colors::MUTED_TEXT));
    let mut value = current.to_string();
    let response = ui.add(
        egui::TextEdit::singleline(&mut value)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        on_change(value);
    }
}
