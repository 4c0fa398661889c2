//! # Class Card Module
//!
//! Draws a single [`ClassCard`]: a colored time pill, the subject, and the
//! time range and location underneath. Past classes are drawn faded.

use eframe::egui;
use shared::ClassCard;

use crate::ui::components::styling::{card_frame, colors};
use crate::ui::mappers::CardColors;

/// Draw one class card across the available width
pub fn draw_class_card(ui: &mut egui::Ui, card: &ClassCard) {
    let palette = CardColors::from_subject(&card.color, card.is_past);
    let muted = if card.is_past {
        colors::MUTED_TEXT.gamma_multiply(0.6)
    } else {
        colors::MUTED_TEXT
    };

    card_frame()
        .stroke(egui::Stroke::new(1.0, palette.border))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                egui::Frame::none()
                    .fill(palette.background)
                    .rounding(egui::Rounding::same(8.0))
                    .inner_margin(egui::Margin::symmetric(10.0, 6.0))
                    .show(ui, |ui| {
                        ui.set_min_width(72.0);
                        ui.vertical_centered(|ui| {
                            ui.label(egui::RichText::new(&card.formatted_start).size(12.0).color(palette.text).strong());
                            ui.label(egui::RichText::new("to").size(10.0).color(muted));
                            ui.label(egui::RichText::new(&card.formatted_end).size(12.0).color(palette.text).strong());
                        });
                    });

                ui.add_space(8.0);
                ui.vertical(|ui| {
                    let subject_color = if card.is_past { muted } else { colors::TEXT };
                    ui.label(egui::RichText::new(&card.subject).size(17.0).strong().color(subject_color));
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(format!("🕑 {} – {}", card.formatted_start, card.formatted_end))
                                .color(muted),
                        );
                        if let Some(location) = &card.location {
                            ui.label(egui::RichText::new(format!("📍 {}", location)).color(muted));
                        }
                    });
                });
            });
        });
}

/// Dashed-style placeholder shown when a day has no classes
pub fn draw_empty_day(ui: &mut egui::Ui, title: &str, subtitle: Option<&str>) {
    egui::Frame::none()
        .stroke(egui::Stroke::new(1.0, colors::BORDER))
        .rounding(egui::Rounding::same(12.0))
        .inner_margin(egui::Margin::symmetric(12.0, 24.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(title).size(16.0).strong().color(colors::MUTED_TEXT));
                if let Some(subtitle) = subtitle {
                    ui.label(egui::RichText::new(subtitle).color(colors::MUTED_TEXT));
                }
            });
        });
}
