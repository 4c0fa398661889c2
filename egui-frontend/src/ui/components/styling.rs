//! # Styling Module
//!
//! Global egui style and the few color constants shared by the views.

use eframe::egui;
use egui::Color32;

/// Color constants used across the views
pub mod colors {
    use eframe::egui::Color32;

    pub const BACKGROUND: Color32 = Color32::from_rgb(248, 250, 252);
    pub const CARD: Color32 = Color32::WHITE;
    pub const BORDER: Color32 = Color32::from_rgb(226, 232, 240);
    pub const PRIMARY: Color32 = Color32::from_rgb(79, 70, 229);
    pub const PRIMARY_SOFT: Color32 = Color32::from_rgb(238, 242, 255);
    pub const TEXT: Color32 = Color32::from_rgb(15, 23, 42);
    pub const MUTED_TEXT: Color32 = Color32::from_rgb(100, 116, 139);
    pub const DESTRUCTIVE: Color32 = Color32::from_rgb(220, 38, 38);
    pub const SUCCESS: Color32 = Color32::from_rgb(22, 163, 74);
}

/// Setup the app-wide egui style
pub fn setup_schedule_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals = egui::Visuals::light();
        style.visuals.panel_fill = colors::BACKGROUND;
        style.visuals.window_fill = colors::CARD;
        // Text edits draw on extreme_bg_color in egui 0.28
        style.visuals.extreme_bg_color = Color32::WHITE;
        style.visuals.override_text_color = Some(colors::TEXT);

        style.text_styles.insert(
            egui::TextStyle::Heading,
            egui::FontId::new(24.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(15.0, egui::FontFamily::Proportional),
        );

        style.spacing.button_padding = egui::vec2(10.0, 6.0);
        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.active.rounding = egui::Rounding::same(8.0);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(8.0);

        style
    });
}

/// White rounded container with a thin border
pub fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(colors::CARD)
        .stroke(egui::Stroke::new(1.0, colors::BORDER))
        .rounding(egui::Rounding::same(12.0))
        .inner_margin(egui::Margin::same(12.0))
}

/// Section title with an optional muted subtitle underneath
pub fn section_heading(ui: &mut egui::Ui, title: &str, subtitle: Option<&str>) {
    ui.add(egui::Label::new(egui::RichText::new(title).size(22.0).strong()).selectable(false));
    if let Some(subtitle) = subtitle {
        ui.label(egui::RichText::new(subtitle).color(colors::MUTED_TEXT));
    }
}
