use eframe::egui::Color32;
use shared::{Rgb, SubjectColor};

/// Convert a shared color into an egui color
pub fn to_color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// egui colors for a subject card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardColors {
    pub background: Color32,
    pub text: Color32,
    pub border: Color32,
}

impl CardColors {
    /// Map a subject color, faded when the class is already over
    pub fn from_subject(color: &SubjectColor, faded: bool) -> Self {
        let fade = if faded { 0.45 } else { 1.0 };
        Self {
            background: to_color32(color.background).gamma_multiply(fade),
            text: to_color32(color.text).gamma_multiply(fade),
            border: to_color32(color.border).gamma_multiply(fade),
        }
    }
}
