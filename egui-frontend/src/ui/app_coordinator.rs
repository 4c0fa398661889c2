//! # App Coordinator Module
//!
//! Main update loop: styling, the header and tab bar panels, and the
//! scrollable content of the selected tab.
//!
//! ## Application Flow:
//! 1. Apply the app style
//! 2. Render header and bottom tab bar panels
//! 3. Render messages, the current tab and the install banner
//! 4. Schedule a repaint so past classes fade without user input

use eframe::egui;
use std::time::Duration;

use crate::ui::app_state::ClassScheduleApp;
use crate::ui::components::setup_schedule_style;

/// How often the views refresh on their own
const REFRESH_INTERVAL: Duration = Duration::from_secs(60);

impl eframe::App for ClassScheduleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        setup_schedule_style(ctx);

        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::none().fill(egui::Color32::WHITE).inner_margin(egui::Margin::symmetric(16.0, 12.0)))
            .show(ctx, |ui| {
                self.render_header(ui);
            });

        egui::TopBottomPanel::bottom("tab_bar")
            .frame(egui::Frame::none().fill(egui::Color32::WHITE).inner_margin(egui::Margin::symmetric(16.0, 6.0)))
            .show(ctx, |ui| {
                self.render_tab_bar(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.render_messages(ui);
                    self.render_main_content(ui);
                    ui.add_space(12.0);
                    self.render_install_banner(ui);
                });
        });

        ctx.request_repaint_after(REFRESH_INTERVAL);
    }
}
