//! # Install Banner Module
//!
//! Floating "Install MyClassSchedule" card above the tab bar.

use eframe::egui;

use crate::backend::domain::InstallBannerView;
use crate::ui::app_state::ClassScheduleApp;
use crate::ui::components::styling::{card_frame, colors};

impl ClassScheduleApp {
    pub fn render_install_banner(&mut self, ui: &mut egui::Ui) {
        let view = self.install_banner.view();
        if view == InstallBannerView::Hidden {
            return;
        }

        let mut dismiss = false;
        let mut install = false;

        card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⬇").size(20.0).color(colors::PRIMARY));
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new("Install MyClassSchedule").strong());
                    match view {
                        InstallBannerView::ManualInstructions => {
                            ui.label(
                                egui::RichText::new("Tap the Share button in Safari, then \"Add to Home Screen\"")
                                    .size(12.0)
                                    .color(colors::MUTED_TEXT),
                            );
                        }
                        InstallBannerView::InstallButton => {
                            ui.label(
                                egui::RichText::new("Add to your home screen for quick access, works offline!")
                                    .size(12.0)
                                    .color(colors::MUTED_TEXT),
                            );
                            install = ui.button("Install App").clicked();
                        }
                        InstallBannerView::Hidden => {}
                    }
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    dismiss = ui.small_button("✖").clicked();
                });
            });
        });

        if install {
            self.run_install_prompt();
        }
        if dismiss {
            self.dismiss_install_banner();
        }
    }
}
