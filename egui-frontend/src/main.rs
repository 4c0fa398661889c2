use eframe::egui;
use log::{error, info};

mod backend;
mod ui;

use ui::ClassScheduleApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting MyClassSchedule egui application");

    // Phone-like proportions for a single column of cards
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 820.0])
            .with_min_inner_size([360.0, 560.0])
            .with_title("MyClassSchedule")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "MyClassSchedule",
        options,
        Box::new(|_cc| match ClassScheduleApp::new() {
            Ok(app) => {
                info!("Successfully initialized MyClassSchedule app");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {:#}", e);
                // Convert anyhow::Error to eframe::Error
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}
