#![windows_subsystem = "windows"]
mod app;
mod exporter;
mod layout;
mod types;
mod ui;

use app::ImageToPdfApp;
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([400.0, 600.0])
            .with_min_inner_size([320.0, 480.0])
            .with_drag_and_drop(true)
            .with_title("Image to PDF"),
        ..Default::default()
    };

    eframe::run_native(
        "Image to PDF",
        options,
        Box::new(|cc| Ok(Box::new(ImageToPdfApp::new(cc)))),
    )
}
