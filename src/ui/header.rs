use super::styles;
use crate::types::AppState;
use crate::types::selection::SUPPORTED_EXTENSIONS;
use rfd::FileDialog;

pub fn draw_header(ui: &mut egui::Ui, state: &mut AppState) {
    let palette = state.theme.palette();

    ui.vertical_centered(|ui| {
        styles::themed_label(
            ui,
            &palette,
            egui::RichText::new("Image to PDF Converter").heading(),
        );

        if styles::themed_button(ui, &palette, "Change Theme").clicked() {
            state.toggle_theme();
        }

        if styles::themed_button(ui, &palette, "Select Images").clicked() {
            select_images(state);
        }
    });
}

fn select_images(state: &mut AppState) {
    let mut dialog = FileDialog::new()
        .set_title("Select Images")
        .add_filter("Image files", SUPPORTED_EXTENSIONS);
    if let Some(dir) = &state.preferences.last_directory {
        dialog = dialog.set_directory(dir);
    }

    match dialog.pick_files() {
        Some(paths) => state.replace_selection(paths),
        None => log::debug!("Image selection cancelled"),
    }
}
