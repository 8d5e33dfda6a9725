use super::styles::{self, RichTextExt};
use crate::types::export::DEFAULT_OUTPUT_NAME;
use crate::types::{AppState, AppStateRequest, WidgetKind};

pub fn draw_footer(ui: &mut egui::Ui, state: &mut AppState) {
    let palette = state.theme.palette();

    ui.vertical_centered(|ui| {
        if styles::themed_button(ui, &palette, "Preview Image").clicked() {
            // Nothing highlighted: nothing to preview
            if let Some(index) = state.preview_index() {
                state.pending_app_state_request = Some(AppStateRequest::Preview { index });
            }
        }

        styles::themed_label(
            ui,
            &palette,
            egui::RichText::new("Enter output PDF Name:").subheading(),
        );
        ui.scope(|ui| {
            styles::apply_palette(ui.visuals_mut(), WidgetKind::Entry, &palette);
            let mut name = state.output_name.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut name)
                    .desired_width(280.0)
                    .horizontal_align(egui::Align::Center)
                    .hint_text(DEFAULT_OUTPUT_NAME),
            );
            if response.changed() {
                state.set_output_name(name);
            }
        });

        ui.add_space(10.0);
        if styles::themed_button(ui, &palette, "Convert to PDF").clicked() {
            state.pending_app_state_request = Some(AppStateRequest::Convert);
        }

        draw_status(ui, state);
    });
}

fn draw_status(ui: &mut egui::Ui, state: &AppState) {
    let Some(status) = &state.status else {
        return;
    };
    let mut text = egui::RichText::new(status.text()).small();
    if status.is_error() {
        text = text.color(styles::COLOR_ERROR);
    }
    ui.label(text);
}
