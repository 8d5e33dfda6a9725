use super::styles;
use crate::types::{AppState, WidgetKind};

pub fn draw_image_list(ui: &mut egui::Ui, state: &mut AppState) {
    let palette = state.theme.palette();
    let names = state.selection.display_names();

    styles::list_frame(&palette).show(ui, |ui| {
        styles::apply_palette(ui.visuals_mut(), WidgetKind::List, &palette);
        ui.set_min_size(ui.available_size());

        if names.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.weak("No images selected");
            });
            return;
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.spacing_mut().item_spacing.y = 2.0;
                for (index, name) in names.iter().enumerate() {
                    let highlighted = state.selection.is_highlighted(index);
                    let response = ui.add_sized(
                        [ui.available_width(), 20.0],
                        egui::SelectableLabel::new(highlighted, name),
                    );
                    if response.clicked() {
                        state.selection.toggle_highlight(index);
                    }
                }
            });
    });
}
