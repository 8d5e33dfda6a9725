mod footer;
mod header;
mod image_list;
pub mod preview;
pub mod styles;

use crate::types::AppState;

pub struct UI;

impl UI {
    pub fn draw_header(ui: &mut egui::Ui, state: &mut AppState) {
        header::draw_header(ui, state)
    }

    pub fn draw_image_list(ui: &mut egui::Ui, state: &mut AppState) {
        image_list::draw_image_list(ui, state)
    }

    pub fn draw_footer(ui: &mut egui::Ui, state: &mut AppState) {
        footer::draw_footer(ui, state)
    }
}
