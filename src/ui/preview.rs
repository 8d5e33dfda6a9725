use crate::types::PreviewImage;

pub const PREVIEW_TITLE: &str = "Image Preview";

/// A secondary window showing one downscaled image. Dropping it frees the
/// texture.
pub struct PreviewWindow {
    viewport_id: egui::ViewportId,
    image: PreviewImage,
    open: bool,
}

impl PreviewWindow {
    pub fn new(serial: u64, image: PreviewImage) -> Self {
        Self {
            viewport_id: egui::ViewportId::from_hash_of(("image_preview", serial)),
            image,
            open: true,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        let image = &self.image;
        let viewport_id = self.viewport_id;
        let mut close_requested = false;

        let builder = egui::ViewportBuilder::default()
            .with_title(PREVIEW_TITLE)
            .with_inner_size(image.size())
            .with_resizable(false);

        ctx.show_viewport_immediate(viewport_id, builder, |ctx, class| {
            if class == egui::ViewportClass::Embedded {
                // Backend without multi-window support: fall back to an egui window
                let mut open = true;
                egui::Window::new(PREVIEW_TITLE)
                    .id(egui::Id::new(viewport_id))
                    .open(&mut open)
                    .resizable(false)
                    .show(ctx, |ui| {
                        ui.add(egui::Image::new(&image.texture).fit_to_exact_size(image.size()));
                    });
                close_requested = !open;
                return;
            }

            egui::CentralPanel::default()
                .frame(egui::Frame::NONE)
                .show(ctx, |ui| {
                    ui.add(egui::Image::new(&image.texture).fit_to_exact_size(image.size()));
                });

            if ctx.input(|i| i.viewport().close_requested()) {
                close_requested = true;
            }
        });

        if close_requested {
            log::debug!("Closed preview of {}", self.image.path.display());
            self.open = false;
        }
    }
}

pub fn draw_preview_windows(ctx: &egui::Context, windows: &mut Vec<PreviewWindow>) {
    for window in windows.iter_mut() {
        window.show(ctx);
    }
    windows.retain(PreviewWindow::is_open);
}
