use crate::types::selection::is_supported_image;
use crate::types::{AppState, AppStateRequest, PreviewImage, StatusMessage};
use crate::ui::UI;
use crate::ui::preview::{PreviewWindow, draw_preview_windows};
use crate::ui::styles;
use eframe::egui;
use egui::Margin;
use std::path::PathBuf;

pub struct ImageToPdfApp {
    state: AppState,
    previews: Vec<PreviewWindow>,
    next_preview_serial: u64,
}

impl Default for ImageToPdfApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
            previews: Vec::new(),
            next_preview_serial: 0,
        }
    }
}

impl ImageToPdfApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        styles::init_styles(&cc.egui_ctx);
        Self::default()
    }

    fn apply_theme(&self, ctx: &egui::Context) {
        let visuals = styles::theme_visuals(self.state.theme);
        if ctx.style().visuals != visuals {
            ctx.set_visuals(visuals);
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped_files = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped_files.is_empty() {
            return;
        }

        let paths: Vec<PathBuf> = dropped_files
            .into_iter()
            .filter_map(|file| file.path)
            .filter(|path| is_supported_image(path))
            .collect();

        if paths.is_empty() {
            log::warn!("Ignoring drop without supported images");
            return;
        }
        self.state.pending_app_state_request = Some(AppStateRequest::ReplaceSelection { paths });
    }

    fn open_preview(&mut self, index: usize, ctx: &egui::Context) {
        let Some(path) = self.state.selection.get(index) else {
            return;
        };

        match PreviewImage::load(path, ctx) {
            Ok(image) => {
                log::info!(
                    "Previewing {} at {}×{}",
                    path.display(),
                    image.width,
                    image.height
                );
                self.previews
                    .push(PreviewWindow::new(self.next_preview_serial, image));
                self.next_preview_serial += 1;
            }
            Err(e) => {
                log::error!("Preview of {} failed: {e}", path.display());
                self.state.status = Some(StatusMessage::Error(format!("Preview failed: {e}")));
            }
        }
    }

    fn handle_requests(&mut self, ctx: &egui::Context) {
        let Some(request) = self.state.pending_app_state_request.take() else {
            return;
        };

        match request {
            AppStateRequest::ReplaceSelection { paths } => {
                self.state.replace_selection(paths);
            }
            AppStateRequest::Preview { index } => {
                self.open_preview(index, ctx);
            }
            AppStateRequest::Convert => {
                // Failures are already logged and shown in the status line
                if let Err(e) = self.state.convert() {
                    log::debug!("Conversion aborted: {e}");
                }
            }
        }
    }
}

impl eframe::App for ImageToPdfApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme(ctx);

        self.handle_dropped_files(ctx);

        self.handle_requests(ctx);

        self.state.check_and_save_preferences();

        let panel_frame = egui::Frame::NONE
            .fill(ctx.style().visuals.panel_fill)
            .inner_margin(Margin::symmetric(16, 10));

        egui::TopBottomPanel::top("header_panel")
            .frame(panel_frame)
            .show_separator_line(false)
            .show(ctx, |ui| {
                UI::draw_header(ui, &mut self.state);
            });

        egui::TopBottomPanel::bottom("footer_panel")
            .frame(panel_frame)
            .show_separator_line(false)
            .show(ctx, |ui| {
                UI::draw_footer(ui, &mut self.state);
            });

        egui::CentralPanel::default()
            .frame(panel_frame)
            .show(ctx, |ui| {
                UI::draw_image_list(ui, &mut self.state);
            });

        draw_preview_windows(ctx, &mut self.previews);

        // Requests queued by this frame's widgets are handled next frame
        if self.state.pending_app_state_request.is_some() {
            ctx.request_repaint();
        }
    }
}
