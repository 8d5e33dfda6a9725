use std::path::PathBuf;

use super::{
    export::{StatusMessage, output_path},
    preferences::UserPreferences,
    selection::ImageSelection,
    theme::Theme,
};
use crate::exporter::{ExportError, ExportSummary, save_images_as_pdf};
use crate::layout::ExportSettings;

// Requests that need the app (egui context, viewports) to complete
#[derive(Debug, Clone, PartialEq)]
pub enum AppStateRequest {
    ReplaceSelection { paths: Vec<PathBuf> },
    Preview { index: usize },
    Convert,
}

pub struct AppState {
    pub selection: ImageSelection,
    pub theme: Theme,
    pub output_name: String,
    /// Where the PDF is written; the working directory unless changed.
    pub output_directory: PathBuf,
    pub export_settings: ExportSettings,
    pub status: Option<StatusMessage>,

    pub preferences: UserPreferences,
    last_preferences: UserPreferences,

    pub pending_app_state_request: Option<AppStateRequest>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(UserPreferences::load())
    }
}

impl AppState {
    pub fn new(preferences: UserPreferences) -> Self {
        Self {
            selection: ImageSelection::default(),
            theme: Theme::default(),
            output_name: String::new(),
            output_directory: PathBuf::from("."),
            export_settings: ExportSettings::default(),
            status: None,

            preferences: preferences.clone(),
            last_preferences: preferences,

            pending_app_state_request: None,
        }
    }

    /// Replaces the selection wholesale and remembers where the images came
    /// from for the next file dialog.
    pub fn replace_selection(&mut self, paths: Vec<PathBuf>) {
        if let Some(parent) = paths.first().and_then(|p| p.parent()) {
            self.preferences.last_directory = Some(parent.to_path_buf());
        }
        log::info!("Selected {} image(s)", paths.len());
        self.selection.replace(paths);
        self.status = None;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        log::debug!("Theme switched to {}", self.theme.display_name());
    }

    pub fn set_output_name(&mut self, name: impl Into<String>) {
        self.output_name = name.into();
    }

    pub fn output_path(&self) -> PathBuf {
        output_path(&self.output_directory, &self.output_name)
    }

    /// Index of the image to preview: the first highlighted row.
    pub fn preview_index(&self) -> Option<usize> {
        self.selection.first_highlighted()
    }

    /// Writes the selection as a PDF. Does nothing and returns `Ok(None)`
    /// when no images are selected.
    pub fn convert(&mut self) -> Result<Option<ExportSummary>, ExportError> {
        if self.selection.is_empty() {
            log::debug!("Convert requested with an empty selection");
            return Ok(None);
        }

        let output_path = self.output_path();
        log::info!(
            "Converting {} image(s) to {}",
            self.selection.len(),
            output_path.display()
        );

        match save_images_as_pdf(self.selection.paths(), &output_path, &self.export_settings) {
            Ok(summary) => {
                log::info!(
                    "Saved {} page(s) to {}",
                    summary.page_count,
                    summary.output_path.display()
                );
                self.status = Some(StatusMessage::Info(format!(
                    "Saved {} page(s) to {}",
                    summary.page_count,
                    summary.output_path.display()
                )));
                Ok(Some(summary))
            }
            Err(e) => {
                log::error!("PDF export failed: {e}");
                self.status = Some(StatusMessage::Error(format!("Export failed: {e}")));
                Err(e)
            }
        }
    }

    pub fn check_and_save_preferences(&mut self) {
        if self.preferences != self.last_preferences {
            self.last_preferences = self.preferences.clone();
            if let Err(e) = self.preferences.save() {
                log::error!("Failed to save preferences: {e}");
            }
        }
    }
}
