use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_NAME: &str = "output";
pub const PDF_EXTENSION: &str = "pdf";

/// File name for the PDF. An empty name falls back to `output`; the `.pdf`
/// suffix is always appended as-is.
pub fn output_file_name(output_name: &str) -> String {
    let stem = if output_name.is_empty() {
        DEFAULT_OUTPUT_NAME
    } else {
        output_name
    };
    format!("{stem}.{PDF_EXTENSION}")
}

pub fn output_path(directory: &Path, output_name: &str) -> PathBuf {
    directory.join(output_file_name(output_name))
}

#[derive(Clone, Debug, PartialEq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

impl StatusMessage {
    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Info(text) | StatusMessage::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, StatusMessage::Error(_))
    }
}
