pub mod app_state;
pub mod export;
pub mod image;
pub mod preferences;
pub mod selection;
pub mod theme;

// Re-export all public types for convenience
pub use app_state::{AppState, AppStateRequest};
pub use export::StatusMessage;
pub use self::image::PreviewImage;
pub use theme::WidgetKind;
