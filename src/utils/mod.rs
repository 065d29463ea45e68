mod theme_state;

pub use theme_state::{apply_document_theme, Theme};
