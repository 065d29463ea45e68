mod app;

pub use app::{ThemeApp, LEARN_REACT_TEXT, LEARN_REACT_URL};
