//! Settings persistence

pub mod settings;

pub use settings::{load_settings, save_language, Settings};
