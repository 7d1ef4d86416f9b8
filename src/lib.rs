//! InsightSnap Library
//!
//! A TUI application for AI-generated micro-courses: three knowledge cards
//! plus one quiz per topic, presented as swipeable slides in a phone-shaped
//! frame.

// Module declarations
pub mod app;
pub mod common;
pub mod config;
pub mod core;
pub mod gemini;
pub mod i18n;
pub mod tui;

// Re-export main entry point
pub use app::run;
