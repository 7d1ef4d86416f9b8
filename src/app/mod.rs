//! Application layer - state management and orchestration

pub mod actions;
pub mod handler;
pub mod history;
pub mod message;
pub mod navigator;
pub mod signals;
pub mod state;

pub use handler::{UpdateAction, UpdateResult};

use std::sync::Arc;

use crate::common::prelude::*;
use crate::config;
use crate::gemini::GeminiClient;
use crate::i18n::{self, Language};
use crate::tui;

/// Main application entry point
///
/// Resolves the language (flag, then persisted config, then locale), builds
/// the Gemini backend from the environment, and runs the TUI.
pub async fn run(initial_topic: Option<String>, language_override: Option<Language>) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since TUI owns stdout)
    crate::common::logging::init()?;

    info!("═══════════════════════════════════════════════════════");
    info!("InsightSnap starting");
    info!("═══════════════════════════════════════════════════════");

    let settings = config::load_settings();
    let language = language_override
        .or(settings.general.language)
        .unwrap_or_else(i18n::detect_system_language);
    info!("Language: {}", language);

    let backend = Arc::new(GeminiClient::from_env()?);

    let result = tui::run(initial_topic, language, backend).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("InsightSnap exiting");
    result
}
