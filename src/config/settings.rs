//! Settings parser for the insightsnap config file
//!
//! Currently the only persisted setting is the language preference. Loading
//! is lenient: any missing or malformed file yields defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::common::prelude::*;
use crate::i18n::Language;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "insightsnap";

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub general: GeneralSettings,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralSettings {
    /// Persisted language preference; `None` means "detect from locale"
    #[serde(default)]
    pub language: Option<Language>,
}

/// Load settings from the platform config dir.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings() -> Settings {
    load_settings_from(&config_dir())
}

/// Persist the language preference, keeping other settings intact.
pub fn save_language(language: Language) -> Result<()> {
    save_language_in(&config_dir(), language)
}

fn config_dir() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(APP_DIR)
}

pub(crate) fn load_settings_from(dir: &Path) -> Settings {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

pub(crate) fn save_language_in(dir: &Path, language: Language) -> Result<()> {
    std::fs::create_dir_all(dir)
        .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;

    let mut settings = load_settings_from(dir);
    settings.general.language = Some(language);

    let content = toml::to_string_pretty(&settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {}", e)))?;

    std::fs::write(dir.join(CONFIG_FILENAME), content)
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings_from(temp.path());
        assert!(settings.general.language.is_none());
    }

    #[test]
    fn test_save_and_load_language() {
        let temp = tempdir().unwrap();

        save_language_in(temp.path(), Language::ZhCn).unwrap();
        let settings = load_settings_from(temp.path());
        assert_eq!(settings.general.language, Some(Language::ZhCn));

        // Toggling overwrites the previous value
        save_language_in(temp.path(), Language::En).unwrap();
        let settings = load_settings_from(temp.path());
        assert_eq!(settings.general.language, Some(Language::En));
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join("config.toml"), "not valid toml {{{{").unwrap();

        let settings = load_settings_from(temp.path());
        assert!(settings.general.language.is_none());
    }

    #[test]
    fn test_language_tag_round_trips_through_toml() {
        let temp = tempdir().unwrap();
        save_language_in(temp.path(), Language::ZhCn).unwrap();

        let content = std::fs::read_to_string(temp.path().join("config.toml")).unwrap();
        assert!(content.contains("zh-CN"));
    }
}
