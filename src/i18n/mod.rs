//! Language packs and language selection
//!
//! Two fixed languages (Simplified Chinese and English). The active language
//! is resolved at startup from, in order: the `--language` flag, the persisted
//! config, the `LANG`/`LC_ALL` environment. It parameterizes all backend
//! calls and the UI strings; toggling it never rewrites already-generated
//! content.

mod en;
mod zh_cn;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use en::EN;
pub use zh_cn::ZH_CN;

/// Interface and generation language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "en")]
    En,
}

impl Language {
    /// The translation table for this language
    pub fn translations(self) -> &'static Translations {
        match self {
            Language::ZhCn => &ZH_CN,
            Language::En => &EN,
        }
    }

    /// The other language (used by the toggle shortcut)
    pub fn toggled(self) -> Self {
        match self {
            Language::ZhCn => Language::En,
            Language::En => Language::ZhCn,
        }
    }

    /// BCP 47 tag, as stored in the config file
    pub fn tag(self) -> &'static str {
        match self {
            Language::ZhCn => "zh-CN",
            Language::En => "en",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zh-CN" | "zh-cn" | "zh" => Ok(Language::ZhCn),
            "en" | "en-US" | "en-us" => Ok(Language::En),
            other => Err(format!("unknown language '{other}' (expected zh-CN or en)")),
        }
    }
}

/// Detect the language from the process locale (`LC_ALL`, then `LANG`).
/// A `zh` prefix selects Chinese, anything else English.
pub fn detect_system_language() -> Language {
    let locale = std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LANG"))
        .unwrap_or_default();
    if locale.starts_with("zh") {
        Language::ZhCn
    } else {
        Language::En
    }
}

/// Translation table for one language
#[derive(Debug)]
pub struct Translations {
    pub app_name: &'static str,

    // Hero section
    pub hero_title1: &'static str,
    pub hero_title2: &'static str,
    pub hero_subtitle: &'static str,
    pub hero_tagline: &'static str,

    // Input
    pub input_placeholder: &'static str,

    // Suggested topic tags (Alt+1..4)
    pub tags: [&'static str; 4],

    // Staged progress display
    pub loading_steps: [&'static str; 3],

    // Errors
    pub generate_error: &'static str,
    pub mind_map_error: &'static str,

    // History
    pub recent_explore: &'static str,
    pub knowledge_points: &'static str,
    pub quiz: &'static str,

    // Empty state
    pub empty_title: &'static str,
    pub empty_subtitle1: &'static str,
    pub empty_subtitle2: &'static str,

    // Card slide ("{n}" is replaced by the chapter number)
    pub chapter: &'static str,

    // Quiz slide
    pub quiz_header: &'static str,
    pub correct_answer: &'static str,
    pub wrong_answer: &'static str,
    pub explanation: &'static str,
    pub generate_mind_map: &'static str,
    pub generating_mind_map: &'static str,
    pub knowledge_crystal: &'static str,
    pub save_to_local: &'static str,
    pub saved: &'static str,
    pub restart: &'static str,

    // Startup
    pub api_key_not_set: &'static str,
}

impl Translations {
    /// Chapter label for a zero-based card index
    pub fn chapter_label(&self, index: usize) -> String {
        self.chapter.replace("{n}", &(index + 1).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_toggle_round_trip() {
        assert_eq!(Language::ZhCn.toggled(), Language::En);
        assert_eq!(Language::En.toggled().toggled(), Language::En);
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("zh-CN".parse::<Language>().unwrap(), Language::ZhCn);
        assert_eq!("zh".parse::<Language>().unwrap(), Language::ZhCn);
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_chapter_label_substitution() {
        assert_eq!(EN.chapter_label(0), "Chapter 1");
        assert_eq!(ZH_CN.chapter_label(2), "第 3 章");
    }

    #[test]
    fn test_serde_tags() {
        let json = serde_json::to_string(&Language::ZhCn).unwrap();
        assert_eq!(json, "\"zh-CN\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::En);
    }
}
