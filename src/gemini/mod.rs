//! Generation backend: the two async calls the orchestrator depends on
//!
//! The app layer only ever sees [`CourseBackend`]; the production
//! implementation is [`GeminiClient`]. Tests substitute a fake.

pub mod client;
pub mod protocol;

use async_trait::async_trait;

use crate::common::prelude::*;
use crate::core::MicroCourse;
use crate::i18n::Language;

pub use client::GeminiClient;

/// The asynchronous generation contract.
///
/// Both calls fail with a generic [`Error::Backend`]-family error on any
/// network, parse, or shape failure; callers never inspect the detail.
#[async_trait]
pub trait CourseBackend: Send + Sync {
    /// Generate a micro-course (3 cards + 1 quiz) for a non-empty topic.
    /// The result never carries a mind-map image.
    async fn generate_course(&self, topic: &str, language: Language) -> Result<MicroCourse>;

    /// Generate a mind-map infographic for a topic, returned as a
    /// `data:image/...;base64,` URI.
    async fn generate_mind_map(&self, topic: &str, language: Language) -> Result<String>;
}
