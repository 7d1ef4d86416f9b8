//! Gemini REST client

use async_trait::async_trait;
use serde_json::json;

use crate::common::prelude::*;
use crate::core::MicroCourse;
use crate::i18n::Language;

use super::protocol::{
    GenerateContentRequest, GenerateContentResponse, GenerationConfig, ImageConfig,
};
use super::CourseBackend;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const COURSE_MODEL: &str = "gemini-2.5-flash";
const MIND_MAP_MODEL: &str = "gemini-3-pro-image-preview";

/// Production backend talking to the Gemini API
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Build a client from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        Self::from_key(std::env::var("GEMINI_API_KEY").ok())
    }

    /// A missing or blank key is rejected up front, before any request.
    fn from_key(key: Option<String>) -> Result<Self> {
        let api_key = key
            .filter(|k| !k.trim().is_empty())
            .ok_or(Error::ApiKeyMissing)?;
        Ok(Self::new(api_key))
    }

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different endpoint (used by tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<GenerateContentResponse>().await?)
    }
}

#[async_trait]
impl CourseBackend for GeminiClient {
    async fn generate_course(&self, topic: &str, language: Language) -> Result<MicroCourse> {
        let request = GenerateContentRequest::from_prompt(course_prompt(topic, language))
            .with_config(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(course_response_schema()),
                ..Default::default()
            });

        let response = self.generate_content(COURSE_MODEL, &request).await?;
        let text = response
            .first_text()
            .ok_or_else(|| Error::backend("no text candidate in response"))?;

        let course: MicroCourse = serde_json::from_str(text)
            .map_err(|e| Error::backend(format!("failed to parse course data: {e}")))?;
        course.validate()?;

        debug!("Generated course for topic {:?}", course.topic);
        Ok(course)
    }

    async fn generate_mind_map(&self, topic: &str, language: Language) -> Result<String> {
        let request = GenerateContentRequest::from_prompt(mind_map_prompt(topic, language))
            .with_config(GenerationConfig {
                response_modalities: Some(vec!["IMAGE".to_string()]),
                image_config: Some(ImageConfig {
                    // Portrait, matching the card layout
                    aspect_ratio: "3:4".to_string(),
                    image_size: "1K".to_string(),
                }),
                ..Default::default()
            });

        let response = self.generate_content(MIND_MAP_MODEL, &request).await?;
        let inline = response
            .first_inline_data()
            .ok_or_else(|| Error::backend("no image generated"))?;

        let mime = inline.mime_type.as_deref().unwrap_or("image/png");
        Ok(format!("data:{};base64,{}", mime, inline.data))
    }
}

fn course_prompt(topic: &str, language: Language) -> String {
    match language {
        Language::ZhCn => format!(
            "创建一个关于主题 \"{topic}\" 的“微型课程”。目标受众是中文初学者。\n\
             你需要生成 JSON 数据，包含：\n\
             1. 3张知识卡片 (cards)，每张卡片包含：\n\
             - title: 卡片标题 (中文，简短有力，不超过10个字)\n\
             - emoji: 一个相关的Emoji\n\
             - content: 核心知识点解释 (中文，50-80字，通俗易懂，富有洞察力)\n\
             - keyword: 一个具体的英文视觉关键词，用于搜索高质量的极简主义摄影背景图 \
               (例如 \"abstract architecture\", \"minimalist landscape\")。不要使用抽象概念词。\n\
             2. 1个互动测验 (quiz)，包含：\n\
             - question: 针对上述内容的一个选择题 (中文)\n\
             - options: 4个选项 (中文)\n\
             - correctIndex: 正确选项的索引 (0-3)\n\
             - explanation: 答案解析 (中文，一句话解释为什么选这个)\n\
             请确保语言生动有趣，富有教育意义，严格使用中文。"
        ),
        Language::En => format!(
            "Create a \"micro-course\" about the topic \"{topic}\" for curious beginners.\n\
             Generate JSON data containing:\n\
             1. 3 knowledge cards (cards), each with:\n\
             - title: a short, punchy card title (max 6 words)\n\
             - emoji: one relevant emoji\n\
             - content: the core insight, 50-80 words, accessible and insightful\n\
             - keyword: a concrete English visual keyword for a minimalist photo background \
               (e.g. \"abstract architecture\", \"minimalist landscape\"). No abstract concept words.\n\
             2. 1 interactive quiz (quiz) with:\n\
             - question: a multiple-choice question about the cards\n\
             - options: 4 options\n\
             - correctIndex: index of the correct option (0-3)\n\
             - explanation: a one-sentence explanation of the answer\n\
             Keep the language vivid and educational."
        ),
    }
}

fn mind_map_prompt(topic: &str, language: Language) -> String {
    let audience = match language {
        Language::ZhCn => "The overall aesthetic should be suitable for a Chinese audience, modern and minimalist.",
        Language::En => "The overall aesthetic should be modern and minimalist.",
    };
    format!(
        "Design a clean, professional, and colorful mind map infographic summarizing the topic: \
         \"{topic}\". Visual style: modern vector illustration, high resolution, white background, \
         organized structure with icons and nodes. Make it visually appealing for a learning \
         summary. Important: {audience}"
    )
}

fn course_response_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "topic": { "type": "STRING" },
            "cards": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "emoji": { "type": "STRING" },
                        "content": { "type": "STRING" },
                        "keyword": { "type": "STRING" }
                    },
                    "required": ["title", "emoji", "content", "keyword"]
                }
            },
            "quiz": {
                "type": "OBJECT",
                "properties": {
                    "question": { "type": "STRING" },
                    "options": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" }
                    },
                    "correctIndex": { "type": "INTEGER" },
                    "explanation": { "type": "STRING" }
                },
                "required": ["question", "options", "correctIndex", "explanation"]
            }
        },
        "required": ["topic", "cards", "quiz"]
    })
}
