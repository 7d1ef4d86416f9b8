//! Course data model
//!
//! The shapes exchanged with the generation backend and held in UI state.
//! Field names serialize as camelCase to match the backend JSON schema.

use serde::{Deserialize, Serialize};

use crate::common::prelude::*;

/// Cards per generated course
pub const CARDS_PER_COURSE: usize = 3;

/// Options per quiz question
pub const QUIZ_OPTIONS: usize = 4;

/// A single knowledge card. Immutable once generated.
///
/// `keyword` is a visual search seed consumed only by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseCard {
    pub title: String,
    pub emoji: String,
    pub content: String,
    pub keyword: String,
}

/// The interactive quiz closing a course. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub explanation: String,
}

/// A generated micro-course: three knowledge cards plus one quiz.
///
/// `mind_map_image` is the only field mutated after creation: exactly once,
/// by the augmentation flow, from `None` to a data-URI string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MicroCourse {
    pub topic: String,
    pub cards: Vec<CourseCard>,
    pub quiz: Quiz,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mind_map_image: Option<String>,
}

impl MicroCourse {
    /// Number of addressable slides: the cards, then the quiz.
    pub fn slide_count(&self) -> usize {
        self.cards.len() + 1
    }

    /// Enforce the shape invariants at the backend parse boundary.
    pub fn validate(&self) -> Result<()> {
        if self.cards.len() != CARDS_PER_COURSE {
            return Err(Error::invalid_course(format!(
                "expected {} cards, got {}",
                CARDS_PER_COURSE,
                self.cards.len()
            )));
        }
        if self.quiz.options.len() != QUIZ_OPTIONS {
            return Err(Error::invalid_course(format!(
                "expected {} quiz options, got {}",
                QUIZ_OPTIONS,
                self.quiz.options.len()
            )));
        }
        if self.quiz.correct_index >= QUIZ_OPTIONS {
            return Err(Error::invalid_course(format!(
                "correct index {} out of range",
                self.quiz.correct_index
            )));
        }
        Ok(())
    }
}

/// Whether a generation request is in flight and whether input/navigation
/// controls are enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Lifecycle of the mind-map augmentation for the active course.
///
/// A state machine instead of a bare flag so the re-entrancy guard and the
/// UI binding stay unambiguous under rapid toggling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AugmentState {
    #[default]
    Idle,
    Pending,
    Ready,
    Failed,
}

impl AugmentState {
    pub fn is_pending(self) -> bool {
        self == AugmentState::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn sample_course(topic: &str) -> MicroCourse {
        MicroCourse {
            topic: topic.to_string(),
            cards: (0..CARDS_PER_COURSE)
                .map(|i| CourseCard {
                    title: format!("Card {i}"),
                    emoji: "💡".to_string(),
                    content: format!("Content {i}"),
                    keyword: "minimalist landscape".to_string(),
                })
                .collect(),
            quiz: Quiz {
                question: "Question?".to_string(),
                options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
                correct_index: 1,
                explanation: "Because.".to_string(),
            },
            mind_map_image: None,
        }
    }

    #[test]
    fn test_slide_count_is_cards_plus_quiz() {
        let course = sample_course("Game Theory");
        assert_eq!(course.slide_count(), CARDS_PER_COURSE + 1);
    }

    #[test]
    fn test_validate_accepts_well_formed_course() {
        assert!(sample_course("Game Theory").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_wrong_card_count() {
        let mut course = sample_course("x");
        course.cards.pop();
        assert!(matches!(
            course.validate(),
            Err(Error::InvalidCourse { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_quiz() {
        let mut course = sample_course("x");
        course.quiz.options.push("E".into());
        assert!(course.validate().is_err());

        let mut course = sample_course("x");
        course.quiz.correct_index = 4;
        assert!(course.validate().is_err());
    }

    #[test]
    fn test_camel_case_wire_format() {
        let json = r#"{
            "topic": "Wine Tasting",
            "cards": [
                {"title": "t", "emoji": "🍷", "content": "c", "keyword": "k"},
                {"title": "t", "emoji": "🍷", "content": "c", "keyword": "k"},
                {"title": "t", "emoji": "🍷", "content": "c", "keyword": "k"}
            ],
            "quiz": {
                "question": "q",
                "options": ["a", "b", "c", "d"],
                "correctIndex": 2,
                "explanation": "e"
            }
        }"#;
        let course: MicroCourse = serde_json::from_str(json).unwrap();
        assert_eq!(course.quiz.correct_index, 2);
        assert!(course.mind_map_image.is_none());
        assert!(course.validate().is_ok());
    }
}
