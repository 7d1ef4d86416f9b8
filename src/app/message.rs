//! Message types for the application (TEA pattern)

use crossterm::event::KeyEvent;
use std::path::PathBuf;

use crate::core::MicroCourse;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(KeyEvent),

    /// Tick event for periodic updates
    Tick,

    /// Request to quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Topic Input
    // ─────────────────────────────────────────────────────────
    /// Type a character into the topic input
    InputChar(char),
    /// Delete the last character of the topic input
    InputBackspace,
    /// Clear the topic input
    InputClear,
    /// Replace the topic input text (tag shortcuts; never auto-submits)
    SetTopic(String),
    /// Submit the current topic for generation
    SubmitTopic,

    // ─────────────────────────────────────────────────────────
    // Slide Navigation
    // ─────────────────────────────────────────────────────────
    /// Advance to the next slide
    NextSlide,
    /// Go back to the previous slide
    PrevSlide,
    /// Clear the active course and return to the landing view
    ResetCourse,
    /// Pick a quiz answer (0-3) on the quiz slide
    PickQuizOption(usize),

    // ─────────────────────────────────────────────────────────
    // Pane Focus
    // ─────────────────────────────────────────────────────────
    /// Move focus to the preview pane
    FocusPreview,
    /// Move focus back to the compose pane
    FocusCompose,

    // ─────────────────────────────────────────────────────────
    // History
    // ─────────────────────────────────────────────────────────
    /// Move the history cursor up
    HistoryUp,
    /// Move the history cursor down
    HistoryDown,
    /// Drop the history cursor without loading anything
    HistoryCancel,
    /// Load a history entry as the active course (no backend call)
    LoadHistory(usize),

    // ─────────────────────────────────────────────────────────
    // Language
    // ─────────────────────────────────────────────────────────
    /// Toggle zh-CN / en; affects future generations only
    ToggleLanguage,

    // ─────────────────────────────────────────────────────────
    // Generation Settlements (from background tasks)
    // ─────────────────────────────────────────────────────────
    /// Decorative progress-stage tick (1200 ms cadence)
    ProgressTick { seq: u64 },
    /// Real request settled successfully; terminal stage before the swap
    ProgressComplete { seq: u64 },
    /// Generated course ready to display (after the settle delay)
    CourseReady { seq: u64, course: Box<MicroCourse> },
    /// Generation failed; detail already logged
    CourseFailed { seq: u64 },

    // ─────────────────────────────────────────────────────────
    // Mind-map Augmentation
    // ─────────────────────────────────────────────────────────
    /// Start mind-map generation for the active course
    GenerateMindMap,
    /// Mind map arrived for a topic
    MindMapReady { topic: String, data_uri: String },
    /// Mind-map generation failed for a topic
    MindMapFailed { topic: String },
    /// Export the active course's mind map to a PNG file
    SaveMindMap,
    /// Export finished
    MindMapSaved { path: PathBuf },
    /// Export failed
    MindMapSaveFailed { message: String },
}
