//! Update function - handles state transitions (TEA pattern)

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::message::Message;
use crate::app::state::{AppState, PaneFocus, PROGRESS_STAGE_CEILING, PROGRESS_STAGE_DONE};
use crate::common::prelude::*;
use crate::core::{AugmentState, LoadingState};
use crate::i18n::Language;

/// Actions the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Spawn the generation request plus its progress timer
    StartGeneration {
        seq: u64,
        topic: String,
        language: Language,
    },

    /// Spawn the mind-map augmentation request
    StartMindMap { topic: String, language: Language },

    /// Export a mind-map data URI to a PNG file
    SaveMindMap { topic: String, data_uri: String },

    /// Persist the language preference to the config file
    PersistLanguage { language: Language },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}

/// Process a message and update state.
/// Returns optional follow-up message and/or action.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Topic Input
        // ─────────────────────────────────────────────────────────
        Message::InputChar(c) => {
            if !state.is_loading() {
                state.topic_input.push(c);
                state.history_cursor = None;
            }
            UpdateResult::none()
        }

        Message::InputBackspace => {
            if !state.is_loading() {
                state.topic_input.pop();
            }
            UpdateResult::none()
        }

        Message::InputClear => {
            if !state.is_loading() {
                state.topic_input.clear();
            }
            UpdateResult::none()
        }

        Message::SetTopic(text) => {
            if !state.is_loading() {
                state.topic_input = text;
                state.history_cursor = None;
            }
            UpdateResult::none()
        }

        Message::SubmitTopic => {
            let topic = state.topic_input.trim().to_string();
            // Blank input is silently ignored, no state change
            if topic.is_empty() || state.is_loading() {
                return UpdateResult::none();
            }
            let seq = state.begin_generation();
            info!("Generating course for topic {:?} (seq {})", topic, seq);
            UpdateResult::action(UpdateAction::StartGeneration {
                seq,
                topic,
                language: state.language,
            })
        }

        // ─────────────────────────────────────────────────────────
        // Slide Navigation
        // ─────────────────────────────────────────────────────────
        Message::NextSlide => {
            let count = state.slide_count();
            state.navigator.next(count);
            UpdateResult::none()
        }

        Message::PrevSlide => {
            state.navigator.previous();
            UpdateResult::none()
        }

        Message::ResetCourse => {
            state.reset();
            UpdateResult::none()
        }

        Message::PickQuizOption(choice) => {
            if state.on_quiz_slide() && choice < crate::core::QUIZ_OPTIONS {
                state.quiz_choice = Some(choice);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Pane Focus
        // ─────────────────────────────────────────────────────────
        Message::FocusPreview => {
            if state.course.is_some() {
                state.focus = PaneFocus::Preview;
                state.show_preview = true;
            }
            UpdateResult::none()
        }

        Message::FocusCompose => {
            state.focus = PaneFocus::Compose;
            state.show_preview = false;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // History
        // ─────────────────────────────────────────────────────────
        Message::HistoryUp => {
            state.history_cursor = match state.history_cursor {
                Some(0) | None => None,
                Some(i) => Some(i - 1),
            };
            UpdateResult::none()
        }

        Message::HistoryDown => {
            if !state.history.is_empty() {
                let last = state.history.len() - 1;
                state.history_cursor = Some(match state.history_cursor {
                    None => 0,
                    Some(i) => (i + 1).min(last),
                });
            }
            UpdateResult::none()
        }

        Message::HistoryCancel => {
            state.history_cursor = None;
            UpdateResult::none()
        }

        Message::LoadHistory(index) => {
            if let Some(entry) = state.history.get(index).cloned() {
                state.topic_input = entry.topic.clone();
                state.augment = if entry.mind_map_image.is_some() {
                    AugmentState::Ready
                } else {
                    AugmentState::Idle
                };
                state.error_message = None;
                state.history_cursor = None;
                // Straight to Success; no backend call is made
                state.activate_course(entry);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Language
        // ─────────────────────────────────────────────────────────
        Message::ToggleLanguage => {
            state.language = state.language.toggled();
            UpdateResult::action(UpdateAction::PersistLanguage {
                language: state.language,
            })
        }

        // ─────────────────────────────────────────────────────────
        // Generation Settlements
        // ─────────────────────────────────────────────────────────
        Message::ProgressTick { seq } => {
            if state.is_current_request(seq)
                && state.is_loading()
                && state.progress_stage < PROGRESS_STAGE_CEILING
            {
                state.progress_stage += 1;
            }
            UpdateResult::none()
        }

        Message::ProgressComplete { seq } => {
            if state.is_current_request(seq) && state.is_loading() {
                state.progress_stage = PROGRESS_STAGE_DONE;
            }
            UpdateResult::none()
        }

        Message::CourseReady { seq, course } => {
            // Only the latest request's result is ever applied
            if !state.is_current_request(seq) || !state.is_loading() {
                debug!("Discarding stale course result (seq {})", seq);
                return UpdateResult::none();
            }
            state.progress_stage = 0;
            state.augment = AugmentState::Idle;
            // History holds an independent snapshot of the course
            state.history.record((*course).clone());
            state.activate_course(*course);
            UpdateResult::none()
        }

        Message::CourseFailed { seq } => {
            if !state.is_current_request(seq) || !state.is_loading() {
                return UpdateResult::none();
            }
            state.loading_state = LoadingState::Error;
            state.error_message = Some(state.t().generate_error);
            state.progress_stage = 0;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Mind-map Augmentation
        // ─────────────────────────────────────────────────────────
        Message::GenerateMindMap => {
            // Re-entrancy guard: one augmentation at a time
            if state.augment.is_pending() {
                return UpdateResult::none();
            }
            let Some(course) = state.course.as_ref() else {
                return UpdateResult::none();
            };
            if course.mind_map_image.is_some() {
                return UpdateResult::none();
            }
            state.augment = AugmentState::Pending;
            state.notice = None;
            UpdateResult::action(UpdateAction::StartMindMap {
                topic: course.topic.clone(),
                language: state.language,
            })
        }

        Message::MindMapReady { topic, data_uri } => {
            match state.course.as_mut() {
                Some(course) if course.topic == topic => {
                    course.mind_map_image = Some(data_uri);
                    state.augment = AugmentState::Ready;
                }
                // The active course changed while the image was in flight
                _ => debug!("Discarding mind map for inactive topic {:?}", topic),
            }
            UpdateResult::none()
        }

        Message::MindMapFailed { topic } => {
            let active = state.course.as_ref().is_some_and(|c| c.topic == topic);
            if active && state.augment.is_pending() {
                state.augment = AugmentState::Failed;
                state.notice = Some(state.t().mind_map_error.to_string());
            }
            UpdateResult::none()
        }

        Message::SaveMindMap => {
            let Some(course) = state.course.as_ref() else {
                return UpdateResult::none();
            };
            let Some(data_uri) = course.mind_map_image.clone() else {
                return UpdateResult::none();
            };
            UpdateResult::action(UpdateAction::SaveMindMap {
                topic: course.topic.clone(),
                data_uri,
            })
        }

        Message::MindMapSaved { path } => {
            state.notice = Some(format!("{}: {}", state.t().saved, path.display()));
            UpdateResult::none()
        }

        Message::MindMapSaveFailed { message } => {
            warn!("Mind map export failed: {}", message);
            state.notice = Some(message);
            UpdateResult::none()
        }
    }
}

/// Convert key events to messages based on the focused pane
pub fn handle_key(state: &AppState, key: KeyEvent) -> Option<Message> {
    // Global shortcuts work in both panes
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return Some(Message::Quit),
            KeyCode::Char('l') => return Some(Message::ToggleLanguage),
            _ => {}
        }
    }

    match state.focus {
        PaneFocus::Compose => handle_key_compose(state, key),
        PaneFocus::Preview => handle_key_preview(state, key),
    }
}

/// Keys while the topic input / history list has focus.
///
/// Arrow keys drive the history cursor here, never slide navigation, so
/// typing topics is free of navigation side effects.
fn handle_key_compose(state: &AppState, key: KeyEvent) -> Option<Message> {
    match (key.code, key.modifiers) {
        (KeyCode::Enter, _) => match state.history_cursor {
            Some(index) => Some(Message::LoadHistory(index)),
            None => Some(Message::SubmitTopic),
        },

        (KeyCode::Up, _) => Some(Message::HistoryUp),
        (KeyCode::Down, _) => Some(Message::HistoryDown),
        (KeyCode::Esc, _) if state.history_cursor.is_some() => Some(Message::HistoryCancel),

        (KeyCode::Tab, _) => Some(Message::FocusPreview),

        (KeyCode::Backspace, _) => Some(Message::InputBackspace),
        (KeyCode::Char('u'), m) if m.contains(KeyModifiers::CONTROL) => Some(Message::InputClear),

        // Tag shortcuts: copy a suggestion into the input, never auto-submit
        (KeyCode::Char(c @ '1'..='4'), m) if m.contains(KeyModifiers::ALT) => {
            let index = (c as u8 - b'1') as usize;
            Some(Message::SetTopic(state.t().tags[index].to_string()))
        }

        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Some(Message::InputChar(c))
        }

        _ => None,
    }
}

/// Keys while the slide preview has focus
fn handle_key_preview(state: &AppState, key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Right => Some(Message::NextSlide),
        KeyCode::Left => Some(Message::PrevSlide),

        KeyCode::Esc | KeyCode::Tab => Some(Message::FocusCompose),

        // Quiz-slide actions
        KeyCode::Char(c @ '1'..='4') if state.on_quiz_slide() => {
            Some(Message::PickQuizOption((c as u8 - b'1') as usize))
        }
        KeyCode::Char('m') if state.on_quiz_slide() => Some(Message::GenerateMindMap),
        KeyCode::Char('s') => Some(Message::SaveMindMap),

        // Restart affordance replaces "advance" on the terminal slide
        KeyCode::Char('r') if state.on_quiz_slide() => Some(Message::ResetCourse),

        KeyCode::Char('q') => Some(Message::Quit),

        _ => None,
    }
}
