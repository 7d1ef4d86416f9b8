//! Application state (Model in TEA pattern)

use crate::app::history::HistoryCache;
use crate::app::navigator::SlideNavigator;
use crate::core::{AugmentState, LoadingState, MicroCourse};
use crate::i18n::{Language, Translations};

/// Which pane receives key events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaneFocus {
    /// Topic input and history list
    #[default]
    Compose,
    /// Slide preview (arrow keys navigate)
    Preview,
}

/// Progress stage reached when the real request has settled
pub const PROGRESS_STAGE_DONE: u8 = 4;

/// Highest stage the decorative timer may reach on its own
pub const PROGRESS_STAGE_CEILING: u8 = 3;

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Topic input buffer
    pub topic_input: String,

    /// The active course, if any
    pub course: Option<MicroCourse>,

    /// Generation request lifecycle
    pub loading_state: LoadingState,

    /// Cursor over the active course's slides
    pub navigator: SlideNavigator,

    /// Past generations, most-recent-first
    pub history: HistoryCache,

    /// Highlighted history entry in the compose pane
    pub history_cursor: Option<usize>,

    /// Decorative progress stage: 0 = off, 1..=3 simulated, 4 = complete
    pub progress_stage: u8,

    /// Mind-map augmentation lifecycle for the active course
    pub augment: AugmentState,

    /// Latest issued generation request. Settlements carrying an older
    /// sequence number are discarded.
    pub request_seq: u64,

    /// Active interface/generation language
    pub language: Language,

    /// Localized generation-error banner
    pub error_message: Option<&'static str>,

    /// Transient notice (augmentation failures, export results); a channel
    /// distinct from the error banner
    pub notice: Option<String>,

    /// Which pane has keyboard focus
    pub focus: PaneFocus,

    /// On narrow terminals only one pane is visible; this picks it
    pub show_preview: bool,

    /// Quiz answer picked on the quiz slide, if any
    pub quiz_choice: Option<usize>,

    should_quit: bool,
}

impl AppState {
    pub fn new(language: Language) -> Self {
        Self {
            topic_input: String::new(),
            course: None,
            loading_state: LoadingState::Idle,
            navigator: SlideNavigator::new(),
            history: HistoryCache::new(),
            history_cursor: None,
            progress_stage: 0,
            augment: AugmentState::Idle,
            request_seq: 0,
            language,
            error_message: None,
            notice: None,
            focus: PaneFocus::Compose,
            show_preview: false,
            quiz_choice: None,
            should_quit: false,
        }
    }

    /// Translation table for the active language
    pub fn t(&self) -> &'static Translations {
        self.language.translations()
    }

    /// Slide count of the active course, or 0 when none is active
    pub fn slide_count(&self) -> usize {
        self.course.as_ref().map_or(0, |c| c.slide_count())
    }

    /// Whether the current slide is the quiz
    pub fn on_quiz_slide(&self) -> bool {
        self.course.is_some() && self.navigator.is_terminal(self.slide_count())
    }

    pub fn is_loading(&self) -> bool {
        self.loading_state == LoadingState::Loading
    }

    /// Begin a new generation request: clear previous results, reset the
    /// navigator, arm the progress display, and issue a fresh sequence
    /// number. Returns the sequence number the spawned tasks must carry.
    pub fn begin_generation(&mut self) -> u64 {
        self.loading_state = LoadingState::Loading;
        self.error_message = None;
        self.notice = None;
        self.course = None;
        self.navigator.reset();
        self.quiz_choice = None;
        self.augment = AugmentState::Idle;
        self.progress_stage = 1;
        self.history_cursor = None;
        self.request_seq += 1;
        self.request_seq
    }

    /// Whether a settlement message belongs to the latest issued request
    pub fn is_current_request(&self, seq: u64) -> bool {
        seq == self.request_seq
    }

    /// Bind a course as active: reset the cursor, surface the preview.
    pub fn activate_course(&mut self, course: MicroCourse) {
        self.course = Some(course);
        self.navigator.reset();
        self.quiz_choice = None;
        self.loading_state = LoadingState::Success;
        self.show_preview = true;
        self.focus = PaneFocus::Preview;
    }

    /// Clear the active course and return to the landing view.
    pub fn reset(&mut self) {
        self.course = None;
        self.topic_input.clear();
        self.loading_state = LoadingState::Idle;
        self.navigator.reset();
        self.quiz_choice = None;
        self.augment = AugmentState::Idle;
        self.error_message = None;
        self.progress_stage = 0;
        self.show_preview = false;
        self.focus = PaneFocus::Compose;
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
