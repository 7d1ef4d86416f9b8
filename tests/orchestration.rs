//! End-to-end orchestration tests: the update loop driven by a fake backend
//!
//! Time is paused, so the 1200 ms progress ticks and the 500 ms settle delay
//! run instantly while preserving their relative ordering.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;

use insightsnap::app::message::Message;
use insightsnap::app::state::AppState;
use insightsnap::common::error::{Error, Result};
use insightsnap::core::{AugmentState, CourseCard, LoadingState, MicroCourse, Quiz};
use insightsnap::gemini::CourseBackend;
use insightsnap::i18n::Language;
use insightsnap::tui::runner::process_message;

fn sample_course(topic: &str) -> MicroCourse {
    MicroCourse {
        topic: topic.to_string(),
        cards: vec![
            CourseCard {
                title: "Title".into(),
                emoji: "💡".into(),
                content: "Content".into(),
                keyword: "minimalist landscape".into(),
            };
            3
        ],
        quiz: Quiz {
            question: "Question?".into(),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_index: 1,
            explanation: "Because.".into(),
        },
        mind_map_image: None,
    }
}

/// Programmable backend standing in for the Gemini client
struct FakeBackend {
    course_delay: Duration,
    fail_course: bool,
    mind_map_delay: Duration,
    fail_mind_map: bool,
    course_calls: AtomicUsize,
    mind_map_calls: AtomicUsize,
}

impl FakeBackend {
    fn new() -> Self {
        Self {
            course_delay: Duration::from_secs(3),
            fail_course: false,
            mind_map_delay: Duration::from_secs(1),
            fail_mind_map: false,
            course_calls: AtomicUsize::new(0),
            mind_map_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl CourseBackend for FakeBackend {
    async fn generate_course(&self, topic: &str, _language: Language) -> Result<MicroCourse> {
        self.course_calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.course_delay).await;
        if self.fail_course {
            Err(Error::backend("synthetic failure"))
        } else {
            Ok(sample_course(topic))
        }
    }

    async fn generate_mind_map(&self, _topic: &str, _language: Language) -> Result<String> {
        self.mind_map_calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.mind_map_delay).await;
        if self.fail_mind_map {
            Err(Error::backend("no image generated"))
        } else {
            Ok("data:image/png;base64,aGVsbG8=".to_string())
        }
    }
}

struct Harness {
    state: AppState,
    rx: mpsc::Receiver<Message>,
    tx: mpsc::Sender<Message>,
    backend: Arc<FakeBackend>,
}

impl Harness {
    fn new(backend: FakeBackend) -> Self {
        let (tx, rx) = mpsc::channel(256);
        Self {
            state: AppState::new(Language::En),
            rx,
            tx,
            backend: Arc::new(backend),
        }
    }

    fn dispatch(&mut self, msg: Message) {
        let backend: Arc<dyn CourseBackend> = self.backend.clone();
        process_message(&mut self.state, msg, &self.tx, &backend);
    }

    /// Feed messages from background tasks into the update loop until the
    /// predicate holds.
    async fn pump_until(&mut self, pred: impl Fn(&AppState) -> bool) {
        while !pred(&self.state) {
            let msg = tokio::time::timeout(Duration::from_secs(120), self.rx.recv())
                .await
                .expect("pump timed out before predicate held")
                .expect("message channel closed");
            let backend: Arc<dyn CourseBackend> = self.backend.clone();
            process_message(&mut self.state, msg, &self.tx, &backend);
        }
    }
}

#[tokio::test(start_paused = true)]
async fn generate_success_runs_stages_then_swaps_content() {
    let mut h = Harness::new(FakeBackend::new());
    h.state.topic_input = "Game Theory".into();
    h.dispatch(Message::SubmitTopic);

    assert_eq!(h.state.loading_state, LoadingState::Loading);
    assert_eq!(h.state.progress_stage, 1);

    // The 3s backend call sees ticks at 1.2s and 2.4s: stages 2 and 3
    h.pump_until(|s| s.progress_stage == 3).await;
    assert_eq!(h.state.loading_state, LoadingState::Loading);

    h.pump_until(|s| s.loading_state == LoadingState::Success).await;
    assert_eq!(h.state.progress_stage, 0, "progress display cleared");

    let course = h.state.course.as_ref().expect("course is active");
    assert_eq!(course.topic, "Game Theory");
    assert_eq!(h.state.slide_count(), 4);
    assert_eq!(h.state.navigator.index(), 0);
    assert_eq!(h.state.history.get(0).unwrap().topic, "Game Theory");
    assert_eq!(h.backend.course_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn generate_failure_reports_error_and_leaves_history_untouched() {
    let mut backend = FakeBackend::new();
    backend.fail_course = true;
    let mut h = Harness::new(backend);

    h.state.topic_input = "X".into();
    h.dispatch(Message::SubmitTopic);
    h.pump_until(|s| s.loading_state == LoadingState::Error).await;

    assert!(h.state.course.is_none());
    assert!(h.state.history.is_empty());
    assert!(h.state.error_message.is_some());
    assert_eq!(h.state.progress_stage, 0, "no dangling progress display");
}

#[tokio::test(start_paused = true)]
async fn empty_topic_makes_no_backend_call() {
    let mut h = Harness::new(FakeBackend::new());
    h.state.topic_input = "   ".into();
    h.dispatch(Message::SubmitTopic);

    assert_eq!(h.state.loading_state, LoadingState::Idle);
    assert_eq!(h.backend.course_calls.load(Ordering::SeqCst), 0);
    assert!(h.rx.try_recv().is_err(), "no task was spawned");
}

#[tokio::test(start_paused = true)]
async fn augment_guard_allows_one_backend_call_at_a_time() {
    let mut h = Harness::new(FakeBackend::new());
    h.state.topic_input = "X".into();
    h.dispatch(Message::SubmitTopic);
    h.pump_until(|s| s.loading_state == LoadingState::Success).await;

    h.dispatch(Message::GenerateMindMap);
    assert!(h.state.augment.is_pending());
    // Second trigger while pending is rejected at the update boundary
    h.dispatch(Message::GenerateMindMap);

    h.pump_until(|s| s.augment == AugmentState::Ready).await;

    assert_eq!(h.backend.mind_map_calls.load(Ordering::SeqCst), 1);
    let image = h.state.course.as_ref().unwrap().mind_map_image.as_deref();
    assert!(image.unwrap().starts_with("data:image/png;base64,"));
    // The history snapshot is not retroactively augmented
    assert!(h.state.history.get(0).unwrap().mind_map_image.is_none());
}

#[tokio::test(start_paused = true)]
async fn augment_failure_is_transient_and_retriable() {
    let mut backend = FakeBackend::new();
    backend.fail_mind_map = true;
    let mut h = Harness::new(backend);

    h.state.topic_input = "X".into();
    h.dispatch(Message::SubmitTopic);
    h.pump_until(|s| s.loading_state == LoadingState::Success).await;

    h.dispatch(Message::GenerateMindMap);
    h.pump_until(|s| s.augment == AugmentState::Failed).await;

    assert!(h.state.course.as_ref().unwrap().mind_map_image.is_none());
    assert_eq!(h.state.loading_state, LoadingState::Success);
    assert!(h.state.notice.is_some());

    // A retry starts a fresh backend call
    h.dispatch(Message::GenerateMindMap);
    assert!(h.state.augment.is_pending());
    h.pump_until(|s| s.augment == AugmentState::Failed).await;
    assert_eq!(h.backend.mind_map_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn selecting_history_restores_a_course_without_the_backend() {
    let mut h = Harness::new(FakeBackend::new());

    for topic in ["Wine Tasting", "Game Theory"] {
        h.state.topic_input = topic.into();
        h.dispatch(Message::SubmitTopic);
        h.pump_until(|s| {
            s.loading_state == LoadingState::Success
                && s.course.as_ref().is_some_and(|c| c.topic == topic)
        })
        .await;
    }
    let calls_before = h.backend.course_calls.load(Ordering::SeqCst);

    // "Wine Tasting" sits at history index 1
    h.dispatch(Message::LoadHistory(1));

    assert_eq!(h.state.course.as_ref().unwrap().topic, "Wine Tasting");
    assert_eq!(h.state.topic_input, "Wine Tasting");
    assert_eq!(h.state.navigator.index(), 0);
    assert_eq!(h.state.loading_state, LoadingState::Success);
    assert_eq!(h.backend.course_calls.load(Ordering::SeqCst), calls_before);
}
