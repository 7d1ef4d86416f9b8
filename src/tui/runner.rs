//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::app::message::Message;
use crate::app::state::AppState;
use crate::app::{actions, handler, signals};
use crate::common::prelude::*;
use crate::gemini::CourseBackend;
use crate::i18n::Language;

use super::{event, render, terminal};

/// Run the TUI application
pub async fn run(
    initial_topic: Option<String>,
    language: Language,
    backend: Arc<dyn CourseBackend>,
) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Initialize terminal
    let mut term = ratatui::init();

    let mut state = AppState::new(language);

    // Unified message channel: signal handler and background tasks feed it
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx.clone());

    // A topic passed on the command line is submitted immediately
    if let Some(topic) = initial_topic {
        state.topic_input = topic;
        process_message(&mut state, Message::SubmitTopic, &msg_tx, &backend);
    }

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, backend);

    // Restore terminal
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    backend: Arc<dyn CourseBackend>,
) -> Result<()> {
    while !state.should_quit() {
        // Drain messages from background tasks (non-blocking)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, &backend);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, &backend);
        }
    }

    Ok(())
}

/// Run one message (and any follow-ups) through the TEA update cycle,
/// dispatching resulting actions to the task spawner.
pub fn process_message(
    state: &mut AppState,
    msg: Message,
    msg_tx: &mpsc::Sender<Message>,
    backend: &Arc<dyn CourseBackend>,
) {
    let mut current = Some(msg);
    while let Some(msg) = current.take() {
        let result = handler::update(state, msg);
        if let Some(action) = result.action {
            actions::handle_action(action, msg_tx.clone(), backend.clone());
        }
        current = result.message;
    }
}
