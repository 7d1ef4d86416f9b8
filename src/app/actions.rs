//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every background task reports back exclusively through the message
//! channel; the update loop stays the single writer of application state.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use base64::Engine;
use tokio::sync::mpsc;

use crate::app::handler::UpdateAction;
use crate::app::message::Message;
use crate::common::prelude::*;
use crate::config;
use crate::gemini::CourseBackend;
use crate::i18n::Language;

/// Cadence of the decorative progress-stage ticks
pub const PROGRESS_TICK_INTERVAL: Duration = Duration::from_millis(1200);

/// Cosmetic pause between real-data arrival and the visible content swap
pub const SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Execute an action by spawning a background task
pub fn handle_action(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    backend: Arc<dyn CourseBackend>,
) {
    match action {
        UpdateAction::StartGeneration {
            seq,
            topic,
            language,
        } => {
            spawn_generation(msg_tx, backend, seq, topic, language);
        }

        UpdateAction::StartMindMap { topic, language } => {
            spawn_mind_map(msg_tx, backend, topic, language);
        }

        UpdateAction::SaveMindMap { topic, data_uri } => {
            spawn_mind_map_export(msg_tx, topic, data_uri);
        }

        UpdateAction::PersistLanguage { language } => {
            spawn_language_persist(language);
        }
    }
}

/// Spawn the generation request together with its progress simulator.
///
/// One task owns both: the 1200 ms stage ticker and the real backend call
/// race inside a `select!`, so the ticker structurally cannot outlive the
/// request. On success the terminal stage is reported first, then the settle
/// delay elapses before the course itself is delivered.
fn spawn_generation(
    msg_tx: mpsc::Sender<Message>,
    backend: Arc<dyn CourseBackend>,
    seq: u64,
    topic: String,
    language: Language,
) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(PROGRESS_TICK_INTERVAL);
        // The first tick resolves immediately; the handler already armed
        // stage 1 at submit time
        ticker.tick().await;

        let request = backend.generate_course(&topic, language);
        tokio::pin!(request);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if msg_tx.send(Message::ProgressTick { seq }).await.is_err() {
                        return;
                    }
                }
                result = &mut request => {
                    match result {
                        Ok(course) => {
                            let _ = msg_tx.send(Message::ProgressComplete { seq }).await;
                            tokio::time::sleep(SETTLE_DELAY).await;
                            let _ = msg_tx
                                .send(Message::CourseReady {
                                    seq,
                                    course: Box::new(course),
                                })
                                .await;
                        }
                        Err(e) => {
                            // Detail is logged only; the UI shows a fixed
                            // localized message
                            warn!("Course generation failed (seq {}): {}", seq, e);
                            let _ = msg_tx.send(Message::CourseFailed { seq }).await;
                        }
                    }
                    return;
                }
            }
        }
    });
}

fn spawn_mind_map(
    msg_tx: mpsc::Sender<Message>,
    backend: Arc<dyn CourseBackend>,
    topic: String,
    language: Language,
) {
    tokio::spawn(async move {
        match backend.generate_mind_map(&topic, language).await {
            Ok(data_uri) => {
                let _ = msg_tx.send(Message::MindMapReady { topic, data_uri }).await;
            }
            Err(e) => {
                warn!("Mind map generation failed for {:?}: {}", topic, e);
                let _ = msg_tx.send(Message::MindMapFailed { topic }).await;
            }
        }
    });
}

/// Decode the data URI and write `<topic>-mindmap.png` to the working dir
fn spawn_mind_map_export(msg_tx: mpsc::Sender<Message>, topic: String, data_uri: String) {
    tokio::spawn(async move {
        let msg = match decode_data_uri(&data_uri) {
            Ok(bytes) => {
                let path = export_path(&topic);
                match tokio::fs::write(&path, bytes).await {
                    Ok(()) => {
                        info!("Mind map saved to {}", path.display());
                        Message::MindMapSaved { path }
                    }
                    Err(e) => Message::MindMapSaveFailed {
                        message: e.to_string(),
                    },
                }
            }
            Err(e) => Message::MindMapSaveFailed {
                message: e.to_string(),
            },
        };
        let _ = msg_tx.send(msg).await;
    });
}

fn spawn_language_persist(language: Language) {
    tokio::task::spawn_blocking(move || {
        if let Err(e) = config::save_language(language) {
            warn!("Failed to persist language preference: {}", e);
        }
    });
}

/// Extract the base64 payload from a `data:<mime>;base64,<payload>` URI
fn decode_data_uri(data_uri: &str) -> Result<Vec<u8>> {
    let payload = data_uri
        .split_once(";base64,")
        .map(|(_, payload)| payload)
        .ok_or_else(|| Error::backend("not a base64 data URI"))?;
    base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| Error::backend(format!("invalid base64 image payload: {e}")))
}

fn export_path(topic: &str) -> PathBuf {
    let stem: String = topic
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();
    PathBuf::from(format!("{}-mindmap.png", stem.trim_matches('-')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_data_uri() {
        let bytes = decode_data_uri("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn test_decode_rejects_plain_strings() {
        assert!(decode_data_uri("hello").is_err());
        assert!(decode_data_uri("data:image/png;base64,!!!").is_err());
    }

    #[test]
    fn test_export_path_sanitizes_topic() {
        assert_eq!(
            export_path("Game Theory"),
            PathBuf::from("Game-Theory-mindmap.png")
        );
        assert_eq!(export_path("Web3 入门"), PathBuf::from("Web3-入门-mindmap.png"));
    }
}
