//! Shutdown signals routed through the message channel
//!
//! SIGINT/SIGTERM become a `Message::Quit` like any other event, so the
//! runner's normal exit path handles terminal restoration.

use tokio::sync::mpsc;

use super::message::Message;
use crate::common::prelude::*;

pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};

            let (mut sigint, mut sigterm) = match (
                signal(SignalKind::interrupt()),
                signal(SignalKind::terminate()),
            ) {
                (Ok(int), Ok(term)) => (int, term),
                _ => {
                    error!("Could not register shutdown signal handlers");
                    return;
                }
            };

            tokio::select! {
                _ = sigint.recv() => info!("SIGINT received, shutting down"),
                _ = sigterm.recv() => info!("SIGTERM received, shutting down"),
            }
        }

        #[cfg(not(unix))]
        {
            if tokio::signal::ctrl_c().await.is_err() {
                error!("Could not register Ctrl+C handler");
                return;
            }
            info!("Ctrl+C received, shutting down");
        }

        let _ = tx.send(Message::Quit).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn quit_is_only_sent_on_a_signal() {
        let (tx, mut rx) = mpsc::channel(8);
        spawn_signal_handler(tx);

        // Give the handler time to register; no signal arrives, so the
        // channel must stay empty
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(rx.try_recv().is_err());
    }
}
