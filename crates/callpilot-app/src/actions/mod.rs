//! Action handlers: UpdateAction dispatch and background task spawning

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

use crate::message::Message;
use crate::UpdateAction;

pub mod playback;
pub use playback::PlaybackTicker;

/// Execute an action, spawning background work where needed
pub fn handle_action(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    ticker: &mut PlaybackTicker,
    shutdown_rx: watch::Receiver<bool>,
) {
    match action {
        UpdateAction::BeginLogin { delay } => {
            spawn_login_delay(delay, msg_tx, shutdown_rx);
        }

        UpdateAction::StartPlayback { generation, period } => {
            ticker.start(generation, period, msg_tx);
        }

        UpdateAction::StopPlayback => {
            ticker.stop();
        }
    }
}

/// Send `LoginCompleted` after `delay`, unless shutdown comes first.
pub(crate) fn spawn_login_delay(
    delay: Duration,
    msg_tx: mpsc::Sender<Message>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    tokio::spawn(async move {
        tokio::select! {
            _ = tokio::time::sleep(delay) => {
                if msg_tx.send(Message::LoginCompleted).await.is_err() {
                    warn!("Login completed but the message channel is closed");
                }
            }
            _ = shutdown_rx.changed() => {
                debug!("Login delay abandoned on shutdown");
            }
        }
    });
}
