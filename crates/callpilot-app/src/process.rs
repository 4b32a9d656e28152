//! Message processing
//!
//! Runs messages through the TEA update function, following up on chained
//! messages and dispatching any resulting actions.

use tokio::sync::{mpsc, watch};

use crate::actions::{handle_action, PlaybackTicker};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    ticker: &mut PlaybackTicker,
    shutdown_rx: &watch::Receiver<bool>,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), ticker, shutdown_rx.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
