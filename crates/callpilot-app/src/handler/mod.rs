//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes

pub(crate) mod keys;
pub(crate) mod update;


use std::time::Duration;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Send `LoginCompleted` after the simulated login delay
    BeginLogin { delay: Duration },

    /// Replace any running playback ticker with one tagged `generation`
    StartPlayback { generation: u64, period: Duration },

    /// Cancel the playback ticker, if any
    StopPlayback,
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

    /// `StopPlayback` when `stop` is true, otherwise nothing.
    pub(crate) fn stop_playback_if(stop: bool) -> Self {
        if stop {
            Self::action(UpdateAction::StopPlayback)
        } else {
            Self::none()
        }
    }
}
