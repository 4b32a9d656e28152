//! callpilot-app - Application state and orchestration for callpilot
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: per-component view state owned by [`AppState`], a [`Message`]
//! enum, a pure `update` function, and the [`Engine`] that dispatches the
//! resulting actions (login delay, playback ticker).

pub mod actions;
pub mod call_log;
pub mod config;
pub mod engine;
pub mod handler;
pub mod header;
pub mod input_key;
pub mod message;
pub mod numbers;
pub mod process;
pub mod session;
pub mod shell;
pub mod signals;
pub mod state;

// Re-export primary types
pub use actions::PlaybackTicker;
pub use call_log::{CallLogState, Playback, PlaybackSpeed, PlaybackStatus};
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use numbers::{NumbersState, NumbersStats, SipField};
pub use session::{AuthStatus, LoginField, SessionGate};
pub use shell::{Section, TimeRange};
pub use state::{AppState, UiMode};
