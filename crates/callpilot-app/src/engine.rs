//! Engine - orchestration state for the TUI runner
//!
//! The Engine owns the TEA state (settings included), the message channel,
//! the shutdown signal and the playback ticker. Frontends feed it messages
//! and render `engine.state`.

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use callpilot_core::prelude::*;
use callpilot_core::SeedData;

use crate::actions::PlaybackTicker;
use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Capacity of the unified message channel
pub const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for callpilot.
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, timers).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Send `true` to tell background tasks to stop
    pub shutdown_tx: watch::Sender<bool>,
    pub shutdown_rx: watch::Receiver<bool>,

    ticker: PlaybackTicker,
    signal_task: Option<JoinHandle<()>>,
}

impl Engine {
    /// Load the seed named by the settings (or the built-in one) and build
    /// an engine around it. Must be called inside a tokio runtime.
    pub fn from_settings(settings: Settings) -> Result<Self> {
        let seed = load_seed(&settings)?;
        Ok(Self::new(seed, settings))
    }

    /// Create an engine with a signal handler attached.
    pub fn new(seed: SeedData, settings: Settings) -> Self {
        let mut engine = Self::headless(seed, settings);
        engine.signal_task = Some(signals::spawn_signal_handler(engine.msg_tx.clone()));
        engine
    }

    /// Create an engine without OS signal handling.
    pub fn headless(seed: SeedData, settings: Settings) -> Self {
        let state = AppState::with_settings(seed, settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Self {
            state,
            msg_tx,
            msg_rx,
            shutdown_tx,
            shutdown_rx,
            ticker: PlaybackTicker::new(),
            signal_task: None,
        }
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &mut self.ticker,
            &self.shutdown_rx,
        );
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Whether a playback ticker task is alive.
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_running()
    }

    /// Stop timers and background tasks.
    pub fn shutdown(&mut self) {
        info!("Engine shutting down");
        self.ticker.stop();
        let _ = self.shutdown_tx.send(true);
        if let Some(task) = self.signal_task.take() {
            task.abort();
        }
    }
}

/// Seed named by `data.seed_path`, or the built-in fixture.
pub fn load_seed(settings: &Settings) -> Result<SeedData> {
    match settings.data.seed_path() {
        Some(path) => SeedData::from_path(&path)
            .with_context(|| format!("Failed to load seed from {}", path.display())),
        None => SeedData::builtin().context("Built-in seed is invalid"),
    }
}
