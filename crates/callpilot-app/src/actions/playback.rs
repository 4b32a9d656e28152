//! Playback ticker: the single recurring timer behind the simulated player.
//!
//! [`PlaybackTicker`] owns at most one spawned task. Starting a ticker
//! cancels and aborts the previous one first, so rapid re-selection can
//! never leave two tasks ticking. Each task tags its messages with the
//! generation it was started for; the call-log state drops mismatches.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::message::Message;

struct ActiveTicker {
    generation: u64,
    cancel_token: CancellationToken,
    handle: JoinHandle<()>,
}

#[derive(Default)]
pub struct PlaybackTicker {
    active: Option<ActiveTicker>,
}

impl PlaybackTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any running ticker with one that sends
    /// `Message::PlaybackTick { generation }` every `period`.
    ///
    /// The first tick fires one full period after the call.
    pub fn start(&mut self, generation: u64, period: Duration, msg_tx: mpsc::Sender<Message>) {
        self.stop();

        let cancel_token = CancellationToken::new();
        let token = cancel_token.clone();
        let handle = tokio::spawn(tick_loop(generation, period, msg_tx, token));

        debug!("Playback ticker started (generation {}, {:?})", generation, period);
        self.active = Some(ActiveTicker {
            generation,
            cancel_token,
            handle,
        });
    }

    /// Cancel the running ticker. Safe to call when idle.
    pub fn stop(&mut self) {
        if let Some(active) = self.active.take() {
            active.cancel_token.cancel();
            active.handle.abort();
            debug!("Playback ticker stopped (generation {})", active.generation);
        }
    }

    pub fn is_running(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|a| !a.handle.is_finished())
    }

    /// Generation of the current ticker, if one is active.
    pub fn generation(&self) -> Option<u64> {
        self.active.as_ref().map(|a| a.generation)
    }
}

impl Drop for PlaybackTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for PlaybackTicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackTicker")
            .field("generation", &self.generation())
            .finish()
    }
}

async fn tick_loop(
    generation: u64,
    period: Duration,
    msg_tx: mpsc::Sender<Message>,
    cancel_token: CancellationToken,
) {
    let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = cancel_token.cancelled() => {
                trace!("Playback ticker {} cancelled", generation);
                break;
            }
            _ = ticker.tick() => {
                if msg_tx.send(Message::PlaybackTick { generation }).await.is_err() {
                    // Engine is gone
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_after_each_period() {
        let (tx, mut rx) = mpsc::channel(16);
        let mut ticker = PlaybackTicker::new();
        ticker.start(1, Duration::from_secs(1), tx);

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(rx.try_recv().unwrap(), Message::PlaybackTick { generation: 1 });

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(rx.try_recv().unwrap(), Message::PlaybackTick { generation: 1 });
        assert!(ticker.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_replaces_previous_ticker() {
        let (tx, mut rx) = mpsc::channel(64);
        let mut ticker = PlaybackTicker::new();
        ticker.start(1, Duration::from_secs(1), tx.clone());
        ticker.start(2, Duration::from_secs(1), tx.clone());
        ticker.start(3, Duration::from_secs(1), tx);
        assert_eq!(ticker.generation(), Some(3));

        tokio::time::sleep(Duration::from_millis(5500)).await;

        let mut received = Vec::new();
        while let Ok(msg) = rx.try_recv() {
            received.push(msg);
        }
        assert_eq!(received.len(), 5);
        assert!(received
            .iter()
            .all(|m| *m == Message::PlaybackTick { generation: 3 }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_silences_ticker() {
        let (tx, mut rx) = mpsc::channel(16);
        let mut ticker = PlaybackTicker::new();
        ticker.start(7, Duration::from_secs(1), tx);
        ticker.stop();
        ticker.stop();

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(rx.try_recv().is_err());
        assert!(!ticker.is_running());
        assert_eq!(ticker.generation(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_ticker() {
        let (tx, mut rx) = mpsc::channel(16);
        {
            let mut ticker = PlaybackTicker::new();
            ticker.start(1, Duration::from_secs(1), tx);
        }
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_task_exits_when_receiver_dropped() {
        let (tx, rx) = mpsc::channel(1);
        let mut ticker = PlaybackTicker::new();
        ticker.start(1, Duration::from_secs(1), tx);
        drop(rx);

        tokio::time::sleep(Duration::from_millis(1100)).await;
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
        assert!(!ticker.is_running());
    }
}
