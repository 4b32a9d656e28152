//! Call-log browser state and the simulated playback clock.
//!
//! Playback is a three-state machine scoped to the selected call:
//!
//! ```text
//!   Stopped ──toggle──▶ Playing ──toggle──▶ Paused
//!      ▲                  │  ▲                 │
//!      └──── finished ────┘  └──── toggle ─────┘
//! ```
//!
//! Every transition into `Playing` bumps a generation counter. Ticks carry
//! the generation of the ticker that produced them, so a tick queued by a
//! replaced ticker can never advance a newer playback session.

use callpilot_core::{filtered_indices, format_clock, CallId, CallRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Playback rate multiplier, cycled 1x → 1.5x → 2x → 1x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackSpeed {
    #[default]
    Normal,
    OneAndHalf,
    Double,
}

impl PlaybackSpeed {
    pub fn multiplier(&self) -> f64 {
        match self {
            PlaybackSpeed::Normal => 1.0,
            PlaybackSpeed::OneAndHalf => 1.5,
            PlaybackSpeed::Double => 2.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlaybackSpeed::Normal => "1x",
            PlaybackSpeed::OneAndHalf => "1.5x",
            PlaybackSpeed::Double => "2x",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            PlaybackSpeed::Normal => PlaybackSpeed::OneAndHalf,
            PlaybackSpeed::OneAndHalf => PlaybackSpeed::Double,
            PlaybackSpeed::Double => PlaybackSpeed::Normal,
        }
    }
}

/// What a play/pause toggle did, so the caller can start or stop the ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackChange {
    Started { generation: u64 },
    Paused,
    Unchanged,
}

/// Result of applying one ticker period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Stale generation or not playing
    Ignored,
    Advanced,
    /// Reached the end of the call; playback is stopped and rewound
    Finished,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Playback {
    pub status: PlaybackStatus,
    /// Seconds into the call, always within `0..=duration`
    pub elapsed: f64,
    pub speed: PlaybackSpeed,
    pub generation: u64,
}

impl Playback {
    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }

    pub fn toggle(&mut self) -> PlaybackChange {
        match self.status {
            PlaybackStatus::Stopped | PlaybackStatus::Paused => {
                self.status = PlaybackStatus::Playing;
                self.generation += 1;
                PlaybackChange::Started {
                    generation: self.generation,
                }
            }
            PlaybackStatus::Playing => {
                self.status = PlaybackStatus::Paused;
                PlaybackChange::Paused
            }
        }
    }

    pub fn change_speed(&mut self) {
        self.speed = self.speed.next();
    }

    /// Advance by one period. Reaching or passing `total_seconds` stops
    /// playback and rewinds to zero.
    pub fn tick(&mut self, generation: u64, total_seconds: u32) -> TickOutcome {
        if !self.is_playing() || generation != self.generation {
            return TickOutcome::Ignored;
        }
        let next = self.elapsed + self.speed.multiplier();
        if next >= f64::from(total_seconds) {
            self.status = PlaybackStatus::Stopped;
            self.elapsed = 0.0;
            TickOutcome::Finished
        } else {
            self.elapsed = next;
            TickOutcome::Advanced
        }
    }

    /// Force `Stopped` at zero, keeping speed and generation.
    /// Returns true if playback was running.
    pub fn rewind(&mut self) -> bool {
        let was_playing = self.is_playing();
        self.status = PlaybackStatus::Stopped;
        self.elapsed = 0.0;
        was_playing
    }

    pub fn clock(&self) -> String {
        format_clock(self.elapsed)
    }

    /// Fraction of the call played, in `0.0..=1.0`.
    pub fn progress(&self, total_seconds: u32) -> f64 {
        if total_seconds == 0 {
            return 0.0;
        }
        (self.elapsed / f64::from(total_seconds)).clamp(0.0, 1.0)
    }
}

/// Outcome of a selection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Already selected, or no such call
    Unchanged,
    Selected { was_playing: bool },
}

#[derive(Debug, Clone)]
pub struct CallLogState {
    pub filter: String,
    pub filter_editing: bool,
    visible: Vec<usize>,
    pub cursor: usize,
    pub selected: Option<CallId>,
    pub playback: Playback,
}

impl CallLogState {
    pub fn new(calls: &[CallRecord]) -> Self {
        Self {
            filter: String::new(),
            filter_editing: false,
            visible: (0..calls.len()).collect(),
            cursor: 0,
            selected: None,
            playback: Playback::default(),
        }
    }

    /// Reset to the initial state. The generation counter survives so ticks
    /// from the torn-down session stay stale. Returns true if playback was
    /// running.
    pub fn teardown(&mut self, calls: &[CallRecord]) -> bool {
        let was_playing = self.playback.is_playing();
        let generation = self.playback.generation;
        *self = Self::new(calls);
        self.playback.generation = generation;
        was_playing
    }

    // ─────────────────────────────────────────────────────────
    // Filtering
    // ─────────────────────────────────────────────────────────

    pub fn set_filter(&mut self, calls: &[CallRecord], text: String) {
        self.filter = text;
        self.visible = filtered_indices(calls, |c| c.matches(&self.filter));
        self.clamp_cursor();
    }

    /// Indices into the seeded call list, in seed order.
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    pub fn visible_calls<'a>(
        &'a self,
        calls: &'a [CallRecord],
    ) -> impl Iterator<Item = &'a CallRecord> + 'a {
        self.visible.iter().filter_map(move |&i| calls.get(i))
    }

    pub fn is_empty_result(&self) -> bool {
        self.visible.is_empty()
    }

    // ─────────────────────────────────────────────────────────
    // Cursor & Selection
    // ─────────────────────────────────────────────────────────

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.visible.len().saturating_sub(1));
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.visible.len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_call_id(&self, calls: &[CallRecord]) -> Option<CallId> {
        self.visible
            .get(self.cursor)
            .and_then(|&i| calls.get(i))
            .map(|c| c.id)
    }

    /// Point the selection at `id`. A different call always starts from
    /// `Stopped` at zero.
    pub fn select(&mut self, calls: &[CallRecord], id: CallId) -> SelectOutcome {
        if self.selected == Some(id) || !calls.iter().any(|c| c.id == id) {
            return SelectOutcome::Unchanged;
        }
        self.selected = Some(id);
        let was_playing = self.playback.rewind();
        if let Some(pos) = self
            .visible
            .iter()
            .position(|&i| calls.get(i).map(|c| c.id) == Some(id))
        {
            self.cursor = pos;
        }
        SelectOutcome::Selected { was_playing }
    }

    /// Drop the selection. Returns true if playback was running.
    pub fn deselect(&mut self) -> bool {
        self.selected = None;
        self.playback.rewind()
    }

    pub fn selected_call<'a>(&self, calls: &'a [CallRecord]) -> Option<&'a CallRecord> {
        let id = self.selected?;
        calls.iter().find(|c| c.id == id)
    }

    // ─────────────────────────────────────────────────────────
    // Playback
    // ─────────────────────────────────────────────────────────

    /// Play/pause the selected call. Does nothing without a selection.
    pub fn toggle_playback(&mut self) -> PlaybackChange {
        if self.selected.is_none() {
            return PlaybackChange::Unchanged;
        }
        self.playback.toggle()
    }

    pub fn change_speed(&mut self) {
        self.playback.change_speed();
    }

    pub fn tick(&mut self, calls: &[CallRecord], generation: u64) -> TickOutcome {
        match self.selected_call(calls).map(|c| c.total_seconds()) {
            Some(total) => self.playback.tick(generation, total),
            None => TickOutcome::Ignored,
        }
    }
}
