//! Simulated audio player card

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use callpilot_app::{Playback, PlaybackStatus};
use callpilot_core::{CallRecord, WAVEFORM_SAMPLES};

use crate::theme::{styles, Palette};
use crate::widgets::bars::{render_bar, to_half_blocks};

/// Card height including borders
pub const PLAYER_HEIGHT: u16 = 8;

/// Rows the waveform occupies
const WAVEFORM_ROWS: u16 = 3;

fn status_glyph(status: PlaybackStatus) -> &'static str {
    match status {
        PlaybackStatus::Playing => "▶",
        PlaybackStatus::Paused => "⏸",
        PlaybackStatus::Stopped => "■",
    }
}

/// Number of waveform bars already played at `progress`
pub fn played_bars(progress: f64) -> usize {
    ((progress * WAVEFORM_SAMPLES as f64).floor() as usize).min(WAVEFORM_SAMPLES)
}

pub struct AudioPlayer<'a> {
    call: &'a CallRecord,
    playback: &'a Playback,
    palette: &'a Palette,
}

impl<'a> AudioPlayer<'a> {
    pub fn new(call: &'a CallRecord, playback: &'a Playback, palette: &'a Palette) -> Self {
        Self {
            call,
            playback,
            palette,
        }
    }

    fn render_waveform(&self, area: Rect, progress: f64, buf: &mut Buffer) {
        let p = self.palette;
        let slot = area.width / WAVEFORM_SAMPLES as u16;
        if slot == 0 {
            return;
        }
        let bar_width = slot.saturating_sub(1).max(1);
        let played = played_bars(progress);
        let bottom_y = area.bottom() - 1;

        for (i, sample) in self.call.waveform.iter().enumerate() {
            let x = area.x + i as u16 * slot;
            let color = if i < played { p.accent } else { p.border_dim };
            let height = to_half_blocks(f64::from(sample.value()), 100.0, area.height);
            render_bar(buf, x, bar_width, bottom_y, area.y, height, color);
        }
    }

    fn render_progress(&self, area: Rect, progress: f64, buf: &mut Buffer) {
        let p = self.palette;
        let width = area.width as usize;
        let filled = ((progress * width as f64).round() as usize).min(width);
        let line = Line::from(vec![
            Span::styled("━".repeat(filled), styles::accent(p)),
            Span::styled("─".repeat(width - filled), Style::default().fg(p.border_dim)),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

impl Widget for AudioPlayer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::card_block(p, "Audio Player");
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height < WAVEFORM_ROWS + 3 || inner.width < 10 {
            return;
        }

        let call = self.call;
        let pb = self.playback;
        let total = call.total_seconds();
        let progress = pb.progress(total);

        let title = Line::from(vec![
            Span::styled(format!(" {}", call.customer), styles::title(p)),
            Span::styled(format!("  {}", call.purpose), styles::text_secondary(p)),
        ]);
        buf.set_line(inner.x, inner.y, &title, inner.width);

        let wave = Rect::new(inner.x + 1, inner.y + 1, inner.width - 2, WAVEFORM_ROWS);
        self.render_waveform(wave, progress, buf);

        let bar = Rect::new(inner.x + 1, wave.bottom(), inner.width - 2, 1);
        self.render_progress(bar, progress, buf);

        let status_style = if pb.is_playing() {
            styles::accent_bold(p)
        } else {
            styles::text_secondary(p)
        };
        let controls = Line::from(vec![
            Span::styled(format!(" {} ", status_glyph(pb.status)), status_style),
            Span::styled(pb.clock(), styles::text_primary(p)),
            Span::styled(format!(" / {}", call.duration), styles::text_muted(p)),
            Span::raw("   "),
            Span::styled("[s] ", styles::keybinding(p)),
            Span::styled(pb.speed.label(), styles::accent_bold(p)),
        ]);
        buf.set_line(inner.x, bar.bottom(), &controls, inner.width);
    }
}
