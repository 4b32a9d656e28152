//! Detail column for the selected call

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use callpilot_app::Playback;
use callpilot_core::{CallRecord, Speaker, TRAJECTORY_SAMPLES};

use super::player::{AudioPlayer, PLAYER_HEIGHT};
use crate::theme::{styles, Palette};
use crate::widgets::bars::{render_bar, to_half_blocks};

const ANALYSIS_HEIGHT: u16 = 7;

pub struct CallDetails<'a> {
    call: &'a CallRecord,
    playback: &'a Playback,
    palette: &'a Palette,
}

impl<'a> CallDetails<'a> {
    pub fn new(call: &'a CallRecord, playback: &'a Playback, palette: &'a Palette) -> Self {
        Self {
            call,
            playback,
            palette,
        }
    }

    fn summary_lines(&self) -> Vec<Line<'a>> {
        let p = self.palette;
        let call = self.call;
        let mut lines = vec![
            Line::from(Span::styled(call.ai_summary.as_str(), styles::text_primary(p))),
            Line::from(""),
            Line::from(Span::styled("Asosiy fikrlar:", styles::text_secondary(p))),
        ];

        let mut chips = Vec::new();
        for point in &call.key_points {
            chips.push(Span::styled(format!("[{point}]"), styles::accent(p)));
            chips.push(Span::raw(" "));
        }
        lines.push(Line::from(chips));

        if !call.action_items.is_empty() {
            lines.push(Line::from(Span::styled(
                "Keyingi qadamlar:",
                styles::text_secondary(p),
            )));
            for item in &call.action_items {
                lines.push(Line::from(vec![
                    Span::styled("→ ", Style::default().fg(p.status_green)),
                    Span::styled(item.as_str(), styles::text_primary(p)),
                ]));
            }
        }
        lines
    }

    /// Rows the summary card needs at `width`, borders included
    fn summary_height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(2).max(1) as usize;
        let wrapped = self.call.ai_summary.width().div_ceil(inner) + 1;
        let actions = if self.call.action_items.is_empty() {
            0
        } else {
            1 + self.call.action_items.len()
        };
        (2 + wrapped + 3 + actions) as u16
    }

    fn render_sentiment(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let call = self.call;
        let block = styles::card_block(p, "Hissiyot tahlili");
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height < 3 {
            return;
        }

        let score = Line::from(vec![
            Span::styled(
                format!(" {}", call.sentiment.label()),
                styles::sentiment_badge(p, call.sentiment),
            ),
            Span::styled(format!("  {}", call.sentiment_score), styles::title(p)),
        ]);
        buf.set_line(inner.x, inner.y, &score, inner.width);

        let chart = Rect::new(
            inner.x + 1,
            inner.y + 1,
            inner.width.saturating_sub(2),
            inner.height - 2,
        );
        let slot = chart.width / TRAJECTORY_SAMPLES as u16;
        if slot > 0 {
            let bar_width = slot.saturating_sub(1).max(1);
            for (i, sample) in call.sentiment_trajectory.iter().enumerate() {
                let height = to_half_blocks(f64::from(sample.value()), 100.0, chart.height);
                render_bar(
                    buf,
                    chart.x + i as u16 * slot,
                    bar_width,
                    chart.bottom() - 1,
                    chart.y,
                    height,
                    styles::trajectory_color(p, *sample),
                );
            }
        }

        let (start, end) = call.trajectory_bounds();
        let bounds = Line::from(vec![
            Span::styled(format!(" Boshlang'ich: {start}"), styles::text_muted(p)),
            Span::styled(format!("  Yakuniy: {end}"), styles::text_muted(p)),
        ]);
        buf.set_line(inner.x, inner.bottom() - 1, &bounds, inner.width);
    }

    fn render_technical(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let call = self.call;
        let row = |label: &'static str, value: String| {
            Line::from(vec![
                Span::styled(format!(" {label:<12}"), styles::text_secondary(p)),
                Span::styled(value, styles::text_primary(p)),
            ])
        };
        let lines = vec![
            row("Javob vaqti", format!("{}s", call.latency)),
            row("Xarajat", format!("${:.2}", call.cost)),
            row("Sana", format!("{} {}", call.date, call.time)),
            row("Davomiylik", call.duration.to_string()),
        ];
        Paragraph::new(lines)
            .block(styles::card_block(p, "Texnik ma'lumotlar"))
            .render(area, buf);
    }

    fn render_transcript(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let mut lines = Vec::new();
        for entry in &self.call.transcript {
            let speaker_style = match entry.speaker {
                Speaker::Ai => styles::accent_bold(p),
                Speaker::Customer => styles::title(p),
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", entry.time), styles::text_muted(p)),
                Span::styled(entry.speaker.label(), speaker_style),
            ]));
            lines.push(Line::from(Span::styled(
                entry.text.as_str(),
                styles::text_secondary(p),
            )));
        }
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(styles::card_block(p, "To'liq transkripsiya"))
            .render(area, buf);
    }
}

impl Widget for CallDetails<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let [player, summary, analysis, transcript] = Layout::vertical([
            Constraint::Length(PLAYER_HEIGHT),
            Constraint::Length(self.summary_height(area.width)),
            Constraint::Length(ANALYSIS_HEIGHT),
            Constraint::Min(0),
        ])
        .areas(area);

        AudioPlayer::new(self.call, self.playback, p).render(player, buf);

        Paragraph::new(self.summary_lines())
            .wrap(Wrap { trim: true })
            .block(styles::card_block(p, "AI Xulosa"))
            .render(summary, buf);

        let [sentiment, technical] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(analysis);
        self.render_sentiment(sentiment, buf);
        self.render_technical(technical, buf);

        if transcript.height > 2 {
            self.render_transcript(transcript, buf);
        }
    }
}
