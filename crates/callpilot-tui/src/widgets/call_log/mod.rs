//! Call log section
//!
//! The left column holds the filter bar and the call list. Once a call is
//! selected the right column shows its player, AI analysis and transcript.

mod details;
mod player;

pub use details::CallDetails;
pub use player::AudioPlayer;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use callpilot_app::CallLogState;
use callpilot_core::CallRecord;

use super::search_input::SearchInput;
use super::text::truncate;
use crate::layout::call_log_columns;
use crate::theme::{styles, Palette};

/// Rows per call entry in the list
const ITEM_HEIGHT: u16 = 3;

/// Shown when the filter hides every call
pub const EMPTY_RESULT: &str = "Hech narsa topilmadi";

/// Whole call-log section
pub struct CallLogView<'a> {
    calls: &'a [CallRecord],
    state: &'a CallLogState,
    palette: &'a Palette,
}

impl<'a> CallLogView<'a> {
    pub fn new(calls: &'a [CallRecord], state: &'a CallLogState, palette: &'a Palette) -> Self {
        Self {
            calls,
            state,
            palette,
        }
    }
}

impl Widget for CallLogView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let selected = self.state.selected_call(self.calls);
        let (list_area, detail_area) = call_log_columns(area, selected.is_some());

        let [search, list] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(list_area);

        SearchInput::new(&self.state.filter, p)
            .editing(self.state.filter_editing)
            .counts(self.state.visible_indices().len(), self.calls.len())
            .render(search, buf);

        CallList::new(self.calls, self.state, p).render(list, buf);

        if let (Some(call), Some(detail_area)) = (selected, detail_area) {
            CallDetails::new(call, &self.state.playback, p).render(detail_area, buf);
        }
    }
}

/// Filtered list of calls with the cursor row highlighted
pub struct CallList<'a> {
    calls: &'a [CallRecord],
    state: &'a CallLogState,
    palette: &'a Palette,
}

impl<'a> CallList<'a> {
    pub fn new(calls: &'a [CallRecord], state: &'a CallLogState, palette: &'a Palette) -> Self {
        Self {
            calls,
            state,
            palette,
        }
    }

    /// First visible entry, keeping the cursor on screen
    fn scroll_offset(&self, per_page: usize) -> usize {
        if per_page == 0 || self.state.cursor < per_page {
            0
        } else {
            self.state.cursor + 1 - per_page
        }
    }

    fn item_lines(&self, call: &CallRecord, is_cursor: bool, width: usize) -> [Line<'static>; 3] {
        let p = self.palette;
        let is_selected = self.state.selected == Some(call.id);

        let marker = if is_selected { " ▶ " } else { "   " };
        let badge = call.sentiment.label();
        let room = width.saturating_sub(marker.width() + badge.width() + 1);
        let customer = truncate(&call.customer, room);
        let pad = room.saturating_sub(customer.width());

        let head = if is_cursor {
            let text = format!("{marker}{customer}{}{badge} ", " ".repeat(pad));
            Line::from(Span::styled(text, styles::focused_selected(p)))
        } else {
            Line::from(vec![
                Span::styled(marker, styles::accent(p)),
                Span::styled(customer, styles::text_primary(p)),
                Span::raw(" ".repeat(pad)),
                Span::styled(badge, styles::sentiment_badge(p, call.sentiment)),
            ])
        };

        let purpose = Line::from(Span::styled(
            format!("   {}", truncate(&call.purpose, width.saturating_sub(3))),
            styles::text_secondary(p),
        ));
        let meta = Line::from(Span::styled(
            format!(
                "   {} {} • {}",
                call.date,
                call.time.format("%H:%M"),
                call.duration
            ),
            styles::text_muted(p),
        ));

        [head, purpose, meta]
    }
}

impl Widget for CallList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::card_block(p, "Qo'ng'iroqlar jurnali");
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.state.is_empty_result() {
            let y = inner.y + inner.height / 2;
            Paragraph::new(Span::styled(EMPTY_RESULT, styles::text_muted(p)))
                .alignment(Alignment::Center)
                .render(Rect::new(inner.x, y, inner.width, 1), buf);
            return;
        }

        let per_page = (inner.height / ITEM_HEIGHT) as usize;
        let offset = self.scroll_offset(per_page);

        for (row, (index, call)) in self
            .state
            .visible_calls(self.calls)
            .enumerate()
            .skip(offset)
            .take(per_page.max(1))
            .enumerate()
        {
            let y = inner.y + row as u16 * ITEM_HEIGHT;
            let lines = self.item_lines(call, index == self.state.cursor, inner.width as usize);
            for (dy, line) in lines.iter().enumerate() {
                let y = y + dy as u16;
                if y >= inner.bottom() {
                    break;
                }
                buf.set_line(inner.x, y, line, inner.width);
            }
        }
    }
}

#[cfg(test)]
mod tests;
