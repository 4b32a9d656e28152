//! Numbers & Connectivity section
//!
//! Summary cards, the searchable table of owned numbers and the two dialogs
//! (number purchase, SIP trunk) that open over it.

mod purchase_dialog;
mod sip_dialog;

pub use purchase_dialog::PurchaseDialog;
pub use sip_dialog::SipDialog;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use callpilot_app::{NumbersState, NumbersStats};
use callpilot_core::PhoneNumberRecord;

use super::call_log::EMPTY_RESULT;
use super::search_input::SearchInput;
use super::text::{format_money, group_thousands, truncate};
use crate::theme::{styles, Palette};

// ── Column widths (characters) ────────────────────────────────────────────────

const COL_NUMBER: u16 = 20;
const COL_COUNTRY: u16 = 18;
const COL_TYPE: u16 = 11;
const COL_STATUS: u16 = 8;
const COL_CALLS: u16 = 13;
// AI Agent column gets the remaining space.

const SEARCH_PLACEHOLDER: &str = "Raqam, mamlakat yoki bot nomi boyicha qidirish...";

pub struct NumbersView<'a> {
    numbers: &'a [PhoneNumberRecord],
    state: &'a NumbersState,
    stats: NumbersStats,
    palette: &'a Palette,
}

impl<'a> NumbersView<'a> {
    pub fn new(
        numbers: &'a [PhoneNumberRecord],
        state: &'a NumbersState,
        stats: NumbersStats,
        palette: &'a Palette,
    ) -> Self {
        Self {
            numbers,
            state,
            stats,
            palette,
        }
    }

    fn render_title(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        Paragraph::new(vec![
            Line::from(Span::styled(" Numbers & Connectivity", styles::title(p))),
            Line::from(Span::styled(
                " Telefon raqamlarini boshqarish va AI agentlarga ulash",
                styles::text_secondary(p),
            )),
        ])
        .render(area, buf);

        let actions = Line::from(vec![
            Span::styled("[i] ", styles::keybinding(p)),
            Span::styled("SIP Trunk ulash", styles::text_secondary(p)),
            Span::raw("  "),
            Span::styled(" [b] Raqam sotib olish ", styles::focused_selected(p)),
            Span::raw(" "),
        ]);
        let width = actions.width() as u16;
        if width + 40 <= area.width {
            buf.set_line(area.right() - width, area.y, &actions, width);
        }
    }

    fn render_stats(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let cards = [
            ("Faol raqamlar", self.stats.count.to_string()),
            ("Jami qongiroqlar", group_thousands(self.stats.total_calls)),
            ("Mamlakatlar", self.stats.countries.to_string()),
            ("Oylik xarajat", format_money(self.stats.monthly_cost)),
        ];
        let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
        for ((label, value), column) in cards.into_iter().zip(columns.iter()) {
            Paragraph::new(vec![
                Line::from(Span::styled(label, styles::text_secondary(p))),
                Line::from(Span::styled(value, styles::title(p))),
            ])
            .block(styles::glass_block(p, false))
            .render(*column, buf);
        }
    }
}

impl Widget for NumbersView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [title, stats, search, table] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .areas(area);

        self.render_title(title, buf);
        self.render_stats(stats, buf);
        SearchInput::new(&self.state.search, self.palette)
            .placeholder(SEARCH_PLACEHOLDER)
            .editing(self.state.search_editing)
            .counts(self.state.visible_indices().len(), self.numbers.len())
            .render(search, buf);
        NumbersTable::new(self.numbers, self.state, self.palette).render(table, buf);
    }
}

/// Owned numbers, one row each, with a detail line for the cursor row
pub struct NumbersTable<'a> {
    numbers: &'a [PhoneNumberRecord],
    state: &'a NumbersState,
    palette: &'a Palette,
}

impl<'a> NumbersTable<'a> {
    pub fn new(
        numbers: &'a [PhoneNumberRecord],
        state: &'a NumbersState,
        palette: &'a Palette,
    ) -> Self {
        Self {
            numbers,
            state,
            palette,
        }
    }

    fn render_column_headers(&self, area: Rect, buf: &mut Buffer) {
        let style = styles::text_muted(self.palette);
        let mut x = area.x + 1;
        for (label, width) in [
            ("Raqam", COL_NUMBER),
            ("Mamlakat", COL_COUNTRY),
            ("Turi", COL_TYPE),
            ("Holat", COL_STATUS),
            ("Qongiroqlar", COL_CALLS),
            ("AI Agent", 0),
        ] {
            if x >= area.right() {
                break;
            }
            buf.set_stringn(x, area.y, label, (area.right() - x) as usize, style);
            x += width;
        }
    }

    fn render_row(&self, number: &PhoneNumberRecord, is_cursor: bool, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let (base, status) = if is_cursor {
            let s = styles::focused_selected(p);
            (s, s)
        } else {
            (
                styles::text_primary(p),
                styles::number_status(p, number.status),
            )
        };

        if is_cursor {
            buf.set_style(area, base);
        }

        let agent_width = area
            .width
            .saturating_sub(1 + COL_NUMBER + COL_COUNTRY + COL_TYPE + COL_STATUS + COL_CALLS);
        let cells: [(String, u16, Style); 6] = [
            (number.number.clone(), COL_NUMBER, base),
            (
                format!("{} {}", number.country_code, number.country),
                COL_COUNTRY,
                base,
            ),
            (number.number_type.label().to_string(), COL_TYPE, base),
            (number.status.label().to_string(), COL_STATUS, status),
            (group_thousands(number.total_calls), COL_CALLS, base),
            (number.assigned_to.clone(), agent_width, base),
        ];

        let mut x = area.x + 1;
        for (text, width, style) in cells {
            if x >= area.right() || width == 0 {
                break;
            }
            let room = (width.saturating_sub(1) as usize).min((area.right() - x) as usize);
            buf.set_string(x, area.y, truncate(&text, room), style);
            x += width;
        }
    }

    fn detail_line(&self, number: &PhoneNumberRecord) -> Line<'static> {
        let p = self.palette;
        Line::from(vec![
            Span::styled(" Sotib olingan: ", styles::text_muted(p)),
            Span::styled(number.purchase_date.to_string(), styles::text_secondary(p)),
            Span::styled("  Caller ID: ", styles::text_muted(p)),
            Span::styled(number.caller_id.clone(), styles::text_secondary(p)),
            Span::styled("  Yo'naltirish: ", styles::text_muted(p)),
            Span::styled(number.routing.clone(), styles::text_secondary(p)),
            Span::styled(
                format!("  {}/oy", format_money(number.monthly_fee)),
                styles::accent(p),
            ),
        ])
    }
}

impl Widget for NumbersTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, false);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height < 2 || inner.width == 0 {
            return;
        }

        self.render_column_headers(Rect { height: 1, ..inner }, buf);

        let rows = Rect {
            y: inner.y + 1,
            height: inner.height - 1,
            ..inner
        };

        if self.state.is_empty_result() {
            let y = rows.y + rows.height / 2;
            Paragraph::new(Span::styled(EMPTY_RESULT, styles::text_muted(p)))
                .alignment(Alignment::Center)
                .render(Rect::new(rows.x, y, rows.width, 1), buf);
            return;
        }

        // One row is kept for the cursor's detail line
        let capacity = rows.height.saturating_sub(1).max(1) as usize;
        let offset = if self.state.cursor < capacity {
            0
        } else {
            self.state.cursor + 1 - capacity
        };

        let mut y = rows.y;
        for (index, number) in self
            .state
            .visible_numbers(self.numbers)
            .enumerate()
            .skip(offset)
            .take(capacity)
        {
            let is_cursor = index == self.state.cursor;
            self.render_row(number, is_cursor, Rect { y, height: 1, ..rows }, buf);
            y += 1;
        }

        if let Some(number) = self
            .state
            .visible_numbers(self.numbers)
            .nth(self.state.cursor)
        {
            if y < rows.bottom() {
                buf.set_line(rows.x, rows.bottom() - 1, &self.detail_line(number), rows.width);
            }
        }
    }
}
