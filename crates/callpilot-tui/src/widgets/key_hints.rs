//! One-line key hint footer

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use callpilot_app::{Section, UiMode};

use crate::theme::{styles, Palette};

/// Hints for the current mode, as `(key, label)` pairs
pub fn hints_for(mode: UiMode, section: Section) -> &'static [(&'static str, &'static str)] {
    match mode {
        UiMode::Login => &[("Enter", "kirish"), ("Tab", "maydon"), ("Esc", "chiqish")],
        UiMode::Authenticating => &[("Esc", "chiqish")],
        UiMode::FilterInput => &[
            ("Enter/Esc", "tayyor"),
            ("Backspace", "o'chirish"),
            ("Ctrl+U", "tozalash"),
        ],
        UiMode::NotificationsMenu => &[("m", "hammasini o'qilgan"), ("Esc", "yopish")],
        UiMode::ProfileMenu => &[("o", "chiqish"), ("Esc", "yopish")],
        UiMode::PurchaseDialog => &[
            ("←/→", "mamlakat"),
            ("Tab", "raqam turi"),
            ("↑/↓", "raqam"),
            ("Enter", "sotib olish"),
            ("Esc", "yopish"),
        ],
        UiMode::SipDialog => &[
            ("Tab", "maydon"),
            ("Enter", "ulash"),
            ("Esc", "bekor qilish"),
        ],
        UiMode::Normal => match section {
            Section::Dashboard => &[
                ("1-3", "bo'lim"),
                ("←/→", "davr"),
                ("t", "mavzu"),
                ("n", "bildirishnomalar"),
                ("p", "profil"),
                ("q", "chiqish"),
            ],
            Section::Numbers => &[
                ("1-3", "bo'lim"),
                ("/", "qidirish"),
                ("↑/↓", "raqam"),
                ("b", "sotib olish"),
                ("i", "SIP trunk"),
                ("q", "chiqish"),
            ],
            Section::CallLogs => &[
                ("1-3", "bo'lim"),
                ("/", "qidirish"),
                ("↑/↓", "tanlash"),
                ("Enter", "ochish"),
                ("Space", "ijro/pauza"),
                ("s", "tezlik"),
                ("Esc", "orqaga"),
                ("q", "chiqish"),
            ],
        },
    }
}

pub struct KeyHints<'a> {
    mode: UiMode,
    section: Section,
    palette: &'a Palette,
}

impl<'a> KeyHints<'a> {
    pub fn new(mode: UiMode, section: Section, palette: &'a Palette) -> Self {
        Self {
            mode,
            section,
            palette,
        }
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let mut spans = vec![Span::raw(" ")];
        for (key, label) in hints_for(self.mode, self.section) {
            spans.push(Span::styled(*key, styles::keybinding(p)));
            spans.push(Span::styled(format!(" {label}  "), styles::text_muted(p)));
        }
        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(p.background))
            .render(area, buf);
    }
}
