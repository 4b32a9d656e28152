//! Header bar widgets
//!
//! The main header shows breadcrumbs for the active section on the left and
//! the language, theme, notification and profile toggles on the right. The
//! two header menus render as dropdowns below it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use callpilot_app::header::{HeaderState, PROFILE_EMAIL, PROFILE_NAME, PROFILE_ROLE};
use callpilot_app::Section;

use super::modal_overlay::{dropdown_rect, render_shadow};
use super::text::truncate;
use crate::theme::{styles, Palette};

/// Main header: `Home › <section>` plus toggles
pub struct MainHeader<'a> {
    section: Section,
    header: &'a HeaderState,
    dark_mode: bool,
    palette: &'a Palette,
}

impl<'a> MainHeader<'a> {
    pub fn new(
        section: Section,
        header: &'a HeaderState,
        dark_mode: bool,
        palette: &'a Palette,
    ) -> Self {
        Self {
            section,
            header,
            dark_mode,
            palette,
        }
    }

    fn toggles(&self) -> Line<'static> {
        let p = self.palette;
        let key = |k: &'static str| {
            vec![
                Span::styled("[", styles::text_muted(p)),
                Span::styled(k, styles::keybinding(p)),
                Span::styled("] ", styles::text_muted(p)),
            ]
        };

        let mut spans = Vec::new();
        spans.push(Span::styled(
            self.header.language.to_uppercase(),
            styles::text_secondary(p),
        ));
        spans.push(Span::raw("  "));

        spans.extend(key("t"));
        spans.push(Span::styled(
            if self.dark_mode { "☾ Dark" } else { "☀ Light" },
            styles::text_secondary(p),
        ));
        spans.push(Span::raw("  "));

        spans.extend(key("n"));
        spans.push(Span::styled("Bell", styles::text_secondary(p)));
        let unread = self.header.unread_count();
        if unread > 0 {
            spans.push(Span::styled(
                format!(" ●{unread}"),
                Style::default()
                    .fg(p.status_red)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        spans.push(Span::raw("  "));

        spans.extend(key("p"));
        spans.push(Span::styled(PROFILE_NAME, styles::text_primary(p)));
        spans.push(Span::styled(
            format!(" ({PROFILE_ROLE})"),
            styles::text_muted(p),
        ));
        spans.push(Span::raw(" "));
        Line::from(spans)
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, false);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let breadcrumbs = Line::from(vec![
            Span::raw(" "),
            Span::styled("Home", styles::text_muted(p)),
            Span::styled(" › ", styles::text_muted(p)),
            Span::styled(self.section.title(), styles::accent_bold(p)),
        ]);
        let toggles = self.toggles();

        let left_width = breadcrumbs.width() as u16;
        let right_width = toggles.width() as u16;

        buf.set_line(inner.x, inner.y, &breadcrumbs, inner.width);
        if left_width + right_width + 2 <= inner.width {
            let x = inner.right() - right_width;
            buf.set_line(x, inner.y, &toggles, right_width);
        }
    }
}

/// Notifications dropdown
pub struct NotificationsMenu<'a> {
    header: &'a HeaderState,
    palette: &'a Palette,
}

impl<'a> NotificationsMenu<'a> {
    pub const WIDTH: u16 = 44;

    pub fn new(header: &'a HeaderState, palette: &'a Palette) -> Self {
        Self { header, palette }
    }

    /// Dropdown rect below the header
    pub fn area(&self, header: Rect, screen: Rect) -> Rect {
        let height = self.header.notifications.len() as u16 + 4;
        dropdown_rect(Self::WIDTH, height, header, screen)
    }
}

impl Widget for NotificationsMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        render_shadow(buf, area, p);
        ratatui::widgets::Clear.render(area, buf);
        let block = styles::modal_block(p, "Notifications");
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width < 6 {
            return;
        }

        let mut lines: Vec<Line> = self
            .header
            .notifications
            .iter()
            .map(|n| {
                let marker = if n.unread {
                    Span::styled(" ● ", styles::accent(p))
                } else {
                    Span::raw("   ")
                };
                let title_style = if n.unread {
                    styles::title(p)
                } else {
                    styles::text_secondary(p)
                };
                let time = format!("  {}", n.time);
                let room = (inner.width as usize).saturating_sub(3 + time.len());
                Line::from(vec![
                    marker,
                    Span::styled(truncate(&n.title, room), title_style),
                    Span::styled(time, styles::text_muted(p)),
                ])
            })
            .collect();

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(" [", styles::text_muted(p)),
            Span::styled("m", styles::keybinding(p)),
            Span::styled("] Mark all as read", styles::accent(p)),
        ]));

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Profile dropdown
pub struct ProfileMenu<'a> {
    palette: &'a Palette,
}

impl<'a> ProfileMenu<'a> {
    pub const WIDTH: u16 = 30;
    pub const HEIGHT: u16 = 10;

    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    pub fn area(&self, header: Rect, screen: Rect) -> Rect {
        dropdown_rect(Self::WIDTH, Self::HEIGHT, header, screen)
    }
}

impl Widget for ProfileMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        render_shadow(buf, area, p);
        ratatui::widgets::Clear.render(area, buf);
        let block = styles::modal_block(p, PROFILE_NAME);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let lines = vec![
            Line::from(Span::styled(format!(" {PROFILE_ROLE}"), styles::text_secondary(p))),
            Line::from(Span::styled(format!(" {PROFILE_EMAIL}"), styles::text_muted(p))),
            Line::from(Span::styled(
                "─".repeat(inner.width as usize),
                styles::text_muted(p),
            )),
            Line::from(Span::styled("     Profile", styles::text_primary(p))),
            Line::from(Span::styled("     Settings", styles::text_primary(p))),
            Line::from(vec![
                Span::styled(" [", styles::text_muted(p)),
                Span::styled("o", styles::keybinding(p)),
                Span::styled("] ", styles::text_muted(p)),
                Span::styled("Sign Out", Style::default().fg(p.status_red)),
            ]),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}
