//! Section navigation sidebar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use callpilot_app::Section;

use crate::theme::{styles, Palette};

pub struct Sidebar<'a> {
    active: Section,
    palette: &'a Palette,
}

impl<'a> Sidebar<'a> {
    pub fn new(active: Section, palette: &'a Palette) -> Self {
        Self { active, palette }
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 {
            return;
        }
        let p = self.palette;
        let block = styles::glass_block(p, false);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let mut lines = vec![
            Line::from(Span::styled(" AI Call Center", styles::accent_bold(p))),
            Line::from(Span::styled(" aqlli muloqot", styles::text_muted(p))),
            Line::from(""),
        ];

        for section in Section::ALL {
            let label = format!(
                " {} {:<width$}",
                section.index() + 1,
                section.title(),
                width = inner.width.saturating_sub(3) as usize
            );
            let style = if section == self.active {
                styles::focused_selected(p)
            } else {
                styles::text_secondary(p)
            };
            lines.push(Line::from(Span::styled(label, style)));
        }

        Paragraph::new(lines).render(inner, buf);

        // Engine status pinned to the bottom
        if inner.height > 8 {
            let y = inner.bottom() - 2;
            let status = Line::from(vec![
                Span::styled(" ● ", Style::default().fg(p.status_green)),
                Span::styled("AI Engine", styles::text_secondary(p)),
            ]);
            buf.set_line(inner.x, y, &status, inner.width);
            let detail = Line::from(Span::styled("   98% Efficient", styles::text_muted(p)));
            buf.set_line(inner.x, y + 1, &detail, inner.width);
        }
    }
}
