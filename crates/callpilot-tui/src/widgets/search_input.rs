//! Filter input bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{styles, Palette};

/// One-line filter bar: `/ query_` with a placeholder when empty
pub struct SearchInput<'a> {
    query: &'a str,
    placeholder: &'a str,
    /// Whether keystrokes currently go to the filter
    editing: bool,
    /// Visible/total counts shown after the query
    counts: Option<(usize, usize)>,
    palette: &'a Palette,
}

impl<'a> SearchInput<'a> {
    pub fn new(query: &'a str, palette: &'a Palette) -> Self {
        Self {
            query,
            placeholder: "Qidirish...",
            editing: false,
            counts: None,
            palette,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }

    pub fn counts(mut self, visible: usize, total: usize) -> Self {
        self.counts = Some((visible, total));
        self
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, self.editing);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let prompt_style = if self.editing {
            styles::accent_bold(p)
        } else {
            styles::text_muted(p)
        };
        let mut spans = vec![Span::styled(" / ", prompt_style)];

        if self.query.is_empty() && !self.editing {
            spans.push(Span::styled(self.placeholder, styles::text_muted(p)));
        } else {
            spans.push(Span::styled(self.query, styles::text_primary(p)));
        }

        if self.editing {
            spans.push(Span::styled("_", styles::accent(p)));
        }

        if let Some((visible, total)) = self.counts {
            if !self.query.is_empty() {
                let style = if visible == 0 {
                    Style::default().fg(p.status_red)
                } else {
                    Style::default().fg(p.status_green)
                };
                spans.push(Span::raw("  "));
                spans.push(Span::styled(format!("[{visible}/{total}]"), style));
            }
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::LIGHT;

    #[test]
    fn test_placeholder_when_empty() {
        let mut term = TestTerminal::with_size(40, 3);
        term.render_widget(SearchInput::new("", &LIGHT), term.area());
        assert!(term.buffer_contains("Qidirish..."));
    }

    #[test]
    fn test_editing_shows_cursor() {
        let mut term = TestTerminal::with_size(40, 3);
        term.render_widget(
            SearchInput::new("shik", &LIGHT).editing(true),
            term.area(),
        );
        assert!(term.buffer_contains("/ shik_"));
    }

    #[test]
    fn test_counts_shown_for_active_query() {
        let mut term = TestTerminal::with_size(40, 3);
        term.render_widget(
            SearchInput::new("zzz", &LIGHT).counts(0, 3),
            term.area(),
        );
        assert!(term.buffer_contains("[0/3]"));

        let mut term = TestTerminal::with_size(40, 3);
        term.render_widget(SearchInput::new("", &LIGHT).counts(3, 3), term.area());
        assert!(!term.buffer_contains("[3/3]"));
    }
}
