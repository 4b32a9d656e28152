//! Login screen

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use callpilot_app::{LoginField, SessionGate};

use super::modal_overlay::{centered_rect, render_shadow};
use super::text::mask;
use crate::theme::{styles, Palette};

const CARD_WIDTH: u16 = 56;
const CARD_HEIGHT: u16 = 22;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner glyph for a UI tick count
pub fn spinner_glyph(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Login card centered on the screen
pub struct LoginView<'a> {
    gate: &'a SessionGate,
    spinner_frame: usize,
    palette: &'a Palette,
}

impl<'a> LoginView<'a> {
    pub fn new(gate: &'a SessionGate, palette: &'a Palette) -> Self {
        Self {
            gate,
            spinner_frame: 0,
            palette,
        }
    }

    pub fn spinner_frame(mut self, frame: usize) -> Self {
        self.spinner_frame = frame;
        self
    }
}

impl Widget for LoginView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        Block::default()
            .style(Style::default().bg(p.background))
            .render(area, buf);

        let card = centered_rect(CARD_WIDTH, CARD_HEIGHT, area);
        render_shadow(buf, card, p);
        let block = styles::glass_block(p, true);
        let inner = block.inner(card);
        block.render(card, buf);
        if inner.height < 3 {
            return;
        }

        let [brand, greeting, email, password, button, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .areas(inner.inner(Margin::new(2, 0)));

        Paragraph::new(vec![
            Line::from(Span::styled("AI Call Center", styles::accent_bold(p))),
            Line::from(Span::styled("Dispatcher Platform", styles::text_muted(p))),
        ])
        .alignment(Alignment::Center)
        .render(brand, buf);

        Paragraph::new(vec![
            Line::from(Span::styled("Xush kelibsiz! 👋", styles::title(p))),
            Line::from(Span::styled(
                "Davom etish uchun hisobingizga kiring",
                styles::text_secondary(p),
            )),
        ])
        .render(greeting, buf);

        let form = &self.gate.form;
        let masked = mask(&form.password);
        self.render_field(
            "Email yoki Login",
            &form.email,
            "admin@company.com",
            form.focused == Some(LoginField::Email),
            email,
            buf,
        );
        self.render_field(
            "Parol",
            &masked,
            "••••••••",
            form.focused == Some(LoginField::Password),
            password,
            buf,
        );

        let label = if self.gate.is_authenticating() {
            format!("{} Kirilmoqda...", spinner_glyph(self.spinner_frame))
        } else {
            "Kirish  →".to_string()
        };
        let button_block = styles::glass_block(p, false).style(styles::focused_selected(p));
        let button_inner = button_block.inner(button);
        button_block.render(button, buf);
        Paragraph::new(Line::from(Span::styled(label, styles::focused_selected(p))))
            .alignment(Alignment::Center)
            .render(button_inner, buf);

        Paragraph::new(vec![
            Line::from(Span::styled("Parolni unutdingizmi?", styles::accent(p))),
            Line::from(""),
            Line::from(vec![
                Span::styled("Enter", styles::keybinding(p)),
                Span::styled(" kirish  ", styles::text_muted(p)),
                Span::styled("Tab", styles::keybinding(p)),
                Span::styled(" maydon  ", styles::text_muted(p)),
                Span::styled("Esc", styles::keybinding(p)),
                Span::styled(" chiqish", styles::text_muted(p)),
            ]),
        ])
        .alignment(Alignment::Center)
        .render(footer, buf);
    }
}

impl LoginView<'_> {
    /// Label row plus a bordered single-line input
    fn render_field(
        &self,
        label: &str,
        value: &str,
        placeholder: &str,
        focused: bool,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let p = self.palette;
        if area.height < 2 {
            return;
        }
        let label_area = Rect { height: 1, ..area };
        Paragraph::new(Span::styled(label, styles::text_secondary(p))).render(label_area, buf);

        let input_area = Rect {
            y: area.y + 1,
            height: area.height - 1,
            ..area
        };
        let block = styles::glass_block(p, focused);
        let inner = block.inner(input_area);
        block.render(input_area, buf);

        let mut spans = if value.is_empty() {
            vec![Span::styled(placeholder, styles::text_muted(p))]
        } else {
            vec![Span::styled(value, styles::text_primary(p))]
        };
        if focused {
            spans.push(Span::styled("▏", styles::accent(p)));
        }
        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_state, TestTerminal};
    use crate::theme::palette::LIGHT;

    #[test]
    fn test_login_shows_branding_and_fields() {
        let state = create_test_state();
        let mut term = TestTerminal::new();
        term.render_widget(LoginView::new(&state.gate, &LIGHT), term.area());

        assert!(term.buffer_contains("AI Call Center"));
        assert!(term.buffer_contains("Email yoki Login"));
        assert!(term.buffer_contains("Parol"));
        assert!(term.buffer_contains("admin@company.com"));
        assert!(term.buffer_contains("Kirish"));
    }

    #[test]
    fn test_password_is_masked() {
        let mut state = create_test_state();
        state.gate.form.email = "ops@callpilot.uz".into();
        state.gate.form.password = "hunter2".into();

        let mut term = TestTerminal::new();
        term.render_widget(LoginView::new(&state.gate, &LIGHT), term.area());

        assert!(term.buffer_contains("ops@callpilot.uz"));
        assert!(term.buffer_contains("•••••••"));
        assert!(!term.buffer_contains("hunter2"));
    }

    #[test]
    fn test_authenticating_shows_spinner() {
        let mut state = create_test_state();
        state.gate.submit();

        let mut term = TestTerminal::new();
        term.render_widget(
            LoginView::new(&state.gate, &LIGHT).spinner_frame(3),
            term.area(),
        );

        assert!(term.buffer_contains("⠸ Kirilmoqda..."));
    }

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner_glyph(0), spinner_glyph(10));
        assert_ne!(spinner_glyph(0), spinner_glyph(1));
    }

    #[test]
    fn test_login_renders_in_compact_terminal() {
        let state = create_test_state();
        let mut term = TestTerminal::compact();
        term.render_widget(LoginView::new(&state.gate, &LIGHT), term.area());
        assert!(term.buffer_contains("AI Call Center"));
    }
}
