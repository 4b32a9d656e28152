//! SIP trunk connection dialog

use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use callpilot_app::numbers::SipForm;
use callpilot_app::SipField;

use crate::theme::{styles, Palette};
use crate::widgets::modal_overlay::{centered_rect, prepare_modal};
use crate::widgets::text::mask;

const DIALOG_WIDTH: u16 = 56;
const DIALOG_HEIGHT: u16 = 19;

const FIELDS: [SipField; 4] = [
    SipField::Host,
    SipField::Port,
    SipField::Username,
    SipField::Password,
];

pub struct SipDialog<'a> {
    form: &'a SipForm,
    palette: &'a Palette,
}

impl<'a> SipDialog<'a> {
    pub fn new(form: &'a SipForm, palette: &'a Palette) -> Self {
        Self { form, palette }
    }

    fn field_lines(&self, field: SipField, width: usize) -> [Line<'static>; 2] {
        let p = self.palette;
        let focused = self.form.focus == field;
        let raw = self.form.field(field);
        let value = if field == SipField::Password {
            mask(raw)
        } else {
            raw.to_string()
        };

        let label_style = if focused {
            styles::accent_bold(p)
        } else {
            styles::text_secondary(p)
        };
        let label = Line::from(Span::styled(field.label(), label_style));

        let mut spans = vec![Span::styled(
            if focused { "› " } else { "  " },
            styles::accent(p),
        )];
        if value.is_empty() {
            spans.push(Span::styled(field.placeholder(), styles::text_muted(p)));
        } else {
            spans.push(Span::styled(value, styles::text_primary(p)));
        }
        if focused {
            spans.push(Span::styled("▏", styles::accent(p)));
        }
        let mut input = Line::from(spans);
        let pad = width.saturating_sub(input.width());
        input.push_span(Span::raw(" ".repeat(pad)));
        let input = if focused {
            input.style(Style::default().bg(p.card_bg))
        } else {
            input
        };

        [label, input]
    }
}

impl Widget for SipDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let modal = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
        prepare_modal(buf, area, modal, p);

        let block = styles::modal_block(p, "SIP Trunk ulanish");
        let inner = block.inner(modal);
        block.render(modal, buf);
        let width = inner.width.saturating_sub(2) as usize;

        let mut lines = vec![
            Line::from(Span::styled(
                "Mavjud raqamingizni ulang",
                styles::text_secondary(p),
            )),
            Line::from(""),
        ];
        for field in FIELDS {
            lines.extend(self.field_lines(field, width));
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::styled(" Bekor qilish ", styles::text_secondary(p)),
            Span::styled("(Esc)", styles::keybinding(p)),
            Span::raw("   "),
            Span::styled(" Ulash ", styles::focused_selected(p)),
            Span::styled("(Enter)", styles::keybinding(p)),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Barcha ma'lumotlar shifrlangan holda saqlanadi",
            styles::text_muted(p),
        )));

        Paragraph::new(lines).render(inner.inner(Margin::new(1, 0)), buf);
    }
}
