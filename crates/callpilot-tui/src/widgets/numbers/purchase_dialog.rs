//! "Yangi raqam sotib olish" dialog

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use callpilot_app::NumbersState;
use callpilot_core::{AvailableNumber, Country, NumberType};

use crate::theme::{styles, Palette};
use crate::widgets::modal_overlay::{centered_rect, prepare_modal};
use crate::widgets::text::format_money;

const DIALOG_WIDTH: u16 = 64;

pub struct PurchaseDialog<'a> {
    countries: &'a [Country],
    offers: &'a [AvailableNumber],
    state: &'a NumbersState,
    palette: &'a Palette,
}

impl<'a> PurchaseDialog<'a> {
    pub fn new(
        countries: &'a [Country],
        offers: &'a [AvailableNumber],
        state: &'a NumbersState,
        palette: &'a Palette,
    ) -> Self {
        Self {
            countries,
            offers,
            state,
            palette,
        }
    }

    fn height(&self) -> u16 {
        // subtitle, three section labels, type row, button, four spacers, borders
        (self.countries.len() + self.offers.len()) as u16 + 12
    }

    fn section(&self, label: &'static str) -> Line<'static> {
        Line::from(Span::styled(label, styles::title(self.palette)))
    }

    fn country_lines(&self) -> Vec<Line<'static>> {
        let p = self.palette;
        self.countries
            .iter()
            .map(|c| {
                let text = format!(" {} {:<22}{:>6} ta mavjud ", c.flag, c.name, c.available);
                if c.code == self.state.selected_country {
                    Line::from(Span::styled(text, styles::focused_selected(p)))
                } else {
                    Line::from(Span::styled(text, styles::text_secondary(p)))
                }
            })
            .collect()
    }

    fn type_line(&self) -> Line<'static> {
        let p = self.palette;
        let mut spans = Vec::new();
        for ty in NumberType::PURCHASE_ORDER {
            let style = if ty == self.state.selected_number_type {
                styles::focused_selected(p)
            } else {
                styles::text_secondary(p)
            };
            spans.push(Span::styled(format!(" {} ", ty.purchase_label()), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    fn offer_lines(&self) -> Vec<Line<'static>> {
        let p = self.palette;
        self.offers
            .iter()
            .enumerate()
            .map(|(i, offer)| {
                let text = format!(
                    " {:<20}{:<11}{:>8}/oy   Ulanish: {} ",
                    offer.number,
                    offer.number_type.label(),
                    format_money(offer.price),
                    format_money(offer.setup)
                );
                if i == self.state.offer_cursor {
                    Line::from(Span::styled(text, styles::focused_selected(p)))
                } else {
                    Line::from(Span::styled(text, styles::text_primary(p)))
                }
            })
            .collect()
    }
}

impl Widget for PurchaseDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let modal = centered_rect(DIALOG_WIDTH, self.height(), area);
        prepare_modal(buf, area, modal, p);

        let block = styles::modal_block(p, "Yangi raqam sotib olish");
        let inner = block.inner(modal);
        block.render(modal, buf);

        let mut lines = vec![
            Line::from(Span::styled(
                "Mamlakat va raqam turini tanlang",
                styles::text_secondary(p),
            )),
            Line::from(""),
            self.section("Mamlakat tanlash"),
        ];
        lines.extend(self.country_lines());
        lines.push(Line::from(""));
        lines.push(self.section("Raqam turi"));
        lines.push(self.type_line());
        lines.push(Line::from(""));
        lines.push(self.section("Mavjud raqamlar"));
        lines.extend(self.offer_lines());
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(" Sotib olish ", styles::focused_selected(p)),
            Span::styled("  Enter", styles::keybinding(p)),
            Span::styled(" tasdiqlash  ", styles::text_muted(p)),
            Span::styled("Esc", styles::keybinding(p)),
            Span::styled(" yopish", styles::text_muted(p)),
        ]));

        Paragraph::new(lines).render(inner, buf);
    }
}
