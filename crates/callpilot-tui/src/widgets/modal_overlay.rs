//! Shared modal overlay utilities.
//!
//! Centering, background dimming and the drop shadow used by the purchase
//! and SIP trunk dialogs and the header popups.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::Palette;

/// Center a fixed-size rect within an area, clamped to the area.
///
/// ```
/// use ratatui::layout::Rect;
/// use callpilot_tui::widgets::modal_overlay::centered_rect;
///
/// let area = Rect::new(0, 0, 80, 24);
/// assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Rect of `width` x `height` hanging below `anchor`, right-aligned to it
/// and clamped into `bounds`.
pub fn dropdown_rect(width: u16, height: u16, anchor: Rect, bounds: Rect) -> Rect {
    let w = width.min(bounds.width);
    let right = anchor.right().min(bounds.right());
    let x = right.saturating_sub(w).max(bounds.x);
    let y = anchor.bottom().min(bounds.bottom());
    let h = height.min(bounds.bottom().saturating_sub(y));
    Rect::new(x, y, w, h)
}

/// Dim every cell in `area` to simulate a translucent backdrop.
pub fn dim_background(buf: &mut Buffer, area: Rect, palette: &Palette) {
    let dim_style = Style::default().fg(palette.text_muted).bg(palette.background);

    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// 1-cell shadow to the right of and below `modal_rect`.
pub fn render_shadow(buf: &mut Buffer, modal_rect: Rect, palette: &Palette) {
    let shadow_style = Style::default().fg(palette.shadow).bg(palette.shadow);

    let right_x = modal_rect.right();
    for y in modal_rect.y.saturating_add(1)..modal_rect.bottom().saturating_add(1) {
        if let Some(cell) = buf.cell_mut((right_x, y)) {
            cell.set_char(' ').set_style(shadow_style);
        }
    }

    let bottom_y = modal_rect.bottom();
    for x in modal_rect.x.saturating_add(1)..modal_rect.right().saturating_add(1) {
        if let Some(cell) = buf.cell_mut((x, bottom_y)) {
            cell.set_char(' ').set_style(shadow_style);
        }
    }
}

/// Dim the backdrop, clear the modal rect and draw its shadow.
pub fn prepare_modal(buf: &mut Buffer, backdrop: Rect, modal_rect: Rect, palette: &Palette) {
    dim_background(buf, backdrop, palette);
    render_shadow(buf, modal_rect, palette);
    Clear.render(modal_rect, buf);
}
