//! Vertical bar rendering with half-block resolution.
//!
//! Shared by the dashboard charts, the call waveform and the sentiment
//! trajectory.

use ratatui::buffer::Buffer;
use ratatui::style::{Color, Style};

/// Scale `value` against `max` into half-block units for a chart `rows` tall.
pub fn to_half_blocks(value: f64, max: f64, rows: u16) -> u16 {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    let total = f64::from(rows) * 2.0;
    ((value / max) * total).round().min(total) as u16
}

/// Draw a bar `width` cells wide growing upward from `bottom_y`.
///
/// - `█` full row
/// - `▄` odd half at the top
///
/// Rows above `top_y` are clipped.
pub fn render_bar(
    buf: &mut Buffer,
    x: u16,
    width: u16,
    bottom_y: u16,
    top_y: u16,
    half_blocks: u16,
    color: Color,
) {
    if half_blocks == 0 {
        return;
    }
    let style = Style::default().fg(color);
    let full_rows = half_blocks / 2;

    for dx in 0..width {
        for row in 0..full_rows {
            let y = bottom_y.saturating_sub(row);
            if y < top_y {
                break;
            }
            if let Some(cell) = buf.cell_mut((x + dx, y)) {
                cell.set_char('█').set_style(style);
            }
        }
        if half_blocks % 2 == 1 {
            let y = bottom_y.saturating_sub(full_rows);
            if y >= top_y {
                if let Some(cell) = buf.cell_mut((x + dx, y)) {
                    cell.set_char('▄').set_style(style);
                }
            }
        }
    }
}
