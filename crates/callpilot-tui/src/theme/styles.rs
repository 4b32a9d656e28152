//! Semantic style builders over the active palette.

use callpilot_core::{NumberStatus, Percent, Sentiment, Trend};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::Palette;

/// Trajectory samples above this are drawn green
pub const TRAJECTORY_HIGH: u8 = 60;
/// Trajectory samples below this are drawn red
pub const TRAJECTORY_LOW: u8 = 40;

// --- Text styles ---
pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text_primary)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

pub fn title(p: &Palette) -> Style {
    Style::default()
        .fg(p.text_primary)
        .add_modifier(Modifier::BOLD)
}

// --- Accent styles ---
pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

pub fn accent_bold(p: &Palette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

/// Keybinding hint inside `[x]`
pub fn keybinding(p: &Palette) -> Style {
    Style::default().fg(p.status_yellow)
}

/// Accent background - used for the focused row, tab or button
pub fn focused_selected(p: &Palette) -> Style {
    Style::default()
        .fg(p.contrast_fg)
        .bg(p.accent)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            p.border_active
        } else {
            p.border_dim
        }))
        .style(Style::default().bg(p.card_bg))
}

pub fn card_block<'a>(p: &Palette, title: &'a str) -> Block<'a> {
    glass_block(p, false).title(format!(" {title} ")).title_style(self::title(p))
}

pub fn modal_block<'a>(p: &Palette, title: &'a str) -> Block<'a> {
    Block::default()
        .title(format!(" {title} "))
        .title_style(self::title(p))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(p.border_active))
        .style(Style::default().bg(p.popup_bg))
}

// --- Domain mappings ---

pub fn sentiment_color(p: &Palette, sentiment: Sentiment) -> Color {
    match sentiment {
        Sentiment::Positive => p.status_green,
        Sentiment::Negative => p.status_red,
        Sentiment::Neutral => p.text_secondary,
    }
}

/// Badge style for a sentiment label
pub fn sentiment_badge(p: &Palette, sentiment: Sentiment) -> Style {
    Style::default()
        .fg(sentiment_color(p, sentiment))
        .add_modifier(Modifier::BOLD)
}

/// Bar color for one sentiment-trajectory sample
pub fn trajectory_color(p: &Palette, value: Percent) -> Color {
    let v = value.value();
    if v > TRAJECTORY_HIGH {
        p.status_green
    } else if v < TRAJECTORY_LOW {
        p.status_red
    } else {
        p.status_yellow
    }
}

pub fn trend_style(p: &Palette, trend: Trend) -> Style {
    Style::default().fg(match trend {
        Trend::Up => p.status_green,
        Trend::Down => p.status_red,
    })
}

pub fn number_status(p: &Palette, status: NumberStatus) -> Style {
    if status.is_active() {
        Style::default().fg(p.status_green)
    } else {
        Style::default().fg(p.text_muted)
    }
}
