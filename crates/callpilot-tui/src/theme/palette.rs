//! Color palettes for the light and dark dashboard themes.
//!
//! Widgets never pick colors directly; they receive the active `Palette`
//! chosen from the shell's dark-mode flag.

use ratatui::style::Color;

/// One complete set of theme colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub background: Color,
    pub card_bg: Color,
    pub popup_bg: Color,

    // --- Borders ---
    pub border_dim: Color,
    pub border_active: Color,

    // --- Accent ---
    pub accent: Color,
    /// Foreground drawn on top of an accent background
    pub contrast_fg: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // --- Status ---
    pub status_green: Color,
    pub status_red: Color,
    pub status_yellow: Color,
    pub status_blue: Color,

    // --- Charts ---
    pub incoming: Color,
    pub outgoing: Color,

    // --- Effects ---
    pub shadow: Color,
}

pub static LIGHT: Palette = Palette {
    background: Color::Rgb(241, 245, 249),
    card_bg: Color::Rgb(255, 255, 255),
    popup_bg: Color::Rgb(248, 250, 252),
    border_dim: Color::Rgb(203, 213, 225),
    border_active: Color::Rgb(37, 99, 235),
    accent: Color::Rgb(37, 99, 235),
    contrast_fg: Color::Rgb(255, 255, 255),
    text_primary: Color::Rgb(15, 23, 42),
    text_secondary: Color::Rgb(71, 85, 105),
    text_muted: Color::Rgb(148, 163, 184),
    status_green: Color::Rgb(22, 163, 74),
    status_red: Color::Rgb(220, 38, 38),
    status_yellow: Color::Rgb(202, 138, 4),
    status_blue: Color::Rgb(2, 132, 199),
    incoming: Color::Rgb(59, 130, 246),
    outgoing: Color::Rgb(16, 185, 129),
    shadow: Color::Rgb(148, 163, 184),
};

pub static DARK: Palette = Palette {
    background: Color::Rgb(10, 12, 16),
    card_bg: Color::Rgb(18, 21, 28),
    popup_bg: Color::Rgb(28, 33, 43),
    border_dim: Color::Rgb(45, 51, 59),
    border_active: Color::Rgb(88, 166, 255),
    accent: Color::Rgb(88, 166, 255),
    contrast_fg: Color::Rgb(10, 12, 16),
    text_primary: Color::Rgb(201, 209, 217),
    text_secondary: Color::Rgb(125, 133, 144),
    text_muted: Color::Rgb(72, 79, 88),
    status_green: Color::Rgb(16, 185, 129),
    status_red: Color::Rgb(244, 63, 94),
    status_yellow: Color::Rgb(234, 179, 8),
    status_blue: Color::Rgb(56, 189, 248),
    incoming: Color::Rgb(96, 165, 250),
    outgoing: Color::Rgb(52, 211, 153),
    shadow: Color::Rgb(5, 6, 8),
};

impl Palette {
    /// Palette for the shell's dark-mode flag
    pub fn for_mode(dark_mode: bool) -> &'static Palette {
        if dark_mode {
            &DARK
        } else {
            &LIGHT
        }
    }
}
