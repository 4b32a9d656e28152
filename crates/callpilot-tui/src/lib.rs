//! callpilot-tui - Terminal UI for callpilot
//!
//! This crate provides the ratatui-based terminal interface. It drives an
//! [`Engine`](callpilot_app::Engine) from callpilot-app and adds terminal
//! rendering, event polling and the widgets for each dashboard section.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
