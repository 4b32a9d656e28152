//! Screen layout definitions for the TUI
//!
//! The shell is a header row across the top, a section sidebar on the left
//! (collapsed on narrow terminals), the active section's content, and a
//! one-line key hint footer.

use ratatui::layout::{Constraint, Layout, Rect};

/// Sidebar width when shown
pub const SIDEBAR_WIDTH: u16 = 28;

/// Terminals narrower than this hide the sidebar
pub const SIDEBAR_MIN_SCREEN_WIDTH: u16 = 90;

/// Screen areas for the dashboard shell
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Breadcrumbs, language, theme, notification and profile toggles
    pub header: Rect,

    /// Section list; zero-width when collapsed
    pub sidebar: Rect,

    /// Active section content
    pub content: Rect,

    /// Key hints
    pub footer: Rect,
}

/// Create the shell layout for `area`
pub fn create(area: Rect) -> ScreenAreas {
    let rows = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    let sidebar_width = if area.width >= SIDEBAR_MIN_SCREEN_WIDTH {
        SIDEBAR_WIDTH
    } else {
        0
    };
    let columns =
        Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(10)]).split(rows[1]);

    ScreenAreas {
        header: rows[0],
        sidebar: columns[0],
        content: columns[1],
        footer: rows[2],
    }
}

/// Split the call-log section into list and detail columns.
///
/// Without a selected call the list takes the whole area.
pub fn call_log_columns(area: Rect, has_selection: bool) -> (Rect, Option<Rect>) {
    if !has_selection {
        return (area, None);
    }
    let chunks =
        Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)]).split(area);
    (chunks[0], Some(chunks[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_wide() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = create(area);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.footer.height, 1);
        assert_eq!(layout.footer.y, 39);
        assert_eq!(layout.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(layout.content.x, SIDEBAR_WIDTH);
        assert_eq!(layout.content.height, 36); // 40 - 3 - 1
    }

    #[test]
    fn test_create_layout_narrow_hides_sidebar() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        assert_eq!(layout.sidebar.width, 0);
        assert_eq!(layout.content.width, 80);
    }

    #[test]
    fn test_layout_rows_contiguous() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = create(area);
        assert_eq!(
            layout.header.height + layout.content.height + layout.footer.height,
            area.height
        );
    }

    #[test]
    fn test_call_log_columns() {
        let area = Rect::new(0, 0, 100, 30);

        let (list, detail) = call_log_columns(area, false);
        assert_eq!(list, area);
        assert!(detail.is_none());

        let (list, detail) = call_log_columns(area, true);
        let detail = detail.unwrap();
        assert_eq!(list.width + detail.width, 100);
        assert_eq!(detail.x, list.width);
    }
}
