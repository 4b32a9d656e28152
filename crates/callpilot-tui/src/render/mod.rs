//! Main render/view function (View in TEA pattern)


use callpilot_app::{AppState, Section, UiMode};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::Palette;

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`: everything drawn is derived from it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let palette = Palette::for_mode(state.shell.dark_mode);

    // Fill entire terminal with the base background
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let mode = state.ui_mode();
    if matches!(mode, UiMode::Login | UiMode::Authenticating) {
        let login = widgets::LoginView::new(&state.gate, palette).spinner_frame(state.spinner_frame);
        frame.render_widget(login, area);
        return;
    }

    let areas = layout::create(area);
    let section = state.shell.active;

    frame.render_widget(
        widgets::MainHeader::new(section, &state.header, state.shell.dark_mode, palette),
        areas.header,
    );
    if areas.sidebar.width > 0 {
        frame.render_widget(widgets::Sidebar::new(section, palette), areas.sidebar);
    }

    match section {
        Section::Dashboard => frame.render_widget(
            widgets::Dashboard::new(&state.seed.dashboard, state.shell.time_range, palette),
            areas.content,
        ),
        Section::Numbers => frame.render_widget(
            widgets::NumbersView::new(
                &state.seed.numbers,
                &state.numbers,
                state.numbers_stats(),
                palette,
            ),
            areas.content,
        ),
        Section::CallLogs => frame.render_widget(
            widgets::CallLogView::new(&state.seed.calls, &state.call_log, palette),
            areas.content,
        ),
    }

    frame.render_widget(widgets::KeyHints::new(mode, section, palette), areas.footer);

    // Overlays
    match mode {
        UiMode::NotificationsMenu => {
            let menu = widgets::NotificationsMenu::new(&state.header, palette);
            let rect = menu.area(areas.header, area);
            frame.render_widget(menu, rect);
        }
        UiMode::ProfileMenu => {
            let menu = widgets::ProfileMenu::new(palette);
            let rect = menu.area(areas.header, area);
            frame.render_widget(menu, rect);
        }
        UiMode::PurchaseDialog => frame.render_widget(
            widgets::PurchaseDialog::new(
                &state.seed.countries,
                &state.seed.available_numbers,
                &state.numbers,
                palette,
            ),
            area,
        ),
        UiMode::SipDialog => {
            frame.render_widget(widgets::SipDialog::new(&state.numbers.sip, palette), area)
        }
        UiMode::Login | UiMode::Authenticating | UiMode::Normal | UiMode::FilterInput => {}
    }
}
