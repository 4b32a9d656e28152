//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::shell::Section;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit works everywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode() {
        UiMode::Login => handle_key_login(state, key),
        UiMode::Authenticating => handle_key_authenticating(key),
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::FilterInput => handle_key_filter_input(state, key),
        UiMode::NotificationsMenu => handle_key_notifications(key),
        UiMode::ProfileMenu => handle_key_profile(key),
        UiMode::PurchaseDialog => handle_key_purchase_dialog(key),
        UiMode::SipDialog => handle_key_sip_dialog(state, key),
    }
}

/// Apply a text-editing key to `current`, returning the new text.
fn edit_text(current: &str, key: &InputKey) -> Option<String> {
    match key {
        InputKey::Char(c) => {
            let mut text = current.to_string();
            text.push(*c);
            Some(text)
        }
        InputKey::Backspace => {
            let mut text = current.to_string();
            text.pop();
            Some(text)
        }
        InputKey::CharCtrl('u') => Some(String::new()),
        _ => None,
    }
}

fn handle_key_login(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::Quit),
        InputKey::Enter => Some(Message::SubmitLogin),
        InputKey::Tab | InputKey::BackTab | InputKey::Up | InputKey::Down => {
            Some(Message::LoginFocusNext)
        }
        other => edit_text(state.gate.form.focused_text(), &other)
            .map(|text| Message::LoginInput { text }),
    }
}

fn handle_key_authenticating(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in the dashboard shell with no overlay open
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    // ─────────────────────────────────────────────────────────
    // Global shell keys
    // ─────────────────────────────────────────────────────────
    match key {
        InputKey::Char('q') => return Some(Message::Quit),
        InputKey::Char('1') => return Some(Message::SelectSection(Section::Dashboard)),
        InputKey::Char('2') => return Some(Message::SelectSection(Section::Numbers)),
        InputKey::Char('3') => return Some(Message::SelectSection(Section::CallLogs)),
        InputKey::Tab => return Some(Message::NextSection),
        InputKey::BackTab => return Some(Message::PreviousSection),
        InputKey::Char('t') => return Some(Message::ToggleTheme),
        InputKey::Char('n') => return Some(Message::ToggleNotifications),
        InputKey::Char('p') => return Some(Message::ToggleProfileMenu),
        _ => {}
    }

    match state.shell.active {
        Section::Dashboard => handle_key_dashboard(key),
        Section::Numbers => handle_key_numbers(key),
        Section::CallLogs => handle_key_call_logs(key),
    }
}

fn handle_key_dashboard(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Right | InputKey::Char('r') => Some(Message::NextTimeRange),
        InputKey::Left => Some(Message::PreviousTimeRange),
        _ => None,
    }
}

fn handle_key_call_logs(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('/') => Some(Message::StartFilterInput),
        InputKey::Up | InputKey::Char('k') => Some(Message::CallCursorUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::CallCursorDown),
        InputKey::Enter => Some(Message::SelectCallAtCursor),
        InputKey::Char(' ') => Some(Message::TogglePlayback),
        InputKey::Char('s') => Some(Message::ChangeSpeed),
        InputKey::Esc => Some(Message::DeselectCall),
        _ => None,
    }
}

fn handle_key_numbers(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('/') => Some(Message::StartFilterInput),
        InputKey::Up | InputKey::Char('k') => Some(Message::NumberCursorUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::NumberCursorDown),
        InputKey::Char('b') => Some(Message::OpenPurchaseDialog),
        InputKey::Char('i') => Some(Message::OpenSipDialog),
        _ => None,
    }
}

/// Handle key events while typing into a section filter
fn handle_key_filter_input(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Keep query, leave input mode
        InputKey::Esc | InputKey::Enter => Some(Message::StopFilterInput),
        other => {
            let current = match state.shell.active {
                Section::CallLogs => state.call_log.filter.as_str(),
                Section::Numbers => state.numbers.search.as_str(),
                Section::Dashboard => return None,
            };
            edit_text(current, &other).map(|text| Message::FilterInput { text })
        }
    }
}

fn handle_key_notifications(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('n') => Some(Message::CloseMenus),
        InputKey::Char('m') => Some(Message::MarkAllNotificationsRead),
        InputKey::Char('p') => Some(Message::ToggleProfileMenu),
        _ => None,
    }
}

fn handle_key_profile(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('p') => Some(Message::CloseMenus),
        InputKey::Char('o') => Some(Message::SignOut),
        InputKey::Char('n') => Some(Message::ToggleNotifications),
        _ => None,
    }
}

fn handle_key_purchase_dialog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::ClosePurchaseDialog),
        InputKey::Enter => Some(Message::PurchaseSelectedOffer),
        InputKey::Left => Some(Message::PreviousCountry),
        InputKey::Right => Some(Message::NextCountry),
        InputKey::Tab => Some(Message::CycleNumberType),
        InputKey::Up | InputKey::Char('k') => Some(Message::OfferCursorUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::OfferCursorDown),
        _ => None,
    }
}

fn handle_key_sip_dialog(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CloseSipDialog),
        InputKey::Enter => Some(Message::ConnectSipTrunk),
        InputKey::Tab | InputKey::Down => Some(Message::SipFieldNext),
        InputKey::BackTab | InputKey::Up => Some(Message::SipFieldPrevious),
        other => edit_text(state.numbers.sip.focused_text(), &other)
            .map(|text| Message::SipInput { text }),
    }
}
