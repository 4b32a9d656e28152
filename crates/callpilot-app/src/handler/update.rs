//! Main update function - handles state transitions (TEA pattern)

use callpilot_core::prelude::*;

use crate::call_log::{PlaybackChange, SelectOutcome, TickOutcome};
use crate::message::Message;
use crate::shell::Section;
use crate::state::AppState;

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if state.gate.is_authenticating() {
                state.tick_spinner();
            }
            UpdateResult::none()
        }

        Message::Quit => {
            info!("Quit requested");
            state.request_quit();
            UpdateResult::action(UpdateAction::StopPlayback)
        }

        // ─────────────────────────────────────────────────────────
        // Session Gate
        // ─────────────────────────────────────────────────────────
        Message::LoginInput { text } => {
            state.gate.form.set_focused_text(text);
            UpdateResult::none()
        }

        Message::LoginFocusNext => {
            state.gate.form.focus_next();
            UpdateResult::none()
        }

        Message::SubmitLogin => {
            if state.gate.submit() {
                info!("Login submitted, waiting {}ms", state.settings.login.delay_ms);
                UpdateResult::action(UpdateAction::BeginLogin {
                    delay: state.settings.login.delay(),
                })
            } else {
                UpdateResult::none()
            }
        }

        Message::LoginCompleted => {
            if state.gate.log_in() {
                info!("Logged in");
            } else {
                debug!("Ignoring login completion outside of Authenticating");
            }
            UpdateResult::none()
        }

        Message::SignOut => {
            if !state.gate.is_authenticated() {
                return UpdateResult::none();
            }
            info!("Signed out");
            let was_playing = state.sign_out();
            UpdateResult::stop_playback_if(was_playing)
        }

        // ─────────────────────────────────────────────────────────
        // Shell
        // ─────────────────────────────────────────────────────────
        Message::SelectSection(section) => switch_section(state, section),
        Message::NextSection => {
            let next = state.shell.active.next();
            switch_section(state, next)
        }
        Message::PreviousSection => {
            let previous = state.shell.active.previous();
            switch_section(state, previous)
        }

        Message::ToggleTheme => {
            state.shell.toggle_theme();
            debug!("Dark mode: {}", state.shell.dark_mode);
            UpdateResult::none()
        }

        Message::SetTimeRange(range) => {
            state.shell.time_range = range;
            UpdateResult::none()
        }
        Message::NextTimeRange => {
            state.shell.time_range = state.shell.time_range.next();
            UpdateResult::none()
        }
        Message::PreviousTimeRange => {
            state.shell.time_range = state.shell.time_range.previous();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Header Menus
        // ─────────────────────────────────────────────────────────
        Message::ToggleNotifications => {
            state.header.toggle_notifications();
            UpdateResult::none()
        }
        Message::ToggleProfileMenu => {
            state.header.toggle_profile_menu();
            UpdateResult::none()
        }
        Message::CloseMenus => {
            state.header.close_menus();
            UpdateResult::none()
        }
        Message::MarkAllNotificationsRead => {
            state.header.mark_all_read();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Filter Input
        // ─────────────────────────────────────────────────────────
        Message::StartFilterInput => {
            match state.shell.active {
                Section::CallLogs => state.call_log.filter_editing = true,
                Section::Numbers => state.numbers.search_editing = true,
                Section::Dashboard => {}
            }
            UpdateResult::none()
        }

        Message::FilterInput { text } => {
            match state.shell.active {
                Section::CallLogs => state.call_log.set_filter(&state.seed.calls, text),
                Section::Numbers => state.numbers.set_search(&state.seed.numbers, text),
                Section::Dashboard => {}
            }
            UpdateResult::none()
        }

        Message::StopFilterInput => {
            state.call_log.filter_editing = false;
            state.numbers.search_editing = false;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Call Logs
        // ─────────────────────────────────────────────────────────
        Message::CallCursorUp => {
            state.call_log.cursor_up();
            UpdateResult::none()
        }
        Message::CallCursorDown => {
            state.call_log.cursor_down();
            UpdateResult::none()
        }

        Message::SelectCallAtCursor => match state.call_log.cursor_call_id(&state.seed.calls) {
            Some(id) => UpdateResult::message(Message::SelectCall(id)),
            None => UpdateResult::none(),
        },

        Message::SelectCall(id) => match state.call_log.select(&state.seed.calls, id) {
            SelectOutcome::Selected { was_playing } => {
                debug!("Selected call {}", id);
                UpdateResult::stop_playback_if(was_playing)
            }
            SelectOutcome::Unchanged => UpdateResult::none(),
        },

        Message::DeselectCall => {
            let was_playing = state.call_log.deselect();
            UpdateResult::stop_playback_if(was_playing)
        }

        Message::TogglePlayback => match state.call_log.toggle_playback() {
            PlaybackChange::Started { generation } => {
                debug!("Playback started (generation {})", generation);
                UpdateResult::action(UpdateAction::StartPlayback {
                    generation,
                    period: state.settings.playback.period(),
                })
            }
            PlaybackChange::Paused => {
                debug!("Playback paused at {}", state.call_log.playback.clock());
                UpdateResult::action(UpdateAction::StopPlayback)
            }
            PlaybackChange::Unchanged => UpdateResult::none(),
        },

        Message::ChangeSpeed => {
            state.call_log.change_speed();
            UpdateResult::none()
        }

        Message::PlaybackTick { generation } => {
            match state.call_log.tick(&state.seed.calls, generation) {
                TickOutcome::Finished => {
                    info!("Playback finished");
                    UpdateResult::action(UpdateAction::StopPlayback)
                }
                TickOutcome::Advanced => UpdateResult::none(),
                TickOutcome::Ignored => {
                    trace!("Ignoring playback tick (generation {})", generation);
                    UpdateResult::none()
                }
            }
        }

        // ─────────────────────────────────────────────────────────
        // Numbers & Connectivity
        // ─────────────────────────────────────────────────────────
        Message::NumberCursorUp => {
            state.numbers.cursor_up();
            UpdateResult::none()
        }
        Message::NumberCursorDown => {
            state.numbers.cursor_down();
            UpdateResult::none()
        }

        Message::OpenPurchaseDialog => {
            state.numbers.open_buy_modal();
            UpdateResult::none()
        }
        Message::ClosePurchaseDialog => {
            state.numbers.close_buy_modal();
            UpdateResult::none()
        }
        Message::NextCountry => {
            state.numbers.next_country(&state.seed.countries);
            UpdateResult::none()
        }
        Message::PreviousCountry => {
            state.numbers.previous_country(&state.seed.countries);
            UpdateResult::none()
        }
        Message::CycleNumberType => {
            state.numbers.cycle_number_type();
            UpdateResult::none()
        }
        Message::OfferCursorUp => {
            state.numbers.offer_up();
            UpdateResult::none()
        }
        Message::OfferCursorDown => {
            state
                .numbers
                .offer_down(state.seed.available_numbers.len());
            UpdateResult::none()
        }
        Message::PurchaseSelectedOffer => {
            if let Some(offer) = state.seed.available_numbers.get(state.numbers.offer_cursor) {
                info!(
                    "Purchase requested: {} ({}, {})",
                    offer.number,
                    state.numbers.selected_country,
                    state.numbers.selected_number_type.purchase_label()
                );
            }
            state.numbers.close_buy_modal();
            UpdateResult::none()
        }

        Message::OpenSipDialog => {
            state.numbers.open_sip_modal();
            UpdateResult::none()
        }
        Message::CloseSipDialog => {
            state.numbers.close_sip_modal();
            UpdateResult::none()
        }
        Message::SipFieldNext => {
            state.numbers.sip.focus = state.numbers.sip.focus.next();
            UpdateResult::none()
        }
        Message::SipFieldPrevious => {
            state.numbers.sip.focus = state.numbers.sip.focus.previous();
            UpdateResult::none()
        }
        Message::SipInput { text } => {
            state.numbers.sip.set_focused_text(text);
            UpdateResult::none()
        }
        Message::ConnectSipTrunk => {
            info!(
                "SIP trunk connect requested: {}:{}",
                state.numbers.sip.host, state.numbers.sip.port
            );
            state.numbers.close_sip_modal();
            UpdateResult::none()
        }
    }
}

/// Switch sections, tearing down the one being left.
fn switch_section(state: &mut AppState, section: Section) -> UpdateResult {
    let Some(left) = state.shell.switch_to(section) else {
        return UpdateResult::none();
    };
    debug!("Section {:?} -> {:?}", left, section);
    let interrupted = state.teardown_section(left);
    UpdateResult::stop_playback_if(interrupted)
}
