//! Application state (Model in TEA pattern)

use callpilot_core::SeedData;

use crate::call_log::CallLogState;
use crate::config::Settings;
use crate::header::HeaderState;
use crate::numbers::{NumbersState, NumbersStats};
use crate::session::SessionGate;
use crate::shell::{Section, ShellState};

/// Which surface currently receives keyboard input.
///
/// Derived from component state rather than stored, so the flags the
/// components own stay the single source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Login form accepting input
    Login,
    /// Waiting for the simulated login to finish
    Authenticating,
    /// Dashboard shell with no overlay
    Normal,
    /// Typing into the active section's filter
    FilterInput,
    NotificationsMenu,
    ProfileMenu,
    PurchaseDialog,
    SipDialog,
}

#[derive(Debug)]
pub struct AppState {
    /// Immutable sample records
    pub seed: SeedData,
    pub settings: Settings,

    pub gate: SessionGate,
    pub shell: ShellState,
    pub header: HeaderState,
    pub call_log: CallLogState,
    pub numbers: NumbersState,

    /// Animation frame for the login spinner
    pub spinner_frame: usize,

    quitting: bool,
}

impl AppState {
    pub fn new(seed: SeedData) -> Self {
        Self::with_settings(seed, Settings::default())
    }

    pub fn with_settings(seed: SeedData, settings: Settings) -> Self {
        let gate = if settings.behavior.skip_login {
            SessionGate::authenticated()
        } else {
            SessionGate::default()
        };
        let shell = ShellState::new(settings.ui.dark_mode, settings.ui.time_range);
        let header = HeaderState::new(settings.ui.language.clone(), seed.notifications.clone());
        let call_log = CallLogState::new(&seed.calls);
        let numbers = NumbersState::new(&seed.numbers);

        Self {
            seed,
            settings,
            gate,
            shell,
            header,
            call_log,
            numbers,
            spinner_frame: 0,
            quitting: false,
        }
    }

    pub fn ui_mode(&self) -> UiMode {
        if !self.gate.is_authenticated() {
            return if self.gate.is_authenticating() {
                UiMode::Authenticating
            } else {
                UiMode::Login
            };
        }
        if self.header.show_notifications {
            return UiMode::NotificationsMenu;
        }
        if self.header.show_profile_menu {
            return UiMode::ProfileMenu;
        }
        match self.shell.active {
            Section::Numbers if self.numbers.show_buy_modal => UiMode::PurchaseDialog,
            Section::Numbers if self.numbers.show_sip_modal => UiMode::SipDialog,
            Section::Numbers if self.numbers.search_editing => UiMode::FilterInput,
            Section::CallLogs if self.call_log.filter_editing => UiMode::FilterInput,
            _ => UiMode::Normal,
        }
    }

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    pub fn tick_spinner(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    /// Reset the state owned by `section`. Returns true if a playing call
    /// was interrupted.
    pub fn teardown_section(&mut self, section: Section) -> bool {
        match section {
            Section::Dashboard => false,
            Section::Numbers => {
                self.numbers = NumbersState::new(&self.seed.numbers);
                false
            }
            Section::CallLogs => self.call_log.teardown(&self.seed.calls),
        }
    }

    /// Return to the login screen, tearing down everything below the shell.
    /// Returns true if a playing call was interrupted.
    pub fn sign_out(&mut self) -> bool {
        let was_playing = self.call_log.teardown(&self.seed.calls);
        self.numbers = NumbersState::new(&self.seed.numbers);
        self.header = HeaderState::new(
            self.settings.ui.language.clone(),
            self.seed.notifications.clone(),
        );
        self.shell.active = Section::default();
        self.gate.sign_out();
        was_playing
    }

    pub fn numbers_stats(&self) -> NumbersStats {
        NumbersStats::from_records(&self.seed.numbers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(SeedData::builtin().unwrap())
    }

    #[test]
    fn test_starts_at_login() {
        let state = state();
        assert_eq!(state.ui_mode(), UiMode::Login);
        assert!(!state.should_quit());
    }

    #[test]
    fn test_skip_login_setting() {
        let mut settings = Settings::default();
        settings.behavior.skip_login = true;
        settings.ui.dark_mode = true;
        let state = AppState::with_settings(SeedData::builtin().unwrap(), settings);
        assert_eq!(state.ui_mode(), UiMode::Normal);
        assert!(state.shell.dark_mode);
    }

    #[test]
    fn test_ui_mode_follows_overlays() {
        let mut state = state();
        state.gate = SessionGate::authenticated();
        state.shell.active = Section::Numbers;
        state.numbers.open_sip_modal();
        assert_eq!(state.ui_mode(), UiMode::SipDialog);
        state.header.toggle_profile_menu();
        assert_eq!(state.ui_mode(), UiMode::ProfileMenu);
    }

    #[test]
    fn test_filter_flag_of_hidden_section_is_ignored() {
        let mut state = state();
        state.gate = SessionGate::authenticated();
        state.call_log.filter_editing = true;
        assert_eq!(state.ui_mode(), UiMode::Normal);
    }
}
