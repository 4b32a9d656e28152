//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::shell::{Section, TimeRange};
use callpilot_core::CallId;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Keyboard event from terminal
    Key(InputKey),
    /// Periodic UI tick (spinner animation)
    Tick,
    /// Quit immediately
    Quit,

    // ─────────────────────────────────────────────────────────
    // Session Gate
    // ─────────────────────────────────────────────────────────
    /// Replace the focused login field's text
    LoginInput { text: String },
    /// Move focus to the other login field
    LoginFocusNext,
    /// Submit the login form (starts the simulated delay)
    SubmitLogin,
    /// Simulated login delay elapsed
    LoginCompleted,
    /// Leave the dashboard and return to the login screen
    SignOut,

    // ─────────────────────────────────────────────────────────
    // Shell
    // ─────────────────────────────────────────────────────────
    SelectSection(Section),
    NextSection,
    PreviousSection,
    ToggleTheme,
    SetTimeRange(TimeRange),
    NextTimeRange,
    PreviousTimeRange,

    // ─────────────────────────────────────────────────────────
    // Header Menus
    // ─────────────────────────────────────────────────────────
    ToggleNotifications,
    ToggleProfileMenu,
    CloseMenus,
    MarkAllNotificationsRead,

    // ─────────────────────────────────────────────────────────
    // Filter Input (applies to the active section)
    // ─────────────────────────────────────────────────────────
    StartFilterInput,
    FilterInput { text: String },
    StopFilterInput,

    // ─────────────────────────────────────────────────────────
    // Call Logs
    // ─────────────────────────────────────────────────────────
    CallCursorUp,
    CallCursorDown,
    SelectCallAtCursor,
    SelectCall(CallId),
    /// Back to the list-only display
    DeselectCall,
    TogglePlayback,
    ChangeSpeed,
    /// One period of the playback ticker elapsed
    PlaybackTick { generation: u64 },

    // ─────────────────────────────────────────────────────────
    // Numbers & Connectivity
    // ─────────────────────────────────────────────────────────
    NumberCursorUp,
    NumberCursorDown,
    OpenPurchaseDialog,
    ClosePurchaseDialog,
    NextCountry,
    PreviousCountry,
    CycleNumberType,
    OfferCursorUp,
    OfferCursorDown,
    PurchaseSelectedOffer,
    OpenSipDialog,
    CloseSipDialog,
    SipFieldNext,
    SipFieldPrevious,
    /// Replace the focused SIP field's text
    SipInput { text: String },
    ConnectSipTrunk,
}
