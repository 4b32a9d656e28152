//! Custom widget components

pub mod bars;
pub mod call_log;
mod dashboard;
mod header;
mod key_hints;
mod login;
pub mod modal_overlay;
pub mod numbers;
mod search_input;
mod sidebar;
pub mod text;

pub use call_log::{CallDetails, CallLogView};
pub use dashboard::{Dashboard, EfficiencyChart, VolumeChart};
pub use header::{MainHeader, NotificationsMenu, ProfileMenu};
pub use key_hints::{hints_for, KeyHints};
pub use login::{spinner_glyph, LoginView};
pub use numbers::{NumbersView, PurchaseDialog, SipDialog};
pub use search_input::SearchInput;
pub use sidebar::Sidebar;
