//! # callpilot-core - Core Domain Types
//!
//! Foundation crate for callpilot. Provides the seeded records, validated
//! value types, filtering, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Values (`types`)
//! - [`CallDuration`] - Strict `mm:ss` duration
//! - [`Percent`] - Integer percentage in `0..=100`
//! - [`Sentiment`], [`Speaker`], [`NumberType`], [`NumberStatus`], [`Trend`]
//!
//! ### Records (`records`)
//! - [`CallRecord`] - A recorded call with transcript and analysis
//! - [`PhoneNumberRecord`] - An owned phone number
//! - [`AvailableNumber`], [`Country`] - Purchase dialog offers
//! - [`Notification`] - Header notification entry
//! - [`DashboardData`] - Overview charts and headline stats
//!
//! ### Seed (`seed`)
//! - [`SeedData`] - Validated fixture holding every record
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use callpilot_core::prelude::*;
//! ```

pub mod error;
pub mod filter;
pub mod logging;
pub mod records;
pub mod seed;
pub mod types;

/// Prelude for common imports used throughout all callpilot crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use filter::{filtered_indices, matches_query};
pub use records::{
    AiEfficiencyStat, AvailableNumber, AvgDurationStat, BalanceStat, CallId, CallRecord,
    CallVolumePoint, Country, DashboardData, DashboardStats, EfficiencyPoint, Notification,
    NotificationId, NumberId, PhoneNumberRecord, TotalCallsStat, TranscriptLine,
    TRAJECTORY_SAMPLES, WAVEFORM_SAMPLES,
};
pub use seed::SeedData;
pub use types::{
    format_clock, CallDuration, NumberStatus, NumberType, Percent, Sentiment, Speaker, Trend,
};
