//! # Validated Domain Values
//!
//! Small value types shared by the call-log and numbers records. Every
//! category is an exhaustive enum and every bounded number is a checked
//! newtype, so a malformed fixture fails at parse time instead of
//! surfacing as garbage in the UI.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ── Sentiment ────────────────────────────────────────────────────────────────

/// Emotional tone of a call, pre-computed by the analysis pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Label shown on badges and in the sentiment panel.
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Ijobiy",
            Sentiment::Negative => "Salbiy",
            Sentiment::Neutral => "Neytral",
        }
    }
}

// ── Speaker ──────────────────────────────────────────────────────────────────

/// Who spoke a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Ai,
    Customer,
}

impl Speaker {
    pub fn label(&self) -> &'static str {
        match self {
            Speaker::Ai => "AI Agent",
            Speaker::Customer => "Customer",
        }
    }
}

// ── NumberType ───────────────────────────────────────────────────────────────

/// Kind of phone number a record or offer refers to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumberType {
    Local,
    #[default]
    Mobile,
    #[serde(rename = "Toll-Free")]
    TollFree,
}

impl NumberType {
    /// Order in which the purchase dialog offers the types.
    pub const PURCHASE_ORDER: [NumberType; 3] =
        [NumberType::Mobile, NumberType::Local, NumberType::TollFree];

    /// Label used in the numbers table.
    pub fn label(&self) -> &'static str {
        match self {
            NumberType::Local => "Local",
            NumberType::Mobile => "Mobile",
            NumberType::TollFree => "Toll-Free",
        }
    }

    /// Label used by the purchase dialog's type selector.
    pub fn purchase_label(&self) -> &'static str {
        match self {
            NumberType::Local => "Shahar",
            NumberType::Mobile => "Mobil",
            NumberType::TollFree => "Toll-free",
        }
    }

    /// Next type in purchase order, wrapping around.
    pub fn next(&self) -> Self {
        let idx = Self::PURCHASE_ORDER
            .iter()
            .position(|t| t == self)
            .unwrap_or(0);
        Self::PURCHASE_ORDER[(idx + 1) % Self::PURCHASE_ORDER.len()]
    }
}

// ── NumberStatus ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberStatus {
    Active,
    Inactive,
}

impl NumberStatus {
    pub fn label(&self) -> &'static str {
        match self {
            NumberStatus::Active => "Faol",
            NumberStatus::Inactive => "Nofaol",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, NumberStatus::Active)
    }
}

// ── Trend ────────────────────────────────────────────────────────────────────

/// Direction of a headline statistic compared to the previous period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
        }
    }
}

// ── Percent ──────────────────────────────────────────────────────────────────

/// An integer percentage in `0..=100`.
///
/// Used for sentiment scores and the pre-baked waveform and trajectory
/// samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Percent(u8);

impl Percent {
    pub const MAX: u8 = 100;

    pub fn new(value: u32) -> Result<Self> {
        if value > u32::from(Self::MAX) {
            return Err(Error::InvalidPercent { value });
        }
        Ok(Self(value as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u32> for Percent {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Percent> for u32 {
    fn from(p: Percent) -> Self {
        u32::from(p.0)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// ── CallDuration ─────────────────────────────────────────────────────────────

/// A `mm:ss` duration, as used for call lengths and transcript offsets.
///
/// Parsing is strict: minutes are one or more ASCII digits, seconds are
/// exactly two ASCII digits below 60.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CallDuration {
    total_seconds: u32,
}

impl CallDuration {
    pub fn from_seconds(total_seconds: u32) -> Self {
        Self { total_seconds }
    }

    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    pub fn minutes(&self) -> u32 {
        self.total_seconds / 60
    }

    pub fn seconds(&self) -> u32 {
        self.total_seconds % 60
    }
}

impl FromStr for CallDuration {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let (mm, ss) = input
            .split_once(':')
            .ok_or_else(|| Error::invalid_duration(input, "expected mm:ss"))?;

        if mm.is_empty() || !mm.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::invalid_duration(input, "minutes must be digits"));
        }
        if ss.len() != 2 || !ss.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::invalid_duration(
                input,
                "seconds must be exactly two digits",
            ));
        }

        let minutes: u32 = mm
            .parse()
            .map_err(|_| Error::invalid_duration(input, "minutes out of range"))?;
        let seconds: u32 = ss
            .parse()
            .map_err(|_| Error::invalid_duration(input, "seconds out of range"))?;
        if seconds >= 60 {
            return Err(Error::invalid_duration(input, "seconds must be below 60"));
        }

        minutes
            .checked_mul(60)
            .and_then(|m| m.checked_add(seconds))
            .map(Self::from_seconds)
            .ok_or_else(|| Error::invalid_duration(input, "duration too long"))
    }
}

impl TryFrom<String> for CallDuration {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<CallDuration> for String {
    fn from(d: CallDuration) -> Self {
        d.to_string()
    }
}

impl fmt::Display for CallDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes(), self.seconds())
    }
}

/// Format a fractional elapsed time as a zero-padded `mm:ss` clock.
///
/// Fractions are floored, so `90.5` renders as `01:30`. Negative and
/// non-finite inputs render as `00:00`.
pub fn format_clock(elapsed_secs: f64) -> String {
    let secs = if elapsed_secs.is_finite() && elapsed_secs > 0.0 {
        elapsed_secs.floor() as u64
    } else {
        0
    };
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
