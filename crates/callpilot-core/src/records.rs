//! # Seeded Records
//!
//! Immutable records loaded once from the seed fixture: recorded calls,
//! owned phone numbers, purchasable numbers, countries, header
//! notifications and the overview dashboard series.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::filter::matches_query;
use crate::types::{CallDuration, NumberStatus, NumberType, Percent, Sentiment, Speaker, Trend};

pub type CallId = u32;
pub type NumberId = u32;
pub type NotificationId = u32;

/// Number of amplitude samples in a call's waveform.
pub const WAVEFORM_SAMPLES: usize = 20;

/// Number of samples in a call's sentiment trajectory.
pub const TRAJECTORY_SAMPLES: usize = 8;

// ── Calls ────────────────────────────────────────────────────────────────────

/// One line of a call transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptLine {
    pub speaker: Speaker,
    /// Offset from the start of the call.
    pub time: CallDuration,
    pub text: String,
}

/// A recorded call with its AI analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRecord {
    pub id: CallId,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration: CallDuration,
    pub customer: String,
    pub sentiment: Sentiment,
    pub sentiment_score: Percent,
    pub purpose: String,
    pub ai_summary: String,
    pub key_points: Vec<String>,
    #[serde(default)]
    pub action_items: Vec<String>,
    /// Response latency in seconds.
    pub latency: f64,
    /// Cost in dollars.
    pub cost: f64,
    pub transcript: Vec<TranscriptLine>,
    pub waveform: [Percent; WAVEFORM_SAMPLES],
    pub sentiment_trajectory: [Percent; TRAJECTORY_SAMPLES],
}

impl CallRecord {
    pub fn total_seconds(&self) -> u32 {
        self.duration.total_seconds()
    }

    /// Case-insensitive substring match on customer and purpose.
    pub fn matches(&self, query: &str) -> bool {
        matches_query(query, &[&self.customer, &self.purpose])
    }

    /// First and last trajectory samples.
    pub fn trajectory_bounds(&self) -> (Percent, Percent) {
        (
            self.sentiment_trajectory[0],
            self.sentiment_trajectory[TRAJECTORY_SAMPLES - 1],
        )
    }
}

// ── Numbers ──────────────────────────────────────────────────────────────────

/// A phone number owned by the call center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumberRecord {
    pub id: NumberId,
    pub number: String,
    pub country: String,
    pub country_code: String,
    #[serde(rename = "type")]
    pub number_type: NumberType,
    pub status: NumberStatus,
    pub assigned_to: String,
    pub monthly_fee: f64,
    pub caller_id: String,
    pub routing: String,
    pub purchase_date: NaiveDate,
    pub total_calls: u64,
}

impl PhoneNumberRecord {
    /// Case-insensitive substring match on number, country and assigned agent.
    pub fn matches(&self, query: &str) -> bool {
        matches_query(query, &[&self.number, &self.country, &self.assigned_to])
    }
}

/// A number offered in the purchase dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailableNumber {
    pub number: String,
    #[serde(rename = "type")]
    pub number_type: NumberType,
    /// Monthly price in dollars.
    pub price: f64,
    /// One-time setup fee in dollars.
    pub setup: f64,
}

/// A country numbers can be bought in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
    pub flag: String,
    /// How many numbers are on offer.
    pub available: u32,
}

// ── Notifications ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    /// Human-readable age, e.g. "5 min ago".
    pub time: String,
    pub unread: bool,
}

// ── Dashboard ────────────────────────────────────────────────────────────────

/// Incoming/outgoing call counts at one time of day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallVolumePoint {
    pub time: String,
    pub incoming: u32,
    pub outgoing: u32,
}

/// AI resolution rate for one weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyPoint {
    pub day: String,
    pub rate: Percent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalCallsStat {
    pub incoming: u32,
    pub outgoing: u32,
    pub change: f64,
    pub trend: Trend,
}

impl TotalCallsStat {
    pub fn total(&self) -> u32 {
        self.incoming + self.outgoing
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvgDurationStat {
    pub value: CallDuration,
    pub change: f64,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceStat {
    pub spent: f64,
    pub remaining: f64,
    pub change: f64,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiEfficiencyStat {
    pub rate: f64,
    pub successful: u32,
    pub total: u32,
    pub change: f64,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_calls: TotalCallsStat,
    pub avg_duration: AvgDurationStat,
    pub balance: BalanceStat,
    pub ai_efficiency: AiEfficiencyStat,
}

/// Everything the overview section renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub call_volume: Vec<CallVolumePoint>,
    pub efficiency: Vec<EfficiencyPoint>,
    pub stats: DashboardStats,
}

impl DashboardData {
    /// Mean weekly efficiency rounded to one decimal place.
    pub fn average_efficiency(&self) -> f64 {
        if self.efficiency.is_empty() {
            return 0.0;
        }
        let sum: f64 = self
            .efficiency
            .iter()
            .map(|p| f64::from(p.rate.value()))
            .sum();
        let mean = sum / self.efficiency.len() as f64;
        (mean * 10.0).round() / 10.0
    }

    /// Largest single incoming or outgoing count, used to scale charts.
    pub fn peak_volume(&self) -> u32 {
        self.call_volume
            .iter()
            .map(|p| p.incoming.max(p.outgoing))
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pct(v: u32) -> Percent {
        Percent::new(v).unwrap()
    }

    #[test]
    fn test_average_efficiency_rounds_to_one_decimal() {
        let days = [("Mon", 85), ("Tue", 88), ("Wed", 92), ("Thu", 89), ("Fri", 94), ("Sat", 91), ("Sun", 87)];
        let data = DashboardData {
            call_volume: vec![],
            efficiency: days
                .iter()
                .map(|(day, rate)| EfficiencyPoint {
                    day: day.to_string(),
                    rate: pct(*rate),
                })
                .collect(),
            stats: DashboardStats {
                total_calls: TotalCallsStat {
                    incoming: 1,
                    outgoing: 2,
                    change: 0.0,
                    trend: Trend::Up,
                },
                avg_duration: AvgDurationStat {
                    value: CallDuration::from_seconds(272),
                    change: 0.0,
                    trend: Trend::Down,
                },
                balance: BalanceStat {
                    spent: 0.0,
                    remaining: 0.0,
                    change: 0.0,
                    trend: Trend::Up,
                },
                ai_efficiency: AiEfficiencyStat {
                    rate: 0.0,
                    successful: 0,
                    total: 0,
                    change: 0.0,
                    trend: Trend::Up,
                },
            },
        };
        assert!((data.average_efficiency() - 89.4).abs() < 1e-9);
        assert_eq!(data.stats.total_calls.total(), 3);
    }

    #[test]
    fn test_phone_number_matches_country_and_agent() {
        let record = PhoneNumberRecord {
            id: 4,
            number: "+7 (495) 123-4567".into(),
            country: "Russia".into(),
            country_code: "RU".into(),
            number_type: NumberType::Local,
            status: NumberStatus::Inactive,
            assigned_to: "Tashrifchilarni qabul qilish".into(),
            monthly_fee: 6.5,
            caller_id: "+7 (495) 123-4567".into(),
            routing: "Voicemail".into(),
            purchase_date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            total_calls: 124,
        };
        assert!(record.matches("russia"));
        assert!(record.matches("QABUL"));
        assert!(record.matches("495"));
        assert!(!record.matches("voicemail"));
    }
}
