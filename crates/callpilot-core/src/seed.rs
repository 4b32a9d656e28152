//! # Seed Fixture
//!
//! The sample data every view renders. A default fixture is compiled into
//! the crate; an alternative JSON file with the same shape can be supplied
//! at startup.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::records::{
    AvailableNumber, CallRecord, Country, DashboardData, Notification, PhoneNumberRecord,
};

const BUILTIN_SEED: &str = include_str!("../fixtures/seed.json");

/// All immutable records, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    pub calls: Vec<CallRecord>,
    pub numbers: Vec<PhoneNumberRecord>,
    #[serde(default)]
    pub available_numbers: Vec<AvailableNumber>,
    #[serde(default)]
    pub countries: Vec<Country>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
    pub dashboard: DashboardData,
}

impl SeedData {
    /// The fixture shipped with the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_SEED)
    }

    /// Load and validate a fixture file.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::SeedNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let seed = Self::from_json_str(&content)?;
        tracing::info!(
            "Loaded seed from {} ({} calls, {} numbers)",
            path.display(),
            seed.calls.len(),
            seed.numbers.len()
        );
        Ok(seed)
    }

    /// Parse and validate fixture JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let seed: SeedData = serde_json::from_str(json)?;
        seed.validate()?;
        Ok(seed)
    }

    fn validate(&self) -> Result<()> {
        ensure_unique("call", self.calls.iter().map(|c| c.id))?;
        ensure_unique("number", self.numbers.iter().map(|n| n.id))?;
        ensure_unique("notification", self.notifications.iter().map(|n| n.id))?;

        let mut codes = HashSet::new();
        for country in &self.countries {
            if !codes.insert(country.code.as_str()) {
                return Err(Error::seed(format!(
                    "duplicate country code '{}'",
                    country.code
                )));
            }
        }
        Ok(())
    }
}

fn ensure_unique(kind: &str, ids: impl Iterator<Item = u32>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(Error::seed(format!("duplicate {kind} id {id}")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NumberType, Sentiment};
    use std::io::Write;

    #[test]
    fn test_builtin_seed_loads() {
        let seed = SeedData::builtin().unwrap();
        assert_eq!(seed.calls.len(), 3);
        assert_eq!(seed.numbers.len(), 4);
        assert_eq!(seed.available_numbers.len(), 4);
        assert_eq!(seed.countries.len(), 4);
        assert_eq!(seed.notifications.len(), 3);
        assert_eq!(seed.dashboard.call_volume.len(), 7);
    }

    #[test]
    fn test_builtin_call_durations() {
        let seed = SeedData::builtin().unwrap();
        let secs: Vec<u32> = seed.calls.iter().map(|c| c.total_seconds()).collect();
        assert_eq!(secs, vec![525, 323, 192]);
    }

    #[test]
    fn test_builtin_records_are_typed() {
        let seed = SeedData::builtin().unwrap();
        assert_eq!(seed.calls[1].sentiment, Sentiment::Negative);
        assert_eq!(seed.numbers[2].number_type, NumberType::TollFree);
        assert!(seed.calls[2].action_items.is_empty());
        assert_eq!(seed.calls[1].purpose, "Shikoyat");
    }

    #[test]
    fn test_builtin_dashboard_average() {
        let seed = SeedData::builtin().unwrap();
        assert!((seed.dashboard.average_efficiency() - 89.4).abs() < 1e-9);
        assert_eq!(seed.dashboard.stats.avg_duration.value.total_seconds(), 272);
        assert_eq!(seed.dashboard.peak_volume(), 68);
    }

    #[test]
    fn test_duplicate_call_id_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(BUILTIN_SEED).unwrap();
        value["calls"][1]["id"] = serde_json::json!(1);
        let err = SeedData::from_json_str(&value.to_string()).unwrap_err();
        assert!(matches!(err, Error::Seed { .. }));
        assert!(err.to_string().contains("duplicate call id 1"));
    }

    #[test]
    fn test_malformed_duration_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(BUILTIN_SEED).unwrap();
        value["calls"][0]["duration"] = serde_json::json!("845");
        let err = SeedData::from_json_str(&value.to_string()).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().contains("Invalid duration '845'"));
    }

    #[test]
    fn test_unknown_sentiment_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(BUILTIN_SEED).unwrap();
        value["calls"][0]["sentiment"] = serde_json::json!("furious");
        assert!(SeedData::from_json_str(&value.to_string()).is_err());
    }

    #[test]
    fn test_short_waveform_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(BUILTIN_SEED).unwrap();
        value["calls"][0]["waveform"] = serde_json::json!([10, 20, 30]);
        assert!(SeedData::from_json_str(&value.to_string()).is_err());
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(BUILTIN_SEED.as_bytes()).unwrap();

        let seed = SeedData::from_path(&path).unwrap();
        assert_eq!(seed, SeedData::builtin().unwrap());
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SeedData::from_path(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, Error::SeedNotFound { .. }));
    }
}
