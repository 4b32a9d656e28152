//! Configuration types

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::shell::TimeRange;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub login: LoginSettings,

    #[serde(default)]
    pub playback: PlaybackSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub data: DataSettings,
}

/// Behavior settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Start on the dashboard instead of the login screen
    #[serde(default)]
    pub skip_login: bool,
}

/// Simulated login settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoginSettings {
    /// Delay between submitting the form and the dashboard opening
    #[serde(default = "default_login_delay_ms")]
    pub delay_ms: u64,
}

impl Default for LoginSettings {
    fn default() -> Self {
        Self {
            delay_ms: default_login_delay_ms(),
        }
    }
}

impl LoginSettings {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

fn default_login_delay_ms() -> u64 {
    1500
}

/// Simulated playback settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlaybackSettings {
    /// Ticker period. Each tick advances playback by the speed multiplier.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

impl PlaybackSettings {
    /// Ticker period, never shorter than [`PLAYBACK_TICK_MIN_MS`].
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(PLAYBACK_TICK_MIN_MS))
    }
}

/// Lower bound for the playback tick so a typo cannot spin the ticker.
pub const PLAYBACK_TICK_MIN_MS: u64 = 10;

fn default_tick_ms() -> u64 {
    1000
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default)]
    pub dark_mode: bool,

    #[serde(default)]
    pub time_range: TimeRange,

    /// Language code shown in the header
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            time_range: TimeRange::default(),
            language: default_language(),
        }
    }
}

fn default_language() -> String {
    "uz".to_string()
}

/// Data source settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DataSettings {
    /// Alternative seed fixture. Empty means the built-in fixture.
    #[serde(default)]
    pub seed_path: String,
}

impl DataSettings {
    pub fn seed_path(&self) -> Option<PathBuf> {
        let trimmed = self.seed_path.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(PathBuf::from(trimmed))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(!settings.behavior.skip_login);
        assert_eq!(settings.login.delay(), Duration::from_millis(1500));
        assert_eq!(settings.playback.period(), Duration::from_secs(1));
        assert_eq!(settings.ui.time_range, TimeRange::Last7Days);
        assert_eq!(settings.ui.language, "uz");
        assert_eq!(settings.data.seed_path(), None);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[ui]
dark_mode = true
time_range = "30days"
"#,
        )
        .unwrap();
        assert!(settings.ui.dark_mode);
        assert_eq!(settings.ui.time_range, TimeRange::Last30Days);
        assert_eq!(settings.ui.language, "uz");
        assert_eq!(settings.login.delay_ms, 1500);
    }

    #[test]
    fn test_unknown_time_range_rejected() {
        let parsed: Result<Settings, _> = toml::from_str("[ui]\ntime_range = \"decade\"\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_tick_period_clamped() {
        let playback = PlaybackSettings { tick_ms: 0 };
        assert_eq!(playback.period(), Duration::from_millis(PLAYBACK_TICK_MIN_MS));
    }
}
