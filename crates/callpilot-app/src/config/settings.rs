//! Settings loader for config.toml

use std::path::{Path, PathBuf};

use super::types::Settings;
use callpilot_core::prelude::*;

pub const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "callpilot";

/// Default config location: `<config dir>/callpilot/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from a config file, falling back to defaults.
///
/// A missing file is normal. An unreadable or invalid file is logged and
/// replaced by defaults; the file is never rewritten.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match read_settings(config_path) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", config_path);
            settings
        }
        Err(e) => {
            warn!("Ignoring {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Read and parse a config file that is expected to exist.
fn read_settings(config_path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(config_path)?;
    toml::from_str(&content).map_err(|e| Error::config(e.to_string()))
}

/// Documented default config file, printed by `--print-default-config`.
pub fn default_config_content() -> &'static str {
    r#"# callpilot configuration
# Location: <config dir>/callpilot/config.toml (override with --config)

[behavior]
skip_login = false      # Open the dashboard directly

[login]
delay_ms = 1500         # Simulated login delay

[playback]
tick_ms = 1000          # Playback clock period

[ui]
dark_mode = false
time_range = "7days"    # 24h | 7days | 30days | year
language = "uz"

[data]
seed_path = ""          # Empty = built-in sample data
"#
}
