//! Configuration file parsing for callpilot
//!
//! Settings are read from `<config dir>/callpilot/config.toml`. The file is
//! optional and never written back.

pub mod settings;
pub mod types;

pub use settings::{default_config_content, default_config_path, load_settings, CONFIG_FILENAME};
pub use types::*;
