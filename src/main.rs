//! callpilot - Terminal console for an AI call center
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use callpilot_app::config::{self, Settings};
use callpilot_app::Engine;
use callpilot_core::prelude::*;

/// callpilot - AI call center dashboard in the terminal
#[derive(Parser, Debug)]
#[command(name = "callpilot")]
#[command(about = "AI call center dashboard in the terminal", long_about = None)]
struct Args {
    /// Config file (default: <config dir>/callpilot/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed fixture to load instead of the built-in sample data
    #[arg(long, value_name = "FILE")]
    seed: Option<PathBuf>,

    /// Start in dark mode
    #[arg(long)]
    dark: bool,

    /// Open the dashboard without the login screen
    #[arg(long)]
    skip_login: bool,

    /// Print a documented default config file and exit
    #[arg(long)]
    print_default_config: bool,
}

/// Load the config file and apply command-line overrides
fn resolve_settings(args: &Args) -> Settings {
    let path = args.config.clone().or_else(config::default_config_path);
    let mut settings = match path {
        Some(path) => config::load_settings(&path),
        None => {
            warn!("No config directory available, using defaults");
            Settings::default()
        }
    };

    if let Some(seed) = &args.seed {
        settings.data.seed_path = seed.display().to_string();
    }
    if args.dark {
        settings.ui.dark_mode = true;
    }
    if args.skip_login {
        settings.behavior.skip_login = true;
    }
    settings
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", config::default_config_content());
        return Ok(());
    }

    callpilot_core::logging::init()?;

    let settings = resolve_settings(&args);
    let engine = Engine::from_settings(settings)?;
    callpilot_tui::run(engine).await?;

    info!("callpilot exited cleanly");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_cli_overrides_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[ui]\ndark_mode = false\n\n[login]\ndelay_ms = 200\n").unwrap();

        let args = Args::try_parse_from([
            "callpilot",
            "--config",
            path.to_str().unwrap(),
            "--dark",
            "--skip-login",
            "--seed",
            "/tmp/seed.json",
        ])
        .unwrap();
        let settings = resolve_settings(&args);

        assert!(settings.ui.dark_mode);
        assert!(settings.behavior.skip_login);
        assert_eq!(settings.login.delay_ms, 200);
        assert_eq!(
            settings.data.seed_path(),
            Some(PathBuf::from("/tmp/seed.json"))
        );
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let args = Args::try_parse_from([
            "callpilot",
            "--config",
            dir.path().join("absent.toml").to_str().unwrap(),
        ])
        .unwrap();
        let settings = resolve_settings(&args);

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_print_default_config_flag() {
        let args = Args::try_parse_from(["callpilot", "--print-default-config"]).unwrap();
        assert!(args.print_default_config);
        assert!(!args.dark);
    }
}
