//! Settings parser for .gatehouse/config.toml

use super::types::Settings;
use gatehouse_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const GATEHOUSE_DIR: &str = ".gatehouse";

/// Path of the config file for a base directory
pub fn config_path(base_path: &Path) -> PathBuf {
    base_path.join(GATEHOUSE_DIR).join(CONFIG_FILENAME)
}

/// Load settings from .gatehouse/config.toml
///
/// Returns default settings if file doesn't exist or can't be parsed.
pub fn load_settings(base_path: &Path) -> Settings {
    let config_path = config_path(base_path);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match parse_settings(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Parse settings from TOML text
pub fn parse_settings(content: &str) -> Result<Settings> {
    toml::from_str(content).map_err(|e| Error::config_invalid(e.to_string()))
}

/// Create the default config file in .gatehouse/ directory
///
/// Leaves an existing file untouched. Returns the config file path.
pub fn init_config_dir(base_path: &Path) -> Result<PathBuf> {
    let gatehouse_dir = base_path.join(GATEHOUSE_DIR);

    if !gatehouse_dir.exists() {
        std::fs::create_dir_all(&gatehouse_dir)
            .map_err(|e| Error::config(format!("Failed to create .gatehouse dir: {}", e)))?;
    }

    let config_path = gatehouse_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# Gatehouse Configuration

[page]
title = "Agmo Assignment"
description = "Pre-Interview Assignment"
favicon = "/images/agmo-logo.png"

[assets]
background = "/images/banner.jpg"
logo = "/images/agmo-logo.png"
logo_alt = "Company logo"

[ui]
icons = "unicode"       # or "nerd_fonts"
notification_ms = 6000  # toast auto-dismiss delay

[auth]
# Uncomment to make every login attempt fail with this reason
# reject_reason = "Invalid email or password"
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Wrote default config to {:?}", config_path);
    }

    Ok(config_path)
}
