//! Settings loader for config.toml

use std::path::{Path, PathBuf};

use archview_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "archview";

/// Default location of the settings file, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from the default location.
///
/// Never fails: a missing, unreadable or malformed file yields defaults.
pub fn load_settings() -> Settings {
    match default_config_path() {
        Some(path) => load_settings_from(&path),
        None => {
            debug!("No platform config directory, using default settings");
            Settings::default()
        }
    }
}

/// Load settings from a specific file, falling back to defaults.
pub fn load_settings_from(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
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
