// init_config.rs
// Loads a shared settings document (settings.toml or a JSON share payload) and overlays
// it on the defaults. Only fields with the expected type are taken.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::config::Settings;
use crate::error::{Result, SettingsError};

pub const DEFAULT_SETTINGS_FILE: &str = "settings.toml";

/// Settings from a TOML document overlaid on the defaults.
pub fn settings_from_toml(content: &str) -> Result<Settings> {
    let value: Value = toml::from_str(content)?;
    Ok(overlay(&value))
}

/// Settings from a JSON share payload overlaid on the defaults.
pub fn settings_from_json(content: &str) -> Result<Settings> {
    let value: Value = serde_json::from_str(content)?;
    Ok(overlay(&value))
}

pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => settings_from_toml(&content)?,
        Some("json") => settings_from_json(&content)?,
        _ => return Err(SettingsError::UnsupportedFormat(path.to_path_buf())),
    };
    tracing::info!(path = %path.display(), "loaded settings");
    Ok(settings)
}

/// `settings.toml` from the working directory when present, defaults otherwise.
pub fn load_default() -> Result<Settings> {
    if Path::new(DEFAULT_SETTINGS_FILE).exists() {
        load_from_file(DEFAULT_SETTINGS_FILE)
    } else {
        Ok(Settings::default())
    }
}

fn overlay(value: &Value) -> Settings {
    let mut settings = Settings::default();
    settings.merge_value(value);
    settings.sanitize()
}
