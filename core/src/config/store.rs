//! Durable load/save of the module settings
//!
//! The store never holds settings itself: `load` hands back a fresh record only
//! when the whole read + decode path succeeded, so a failed reload can't disturb
//! the copy the caller already has.

use std::path::Path;

use valheel_types::Settings;

use super::error::ConfigError;
use super::file::{DiskFile, SettingsFile, retry};

/// Attempts per read or write before giving up
pub const RETRIES: u32 = 10;

/// File name of the settings record inside the module directory
pub const SETTINGS_FILE_NAME: &str = "Settings.json";

pub struct ConfigStore {
    file: Box<dyn SettingsFile>,
    retries: u32,
}

impl ConfigStore {
    pub fn new(file: impl SettingsFile + 'static) -> Self {
        Self {
            file: Box::new(file),
            retries: RETRIES,
        }
    }

    /// Store backed by `<mod_path>/Settings.json`
    pub fn for_module(mod_path: &Path) -> Self {
        Self::new(DiskFile::new(mod_path.join(SETTINGS_FILE_NAME)))
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries.max(1);
        self
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Load settings, writing the defaults first if no file exists yet.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let path = self.file.path();
        if !self.file.exists() {
            tracing::info!(path = ?path, "Creating settings file");
            self.save(&Settings::default())?;
        } else {
            tracing::info!(path = ?path, "Loading settings");
        }

        let text = retry(self.retries, || self.file.read()).map_err(|source| {
            tracing::warn!(path = ?path, error = %source, "Failed to read settings");
            ConfigError::Read {
                path: path.to_path_buf(),
                attempts: self.retries,
                source,
            }
        })?;

        decode(&text).map_err(|source| {
            tracing::warn!(path = ?path, error = %source, "Failed to deserialize settings");
            ConfigError::Decode {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    pub fn save(&self, settings: &Settings) -> Result<(), ConfigError> {
        let path = self.file.path();
        let text = encode(settings)?;

        retry(self.retries, || self.file.write(&text)).map_err(|source| {
            tracing::warn!(path = ?path, error = %source, "Failed to save settings");
            ConfigError::Write {
                path: path.to_path_buf(),
                attempts: self.retries,
                source,
            }
        })?;

        tracing::info!(path = ?path, "Saved settings");
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Encoding
// ═══════════════════════════════════════════════════════════════════════════

/// Pretty-printed JSON with two-space indentation
pub fn encode(settings: &Settings) -> Result<String, ConfigError> {
    serde_json::to_string_pretty(settings).map_err(ConfigError::Encode)
}

/// Decode settings text, tolerating trailing commas
pub fn decode(text: &str) -> Result<Settings, serde_json::Error> {
    serde_json::from_str(&strip_trailing_commas(text))
}

/// Drop commas that directly precede a closing `}` or `]`.
/// Commas inside string literals are left alone.
fn strip_trailing_commas(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            ',' if text[i + 1..].trim_start().starts_with(['}', ']']) => {}
            _ => out.push(c),
        }
    }
    out
}
