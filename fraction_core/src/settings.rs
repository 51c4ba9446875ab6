//! # Engine Settings
//!
//! Defaults the presentation layer applies to every request: which locale
//! to explain in and how many fractional digits decimal conversion keeps.
//! Settings are plain JSON so they can live next to the site configuration.
//!
//! ```rust
//! use fraction_core::locale::Locale;
//! use fraction_core::settings::EngineSettings;
//!
//! let settings = EngineSettings::from_json_str(r#"{ "locale": "es" }"#).unwrap();
//! assert_eq!(settings.locale, Locale::Es);
//! assert_eq!(settings.precision, 6);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::locale::Locale;
use crate::operations::DEFAULT_PRECISION;

/// Per-caller engine defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Language for error messages and steps
    pub locale: Locale,

    /// Fractional digits kept when converting decimals
    pub precision: u32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            locale: Locale::default(),
            precision: DEFAULT_PRECISION,
        }
    }
}

/// Failure to load a settings file.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file '{path}'")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings in '{path}'")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl EngineSettings {
    /// Default settings in `locale`.
    pub fn new(locale: Locale) -> Self {
        EngineSettings {
            locale,
            ..EngineSettings::default()
        }
    }

    /// Set the decimal precision (builder pattern)
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let json = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: display.clone(),
            source,
        })?;

        Self::from_json_str(&json).map_err(|source| SettingsError::Parse {
            path: display,
            source,
        })
    }
}
