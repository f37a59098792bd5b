//! Engine configuration
//!
//! Defaults ship embedded in `config.toml`; user preferences may override
//! the listen timings on top (see `preferences`).

use std::time::Duration;

use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub listen: ListenSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Tuning for listen requests
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ListenSettings {
    /// Maximum single-session duration in seconds
    #[serde(default = "default_listen_for_secs")]
    pub listen_for_secs: u64,
    /// Trailing-silence timeout in seconds
    #[serde(default = "default_pause_for_secs")]
    pub pause_for_secs: u64,
    /// Let the engine insert punctuation
    #[serde(default = "default_auto_punctuation")]
    pub auto_punctuation: bool,
    /// Locale id to prefer over the system locale, when listed
    #[serde(default)]
    pub preferred_locale: Option<String>,
}

/// Presentation-facing text owned by the engine
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DisplaySettings {
    /// Shown when nothing has been recognized yet
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_listen_for_secs() -> u64 {
    60
}

fn default_pause_for_secs() -> u64 {
    3
}

fn default_auto_punctuation() -> bool {
    true
}

fn default_placeholder() -> String {
    crate::transcript::DEFAULT_PLACEHOLDER.to_string()
}

impl Default for ListenSettings {
    fn default() -> Self {
        Self {
            listen_for_secs: default_listen_for_secs(),
            pause_for_secs: default_pause_for_secs(),
            auto_punctuation: default_auto_punctuation(),
            preferred_locale: None,
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
        }
    }
}

impl Config {
    /// Load the configuration embedded at build time
    pub fn embedded() -> Result<Self, toml::de::Error> {
        const CONFIG_TOML: &str = include_str!("../config.toml");
        toml::from_str(CONFIG_TOML)
    }
}

impl ListenSettings {
    /// Maximum single-session duration
    pub fn listen_for(&self) -> Duration {
        Duration::from_secs(self.listen_for_secs)
    }

    /// Trailing-silence timeout
    pub fn pause_for(&self) -> Duration {
        Duration::from_secs(self.pause_for_secs)
    }
}
