//! User preferences storage
//!
//! Handles saving and loading user preferences to a JSON file in the
//! application support directory. Preferences override the embedded
//! configuration defaults; they never store transcript content.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::config::ListenSettings;

/// User preferences
#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    /// Preferred recognition locale id (None = follow the system locale)
    pub preferred_locale: Option<String>,
    /// Maximum single-session duration override, in seconds
    pub listen_for_secs: Option<u64>,
    /// Trailing-silence timeout override, in seconds
    pub pause_for_secs: Option<u64>,
}

impl Preferences {
    /// Merge these preferences over the given listen settings
    pub fn apply_to(&self, settings: &mut ListenSettings) {
        if self.preferred_locale.is_some() {
            settings.preferred_locale = self.preferred_locale.clone();
        }
        if let Some(secs) = self.listen_for_secs {
            settings.listen_for_secs = secs;
        }
        if let Some(secs) = self.pause_for_secs {
            settings.pause_for_secs = secs;
        }
    }
}

/// Get the preferences file path
fn preferences_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("Speechpad").join("preferences.json"))
}

/// Load preferences from disk
///
/// Returns default preferences if the file doesn't exist or can't be read
pub fn load_preferences() -> Preferences {
    let Some(path) = preferences_path() else {
        return Preferences::default();
    };
    load_from(&path)
}

fn load_from(path: &Path) -> Preferences {
    if !path.exists() {
        return Preferences::default();
    }

    match fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(prefs) => prefs,
            Err(e) => {
                error!("Failed to parse preferences: {}", e);
                Preferences::default()
            }
        },
        Err(e) => {
            error!("Failed to read preferences file: {}", e);
            Preferences::default()
        }
    }
}

/// Save preferences to disk
pub fn save_preferences(prefs: &Preferences) -> Result<(), PreferencesError> {
    let path = preferences_path().ok_or(PreferencesError::NoConfigDir)?;
    save_to(prefs, &path)
}

fn save_to(prefs: &Preferences, path: &Path) -> Result<(), PreferencesError> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
            info!("Created preferences directory: {:?}", parent);
        }
    }

    let json = serde_json::to_string_pretty(prefs)?;
    fs::write(path, json)?;
    info!("Saved preferences to: {:?}", path);

    Ok(())
}

/// Get the preferred recognition locale, if set
pub fn get_preferred_locale() -> Option<String> {
    load_preferences().preferred_locale
}

/// Set the preferred recognition locale (None = follow the system locale)
pub fn set_preferred_locale(locale_id: Option<String>) -> Result<(), PreferencesError> {
    let mut prefs = load_preferences();
    prefs.preferred_locale = locale_id;
    save_preferences(&prefs)
}

/// Preferences errors
#[derive(Debug, thiserror::Error)]
pub enum PreferencesError {
    #[error("Could not find config directory")]
    NoConfigDir,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preferences() {
        let prefs = Preferences::default();
        assert!(prefs.preferred_locale.is_none());
        assert!(prefs.listen_for_secs.is_none());
        assert!(prefs.pause_for_secs.is_none());
    }

    #[test]
    fn test_preferences_path() {
        let path = preferences_path();
        assert!(path.is_some());
        assert!(path.unwrap().ends_with("Speechpad/preferences.json"));
    }

    #[test]
    fn test_apply_overrides_only_set_fields() {
        let prefs = Preferences {
            preferred_locale: Some("nb_NO".to_string()),
            listen_for_secs: None,
            pause_for_secs: Some(5),
        };
        let mut settings = ListenSettings::default();
        let default_listen_for = settings.listen_for_secs;
        prefs.apply_to(&mut settings);
        assert_eq!(settings.preferred_locale.as_deref(), Some("nb_NO"));
        assert_eq!(settings.listen_for_secs, default_listen_for);
        assert_eq!(settings.pause_for_secs, 5);
    }

    #[test]
    fn test_empty_preferences_change_nothing() {
        let mut settings = ListenSettings::default();
        Preferences::default().apply_to(&mut settings);
        assert_eq!(settings, ListenSettings::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");
        let prefs = Preferences {
            preferred_locale: Some("de_DE".to_string()),
            listen_for_secs: Some(30),
            pause_for_secs: None,
        };
        save_to(&prefs, &path).unwrap();
        assert_eq!(load_from(&path), prefs);
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert_eq!(load_from(&path), Preferences::default());
    }

    #[test]
    fn test_malformed_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "{not json").unwrap();
        assert_eq!(load_from(&path), Preferences::default());
    }
}
