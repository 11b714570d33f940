//! Persisted user preferences: theme and language.
//!
//! Calculation history is deliberately not persisted; only the two header
//! toggles survive a restart.

use crate::locale::Lang;
use crate::storage::config_dir;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalcSettings {
    pub theme: Theme,
    pub lang: Lang,
}

impl Default for CalcSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            lang: Lang::En,
        }
    }
}

impl CalcSettings {
    fn config_path() -> PathBuf {
        config_dir("bincalc").join("settings.json")
    }

    /// Load saved preferences, falling back to defaults on any failure.
    pub fn load() -> Self {
        let path = Self::config_path();
        std::fs::read_to_string(&path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    pub fn save(&self) {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Ok(json) = serde_json::to_string_pretty(self) {
            let _ = std::fs::write(path, json);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = CalcSettings::default();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.lang, Lang::En);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = CalcSettings {
            theme: Theme::Light,
            lang: Lang::Jp,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: CalcSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_unknown_file_falls_back_to_defaults() {
        let parsed: Option<CalcSettings> = serde_json::from_str("not json").ok();
        assert_eq!(parsed.unwrap_or_default(), CalcSettings::default());
    }
}
