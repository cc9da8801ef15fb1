//! Persisted setting records and their defaults.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_STYLE: &str = "hinglish";
pub const DEFAULT_LEVEL: &str = "balanced";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Only an explicit `"dark"` selects dark mode.
    pub fn from_stored(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str) {
            Some("dark") => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Glyph on the toggle button: the mode a press would switch to.
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "☀️",
            ThemeMode::Light => "🌙",
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Translation preferences, stored as one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationSettings {
    pub style: String,
    pub level: String,
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            style: DEFAULT_STYLE.to_string(),
            level: DEFAULT_LEVEL.to_string(),
        }
    }
}

impl TranslationSettings {
    pub fn new(style: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            style: style.into(),
            level: level.into(),
        }
    }

    /// Fill missing, empty or non-string fields with defaults.
    pub fn from_stored(value: Option<&Value>) -> Self {
        let field = |name: &str, default: &str| {
            value
                .and_then(|v| v.get(name))
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .unwrap_or(default)
                .to_string()
        };

        Self {
            style: field("style", DEFAULT_STYLE),
            level: field("level", DEFAULT_LEVEL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_theme_mode_from_stored() {
        assert_eq!(ThemeMode::from_stored(None), ThemeMode::Light);
        assert_eq!(ThemeMode::from_stored(Some(&json!("dark"))), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_stored(Some(&json!("light"))), ThemeMode::Light);
        assert_eq!(ThemeMode::from_stored(Some(&json!("neon"))), ThemeMode::Light);
        assert_eq!(ThemeMode::from_stored(Some(&json!(1))), ThemeMode::Light);
    }

    #[test]
    fn test_theme_toggle_is_involution() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(mode.toggled().toggled(), mode);
            assert_ne!(mode.toggled(), mode);
        }
    }

    #[test]
    fn test_theme_icons() {
        assert_eq!(ThemeMode::Dark.toggle_icon(), "☀️");
        assert_eq!(ThemeMode::Light.toggle_icon(), "🌙");
    }

    #[test]
    fn test_theme_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_value(ThemeMode::Dark).unwrap(), json!("dark"));
        assert_eq!(ThemeMode::Light.to_string(), "light");
    }

    #[test]
    fn test_translation_settings_defaults() {
        assert_eq!(
            TranslationSettings::from_stored(None),
            TranslationSettings::new("hinglish", "balanced")
        );
    }

    #[test]
    fn test_translation_settings_partial_record() {
        let stored = json!({"style": "direct"});
        assert_eq!(
            TranslationSettings::from_stored(Some(&stored)),
            TranslationSettings::new("direct", "balanced")
        );

        let stored = json!({"style": "", "level": "formal"});
        assert_eq!(
            TranslationSettings::from_stored(Some(&stored)),
            TranslationSettings::new("hinglish", "formal")
        );
    }

    #[test]
    fn test_translation_settings_round_trip_shape() {
        let settings = TranslationSettings::new("direct", "formal");
        let value = serde_json::to_value(&settings).unwrap();
        assert_eq!(value, json!({"style": "direct", "level": "formal"}));
        assert_eq!(TranslationSettings::from_stored(Some(&value)), settings);
    }
}
