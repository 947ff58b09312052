use std::{fmt, str::FromStr};

use thiserror::Error;

pub const THEME_STORAGE_KEY: &str = "theme";
pub const THEME_ATTR: &str = "data-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown theme preference: {0:?}")]
pub struct ThemeParseError(pub String);

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn toggle_label(self) -> String {
        format!("Switch to {} theme", self.toggled())
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

/// Durable string storage scoped to the site origin.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn store(&mut self, key: &str, value: &str);
}

/// Stored preference if there is a valid one, otherwise the system choice.
pub fn load_theme(store: &impl PreferenceStore, system_prefers_dark: bool) -> ThemePreference {
    store
        .load(THEME_STORAGE_KEY)
        .and_then(|raw| match raw.parse() {
            Ok(theme) => Some(theme),
            Err(e) => {
                if !raw.is_empty() {
                    log::warn!("ignoring stored theme: {e}");
                }
                None
            }
        })
        .unwrap_or_else(|| ThemePreference::from_system(system_prefers_dark))
}

pub fn save_theme(store: &mut impl PreferenceStore, theme: ThemePreference) {
    store.store(THEME_STORAGE_KEY, theme.as_str());
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct MemoryStore(HashMap<String, String>);

    impl PreferenceStore for MemoryStore {
        fn load(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }

        fn store(&mut self, key: &str, value: &str) {
            self.0.insert(key.to_string(), value.to_string());
        }
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("dark".parse::<ThemePreference>(), Ok(ThemePreference::Dark));
        assert_eq!("light".parse::<ThemePreference>(), Ok(ThemePreference::Light));
        assert!("sepia".parse::<ThemePreference>().is_err());
        assert_eq!(ThemePreference::Light.to_string(), "light");
        assert_eq!(ThemePreference::Dark.toggle_label(), "Switch to light theme");
    }

    #[test]
    fn test_stored_preference_wins_over_system() {
        let mut store = MemoryStore::default();
        save_theme(&mut store, ThemePreference::Dark);
        // "reload": a fresh read with a light system preference
        assert_eq!(load_theme(&store, false), ThemePreference::Dark);
        assert_eq!(store.load(THEME_STORAGE_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_missing_preference_uses_system() {
        let store = MemoryStore::default();
        assert_eq!(load_theme(&store, true), ThemePreference::Dark);
        assert_eq!(load_theme(&store, false), ThemePreference::Light);
    }

    #[test]
    fn test_invalid_or_empty_preference_uses_system() {
        let mut store = MemoryStore::default();
        store.store(THEME_STORAGE_KEY, "");
        assert_eq!(load_theme(&store, false), ThemePreference::Light);
        store.store(THEME_STORAGE_KEY, "purple");
        assert_eq!(load_theme(&store, true), ThemePreference::Dark);
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut store = MemoryStore::default();
        let theme = load_theme(&store, false).toggled();
        save_theme(&mut store, theme);
        assert_eq!(load_theme(&store, false), ThemePreference::Dark);
        save_theme(&mut store, theme.toggled());
        assert_eq!(load_theme(&store, true), ThemePreference::Light);
    }
}
