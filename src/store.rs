//! Persistent theme preference
//!
//! The preference lives under the `"theme"` key with the values `"light"` or
//! `"dark"`. A missing or unrecognised value reads back as the light theme.

use std::path::{Path, PathBuf};

use crate::errors::Result;
use crate::fs;
use crate::schemas::Theme;

/// Key the theme preference is stored under
pub const THEME_KEY: &str = "theme";

/// Key/value storage for the theme preference
pub trait ThemeStore {
    fn get_preference(&self) -> Result<Theme>;

    fn set_preference(&mut self, theme: Theme) -> Result<()>;
}

fn parse_stored(value: Option<&str>) -> Theme {
    match value {
        None => Theme::default(),
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring unknown stored theme: {}", raw);
            Theme::default()
        }),
    }
}

/// In-memory store, used by scripted replays and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    value: Option<String>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: Theme) -> Self {
        MemoryThemeStore {
            value: Some(theme.to_string()),
        }
    }

    /// Raw stored value
    pub fn raw(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn get_preference(&self) -> Result<Theme> {
        Ok(parse_stored(self.value.as_deref()))
    }

    fn set_preference(&mut self, theme: Theme) -> Result<()> {
        self.value = Some(theme.to_string());
        Ok(())
    }
}

/// Store backed by `.dataprove/preferences.json`
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    root: PathBuf,
}

impl FileThemeStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileThemeStore { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ThemeStore for FileThemeStore {
    fn get_preference(&self) -> Result<Theme> {
        let preferences = fs::read_preferences(&self.root)?;
        Ok(parse_stored(preferences.get(THEME_KEY).map(String::as_str)))
    }

    fn set_preference(&mut self, theme: Theme) -> Result<()> {
        let mut preferences = fs::read_preferences(&self.root)?;
        preferences.insert(THEME_KEY.to_string(), theme.to_string());
        fs::write_preferences(&self.root, &preferences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_defaults_to_light() {
        let mut store = MemoryThemeStore::new();
        assert_eq!(store.get_preference().unwrap(), Theme::Light);

        store.set_preference(Theme::Dark).unwrap();
        assert_eq!(store.get_preference().unwrap(), Theme::Dark);
        assert_eq!(store.raw(), Some("dark"));
    }

    #[test]
    fn test_unknown_value_falls_back_to_light() {
        assert_eq!(parse_stored(Some("sepia")), Theme::Light);
        assert_eq!(parse_stored(Some("dark")), Theme::Dark);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let temp = TempDir::new().unwrap();
        assert_eq!(FileThemeStore::new(temp.path()).get_preference().unwrap(), Theme::Light);

        FileThemeStore::new(temp.path()).set_preference(Theme::Dark).unwrap();
        assert_eq!(FileThemeStore::new(temp.path()).get_preference().unwrap(), Theme::Dark);

        let raw = std::fs::read_to_string(fs::get_preferences_path(temp.path())).unwrap();
        assert!(raw.contains("\"theme\": \"dark\""));
    }

    #[test]
    fn test_file_store_keeps_other_preferences() {
        let temp = TempDir::new().unwrap();
        let mut prefs = fs::Preferences::new();
        prefs.insert("sidebar".to_string(), "collapsed".to_string());
        fs::write_preferences(temp.path(), &prefs).unwrap();

        FileThemeStore::new(temp.path()).set_preference(Theme::Dark).unwrap();
        let read = fs::read_preferences(temp.path()).unwrap();
        assert_eq!(read.get("sidebar").map(String::as_str), Some("collapsed"));
        assert_eq!(read.get(THEME_KEY).map(String::as_str), Some("dark"));
    }
}
