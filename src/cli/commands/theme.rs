//! Theme command - Show or change the stored theme preference

use std::path::Path;

use crate::cli::ThemeAction;
use crate::errors::Result;
use crate::fs::resolve_cwd;
use crate::schemas::Theme;
use crate::store::{FileThemeStore, ThemeStore};

/// Apply a theme action to the store and return the resulting theme
pub fn apply<S: ThemeStore>(store: &mut S, action: ThemeAction) -> Result<Theme> {
    match action {
        ThemeAction::Get => store.get_preference(),
        ThemeAction::Set { theme } => {
            store.set_preference(theme)?;
            tracing::info!("Theme set to {}", theme);
            Ok(theme)
        }
        ThemeAction::Toggle => {
            let theme = store.get_preference()?.toggled();
            store.set_preference(theme)?;
            tracing::info!("Theme switched to {}", theme);
            Ok(theme)
        }
    }
}

/// Show or change the theme stored under `.dataprove/preferences.json`
pub async fn run(cwd: Option<&Path>, action: ThemeAction) -> Result<()> {
    let root = resolve_cwd(cwd);
    let mut store = FileThemeStore::new(root);
    let theme = apply(&mut store, action)?;
    println!("{} {}", theme.toggle_icon(), theme);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryThemeStore;
    use tempfile::TempDir;

    #[test]
    fn test_get_defaults_to_light() {
        let mut store = MemoryThemeStore::new();
        assert_eq!(apply(&mut store, ThemeAction::Get).unwrap(), Theme::Light);
        assert_eq!(store.raw(), None);
    }

    #[test]
    fn test_toggle_flips_and_persists() {
        let mut store = MemoryThemeStore::new();
        assert_eq!(apply(&mut store, ThemeAction::Toggle).unwrap(), Theme::Dark);
        assert_eq!(apply(&mut store, ThemeAction::Toggle).unwrap(), Theme::Light);
        assert_eq!(store.raw(), Some("light"));
    }

    #[tokio::test]
    async fn test_run_writes_preferences_file() {
        let temp = TempDir::new().unwrap();
        run(Some(temp.path()), ThemeAction::Set { theme: Theme::Dark })
            .await
            .unwrap();

        let store = FileThemeStore::new(temp.path());
        assert_eq!(store.get_preference().unwrap(), Theme::Dark);
    }
}
