//! Path resolution utilities for dataprove
//!
//! Everything dataprove persists lives in a `.dataprove` directory under the
//! working directory.

use std::path::{Path, PathBuf};

/// Resolve the current working directory, optionally using an override.
///
/// # Arguments
/// * `cwd_option` - Optional override for the working directory
///
/// # Returns
/// The resolved working directory path
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Get the path to the .dataprove directory.
pub fn get_state_dir(root: &Path) -> PathBuf {
    root.join(".dataprove")
}

/// Get the path to the config.json file.
pub fn get_config_path(root: &Path) -> PathBuf {
    get_state_dir(root).join("config.json")
}

/// Get the path to the preferences.json file.
pub fn get_preferences_path(root: &Path) -> PathBuf {
    get_state_dir(root).join("preferences.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_paths() {
        let root = PathBuf::from("/site");
        assert_eq!(get_state_dir(&root), PathBuf::from("/site/.dataprove"));
        assert_eq!(get_config_path(&root), PathBuf::from("/site/.dataprove/config.json"));
        assert_eq!(
            get_preferences_path(&root),
            PathBuf::from("/site/.dataprove/preferences.json")
        );
    }

    #[test]
    fn test_resolve_cwd_with_override() {
        let path = PathBuf::from("/custom/path");
        assert_eq!(resolve_cwd(Some(&path)), path);
    }

    #[test]
    fn test_resolve_cwd_without_override() {
        let resolved = resolve_cwd(None);
        assert!(!resolved.as_os_str().is_empty());
    }
}
