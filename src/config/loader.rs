//! Configuration loading with defaults

use std::collections::HashSet;
use std::path::Path;

use crate::errors::{DataproveError, Result};
use crate::fs;
use crate::schemas::{Config, ProjectTool};

/// Load configuration from the working directory, falling back to defaults.
///
/// If `.dataprove/config.json` exists it is read and merged with defaults,
/// then checked for values the engine cannot work with.
///
/// # Arguments
/// * `root` - Directory containing `.dataprove`
pub fn load_config(root: &Path) -> Result<Config> {
    let config = fs::read_config(root)?;
    validate_config(&config)?;
    Ok(config)
}

/// Reject configurations that would leave the dashboard inconsistent
pub fn validate_config(config: &Config) -> Result<()> {
    if config.company_name.trim().is_empty() {
        return Err(DataproveError::ConfigError(
            "company_name must not be empty".to_string(),
        ));
    }

    if config.default_enabled_tools > ProjectTool::ALL.len() {
        return Err(DataproveError::ConfigError(format!(
            "default_enabled_tools is {} but only {} tools exist",
            config.default_enabled_tools,
            ProjectTool::ALL.len()
        )));
    }

    if config.idle_timeout_secs == 0 {
        return Err(DataproveError::ConfigError(
            "idle_timeout_secs must be greater than zero".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for project in &config.projects {
        if project.id.trim().is_empty() {
            return Err(DataproveError::ConfigError(format!(
                "project \"{}\" has an empty id",
                project.name
            )));
        }
        if !seen.insert(project.id.as_str()) {
            return Err(DataproveError::ConfigError(format!(
                "duplicate project id: {}",
                project.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::Project;
    use std::fs as std_fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_defaults() {
        let temp = TempDir::new().unwrap();

        let config = load_config(temp.path()).unwrap();
        assert_eq!(config.navigation_delay_ms, 1000);
        assert_eq!(config.idle_timeout_secs, 300);
        assert_eq!(config.company_name, "Data Prove");
        assert_eq!(config.default_enabled_tools, 5);
    }

    #[test]
    fn test_load_config_from_file() {
        let temp = TempDir::new().unwrap();
        let state_dir = temp.path().join(".dataprove");
        std_fs::create_dir(&state_dir).unwrap();

        let config_content = r#"{
            "company_name": "Acme",
            "navigation_delay_ms": 250,
            "projects": [{"id": "ops", "name": "Ops"}]
        }"#;
        std_fs::write(state_dir.join("config.json"), config_content).unwrap();

        let config = load_config(temp.path()).unwrap();
        assert_eq!(config.company_name, "Acme");
        assert_eq!(config.navigation_delay_ms, 250);
        assert_eq!(config.projects.len(), 1);
        assert_eq!(config.projects[0].description, "");
        // Default for unspecified field
        assert_eq!(config.idle_timeout_secs, 300);
    }

    #[test]
    fn test_load_config_invalid_json() {
        let temp = TempDir::new().unwrap();
        let state_dir = temp.path().join(".dataprove");
        std_fs::create_dir(&state_dir).unwrap();
        std_fs::write(state_dir.join("config.json"), "{ nope").unwrap();

        let err = load_config(temp.path()).unwrap_err();
        assert_eq!(err.code(), "INVALID_JSON");
    }

    #[test]
    fn test_validate_rejects_too_many_enabled_tools() {
        let config = Config {
            default_enabled_tools: 9,
            ..Config::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
        assert!(err.to_string().contains("only 8 tools"));
    }

    #[test]
    fn test_validate_rejects_duplicate_project_ids() {
        let config = Config {
            projects: vec![
                Project::new("hq", "HQ", "", ""),
                Project::new("hq", "Other HQ", "", ""),
            ],
            ..Config::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("duplicate project id: hq"));
    }

    #[test]
    fn test_validate_rejects_blank_company() {
        let config = Config {
            company_name: "  ".to_string(),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }
}
