//! Config schema - Configuration for dataprove

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::Project;

/// Main configuration for dataprove
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Delay between a successful sign-in/sign-up and the redirect
    #[serde(default = "default_navigation_delay_ms")]
    pub navigation_delay_ms: u64,

    /// Inactivity after which the session is marked idle
    #[serde(default = "default_idle_timeout_secs")]
    pub idle_timeout_secs: u64,

    /// Company that coworker invites are pinned to
    #[serde(default = "default_company_name")]
    pub company_name: String,

    /// How many project tools start switched on
    #[serde(default = "default_enabled_tools")]
    pub default_enabled_tools: usize,

    /// Project cards shown on the dashboard
    #[serde(default = "default_projects")]
    pub projects: Vec<Project>,
}

impl Config {
    pub fn navigation_delay(&self) -> Duration {
        Duration::from_millis(self.navigation_delay_ms)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    /// Find a dashboard project by id
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

fn default_schema_version() -> u32 {
    1
}

fn default_navigation_delay_ms() -> u64 {
    1000
}

fn default_idle_timeout_secs() -> u64 {
    5 * 60
}

fn default_company_name() -> String {
    "Data Prove".to_string()
}

fn default_enabled_tools() -> usize {
    5
}

fn default_projects() -> Vec<Project> {
    vec![
        Project::new(
            "hq",
            "Data Prove HQ",
            "Company-wide announcements and everything everyone needs to know.",
            "Company HQ",
        ),
        Project::new(
            "getting-started",
            "Getting Started",
            "A sample project to help you learn the ropes.",
            "Sample",
        ),
        Project::new(
            "analytics-dashboard",
            "Analytics Dashboard",
            "Rebuild the quarterly reporting pipeline and dashboards.",
            "Team",
        ),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: default_schema_version(),
            navigation_delay_ms: default_navigation_delay_ms(),
            idle_timeout_secs: default_idle_timeout_secs(),
            company_name: default_company_name(),
            default_enabled_tools: default_enabled_tools(),
            projects: default_projects(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.schema_version, 1);
        assert_eq!(config.navigation_delay(), Duration::from_millis(1000));
        assert_eq!(config.idle_timeout(), Duration::from_secs(300));
        assert_eq!(config.company_name, "Data Prove");
        assert_eq!(config.default_enabled_tools, 5);
        assert_eq!(config.projects.len(), 3);
    }

    #[test]
    fn test_config_partial_json() {
        let json = r#"{"navigation_delay_ms": 250, "company_name": "Acme"}"#;
        let parsed: Config = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.navigation_delay_ms, 250);
        assert_eq!(parsed.company_name, "Acme");
        // Other fields should have defaults
        assert_eq!(parsed.idle_timeout_secs, 300);
        assert_eq!(parsed.default_enabled_tools, 5);
        assert!(parsed.project("hq").is_some());
    }

    #[test]
    fn test_config_project_lookup() {
        let config = Config::default();
        assert_eq!(config.project("getting-started").map(|p| p.name.as_str()), Some("Getting Started"));
        assert!(config.project("missing").is_none());
    }
}
