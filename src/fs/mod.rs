//! File system utilities for dataprove
//!
//! Provides path resolution and JSON file operations.

mod json;
mod paths;

pub use json::{
    read_config, read_json, read_preferences, write_json, write_preferences, Preferences,
};
pub use paths::{get_config_path, get_preferences_path, get_state_dir, resolve_cwd};
