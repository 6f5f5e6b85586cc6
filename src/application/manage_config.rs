//! Config management use case

use crate::error::{BerichtsheftError, Result};
use crate::infrastructure::{Config, Workspace};
use std::path::PathBuf;

pub const CONFIG_KEYS: [&str; 4] = ["data_file", "template", "reporter", "converter"];

/// Service for managing workspace configuration
pub struct ConfigService {
    workspace: Workspace,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(workspace: Workspace) -> Self {
        ConfigService { workspace }
    }

    /// Get a single config value; unset optional keys read as empty
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.workspace.load_config()?;

        match key {
            "data_file" => Ok(config.data_file.display().to_string()),
            "template" => Ok(config.template.display().to_string()),
            "reporter" => Ok(config.reporter.unwrap_or_default()),
            "converter" => Ok(config.converter.unwrap_or_default()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value; an empty value clears optional keys
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.workspace.load_config()?;
        let value = value.trim();

        match key {
            "data_file" | "template" if value.is_empty() => {
                return Err(BerichtsheftError::Config(format!(
                    "'{}' cannot be empty",
                    key
                )));
            }
            "data_file" => config.data_file = PathBuf::from(value),
            "template" => config.template = PathBuf::from(value),
            "reporter" => config.reporter = non_empty(value),
            "converter" => config.converter = non_empty(value),
            _ => return Err(unknown_key(key)),
        }

        self.workspace.save_config(&config)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.workspace.load_config()
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn unknown_key(key: &str) -> BerichtsheftError {
    BerichtsheftError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
