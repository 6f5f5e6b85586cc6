//! Configuration management

use crate::error::{BerichtsheftError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "berichtsheft.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Entry store, relative to the workspace root unless absolute
    pub data_file: PathBuf,
    /// Report template, relative to the workspace root unless absolute
    pub template: PathBuf,
    /// Default reporter name for exports
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter: Option<String>,
    /// Converter program; searched on PATH when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from("data.json"),
            template: PathBuf::from("Vorlage.docx"),
            reporter: None,
            converter: None,
        }
    }
}

impl Config {
    /// Load config from berichtsheft.toml in the given directory.
    /// A missing file yields the defaults.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(BerichtsheftError::Io(e)),
        };

        toml::from_str(&contents).map_err(|e| {
            BerichtsheftError::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e))
        })
    }

    /// Save config to berichtsheft.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path.join(CONFIG_FILE), contents)?;
        Ok(())
    }

    pub fn data_path(&self, root: &Path) -> PathBuf {
        root.join(&self.data_file)
    }

    pub fn template_path(&self, root: &Path) -> PathBuf {
        root.join(&self.template)
    }

    /// Configured reporter name, ignoring blank values
    pub fn reporter(&self) -> Option<&str> {
        self.reporter
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}
