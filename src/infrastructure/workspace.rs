//! Workspace root discovery

use crate::error::{BerichtsheftError, Result};
use crate::infrastructure::config::CONFIG_FILE;
use crate::infrastructure::{Config, EntryStore, JsonFileStore};
use std::path::{Path, PathBuf};

pub const ROOT_ENV: &str = "BERICHTSHEFT_ROOT";

/// Directory holding the config, the entry store and the template
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
}

impl Workspace {
    pub fn new(root: PathBuf) -> Self {
        Workspace { root }
    }

    /// Locate the workspace.
    /// First checks BERICHTSHEFT_ROOT, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if path.is_dir() {
                return Ok(Workspace::new(path));
            }
            return Err(BerichtsheftError::Config(format!(
                "{} is set to '{}' but that directory does not exist",
                ROOT_ENV,
                path.display()
            )));
        }

        let current_dir = std::env::current_dir()?;
        Ok(Self::discover_from(&current_dir))
    }

    /// Nearest ancestor of `start` holding berichtsheft.toml, else `start` itself
    pub fn discover_from(start: &Path) -> Self {
        start
            .ancestors()
            .find(|dir| Self::has_config(dir))
            .map(|dir| Workspace::new(dir.to_path_buf()))
            .unwrap_or_else(|| Workspace::new(start.to_path_buf()))
    }

    fn has_config(path: &Path) -> bool {
        path.join(CONFIG_FILE).is_file()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_config(&self.root)
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    /// Write the default config and an empty entry store
    pub fn initialize(&self) -> Result<Config> {
        if self.is_initialized() {
            return Err(BerichtsheftError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        let config = Config::default();
        self.save_config(&config)?;

        let store = self.entry_store(&config);
        if !store.exists() {
            store.load()?;
        }

        Ok(config)
    }

    pub fn entry_store(&self, config: &Config) -> JsonFileStore {
        JsonFileStore::new(config.data_path(&self.root))
    }
}
