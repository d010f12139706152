//! Configuration management

use crate::error::{MigrateError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "tagmigrate.toml";
pub const DEFAULT_POSTS_DIR: &str = "_posts";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub posts_dir: PathBuf,
    pub recursive: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            posts_dir: PathBuf::from(DEFAULT_POSTS_DIR),
            recursive: false,
        }
    }
}

impl Config {
    /// Load config from tagmigrate.toml in the given directory.
    /// A missing file yields the defaults.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(MigrateError::file_access(config_path, e)),
        };

        let mut config: Config = toml::from_str(&contents)?;

        if config.posts_dir.is_relative() {
            config.posts_dir = path.join(&config.posts_dir);
        }

        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded values.
    /// `None` keeps whatever the config file said.
    pub fn with_overrides(mut self, posts_dir: Option<PathBuf>, recursive: Option<bool>) -> Self {
        if let Some(dir) = posts_dir {
            self.posts_dir = dir;
        }
        if let Some(recursive) = recursive {
            self.recursive = recursive;
        }
        self
    }
}
