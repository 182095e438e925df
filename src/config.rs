//! Configuration for studentdb
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a Store instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Directory that database names are resolved against.
    /// A database called `school` lives at `{data_dir}/school.{db_extension}`.
    /// Backup and CSV paths are NOT resolved against it.
    pub data_dir: PathBuf,

    /// Extension appended to database names (without the leading dot)
    pub db_extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            db_extension: "db".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Resolve a database name to its backing file path
    pub fn database_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(format!("{}.{}", name, self.db_extension))
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for database files)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the database file extension
    pub fn db_extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        self.config.db_extension = extension.trim_start_matches('.').to_string();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
