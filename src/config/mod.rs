//! @acp:module "Configuration"
//! @acp:summary "Project configuration loading and defaults"
//! @acp:domain cli
//! @acp:layer config

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::candidates::SourceLayout;
use crate::runner::DEFAULT_PROGRAM;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_PATH: &str = ".hasura-pick.json";

/// @acp:summary "Settings for locating seeds/migrations and invoking hasura"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// hasura executable to run
    #[serde(default = "default_hasura_bin")]
    pub hasura_bin: String,

    /// Hasura project directory holding seeds/ and migrations/
    #[serde(default = "default_project_dir")]
    pub project_dir: PathBuf,

    /// Seeds directory, relative to project_dir unless absolute
    #[serde(default = "default_seeds_dir")]
    pub seeds_dir: PathBuf,

    /// Migrations directory, relative to project_dir unless absolute
    #[serde(default = "default_migrations_dir")]
    pub migrations_dir: PathBuf,

    /// Database used when --database-name is not given
    #[serde(default = "default_database_name")]
    pub database_name: String,

    /// Extra flags forwarded to every command (strings or booleans)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub flags: BTreeMap<String, Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hasura_bin: default_hasura_bin(),
            project_dir: default_project_dir(),
            seeds_dir: default_seeds_dir(),
            migrations_dir: default_migrations_dir(),
            database_name: default_database_name(),
            flags: BTreeMap::new(),
        }
    }
}

impl Config {
    /// @acp:summary "Load config from a JSON file"
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @acp:summary "Load config if the file exists, defaults otherwise"
    pub fn load_if_present<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Resolved seed and migration directories
    pub fn layout(&self) -> SourceLayout {
        SourceLayout {
            seeds_dir: self.project_dir.join(&self.seeds_dir),
            migrations_dir: self.project_dir.join(&self.migrations_dir),
        }
    }
}

fn default_hasura_bin() -> String {
    DEFAULT_PROGRAM.to_string()
}

fn default_project_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_seeds_dir() -> PathBuf {
    PathBuf::from("seeds")
}

fn default_migrations_dir() -> PathBuf {
    PathBuf::from("migrations")
}

fn default_database_name() -> String {
    "default".to_string()
}
