//! Calculator configuration
//!
//! The only things configurable are where the two reference tables live.
//! Values come from an optional TOML file and may be overridden on the
//! command line.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::error::{DamageError, Result};

/// Default location of the enemy defense table
pub const DEFAULT_ENEMY_TABLE: &str = "data/enemies.csv";
/// Default location of the weapon motion table
pub const DEFAULT_MOTION_TABLE: &str = "data/motions.csv";

/// Config file picked up from the working directory when none is named
pub const DEFAULT_CONFIG_FILE: &str = "damage_calc.toml";

/// Paths to the reference tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// Enemy table: `defense,name,normal,strike,slash,stab`
    pub enemy_table_path: PathBuf,
    /// Motion table: `weapon,<motion>...`
    pub motion_table_path: PathBuf,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            enemy_table_path: PathBuf::from(DEFAULT_ENEMY_TABLE),
            motion_table_path: PathBuf::from(DEFAULT_MOTION_TABLE),
        }
    }
}

impl CalcConfig {
    /// Create a config with the default table paths
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| DamageError::Config(format!("Invalid TOML: {}", e)))
    }

    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| DamageError::Config(format!("Failed to read {:?}: {}", path, e)))?;
        Self::from_toml_str(&content)
    }

    /// Load the named config file, or `DEFAULT_CONFIG_FILE` if it exists,
    /// or fall back to defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    tracing::debug!("Using config file {}", path.display());
                    Self::load(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Replace whichever paths were given explicitly
    pub fn with_overrides(
        mut self,
        enemy_table_path: Option<PathBuf>,
        motion_table_path: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = enemy_table_path {
            self.enemy_table_path = path;
        }
        if let Some(path) = motion_table_path {
            self.motion_table_path = path;
        }
        self
    }

    /// Reject configs that cannot name a table
    pub fn validate(&self) -> Result<()> {
        if self.enemy_table_path.as_os_str().is_empty() {
            return Err(DamageError::Config("enemy_table_path is empty".into()));
        }
        if self.motion_table_path.as_os_str().is_empty() {
            return Err(DamageError::Config("motion_table_path is empty".into()));
        }
        Ok(())
    }
}
