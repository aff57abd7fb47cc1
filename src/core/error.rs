use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DamageError {
    #[error("Cannot open table {path:?}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed field on line {line}, column {column}: {value:?}")]
    Parse {
        line: usize,
        column: usize,
        value: String,
    },

    #[error("Unknown enemy: {0}")]
    EnemyNotFound(String),

    #[error("Unknown weapon: {0}")]
    WeaponNotFound(String),

    #[error("Weapon '{weapon}' has no motion '{motion}'")]
    MotionNotFound { weapon: String, motion: String },

    #[error("Unknown attack attribute: {0}")]
    InvalidAttribute(String),

    #[error("Defense must be positive, got {0}")]
    InvalidDefense(f64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DamageError {
    /// True for the three lookup misses (enemy, weapon, weapon+motion)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DamageError::EnemyNotFound(_)
                | DamageError::WeaponNotFound(_)
                | DamageError::MotionNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DamageError>;
