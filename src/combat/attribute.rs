//! Attack attributes and cut-rate selection

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::{DamageError, Result};
use crate::tables::EnemyRecord;

/// Damage type of an attack - selects which enemy cut rate applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackAttribute {
    Normal,
    Strike,
    Slash,
    Stab,
}

impl AttackAttribute {
    pub const ALL: [AttackAttribute; 4] = [
        AttackAttribute::Normal,
        AttackAttribute::Strike,
        AttackAttribute::Slash,
        AttackAttribute::Stab,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttackAttribute::Normal => "Normal",
            AttackAttribute::Strike => "Strike",
            AttackAttribute::Slash => "Slash",
            AttackAttribute::Stab => "Stab",
        }
    }
}

impl fmt::Display for AttackAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive, whole-word match. Whitespace is not trimmed.
impl FromStr for AttackAttribute {
    type Err = DamageError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Ok(AttackAttribute::Normal),
            "strike" => Ok(AttackAttribute::Strike),
            "slash" => Ok(AttackAttribute::Slash),
            "stab" => Ok(AttackAttribute::Stab),
            _ => Err(DamageError::InvalidAttribute(s.to_string())),
        }
    }
}

/// Cut rate of `record` for the attribute named by `attribute_text`
pub fn resolve_cut_rate(record: &EnemyRecord, attribute_text: &str) -> Result<f64> {
    let attribute: AttackAttribute = attribute_text.parse()?;
    Ok(record.cut_rate(attribute))
}
