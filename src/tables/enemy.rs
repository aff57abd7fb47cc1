//! Enemy defense table
//!
//! Source columns: `defense,name,normal,strike,slash,stab`, all numbers in
//! percent. Values are stored as fractions and never clamped.

use std::io::Read;
use std::path::Path;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::combat::attribute::AttackAttribute;
use crate::core::error::{DamageError, Result};
use crate::tables::csv;

/// Defense and per-attribute cut rates for one enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyRecord {
    pub name: String,
    pub defense: f64,
    pub normal: f64,
    pub strike: f64,
    pub slash: f64,
    pub stab: f64,
}

impl EnemyRecord {
    /// Cut rate (as stored, a fraction) for the given attack attribute
    pub fn cut_rate(&self, attribute: AttackAttribute) -> f64 {
        match attribute {
            AttackAttribute::Normal => self.normal,
            AttackAttribute::Strike => self.strike,
            AttackAttribute::Slash => self.slash,
            AttackAttribute::Stab => self.stab,
        }
    }

    fn parse_row(line_no: usize, line: &str) -> Result<Self> {
        let mut fields = csv::fields(line);
        let defense = csv::parse_percent(csv::next_field(&mut fields, line_no, 1)?, line_no, 1)?;
        let name = csv::next_field(&mut fields, line_no, 2)?.to_string();

        let mut resistance = [0.0; 4];
        for (offset, slot) in resistance.iter_mut().enumerate() {
            let column = offset + 3;
            *slot = csv::parse_percent(csv::next_field(&mut fields, line_no, column)?, line_no, column)?;
        }
        let [normal, strike, slash, stab] = resistance;

        Ok(Self {
            name,
            defense,
            normal,
            strike,
            slash,
            stab,
        })
    }
}

/// Enemy records keyed by exact name
#[derive(Debug, Clone, Default)]
pub struct EnemyTable {
    records: AHashMap<String, EnemyRecord>,
}

impl EnemyTable {
    /// Load the table from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = csv::read_source(path)?;
        let table = Self::parse_str(&content)?;
        tracing::debug!("Loaded {} enemies from {}", table.len(), path.display());
        Ok(table)
    }

    /// Load the table from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let content = csv::read_reader(reader)?;
        Self::parse_str(&content)
    }

    /// Parse table text. The header line is discarded.
    pub fn parse_str(content: &str) -> Result<Self> {
        let (_header, rows) = csv::split_table(content);
        let mut records = AHashMap::new();

        for (line_no, line) in rows {
            let record = EnemyRecord::parse_row(line_no, line)?;
            if let Some(previous) = records.insert(record.name.clone(), record) {
                tracing::debug!("Line {}: enemy '{}' replaces earlier row", line_no, previous.name);
            }
        }

        Ok(Self { records })
    }

    /// Look up an enemy by exact, case-sensitive name
    pub fn get(&self, name: &str) -> Result<&EnemyRecord> {
        self.records
            .get(name)
            .ok_or_else(|| DamageError::EnemyNotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Enemy names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.records.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
