//! Weapon motion-value table
//!
//! The header row names the motions; each later row is a weapon followed by
//! one optional percentage per motion. Empty cells mean the weapon lacks that
//! motion, short rows leave the trailing motions missing.

use std::io::Read;
use std::path::Path;

use ahash::AHashMap;

use crate::core::error::{DamageError, Result};
use crate::tables::csv;

/// Motion values (fractions) per weapon, per motion name
#[derive(Debug, Clone, Default)]
pub struct MotionTable {
    motion_names: Vec<String>,
    weapons: AHashMap<String, AHashMap<String, f64>>,
}

impl MotionTable {
    /// Load the table from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = csv::read_source(path)?;
        let table = Self::parse_str(&content)?;
        tracing::debug!(
            "Loaded {} weapons ({} motions) from {}",
            table.len(),
            table.motion_names.len(),
            path.display()
        );
        Ok(table)
    }

    /// Load the table from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let content = csv::read_reader(reader)?;
        Self::parse_str(&content)
    }

    /// Parse table text
    pub fn parse_str(content: &str) -> Result<Self> {
        let (header, rows) = csv::split_table(content);

        // First header column labels the weapon column
        let motion_names: Vec<String> = header
            .map(|line| csv::fields(line).skip(1).map(str::to_string).collect())
            .unwrap_or_default();

        let mut weapons = AHashMap::new();
        for (line_no, line) in rows {
            let mut fields = csv::fields(line);
            let weapon = fields.next().unwrap_or_default().to_string();

            let mut motions = AHashMap::new();
            for (offset, (motion, cell)) in motion_names.iter().zip(fields).enumerate() {
                if cell.is_empty() {
                    continue;
                }
                let value = csv::parse_percent(cell, line_no, offset + 2)?;
                motions.insert(motion.clone(), value);
            }

            if weapons.insert(weapon.clone(), motions).is_some() {
                tracing::debug!("Line {}: weapon '{}' replaces earlier row", line_no, weapon);
            }
        }

        Ok(Self {
            motion_names,
            weapons,
        })
    }

    /// Motion value for a weapon and motion
    pub fn get(&self, weapon: &str, motion: &str) -> Result<f64> {
        let motions = self
            .weapons
            .get(weapon)
            .ok_or_else(|| DamageError::WeaponNotFound(weapon.to_string()))?;

        motions
            .get(motion)
            .copied()
            .ok_or_else(|| DamageError::MotionNotFound {
                weapon: weapon.to_string(),
                motion: motion.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }

    /// Motion names in header order
    pub fn motion_names(&self) -> &[String] {
        &self.motion_names
    }

    /// Weapon names in sorted order
    pub fn weapons(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.weapons.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Motions recorded for a weapon, in header order
    pub fn motions(&self, weapon: &str) -> Result<Vec<(&str, f64)>> {
        let motions = self
            .weapons
            .get(weapon)
            .ok_or_else(|| DamageError::WeaponNotFound(weapon.to_string()))?;

        Ok(self
            .motion_names
            .iter()
            .filter_map(|name| motions.get(name).map(|value| (name.as_str(), *value)))
            .collect())
    }
}
