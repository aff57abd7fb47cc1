//! Damage formula
//!
//! enemy lookup -> motion lookup -> cut rate -> penetration -> truncated damage.
//! Any failing step aborts the whole calculation.

use serde::{Deserialize, Serialize};

use crate::combat::attribute::resolve_cut_rate;
use crate::combat::penetration::penetration_percent;
use crate::core::error::{DamageError, Result};
use crate::tables::{EnemyTable, MotionTable};

/// Everything one calculation needs from the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputationInputs {
    pub enemy: String,
    pub weapon: String,
    pub motion: String,
    /// Attribute text as typed; parsed after the table lookups
    pub attribute: String,
    pub attack_power: f64,
}

/// Final damage plus the intermediate values shown to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageResult {
    pub enemy: String,
    pub defense: f64,
    pub motion_value: f64,
    pub cut_rate_percent: f64,
    pub penetration_percent: f64,
    pub damage: i64,
}

/// Run the damage pipeline for one set of inputs
pub fn compute_damage(
    inputs: &ComputationInputs,
    enemies: &EnemyTable,
    motions: &MotionTable,
) -> Result<DamageResult> {
    let record = enemies.get(&inputs.enemy)?;
    let motion_value = motions.get(&inputs.weapon, &inputs.motion)?;
    let cut_rate_percent = resolve_cut_rate(record, &inputs.attribute)? * 100.0;

    let attack_value = inputs.attack_power * motion_value;
    if !attack_value.is_finite() {
        return Err(DamageError::InvalidInput(format!(
            "attack value {} is not a finite number",
            attack_value
        )));
    }
    let penetration = penetration_percent(attack_value, record.defense)?;
    let reduction = (1.0 - cut_rate_percent / 100.0).clamp(0.0, 1.0);

    // `as` truncates toward zero
    let damage = (inputs.attack_power * motion_value * (penetration / 100.0) * reduction) as i64;

    tracing::debug!(
        enemy = %record.name,
        attack_value,
        penetration,
        reduction,
        damage,
        "computed damage"
    );

    Ok(DamageResult {
        enemy: record.name.clone(),
        defense: record.defense,
        motion_value,
        cut_rate_percent,
        penetration_percent: penetration,
        damage,
    })
}
