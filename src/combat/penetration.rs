//! Penetration: how much of an attack gets through defense
//!
//! Piecewise-quadratic S-curve of the attack/defense ratio, held between
//! 10% and 90% for any positive ratio.

use crate::combat::constants::*;
use crate::core::error::{DamageError, Result};

/// Penetration percent (0-90) for an attack value against a defense
///
/// # Arguments
/// * `attack_value` - Attack power already scaled by the motion value
/// * `defense` - Enemy defense as a fraction (table value / 100)
///
/// # Errors
/// `InvalidDefense` when defense is zero, negative or NaN.
pub fn penetration_percent(attack_value: f64, defense: f64) -> Result<f64> {
    if defense.is_nan() || defense <= 0.0 {
        return Err(DamageError::InvalidDefense(defense));
    }
    Ok(penetration_for_ratio(attack_value / defense))
}

/// The curve itself, as a function of `x = attack / defense`
pub fn penetration_for_ratio(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else if x < LOW_RATIO {
        FLOOR_PERCENT
    } else if x > HIGH_RATIO {
        CAP_PERCENT
    } else if x < MID_RATIO {
        LOW_CURVE * (x - LOW_RATIO).powi(2) + FLOOR_PERCENT
    } else if x < KNEE_RATIO {
        MID_CURVE * (x - KNEE_RATIO).powi(2) + KNEE_PERCENT
    } else {
        HIGH_CURVE * (x - HIGH_RATIO).powi(2) + CAP_PERCENT
    }
}
