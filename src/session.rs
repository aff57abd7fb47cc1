//! Interactive session: prompts, input collection and result reports
//!
//! Everything here works on generic readers/writers so the binary can hand in
//! stdin/stdout and tests can hand in byte buffers.

use std::io::{BufRead, Write};

use crate::combat::{AttackAttribute, ComputationInputs, DamageResult};
use crate::core::error::{DamageError, Result};
use crate::tables::{EnemyTable, MotionTable};

pub const ENEMY_PROMPT: &str = "Enemy Name          ? ";
pub const WEAPON_PROMPT: &str = "Weapon Name         ? ";
pub const MOTION_PROMPT: &str = "Motion Type         ? ";
pub const ATTRIBUTE_PROMPT: &str = "Attack Attribute    ? (Normal / Strike / Slash / Stab): ";
pub const ATTACK_PROMPT: &str = "Weapon Attack Power ? ";

/// Inputs already known before the session starts (from the command line)
#[derive(Debug, Clone, Default)]
pub struct PresetInputs {
    pub enemy: Option<String>,
    pub weapon: Option<String>,
    pub motion: Option<String>,
    pub attribute: Option<String>,
    pub attack_power: Option<f64>,
}

/// Fill in every input not preset by prompting on `output` and reading `input`
pub fn collect_inputs<R, W>(preset: PresetInputs, input: &mut R, output: &mut W) -> Result<ComputationInputs>
where
    R: BufRead,
    W: Write,
{
    let enemy = match preset.enemy {
        Some(value) => value,
        None => prompt_line(input, output, ENEMY_PROMPT)?,
    };
    let weapon = match preset.weapon {
        Some(value) => value,
        None => prompt_line(input, output, WEAPON_PROMPT)?,
    };
    let motion = match preset.motion {
        Some(value) => value,
        None => prompt_line(input, output, MOTION_PROMPT)?,
    };
    let attribute = match preset.attribute {
        Some(value) => value,
        None => prompt_line(input, output, ATTRIBUTE_PROMPT)?,
    };
    let attack_power = match preset.attack_power {
        Some(value) => value,
        None => parse_attack_power(&prompt_line(input, output, ATTACK_PROMPT)?)?,
    };

    Ok(ComputationInputs {
        enemy,
        weapon,
        motion,
        attribute,
        attack_power,
    })
}

/// Print a prompt and read one line, without its line terminator
fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    output.write_all(prompt.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(DamageError::InvalidInput(format!(
            "input ended before '{}'",
            prompt.trim_end_matches([' ', '?']).trim_end()
        )));
    }

    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}

/// Attack power is the one numeric input; surrounding whitespace is ignored.
/// `nan` and `inf` are rejected.
pub fn parse_attack_power(text: &str) -> Result<f64> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(DamageError::InvalidInput(format!(
            "attack power must be a finite number, got {:?}",
            text
        ))),
    }
}

/// Human-readable result block
pub fn write_report<W: Write>(output: &mut W, result: &DamageResult) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "=== Calculation Result ===")?;
    writeln!(output, "Enemy            : {}", result.enemy)?;
    writeln!(output, "Defence          : {}", display_number(result.defense))?;
    writeln!(output, "Motion Value     : {}", display_number(result.motion_value))?;
    writeln!(output, "Cut-Rate (%)     : {}", display_number(result.cut_rate_percent))?;
    writeln!(output, "Penetration (%)  : {}", display_number(result.penetration_percent))?;
    writeln!(output, "---------------------------------")?;
    writeln!(output, "=> Damage        : {}", result.damage)?;
    Ok(())
}

/// Result as a JSON object
pub fn write_json<W: Write>(output: &mut W, result: &DamageResult) -> Result<()> {
    serde_json::to_writer_pretty(&mut *output, result)?;
    writeln!(output)?;
    Ok(())
}

/// Everything that can be typed at the prompts
pub fn write_listing<W: Write>(output: &mut W, enemies: &EnemyTable, motions: &MotionTable) -> Result<()> {
    writeln!(output, "Enemies ({}):", enemies.len())?;
    for name in enemies.names() {
        writeln!(output, "  {}", name)?;
    }

    writeln!(output, "Weapons ({}):", motions.len())?;
    for weapon in motions.weapons() {
        let names: Vec<&str> = motions.motions(weapon)?.into_iter().map(|(name, _)| name).collect();
        writeln!(output, "  {}: {}", weapon, names.join(", "))?;
    }

    let attributes: Vec<&str> = AttackAttribute::ALL.iter().map(AttackAttribute::as_str).collect();
    writeln!(output, "Attributes: {}", attributes.join(" / "))?;
    Ok(())
}

/// Up to six significant digits, trailing zeros dropped (`1.205`, `38.2653`).
/// Magnitudes from 1e6 up or below 1e-4 switch to exponent form (`1e+06`).
pub fn display_number(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }

    // Rounding to six digits can bump the exponent (999999.5 -> 1e+06)
    let scientific = format!("{:.5e}", value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if !(-4..6).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs());
    }

    let decimals = (5 - exponent).max(0) as usize;
    trim_fraction(&format!("{:.*}", decimals, value)).to_string()
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
