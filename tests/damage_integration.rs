//! Damage pipeline integration tests
//!
//! Loads real table files from disk and runs full calculations, including the
//! reference scenario: defense 100, normal cut 50, motion 80, attack 300 -> 108.

use std::fs;
use std::path::PathBuf;

use darkst_damage::combat::{
    compute_damage, penetration_for_ratio, penetration_percent, resolve_cut_rate, ComputationInputs,
};
use darkst_damage::core::{CalcConfig, DamageError};
use darkst_damage::session::{self, PresetInputs};
use darkst_damage::tables::{EnemyTable, MotionTable};
use proptest::prelude::*;
use tempfile::TempDir;

const ENEMIES: &str = "\
defense,name,normal,strike,slash,stab
100,Hollow Soldier,50,40,30,20
120.5,Black Knight,10,0,5,15

250,Stone Guardian,30,-20,60,70
0,Phantom,0,0,0,0
";

const MOTIONS: &str = "\
weapon,R1,R2,L1
Longsword,80,130,
Club,120,,
Dagger,60
";

fn write_tables(dir: &TempDir) -> (PathBuf, PathBuf) {
    let enemies = dir.path().join("enemies.csv");
    let motions = dir.path().join("motions.csv");
    fs::write(&enemies, ENEMIES).unwrap();
    fs::write(&motions, MOTIONS).unwrap();
    (enemies, motions)
}

fn load(dir: &TempDir) -> (EnemyTable, MotionTable) {
    let (enemies, motions) = write_tables(dir);
    (EnemyTable::load(&enemies).unwrap(), MotionTable::load(&motions).unwrap())
}

fn inputs(enemy: &str, weapon: &str, motion: &str, attribute: &str, attack: f64) -> ComputationInputs {
    ComputationInputs {
        enemy: enemy.into(),
        weapon: weapon.into(),
        motion: motion.into(),
        attribute: attribute.into(),
        attack_power: attack,
    }
}

#[test]
fn test_reference_scenario_from_files() {
    let dir = TempDir::new().unwrap();
    let (enemies, motions) = load(&dir);

    let result = compute_damage(
        &inputs("Hollow Soldier", "Longsword", "R1", "Normal", 300.0),
        &enemies,
        &motions,
    )
    .unwrap();

    // A = 240, x = 240 > 8 -> 90%; reduction 0.5; 300 * 0.8 * 0.9 * 0.5 = 108
    assert_eq!(result.penetration_percent, 90.0);
    assert_eq!(result.damage, 108);
}

#[test]
fn test_loaded_fractions_match_source() {
    let dir = TempDir::new().unwrap();
    let (enemies, motions) = load(&dir);

    assert_eq!(enemies.len(), 4);
    let knight = enemies.get("Black Knight").unwrap();
    assert!((knight.defense - 120.5 / 100.0).abs() < 1e-12);
    assert!((knight.stab - 0.15).abs() < 1e-12);

    let guardian = enemies.get("Stone Guardian").unwrap();
    assert!((guardian.strike + 0.2).abs() < 1e-12);

    assert!((motions.get("Longsword", "R2").unwrap() - 1.3).abs() < 1e-12);
    assert!(motions.get("Longsword", "L1").unwrap_err().is_not_found());
    assert!(motions.get("Dagger", "R2").unwrap_err().is_not_found());
}

#[test]
fn test_missing_files_are_source_unavailable() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.csv");

    assert!(matches!(
        EnemyTable::load(&missing),
        Err(DamageError::SourceUnavailable { .. })
    ));
    assert!(matches!(
        MotionTable::load(&missing),
        Err(DamageError::SourceUnavailable { .. })
    ));
}

#[test]
fn test_duplicate_enemy_in_file_last_wins() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dupes.csv");
    fs::write(&path, "h\n100,Rat,10,0,0,0\n300,Rat,90,0,0,0\n").unwrap();

    let table = EnemyTable::load(&path).unwrap();
    assert_eq!(table.len(), 1);
    let rat = table.get("Rat").unwrap();
    assert!((rat.defense - 3.0).abs() < 1e-12);
    assert!((rat.normal - 0.9).abs() < 1e-12);
}

#[test]
fn test_unknown_enemy_leaves_tables_untouched() {
    let dir = TempDir::new().unwrap();
    let (enemies, motions) = load(&dir);

    let err = compute_damage(&inputs("Dragon", "Club", "R1", "Strike", 100.0), &enemies, &motions)
        .unwrap_err();
    assert!(matches!(err, DamageError::EnemyNotFound(name) if name == "Dragon"));

    assert_eq!(enemies.len(), 4);
    assert_eq!(motions.len(), 3);
    assert!(enemies.get("Dragon").is_err());
}

#[test]
fn test_unknown_attribute_fails_whole_calculation() {
    let dir = TempDir::new().unwrap();
    let (enemies, motions) = load(&dir);

    let err = compute_damage(&inputs("Black Knight", "Club", "R1", "fire", 100.0), &enemies, &motions)
        .unwrap_err();
    assert!(matches!(err, DamageError::InvalidAttribute(text) if text == "fire"));
}

#[test]
fn test_zero_defense_never_reaches_output() {
    let dir = TempDir::new().unwrap();
    let (enemies, motions) = load(&dir);

    let err = compute_damage(&inputs("Phantom", "Club", "R1", "Normal", 100.0), &enemies, &motions)
        .unwrap_err();
    assert!(matches!(err, DamageError::InvalidDefense(_)));
}

#[test]
fn test_attribute_case_insensitive_against_loaded_record() {
    let dir = TempDir::new().unwrap();
    let (enemies, _) = load(&dir);
    let soldier = enemies.get("Hollow Soldier").unwrap();

    assert_eq!(
        resolve_cut_rate(soldier, "STAB").unwrap(),
        resolve_cut_rate(soldier, "stab").unwrap()
    );
}

#[test]
fn test_config_file_points_at_tables() {
    let dir = TempDir::new().unwrap();
    let (enemies_path, motions_path) = write_tables(&dir);
    let config_path = dir.path().join("damage_calc.toml");
    fs::write(
        &config_path,
        format!(
            "enemy_table_path = {:?}\nmotion_table_path = {:?}\n",
            enemies_path.display().to_string(),
            motions_path.display().to_string()
        ),
    )
    .unwrap();

    let config = CalcConfig::discover(Some(&config_path)).unwrap();
    config.validate().unwrap();
    assert_eq!(config.enemy_table_path, enemies_path);
    assert!(EnemyTable::load(&config.enemy_table_path).is_ok());
    assert!(MotionTable::load(&config.motion_table_path).is_ok());
}

#[test]
fn test_interactive_session_end_to_end() {
    let dir = TempDir::new().unwrap();
    let (enemies, motions) = load(&dir);

    let mut input = "Hollow Soldier\nLongsword\nR1\nnormal\n300\n".as_bytes();
    let mut output = Vec::new();
    let collected = session::collect_inputs(PresetInputs::default(), &mut input, &mut output).unwrap();
    let result = compute_damage(&collected, &enemies, &motions).unwrap();
    session::write_report(&mut output, &result).unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Enemy            : Hollow Soldier"));
    assert!(text.contains("=> Damage        : 108"));
}

#[test]
fn test_penetration_breakpoints() {
    for defense in [0.25, 1.0, 2.0, 7.5] {
        let at = |x: f64| penetration_percent(x * defense, defense).unwrap();
        assert!((at(0.125) - 10.0).abs() < 1e-9);
        assert!((at(1.0) - (1920.0 / 49.0 * 0.875f64.powi(2) + 10.0)).abs() < 1e-9);
        assert!((at(2.5) - 70.0).abs() < 1e-9);
        assert!((at(8.0) - 90.0).abs() < 1e-9);
    }
}

proptest! {
    #[test]
    fn prop_penetration_monotonic(a in 0.0f64..8.0, b in 0.0f64..8.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(penetration_for_ratio(lo) <= penetration_for_ratio(hi) + 1e-9);
    }

    #[test]
    fn prop_penetration_bounded(x in 0.0f64..1000.0) {
        let pen = penetration_for_ratio(x);
        prop_assert!((0.0..=90.0).contains(&pen));
    }

    #[test]
    fn prop_flat_floor_below_low_ratio(x in 1e-9f64..0.125, defense in 0.01f64..50.0) {
        prop_assert_eq!(penetration_percent(x * defense, defense).unwrap(), 10.0);
    }

    #[test]
    fn prop_cap_above_high_ratio(x in 8.001f64..1e6, defense in 0.01f64..50.0) {
        prop_assert_eq!(penetration_percent(x * defense, defense).unwrap(), 90.0);
    }

    #[test]
    fn prop_damage_never_negative(attack in 0.0f64..10_000.0) {
        let enemies = EnemyTable::parse_str("h\n100,Rat,25,0,0,0\n").unwrap();
        let motions = MotionTable::parse_str("weapon,R1\nClub,100\n").unwrap();
        let result = compute_damage(&inputs("Rat", "Club", "R1", "Normal", attack), &enemies, &motions).unwrap();
        prop_assert!(result.damage >= 0);
        prop_assert!(result.damage as f64 <= attack);
    }
}
