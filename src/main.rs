//! DarkST Damage - Entry Point
//!
//! Loads the enemy and motion tables, asks for whatever inputs were not given
//! on the command line, and prints the damage breakdown.

use darkst_damage::combat::compute_damage;
use darkst_damage::core::config::CalcConfig;
use darkst_damage::core::error::Result;
use darkst_damage::session::{self, PresetInputs};
use darkst_damage::tables::{EnemyTable, MotionTable};

use clap::{Parser, ValueEnum};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Output format for the result
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// DarkST Damage - compute attack damage against an enemy
#[derive(Parser, Debug)]
#[command(name = "darkst-damage")]
#[command(about = "Compute attack damage from enemy defense and weapon motion tables")]
struct Args {
    /// TOML config file (defaults to ./damage_calc.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enemy table CSV, overrides the config
    #[arg(long)]
    enemy_table: Option<PathBuf>,

    /// Motion table CSV, overrides the config
    #[arg(long)]
    motion_table: Option<PathBuf>,

    /// Enemy name (prompted if omitted)
    #[arg(long)]
    enemy: Option<String>,

    /// Weapon name (prompted if omitted)
    #[arg(long)]
    weapon: Option<String>,

    /// Motion name (prompted if omitted)
    #[arg(long)]
    motion: Option<String>,

    /// Attack attribute: Normal, Strike, Slash or Stab (prompted if omitted)
    #[arg(long)]
    attribute: Option<String>,

    /// Weapon attack power (prompted if omitted)
    #[arg(long, allow_negative_numbers = true)]
    attack: Option<f64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// List enemies, weapons and motions, then exit
    #[arg(long)]
    list: bool,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.verbose {
        "darkst_damage=debug"
    } else {
        "darkst_damage=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = CalcConfig::discover(args.config.as_deref())?
        .with_overrides(args.enemy_table, args.motion_table);
    config.validate()?;

    tracing::info!(
        "Loading tables: enemies={} motions={}",
        config.enemy_table_path.display(),
        config.motion_table_path.display()
    );
    let motions = MotionTable::load(&config.motion_table_path)?;
    let enemies = EnemyTable::load(&config.enemy_table_path)?;

    let stdout = io::stdout();
    let mut output = stdout.lock();

    if args.list {
        return session::write_listing(&mut output, &enemies, &motions);
    }

    let preset = PresetInputs {
        enemy: args.enemy,
        weapon: args.weapon,
        motion: args.motion,
        attribute: args.attribute,
        attack_power: args.attack,
    };
    let stdin = io::stdin();
    let inputs = session::collect_inputs(preset, &mut stdin.lock(), &mut output)?;

    let result = compute_damage(&inputs, &enemies, &motions)?;

    match args.format {
        OutputFormat::Text => session::write_report(&mut output, &result),
        OutputFormat::Json => session::write_json(&mut output, &result),
    }
}
