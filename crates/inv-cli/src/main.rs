//! alien-invasion — unleash N aliens on a city map and report what's left.
//!
//! Reads a map file (one city per line, `Name north=Other east=Another`),
//! runs the invasion to completion, prints one line per destruction as it
//! happens, and finally prints the surviving cities with their surviving
//! links — as map-format lines, or as JSON with `--json`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use inv_sim::{Destruction, Invasion, InvasionConfig, InvasionObserver};

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "alien-invasion")]
#[command(about = "Simulate an alien invasion over a city map")]
struct Args {
    /// Map file, one city per line: `Name north=Other east=Another`
    #[arg(long, default_value = "cities.txt")]
    file: PathBuf,

    /// Number of aliens to unleash
    #[arg(short = 'n', long = "aliens", default_value_t = 3)]
    aliens: usize,

    /// RNG seed for a reproducible run; omit to draw one from OS entropy
    #[arg(long)]
    seed: Option<u64>,

    /// Emit the surviving map as JSON instead of map-format lines
    #[arg(long)]
    json: bool,
}

// ── Destruction reporting ─────────────────────────────────────────────────────

/// Prints each destruction as it happens, mover first.
struct DestructionPrinter;

impl InvasionObserver for DestructionPrinter {
    fn on_destruction(&mut self, event: &Destruction) {
        println!(
            "{} has been destroyed by alien {} and alien {}!",
            event.city, event.mover, event.occupant
        );
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let map = inv_map::parse_map_file(&args.file)
        .with_context(|| format!("failed to load map {}", args.file.display()))?;
    let seed = args.seed.unwrap_or_else(rand::random);

    let mut sim = Invasion::new(map, InvasionConfig { population: args.aliens, seed });
    sim.run(&mut DestructionPrinter)
        .context("simulation failed")?;

    let report = sim.report();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}
