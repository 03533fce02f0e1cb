//! ms-finder: generate, inspect and search Monster Sanctuary seeds
//!
//! `check` reproduces one seed and writes its report, `random` exports a
//! handful of fresh seeds, `batch` sweeps a seed range counting bad
//! seeds, and `find` sweeps a range for seeds matching a JSON filter.
//! Sweeps run on the rayon thread pool; generation is pure per seed, so
//! workers share nothing but the tables.

mod filter;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Args, Parser, Subcommand};
use rayon::prelude::*;
use thiserror::Error;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use ms_core::{Engine, GenerateError, Modes};
use ms_data::Tables;
use ms_export::ExportError;
use ms_rng::UnityRng;

use crate::filter::{Filter, FilterError};

#[derive(Debug, Error)]
enum FinderError {
    #[error(transparent)]
    Data(#[from] ms_data::DataError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error("no game mode selected; pass --randomizer, --bravery and/or --relics")]
    NoModes,
}

#[derive(Debug, Parser)]
#[command(name = "ms-finder", about = "Monster Sanctuary seed tooling", version)]
struct Cli {
    /// Directory seed reports are written to.
    #[arg(long, default_value = "seeds", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct ModeArgs {
    /// Enable randomizer mode.
    #[arg(long)]
    randomizer: bool,
    /// Enable bravery mode.
    #[arg(long)]
    bravery: bool,
    /// Enable relic mode.
    #[arg(long)]
    relics: bool,
}

impl ModeArgs {
    fn modes(&self) -> Result<Modes, FinderError> {
        let modes = Modes {
            randomizer: self.randomizer,
            bravery: self.bravery,
            relics: self.relics,
        };
        if modes.any() {
            Ok(modes)
        } else {
            Err(FinderError::NoModes)
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Reproduce a single seed and write its report.
    Check {
        #[arg(long, allow_hyphen_values = true)]
        seed: i32,
        /// Also write the JSON form next to the text report.
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        modes: ModeArgs,
    },
    /// Generate and export a number of fresh seeds.
    Random {
        #[arg(long, default_value_t = 10)]
        amount: u32,
        #[command(flatten)]
        modes: ModeArgs,
    },
    /// Sweep a seed range and report how many seeds abort.
    Batch {
        #[arg(long, allow_hyphen_values = true)]
        start: i32,
        /// Inclusive end of the range.
        #[arg(long, allow_hyphen_values = true)]
        end: i32,
        #[command(flatten)]
        modes: ModeArgs,
    },
    /// Sweep a seed range for seeds matching a filter file.
    Find {
        #[arg(long)]
        filter: PathBuf,
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        start: i32,
        #[arg(long, default_value_t = 1_000_000, allow_hyphen_values = true)]
        end: i32,
        /// Stop after this many matches.
        #[arg(long, default_value_t = 100)]
        limit: usize,
        #[command(flatten)]
        modes: ModeArgs,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), FinderError> {
    let tables = Tables::load()?;
    let engine = Engine::new(&tables);

    match cli.command {
        Command::Check { seed, json, modes } => {
            let modes = modes.modes()?;
            match engine.generate(seed, modes) {
                Ok(game) => {
                    let path = ms_export::export_text(&tables, &game, &cli.output, None)?;
                    if json {
                        ms_export::export_json(&game, &cli.output)?;
                    }
                    info!(seed, "saved as {}", path.display());
                    Ok(())
                }
                Err(GenerateError::BadSeed(bad)) => {
                    ms_export::append_bad_seed(&bad, &cli.output)?;
                    Err(GenerateError::BadSeed(bad).into())
                }
                Err(err) => Err(err.into()),
            }
        }

        Command::Random { amount, modes } => {
            let modes = modes.modes()?;
            let mut entropy = UnityRng::new(entropy_seed());
            let mut exported = 0u32;
            for _ in 0..amount {
                let seed = entropy.range(i32::MIN, i32::MAX);
                match engine.generate(seed, modes) {
                    Ok(game) => {
                        ms_export::export_text(&tables, &game, &cli.output, None)?;
                        exported += 1;
                    }
                    Err(GenerateError::BadSeed(bad)) => {
                        warn!("bad seed found: {bad}");
                        ms_export::append_bad_seed(&bad, &cli.output)?;
                    }
                    Err(err) => return Err(err.into()),
                }
            }
            info!("exported {exported} random seeds to {}", cli.output.display());
            Ok(())
        }

        Command::Batch { start, end, modes } => {
            let modes = modes.modes()?;
            let generated = AtomicU64::new(0);
            let bad_seeds: Vec<_> = (start..=end)
                .into_par_iter()
                .filter_map(|seed| match engine.generate(seed, modes) {
                    Ok(_) => {
                        generated.fetch_add(1, Ordering::Relaxed);
                        None
                    }
                    Err(GenerateError::Data(err)) => {
                        error!(seed, "{err}");
                        None
                    }
                    Err(err) => err.bad_seed(),
                })
                .collect();
            for bad in &bad_seeds {
                ms_export::append_bad_seed(bad, &cli.output)?;
            }
            info!(
                generated = generated.load(Ordering::Relaxed),
                bad = bad_seeds.len(),
                "batch over seeds {start}..={end} done"
            );
            Ok(())
        }

        Command::Find {
            filter,
            start,
            end,
            limit,
            modes,
        } => {
            let modes = modes.modes()?;
            let filter = Filter::load(&filter, &tables, modes)?;
            let mut found: Vec<_> = (start..=end)
                .into_par_iter()
                .filter_map(|seed| {
                    let game = engine.generate(seed, modes).ok()?;
                    filter.matches(&tables, &game).then_some(game)
                })
                .collect();
            found.sort_by_key(|game| game.seed);
            found.truncate(limit);

            if found.is_empty() {
                info!("no seed found");
                return Ok(());
            }
            for game in &found {
                info!(seed = game.seed, "found seed");
                ms_export::export_text(&tables, game, &cli.output, Some(&filter.name))?;
            }
            info!(
                "{} seeds saved to {}",
                found.len(),
                cli.output.join(&filter.name).display()
            );
            Ok(())
        }
    }
}

/// Seed for the random subcommand's own draws, taken from the clock.
fn entropy_seed() -> i32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() as i32 ^ d.as_secs() as i32)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn mode_flags_are_required() {
        let cli = Cli::parse_from(["ms-finder", "check", "--seed", "5"]);
        let Command::Check { modes, .. } = cli.command else {
            panic!("expected check");
        };
        assert!(matches!(modes.modes(), Err(FinderError::NoModes)));
    }

    #[test]
    fn negative_seeds_parse() {
        let cli = Cli::parse_from(["ms-finder", "check", "--seed", "-42", "--relics"]);
        let Command::Check { seed, modes, .. } = cli.command else {
            panic!("expected check");
        };
        assert_eq!(seed, -42);
        assert!(modes.modes().unwrap().relics);
    }

    #[test]
    fn batch_range_parses() {
        let cli = Cli::parse_from([
            "ms-finder", "batch", "--start", "-10", "--end", "10", "--bravery",
        ]);
        let Command::Batch { start, end, .. } = cli.command else {
            panic!("expected batch");
        };
        assert_eq!((start, end), (-10, 10));
    }
}
