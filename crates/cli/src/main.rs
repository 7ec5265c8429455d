#![deny(unsafe_code)]
//! CLI binary for basin-of-attraction maps.
//!
//! Subcommands:
//! - `run` generates a map from a preset or scenario file and prints a summary
//! - `list` prints available integrators and presets

mod error;

use basins_core::scenario::PRESET_NAMES;
use basins_core::{IntegratorChoice, Scenario, Tally};
use basins_integrators::IntegratorKind;
use basins_map::{classify_grid, colorize, NoProgress, ProgressObserver};
use clap::{Parser, Subcommand};
use error::CliError;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "basins", about = "Basin-of-attraction map generator")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a basin map and print per-basin pixel counts.
    Run {
        /// Preset name (three-poles, random). Ignored when --scenario is given.
        #[arg(short, long, default_value = "three-poles")]
        preset: String,

        /// Scenario JSON file with attractors and config.
        #[arg(long)]
        scenario: Option<PathBuf>,

        /// Seed for the random preset.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Integrator name (rk4, symplectic).
        #[arg(short, long)]
        integrator: Option<String>,

        /// Grid side length in pixels.
        #[arg(short, long)]
        grid_size: Option<usize>,

        /// Config overrides as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Disable the progress bar.
        #[arg(long)]
        no_progress: bool,
    },
    /// List available integrators and presets.
    List,
}

/// Progress bar fed by the pixel sweep.
struct BarObserver(ProgressBar);

impl BarObserver {
    fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        let style = ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        bar.set_style(style);
        Self(bar)
    }
}

impl ProgressObserver for BarObserver {
    fn on_progress(&self, _completed: usize, _total: usize) {
        self.0.inc(1);
    }
}

fn load_scenario(preset: &str, path: Option<&PathBuf>, seed: u64) -> Result<Scenario, CliError> {
    let Some(path) = path else {
        return Ok(Scenario::from_preset(preset, seed)?);
    };
    let text = std::fs::read_to_string(path).map_err(|source| CliError::ReadScenario {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::BadJson {
        what: path.display().to_string(),
        source,
    })
}

fn print_tally(tally: &Tally) {
    for (index, count) in tally.captured.iter().enumerate() {
        println!("  pole {index}: {count}");
    }
    println!("  escaped: {}", tally.escaped);
    println!("  timed out: {}", tally.timed_out);
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let integrators = IntegratorKind::list_integrators();
            if cli.json {
                let info = serde_json::json!({
                    "integrators": integrators,
                    "presets": PRESET_NAMES,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Integrators:");
                for name in integrators {
                    println!("  {name}");
                }
                println!("Presets:");
                println!("  {}", PRESET_NAMES.join(", "));
            }
        }
        Command::Run {
            preset,
            scenario,
            seed,
            integrator,
            grid_size,
            params,
            no_progress,
        } => {
            let params: serde_json::Value =
                serde_json::from_str(&params).map_err(|source| CliError::BadJson {
                    what: "--params".into(),
                    source,
                })?;

            let mut scenario = load_scenario(&preset, scenario.as_ref(), seed)?;
            scenario.config = scenario.config.with_json(&params)?;
            if let Some(name) = integrator {
                scenario.config.integrator = name.parse::<IntegratorChoice>()?;
            }
            if let Some(n) = grid_size {
                scenario.config.grid_size = n;
            }
            if no_progress || cli.json {
                scenario.config.show_progress = false;
            }
            scenario.validate()?;

            let config = &scenario.config;
            let started = Instant::now();
            let grid = if config.show_progress {
                let bar = BarObserver::new(config.pixel_count()?);
                let grid = classify_grid(&scenario.attractors, config, &bar);
                bar.0.finish_and_clear();
                grid?
            } else {
                classify_grid(&scenario.attractors, config, &NoProgress)?
            };
            let image = colorize(&grid, &scenario.attractors)?;
            let elapsed = started.elapsed();
            let tally = grid.tally(scenario.attractors.len());

            if cli.json {
                let info = serde_json::json!({
                    "integrator": config.integrator,
                    "grid_size": image.size(),
                    "poles": scenario.attractors.len(),
                    "tally": tally,
                    "elapsed_secs": elapsed.as_secs_f64(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!(
                    "{} poles, {n}x{n} grid, {} in {elapsed:.2?}",
                    scenario.attractors.len(),
                    config.integrator,
                    n = image.size(),
                );
                print_tally(&tally);
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
