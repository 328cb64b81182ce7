//! Terminal front-end for the prisoner simulator
//!
//! Parses the run parameters, drives the engine trial by trial with a live
//! progress percentage, and prints the final per-strategy success report.
//!
//! Usage: `prisoners <prisoners> <iterations> [--seed N] [--json]`

use std::io::{self, Write};
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use prisoner_simulator_core_rs::{Simulation, SimulationConfig};

#[derive(Parser, Debug)]
#[command(name = "prisoners")]
#[command(about = "Simulate the 100 prisoners problem: looped vs. random box search")]
struct Args {
    /// Number of prisoners (and of boxes)
    prisoners: usize,

    /// Number of independent trials to run
    iterations: usize,

    /// RNG seed for reproducible runs (defaults to system-time entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Emit the result as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(false).init();
}

/// Seed for runs where none was requested
fn entropy_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(1)
}

fn main() {
    init_logging();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(entropy_seed);
    debug!(seed, "initializing simulation");

    let config = SimulationConfig {
        prisoner_count: args.prisoners,
        iteration_count: args.iterations,
        rng_seed: seed,
    };

    let mut simulation = match Simulation::new(config) {
        Ok(simulation) => simulation,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    if !args.json {
        println!(
            "\nStarting simulation.\nPrisoners: {}\nIterations: {}",
            args.prisoners, args.iterations
        );
    }

    // Re-print progress only when the formatted percentage changes, so huge
    // iteration counts don't flood the terminal with identical lines.
    let mut last_percentage = String::new();
    while !simulation.is_complete() {
        simulation.run_trial();

        if args.json {
            continue;
        }
        let percentage = format!(
            "{:.1}",
            100.0 * simulation.trials_run() as f64 / args.iterations as f64
        );
        if percentage != last_percentage {
            print!("{percentage}%\r");
            let _ = io::stdout().flush();
            last_percentage = percentage;
        }
    }

    let result = simulation.result();

    if args.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err}");
                process::exit(1);
            }
        }
        return;
    }

    println!("\n\nSimulation ended.");
    println!("Success cases with {} prisoners:", args.prisoners);
    println!(
        "  - Smart group: {} | {:.1}%",
        result.smart_success_count,
        result.smart_success_rate()
    );
    println!(
        "  - Fool group: {} | {:.1}%\n",
        result.fool_success_count,
        result.fool_success_rate()
    );
}
