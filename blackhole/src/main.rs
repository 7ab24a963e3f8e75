//! Digit "black hole" CLI.
//!
//! `run` drives a single number through the even/odd/total digit transform
//! until it reaches 123 or a value repeats; `scan` checks a whole range of
//! start values and summarizes the outcomes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use blackhole::core::driver::{self, Termination, Trace, TransformError};
use blackhole::exit_codes;
use blackhole::logging;
use blackhole::report::{self, RunReport};

#[derive(Parser)]
#[command(
    name = "blackhole",
    version,
    about = "Digit classification transform that collapses numbers to 123"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transform a number step by step until it reaches 123.
    Run {
        /// Start value; must be a positive integer.
        number: i64,
        /// Print the trace as JSON instead of one line per step.
        #[arg(long)]
        json: bool,
    },
    /// Run every start value in `1..=max` and summarize the outcomes.
    Scan {
        /// Largest start value to check.
        #[arg(long, default_value_t = 9999)]
        max: u64,
    },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Run { number, json } => cmd_run(number, json),
        Command::Scan { max } => cmd_scan(max),
    }
}

fn cmd_run(number: i64, json: bool) -> Result<i32> {
    let start = u64::try_from(number).map_err(|_| TransformError::InvalidInput)?;
    let trace = driver::run(start)?;
    debug!(start, steps = trace.steps.len(), "transform finished");

    let termination = trace.termination;
    if json {
        let report = RunReport::new(start, trace);
        let payload = serde_json::to_string_pretty(&report).context("serialize report")?;
        println!("{payload}");
    } else {
        print_trace(&trace);
    }
    Ok(termination_code(termination))
}

fn cmd_scan(max: u64) -> Result<i32> {
    info!(max, "scanning start values");
    let summary = report::scan(max).context("scan range")?;
    println!(
        "scan: max={} converged={} cycles={}",
        summary.max, summary.converged, summary.cycles
    );
    println!(
        "scan: longest_trace={} slowest_start={}",
        summary.longest_trace, summary.slowest_start
    );
    Ok(exit_codes::OK)
}

fn print_trace(trace: &Trace) {
    for (index, value) in trace.steps.iter().enumerate() {
        if index == 0 {
            println!("start: {value}");
        } else {
            println!("step {index}: {value}");
        }
    }
    match trace.termination {
        Termination::Converged => println!("result: converged to {}", driver::TARGET),
        Termination::CycleDetected => {
            println!("result: cycle detected, never reaches {}", driver::TARGET);
        }
    }
}

fn termination_code(termination: Termination) -> i32 {
    match termination {
        Termination::Converged => exit_codes::OK,
        Termination::CycleDetected => exit_codes::CYCLE,
    }
}
