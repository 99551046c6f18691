//! stdin/stdout transport (spec §6, SPEC_FULL §F).
//!
//! Reads one JSON request from stdin, runs the column-generation core, and
//! writes one JSON response to stdout — "line-based JSON over stdin/stdout,
//! single request per process" (spec §6). Input validation and backend
//! errors are reported as a structured `{"error": "..."}` object and exit the
//! process non-zero; hitting the iteration cap or stalling is not an error
//! and is reported via the ordinary result's `convergence` field (spec §7).

use std::io::{self, Read, Write};
use std::time::Instant;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use cutstock::{Driver, DriverConfig, ProblemInstance, ScipSolver, SolveResult};
use cutstock::format::render_instructions;
use cutstock::telemetry::Telemetry;

/// Column-generation solver for the one-dimensional cutting stock problem.
#[derive(Parser, Debug)]
#[command(name = "cutstock", version, about)]
struct Cli {
    /// Override the column-generation iteration cap (spec §4.4 default: 50).
    #[arg(long)]
    iteration_cap: Option<u32>,

    /// Emit human-readable cutting instructions instead of JSON.
    #[arg(long)]
    human: bool,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct Response<'a> {
    #[serde(flatten)]
    result: &'a SolveResult,
    telemetry: Telemetry,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut input = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut input) {
        emit_error(format!("failed to read stdin: {err}"));
        std::process::exit(1);
    }

    let problem: ProblemInstance = match serde_json::from_str(&input) {
        Ok(problem) => problem,
        Err(err) => {
            emit_error(format!("failed to parse request: {err}"));
            std::process::exit(1);
        }
    };

    let mut config = DriverConfig::default();
    if let Some(cap) = cli.iteration_cap {
        config.iteration_cap = cap;
    }

    let solver = ScipSolver::new();
    let driver = Driver::new(&problem, &solver, config);

    let start = Instant::now();
    match driver.solve() {
        Ok(result) => {
            let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
            if cli.human {
                for line in render_instructions(&result, &problem) {
                    println!("{line}");
                }
            } else {
                let telemetry = Telemetry::new(elapsed_ms, result.patterns_evaluated, problem.num_types());
                let response = Response {
                    result: &result,
                    telemetry,
                };
                print_json(&response);
            }
        }
        Err(err) => {
            emit_error(err.to_string());
            std::process::exit(1);
        }
    }
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn print_json(response: &Response<'_>) {
    match serde_json::to_string(response) {
        Ok(line) => println!("{line}"),
        Err(err) => emit_error(format!("failed to serialize response: {err}")),
    }
}

fn emit_error(message: String) {
    let response = ErrorResponse { error: message };
    if let Ok(line) = serde_json::to_string(&response) {
        println!("{line}");
    }
    let _ = io::stdout().flush();
}
