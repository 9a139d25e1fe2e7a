//! # homecmd — command-line driver
//!
//! Composition root that wires the registry and interpreter together and
//! feeds them command lines.
//!
//! ## Responsibilities
//! - Load configuration (`homecmd.toml`, env vars)
//! - Initialize the tracing subscriber
//! - Construct the device registry with the configured initial states
//! - Run one command per CLI operand, or one per stdin line when no operands
//!   are given; a failed line is reported and processing continues
//! - Optionally print a JSON state report after the run (`--report`)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::io::BufRead;
use std::process::ExitCode;

use homecmd_app::interpreter::Interpreter;
use homecmd_app::registry::DeviceRegistry;
use homecmd_domain::device::{Boiler, Device, Garage, Television};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("homecmd: {err}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config);

    let mut report = false;
    let mut commands = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--report" => report = true,
            "--help" | "-h" => {
                print_usage();
                return ExitCode::SUCCESS;
            }
            _ => commands.push(arg),
        }
    }

    let mut interpreter = Interpreter::new(build_registry(&config));

    let failures = if commands.is_empty() {
        match run_stdin(&mut interpreter) {
            Ok(failures) => failures,
            Err(err) => {
                eprintln!("homecmd: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        run_lines(&mut interpreter, commands.iter().map(String::as_str))
    };

    if report {
        match serde_json::to_string_pretty(interpreter.registry().snapshot()) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("homecmd: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    if failures > 0 {
        tracing::warn!(failures, "some commands failed");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Build the standard registry, applying configured initial states.
fn build_registry(config: &Config) -> DeviceRegistry {
    DeviceRegistry::from_devices([
        (Garage::KIND, Device::Garage(Garage::default())),
        (
            Boiler::KIND,
            Device::Boiler(Boiler::new(config.devices.boiler_start_temperature)),
        ),
        (
            Television::KIND,
            Device::Television(Television::default()),
        ),
    ])
}

/// Interpret each line, printing status lines to stdout and errors to
/// stderr. Blank lines and `#` comments are skipped. Returns the number of
/// failed lines.
fn run_lines<'l>(interpreter: &mut Interpreter, lines: impl Iterator<Item = &'l str>) -> u32 {
    let mut failures = 0;
    for line in lines {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match interpreter.interpret(line) {
            Ok(outcome) => println!("{outcome}"),
            Err(err) => {
                eprintln!("!!! {err}");
                failures += 1;
            }
        }
    }
    failures
}

/// Interpret stdin line by line until EOF.
fn run_stdin(interpreter: &mut Interpreter) -> std::io::Result<u32> {
    let stdin = std::io::stdin();
    let mut failures = 0;
    for line in stdin.lock().lines() {
        let line = line?;
        failures += run_lines(interpreter, std::iter::once(line.as_str()));
    }
    Ok(failures)
}

fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.logging.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    println!("usage: homecmd [--report] [COMMAND...]");
    println!();
    println!("Each COMMAND has the form 'ACTION -> DEVICE [-> ARGUMENT]',");
    println!("e.g. 'heat -> boiler -> 5'. With no COMMAND operands, lines");
    println!("are read from stdin. --report prints a JSON snapshot of all");
    println!("device states after the run.");
}
