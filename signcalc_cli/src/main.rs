//! # Signcalc CLI
//!
//! Runs one JSON calculation request through `signcalc_core` and prints the
//! JSON result on stdout. Diagnostics go to stderr (`RUST_LOG=debug`).
//!
//! ```bash
//! signcalc --input sign.json --pretty
//! echo '{"type": "Footing", "moment_kipft": 10.0, "diameter_ft": 3.0}' | signcalc
//! signcalc --catalog
//! ```
//!
//! A calculation that cannot run prints the structured error as JSON and
//! exits with status 2. An inadequate design is a normal result.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::{info, warn};
use serde::Serialize;

use signcalc_core::materials::{builtin_catalog, PoleSection};
use signcalc_core::{run, CalculationRequest};

#[derive(Parser)]
#[command(
    name = "signcalc",
    version,
    about = "Sign structure calculations: wind, poles, footings, base plates"
)]
struct Cli {
    /// JSON request file (reads stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Print the built-in section catalog and exit
    #[arg(long)]
    catalog: bool,
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

fn read_request(input: Option<&PathBuf>) -> anyhow::Result<String> {
    match input {
        Some(path) => fs::read_to_string(path).with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.catalog {
        let sections: Vec<&PoleSection> = builtin_catalog().iter().collect();
        println!("{}", to_json(&sections, cli.pretty)?);
        return Ok(ExitCode::SUCCESS);
    }

    let text = read_request(cli.input.as_ref())?;
    let request: CalculationRequest = serde_json::from_str(&text).context("parsing calculation request")?;
    info!("{} request", request.calc_type());

    match run(&request) {
        Ok(output) => {
            for warning in output.warnings() {
                warn!("{}", warning);
            }
            match output.passes() {
                Some(true) => eprintln!("{}: PASS", request.calc_type()),
                Some(false) => eprintln!("{}: FAIL", request.calc_type()),
                None => {}
            }
            println!("{}", to_json(&output, cli.pretty)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{} [{}]: {}", request.calc_type(), err.error_code(), err);
            println!("{}", to_json(&err, cli.pretty)?);
            Ok(ExitCode::from(2))
        }
    }
}
