// Copyright (c) 2022-2023 Bolt Labs Holdings, Inc
//
// This source code is licensed under both the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree and the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree.

//! Command line front end for [`shamir_recover`].
//!
//! Reads a JSON share file, searches for the secret, and prints it in
//! decimal on stdout. Logging goes to stderr and is controlled with
//! `RUST_LOG`. Any failure is reported as a single `Error: ...` line on
//! stderr.
//!
//! When no subset of shares yields a valid secret nothing is printed and
//! the exit status is still zero.

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use shamir_recover::{
    config::DEFAULT_EXHAUSTIVE_LIMIT, DigitPolicy, RecoveryConfig, SearchOutcome, ShareFile,
};
use tracing::{info, level_filters::LevelFilter, span, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the JSON share file.
    #[arg(default_value = "input.json")]
    input: PathBuf,
    /// Reject digits that are not valid in the declared base instead of
    /// accepting them.
    #[arg(long)]
    strict_digits: bool,
    /// Largest number of shares that is searched exhaustively. Larger share
    /// files interpolate the first k shares without validation.
    #[arg(long, default_value_t = DEFAULT_EXHAUSTIVE_LIMIT)]
    exhaustive_limit: usize,
}

impl Cli {
    fn config(&self) -> RecoveryConfig {
        let policy = if self.strict_digits {
            DigitPolicy::Strict
        } else {
            DigitPolicy::Lenient
        };
        RecoveryConfig::default()
            .with_exhaustive_limit(self.exhaustive_limit)
            .with_digit_policy(policy)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    // Set up logging. Stdout is reserved for the secret.
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
    let span = span!(Level::INFO, "main");
    let _enter = span.entered();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logging is silent unless `RUST_LOG` asks for it, so a failure leaves
/// exactly one line on stderr.
fn log_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::OFF.into())
        .from_env_lossy()
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let share_file = ShareFile::from_path(&cli.input)?;
    info!(
        "Loaded {} shares from {}",
        share_file.shares().len(),
        cli.input.display()
    );

    match share_file.recover(&cli.config())? {
        SearchOutcome::Accepted {
            secret, examined, ..
        } => {
            info!("Found the secret after examining {examined} subsets");
            println!("{secret}");
        }
        SearchOutcome::Fallback { secret } => println!("{secret}"),
        SearchOutcome::Exhausted { examined } => {
            info!("None of the {examined} subsets reconstructs a positive integer secret");
        }
    }
    Ok(())
}
