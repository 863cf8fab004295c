// ABOUTME: Command-line entry point that writes comprehensive_test.xml to the working directory
// ABOUTME: Takes no options; logging is controlled through RUST_LOG and LOG_FORMAT
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Synthetic health export generator.
//!
//! Usage:
//! ```bash
//! # Write comprehensive_test.xml in the current directory
//! cargo run --bin generate-test-data
//!
//! # Show the per-category breakdown on stderr
//! RUST_LOG=info cargo run --bin generate-test-data
//! ```

use clap::Parser;
use health_export_fixture::errors::FixtureResult;
use health_export_fixture::export::generate;
use health_export_fixture::logging;

#[derive(Parser)]
#[command(
    name = "generate-test-data",
    version,
    about = "Synthetic health export generator",
    long_about = "Write comprehensive_test.xml, a personal-health XML export fixture with \
                  vitals, activity, body, blood pressure, mobility, environment and sleep records"
)]
struct GenerateArgs {}

fn main() -> FixtureResult<()> {
    let GenerateArgs {} = GenerateArgs::parse();

    // Diagnostics are optional; the fixture is written either way
    if let Err(e) = logging::init_from_env() {
        eprintln!("{e}");
    }

    let summary = generate()?;
    println!("{}", summary.confirmation());

    Ok(())
}
