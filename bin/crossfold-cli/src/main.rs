// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # crossfold
//!
//! Command-line interface for crossfold planning.
//!
//! ## Usage
//! ```bash
//! # Show the partition files a crossfold would produce
//! crossfold plan --config crossfold.toml
//!
//! # Override settings from the command line
//! crossfold plan --source ml100k.json --output-dir ./cf --partitions 10 --format pack
//!
//! # Print the all-partitions.json manifest the executor would write
//! crossfold manifest --config crossfold.toml
//!
//! # Show the effective configuration
//! crossfold inspect --config crossfold.toml
//! ```

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "crossfold",
    about = "Plan train/test crossfold partitions for recommender evaluation",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the per-fold train/test files of the crossfold.
    Plan {
        #[command(flatten)]
        overrides: commands::Overrides,
    },

    /// Print the partition manifest as JSON.
    Manifest {
        #[command(flatten)]
        overrides: commands::Overrides,
    },

    /// Print the effective configuration and resolved source.
    Inspect {
        #[command(flatten)]
        overrides: commands::Overrides,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging based on verbosity.
    commands::init_tracing(cli.verbose);

    match cli.command {
        Commands::Plan { overrides } => commands::plan::execute(cli.config, overrides),
        Commands::Manifest { overrides } => commands::manifest::execute(cli.config, overrides),
        Commands::Inspect { overrides } => commands::inspect::execute(cli.config, overrides),
    }
}
