// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and shared helpers.

pub mod inspect;
pub mod manifest;
pub mod plan;

use anyhow::Context as _;
use crossfold_planner::{CrossfoldConfig, OutputFormat};
use std::path::{Path, PathBuf};

/// Settings that override the configuration file.
#[derive(Debug, Default, clap::Args)]
pub struct Overrides {
    /// JSON data-source descriptor (replaces any configured source).
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Crossfold name (defaults to the source name).
    #[arg(short, long)]
    pub name: Option<String>,

    /// Number of folds.
    #[arg(short, long)]
    pub partitions: Option<usize>,

    /// Output format: csv, csv.gz, csv.xz, pack.
    #[arg(short, long)]
    pub format: Option<String>,

    /// Directory the partition files will be written to.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

/// Initialises the tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise verbosity maps to
/// warn / info / debug / trace.
pub fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Loads the configuration file (if any) and applies command-line overrides.
pub fn load_config(config: Option<&Path>, overrides: Overrides) -> anyhow::Result<CrossfoldConfig> {
    let mut cfg = match config {
        Some(path) => CrossfoldConfig::from_file(path)
            .with_context(|| format!("loading config '{}'", path.display()))?,
        None => CrossfoldConfig::default(),
    };

    if let Some(source) = overrides.source {
        cfg.source = None;
        cfg.source_file = Some(source);
    }
    if let Some(name) = overrides.name {
        cfg.name = Some(name);
    }
    if let Some(partitions) = overrides.partitions {
        cfg.partition_count = partitions;
    }
    if let Some(format) = overrides.format {
        cfg.output_format = format.parse::<OutputFormat>()?;
    }
    if let Some(dir) = overrides.output_dir {
        cfg.output_dir = Some(dir);
    }

    tracing::debug!("effective config: {cfg:?}");
    Ok(cfg)
}

/// Truncates a string to `max_len` with ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{head}...")
    }
}
