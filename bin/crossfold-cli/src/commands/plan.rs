// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `crossfold plan` command: list the partition files of a crossfold.

use super::{load_config, truncate, Overrides};
use std::path::PathBuf;

pub fn execute(config: Option<PathBuf>, overrides: Overrides) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║              crossfold · Partition Plan             ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    let cfg = load_config(config.as_deref(), overrides)?;
    let spec = cfg.to_spec()?;
    let plan = spec.plan()?;
    plan.validate()?;

    // ── Summary ────────────────────────────────────────────────
    println!("  Crossfold: {}", plan.name);
    println!("  Folds:     {}", plan.num_folds());
    println!("  Method:    {}", spec.method());
    println!("  Holdout:   {}", spec.user_partition_method());
    println!("  Format:    {}", plan.output_format);
    println!("  Output:    {}", plan.output_dir.display());
    println!("  Manifest:  {}", plan.manifest_path.display());
    println!();

    if plan.is_empty() {
        println!("  (no folds)");
        println!();
        return Ok(());
    }

    // ── Per-Fold Detail ────────────────────────────────────────
    println!("  {:<4} {:<24} {:<26} {:<26}", "Fold", "Data set", "Train", "Test");
    println!("  {}", "-".repeat(82));

    for ds in plan.iter() {
        println!(
            "  {:<4} {:<24} {:<26} {:<26}",
            ds.partition().unwrap_or_default(),
            truncate(&ds.name, 24),
            file_name(&ds.train_source),
            file_name(&ds.test_source),
        );
    }
    println!();
    Ok(())
}

fn file_name(source: &data_spec::DataSourceSpec) -> String {
    source
        .file()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
