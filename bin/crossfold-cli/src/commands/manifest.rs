// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `crossfold manifest` command: print the `all-partitions.json` content.
//!
//! Output goes to stdout only; writing the manifest is the executor's job.

use super::{load_config, Overrides};
use std::path::PathBuf;

pub fn execute(config: Option<PathBuf>, overrides: Overrides) -> anyhow::Result<()> {
    let plan = load_config(config.as_deref(), overrides)?
        .to_spec()?
        .plan()?;

    let manifest = plan.manifest();
    manifest.validate()?;
    tracing::info!(
        "manifest for '{}' ({} data sets) belongs at {}",
        plan.name,
        manifest.len(),
        plan.manifest_path.display()
    );

    println!("{}", manifest.to_json()?);
    Ok(())
}
