// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `crossfold inspect` command: show the effective configuration.
//!
//! Resolves the source once so that deferred descriptors can be checked
//! before a plan is requested.

use super::{load_config, Overrides};
use std::path::PathBuf;

pub fn execute(config: Option<PathBuf>, overrides: Overrides) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║             crossfold · Config Inspector            ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    let cfg = load_config(config.as_deref(), overrides)?;
    let spec = cfg.to_spec()?;

    // ── Configuration ──────────────────────────────────────────
    println!("  Configuration (TOML):");
    for line in cfg.to_toml()?.lines() {
        println!("   {line}");
    }
    println!();

    // ── Source ─────────────────────────────────────────────────
    let kind = if spec.source_ref().is_deferred() {
        "deferred"
    } else {
        "inline"
    };
    println!("  Source ({kind}):");
    match spec.source() {
        Ok(Some(source)) => {
            println!("   Name:      {}", source.name().unwrap_or("<unnamed>"));
            println!("   Kind:      {}", source.kind());
            println!("   File:      {}", source.file().display());
            match source.domain() {
                Some(d) => println!("   Domain:    {d}"),
                None => println!("   Domain:    <unknown>"),
            }
        }
        Ok(None) => println!("   <not configured>"),
        Err(e) => println!("   <unresolvable: {e}>"),
    }
    println!();

    // ── Derived ────────────────────────────────────────────────
    match spec.name() {
        Ok(Some(name)) => println!("  Crossfold name: {name}"),
        _ => println!("  Crossfold name: <unresolved>"),
    }
    match spec.partition_spec_file() {
        Ok(path) => println!("  Manifest path:  {}", path.display()),
        Err(e) => println!("  Manifest path:  <{e}>"),
    }
    println!();
    Ok(())
}
