// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # crossfold-planner
//!
//! Describes the train/test partitions a crossfold will produce, without
//! running it. Given a [`CrossfoldSpec`] (source, fold count, method,
//! output directory and format), [`generate_plan`] computes the exact
//! descriptor of every partition file and the path of the
//! `all-partitions.json` manifest.
//!
//! # Components
//!
//! | Component | Role |
//! |---|---|
//! | [`DeferredSource`] | Source reference resolved on demand |
//! | [`PartitionMethod`] / [`UserPartitionMethod`] | How ratings are split |
//! | [`OutputFormat`] / [`format::resolve`] | Extension and descriptor kind |
//! | [`generate_plan`] → [`CrossfoldPlan`] | Per-fold [`data_spec::DataSetSpec`]s + manifest path |
//! | [`CrossfoldConfig`] | TOML front end |
//!
//! Planning is pure: no file is opened unless a deferred source producer
//! chooses to read one.
//!
//! # Example
//! ```
//! use crossfold_planner::{CrossfoldSpec, OutputFormat};
//! use data_spec::{DataSourceSpec, PackedDataSourceSpec};
//!
//! let spec = CrossfoldSpec::new()
//!     .with_deferred_source(|| {
//!         Ok(Some(DataSourceSpec::from(PackedDataSourceSpec::new("ml1m.pack")).with_name("ml1m")))
//!     })
//!     .with_partition_count(12)
//!     .with_output_format(OutputFormat::Pack)
//!     .with_output_dir("/tmp/cf");
//!
//! let plan = spec.plan().unwrap();
//! let last = plan.fold(12).unwrap();
//! assert!(last.train_source.file().ends_with("part12.train.pack"));
//! assert!(last.test_source.file().ends_with("part12.test.pack"));
//! ```

pub mod config;
mod error;
pub mod format;
pub mod method;
pub mod plan;
mod source;
pub mod spec;

pub use config::CrossfoldConfig;
pub use error::{BoxError, PlanError};
pub use format::{DescriptorKind, OutputFormat, ResolvedFormat};
pub use method::{HoldoutOrder, PartitionMethod, UserPartitionMethod};
pub use plan::{generate_plan, CrossfoldPlan};
pub use source::DeferredSource;
pub use spec::CrossfoldSpec;
