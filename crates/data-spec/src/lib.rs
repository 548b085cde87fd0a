// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # data-spec
//!
//! Descriptors for recommender evaluation data. Nothing in this crate reads
//! or writes ratings; it only describes where they live and how they are
//! encoded.
//!
//! - [`DataSourceSpec`] — a ratings source, either delimited text or packed
//!   binary, with an optional [`PreferenceDomain`].
//! - [`DataSetSpec`] — a named train/test pair with typed [`Attributes`].
//! - [`PartitionManifest`] — the `all-partitions.json` record of a crossfold.
//!
//! # Example
//! ```
//! use data_spec::{DataSetSpec, DataSourceSpec, TextDataSourceSpec};
//!
//! let train: DataSourceSpec = TextDataSourceSpec::new("part01.train.csv").into();
//! let test: DataSourceSpec = TextDataSourceSpec::new("part01.test.csv").into();
//! let mut ds = DataSetSpec::new("ml100k.1", train, test);
//! ds.set_attribute("Partition", 1i64);
//! assert_eq!(ds.partition(), Some(1));
//! ```

pub mod attributes;
mod dataset;
mod domain;
mod error;
pub mod manifest;
mod source;

pub use attributes::{AttributeValue, Attributes};
pub use dataset::DataSetSpec;
pub use domain::PreferenceDomain;
pub use error::DataSpecError;
pub use manifest::{PartitionManifest, MANIFEST_FILE_NAME};
pub use source::{DataSourceSpec, PackedDataSourceSpec, TextDataSourceSpec, DEFAULT_DELIMITER};
