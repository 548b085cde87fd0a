// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Crossfold configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! name = "ml100k"
//! partition_count = 5
//! output_dir = "./crossfold/ml100k"
//! output_format = "csv"
//! include_timestamps = true
//!
//! [method]
//! type = "partition-users"
//!
//! [user_partition_method]
//! type = "holdout"
//! order = "random"
//! count = 10
//!
//! [source]
//! type = "text"
//! file = "data/ml100k/u.data"
//! delimiter = "\t"
//! ```
//!
//! Instead of an inline `[source]`, `source_file = "ml100k.json"` names a
//! JSON descriptor that is read lazily, each time the source is resolved.

use crate::format::OutputFormat;
use crate::method::{PartitionMethod, UserPartitionMethod};
use crate::spec::{CrossfoldSpec, DEFAULT_PARTITION_COUNT};
use crate::PlanError;
use data_spec::DataSourceSpec;
use std::path::{Path, PathBuf};

/// Configuration for a crossfold.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CrossfoldConfig {
    /// Crossfold name; defaults to the source's name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Number of folds.
    #[serde(default = "default_partition_count")]
    pub partition_count: usize,
    /// Directory the partition files will be written to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    /// Partition file format.
    #[serde(default)]
    pub output_format: OutputFormat,
    /// Whether text output carries a timestamp column.
    #[serde(default = "default_true")]
    pub include_timestamps: bool,
    /// Sample size for the `sample-size` method.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_size: Option<usize>,
    /// JSON data-source descriptor, resolved lazily.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_file: Option<PathBuf>,
    /// Top-level partition method.
    #[serde(default)]
    pub method: PartitionMethod,
    /// Per-user holdout policy.
    #[serde(default)]
    pub user_partition_method: UserPartitionMethod,
    /// Inline data-source descriptor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<DataSourceSpec>,
}

fn default_partition_count() -> usize {
    DEFAULT_PARTITION_COUNT
}

fn default_true() -> bool {
    true
}

impl CrossfoldConfig {
    /// Loads configuration from a TOML file.
    ///
    /// A relative `source_file` is resolved against the config file's
    /// directory.
    pub fn from_file(path: &Path) -> Result<Self, PlanError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PlanError::ConfigError(format!("cannot read config '{}': {e}", path.display()))
        })?;
        let mut config = Self::from_toml(&content)?;

        if let (Some(file), Some(base)) = (&config.source_file, path.parent()) {
            if file.is_relative() {
                config.source_file = Some(base.join(file));
            }
        }
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, PlanError> {
        toml::from_str(toml_str)
            .map_err(|e| PlanError::ConfigError(format!("TOML parse error: {e}")))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, PlanError> {
        toml::to_string_pretty(self)
            .map_err(|e| PlanError::ConfigError(format!("TOML serialise error: {e}")))
    }

    /// Builds the crossfold spec described by this config.
    ///
    /// The source is not resolved here; a `source_file` only becomes a
    /// deferred producer.
    pub fn to_spec(&self) -> Result<CrossfoldSpec, PlanError> {
        let mut spec = CrossfoldSpec::new()
            .with_partition_count(self.partition_count)
            .with_method(self.method)
            .with_user_partition_method(self.user_partition_method)
            .with_include_timestamps(self.include_timestamps)
            .with_output_format(self.output_format);

        if let Some(name) = &self.name {
            spec.set_name(name.clone());
        }
        if let Some(dir) = &self.output_dir {
            spec.set_output_dir(dir.clone());
        }
        spec.set_sample_size(self.sample_size);

        match (&self.source, &self.source_file) {
            (Some(_), Some(_)) => {
                return Err(PlanError::ConfigError(
                    "'source' and 'source_file' are mutually exclusive".into(),
                ));
            }
            (Some(source), None) => {
                source.validate()?;
                spec.set_source(source.clone());
            }
            (None, Some(path)) => {
                let path = path.clone();
                spec.set_deferred_source(move || {
                    let source = DataSourceSpec::from_file(&path)?;
                    source.validate()?;
                    Ok(Some(source))
                });
            }
            (None, None) => {}
        }

        spec.validate()?;
        Ok(spec)
    }
}

impl Default for CrossfoldConfig {
    fn default() -> Self {
        Self {
            name: None,
            partition_count: DEFAULT_PARTITION_COUNT,
            output_dir: None,
            output_format: OutputFormat::Csv,
            include_timestamps: true,
            sample_size: None,
            source_file: None,
            method: PartitionMethod::PartitionUsers,
            user_partition_method: UserPartitionMethod::default(),
            source: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::HoldoutOrder;
    use data_spec::TextDataSourceSpec;

    const FULL: &str = r#"
name = "ml100k"
partition_count = 3
output_dir = "/tmp/cf"
output_format = "pack"
include_timestamps = false
sample_size = 1000

[method]
type = "sample-size"
n = 1000

[user_partition_method]
type = "holdout-fraction"
order = "timestamp"
fraction = 0.2

[source]
type = "text"
file = "data/u.data"
delimiter = "\t"

[source.domain]
minimum = 1.0
maximum = 5.0
precision = 1.0
"#;

    #[test]
    fn test_default() {
        let c = CrossfoldConfig::default();
        assert_eq!(c.partition_count, 5);
        assert_eq!(c.output_format, OutputFormat::Csv);
        assert!(c.include_timestamps);
        assert_eq!(c.method, PartitionMethod::PartitionUsers);
    }

    #[test]
    fn test_from_toml_minimal() {
        let c = CrossfoldConfig::from_toml(r#"output_dir = "/tmp/cf""#).unwrap();
        assert_eq!(c.output_dir, Some(PathBuf::from("/tmp/cf")));
        assert_eq!(c.partition_count, 5);
        assert_eq!(c.user_partition_method, UserPartitionMethod::default());
        assert!(c.include_timestamps);
    }

    #[test]
    fn test_from_toml_full() {
        let c = CrossfoldConfig::from_toml(FULL).unwrap();
        assert_eq!(c.name.as_deref(), Some("ml100k"));
        assert_eq!(c.partition_count, 3);
        assert_eq!(c.output_format, OutputFormat::Pack);
        assert!(!c.include_timestamps);
        assert_eq!(c.method, PartitionMethod::SampleSize { n: 1000 });
        assert_eq!(
            c.user_partition_method,
            UserPartitionMethod::HoldoutFraction {
                order: HoldoutOrder::Timestamp,
                fraction: 0.2
            }
        );
        let source = c.source.unwrap();
        assert_eq!(source.delimiter(), Some("\t"));
        assert_eq!(source.domain().unwrap().precision, Some(1.0));
    }

    #[test]
    fn test_from_toml_bad_format() {
        let r = CrossfoldConfig::from_toml(r#"output_format = "parquet""#);
        assert!(matches!(r, Err(PlanError::ConfigError(_))));
    }

    #[test]
    fn test_from_toml_format_alias() {
        let c = CrossfoldConfig::from_toml(r#"output_format = "gzip""#).unwrap();
        assert_eq!(c.output_format, OutputFormat::CsvGzip);
        let c = CrossfoldConfig::from_toml(r#"output_format = "packed""#).unwrap();
        assert_eq!(c.output_format, OutputFormat::Pack);
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let c = CrossfoldConfig::from_toml(FULL).unwrap();
        let toml = c.to_toml().unwrap();
        let back = CrossfoldConfig::from_toml(&toml).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_to_spec() {
        let spec = CrossfoldConfig::from_toml(FULL).unwrap().to_spec().unwrap();
        assert_eq!(spec.explicit_name(), Some("ml100k"));
        assert_eq!(spec.partition_count(), 3);
        assert_eq!(spec.output_format(), OutputFormat::Pack);
        assert_eq!(spec.sample_size(), Some(1000));
        assert!(!spec.include_timestamps());
        assert!(!spec.source_ref().is_deferred());
    }

    #[test]
    fn test_to_spec_conflicting_sources() {
        let c = CrossfoldConfig {
            source: Some(TextDataSourceSpec::new("a.csv").into()),
            source_file: Some(PathBuf::from("a.json")),
            ..Default::default()
        };
        assert!(matches!(c.to_spec(), Err(PlanError::ConfigError(_))));
    }

    #[test]
    fn test_to_spec_invalid_method() {
        let c = CrossfoldConfig {
            method: PartitionMethod::SampleSize { n: 0 },
            ..Default::default()
        };
        assert!(matches!(c.to_spec(), Err(PlanError::InvalidMethod { .. })));
    }

    #[test]
    fn test_source_file_is_deferred() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("crossfold.toml");
        std::fs::write(&config_path, "source_file = \"source.json\"\n").unwrap();

        let c = CrossfoldConfig::from_file(&config_path).unwrap();
        assert_eq!(c.source_file, Some(dir.path().join("source.json")));

        // The descriptor does not exist yet; building the spec must still work.
        let spec = c.to_spec().unwrap();
        assert!(spec.source_ref().is_deferred());
        assert!(matches!(spec.source(), Err(PlanError::SourceResolution { .. })));

        let source = DataSourceSpec::from(TextDataSourceSpec::new("r.csv")).with_name("late");
        std::fs::write(dir.path().join("source.json"), source.to_json().unwrap()).unwrap();
        assert_eq!(spec.name().unwrap().as_deref(), Some("late"));
    }

    #[test]
    fn test_from_file_missing() {
        let r = CrossfoldConfig::from_file(Path::new("/definitely/not/here.toml"));
        assert!(matches!(r, Err(PlanError::ConfigError(_))));
    }
}
