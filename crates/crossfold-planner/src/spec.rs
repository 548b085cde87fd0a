// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The crossfold specification.
//!
//! [`CrossfoldSpec`] is configuration only. Required fields (output
//! directory, source) are checked when a plan is generated, not when the
//! spec is built, so a spec can be assembled before its source exists.

use crate::format::OutputFormat;
use crate::method::{PartitionMethod, UserPartitionMethod};
use crate::plan::{self, CrossfoldPlan};
use crate::source::DeferredSource;
use crate::{BoxError, PlanError};
use data_spec::{DataSetSpec, DataSourceSpec, MANIFEST_FILE_NAME};
use std::path::{Path, PathBuf};

/// Default number of folds.
pub const DEFAULT_PARTITION_COUNT: usize = 5;

/// Specification of a crossfold operation.
///
/// # Example
/// ```
/// use crossfold_planner::{CrossfoldSpec, OutputFormat};
/// use data_spec::{DataSourceSpec, TextDataSourceSpec};
///
/// let source = DataSourceSpec::from(TextDataSourceSpec::new("ratings.csv")).with_name("ml100k");
/// let spec = CrossfoldSpec::new()
///     .with_source(source)
///     .with_partition_count(2)
///     .with_output_dir("/tmp/cf");
///
/// let plan = spec.plan().unwrap();
/// assert_eq!(plan.data_sets[0].name, "ml100k.1");
/// assert_eq!(plan.manifest_path, std::path::Path::new("/tmp/cf/all-partitions.json"));
/// ```
#[derive(Debug, Clone)]
pub struct CrossfoldSpec {
    name: Option<String>,
    source: DeferredSource,
    partition_count: usize,
    method: PartitionMethod,
    user_partition_method: UserPartitionMethod,
    sample_size: Option<usize>,
    include_timestamps: bool,
    output_format: OutputFormat,
    output_dir: Option<PathBuf>,
}

impl Default for CrossfoldSpec {
    fn default() -> Self {
        Self {
            name: None,
            source: DeferredSource::Unset,
            partition_count: DEFAULT_PARTITION_COUNT,
            method: PartitionMethod::PartitionUsers,
            // Always populated, even for methods that ignore it.
            user_partition_method: UserPartitionMethod::default(),
            sample_size: None,
            include_timestamps: true,
            output_format: OutputFormat::Csv,
            output_dir: None,
        }
    }
}

impl CrossfoldSpec {
    /// Creates a spec with default settings and no source or output directory.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Name ──────────────────────────────────────────────────────

    /// Returns the crossfold name.
    ///
    /// Falls back to the source's name when no explicit name is set. An
    /// unset source or an unnamed source yields `Ok(None)`; only a failing
    /// producer is an error.
    pub fn name(&self) -> Result<Option<String>, PlanError> {
        if let Some(name) = &self.name {
            return Ok(Some(name.clone()));
        }
        Ok(self
            .source
            .get()?
            .and_then(|s| s.name().map(str::to_string)))
    }

    /// Returns the explicitly configured name, without consulting the source.
    pub fn explicit_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.set_name(name);
        self
    }

    // ── Source ────────────────────────────────────────────────────

    /// Resolves the source. Invokes the producer for deferred sources.
    pub fn source(&self) -> Result<Option<DataSourceSpec>, PlanError> {
        self.source.get()
    }

    /// Returns the unresolved source reference.
    pub fn source_ref(&self) -> &DeferredSource {
        &self.source
    }

    pub fn set_source(&mut self, source: DataSourceSpec) {
        self.source.set(source);
    }

    /// Sets a producer that is invoked every time the source is needed.
    pub fn set_deferred_source<F>(&mut self, producer: F)
    where
        F: Fn() -> Result<Option<DataSourceSpec>, BoxError> + Send + Sync + 'static,
    {
        self.source.set_deferred(producer);
    }

    pub fn with_source(mut self, source: DataSourceSpec) -> Self {
        self.set_source(source);
        self
    }

    pub fn with_deferred_source<F>(mut self, producer: F) -> Self
    where
        F: Fn() -> Result<Option<DataSourceSpec>, BoxError> + Send + Sync + 'static,
    {
        self.set_deferred_source(producer);
        self
    }

    // ── Partitioning ──────────────────────────────────────────────

    pub fn partition_count(&self) -> usize {
        self.partition_count
    }

    pub fn set_partition_count(&mut self, count: usize) {
        self.partition_count = count;
    }

    pub fn with_partition_count(mut self, count: usize) -> Self {
        self.partition_count = count;
        self
    }

    pub fn method(&self) -> PartitionMethod {
        self.method
    }

    pub fn set_method(&mut self, method: PartitionMethod) {
        self.method = method;
    }

    pub fn with_method(mut self, method: PartitionMethod) -> Self {
        self.method = method;
        self
    }

    pub fn user_partition_method(&self) -> UserPartitionMethod {
        self.user_partition_method
    }

    pub fn set_user_partition_method(&mut self, method: UserPartitionMethod) {
        self.user_partition_method = method;
    }

    pub fn with_user_partition_method(mut self, method: UserPartitionMethod) -> Self {
        self.user_partition_method = method;
        self
    }

    pub fn sample_size(&self) -> Option<usize> {
        self.sample_size
    }

    pub fn set_sample_size(&mut self, size: Option<usize>) {
        self.sample_size = size;
    }

    pub fn with_sample_size(mut self, size: usize) -> Self {
        self.sample_size = Some(size);
        self
    }

    // ── Output ────────────────────────────────────────────────────

    pub fn include_timestamps(&self) -> bool {
        self.include_timestamps
    }

    pub fn set_include_timestamps(&mut self, include: bool) {
        self.include_timestamps = include;
    }

    pub fn with_include_timestamps(mut self, include: bool) -> Self {
        self.include_timestamps = include;
        self
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    pub fn set_output_format(&mut self, format: OutputFormat) {
        self.output_format = format;
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    pub fn set_output_dir(&mut self, dir: impl Into<PathBuf>) {
        self.output_dir = Some(dir.into());
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.set_output_dir(dir);
        self
    }

    /// Returns the path of the `all-partitions.json` manifest the crossfold
    /// will produce.
    pub fn partition_spec_file(&self) -> Result<PathBuf, PlanError> {
        let dir = self.output_dir().ok_or(PlanError::MissingOutputDir)?;
        Ok(dir.join(MANIFEST_FILE_NAME))
    }

    // ── Validation & planning ─────────────────────────────────────

    /// Checks method parameters. Does not resolve the source.
    ///
    /// Applied when building a spec from [`crate::CrossfoldConfig`]; plan
    /// generation does not call it.
    pub fn validate(&self) -> Result<(), PlanError> {
        self.method.validate()?;
        self.user_partition_method.validate()?;
        if self.sample_size == Some(0) {
            return Err(PlanError::ConfigError("sample size must be at least 1".into()));
        }
        Ok(())
    }

    /// Computes the crossfold plan. See [`plan::generate_plan`].
    pub fn plan(&self) -> Result<CrossfoldPlan, PlanError> {
        plan::generate_plan(self)
    }

    /// Returns the datasets the crossfold will produce.
    pub fn data_sets(&self) -> Result<Vec<DataSetSpec>, PlanError> {
        Ok(self.plan()?.data_sets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::HoldoutOrder;
    use data_spec::TextDataSourceSpec;

    fn source(name: Option<&str>) -> DataSourceSpec {
        let mut t = TextDataSourceSpec::new("ratings.csv");
        t.name = name.map(str::to_string);
        DataSourceSpec::Text(t)
    }

    #[test]
    fn test_defaults() {
        let s = CrossfoldSpec::new();
        assert_eq!(s.partition_count(), 5);
        assert_eq!(s.method(), PartitionMethod::PartitionUsers);
        assert_eq!(
            s.user_partition_method(),
            UserPartitionMethod::Holdout {
                order: HoldoutOrder::Random,
                count: 10
            }
        );
        assert_eq!(s.sample_size(), None);
        assert!(s.include_timestamps());
        assert_eq!(s.output_format(), OutputFormat::Csv);
        assert!(s.output_dir().is_none());
        assert!(!s.source_ref().is_set());
    }

    #[test]
    fn test_user_partition_default_survives_method_change() {
        let s = CrossfoldSpec::new().with_method(PartitionMethod::PartitionRatings);
        assert_eq!(s.user_partition_method(), UserPartitionMethod::default());
    }

    #[test]
    fn test_name_explicit_wins() {
        let s = CrossfoldSpec::new()
            .with_source(source(Some("from-source")))
            .with_name("explicit");
        assert_eq!(s.name().unwrap().as_deref(), Some("explicit"));
        assert_eq!(s.explicit_name(), Some("explicit"));
    }

    #[test]
    fn test_name_falls_back_to_source() {
        let s = CrossfoldSpec::new().with_source(source(Some("ml100k")));
        assert_eq!(s.name().unwrap().as_deref(), Some("ml100k"));
        assert_eq!(s.explicit_name(), None);
    }

    #[test]
    fn test_name_absent() {
        assert_eq!(CrossfoldSpec::new().name().unwrap(), None);
        let unnamed = CrossfoldSpec::new().with_source(source(None));
        assert_eq!(unnamed.name().unwrap(), None);
        let empty = CrossfoldSpec::new().with_deferred_source(|| Ok(None));
        assert_eq!(empty.name().unwrap(), None);
    }

    #[test]
    fn test_name_producer_error() {
        let s = CrossfoldSpec::new().with_deferred_source(|| Err("boom".into()));
        assert!(matches!(s.name(), Err(PlanError::SourceResolution { .. })));
    }

    #[test]
    fn test_partition_spec_file() {
        assert!(matches!(
            CrossfoldSpec::new().partition_spec_file(),
            Err(PlanError::MissingOutputDir)
        ));
        let s = CrossfoldSpec::new().with_output_dir("/tmp/cf");
        assert_eq!(
            s.partition_spec_file().unwrap(),
            PathBuf::from("/tmp/cf/all-partitions.json")
        );
    }

    #[test]
    fn test_validate() {
        CrossfoldSpec::new().validate().unwrap();
        assert!(CrossfoldSpec::new().with_sample_size(0).validate().is_err());
        assert!(CrossfoldSpec::new()
            .with_method(PartitionMethod::SampleSize { n: 0 })
            .validate()
            .is_err());
    }

    #[test]
    fn test_setters() {
        let mut s = CrossfoldSpec::new();
        s.set_partition_count(0);
        s.set_include_timestamps(false);
        s.set_output_format(OutputFormat::Pack);
        s.set_sample_size(Some(500));
        assert_eq!(s.partition_count(), 0);
        assert!(!s.include_timestamps());
        assert_eq!(s.output_format(), OutputFormat::Pack);
        assert_eq!(s.sample_size(), Some(500));
    }
}
