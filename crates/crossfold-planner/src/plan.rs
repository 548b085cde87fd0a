// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Crossfold plans: the output of the planner.
//!
//! A plan lists, fold by fold, the train/test descriptors a crossfold run
//! will write, plus the path of the manifest recording them. The plan is the
//! contract between the planner and the split executor; generating one never
//! touches the file system.
//!
//! # Layout
//! ```text
//! <output_dir>/
//!   part01.train.<ext>   part01.test.<ext>
//!   part02.train.<ext>   part02.test.<ext>
//!   ...
//!   all-partitions.json
//! ```
//! Fold numbers are 1-based and zero-padded to two digits. Wider numbers
//! (fold 100 and up) are written unpadded.

use crate::format::{self, DescriptorKind, OutputFormat};
use crate::spec::CrossfoldSpec;
use crate::PlanError;
use data_spec::attributes::{DATA_SET, PARTITION};
use data_spec::{
    DataSetSpec, DataSourceSpec, PackedDataSourceSpec, PartitionManifest, PreferenceDomain,
    TextDataSourceSpec, MANIFEST_FILE_NAME,
};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Largest fold count whose file names all share the two-digit width.
pub const MAX_PADDED_PARTITIONS: usize = 99;

/// The complete set of datasets a crossfold will produce.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CrossfoldPlan {
    /// Crossfold name; dataset names are `<name>.<fold>`.
    pub name: String,
    /// Directory all partition files live in.
    pub output_dir: PathBuf,
    /// Format of the partition files.
    pub output_format: OutputFormat,
    /// One dataset per fold, in fold order.
    pub data_sets: Vec<DataSetSpec>,
    /// Where the executor records the realized partitions.
    pub manifest_path: PathBuf,
}

impl CrossfoldPlan {
    /// Returns the number of folds.
    pub fn num_folds(&self) -> usize {
        self.data_sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data_sets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DataSetSpec> {
        self.data_sets.iter()
    }

    /// Returns the dataset for a 1-based fold index.
    pub fn fold(&self, index: usize) -> Option<&DataSetSpec> {
        index.checked_sub(1).and_then(|i| self.data_sets.get(i))
    }

    /// Returns the manifest contents the executor is expected to write.
    pub fn manifest(&self) -> PartitionManifest {
        PartitionManifest::new(self.data_sets.clone())
    }

    /// Validates the plan's layout.
    ///
    /// Checks:
    /// - Folds are numbered `1..=N` in order, in both name and attributes.
    /// - Every dataset carries the `DataSet` attribute.
    /// - Train and test files differ and sit directly under `output_dir`.
    /// - No file appears twice across the plan.
    /// - The manifest sits directly under `output_dir`.
    pub fn validate(&self) -> Result<(), PlanError> {
        let mut files = HashSet::new();

        for (i, ds) in self.data_sets.iter().enumerate() {
            let fold = i + 1;

            let expected_name = format!("{}.{fold}", self.name);
            if ds.name != expected_name {
                return Err(PlanError::InvalidPlan(format!(
                    "expected dataset name '{expected_name}', got '{}'",
                    ds.name
                )));
            }

            if ds.partition() != Some(fold as i64) {
                return Err(PlanError::InvalidPlan(format!(
                    "dataset '{}' has partition attribute {:?}, expected {fold}",
                    ds.name,
                    ds.partition()
                )));
            }

            if ds.data_set() != Some(self.name.as_str()) {
                return Err(PlanError::InvalidPlan(format!(
                    "dataset '{}' is missing the '{DATA_SET}' attribute",
                    ds.name
                )));
            }

            for source in [&ds.train_source, &ds.test_source] {
                let file = source.file();
                if file.parent() != Some(self.output_dir.as_path()) {
                    return Err(PlanError::InvalidPlan(format!(
                        "'{}' is not directly under '{}'",
                        file.display(),
                        self.output_dir.display()
                    )));
                }
                if !files.insert(file.to_path_buf()) {
                    return Err(PlanError::InvalidPlan(format!(
                        "'{}' appears more than once",
                        file.display()
                    )));
                }
            }
        }

        if self.manifest_path.parent() != Some(self.output_dir.as_path()) {
            return Err(PlanError::InvalidPlan(format!(
                "manifest '{}' is not directly under '{}'",
                self.manifest_path.display(),
                self.output_dir.display()
            )));
        }

        Ok(())
    }

    /// Returns a human-readable summary of the plan.
    pub fn summary(&self) -> String {
        format!(
            "Crossfold '{}': {} folds, format {}, output {}, manifest {}",
            self.name,
            self.num_folds(),
            self.output_format,
            self.output_dir.display(),
            self.manifest_path.display(),
        )
    }
}

/// Computes the plan for a crossfold spec.
///
/// Preconditions, checked in order before any dataset is built:
/// 1. an output directory is set ([`PlanError::MissingOutputDir`]);
/// 2. the source resolves to a descriptor ([`PlanError::MissingSource`],
///    or [`PlanError::SourceResolution`] if the producer fails);
/// 3. a name is available, explicitly or from the source
///    ([`PlanError::UnresolvedName`]).
///
/// The source is resolved once per call, and its domain at that moment is
/// copied into every generated descriptor. Method parameters are not
/// checked here: they do not affect the file layout.
pub fn generate_plan(spec: &CrossfoldSpec) -> Result<CrossfoldPlan, PlanError> {
    let output_dir = spec.output_dir().ok_or(PlanError::MissingOutputDir)?;
    let source = spec.source()?.ok_or(PlanError::MissingSource)?;
    let name = match spec.explicit_name() {
        Some(name) => name.to_string(),
        None => source
            .name()
            .map(str::to_string)
            .ok_or(PlanError::UnresolvedName)?,
    };

    let count = spec.partition_count();
    if count > MAX_PADDED_PARTITIONS {
        tracing::warn!(
            "{count} partitions exceed two-digit padding; files past part{MAX_PADDED_PARTITIONS} \
             will not sort lexically"
        );
    }
    if let Some(n) = spec.sample_size() {
        if !matches!(spec.method(), crate::PartitionMethod::SampleSize { .. }) {
            tracing::warn!("sample size {n} is ignored by method '{}'", spec.method());
        }
    }

    tracing::debug!(
        "planning crossfold '{name}': {count} folds, method {}, user holdout {}, format {}",
        spec.method(),
        spec.user_partition_method(),
        spec.output_format(),
    );

    let domain = source.domain();
    let format = spec.output_format();
    let mut builder = PlanBuilder::new(&name, output_dir, format);
    for fold in 1..=count {
        let train = make_data_source(output_dir, &fold_basename(fold, "train"), format, domain);
        let test = make_data_source(output_dir, &fold_basename(fold, "test"), format, domain);
        builder.add_fold(train, test);
    }

    let plan = builder.build();
    for ds in plan.iter() {
        tracing::debug!("{}", ds.summary());
    }
    tracing::info!("{}", plan.summary());
    Ok(plan)
}

/// Returns `part<NN>.<role>` for a 1-based fold index.
pub fn fold_basename(fold: usize, role: &str) -> String {
    format!("part{fold:02}.{role}")
}

/// Builds the descriptor for one partition file.
fn make_data_source(
    dir: &Path,
    basename: &str,
    format: OutputFormat,
    domain: Option<PreferenceDomain>,
) -> DataSourceSpec {
    let resolved = format::resolve(format);
    let file = dir.join(format!("{basename}.{}", resolved.extension));
    match resolved.kind {
        DescriptorKind::Packed => DataSourceSpec::Packed(PackedDataSourceSpec {
            name: None,
            file,
            domain,
        }),
        DescriptorKind::Text { delimiter } => DataSourceSpec::Text(TextDataSourceSpec {
            name: None,
            file,
            delimiter: delimiter.to_string(),
            header_lines: 0,
            domain,
        }),
    }
}

/// Builder helper for constructing a `CrossfoldPlan` fold by fold.
pub(crate) struct PlanBuilder {
    name: String,
    output_dir: PathBuf,
    output_format: OutputFormat,
    data_sets: Vec<DataSetSpec>,
}

impl PlanBuilder {
    /// Creates a new builder.
    pub fn new(name: &str, output_dir: &Path, output_format: OutputFormat) -> Self {
        Self {
            name: name.to_string(),
            output_dir: output_dir.to_path_buf(),
            output_format,
            data_sets: Vec::new(),
        }
    }

    /// Appends the next fold, numbering it after the folds already added.
    pub fn add_fold(&mut self, train: DataSourceSpec, test: DataSourceSpec) {
        let fold = self.data_sets.len() + 1;
        let mut ds = DataSetSpec::new(format!("{}.{fold}", self.name), train, test);
        ds.set_attribute(DATA_SET, self.name.as_str());
        ds.set_attribute(PARTITION, fold);
        self.data_sets.push(ds);
    }

    /// Consumes the builder and returns the finished plan.
    pub fn build(self) -> CrossfoldPlan {
        let manifest_path = self.output_dir.join(MANIFEST_FILE_NAME);
        CrossfoldPlan {
            name: self.name,
            output_dir: self.output_dir,
            output_format: self.output_format,
            data_sets: self.data_sets,
            manifest_path,
        }
    }
}
