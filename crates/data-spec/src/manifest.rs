// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Partition manifest (`all-partitions.json`).
//!
//! The manifest records the datasets a crossfold run produced. It is a
//! plain JSON array of dataset descriptors:
//!
//! ```json
//! [
//!   {
//!     "name": "ml100k.1",
//!     "train_source": { "type": "text", "file": "/tmp/cf/part01.train.csv", "delimiter": "," },
//!     "test_source":  { "type": "text", "file": "/tmp/cf/part01.test.csv",  "delimiter": "," },
//!     "attributes": { "DataSet": "ml100k", "Partition": 1 }
//!   }
//! ]
//! ```
//!
//! Keys are snake_case throughout (`train_source`, `test_source`, and the
//! descriptor fields), matching every other serde type in this workspace.
//! Readers expecting camelCase keys (`trainSource`/`testSource`) need a
//! translation step.

use crate::{DataSetSpec, DataSpecError};
use std::collections::HashSet;
use std::path::Path;

/// File name of the manifest inside a crossfold output directory.
pub const MANIFEST_FILE_NAME: &str = "all-partitions.json";

/// The set of datasets recorded for one crossfold.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PartitionManifest {
    pub data_sets: Vec<DataSetSpec>,
}

impl PartitionManifest {
    pub fn new(data_sets: Vec<DataSetSpec>) -> Self {
        Self { data_sets }
    }

    /// Loads a manifest from a JSON file path.
    pub fn from_file(path: &Path) -> Result<Self, DataSpecError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parses a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, DataSpecError> {
        let manifest: Self = serde_json::from_str(json)?;
        Ok(manifest)
    }

    /// Serialises the manifest to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DataSpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn len(&self) -> usize {
        self.data_sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data_sets.is_empty()
    }

    /// Looks up a dataset by name.
    pub fn find(&self, name: &str) -> Option<&DataSetSpec> {
        self.data_sets.iter().find(|ds| ds.name == name)
    }

    /// Validates that the manifest is internally consistent.
    ///
    /// Checks:
    /// - No dataset has an empty name.
    /// - No duplicate dataset names.
    /// - Train and test files differ within each dataset.
    /// - Every source descriptor is itself valid.
    pub fn validate(&self) -> Result<(), DataSpecError> {
        let mut seen = HashSet::new();
        for ds in &self.data_sets {
            if ds.name.is_empty() {
                return Err(DataSpecError::InvalidManifest(
                    "dataset with empty name".into(),
                ));
            }
            if !seen.insert(ds.name.as_str()) {
                return Err(DataSpecError::InvalidManifest(format!(
                    "duplicate dataset name '{}'",
                    ds.name
                )));
            }
            if ds.train_source.file() == ds.test_source.file() {
                return Err(DataSpecError::InvalidManifest(format!(
                    "dataset '{}' uses '{}' for both train and test",
                    ds.name,
                    ds.train_source.file().display()
                )));
            }
            ds.train_source.validate()?;
            ds.test_source.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PackedDataSourceSpec, TextDataSourceSpec};

    fn fold(i: usize) -> DataSetSpec {
        let mut ds = DataSetSpec::new(
            format!("ml100k.{i}"),
            TextDataSourceSpec::new(format!("/tmp/cf/part{i:02}.train.csv")).into(),
            TextDataSourceSpec::new(format!("/tmp/cf/part{i:02}.test.csv")).into(),
        );
        ds.set_attribute(crate::attributes::DATA_SET, "ml100k");
        ds.set_attribute(crate::attributes::PARTITION, i);
        ds
    }

    #[test]
    fn test_json_is_array() {
        let m = PartitionManifest::new(vec![fold(1), fold(2)]);
        let json = m.to_json().unwrap();
        assert!(json.trim_start().starts_with('['));

        let back = PartitionManifest::from_json(&json).unwrap();
        assert_eq!(back, m);
        assert_eq!(back.len(), 2);
    }

    #[test]
    fn test_json_keys_are_snake_case() {
        let json = PartitionManifest::new(vec![fold(1)]).to_json().unwrap();
        assert!(json.contains("\"train_source\""));
        assert!(json.contains("\"test_source\""));
        assert!(!json.contains("trainSource"));
    }

    #[test]
    fn test_find() {
        let m = PartitionManifest::new(vec![fold(1), fold(2)]);
        assert_eq!(m.find("ml100k.2").and_then(|d| d.partition()), Some(2));
        assert!(m.find("ml100k.3").is_none());
    }

    #[test]
    fn test_validate_ok() {
        PartitionManifest::new(vec![fold(1), fold(2)]).validate().unwrap();
        PartitionManifest::default().validate().unwrap();
    }

    #[test]
    fn test_validate_duplicate_names() {
        let m = PartitionManifest::new(vec![fold(1), fold(1)]);
        assert!(matches!(m.validate(), Err(DataSpecError::InvalidManifest(_))));
    }

    #[test]
    fn test_validate_same_train_test() {
        let ds = DataSetSpec::new(
            "bad",
            PackedDataSourceSpec::new("/tmp/x.pack").into(),
            PackedDataSourceSpec::new("/tmp/x.pack").into(),
        );
        assert!(PartitionManifest::new(vec![ds]).validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MANIFEST_FILE_NAME);
        let m = PartitionManifest::new(vec![fold(1)]);
        std::fs::write(&path, m.to_json().unwrap()).unwrap();
        assert_eq!(PartitionManifest::from_file(&path).unwrap(), m);
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(
            PartitionManifest::from_json("{ not json"),
            Err(DataSpecError::ParseError(_))
        ));
    }
}
