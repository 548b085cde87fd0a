// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Dataset descriptors: a named train/test pair of data sources.

use crate::attributes::{self, AttributeValue, Attributes};
use crate::DataSourceSpec;

/// One train/test split, as consumed by evaluation and recommender builds.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DataSetSpec {
    /// Dataset name (e.g., `"ml100k.3"`).
    pub name: String,
    /// Source of training data.
    pub train_source: DataSourceSpec,
    /// Source of test data.
    pub test_source: DataSourceSpec,
    /// Reporting/grouping attributes.
    #[serde(default)]
    pub attributes: Attributes,
}

impl DataSetSpec {
    /// Creates a dataset descriptor with no attributes.
    pub fn new(
        name: impl Into<String>,
        train_source: DataSourceSpec,
        test_source: DataSourceSpec,
    ) -> Self {
        Self {
            name: name.into(),
            train_source,
            test_source,
            attributes: Attributes::new(),
        }
    }

    /// Sets an attribute.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        self.attributes.set(key, value);
    }

    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// Returns the `DataSet` attribute, if present.
    pub fn data_set(&self) -> Option<&str> {
        self.attributes.get_str(attributes::DATA_SET)
    }

    /// Returns the 1-based `Partition` attribute, if present.
    pub fn partition(&self) -> Option<i64> {
        self.attributes.get_int(attributes::PARTITION)
    }

    /// One-line description for logs and tables.
    pub fn summary(&self) -> String {
        format!(
            "{}: train={} test={}",
            self.name,
            self.train_source.file().display(),
            self.test_source.file().display(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextDataSourceSpec;

    fn sample() -> DataSetSpec {
        let mut ds = DataSetSpec::new(
            "ml100k.1",
            TextDataSourceSpec::new("/tmp/cf/part01.train.csv").into(),
            TextDataSourceSpec::new("/tmp/cf/part01.test.csv").into(),
        );
        ds.set_attribute(attributes::DATA_SET, "ml100k");
        ds.set_attribute(attributes::PARTITION, 1usize);
        ds
    }

    #[test]
    fn test_attribute_helpers() {
        let ds = sample();
        assert_eq!(ds.data_set(), Some("ml100k"));
        assert_eq!(ds.partition(), Some(1));
        assert_eq!(ds.attribute("Other"), None);
    }

    #[test]
    fn test_summary() {
        let s = sample().summary();
        assert!(s.starts_with("ml100k.1:"));
        assert!(s.contains("part01.train.csv"));
        assert!(s.contains("part01.test.csv"));
    }

    #[test]
    fn test_json_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["name"], "ml100k.1");
        assert_eq!(json["train_source"]["type"], "text");
        assert_eq!(json["test_source"]["delimiter"], ",");
        assert_eq!(json["attributes"]["Partition"], 1);
    }

    #[test]
    fn test_missing_attributes_default() {
        let json = r#"{
            "name": "x",
            "train_source": { "type": "pack", "file": "a.pack" },
            "test_source": { "type": "pack", "file": "b.pack" }
        }"#;
        let ds: DataSetSpec = serde_json::from_str(json).unwrap();
        assert!(ds.attributes.is_empty());
        assert_eq!(ds.partition(), None);
    }
}
