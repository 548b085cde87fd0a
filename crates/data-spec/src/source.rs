// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Data-source descriptors.
//!
//! A descriptor says *where* and *how* a ratings dataset is stored. It never
//! holds the data itself.
//!
//! # Format
//! ```json
//! {
//!   "type": "text",
//!   "name": "ml100k",
//!   "file": "data/ml100k/u.data",
//!   "delimiter": "\t",
//!   "domain": { "minimum": 1.0, "maximum": 5.0, "precision": 1.0 }
//! }
//! ```

use crate::{DataSpecError, PreferenceDomain};
use std::path::{Path, PathBuf};

/// The default field delimiter for delimited-text sources.
pub const DEFAULT_DELIMITER: &str = ",";

/// A delimited-text ratings file.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextDataSourceSpec {
    /// Human-readable source name (e.g., `"ml100k"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Path to the text file. May carry a compression suffix (`.gz`, `.xz`).
    pub file: PathBuf,
    /// Field delimiter.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    /// Number of header lines to skip.
    #[serde(default)]
    pub header_lines: usize,
    /// Preference domain of the ratings, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<PreferenceDomain>,
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

impl TextDataSourceSpec {
    /// Creates a comma-delimited source with no name or domain.
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            name: None,
            file: file.into(),
            delimiter: default_delimiter(),
            header_lines: 0,
            domain: None,
        }
    }
}

/// A packed binary ratings file.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PackedDataSourceSpec {
    /// Human-readable source name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Path to the `.pack` file.
    pub file: PathBuf,
    /// Preference domain of the ratings, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<PreferenceDomain>,
}

impl PackedDataSourceSpec {
    /// Creates a packed source with no name or domain.
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            name: None,
            file: file.into(),
            domain: None,
        }
    }
}

/// A description of a ratings data source.
///
/// The set of storage kinds is closed; consumers match on the variant
/// rather than probing types at runtime.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type")]
pub enum DataSourceSpec {
    /// Delimited text.
    #[serde(rename = "text")]
    Text(TextDataSourceSpec),
    /// Packed binary.
    #[serde(rename = "pack")]
    Packed(PackedDataSourceSpec),
}

impl DataSourceSpec {
    /// Returns the source name, if one was configured.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Text(t) => t.name.as_deref(),
            Self::Packed(p) => p.name.as_deref(),
        }
    }

    /// Returns the preference domain, if known.
    pub fn domain(&self) -> Option<PreferenceDomain> {
        match self {
            Self::Text(t) => t.domain,
            Self::Packed(p) => p.domain,
        }
    }

    /// Returns the backing file path.
    pub fn file(&self) -> &Path {
        match self {
            Self::Text(t) => &t.file,
            Self::Packed(p) => &p.file,
        }
    }

    /// Returns the short kind tag (`"text"` or `"pack"`).
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Packed(_) => "pack",
        }
    }

    /// Returns `true` for packed binary sources.
    pub fn is_packed(&self) -> bool {
        matches!(self, Self::Packed(_))
    }

    /// Returns the field delimiter for text sources.
    pub fn delimiter(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(&t.delimiter),
            Self::Packed(_) => None,
        }
    }

    /// Returns a copy of this descriptor with its name replaced.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = Some(name.into());
        match &mut self {
            Self::Text(t) => t.name = name,
            Self::Packed(p) => p.name = name,
        }
        self
    }

    /// Loads a descriptor from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, DataSpecError> {
        let content = std::fs::read_to_string(path)?;
        let spec = Self::from_json(&content)?;
        tracing::debug!(
            "loaded {} source descriptor from '{}'",
            spec.kind(),
            path.display()
        );
        Ok(spec)
    }

    /// Parses a descriptor from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, DataSpecError> {
        let spec: Self = serde_json::from_str(json)?;
        Ok(spec)
    }

    /// Serialises the descriptor to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DataSpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates the descriptor.
    ///
    /// Checks:
    /// - The file path is non-empty.
    /// - Text sources have a non-empty delimiter.
    /// - The domain, if present, is valid.
    pub fn validate(&self) -> Result<(), DataSpecError> {
        let label = self
            .name()
            .map(str::to_string)
            .unwrap_or_else(|| self.file().display().to_string());

        if self.file().as_os_str().is_empty() {
            return Err(DataSpecError::InvalidSource {
                source_name: label,
                detail: "empty file path".into(),
            });
        }

        if let Self::Text(t) = self {
            if t.delimiter.is_empty() {
                return Err(DataSpecError::InvalidSource {
                    source_name: label,
                    detail: "empty delimiter".into(),
                });
            }
        }

        if let Some(domain) = self.domain() {
            domain.validate()?;
        }

        Ok(())
    }
}

impl From<TextDataSourceSpec> for DataSourceSpec {
    fn from(spec: TextDataSourceSpec) -> Self {
        Self::Text(spec)
    }
}

impl From<PackedDataSourceSpec> for DataSourceSpec {
    fn from(spec: PackedDataSourceSpec) -> Self {
        Self::Packed(spec)
    }
}
