// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Output formats and their mapping to descriptor kinds.
//!
//! | Format | Extension | Descriptor |
//! |---|---|---|
//! | `Csv` | `csv` | text, `,` |
//! | `CsvGzip` | `csv.gz` | text, `,` |
//! | `CsvXz` | `csv.xz` | text, `,` |
//! | `Pack` | `pack` | packed binary |
//!
//! Compression is carried by the extension alone; text descriptors always
//! use `,` as delimiter.

use crate::PlanError;
use data_spec::DEFAULT_DELIMITER;
use std::fmt;
use std::str::FromStr;

/// The file format a crossfold writes its partitions in.
///
/// Serialises as its extension; deserialises through [`FromStr`], so
/// configuration files accept the same names as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String")]
pub enum OutputFormat {
    #[default]
    #[serde(rename = "csv")]
    Csv,
    #[serde(rename = "csv.gz")]
    CsvGzip,
    #[serde(rename = "csv.xz")]
    CsvXz,
    #[serde(rename = "pack")]
    Pack,
}

impl OutputFormat {
    /// All formats, in declaration order.
    pub const ALL: [OutputFormat; 4] = [Self::Csv, Self::CsvGzip, Self::CsvXz, Self::Pack];

    /// File extension, without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::CsvGzip => "csv.gz",
            Self::CsvXz => "csv.xz",
            Self::Pack => "pack",
        }
    }

    pub fn is_packed(&self) -> bool {
        matches!(self, Self::Pack)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = PlanError;

    /// Parses a format name loosely (case-insensitive, common aliases).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" | "text" => Ok(Self::Csv),
            "csv.gz" | "csv_gzip" | "gzip" | "gz" => Ok(Self::CsvGzip),
            "csv.xz" | "csv_xz" | "xz" => Ok(Self::CsvXz),
            "pack" | "packed" => Ok(Self::Pack),
            _ => Err(PlanError::UnknownFormat(s.to_string())),
        }
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = PlanError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// The descriptor variant a format produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorKind {
    /// Packed binary descriptor.
    Packed,
    /// Delimited-text descriptor.
    Text { delimiter: &'static str },
}

/// Result of [`resolve`]: extension plus descriptor kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedFormat {
    pub extension: &'static str,
    pub kind: DescriptorKind,
}

impl ResolvedFormat {
    pub fn is_packed(&self) -> bool {
        matches!(self.kind, DescriptorKind::Packed)
    }
}

/// Maps an output format to its extension and descriptor kind.
pub fn resolve(format: OutputFormat) -> ResolvedFormat {
    let kind = match format {
        OutputFormat::Pack => DescriptorKind::Packed,
        OutputFormat::Csv | OutputFormat::CsvGzip | OutputFormat::CsvXz => DescriptorKind::Text {
            delimiter: DEFAULT_DELIMITER,
        },
    };
    ResolvedFormat {
        extension: format.extension(),
        kind,
    }
}
