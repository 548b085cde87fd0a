// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for data-source and dataset descriptors.

/// Errors that can occur when reading or validating descriptors.
#[derive(Debug, thiserror::Error)]
pub enum DataSpecError {
    /// A descriptor or manifest file could not be read.
    #[error("failed to read descriptor: {0}")]
    ReadError(#[from] std::io::Error),

    /// The descriptor JSON is malformed.
    #[error("failed to parse descriptor: {0}")]
    ParseError(#[from] serde_json::Error),

    /// A preference domain is inconsistent (e.g., minimum above maximum).
    #[error("invalid preference domain: {0}")]
    InvalidDomain(String),

    /// A data-source descriptor is unusable.
    #[error("invalid data source '{source_name}': {detail}")]
    InvalidSource { source_name: String, detail: String },

    /// A partition manifest is internally inconsistent.
    #[error("invalid partition manifest: {0}")]
    InvalidManifest(String),
}
