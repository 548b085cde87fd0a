// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for crossfold planning.

/// Boxed error returned by deferred source producers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while configuring or planning a crossfold.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// No output directory was configured before plan generation.
    #[error("no output directory specified")]
    MissingOutputDir,

    /// The data source is unset or its producer yielded nothing.
    #[error("no data source specified")]
    MissingSource,

    /// Neither an explicit name nor a named source is available.
    #[error("crossfold has no name and its source is unnamed")]
    UnresolvedName,

    /// A deferred source producer failed.
    #[error("failed to resolve deferred data source: {source}")]
    SourceResolution {
        #[source]
        source: BoxError,
    },

    /// A partition method carries out-of-range parameters.
    #[error("invalid partition method '{method}': {detail}")]
    InvalidMethod { method: String, detail: String },

    /// An output format name was not recognised.
    #[error("unknown output format '{0}'; expected 'csv', 'csv.gz', 'csv.xz', or 'pack'")]
    UnknownFormat(String),

    /// A generated plan violates its own layout invariants.
    #[error("invalid crossfold plan: {0}")]
    InvalidPlan(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// A descriptor error from `data-spec`.
    #[error("descriptor error: {0}")]
    DataSpec(#[from] data_spec::DataSpecError),
}

impl PlanError {
    /// Returns `true` for errors caused by missing or inconsistent settings,
    /// as opposed to failures raised while resolving the source.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingOutputDir
                | Self::MissingSource
                | Self::UnresolvedName
                | Self::InvalidMethod { .. }
                | Self::UnknownFormat(_)
                | Self::ConfigError(_)
        )
    }
}
