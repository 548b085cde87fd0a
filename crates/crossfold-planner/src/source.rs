// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Deferred data-source references.
//!
//! A crossfold can be configured before its input exists (for example, when
//! the source is produced by an earlier pipeline stage). [`DeferredSource`]
//! holds either nothing, a concrete descriptor, or a producer that yields
//! the descriptor on demand.
//!
//! The producer is called on **every** [`DeferredSource::get`]. Nothing is
//! cached, so a producer that re-reads a file observes changes to it.

use crate::error::{BoxError, PlanError};
use data_spec::DataSourceSpec;
use std::fmt;
use std::sync::Arc;

type Producer = Arc<dyn Fn() -> Result<Option<DataSourceSpec>, BoxError> + Send + Sync>;

/// A lazily-evaluated data-source reference.
#[derive(Clone, Default)]
pub enum DeferredSource {
    /// Nothing configured.
    #[default]
    Unset,
    /// A concrete, immediately available descriptor.
    Ready(DataSourceSpec),
    /// A producer invoked on each access.
    Deferred(Producer),
}

impl DeferredSource {
    /// Creates a reference backed by a producer.
    pub fn deferred<F>(producer: F) -> Self
    where
        F: Fn() -> Result<Option<DataSourceSpec>, BoxError> + Send + Sync + 'static,
    {
        Self::Deferred(Arc::new(producer))
    }

    /// Replaces the reference with a concrete descriptor.
    pub fn set(&mut self, source: DataSourceSpec) {
        *self = Self::Ready(source);
    }

    /// Replaces the reference with a producer.
    pub fn set_deferred<F>(&mut self, producer: F)
    where
        F: Fn() -> Result<Option<DataSourceSpec>, BoxError> + Send + Sync + 'static,
    {
        *self = Self::deferred(producer);
    }

    /// Returns `true` if a descriptor or producer has been configured.
    ///
    /// A configured producer may still yield nothing when resolved.
    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// Returns `true` if resolution goes through a producer.
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }

    /// Resolves the reference.
    ///
    /// Returns `Ok(None)` when unset or when the producer yields nothing.
    /// Producer failures are wrapped in [`PlanError::SourceResolution`] and
    /// not retried.
    pub fn get(&self) -> Result<Option<DataSourceSpec>, PlanError> {
        match self {
            Self::Unset => Ok(None),
            Self::Ready(source) => Ok(Some(source.clone())),
            Self::Deferred(producer) => {
                tracing::trace!("invoking deferred source producer");
                producer().map_err(|source| PlanError::SourceResolution { source })
            }
        }
    }
}

impl fmt::Debug for DeferredSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => f.write_str("Unset"),
            Self::Ready(source) => f.debug_tuple("Ready").field(source).finish(),
            Self::Deferred(_) => f.write_str("Deferred(<producer>)"),
        }
    }
}

impl From<DataSourceSpec> for DeferredSource {
    fn from(source: DataSourceSpec) -> Self {
        Self::Ready(source)
    }
}
