// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Preference domains: the range and granularity of rating values.

use crate::DataSpecError;
use std::fmt;

/// The range of valid preference values in a data source.
///
/// A domain of `[1.0, 5.0]` with precision `1.0` describes classic
/// five-star integer ratings; a missing precision means ratings are
/// continuous within the range.
///
/// # Examples
/// ```
/// use data_spec::PreferenceDomain;
///
/// let d = PreferenceDomain::new(1.0, 5.0).with_precision(0.5);
/// assert!(d.validate().is_ok());
/// assert_eq!(d.to_string(), "[1, 5]/0.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PreferenceDomain {
    /// Smallest admissible preference value.
    pub minimum: f64,
    /// Largest admissible preference value.
    pub maximum: f64,
    /// Step between admissible values, if ratings are discrete.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<f64>,
}

impl PreferenceDomain {
    /// Creates a continuous domain over `[minimum, maximum]`.
    pub fn new(minimum: f64, maximum: f64) -> Self {
        Self {
            minimum,
            maximum,
            precision: None,
        }
    }

    /// Returns a copy of this domain with a discrete step size.
    pub fn with_precision(mut self, precision: f64) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Checks that bounds are finite and ordered and that the precision,
    /// if any, is strictly positive.
    pub fn validate(&self) -> Result<(), DataSpecError> {
        if !self.minimum.is_finite() || !self.maximum.is_finite() {
            return Err(DataSpecError::InvalidDomain(format!(
                "bounds must be finite, got [{}, {}]",
                self.minimum, self.maximum
            )));
        }
        if self.minimum > self.maximum {
            return Err(DataSpecError::InvalidDomain(format!(
                "minimum {} exceeds maximum {}",
                self.minimum, self.maximum
            )));
        }
        if let Some(p) = self.precision {
            if !(p > 0.0 && p.is_finite()) {
                return Err(DataSpecError::InvalidDomain(format!(
                    "precision must be positive, got {p}"
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for PreferenceDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.minimum, self.maximum)?;
        if let Some(p) = self.precision {
            write!(f, "/{p}")?;
        }
        Ok(())
    }
}
