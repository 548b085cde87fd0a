// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Partition methods.
//!
//! Two closed sets of variants describe how a crossfold splits ratings:
//!
//! | Type | Chooses | Default |
//! |---|---|---|
//! | [`PartitionMethod`] | The top-level strategy (one per crossfold) | `PartitionUsers` |
//! | [`UserPartitionMethod`] | Which of a test user's ratings are held out | holdout 10, random |
//!
//! The variants carry parameters only. Interpretation belongs to the
//! split executor; the planner merely records and logs them.

use crate::PlanError;
use std::fmt;
use std::str::FromStr;

/// Ordering applied to a user's ratings before holding some out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoldoutOrder {
    /// Shuffle ratings.
    #[default]
    Random,
    /// Sort ratings by timestamp, holding out the most recent.
    Timestamp,
}

impl HoldoutOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for HoldoutOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HoldoutOrder {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "timestamp" | "time" => Ok(Self::Timestamp),
            other => Err(PlanError::ConfigError(format!(
                "unknown holdout order '{other}'; expected 'random' or 'timestamp'"
            ))),
        }
    }
}

/// Top-level crossfold strategy. Exactly one is active per crossfold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PartitionMethod {
    /// Split users into disjoint test groups, one per fold.
    #[default]
    PartitionUsers,
    /// Split individual ratings into disjoint test groups.
    PartitionRatings,
    /// Hold out a fixed number of items per user.
    Holdout { order: HoldoutOrder, count: usize },
    /// Hold out a sample of fixed absolute size.
    SampleSize { n: usize },
}

impl PartitionMethod {
    /// Short kebab-case name, matching the serialized tag.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PartitionUsers => "partition-users",
            Self::PartitionRatings => "partition-ratings",
            Self::Holdout { .. } => "holdout",
            Self::SampleSize { .. } => "sample-size",
        }
    }

    pub fn validate(&self) -> Result<(), PlanError> {
        match *self {
            Self::Holdout { count: 0, .. } => Err(PlanError::InvalidMethod {
                method: self.name().into(),
                detail: "holdout count must be at least 1".into(),
            }),
            Self::SampleSize { n: 0 } => Err(PlanError::InvalidMethod {
                method: self.name().into(),
                detail: "sample size must be at least 1".into(),
            }),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for PartitionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Holdout { order, count } => write!(f, "holdout({count}, {order})"),
            Self::SampleSize { n } => write!(f, "sample-size({n})"),
            other => f.write_str(other.name()),
        }
    }
}

/// How a test user's ratings are divided between train and test.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum UserPartitionMethod {
    /// Hold out `count` ratings per user.
    Holdout { order: HoldoutOrder, count: usize },
    /// Hold out a fraction of each user's ratings.
    HoldoutFraction { order: HoldoutOrder, fraction: f64 },
    /// Retain `count` ratings per user for training; test on the rest.
    Retain { order: HoldoutOrder, count: usize },
}

impl UserPartitionMethod {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Holdout { .. } => "holdout",
            Self::HoldoutFraction { .. } => "holdout-fraction",
            Self::Retain { .. } => "retain",
        }
    }

    pub fn order(&self) -> HoldoutOrder {
        match *self {
            Self::Holdout { order, .. }
            | Self::HoldoutFraction { order, .. }
            | Self::Retain { order, .. } => order,
        }
    }

    pub fn validate(&self) -> Result<(), PlanError> {
        match *self {
            Self::HoldoutFraction { fraction, .. } if !(fraction > 0.0 && fraction < 1.0) => {
                Err(PlanError::InvalidMethod {
                    method: self.name().into(),
                    detail: format!("fraction must be in (0, 1), got {fraction}"),
                })
            }
            _ => Ok(()),
        }
    }
}

impl Default for UserPartitionMethod {
    fn default() -> Self {
        Self::Holdout {
            order: HoldoutOrder::Random,
            count: 10,
        }
    }
}

impl fmt::Display for UserPartitionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Holdout { order, count } => write!(f, "holdout({count}, {order})"),
            Self::HoldoutFraction { order, fraction } => {
                write!(f, "holdout-fraction({fraction}, {order})")
            }
            Self::Retain { order, count } => write!(f, "retain({count}, {order})"),
        }
    }
}
