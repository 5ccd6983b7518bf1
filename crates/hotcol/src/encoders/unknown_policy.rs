//! # Unknown-Category Policy

use serde::{Deserialize, Serialize};

/// Behavior on a value absent from a fitted vocabulary at transform time.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::EnumIter,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[non_exhaustive]
pub enum UnknownPolicy {
    /// Fail with [`crate::errors::HotcolError::UnknownCategory`],
    /// reporting the offending value and row position.
    #[default]
    Error,

    /// Emit an all-zero row for that column's block.
    IgnoreZeroRow,

    /// Emit the reserved "other" index.
    ///
    /// Fitting under this policy reserves one extra index past the
    /// vocabulary for each column; the policy is invalid against a
    /// state fitted without that reservation.
    InfrequentBucket,
}
