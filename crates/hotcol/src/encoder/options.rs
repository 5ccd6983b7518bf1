//! # One-Hot Encoder Options

use core::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::encoders::UnknownPolicy;

/// The realization of the indicator output.
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
pub enum OutputFormat {
    /// Row-major dense `f64` buffer.
    #[default]
    Dense,

    /// `(row, column-offset, value)` triple lists.
    ///
    /// Preferred when vocabulary width times row count makes dense
    /// materialization memory-prohibitive.
    Sparse,
}

/// Options for configuring a [`crate::encoder::OneHotEncoder`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OneHotEncoderOptions {
    /// Behavior on unseen categories at transform time.
    pub unknown_policy: UnknownPolicy,

    /// Upper bound on distinct categories per column; `None` is
    /// unbounded.
    pub max_categories_per_column: Option<NonZeroUsize>,

    /// The output representation.
    pub output_format: OutputFormat,

    /// Exclude the missing-value token from vocabularies.
    pub drop_missing: bool,

    /// Worker pool size; `0` uses all available hardware parallelism,
    /// `1` runs everything on the calling thread.
    pub thread_count: usize,
}

impl Default for OneHotEncoderOptions {
    fn default() -> Self {
        Self {
            unknown_policy: UnknownPolicy::default(),
            max_categories_per_column: None,
            output_format: OutputFormat::default(),
            drop_missing: false,
            thread_count: 0,
        }
    }
}

impl OneHotEncoderOptions {
    /// Sets the configured unknown-category policy.
    pub fn with_unknown_policy(
        mut self,
        unknown_policy: UnknownPolicy,
    ) -> Self {
        self.unknown_policy = unknown_policy;
        self
    }

    /// Sets the configured per-column category limit.
    pub fn with_max_categories_per_column(
        mut self,
        max_categories_per_column: Option<NonZeroUsize>,
    ) -> Self {
        self.max_categories_per_column = max_categories_per_column;
        self
    }

    /// Sets the configured output representation.
    pub fn with_output_format(
        mut self,
        output_format: OutputFormat,
    ) -> Self {
        self.output_format = output_format;
        self
    }

    /// Sets the configured missing-marker handling.
    pub fn with_drop_missing(
        mut self,
        drop_missing: bool,
    ) -> Self {
        self.drop_missing = drop_missing;
        self
    }

    /// Sets the configured worker pool size.
    pub fn with_thread_count(
        mut self,
        thread_count: usize,
    ) -> Self {
        self.thread_count = thread_count;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = OneHotEncoderOptions::default();

        assert_eq!(options.unknown_policy, UnknownPolicy::Error);
        assert_eq!(options.max_categories_per_column, None);
        assert_eq!(options.output_format, OutputFormat::Dense);
        assert!(!options.drop_missing);
        assert_eq!(options.thread_count, 0);
    }

    #[test]
    fn test_builders() {
        let options = OneHotEncoderOptions::default()
            .with_unknown_policy(UnknownPolicy::InfrequentBucket)
            .with_max_categories_per_column(NonZeroUsize::new(100))
            .with_output_format(OutputFormat::Sparse)
            .with_drop_missing(true)
            .with_thread_count(2);

        assert_eq!(options.unknown_policy, UnknownPolicy::InfrequentBucket);
        assert_eq!(
            options.max_categories_per_column,
            NonZeroUsize::new(100)
        );
        assert_eq!(options.output_format, OutputFormat::Sparse);
        assert!(options.drop_missing);
        assert_eq!(options.thread_count, 2);
    }

    #[test]
    fn test_output_format_tags() {
        use core::str::FromStr;

        assert_eq!(OutputFormat::from_str("sparse").unwrap(), OutputFormat::Sparse);
        assert_eq!(OutputFormat::Dense.to_string(), "dense");
    }
}
