//! # Multi-Column One-Hot Encoder
//!
//! The user-facing coordinator: [`OneHotEncoder`] owns the fitted
//! state and fans fit/transform/inverse-transform work out across
//! columns and row chunks.

pub mod one_hot_encoder;
pub mod options;

#[doc(inline)]
pub use one_hot_encoder::OneHotEncoder;
#[doc(inline)]
pub use options::{OneHotEncoderOptions, OutputFormat};
