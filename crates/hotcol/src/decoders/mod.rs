//! # Column Decoders
//!
//! One [`ColumnDecoder`] exists per fitted column during inverse
//! transform. It scans the column's block range of an indicator matrix
//! and recovers tokens through the vocabulary's inverse mapping.

pub mod column_decoder;

#[doc(inline)]
pub use column_decoder::ColumnDecoder;
