//! # `hotcol` One-Hot Encoding Engine
//!
//! This is a high-performance categorical feature encoder.
//!
//! `hotcol` converts columns of categorical values (text, integers, or
//! missing markers) into one-hot indicator matrices, and back. It keeps
//! the fit / transform / inverse-transform contract of standard tabular-ML
//! encoders while staying allocation-conscious at scale: millions of rows,
//! thousands of categories per column.
//!
//! See:
//! * [`encoder`] for the multi-column [`OneHotEncoder`] coordinator.
//! * [`vocab`] for per-column vocabularies and their builder.
//! * [`encoders`] / [`decoders`] for the single-column components.
//! * [`state`] for the fitted state and its persistence.
//! * [`matrix`] for the dense and sparse output buffers.
//!
//! ```rust
//! use hotcol::{OneHotEncoder, OneHotEncoderOptions, Table};
//!
//! let table = Table::from_columns(vec![
//!     ("color", vec!["red".into(), "blue".into(), "red".into()]),
//! ])?;
//!
//! let mut encoder: OneHotEncoder<u32> =
//!     OneHotEncoder::new(OneHotEncoderOptions::default());
//!
//! let matrix = encoder.fit_transform(&table)?;
//! assert_eq!(matrix.shape(), (3, 2));
//!
//! let decoded = encoder.inverse_transform(&matrix)?;
//! assert_eq!(decoded, table);
//! # Ok::<(), hotcol::HotcolError>(())
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

pub mod category;
pub mod decoders;
pub mod encoder;
pub mod encoders;
pub mod errors;
pub mod matrix;
pub mod state;
pub mod table;
pub mod threads;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use category::CategoryToken;
#[doc(inline)]
pub use encoder::{OneHotEncoder, OneHotEncoderOptions, OutputFormat};
#[doc(inline)]
pub use encoders::UnknownPolicy;
#[doc(inline)]
pub use errors::{HCResult, HotcolError};
#[doc(inline)]
pub use matrix::{DenseMatrix, IndicatorMatrix, SparseTriplets};
#[doc(inline)]
pub use state::FittedState;
#[doc(inline)]
pub use table::Table;
#[doc(inline)]
pub use types::IndexType;
#[doc(inline)]
pub use vocab::{VocabBuilder, Vocabulary};
