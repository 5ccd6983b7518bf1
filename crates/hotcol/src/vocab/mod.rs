//! # Vocabulary
//!
//! This module provides the per-column category vocabulary and its builder.
//!
//! A [`Vocabulary`] is an ordered, bidirectional mapping between a
//! [`crate::category::CategoryToken`] and a dense integer index. It is
//! built once per column during fit, by [`VocabBuilder`], and is immutable
//! afterwards.

pub mod vocab_builder;
pub mod vocabulary;

#[doc(inline)]
pub use vocab_builder::VocabBuilder;
#[doc(inline)]
pub use vocabulary::Vocabulary;
