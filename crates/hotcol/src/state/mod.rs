//! # Fitted Encoder State
//!
//! One successful fit produces a [`FittedState`]: the ordered column
//! descriptors, their precomputed block offsets, and the total output
//! width. The state is immutable, shared read-only across worker
//! threads, and is the sole persistence surface of the crate (see
//! [`io`]).

pub mod column_spec;
pub mod fitted_state;
pub mod io;

#[doc(inline)]
pub use column_spec::ColumnSpec;
#[doc(inline)]
pub use fitted_state::FittedState;
