//! Type-erased operator.
//!
//! `DynSeq` stores its elements as `Value`s together with the element
//! `TypeTag`; functions arrive as `DynFn`s that carry their `FnShape`. Each
//! function-taking operation checks the shape against the element type first
//! and returns `OpError::Contract` on a mismatch, before any element is
//! visited. Nothing is ever coerced.

mod func;
mod groups;
mod seq;
mod value;

pub use func::DynFn;
pub use groups::DynGroups;
pub use seq::DynSeq;
pub use value::{DynData, Value};

use seqop_core::shape::ShapeError;

use crate::traits::OpError;

/// Map a failed shape check to a contract violation for `op`.
pub(crate) fn guard(op: &'static str, check: Result<(), ShapeError>) -> Result<(), OpError> {
    check.map_err(|source| {
        #[cfg(feature = "tracing")]
        tracing::debug!(op, error = %source, "rejected function shape");
        OpError::Contract { op, source }
    })
}
