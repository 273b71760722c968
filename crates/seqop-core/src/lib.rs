#![forbid(unsafe_code)]
//! seqop-core: the pieces every operator flavour shares.
//!
//! - `shape`: runtime descriptors of function signatures (`TypeTag`, `FnShape`)
//!   and the `ShapeError` raised when a supplied function does not fit.
//! - `random`: the uniform integer source consumed by shuffle.
//! - `config`: serializable tuning knobs (seed, sort thresholds).
//!
//! Keep this crate free of operator logic.

pub mod config;
pub mod error;
pub mod prelude;
pub mod random;
pub mod shape;

pub use error::{Error, Result};
