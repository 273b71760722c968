//! Convenient re-exports for downstream crates.

pub use crate::config::SeqConfig;
pub use crate::error::{Error, Result};
pub use crate::random::{RandomSource, Scripted};
pub use crate::shape::{FnShape, ShapeError, TypeTag};
