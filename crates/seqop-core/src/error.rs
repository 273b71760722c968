use thiserror::Error;

use crate::shape::ShapeError;

/// Canonical result for core.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Function shape error: {0}")]
    Shape(#[from] ShapeError),

    #[error("Internal invariant failed: {0}")]
    Invariant(String),
}
