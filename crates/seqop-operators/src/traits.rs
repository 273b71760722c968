//! Operator errors and the index-based primitives shared by sort and shuffle.
//!
//! The generic routines only ever address elements by index. A sequence
//! exposes its length and a value swap; an order adapter additionally answers
//! "is the element at `i` less than the one at `j`" with a caller comparator.

use seqop_core::shape::{ShapeError, TypeTag};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpError {
    /// A supplied function does not fit the operation. Raised before any
    /// element is processed.
    #[error("contract violation in `{op}`: {source}")]
    Contract {
        op: &'static str,
        source: ShapeError,
    },

    #[error("type mismatch: expected `{expected}`, found `{found}`")]
    Downcast { expected: TypeTag, found: TypeTag },

    #[error(transparent)]
    Core(#[from] seqop_core::Error),
}

impl OpError {
    pub fn is_contract(&self) -> bool {
        matches!(self, OpError::Contract { .. })
    }
}

/// Length plus value swap. Enough for shuffling.
pub trait Sequence {
    fn len(&self) -> usize;

    /// Exchange the values at `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A sequence that can also compare two of its positions.
///
/// `less` must describe a strict weak ordering for the sort routines to
/// produce sorted output; anything else only permutes the elements.
pub trait OrderAdapter: Sequence {
    fn less(&mut self, i: usize, j: usize) -> bool;
}

impl<T> Sequence for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn swap(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j)
    }
}
