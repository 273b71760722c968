#![forbid(unsafe_code)]
//! seqop: map, select, inject, group, sort and shuffle over owned sequences.
//!
//! ```
//! use seqop::SeqOp;
//!
//! let evens = SeqOp::new((1..=10).collect::<Vec<i32>>()).select(|v| v % 2 == 0);
//! assert_eq!(evens.as_slice(), &[2, 4, 6, 8, 10]);
//! assert_eq!(evens.inject(0, |acc, v| acc + v), 30);
//! ```

pub use seqop_core;
pub use seqop_operators;

pub use seqop_core::prelude::*;
pub use seqop_operators::{
    DynData, DynFn, DynGroups, DynSeq, GroupMap, OpError, OrderAdapter, Sequence, SeqOp,
    SliceAdapter, Value,
};
