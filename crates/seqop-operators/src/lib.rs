#![forbid(unsafe_code)]
//! seqop-operators: higher-order operators over owned sequences.
//!
//! Design intent:
//! - `SeqOp<T>` is the statically typed operator; closures are checked by the
//!   compiler against the element type.
//! - `DynSeq` is the type-erased operator; every supplied `DynFn` is checked
//!   against the element type before a single element is visited.
//! - Both flavours sort and shuffle through the same index-based primitives
//!   (`Sequence`, `OrderAdapter`), so the generic routines in `sort` and
//!   `shuffle` never see the element type.

pub mod traits;

pub mod dynamic;
pub mod group;
pub mod seq;
pub mod shuffle;
pub mod sort;

pub use dynamic::{DynData, DynFn, DynGroups, DynSeq, Value};
pub use group::GroupMap;
pub use seq::SeqOp;
pub use sort::adapter::SliceAdapter;
pub use traits::{OpError, OrderAdapter, Sequence};
