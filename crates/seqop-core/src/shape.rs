//! Runtime descriptors of function signatures.
//!
//! The statically typed operator never needs these: the compiler checks every
//! closure against the element type. The type-erased operator records a
//! `FnShape` for each supplied function and checks it with the methods below
//! before it visits a single element.

use std::any::{type_name, TypeId};
use std::fmt;

use thiserror::Error;

/// Identity of a concrete type plus a readable name for diagnostics.
///
/// Equality is by `TypeId` only; the name is informational.
#[derive(Debug, Clone, Copy)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is<T: 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A supplied function does not have the shape an operation requires.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("number of arguments must be {expected}, found {found}")]
    Arity { expected: usize, found: usize },

    #[error("argument {index} must be `{expected}`, found `{found}`")]
    Param {
        index: usize,
        expected: TypeTag,
        found: TypeTag,
    },

    #[error("return value must be `{expected}`, found `{found}`")]
    Return { expected: TypeTag, found: TypeTag },

    #[error("initial accumulator is `{found}` but the step function folds into `{expected}`")]
    Accumulator { expected: TypeTag, found: TypeTag },
}

/// Parameter and return types of a function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FnShape {
    params: Vec<TypeTag>,
    ret: TypeTag,
}

impl FnShape {
    pub fn new(params: Vec<TypeTag>, ret: TypeTag) -> Self {
        Self { params, ret }
    }

    pub fn unary<A: 'static, R: 'static>() -> Self {
        Self::new(vec![TypeTag::of::<A>()], TypeTag::of::<R>())
    }

    pub fn binary<A: 'static, B: 'static, R: 'static>() -> Self {
        Self::new(vec![TypeTag::of::<A>(), TypeTag::of::<B>()], TypeTag::of::<R>())
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub fn params(&self) -> &[TypeTag] {
        &self.params
    }

    pub fn ret(&self) -> TypeTag {
        self.ret
    }

    pub fn expect_arity(&self, expected: usize) -> Result<(), ShapeError> {
        if self.arity() != expected {
            return Err(ShapeError::Arity {
                expected,
                found: self.arity(),
            });
        }
        Ok(())
    }

    pub fn expect_param(&self, index: usize, expected: TypeTag) -> Result<(), ShapeError> {
        // Callers check arity first; a missing parameter is still an arity error.
        let found = *self.params.get(index).ok_or(ShapeError::Arity {
            expected: index + 1,
            found: self.arity(),
        })?;
        if found != expected {
            return Err(ShapeError::Param {
                index,
                expected,
                found,
            });
        }
        Ok(())
    }

    pub fn expect_return(&self, expected: TypeTag) -> Result<(), ShapeError> {
        if self.ret != expected {
            return Err(ShapeError::Return {
                expected,
                found: self.ret,
            });
        }
        Ok(())
    }

    /// `fn(T) -> _` where the return type is free (map, group_by).
    pub fn check_unary(&self, elem: TypeTag) -> Result<(), ShapeError> {
        self.expect_arity(1)?;
        self.expect_param(0, elem)
    }

    /// `fn(T) -> bool` (select, any, all).
    pub fn check_predicate(&self, elem: TypeTag) -> Result<(), ShapeError> {
        self.check_unary(elem)?;
        self.expect_return(TypeTag::of::<bool>())
    }

    /// `fn(T2, T) -> T2` with `init: T2` (inject).
    pub fn check_fold(&self, init: TypeTag, elem: TypeTag) -> Result<(), ShapeError> {
        self.expect_arity(2)?;
        let acc = self.params[0];
        if init != acc {
            return Err(ShapeError::Accumulator {
                expected: acc,
                found: init,
            });
        }
        self.expect_return(acc)?;
        self.expect_param(1, elem)
    }

    /// `fn(T, T) -> bool` (sort, stable_sort).
    pub fn check_less(&self, elem: TypeTag) -> Result<(), ShapeError> {
        self.expect_arity(2)?;
        self.expect_param(0, elem)?;
        self.expect_param(1, elem)?;
        self.expect_return(TypeTag::of::<bool>())
    }
}

impl fmt::Display for FnShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        for (i, p) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{p}")?;
        }
        write!(f, ") -> {}", self.ret)
    }
}
