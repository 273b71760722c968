use std::fmt;

use seqop_core::shape::FnShape;

use super::value::{DynData, Value};

type Invoke = Box<dyn FnMut(&[&Value]) -> Option<Value>>;

/// A function with a recorded shape.
///
/// Built from a typed closure; the closure's parameter and return types become
/// the `FnShape` that operations validate against.
pub struct DynFn {
    shape: FnShape,
    invoke: Invoke,
}

impl DynFn {
    pub fn unary<A, R, F>(mut f: F) -> Self
    where
        A: 'static,
        R: DynData,
        F: FnMut(&A) -> R + 'static,
    {
        Self {
            shape: FnShape::unary::<A, R>(),
            invoke: Box::new(move |args: &[&Value]| match args {
                [a] => Some(Value::new(f(a.downcast_ref::<A>()?))),
                _ => None,
            }),
        }
    }

    pub fn binary<A, B, R, F>(mut f: F) -> Self
    where
        A: 'static,
        B: 'static,
        R: DynData,
        F: FnMut(&A, &B) -> R + 'static,
    {
        Self {
            shape: FnShape::binary::<A, B, R>(),
            invoke: Box::new(move |args: &[&Value]| match args {
                [a, b] => Some(Value::new(f(
                    a.downcast_ref::<A>()?,
                    b.downcast_ref::<B>()?,
                ))),
                _ => None,
            }),
        }
    }

    pub fn shape(&self) -> &FnShape {
        &self.shape
    }

    /// Invoke with erased arguments. `None` when the arguments do not match the
    /// shape, which a validated caller never hits.
    pub(crate) fn call(&mut self, args: &[&Value]) -> Option<Value> {
        (self.invoke)(args)
    }

    pub(crate) fn call_bool(&mut self, args: &[&Value]) -> Option<bool> {
        self.call(args)
            .and_then(|v| v.downcast_ref::<bool>().copied())
    }
}

impl fmt::Debug for DynFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynFn").field("shape", &self.shape).finish()
    }
}
