use std::any::Any;
use std::fmt;

use seqop_core::shape::TypeTag;

use crate::traits::OpError;

/// What an element of a `DynSeq` must support: downcasting, cloning,
/// equality and debug output, all object-safe.
pub trait DynData: Any + fmt::Debug {
    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    fn clone_boxed(&self) -> Box<dyn DynData>;

    /// False when `other` has a different concrete type.
    fn eq_dyn(&self, other: &dyn DynData) -> bool;

    fn type_tag(&self) -> TypeTag;
}

impl<T> DynData for T
where
    T: Any + fmt::Debug + Clone + PartialEq,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn clone_boxed(&self) -> Box<dyn DynData> {
        Box::new(self.clone())
    }

    fn eq_dyn(&self, other: &dyn DynData) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn type_tag(&self) -> TypeTag {
        TypeTag::of::<T>()
    }
}

/// A single erased element or function result.
pub struct Value(Box<dyn DynData>);

impl Value {
    pub fn new<T: DynData>(value: T) -> Self {
        Self(Box::new(value))
    }

    pub fn type_tag(&self) -> TypeTag {
        self.0.type_tag()
    }

    pub fn is<T: 'static>(&self) -> bool {
        self.0.as_any().is::<T>()
    }

    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    pub fn downcast<T: 'static>(self) -> Result<T, OpError> {
        let found = self.type_tag();
        self.0
            .into_any()
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|_| OpError::Downcast {
                expected: TypeTag::of::<T>(),
                found,
            })
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        Self(self.0.clone_boxed())
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_dyn(&*other.0)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}
