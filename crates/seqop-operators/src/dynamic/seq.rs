use seqop_core::config::SeqConfig;
use seqop_core::error::Error;
use seqop_core::random::RandomSource;
use seqop_core::shape::TypeTag;

use super::func::DynFn;
use super::groups::DynGroups;
use super::guard;
use super::value::{DynData, Value};
use crate::shuffle;
use crate::sort::{self, adapter::SliceAdapter};
use crate::traits::OpError;

/// Sequence whose element type is only known at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct DynSeq {
    elem: TypeTag,
    values: Vec<Value>,
}

/// A validated function failed to accept its arguments.
fn broken(op: &'static str) -> OpError {
    OpError::Core(Error::Invariant(format!(
        "`{op}` function rejected arguments that passed shape validation"
    )))
}

impl DynSeq {
    pub fn from_vec<T: DynData>(items: Vec<T>) -> Self {
        Self {
            elem: TypeTag::of::<T>(),
            values: items.into_iter().map(Value::new).collect(),
        }
    }

    pub fn empty<T: DynData>() -> Self {
        Self::from_vec(Vec::<T>::new())
    }

    pub(crate) fn from_parts(elem: TypeTag, values: Vec<Value>) -> Self {
        Self { elem, values }
    }

    pub(crate) fn push_unchecked(&mut self, value: Value) {
        self.values.push(value);
    }

    pub fn elem_type(&self) -> TypeTag {
        self.elem
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    fn expect_elem<T: 'static>(&self) -> Result<(), OpError> {
        if !self.elem.is::<T>() {
            return Err(OpError::Downcast {
                expected: TypeTag::of::<T>(),
                found: self.elem,
            });
        }
        Ok(())
    }

    /// Clone the elements out as a typed `Vec`.
    pub fn to_vec<T: DynData + Clone>(&self) -> Result<Vec<T>, OpError> {
        self.expect_elem::<T>()?;
        self.values
            .iter()
            .map(|v| {
                v.downcast_ref::<T>().cloned().ok_or(OpError::Downcast {
                    expected: TypeTag::of::<T>(),
                    found: v.type_tag(),
                })
            })
            .collect()
    }

    pub fn into_vec<T: DynData>(self) -> Result<Vec<T>, OpError> {
        self.expect_elem::<T>()?;
        self.values.into_iter().map(Value::downcast::<T>).collect()
    }

    /// `f: fn(T) -> U`; returns a sequence of `U`.
    pub fn map(&self, f: &mut DynFn) -> Result<DynSeq, OpError> {
        guard("map", f.shape().check_unary(self.elem))?;

        let mut out = Vec::with_capacity(self.values.len());
        for v in &self.values {
            out.push(f.call(&[v]).ok_or_else(|| broken("map"))?);
        }
        Ok(DynSeq::from_parts(f.shape().ret(), out))
    }

    /// `pred: fn(T) -> bool`.
    pub fn select(&self, pred: &mut DynFn) -> Result<DynSeq, OpError> {
        guard("select", pred.shape().check_predicate(self.elem))?;

        let mut out = Vec::new();
        for v in &self.values {
            if pred.call_bool(&[v]).ok_or_else(|| broken("select"))? {
                out.push(v.clone());
            }
        }
        Ok(DynSeq::from_parts(self.elem, out))
    }

    pub fn any(&self, pred: &mut DynFn) -> Result<bool, OpError> {
        guard("any", pred.shape().check_predicate(self.elem))?;

        for v in &self.values {
            if pred.call_bool(&[v]).ok_or_else(|| broken("any"))? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    pub fn all(&self, pred: &mut DynFn) -> Result<bool, OpError> {
        guard("all", pred.shape().check_predicate(self.elem))?;

        for v in &self.values {
            if !pred.call_bool(&[v]).ok_or_else(|| broken("all"))? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// `f: fn(A, T) -> A` with `init: A`; strict left fold.
    pub fn inject(&self, init: Value, f: &mut DynFn) -> Result<Value, OpError> {
        guard("inject", f.shape().check_fold(init.type_tag(), self.elem))?;

        let mut acc = init;
        for v in &self.values {
            acc = f.call(&[&acc, v]).ok_or_else(|| broken("inject"))?;
        }
        Ok(acc)
    }

    /// `key: fn(T) -> K`. Keys compare with `K`'s `PartialEq`.
    pub fn group_by(&self, key: &mut DynFn) -> Result<DynGroups, OpError> {
        guard("group_by", key.shape().check_unary(self.elem))?;

        let mut groups = DynGroups::new(key.shape().ret(), self.elem);
        for v in &self.values {
            let k = key.call(&[v]).ok_or_else(|| broken("group_by"))?;
            groups.push(k, v.clone());
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(len = self.values.len(), groups = groups.len(), "group_by");
        Ok(groups)
    }

    pub fn copy(&self) -> DynSeq {
        self.clone()
    }

    /// `less: fn(T, T) -> bool`; unstable, in place.
    pub fn sort(&mut self, less: &mut DynFn) -> Result<&mut Self, OpError> {
        self.sort_with(&SeqConfig::default(), less)
    }

    pub fn sort_with(&mut self, cfg: &SeqConfig, less: &mut DynFn) -> Result<&mut Self, OpError> {
        guard("sort", less.shape().check_less(self.elem))?;

        #[cfg(feature = "tracing")]
        tracing::trace!(len = self.values.len(), elem = %self.elem, "sort");
        let mut adapter = SliceAdapter::new(self.values.as_mut_slice(), |a, b| {
            less.call_bool(&[a, b]).unwrap_or(false)
        });
        sort::unstable(&mut adapter, cfg);
        Ok(self)
    }

    /// `less: fn(T, T) -> bool`; stable, in place.
    pub fn stable_sort(&mut self, less: &mut DynFn) -> Result<&mut Self, OpError> {
        self.stable_sort_with(&SeqConfig::default(), less)
    }

    pub fn stable_sort_with(
        &mut self,
        cfg: &SeqConfig,
        less: &mut DynFn,
    ) -> Result<&mut Self, OpError> {
        guard("stable_sort", less.shape().check_less(self.elem))?;

        #[cfg(feature = "tracing")]
        tracing::trace!(len = self.values.len(), elem = %self.elem, "stable_sort");
        let mut adapter = SliceAdapter::new(self.values.as_mut_slice(), |a, b| {
            less.call_bool(&[a, b]).unwrap_or(false)
        });
        sort::stable(&mut adapter, cfg);
        Ok(self)
    }

    pub fn is_sorted(&self, less: &mut DynFn) -> Result<bool, OpError> {
        guard("is_sorted", less.shape().check_less(self.elem))?;

        for w in self.values.windows(2) {
            if less.call_bool(&[&w[1], &w[0]]).ok_or_else(|| broken("is_sorted"))? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub fn shuffle<R>(&mut self, rng: &mut R) -> &mut Self
    where
        R: RandomSource + ?Sized,
    {
        #[cfg(feature = "tracing")]
        tracing::trace!(len = self.values.len(), elem = %self.elem, "shuffle");
        shuffle::fisher_yates(self.values.as_mut_slice(), rng);
        self
    }
}

impl<T: DynData> From<Vec<T>> for DynSeq {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}
