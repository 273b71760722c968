use std::hash::Hash;

use seqop_core::shape::TypeTag;

use super::seq::DynSeq;
use super::value::{DynData, Value};
use crate::group::GroupMap;
use crate::traits::OpError;

/// Erased grouping result: keys in first-seen order, each with the elements
/// that produced it in their original order.
///
/// Keys only need equality, so lookup is a linear scan over the groups.
#[derive(Debug, Clone, PartialEq)]
pub struct DynGroups {
    key_type: TypeTag,
    elem: TypeTag,
    groups: Vec<(Value, DynSeq)>,
}

impl DynGroups {
    pub(crate) fn new(key_type: TypeTag, elem: TypeTag) -> Self {
        Self {
            key_type,
            elem,
            groups: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, key: Value, item: Value) {
        match self.groups.iter().position(|(k, _)| *k == key) {
            Some(i) => self.groups[i].1.push_unchecked(item),
            None => {
                let bucket = DynSeq::from_parts(self.elem, vec![item]);
                self.groups.push((key, bucket));
            }
        }
    }

    pub fn key_type(&self) -> TypeTag {
        self.key_type
    }

    pub fn elem_type(&self) -> TypeTag {
        self.elem
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.groups.iter().map(|(k, _)| k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &DynSeq)> {
        self.groups.iter().map(|(k, s)| (k, s))
    }

    pub fn get(&self, key: &Value) -> Option<&DynSeq> {
        self.groups.iter().find(|(k, _)| k == key).map(|(_, s)| s)
    }

    /// Lookup by a typed key.
    pub fn get_by<K: DynData + PartialEq>(&self, key: &K) -> Option<&DynSeq> {
        self.groups
            .iter()
            .find(|(k, _)| k.downcast_ref::<K>() == Some(key))
            .map(|(_, s)| s)
    }

    /// Convert into a typed `GroupMap`, keeping key order.
    pub fn into_typed<K, T>(self) -> Result<GroupMap<K, T>, OpError>
    where
        K: DynData + Clone + Eq + Hash,
        T: DynData,
    {
        if !self.key_type.is::<K>() {
            return Err(OpError::Downcast {
                expected: TypeTag::of::<K>(),
                found: self.key_type,
            });
        }

        let mut out = GroupMap::new();
        for (k, bucket) in self.groups {
            let key = k.downcast::<K>()?;
            for item in bucket.into_vec::<T>()? {
                out.push(key.clone(), item);
            }
        }
        Ok(out)
    }
}
