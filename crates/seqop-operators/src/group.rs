//! Insertion-ordered grouping result.

use std::borrow::Borrow;
use std::hash::Hash;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// Key -> elements sharing that key.
///
/// Keys iterate in first-seen order; each bucket keeps the original relative
/// order of its elements.
#[derive(Debug, Clone)]
pub struct GroupMap<K, T> {
    groups: IndexMap<K, Vec<T>>,
}

impl<K, T> Default for GroupMap<K, T> {
    fn default() -> Self {
        Self {
            groups: IndexMap::new(),
        }
    }
}

impl<K: Hash + Eq, T> GroupMap<K, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item` to the bucket of `key`, creating the bucket on first use.
    pub fn push(&mut self, key: K, item: T) {
        self.groups.entry(key).or_default().push(item);
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&[T]>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.groups.get(key).map(Vec::as_slice)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.groups.contains_key(key)
    }
}

impl<K, T> GroupMap<K, T> {
    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[T])> {
        self.groups.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn into_inner(self) -> IndexMap<K, Vec<T>> {
        self.groups
    }
}

impl<K: Hash + Eq, T: PartialEq> PartialEq for GroupMap<K, T> {
    /// Same keys in the same first-seen order, with equal buckets.
    fn eq(&self, other: &Self) -> bool {
        self.groups.len() == other.groups.len()
            && self
                .groups
                .iter()
                .zip(other.groups.iter())
                .all(|(a, b)| a == b)
    }
}

impl<K, T> IntoIterator for GroupMap<K, T> {
    type Item = (K, Vec<T>);
    type IntoIter = indexmap::map::IntoIter<K, Vec<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<K: Hash + Eq, T> FromIterator<(K, T)> for GroupMap<K, T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.push(k, v);
        }
        map
    }
}

impl<K: Serialize, T: Serialize> Serialize for GroupMap<K, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.groups.iter())
    }
}
