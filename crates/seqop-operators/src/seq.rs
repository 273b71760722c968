//! Statically typed sequence operator.
//!
//! Every closure's argument and return types are fixed by the signature of
//! the method it is passed to, so a mis-shaped function is a compile error
//! and no runtime check is needed.
//!
//! Non-mutating operations (`map`, `select`, `copy`, `group_by`) allocate a
//! new sequence and leave `self` untouched. Mutating operations (`sort`,
//! `stable_sort`, `shuffle`) work in place and return `&mut Self` for
//! chaining; their `*ed` counterparts consume and return the operator for
//! owned pipelines.

use std::hash::Hash;

use seqop_core::config::SeqConfig;
use seqop_core::random::RandomSource;

use crate::group::GroupMap;
use crate::sort::{self, adapter::SliceAdapter};
use crate::shuffle;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeqOp<T> {
    items: Vec<T>,
}

impl<T> SeqOp<T> {
    /// Wrap `items`. Nothing is checked here.
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_inner(self) -> Vec<T> {
        self.items
    }

    /// Apply `f` to every element, in order.
    pub fn map<U, F>(&self, f: F) -> SeqOp<U>
    where
        F: FnMut(&T) -> U,
    {
        SeqOp::new(self.items.iter().map(f).collect())
    }

    /// Elements for which `pred` holds, in their original order.
    pub fn select<F>(&self, mut pred: F) -> SeqOp<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        SeqOp::new(self.items.iter().filter(|v| pred(*v)).cloned().collect())
    }

    /// Stops at the first element satisfying `pred`. False when empty.
    pub fn any<F>(&self, pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.items.iter().any(pred)
    }

    /// Stops at the first element failing `pred`. True when empty.
    pub fn all<F>(&self, pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.items.iter().all(pred)
    }

    /// Strict left fold starting from `init`.
    pub fn inject<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        let mut acc = init;
        for v in &self.items {
            acc = f(acc, v);
        }
        acc
    }

    pub fn group_by<K, F>(&self, mut key: F) -> GroupMap<K, T>
    where
        T: Clone,
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let mut groups = GroupMap::new();
        for v in &self.items {
            groups.push(key(v), v.clone());
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(len = self.items.len(), groups = groups.len(), "group_by");
        groups
    }

    /// New operator over freshly allocated storage holding equal elements.
    pub fn copy(&self) -> SeqOp<T>
    where
        T: Clone,
    {
        self.clone()
    }

    /// Unstable in-place sort by the strict "less than" `less`.
    pub fn sort<F>(&mut self, less: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.sort_with(&SeqConfig::default(), less)
    }

    pub fn sort_with<F>(&mut self, cfg: &SeqConfig, less: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        #[cfg(feature = "tracing")]
        tracing::trace!(len = self.items.len(), "sort");
        sort::unstable(&mut SliceAdapter::new(self.items.as_mut_slice(), less), cfg);
        self
    }

    /// Stable in-place sort: elements neither less than the other keep their
    /// original relative order.
    pub fn stable_sort<F>(&mut self, less: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.stable_sort_with(&SeqConfig::default(), less)
    }

    pub fn stable_sort_with<F>(&mut self, cfg: &SeqConfig, less: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        #[cfg(feature = "tracing")]
        tracing::trace!(len = self.items.len(), "stable_sort");
        sort::stable(&mut SliceAdapter::new(self.items.as_mut_slice(), less), cfg);
        self
    }

    pub fn sort_by_key<K, F>(&mut self, mut key: F) -> &mut Self
    where
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        self.sort(|a, b| key(a) < key(b))
    }

    pub fn stable_sort_by_key<K, F>(&mut self, mut key: F) -> &mut Self
    where
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        self.stable_sort(|a, b| key(a) < key(b))
    }

    pub fn is_sorted<F>(&self, mut less: F) -> bool
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.items.windows(2).all(|w| !less(&w[1], &w[0]))
    }

    /// Fisher–Yates shuffle in place.
    pub fn shuffle<R>(&mut self, rng: &mut R) -> &mut Self
    where
        R: RandomSource + ?Sized,
    {
        #[cfg(feature = "tracing")]
        tracing::trace!(len = self.items.len(), "shuffle");
        shuffle::fisher_yates(self.items.as_mut_slice(), rng);
        self
    }

    pub fn sorted<F>(mut self, less: F) -> Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.sort(less);
        self
    }

    pub fn stable_sorted<F>(mut self, less: F) -> Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.stable_sort(less);
        self
    }

    pub fn shuffled<R>(mut self, rng: &mut R) -> Self
    where
        R: RandomSource + ?Sized,
    {
        self.shuffle(rng);
        self
    }
}

impl<T> Default for SeqOp<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> From<Vec<T>> for SeqOp<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for SeqOp<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for SeqOp<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SeqOp<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> AsRef<[T]> for SeqOp<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}
