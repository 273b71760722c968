//! Bridges a slice and a less-than comparator to the index-based primitives.

use crate::traits::{OrderAdapter, Sequence};

/// Borrowed slice plus comparator, addressed by index.
pub struct SliceAdapter<'a, T, F> {
    items: &'a mut [T],
    less: F,
}

impl<'a, T, F> SliceAdapter<'a, T, F>
where
    F: FnMut(&T, &T) -> bool,
{
    pub fn new(items: &'a mut [T], less: F) -> Self {
        Self { items, less }
    }
}

impl<T, F> Sequence for SliceAdapter<'_, T, F> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.items.swap(i, j)
    }
}

impl<T, F> OrderAdapter for SliceAdapter<'_, T, F>
where
    F: FnMut(&T, &T) -> bool,
{
    fn less(&mut self, i: usize, j: usize) -> bool {
        (self.less)(&self.items[i], &self.items[j])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_address_the_slice() {
        let mut items = vec![1, 2, 3];
        let mut adapter = SliceAdapter::new(&mut items, |a: &i32, b: &i32| a < b);
        assert_eq!(adapter.len(), 3);
        assert!(adapter.less(0, 1));
        adapter.swap(0, 1);
        assert!(!adapter.less(0, 1));
        assert_eq!(items, vec![2, 1, 3]);
    }
}
