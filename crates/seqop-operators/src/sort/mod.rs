//! Generic comparison sorts over an `OrderAdapter`.
//!
//! `unstable` is an introsort (median-of-three quicksort, heapsort once the
//! depth budget runs out, insertion sort on short ranges). `stable` sorts
//! fixed-width blocks by insertion and merges them pairwise in place with
//! SymMerge; it performs O(n log n) comparisons and O(n log² n) swaps and
//! never allocates.

pub mod adapter;
mod stable;
mod unstable;

use seqop_core::config::SeqConfig;

use crate::traits::OrderAdapter;

/// Sort `data` without preserving the order of equal elements.
pub fn unstable<A: OrderAdapter + ?Sized>(data: &mut A, cfg: &SeqConfig) {
    unstable::sort(data, cfg.insertion_threshold.max(1));
}

/// Sort `data`, keeping equal elements in their original relative order.
pub fn stable<A: OrderAdapter + ?Sized>(data: &mut A, cfg: &SeqConfig) {
    stable::sort(data, cfg.stable_block_size.max(1));
}

/// True if no element is less than its predecessor.
pub fn is_sorted<A: OrderAdapter + ?Sized>(data: &mut A) -> bool {
    let n = data.len();
    for i in (1..n).rev() {
        if data.less(i, i - 1) {
            return false;
        }
    }
    true
}

/// Insertion-sort `data[a..b]`. Stable.
pub(crate) fn insertion_sort<A: OrderAdapter + ?Sized>(data: &mut A, a: usize, b: usize) {
    for i in a + 1..b {
        let mut j = i;
        while j > a && data.less(j, j - 1) {
            data.swap(j, j - 1);
            j -= 1;
        }
    }
}
