//! Introsort.

use super::insertion_sort;
use crate::traits::OrderAdapter;

pub(super) fn sort<A: OrderAdapter + ?Sized>(data: &mut A, threshold: usize) {
    let n = data.len();
    if n < 2 {
        return;
    }
    // 2 * ceil(log2(n + 1))
    let max_depth = 2 * (usize::BITS - n.leading_zeros()) as usize;
    quick_sort(data, 0, n, max_depth, threshold);
}

fn quick_sort<A: OrderAdapter + ?Sized>(
    data: &mut A,
    mut lo: usize,
    mut hi: usize,
    mut depth: usize,
    threshold: usize,
) {
    while hi - lo > threshold.max(2) {
        if depth == 0 {
            heap_sort(data, lo, hi);
            return;
        }
        depth -= 1;
        let p = partition(data, lo, hi);
        // Recurse into the smaller side, loop on the larger one.
        if p - lo < hi - (p + 1) {
            quick_sort(data, lo, p, depth, threshold);
            lo = p + 1;
        } else {
            quick_sort(data, p + 1, hi, depth, threshold);
            hi = p;
        }
    }
    if hi - lo > 1 {
        insertion_sort(data, lo, hi);
    }
}

/// Orders positions so that `data[m0] <= data[m1] <= data[m2]`.
fn median_of_three<A: OrderAdapter + ?Sized>(data: &mut A, m1: usize, m0: usize, m2: usize) {
    if data.less(m1, m0) {
        data.swap(m1, m0);
    }
    if data.less(m2, m1) {
        data.swap(m2, m1);
        if data.less(m1, m0) {
            data.swap(m1, m0);
        }
    }
}

/// Hoare partition of `data[lo..hi]` around the median of its ends and middle.
/// Returns the pivot's final position; `hi - lo >= 3`.
fn partition<A: OrderAdapter + ?Sized>(data: &mut A, lo: usize, hi: usize) -> usize {
    let mid = lo + (hi - lo) / 2;
    median_of_three(data, lo, mid, hi - 1);

    // Pivot sits at `lo`.
    let mut i = lo + 1;
    let mut j = hi - 1;
    loop {
        while i <= j && data.less(i, lo) {
            i += 1;
        }
        while i <= j && data.less(lo, j) {
            j -= 1;
        }
        if i >= j {
            break;
        }
        data.swap(i, j);
        i += 1;
        j -= 1;
    }
    data.swap(lo, j);
    j
}

fn sift_down<A: OrderAdapter + ?Sized>(data: &mut A, lo: usize, hi: usize, first: usize) {
    let mut root = lo;
    loop {
        let mut child = 2 * root + 1;
        if child >= hi {
            return;
        }
        if child + 1 < hi && data.less(first + child, first + child + 1) {
            child += 1;
        }
        if !data.less(first + root, first + child) {
            return;
        }
        data.swap(first + root, first + child);
        root = child;
    }
}

fn heap_sort<A: OrderAdapter + ?Sized>(data: &mut A, a: usize, b: usize) {
    let first = a;
    let hi = b - a;
    if hi < 2 {
        return;
    }

    for i in (0..=(hi - 1) / 2).rev() {
        sift_down(data, i, hi, first);
    }

    for i in (1..hi).rev() {
        data.swap(first, first + i);
        sift_down(data, 0, i, first);
    }
}
