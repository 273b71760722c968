//! Block insertion sort followed by in-place SymMerge passes.
//!
//! SymMerge: Pok-Son Kim and Arne Kutzner, "Stable Minimum Storage Merging by
//! Symmetric Comparisons", ESA 2004.

use super::insertion_sort;
use crate::traits::OrderAdapter;

pub(super) fn sort<A: OrderAdapter + ?Sized>(data: &mut A, block: usize) {
    let n = data.len();
    let mut block = block;

    let (mut a, mut b) = (0, block);
    while b <= n {
        insertion_sort(data, a, b);
        a = b;
        b += block;
    }
    insertion_sort(data, a, n);

    while block < n {
        let (mut a, mut b) = (0, 2 * block);
        while b <= n {
            sym_merge(data, a, a + block, b);
            a = b;
            b += 2 * block;
        }
        let m = a + block;
        if m < n {
            sym_merge(data, a, m, n);
        }
        block *= 2;
    }
}

/// Merge the sorted runs `data[a..m]` and `data[m..b]`. Requires `a < m < b`.
fn sym_merge<A: OrderAdapter + ?Sized>(data: &mut A, a: usize, m: usize, b: usize) {
    // Single element on the left: binary-search its slot and bubble it there.
    if m - a == 1 {
        let (mut i, mut j) = (m, b);
        while i < j {
            let h = i + (j - i) / 2;
            if data.less(h, a) {
                i = h + 1;
            } else {
                j = h;
            }
        }
        for k in a..i - 1 {
            data.swap(k, k + 1);
        }
        return;
    }

    // Single element on the right.
    if b - m == 1 {
        let (mut i, mut j) = (a, m);
        while i < j {
            let h = i + (j - i) / 2;
            if !data.less(m, h) {
                i = h + 1;
            } else {
                j = h;
            }
        }
        for k in (i + 1..=m).rev() {
            data.swap(k, k - 1);
        }
        return;
    }

    let mid = a + (b - a) / 2;
    let n = mid + m;
    let (mut start, mut r) = if m > mid { (n - b, mid) } else { (a, m) };
    let p = n - 1;

    while start < r {
        let c = start + (r - start) / 2;
        if !data.less(p - c, c) {
            start = c + 1;
        } else {
            r = c;
        }
    }

    let end = n - start;
    if start < m && m < end {
        rotate(data, start, m, end);
    }
    if a < start && start < mid {
        sym_merge(data, a, start, mid);
    }
    if mid < end && end < b {
        sym_merge(data, mid, end, b);
    }
}

/// Swap `data[a..a + n]` with `data[b..b + n]`.
fn swap_range<A: OrderAdapter + ?Sized>(data: &mut A, a: usize, b: usize, n: usize) {
    for i in 0..n {
        data.swap(a + i, b + i);
    }
}

/// Exchange the blocks `data[a..m]` and `data[m..b]` using swaps only.
fn rotate<A: OrderAdapter + ?Sized>(data: &mut A, a: usize, m: usize, b: usize) {
    let mut i = m - a;
    let mut j = b - m;

    while i != j {
        if i > j {
            swap_range(data, m - i, m, j);
            i -= j;
        } else {
            swap_range(data, m - i, m + j - i, i);
            j -= i;
        }
    }
    swap_range(data, m - i, m, i);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::adapter::SliceAdapter;

    #[test]
    fn rotate_exchanges_blocks() {
        let mut items = vec![1, 2, 3, 4, 5, 6, 7];
        let mut adapter = SliceAdapter::new(&mut items, |a: &i32, b: &i32| a < b);
        rotate(&mut adapter, 0, 2, 7);
        assert_eq!(items, vec![3, 4, 5, 6, 7, 1, 2]);
    }

    #[test]
    fn sym_merge_keeps_left_run_first_on_ties() {
        // (key, tag): left run tagged 0, right run tagged 1.
        let mut items = vec![(1, 0), (3, 0), (3, 0), (2, 1), (3, 1), (4, 1)];
        let mut adapter =
            SliceAdapter::new(&mut items, |a: &(i32, i32), b: &(i32, i32)| a.0 < b.0);
        sym_merge(&mut adapter, 0, 3, 6);
        assert_eq!(items, vec![(1, 0), (2, 1), (3, 0), (3, 0), (3, 1), (4, 1)]);
    }
}
