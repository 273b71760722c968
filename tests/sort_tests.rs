//! Sorting through the order adapter: unstable, stable, and custom adapters.


use seqop_core::config::SeqConfig;
use seqop_operators::sort;
use seqop_operators::{OrderAdapter, SeqOp, Sequence, SliceAdapter};
use test_data_gen::{indices_ascend_within_keys, keyed_pairs, one_to_ten};

fn ascending(a: &i32, b: &i32) -> bool {
    a < b
}

#[test]
fn test_sort() {
    let src = SeqOp::new(vec![1, 2, 3, 4, 5, 10, 9, 8, 7, 6]);
    let actual = src.copy().sorted(ascending);
    assert_eq!(actual.into_inner(), one_to_ten());
    // The source was copied first, so it keeps its order.
    assert_eq!(src.as_slice(), &[1, 2, 3, 4, 5, 10, 9, 8, 7, 6]);
}

#[test]
fn test_sort_in_place_descending() {
    let mut op = SeqOp::new(one_to_ten());
    op.sort(|a, b| a > b);
    assert_eq!(op.as_slice(), &[10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
    assert!(op.is_sorted(|a, b| a > b));
    assert!(!op.is_sorted(ascending));
}

#[test]
fn test_sort_empty_and_single() {
    let mut empty = SeqOp::<i32>::default();
    empty.sort(ascending).stable_sort(ascending);
    assert!(empty.is_empty());

    let mut one = SeqOp::new(vec![42]);
    one.sort(ascending).stable_sort(ascending);
    assert_eq!(one.as_slice(), &[42]);
}

#[test]
fn test_sort_many_duplicates() {
    let mut values: Vec<i32> = (0..500).map(|i| (i * 7919) % 5).collect();
    let mut op = SeqOp::new(values.clone());
    op.sort(ascending);
    values.sort();
    assert_eq!(op.into_inner(), values);
}

#[test]
fn test_sort_large_reverse_input() {
    let mut op: SeqOp<i32> = (0..2_000).rev().collect();
    op.sort(ascending);
    assert_eq!(op.into_inner(), (0..2_000).collect::<Vec<_>>());
}

#[test]
fn test_sort_by_key() {
    let mut words = SeqOp::new(vec!["ccc", "a", "bb", "dddd"]);
    words.sort_by_key(|w| w.len());
    assert_eq!(words.as_slice(), &["a", "bb", "ccc", "dddd"]);
}

#[test]
fn test_stable_sort_keeps_equal_keys_in_input_order() {
    let pairs = keyed_pairs(300, 7);
    let mut op = SeqOp::new(pairs);
    op.stable_sort(|a, b| a.0 < b.0);

    assert!(op.is_sorted(|a, b| a.0 < b.0));
    assert!(indices_ascend_within_keys(op.as_slice()));
    assert_eq!(op.len(), 300);
}

#[test]
fn test_stable_sort_by_key() {
    let mut people = SeqOp::new(vec![("bob", 30), ("amy", 25), ("cat", 30), ("dan", 25)]);
    people.stable_sort_by_key(|p| p.1);
    assert_eq!(
        people.as_slice(),
        &[("amy", 25), ("dan", 25), ("bob", 30), ("cat", 30)]
    );
}

#[test]
fn test_stable_sort_with_tiny_blocks() {
    let cfg = SeqConfig {
        stable_block_size: 1,
        ..SeqConfig::default()
    };
    let mut op = SeqOp::new(keyed_pairs(257, 4));
    op.stable_sort_with(&cfg, |a, b| a.0 < b.0);
    assert!(op.is_sorted(|a, b| a.0 < b.0));
    assert!(indices_ascend_within_keys(op.as_slice()));
}

#[test]
fn test_sort_with_custom_insertion_threshold() {
    for threshold in [1, 3, 64] {
        let cfg = SeqConfig {
            insertion_threshold: threshold,
            ..SeqConfig::default()
        };
        let mut op: SeqOp<i32> = (0..200).map(|i| (i * 37) % 101).collect();
        op.sort_with(&cfg, ascending);
        assert!(op.is_sorted(ascending), "threshold {threshold}");
        assert_eq!(op.len(), 200);
    }
}

#[test]
fn test_slice_adapter_with_generic_routines() {
    let mut items = vec![5, 3, 9, 1];
    let mut adapter = SliceAdapter::new(&mut items, ascending);
    assert!(!sort::is_sorted(&mut adapter));
    sort::unstable(&mut adapter, &SeqConfig::default());
    assert!(sort::is_sorted(&mut adapter));
    assert_eq!(items, vec![1, 3, 5, 9]);
}

/// Two parallel columns sorted together by the first one.
struct Columns {
    keys: Vec<i64>,
    labels: Vec<&'static str>,
}

impl Sequence for Columns {
    fn len(&self) -> usize {
        self.keys.len()
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.keys.swap(i, j);
        self.labels.swap(i, j);
    }
}

impl OrderAdapter for Columns {
    fn less(&mut self, i: usize, j: usize) -> bool {
        self.keys[i] < self.keys[j]
    }
}

#[test]
fn test_custom_adapter_sorts_parallel_columns() {
    let mut cols = Columns {
        keys: vec![3, 1, 2, 1],
        labels: vec!["c", "a1", "b", "a2"],
    };
    sort::stable(&mut cols, &SeqConfig::default());
    assert_eq!(cols.keys, vec![1, 1, 2, 3]);
    assert_eq!(cols.labels, vec!["a1", "a2", "b", "c"]);
}
