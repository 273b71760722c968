//! Statically typed operator: map/select/any/all/inject/group_by/copy.


use seqop_operators::{GroupMap, SeqOp, Sequence};
use test_data_gen::{is_even, one_to_ten, sum, twice};

#[test]
fn test_map_int() {
    let actual = SeqOp::new(vec![2, 4]).map(twice).map(twice);
    assert_eq!(actual.into_inner(), vec![8, 16]);
}

#[test]
fn test_map_changes_element_type() {
    let actual = SeqOp::new(vec![100, 400, 1234]).map(|v: &i32| v.to_string());
    assert_eq!(actual.into_inner(), vec!["100", "400", "1234"]);
}

#[test]
fn test_map_leaves_source_untouched() {
    let src = SeqOp::new(one_to_ten());
    let doubled = src.map(twice);
    assert_eq!(src.as_slice(), one_to_ten().as_slice());
    assert_eq!(doubled.len(), src.len());
    for (d, s) in doubled.iter().zip(src.iter()) {
        assert_eq!(*d, twice(s));
    }
}

#[test]
fn test_map_empty() {
    let empty: SeqOp<i32> = SeqOp::default();
    assert!(empty.map(twice).is_empty());
}

#[test]
fn test_select() {
    let actual = SeqOp::new(one_to_ten()).select(is_even);
    assert_eq!(actual.as_slice(), &[2, 4, 6, 8, 10]);
}

#[test]
fn test_select_none() {
    let actual = SeqOp::new(vec![1, 3, 5]).select(is_even);
    assert!(actual.is_empty());
}

#[test]
fn test_any() {
    assert!(SeqOp::new(one_to_ten()).any(is_even));
    assert!(!SeqOp::new(vec![1, 3, 5, 7, 9]).any(is_even));
    assert!(!SeqOp::<i32>::default().any(|_| true));
}

#[test]
fn test_all() {
    assert!(SeqOp::new(vec![2, 4, 6, 8, 10]).all(is_even));
    assert!(!SeqOp::new(one_to_ten()).all(is_even));
    assert!(SeqOp::<i32>::default().all(|_| false));
}

#[test]
fn test_any_short_circuits() {
    let mut visited = 0;
    let found = SeqOp::new(one_to_ten()).any(|v| {
        visited += 1;
        *v == 3
    });
    assert!(found);
    assert_eq!(visited, 3);
}

#[test]
fn test_all_short_circuits() {
    let mut visited = 0;
    let ok = SeqOp::new(one_to_ten()).all(|v| {
        visited += 1;
        *v < 2
    });
    assert!(!ok);
    assert_eq!(visited, 2);
}

#[test]
fn test_inject() {
    assert_eq!(SeqOp::new(one_to_ten()).inject(0, sum), 55);
}

#[test]
fn test_inject_is_left_fold() {
    let joined = SeqOp::new(vec!["a", "b", "c"]).inject(String::from(">"), |mut acc, v| {
        acc.push_str(v);
        acc
    });
    assert_eq!(joined, ">abc");

    // Non-associative step exposes the fold direction: ((10 - 1) - 2) - 3
    assert_eq!(SeqOp::new(vec![1, 2, 3]).inject(10, |acc, v| acc - v), 4);
}

#[test]
fn test_inject_empty_returns_init() {
    assert_eq!(SeqOp::<i32>::default().inject(7, sum), 7);
}

#[test]
fn test_group_by() {
    let actual = SeqOp::new(one_to_ten()).group_by(is_even);

    let mut expected = GroupMap::new();
    for v in [1, 2, 3, 4, 5, 6, 7, 8, 9, 10] {
        expected.push(v % 2 == 0, v);
    }
    assert_eq!(actual, expected);
    assert_eq!(actual.get(&true), Some(&[2, 4, 6, 8, 10][..]));
    assert_eq!(actual.get(&false), Some(&[1, 3, 5, 7, 9][..]));
    // 1 is seen before 2.
    assert_eq!(actual.keys().copied().collect::<Vec<_>>(), vec![false, true]);
}

#[test]
fn test_group_by_first_seen_key_order() {
    let words = SeqOp::new(vec!["pear", "apple", "plum", "avocado", "kiwi", "peach"]);
    let by_initial = words.group_by(|w| w.chars().next());

    let order: Vec<_> = by_initial.keys().copied().collect();
    assert_eq!(order, vec![Some('p'), Some('a'), Some('k')]);
    assert_eq!(by_initial.get(&Some('p')), Some(&["pear", "plum", "peach"][..]));
    assert_eq!(by_initial.len(), 3);
}

#[test]
fn test_group_by_serializes_in_key_order() {
    let groups = SeqOp::new(one_to_ten()).group_by(|v| v % 3);
    let json = serde_json::to_string(&groups).expect("serialize groups");
    assert_eq!(json, r#"{"1":[1,4,7,10],"2":[2,5,8],"0":[3,6,9]}"#);
}

#[test]
fn test_group_by_empty() {
    let groups = SeqOp::<i32>::default().group_by(is_even);
    assert!(groups.is_empty());
}

#[test]
fn test_copy() {
    let mut src = SeqOp::new(one_to_ten());
    let dst = src.copy();
    assert_eq!(src, dst);

    src.sort(|a, b| a > b);
    assert_eq!(dst.as_slice(), one_to_ten().as_slice());
    assert_ne!(src, dst);
}

#[test]
fn test_len() {
    let src = one_to_ten();
    assert_eq!(Sequence::len(src.as_slice()), 10);
}

#[test]
fn test_swap() {
    let mut src = vec![1, 2, 3];
    Sequence::swap(src.as_mut_slice(), 0, 1);
    assert_eq!(src, vec![2, 1, 3]);
}

#[test]
fn test_chaining_returns_same_operator() {
    let mut op = SeqOp::new(vec![3, 1, 2]);
    let len = op.sort(|a, b| a < b).len();
    assert_eq!(len, 3);
    assert_eq!(op.as_slice(), &[1, 2, 3]);

    op.sort(|a, b| a > b).sort(|a, b| a < b);
    assert_eq!(op.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_collect_and_iterate() {
    let op: SeqOp<i32> = (1..=3).collect();
    let doubled: Vec<i32> = op.into_iter().map(|v| v * 2).collect();
    assert_eq!(doubled, vec![2, 4, 6]);
}
