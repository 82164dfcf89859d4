#![cfg(test)]

use std::collections::HashSet;

use super::*;
use crate::sequence::Tuple;

#[test]
fn test_where_keeps_matching_elements_in_order() {
    let result = extend(Vec::from([1, 2, 3, 4, 5, 6])).where_(|n| n % 2 == 0);
    assert_eq!(result.into_inner(), [2, 4, 6]);

    let result = extend(Vec::from([1, 3, 5])).where_(|n| n % 2 == 0);
    assert!(result.is_empty());
}

#[test]
fn test_where_if_passthrough() {
    let source = Vec::from([1, 2, 3]);

    let filtered = extend(source.clone()).where_if(true, |n| *n > 1);
    assert_eq!(filtered.into_inner(), [2, 3]);

    let untouched = extend(source).where_if(false, |n| *n > 1);
    assert_eq!(untouched.into_inner(), [1, 2, 3], "A false condition should not filter at all.");
}

#[test]
fn test_select_preserves_kind() {
    let list = extend(Vec::from([1, 2, 3])).select(|n| n * 2);
    assert_eq!(list.kind(), crate::SequenceKind::List);
    assert_eq!(list.into_inner(), [2, 4, 6]);

    let tuple = extend(Tuple::from([1, 2, 3])).select(|n| n.to_string());
    assert_eq!(tuple.kind(), crate::SequenceKind::Tuple);
    assert_eq!(*tuple.into_inner(), ["1", "2", "3"]);

    let set = extend(HashSet::from([1, 2, 3])).select(|n| n % 2);
    assert_eq!(set.kind(), crate::SequenceKind::Set);
    assert_eq!(set.into_inner(), HashSet::from([0, 1]), "Set mapping should collapse collisions.");
}

#[test]
fn test_select_composition() {
    let f = |n: i32| n + 1;
    let g = |n: i32| n * 3;

    let composed = extend(Vec::from([1, 2, 3])).select(f).select(g);
    let fused = extend(Vec::from([1, 2, 3])).select(|n| g(f(n)));
    assert_eq!(composed, fused, "select(f).select(g) should equal select(g . f).");
}

#[test]
fn test_try_select_propagates_the_callers_error() {
    let err = extend(Vec::from(["1", "nope", "3"]))
        .try_select(|s| s.parse::<u32>())
        .unwrap_err();

    // The error comes back as the selector produced it.
    assert_eq!(err, "nope".parse::<u32>().unwrap_err());

    let ok = extend(Vec::from(["1", "3"])).try_select(|s| s.parse::<u32>()).unwrap();
    assert_eq!(ok.into_inner(), [1, 3]);
}

#[test]
fn test_select_many_flattens_one_level() {
    let result = extend(Vec::from([Vec::from([1, 2]), Vec::new(), Vec::from([3])]))
        .select_many(|inner| inner);
    assert_eq!(result.into_inner(), [1, 2, 3]);
}

#[test]
fn test_skip_and_take_bounds() {
    let source = Vec::from([1, 2, 3]);

    assert_eq!(extend(source.clone()).skip(0).into_inner(), [1, 2, 3], "skip(0) is identity.");
    assert_eq!(extend(source.clone()).skip(2).into_inner(), [3]);
    assert!(extend(source.clone()).skip(3).is_empty());
    assert!(extend(source.clone()).skip(100).is_empty(), "Over-length skip yields empty, not an error.");

    assert_eq!(extend(source.clone()).take(2).into_inner(), [1, 2]);
    assert_eq!(extend(source).take(100).into_inner(), [1, 2, 3]);
}

#[test]
fn test_order_by_is_stable() {
    let words = Vec::from(["bb", "a", "dd", "c", "eee"]);

    let asc = extend(words.clone()).order_by(|w| w.len());
    assert_eq!(
        asc.into_inner(),
        ["a", "c", "bb", "dd", "eee"],
        "Equal keys should keep their original relative order."
    );

    let desc = extend(words).order_by_desc(|w| w.len());
    assert_eq!(
        desc.into_inner(),
        ["eee", "bb", "dd", "a", "c"],
        "Descending order should also keep equal keys in original relative order."
    );
}

#[test]
fn test_distinct_is_idempotent() {
    let once = extend(Vec::from([1, 2, 1, 3, 2, 1])).distinct();
    assert_eq!(once.copy().into_inner(), [1, 2, 3], "First occurrences survive, in order.");

    let twice = once.copy().distinct();
    assert_eq!(once, twice, "distinct().distinct() should equal distinct().");
}

#[test]
fn test_diff_removes_all_occurrences() {
    let result = extend(Vec::from([1, 2, 2, 3])).diff(&Vec::from([1, 2]));
    assert_eq!(result.into_inner(), [3]);

    let result = extend(HashSet::from([1, 2, 3])).diff(&HashSet::from([2]));
    assert_eq!(result.into_inner(), HashSet::from([1, 3]));
}

#[test]
fn test_first_and_last() {
    let source = extend(Vec::from([10, 20, 30]));
    assert_eq!(source.first(), Some(&10));
    assert_eq!(source.last(), Some(&30));
    assert_eq!(source.first_or(0), 10);
    assert_eq!(source.last_or(0), 30);

    let empty = extend(Vec::<i32>::new());
    assert_eq!(empty.first(), None);
    assert_eq!(empty.last(), None);
    assert_eq!(empty.first_or(-1), -1);
    assert_eq!(empty.last_or(-1), -1);
}

#[test]
fn test_any_all_count_contains() {
    let source = extend(Vec::from([1, 2, 3]));

    assert!(source.any(|n| *n == 2));
    assert!(!source.any(|n| *n > 5));
    assert!(source.any_element());
    assert!(source.all(|n| *n > 0));
    assert!(!source.all(|n| *n > 1));
    assert_eq!(source.count(), 3);
    assert!(source.contains(&3));
    assert!(!source.contains(&4));

    let empty = extend(Vec::<i32>::new());
    assert!(!empty.any_element());
    assert!(empty.all(|_| false), "all() is vacuously true on an empty sequence.");
}

#[test]
fn test_copy_is_independent() {
    let original = extend(Vec::from([1, 2, 3]));
    let copied = original.copy();

    let shrunk = copied.where_(|n| *n > 2);
    assert_eq!(shrunk.len(), 1);
    assert_eq!(original.len(), 3, "Consuming a copy should not affect the original.");
}

#[test]
fn test_group_by_over_records() {
    use std::collections::HashMap;

    let rows = Vec::from([
        HashMap::from([("num", 1)]),
        HashMap::from([("num", 2)]),
        HashMap::from([("num", 2)]),
        HashMap::from([("num", 3)]),
    ]);

    let groups = extend(rows).group_by("num");
    assert_eq!(groups.keys().copied().collect::<Vec<_>>(), [1, 2, 3]);
    assert_eq!(groups.get(&2).map(<[_]>::len), Some(2));
}

#[test]
fn test_group_by_key_first_seen_order() {
    let groups = extend(Vec::from([1, 2, 2, 3])).group_by_key(|n| Some(*n), |n| n);

    assert_eq!(groups.keys().copied().collect::<Vec<_>>(), [1, 2, 3]);
    assert_eq!(groups.get(&1).map(<[_]>::len), Some(1));
    assert_eq!(groups.get(&2).map(<[_]>::len), Some(2));
    assert_eq!(groups.get(&3).map(<[_]>::len), Some(1));
}

#[test]
fn test_empty_tuple_wrapper_is_usable() {
    let empty = extend(Tuple::<i32>::from([]));
    assert_eq!(empty.kind(), crate::SequenceKind::Tuple);
    assert!(empty.is_empty());

    let still_tuple = empty.where_(|_| true).select(|n| n + 1);
    assert_eq!(still_tuple.kind(), crate::SequenceKind::Tuple);
    assert!(still_tuple.is_empty());
}

#[test]
fn test_value_semantics_at_construction() {
    let mut source = Vec::from([1, 2, 3]);
    let wrapped = extend(source.clone());
    source.push(4);

    assert_eq!(wrapped.len(), 3, "Mutating the caller's container must not reach the wrapper.");
}

#[test]
fn test_debug_output_names_the_kind() {
    let wrapped = extend(Vec::from([1, 2]));
    assert_eq!(format!("{wrapped:?}"), "Enumerable<list>[1, 2]");
}

#[cfg(feature = "lazy")]
#[test]
fn test_into_query_hands_off_remaining_elements() {
    let mut lazy = extend(Vec::from([1, 2, 3])).where_(|n| *n > 1).into_query();
    assert_eq!(lazy.to_list(), [2, 3]);
}
