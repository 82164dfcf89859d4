#![cfg(test)]

use std::collections::HashMap;

use super::*;

fn rows() -> Vec<HashMap<&'static str, i32>> {
    Vec::from([
        HashMap::from([("num", 1)]),
        HashMap::from([("num", 2)]),
        HashMap::from([("num", 2)]),
        HashMap::from([("num", 3)]),
    ])
}

#[test]
fn test_group_items_first_seen_key_order() {
    let groups = group_items(rows(), "num");

    assert_eq!(
        groups.keys().copied().collect::<Vec<_>>(),
        [1, 2, 3],
        "Keys should appear in first-occurrence order of the source."
    );
    assert_eq!(groups.get(&1).map(<[_]>::len), Some(1));
    assert_eq!(groups.get(&2).map(<[_]>::len), Some(2));
    assert_eq!(groups.get(&3).map(<[_]>::len), Some(1));
}

#[test]
fn test_group_items_skips_records_missing_the_key() {
    let mut rows = rows();
    rows.insert(2, HashMap::from([("other", 9)]));

    let groups = group_items(rows, "num");

    assert_eq!(groups.len(), 3, "A record without the key should be skipped, not grouped.");
    assert_eq!(groups.iter().map(|(_, group)| group.len()).sum::<usize>(), 4);
}

#[test]
fn test_group_items_by_key_with_element_selector() {
    let groups = group_items_by_key(
        ["apple", "avocado", "banana", "cherry"],
        |word| word.chars().next(),
        str::len,
    );

    assert_eq!(groups.keys().copied().collect::<Vec<_>>(), ['a', 'b', 'c']);
    assert_eq!(groups.get(&'a'), Some(&[5, 7][..]));
    assert_eq!(groups.get(&'b'), Some(&[6][..]));
}

#[test]
fn test_group_items_by_key_skips_keyless_items() {
    let groups = group_items_by_key(
        ["", "x", "", "y"],
        |word| word.chars().next(),
        |word| word,
    );

    assert_eq!(groups.len(), 2);
    assert!(!groups.contains_key(&' '));
}

#[test]
fn test_grouping_insert_and_lookup() {
    let mut grouping = Grouping::new();
    grouping.insert("odd", 1);
    grouping.insert("even", 2);
    grouping.insert("odd", 3);

    assert_eq!(grouping.len(), 2);
    assert_eq!(grouping.get("odd"), Some(&[1, 3][..]));
    assert_eq!(grouping.get("even"), Some(&[2][..]));
    assert_eq!(grouping.get("missing"), None);
    assert!(!grouping.is_empty());
}

#[test]
fn test_grouping_iteration_orders() {
    let mut grouping = Grouping::new();
    for n in [5, 3, 5, 1, 3, 5] {
        grouping.insert(n, n * 10);
    }

    assert_eq!(
        grouping.iter().map(|(key, group)| (*key, group.len())).collect::<Vec<_>>(),
        [(5, 3), (3, 2), (1, 1)]
    );
    assert_eq!(
        grouping.into_iter().collect::<Vec<_>>(),
        [(5, Vec::from([50, 50, 50])), (3, Vec::from([30, 30])), (1, Vec::from([10]))]
    );
}

#[test]
fn test_grouping_equality_ignores_index_internals() {
    let mut left = Grouping::new();
    let mut right = Grouping::new();
    for n in [1, 2, 1] {
        left.insert(n, n);
        right.insert(n, n);
    }

    assert_eq!(left, right);

    right.insert(3, 3);
    assert_ne!(left, right);
}

#[test]
fn test_record_field_access() {
    let row = HashMap::from([("num", 4)]);
    assert_eq!(row.field("num"), Some(4));
    assert_eq!(row.field("nope"), None);

    let row = std::collections::BTreeMap::from([(String::from("name"), "ada")]);
    assert_eq!(row.field("name"), Some("ada"));
    assert_eq!(row.field("nope"), None);
}
