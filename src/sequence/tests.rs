#![cfg(test)]

use std::collections::HashSet;

use super::*;

#[test]
fn test_kind_tags() {
    assert_eq!(<Vec<u8> as Sequence>::KIND, SequenceKind::List);
    assert_eq!(<HashSet<u8> as Sequence>::KIND, SequenceKind::Set);
    assert_eq!(<Tuple<u8> as Sequence>::KIND, SequenceKind::Tuple);

    assert!(SequenceKind::List.is_ordered());
    assert!(SequenceKind::Tuple.is_ordered());
    assert!(!SequenceKind::Set.is_ordered());
    assert!(SequenceKind::Set.is_set());

    assert_eq!(SequenceKind::Tuple.to_string(), "tuple");
}

#[test]
fn test_rebuild_preserves_kind_semantics() {
    let list = <Vec<u8>>::rebuild([1, 1, 2, 3]);
    assert_eq!(list, [1, 1, 2, 3], "List rebuilds should keep duplicates and order.");

    let set = <HashSet<u8>>::rebuild([1, 1, 2, 3]);
    assert_eq!(set.len(), 3, "Set rebuilds should collapse duplicates.");

    let tuple = <Tuple<u8>>::rebuild([1, 1, 2, 3]);
    assert_eq!(*tuple, [1, 1, 2, 3], "Tuple rebuilds should keep duplicates and order.");
}

#[test]
fn test_contains() {
    let list = Vec::from([1, 2, 3]);
    assert!(Sequence::contains(&list, &2));
    assert!(!Sequence::contains(&list, &4));

    let set = HashSet::from([1, 2, 3]);
    assert!(Sequence::contains(&set, &2));
    assert!(!Sequence::contains(&set, &4));
}

#[test]
fn test_empty_tuple_is_usable() {
    let tuple = Tuple::<u8>::from([]);
    assert!(tuple.is_empty());
    assert_eq!(Sequence::iter(&tuple).count(), 0);
    assert_eq!(format!("{tuple:?}"), "()");
}

#[test]
fn test_tuple_debug_and_deref() {
    let tuple = Tuple::from(["a", "b"]);
    assert_eq!(format!("{tuple:?}"), r#"("a", "b")"#);
    assert_eq!(tuple.first(), Some(&"a"));
    assert_eq!(tuple[1], "b");
}
