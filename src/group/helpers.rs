use std::hash::Hash;

use tracing::warn;

use super::{Grouping, Record};

/// Groups `items` by the value of the field called `key_name` on each record.
///
/// Records that have no value for `key_name` are skipped with a `tracing` diagnostic; one bad
/// record never aborts the whole pass. Keys appear in the result in first-occurrence order.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use query_lib::group::group_items;
///
/// let rows = [
///     HashMap::from([("num", 1)]),
///     HashMap::from([("num", 2)]),
///     HashMap::from([("num", 2)]),
/// ];
/// let groups = group_items(rows, "num");
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups.get(&2).map(<[_]>::len), Some(2));
/// ```
pub fn group_items<I, R>(items: I, key_name: &str) -> Grouping<R::Field, R>
where
    I: IntoIterator<Item = R>,
    R: Record,
    R::Field: Hash + Eq + Clone,
{
    let mut grouping = Grouping::new();
    for item in items {
        match item.field(key_name) {
            Some(key) => grouping.insert(key, item),
            None => warn!(key = key_name, "record has no value for the group key, skipping it"),
        }
    }
    grouping
}

/// Groups `items` by an arbitrary key selector, storing what the element selector makes of each
/// item.
///
/// The key selector returns `Option`: `None` means "this item has no key" and the item is skipped
/// with a `tracing` diagnostic, mirroring [`group_items`]. Keys appear in the result in
/// first-occurrence order and grouped elements keep their original relative order.
pub fn group_items_by_key<I, K, V, KF, VF>(
    items: I,
    mut key_selector: KF,
    mut element_selector: VF,
) -> Grouping<K, V>
where
    I: IntoIterator,
    K: Hash + Eq + Clone,
    KF: FnMut(&I::Item) -> Option<K>,
    VF: FnMut(I::Item) -> V,
{
    let mut grouping = Grouping::new();
    for item in items {
        match key_selector(&item) {
            Some(key) => grouping.insert(key, element_selector(item)),
            None => warn!("key selector produced no key for an item, skipping it"),
        }
    }
    grouping
}
