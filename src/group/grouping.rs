use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};
use std::hash::Hash;

use super::{IntoIter, Iter, Keys};

/// An ordered mapping from group key to the elements that produced it.
///
/// Keys appear in *first-occurrence* order of the source traversal, not in sorted order, and the
/// elements within each group keep their original relative order. Lookup by key is `O(1)` via a
/// hash index; iteration walks the insertion order.
///
/// Keys are stored twice (once in the order list, once in the index), hence the `K: Clone` bound.
///
/// # Examples
/// ```
/// use query_lib::Grouping;
///
/// let mut grouping = Grouping::new();
/// grouping.insert("odd", 1);
/// grouping.insert("even", 2);
/// grouping.insert("odd", 3);
///
/// assert_eq!(grouping.get("odd"), Some(&[1, 3][..]));
/// assert_eq!(grouping.keys().collect::<Vec<_>>(), [&"odd", &"even"]);
/// ```
pub struct Grouping<K, V> {
    pub(crate) order: Vec<(K, Vec<V>)>,
    pub(crate) index: HashMap<K, usize>,
}

impl<K: Hash + Eq + Clone, V> Grouping<K, V> {
    /// Creates an empty Grouping.
    pub fn new() -> Grouping<K, V> {
        Grouping {
            order: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Appends `value` to the group for `key`, creating the group at the back of the insertion
    /// order if this is the first time the key has been seen.
    pub fn insert(&mut self, key: K, value: V) {
        match self.index.get(&key) {
            Some(&at) => self.order[at].1.push(value),
            None => {
                self.index.insert(key.clone(), self.order.len());
                self.order.push((key, Vec::from([value])));
            },
        }
    }

    /// Returns the group for `key`, or None if the key was never seen.
    pub fn get<Q>(&self, key: &Q) -> Option<&[V]>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&at| self.order[at].1.as_slice())
    }

    /// Returns true if `key` names a group.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Returns the number of groups (distinct keys), not the number of grouped elements.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if no elements were grouped.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns an iterator over the keys in first-occurrence order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Returns an iterator over `(key, group)` pairs in first-occurrence order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter(self.order.iter())
    }
}

impl<K: Hash + Eq + Clone, V> Default for Grouping<K, V> {
    fn default() -> Self {
        Grouping::new()
    }
}

// Comparison ignores the hash index; two Groupings are equal when they hold the same groups in
// the same first-occurrence order.
impl<K: PartialEq, V: PartialEq> PartialEq for Grouping<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
    }
}

impl<K: Eq, V: Eq> Eq for Grouping<K, V> {}

impl<K: Debug, V: Debug> Debug for Grouping<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.order.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

impl<K, V> IntoIterator for Grouping<K, V> {
    type Item = (K, Vec<V>);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.order.into_iter())
    }
}

impl<'a, K, V> IntoIterator for &'a Grouping<K, V> {
    type Item = (&'a K, &'a [V]);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.order.iter())
    }
}
