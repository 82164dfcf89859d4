use std::iter::FusedIterator;
use std::slice;
use std::vec;

/// A borrowed iterator over the `(key, group)` pairs of a
/// [`Grouping`](super::Grouping), in first-occurrence key order.
pub struct Iter<'a, K, V>(pub(crate) slice::Iter<'a, (K, Vec<V>)>);

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a [V]);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(key, group)| (key, group.as_slice()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// A borrowed iterator over the keys of a [`Grouping`](super::Grouping), in first-occurrence
/// order.
pub struct Keys<'a, K, V>(pub(crate) Iter<'a, K, V>);

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// An owned iterator over the `(key, group)` pairs of a [`Grouping`](super::Grouping), in
/// first-occurrence key order. See [`Grouping::into_iter`](super::Grouping#impl-IntoIterator).
pub struct IntoIter<K, V>(pub(crate) vec::IntoIter<(K, Vec<V>)>);

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, Vec<V>);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}
