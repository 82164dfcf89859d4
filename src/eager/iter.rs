use super::Enumerable;
use crate::sequence::Sequence;

impl<S: Sequence> IntoIterator for Enumerable<S> {
    type Item = S::Elem;

    type IntoIter = S::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, S: Sequence> IntoIterator for &'a Enumerable<S> {
    type Item = &'a S::Elem;

    type IntoIter = S::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
