use std::collections::{HashSet, hash_set};
use std::hash::Hash;
use std::slice;

use super::{SequenceKind, Tuple};

/// A container that the query wrappers can be built over.
///
/// Implemented for exactly three container shapes: [`Vec`] (list-like),
/// [`HashSet`](std::collections::HashSet) (set-like) and [`Tuple`] (tuple-like). The set of
/// implementations is deliberately closed - wrapping a `String` or a map is a compile error, which
/// replaces the runtime type check a dynamic language would do at construction time.
///
/// # Kind preservation
/// [`Mapped<U>`](Sequence::Mapped) names "this same kind of container, holding `U` instead".
/// The associated type itself carries no bounds; operations that actually build a `Mapped<U>`
/// require `Mapped<U>: Sequence<Elem = U>`, so mapping a set demands `U: Hash + Eq` while mapping
/// a list or tuple demands nothing extra.
pub trait Sequence: IntoIterator<Item = Self::Elem> + Sized {
    /// The element type.
    type Elem;

    /// The same container kind, re-parameterized over element type `U`.
    type Mapped<U>;

    /// The borrowed iterator over this container. See [`iter`](Sequence::iter).
    type Iter<'a>: Iterator<Item = &'a Self::Elem>
    where
        Self: 'a,
        Self::Elem: 'a;

    /// The kind tag for this container shape.
    const KIND: SequenceKind;

    /// Returns an iterator over all elements, as references.
    fn iter(&self) -> Self::Iter<'_>;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns true if the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if `item` is an element of the container. Set-like containers answer via
    /// their hash lookup, ordered containers by linear scan.
    fn contains(&self, item: &Self::Elem) -> bool
    where
        Self::Elem: PartialEq;

    /// Builds a fresh container of this kind from `items`. For set-like containers this is where
    /// duplicates collapse and source order is discarded.
    fn rebuild<I: IntoIterator<Item = Self::Elem>>(items: I) -> Self;
}

impl<T> Sequence for Vec<T> {
    type Elem = T;

    type Mapped<U> = Vec<U>;

    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    const KIND: SequenceKind = SequenceKind::List;

    fn iter(&self) -> Self::Iter<'_> {
        self.as_slice().iter()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(item)
    }

    fn rebuild<I: IntoIterator<Item = T>>(items: I) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Hash + Eq> Sequence for HashSet<T> {
    type Elem = T;

    type Mapped<U> = HashSet<U>;

    type Iter<'a>
        = hash_set::Iter<'a, T>
    where
        Self: 'a;

    const KIND: SequenceKind = SequenceKind::Set;

    fn iter(&self) -> Self::Iter<'_> {
        HashSet::iter(self)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        HashSet::contains(self, item)
    }

    fn rebuild<I: IntoIterator<Item = T>>(items: I) -> Self {
        items.into_iter().collect()
    }
}

impl<T> Sequence for Tuple<T> {
    type Elem = T;

    type Mapped<U> = Tuple<U>;

    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    const KIND: SequenceKind = SequenceKind::Tuple;

    fn iter(&self) -> Self::Iter<'_> {
        self.0.iter()
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.0.contains(item)
    }

    fn rebuild<I: IntoIterator<Item = T>>(items: I) -> Self {
        items.into_iter().collect()
    }
}
