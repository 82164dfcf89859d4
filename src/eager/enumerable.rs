use std::collections::HashSet;
use std::fmt::{self, Debug, Formatter};
use std::hash::Hash;

use crate::group::{Grouping, Record, group_items, group_items_by_key};
#[cfg(feature = "lazy")]
use crate::lazy::Queryable;
use crate::sequence::{Sequence, SequenceKind};

/// Wraps `source` in an eager [`Enumerable`].
///
/// The wrapper takes the container by value, so it owns its data outright and later changes to
/// whatever the caller kept around can't reach into the query.
///
/// # Examples
/// ```
/// use query_lib::extend;
///
/// let evens = extend(Vec::from([1, 2, 3, 4])).where_(|n| n % 2 == 0);
/// assert_eq!(evens.into_inner(), [2, 4]);
/// ```
pub fn extend<S: Sequence>(source: S) -> Enumerable<S> {
    Enumerable::new(source)
}

/// A fluent query over a fixed, fully materialized sequence.
///
/// Every chaining operator consumes the wrapper and immediately produces a new one *of the same
/// container kind*: filtering a set gives a set, mapping a tuple gives a tuple. Probing operators
/// (`any`, `first`, `len`, ...) borrow and can be called as often as needed.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the sequence.
/// - `m`: The number of items in a second sequence.
///
/// | Method | Complexity |
/// |-|-|
/// | `any` / `first` | `O(n)` worst case, short-circuits |
/// | `where_` / `select` / `skip` / `take` | `O(n)` |
/// | `select_many` | `O(n + produced)` |
/// | `order_by` | `O(n log n)` |
/// | `distinct` | `O(n)` expected |
/// | `diff` | `O(n)` expected against a set, `O(n * m)` otherwise |
/// | `group_by` | `O(n)` expected |
///
/// # Examples
/// ```
/// use query_lib::extend;
///
/// let names = extend(Vec::from(["ada", "grace", "alan", "edsger"]))
///     .where_(|name| name.len() > 3)
///     .order_by(|name| name.len())
///     .select(str::to_uppercase);
/// assert_eq!(names.into_inner(), ["ALAN", "GRACE", "EDSGER"]);
/// ```
pub struct Enumerable<S: Sequence> {
    pub(crate) items: S,
}

impl<S: Sequence> Enumerable<S> {
    /// Creates an Enumerable owning `source`. See also the free function [`extend`].
    pub fn new(source: S) -> Enumerable<S> {
        Enumerable { items: source }
    }

    /// Returns the container kind this query preserves.
    pub fn kind(&self) -> SequenceKind {
        S::KIND
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns an iterator over all elements, as references.
    pub fn iter(&self) -> S::Iter<'_> {
        self.items.iter()
    }

    /// Unwraps the underlying container.
    pub fn into_inner(self) -> S {
        self.items
    }

    /// Returns true if at least one element satisfies `predicate`. Short-circuits on the first
    /// match.
    pub fn any<P: FnMut(&S::Elem) -> bool>(&self, predicate: P) -> bool {
        self.items.iter().any(predicate)
    }

    /// Returns true if the sequence holds at least one element - the predicate-less form of
    /// [`any`](Enumerable::any).
    pub fn any_element(&self) -> bool {
        !self.is_empty()
    }

    /// Returns true if every element satisfies `predicate` (vacuously true when empty).
    pub fn all<P: FnMut(&S::Elem) -> bool>(&self, predicate: P) -> bool {
        self.items.iter().all(predicate)
    }

    /// Returns the number of elements. Alias of [`len`](Enumerable::len) kept for query-surface
    /// symmetry with the lazy evaluator.
    pub fn count(&self) -> usize {
        self.len()
    }

    /// Returns true if `item` is an element of the sequence.
    pub fn contains(&self, item: &S::Elem) -> bool
    where
        S::Elem: PartialEq,
    {
        self.items.contains(item)
    }

    /// Returns the first element, or None if the sequence is empty.
    ///
    /// For set-like sequences "first" follows the set's internal iteration order, which this
    /// crate does not guarantee.
    pub fn first(&self) -> Option<&S::Elem> {
        self.items.iter().next()
    }

    /// Returns the last element, or None if the sequence is empty.
    ///
    /// For set-like sequences "last" follows the set's internal iteration order, which this crate
    /// does not guarantee.
    pub fn last(&self) -> Option<&S::Elem> {
        self.items.iter().last()
    }

    /// Returns a clone of the first element, or `default` if the sequence is empty.
    ///
    /// # Examples
    /// ```
    /// use query_lib::extend;
    ///
    /// assert_eq!(extend(Vec::from([7, 8])).first_or(0), 7);
    /// assert_eq!(extend(Vec::<i32>::new()).first_or(0), 0);
    /// ```
    pub fn first_or(&self, default: S::Elem) -> S::Elem
    where
        S::Elem: Clone,
    {
        self.first().cloned().unwrap_or(default)
    }

    /// Returns a clone of the last element, or `default` if the sequence is empty. The set-like
    /// ordering caveat of [`last`](Enumerable::last) applies.
    pub fn last_or(&self, default: S::Elem) -> S::Elem
    where
        S::Elem: Clone,
    {
        self.last().cloned().unwrap_or(default)
    }

    /// Keeps only the elements satisfying `predicate`, preserving their relative order.
    pub fn where_<P: FnMut(&S::Elem) -> bool>(self, mut predicate: P) -> Enumerable<S> {
        Enumerable {
            items: S::rebuild(self.items.into_iter().filter(|item| predicate(item))),
        }
    }

    /// Applies [`where_`](Enumerable::where_) only if `condition` is true; otherwise the sequence
    /// passes through untouched.
    ///
    /// # Examples
    /// ```
    /// use query_lib::extend;
    ///
    /// let only_long = false;
    /// let names = extend(Vec::from(["ada", "grace"])).where_if(only_long, |n| n.len() > 3);
    /// assert_eq!(names.len(), 2);
    /// ```
    pub fn where_if<P: FnMut(&S::Elem) -> bool>(self, condition: bool, predicate: P) -> Enumerable<S> {
        if condition { self.where_(predicate) } else { self }
    }

    /// Maps every element through `selector`, producing the same container kind over the new
    /// element type.
    ///
    /// # Examples
    /// ```
    /// use query_lib::extend;
    ///
    /// let lengths = extend(Vec::from(["ada", "grace"])).select(str::len);
    /// assert_eq!(lengths.into_inner(), [3, 5]);
    /// ```
    pub fn select<U, F>(self, selector: F) -> Enumerable<S::Mapped<U>>
    where
        S::Mapped<U>: Sequence<Elem = U>,
        F: FnMut(S::Elem) -> U,
    {
        Enumerable {
            items: <S::Mapped<U>>::rebuild(self.items.into_iter().map(selector)),
        }
    }

    /// Maps every element through a fallible `selector`. The first error aborts the query and is
    /// returned to the caller *unchanged* - this crate never catches or translates selector
    /// errors.
    ///
    /// # Examples
    /// ```
    /// use query_lib::extend;
    ///
    /// let parsed = extend(Vec::from(["1", "2"])).try_select(|s| s.parse::<u32>());
    /// assert_eq!(parsed.unwrap().into_inner(), [1, 2]);
    ///
    /// let failed = extend(Vec::from(["1", "x"])).try_select(|s| s.parse::<u32>());
    /// assert!(failed.is_err());
    /// ```
    pub fn try_select<U, E, F>(self, selector: F) -> Result<Enumerable<S::Mapped<U>>, E>
    where
        S::Mapped<U>: Sequence<Elem = U>,
        F: FnMut(S::Elem) -> Result<U, E>,
    {
        let mapped = self.items.into_iter().map(selector).collect::<Result<Vec<U>, E>>()?;
        Ok(Enumerable {
            items: <S::Mapped<U>>::rebuild(mapped),
        })
    }

    /// Maps every element to a sub-sequence and flattens the results by one level.
    ///
    /// # Examples
    /// ```
    /// use query_lib::extend;
    ///
    /// let chars = extend(Vec::from(["ab", "c"])).select_many(|s| s.chars().collect::<Vec<_>>());
    /// assert_eq!(chars.into_inner(), ['a', 'b', 'c']);
    /// ```
    pub fn select_many<U, I, F>(self, selector: F) -> Enumerable<S::Mapped<U>>
    where
        S::Mapped<U>: Sequence<Elem = U>,
        I: IntoIterator<Item = U>,
        F: FnMut(S::Elem) -> I,
    {
        Enumerable {
            items: <S::Mapped<U>>::rebuild(self.items.into_iter().flat_map(selector)),
        }
    }

    /// Drops the first `count` elements. A `count` beyond the length yields an empty sequence,
    /// never an error. For set-like sequences "first" follows the set's internal iteration order.
    pub fn skip(self, count: usize) -> Enumerable<S> {
        Enumerable {
            items: S::rebuild(self.items.into_iter().skip(count)),
        }
    }

    /// Keeps only the first `count` elements, the prefix dual of [`skip`](Enumerable::skip). The
    /// same over-length and set-ordering rules apply.
    pub fn take(self, count: usize) -> Enumerable<S> {
        Enumerable {
            items: S::rebuild(self.items.into_iter().take(count)),
        }
    }

    /// Sorts the sequence by `key`, ascending. The sort is stable: elements with equal keys keep
    /// their original relative order.
    ///
    /// Sorting a set-like sequence is a no-op in effect, since re-collecting into the set
    /// discards the order again.
    pub fn order_by<K: Ord, F: FnMut(&S::Elem) -> K>(self, key: F) -> Enumerable<S> {
        let mut buf: Vec<S::Elem> = self.items.into_iter().collect();
        buf.sort_by_key(key);
        Enumerable {
            items: S::rebuild(buf),
        }
    }

    /// Sorts the sequence by `key`, descending. Stable, like [`order_by`](Enumerable::order_by):
    /// elements with equal keys keep their original relative order rather than being reversed.
    pub fn order_by_desc<K: Ord, F: FnMut(&S::Elem) -> K>(self, mut key: F) -> Enumerable<S> {
        let mut buf: Vec<S::Elem> = self.items.into_iter().collect();
        buf.sort_by(|a, b| key(b).cmp(&key(a)));
        Enumerable {
            items: S::rebuild(buf),
        }
    }

    /// Removes duplicate elements, keeping the first occurrence of each. Idempotent.
    ///
    /// # Examples
    /// ```
    /// use query_lib::extend;
    ///
    /// let unique = extend(Vec::from([1, 2, 1, 3, 2])).distinct();
    /// assert_eq!(unique.into_inner(), [1, 2, 3]);
    /// ```
    pub fn distinct(self) -> Enumerable<S>
    where
        S::Elem: Hash + Eq + Clone,
    {
        let mut seen = HashSet::new();
        Enumerable {
            items: S::rebuild(self.items.into_iter().filter(|item| seen.insert(item.clone()))),
        }
    }

    /// Keeps the elements of `self` that are not contained in `other` (`self \ other`).
    /// Duplicates of surviving elements are preserved for ordered kinds.
    ///
    /// # Examples
    /// ```
    /// use query_lib::extend;
    ///
    /// let rest = extend(Vec::from([1, 2, 2, 3])).diff(&Vec::from([1, 2]));
    /// assert_eq!(rest.into_inner(), [3]);
    /// ```
    pub fn diff(self, other: &S) -> Enumerable<S>
    where
        S::Elem: PartialEq,
    {
        Enumerable {
            items: S::rebuild(self.items.into_iter().filter(|item| !other.contains(item))),
        }
    }

    /// Groups elements by the value of the field called `key_name`, in first-occurrence key
    /// order. Elements with no value for the key are skipped with a logged diagnostic. See
    /// [`group_items`].
    pub fn group_by(self, key_name: &str) -> Grouping<<S::Elem as Record>::Field, S::Elem>
    where
        S::Elem: Record,
        <S::Elem as Record>::Field: Hash + Eq + Clone,
    {
        group_items(self.items, key_name)
    }

    /// Groups elements by an arbitrary key selector, storing what `element_selector` makes of
    /// each. Elements whose key selector returns None are skipped with a logged diagnostic. See
    /// [`group_items_by_key`].
    ///
    /// # Examples
    /// ```
    /// use query_lib::extend;
    ///
    /// let by_parity = extend(Vec::from([1, 2, 3, 4]))
    ///     .group_by_key(|n| Some(n % 2), |n| n * 10);
    /// assert_eq!(by_parity.get(&1), Some(&[10, 30][..]));
    /// assert_eq!(by_parity.get(&0), Some(&[20, 40][..]));
    /// ```
    pub fn group_by_key<K, V, KF, VF>(self, key_selector: KF, element_selector: VF) -> Grouping<K, V>
    where
        K: Hash + Eq + Clone,
        KF: FnMut(&S::Elem) -> Option<K>,
        VF: FnMut(S::Elem) -> V,
    {
        group_items_by_key(self.items, key_selector, element_selector)
    }

    /// Returns an independent shallow copy of the query. Elements are cloned; the two wrappers
    /// share nothing afterwards.
    pub fn copy(&self) -> Enumerable<S>
    where
        S: Clone,
    {
        Enumerable {
            items: self.items.clone(),
        }
    }

    /// Hands the sequence off to the lazy evaluator, the dual of
    /// [`Queryable::to_enum`](crate::lazy::Queryable::to_enum).
    #[cfg(feature = "lazy")]
    pub fn into_query(self) -> Queryable<S>
    where
        S::Elem: 'static,
        S::IntoIter: 'static,
    {
        Queryable::new(self.items)
    }
}

impl<S: Sequence + Clone> Clone for Enumerable<S> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<S: Sequence + Default> Default for Enumerable<S> {
    fn default() -> Self {
        Enumerable::new(S::default())
    }
}

impl<S: Sequence + PartialEq> PartialEq for Enumerable<S> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<S: Sequence + Eq> Eq for Enumerable<S> {}

impl<S: Sequence> Debug for Enumerable<S>
where
    S::Elem: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Enumerable<{}>", S::KIND)?;
        f.debug_list().entries(self.items.iter()).finish()
    }
}
