use std::collections::HashSet;
use std::fmt::{self, Debug, Formatter};
use std::hash::Hash;
use std::marker::PhantomData;

#[cfg(feature = "eager")]
use crate::eager::Enumerable;
use crate::group::{Grouping, Record, group_items, group_items_by_key};
use crate::sequence::{Sequence, SequenceKind, Tuple};

/// Wraps `source` in a lazy [`Queryable`].
///
/// The source container is consumed into a cursor immediately, but no elements are touched until
/// a terminal operation runs.
///
/// # Examples
/// ```
/// use query_lib::query;
///
/// let mut q = query(Vec::from([1, 2, 3, 4])).where_(|n| n % 2 == 0).select(|n| n * 10);
/// assert_eq!(q.to_list(), [20, 40]);
/// assert!(q.to_list().is_empty(), "A drained cursor yields empty results.");
/// ```
pub fn query<S>(source: S) -> Queryable<S>
where
    S: Sequence,
    S::Elem: 'static,
    S::IntoIter: 'static,
{
    Queryable::new(source)
}

/// A fluent query over a single-pass cursor.
///
/// Chaining operators take the Queryable *by value* and return it rebuilt, so exactly one handle
/// to the cursor exists at any time - the aliasing that a mutate-and-return-`self` builder
/// invites simply can't be expressed. Terminal operations borrow mutably and drain the cursor;
/// after the first terminal, every later terminal sees an exhausted cursor and yields an empty
/// result (see the [module docs](crate::lazy)).
///
/// Two operators are *eager within the lazy pipeline*: [`order_by`](Queryable::order_by) and
/// [`distinct`](Queryable::distinct) cannot produce their first element without seeing the whole
/// input, so they drain the cursor, materialize, and install a fresh cursor over the result.
/// "Lazy" refers to deferred execution timing, not to the memory behavior of every operator.
///
/// The container kind of the source is carried in the type parameter `S` and only matters again
/// at the terminals [`to_type`](Queryable::to_type) and [`to_enum`](Queryable::to_enum), which
/// rebuild that original kind.
pub struct Queryable<S: Sequence>
where
    S::Elem: 'static,
{
    pub(crate) cursor: Box<dyn Iterator<Item = S::Elem>>,
    pub(crate) _kind: PhantomData<S>,
}

impl<S: Sequence> Queryable<S>
where
    S::Elem: 'static,
{
    /// Creates a Queryable whose cursor reads from `source`. See also the free function
    /// [`query`].
    pub fn new(source: S) -> Queryable<S>
    where
        S::IntoIter: 'static,
    {
        Queryable {
            cursor: Box::new(source.into_iter()),
            _kind: PhantomData,
        }
    }

    /// Returns the container kind recorded at construction, which
    /// [`to_type`](Queryable::to_type) and [`to_enum`](Queryable::to_enum) rebuild.
    pub fn kind(&self) -> SequenceKind {
        S::KIND
    }

    fn with_cursor(cursor: impl Iterator<Item = S::Elem> + 'static) -> Queryable<S> {
        Queryable {
            cursor: Box::new(cursor),
            _kind: PhantomData,
        }
    }

    /// Keeps only the elements satisfying `predicate`. Deferred; nothing runs until a terminal.
    pub fn where_<P: FnMut(&S::Elem) -> bool + 'static>(self, predicate: P) -> Queryable<S> {
        Queryable::with_cursor(self.cursor.filter(predicate))
    }

    /// Applies [`where_`](Queryable::where_) only if `condition` is true; otherwise the cursor
    /// passes through untouched.
    pub fn where_if<P: FnMut(&S::Elem) -> bool + 'static>(
        self,
        condition: bool,
        predicate: P,
    ) -> Queryable<S> {
        if condition { self.where_(predicate) } else { self }
    }

    /// Maps every element through `selector`. Deferred. The container kind carries over to the
    /// new element type.
    pub fn select<U, F>(self, selector: F) -> Queryable<S::Mapped<U>>
    where
        S::Mapped<U>: Sequence<Elem = U>,
        U: 'static,
        F: FnMut(S::Elem) -> U + 'static,
    {
        Queryable {
            cursor: Box::new(self.cursor.map(selector)),
            _kind: PhantomData,
        }
    }

    /// Maps every element to a sub-sequence and flattens the results by one level. Deferred.
    pub fn select_many<U, I, F>(self, selector: F) -> Queryable<S::Mapped<U>>
    where
        S::Mapped<U>: Sequence<Elem = U>,
        U: 'static,
        I: IntoIterator<Item = U> + 'static,
        I::IntoIter: 'static,
        F: FnMut(S::Elem) -> I + 'static,
    {
        Queryable {
            cursor: Box::new(self.cursor.flat_map(selector)),
            _kind: PhantomData,
        }
    }

    /// Drops the first `count` elements. Deferred; an over-length `count` simply leaves the
    /// cursor empty.
    pub fn skip(self, count: usize) -> Queryable<S> {
        Queryable::with_cursor(self.cursor.skip(count))
    }

    /// Keeps only the first `count` elements, the prefix dual of [`skip`](Queryable::skip).
    /// Deferred.
    pub fn take(self, count: usize) -> Queryable<S> {
        Queryable::with_cursor(self.cursor.take(count))
    }

    /// Sorts the remaining elements by `key`, ascending and stable.
    ///
    /// Eager within the lazy pipeline: sorting needs the whole input, so this drains the cursor
    /// now and installs a fresh cursor over the sorted result.
    pub fn order_by<K: Ord, F: FnMut(&S::Elem) -> K>(self, key: F) -> Queryable<S> {
        let mut buf: Vec<S::Elem> = self.cursor.collect();
        buf.sort_by_key(key);
        Queryable::with_cursor(buf.into_iter())
    }

    /// Sorts the remaining elements by `key`, descending. Stable like
    /// [`order_by`](Queryable::order_by), and eager within the lazy pipeline for the same reason.
    pub fn order_by_desc<K: Ord, F: FnMut(&S::Elem) -> K>(self, mut key: F) -> Queryable<S> {
        let mut buf: Vec<S::Elem> = self.cursor.collect();
        buf.sort_by(|a, b| key(b).cmp(&key(a)));
        Queryable::with_cursor(buf.into_iter())
    }

    /// Removes duplicates, keeping the first occurrence of each.
    ///
    /// Eager within the lazy pipeline: the cursor is drained and deduplicated now, and a fresh
    /// cursor over the result installed.
    pub fn distinct(self) -> Queryable<S>
    where
        S::Elem: Hash + Eq + Clone,
    {
        let mut seen = HashSet::new();
        let unique: Vec<S::Elem> = self.cursor.filter(|item| seen.insert(item.clone())).collect();
        Queryable::with_cursor(unique.into_iter())
    }

    /// Keeps the elements not contained in `other` (`self \ other`). `other` is materialized
    /// immediately; the filtering itself is deferred.
    pub fn diff<I>(self, other: I) -> Queryable<S>
    where
        S::Elem: PartialEq,
        I: IntoIterator<Item = S::Elem>,
    {
        let exclude: Vec<S::Elem> = other.into_iter().collect();
        Queryable::with_cursor(self.cursor.filter(move |item| !exclude.contains(item)))
    }

    /// Drains the cursor into a list.
    ///
    /// # Examples
    /// ```
    /// use query_lib::query;
    ///
    /// let mut q = query(Vec::from([1, 2, 3]));
    /// assert_eq!(q.to_list(), [1, 2, 3]);
    /// assert!(q.to_list().is_empty(), "Second drain finds an exhausted cursor.");
    /// ```
    pub fn to_list(&mut self) -> Vec<S::Elem> {
        self.cursor.by_ref().collect()
    }

    /// Drains the cursor into a set, collapsing duplicates.
    pub fn to_set(&mut self) -> HashSet<S::Elem>
    where
        S::Elem: Hash + Eq,
    {
        self.cursor.by_ref().collect()
    }

    /// Drains the cursor into a tuple.
    pub fn to_tuple(&mut self) -> Tuple<S::Elem> {
        self.cursor.by_ref().collect()
    }

    /// Drains the cursor into the container kind recorded at construction.
    ///
    /// # Examples
    /// ```
    /// use query_lib::query;
    ///
    /// // Built from a tuple, so to_type rebuilds a tuple.
    /// let mut q = query(query_lib::Tuple::from([1, 2, 2])).select(|n| n * 2);
    /// assert_eq!(*q.to_type(), [2, 4, 4]);
    /// ```
    pub fn to_type(&mut self) -> S {
        S::rebuild(self.cursor.by_ref())
    }

    /// Drains the cursor into an eager [`Enumerable`] of the recorded container kind, for
    /// further eager-style querying.
    #[cfg(feature = "eager")]
    pub fn to_enum(&mut self) -> Enumerable<S> {
        Enumerable::new(self.to_type())
    }

    /// Consumes elements until one satisfies `predicate`, returning true if one was found.
    /// Elements before the match are gone from the cursor along with it.
    pub fn any<P: FnMut(S::Elem) -> bool>(&mut self, predicate: P) -> bool {
        self.cursor.any(predicate)
    }

    /// Returns true if the cursor yields at least one more element, consuming it - the
    /// predicate-less form of [`any`](Queryable::any).
    pub fn any_element(&mut self) -> bool {
        self.cursor.next().is_some()
    }

    /// Drains the cursor, returning true if every element satisfied `predicate`. Vacuously true
    /// on an exhausted cursor.
    pub fn all<P: FnMut(S::Elem) -> bool>(&mut self, predicate: P) -> bool {
        self.cursor.all(predicate)
    }

    /// Takes the next element off the cursor, or None if it is exhausted.
    pub fn first(&mut self) -> Option<S::Elem> {
        self.cursor.next()
    }

    /// Takes the next element off the cursor, or `default` if it is exhausted.
    pub fn first_or(&mut self, default: S::Elem) -> S::Elem {
        self.cursor.next().unwrap_or(default)
    }

    /// Drains the cursor and returns its final element, or None if it was already exhausted.
    /// For set-built cursors the "final" element follows the set's internal iteration order,
    /// which this crate does not guarantee.
    pub fn last(&mut self) -> Option<S::Elem> {
        self.cursor.by_ref().last()
    }

    /// Drains the cursor and returns its final element, or `default` if it was already
    /// exhausted. The set-ordering caveat of [`last`](Queryable::last) applies.
    pub fn last_or(&mut self, default: S::Elem) -> S::Elem {
        self.last().unwrap_or(default)
    }

    /// Drains the cursor and returns how many elements it yielded.
    pub fn count(&mut self) -> usize {
        self.cursor.by_ref().count()
    }

    /// Drains the cursor, grouping elements by the field called `key_name`. Elements with no
    /// value for the key are skipped with a logged diagnostic. See
    /// [`group_items`](crate::group::group_items).
    pub fn group_by(&mut self, key_name: &str) -> Grouping<<S::Elem as Record>::Field, S::Elem>
    where
        S::Elem: Record,
        <S::Elem as Record>::Field: Hash + Eq + Clone,
    {
        group_items(self.cursor.by_ref(), key_name)
    }

    /// Drains the cursor, grouping elements by an arbitrary key selector. Elements whose key
    /// selector returns None are skipped with a logged diagnostic. See
    /// [`group_items_by_key`](crate::group::group_items_by_key).
    pub fn group_by_key<K, V, KF, VF>(
        &mut self,
        key_selector: KF,
        element_selector: VF,
    ) -> Grouping<K, V>
    where
        K: Hash + Eq + Clone,
        KF: FnMut(&S::Elem) -> Option<K>,
        VF: FnMut(S::Elem) -> V,
    {
        group_items_by_key(self.cursor.by_ref(), key_selector, element_selector)
    }

    /// Forks the query at the current cursor position.
    ///
    /// The remaining elements are snapshotted; `self` continues from the same position over one
    /// copy of the snapshot, and the returned Queryable reads an independent copy. Consuming
    /// either side afterwards cannot affect the other.
    ///
    /// # Examples
    /// ```
    /// use query_lib::query;
    ///
    /// let mut q = query(Vec::from([1, 2, 3]));
    /// assert_eq!(q.first(), Some(1));
    ///
    /// let mut fork = q.copy();
    /// assert_eq!(fork.to_list(), [2, 3]);
    /// assert_eq!(q.to_list(), [2, 3], "The original continues from where it was.");
    /// ```
    pub fn copy(&mut self) -> Queryable<S>
    where
        S::Elem: Clone,
    {
        let snapshot: Vec<S::Elem> = self.cursor.by_ref().collect();
        self.cursor = Box::new(snapshot.clone().into_iter());
        Queryable::with_cursor(snapshot.into_iter())
    }
}

impl<S: Sequence> Debug for Queryable<S>
where
    S::Elem: 'static,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // The cursor can't be inspected without consuming it.
        f.debug_struct("Queryable")
            .field("kind", &S::KIND)
            .finish_non_exhaustive()
    }
}
