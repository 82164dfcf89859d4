use std::fmt::{self, Debug, Formatter};
use std::ops::Deref;
use std::vec;

/// A fixed-length ordered container, the tuple-like [`Sequence`](super::Sequence) kind.
///
/// A `Tuple` is a boxed slice with a name: it keeps order and duplicates like a list but exposes
/// no growth API, so a tuple-kind query can never gain elements it didn't start with. It derefs to
/// `[T]` for all the usual slice reads.
///
/// # Examples
/// ```
/// use query_lib::Tuple;
///
/// let tuple = Tuple::from([1, 2, 3]);
/// assert_eq!(tuple.len(), 3);
/// assert_eq!(tuple[1], 2);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Tuple<T>(pub(crate) Box<[T]>);

impl<T> Tuple<T> {
    /// Creates an empty Tuple.
    pub fn new() -> Tuple<T> {
        Tuple(Vec::new().into_boxed_slice())
    }
}

impl<T> Default for Tuple<T> {
    fn default() -> Self {
        Tuple::new()
    }
}

impl<T> Deref for Tuple<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> From<[T; N]> for Tuple<T> {
    fn from(value: [T; N]) -> Self {
        Tuple(Box::from(value))
    }
}

impl<T> From<Vec<T>> for Tuple<T> {
    fn from(value: Vec<T>) -> Self {
        Tuple(value.into_boxed_slice())
    }
}

impl<T> From<Box<[T]>> for Tuple<T> {
    fn from(value: Box<[T]>) -> Self {
        Tuple(value)
    }
}

impl<T> FromIterator<T> for Tuple<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Tuple(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Tuple<T> {
    type Item = T;

    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Tuple<T> {
    type Item = &'a T;

    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Debug> Debug for Tuple<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            item.fmt(f)?;
        }
        write!(f, ")")
    }
}
