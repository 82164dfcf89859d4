use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// An element whose fields can be read by name, for
/// [`group_by`](crate::eager::Enumerable::group_by)-style grouping.
///
/// This is the static replacement for dynamic attribute/key access: instead of reaching into an
/// arbitrary object with a string and catching whatever error falls out, a record states up front
/// which field type it can produce and answers `None` for names it doesn't carry. Grouping treats
/// `None` as "skip this element" (with a diagnostic), never as an error.
///
/// Implementations are provided for map-shaped records with string-like keys, which covers the
/// common "list of dicts" grouping case:
///
/// ```
/// use std::collections::HashMap;
/// use query_lib::Record;
///
/// let row = HashMap::from([("num", 1), ("other", 7)]);
/// assert_eq!(row.field("num"), Some(1));
/// assert_eq!(row.field("missing"), None);
/// ```
pub trait Record {
    /// The type a field read produces.
    type Field;

    /// Returns the value of the field called `name`, or None if this record has no such field.
    fn field(&self, name: &str) -> Option<Self::Field>;
}

impl<K, V> Record for HashMap<K, V>
where
    K: Borrow<str> + Hash + Eq,
    V: Clone,
{
    type Field = V;

    fn field(&self, name: &str) -> Option<V> {
        self.get(name).cloned()
    }
}

impl<K, V> Record for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: Clone,
{
    type Field = V;

    fn field(&self, name: &str) -> Option<V> {
        self.get(name).cloned()
    }
}
