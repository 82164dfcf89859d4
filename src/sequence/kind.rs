use derive_more::{Display, IsVariant};

/// The semantic category of a wrapped container.
///
/// The kind is decided at construction time by which [`Sequence`](super::Sequence) implementation
/// the source container picks, and it is preserved across every eager transformation. It controls
/// two behavioral questions:
/// - whether duplicates survive (`List` and `Tuple` keep them, `Set` collapses them), and
/// - whether iteration order is meaningful (`Set` iteration order is *not* a guarantee of this
///   crate; see [`Enumerable::last`](crate::eager::Enumerable::last)).
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum SequenceKind {
    /// Ordered, growable, duplicates allowed. Backed by [`Vec`].
    #[display("list")]
    List,
    /// Unordered, unique elements. Backed by [`HashSet`](std::collections::HashSet).
    #[display("set")]
    Set,
    /// Ordered, fixed length, duplicates allowed. Backed by [`Tuple`](super::Tuple).
    #[display("tuple")]
    Tuple,
}

impl SequenceKind {
    /// Returns true if iteration order over this kind is defined by the container's contents
    /// rather than by hashing internals.
    pub const fn is_ordered(&self) -> bool {
        !matches!(self, SequenceKind::Set)
    }
}
