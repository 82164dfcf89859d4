//! Grouping: building an insertion-ordered mapping from a group key to the elements that share it.
//!
//! Both evaluators delegate their `group_by`/`group_by_key` operations to the free helpers here,
//! which build a [`Grouping`] in a single linear pass. Grouping is partial-failure tolerant:
//! records with no value for the group key are skipped with a logged diagnostic instead of
//! aborting the pass.
//!
//! [`Grouping`] and [`Record`] are also re-exported at the crate root.

mod grouping;
mod helpers;
mod iter;
mod record;
mod tests;

pub use grouping::*;
pub use helpers::*;
pub use iter::*;
pub use record::*;
