//! The container abstraction that both evaluators are generic over.
//!
//! A [`Sequence`] is one of the three supported container kinds: list-like ([`Vec`]), set-like
//! ([`HashSet`](std::collections::HashSet)) or tuple-like ([`Tuple`]). The kind travels with the
//! wrapper as type information, so a query over a set stays a set through every transformation.
//! Types that aren't one of the three kinds (strings, maps, ...) don't implement [`Sequence`] and
//! therefore can't be wrapped at all.
//!
//! [`Sequence`] and [`Tuple`] are also re-exported at the crate root.

mod kind;
mod sequence;
mod tests;
mod tuple;

pub use kind::*;
pub use sequence::*;
pub use tuple::*;
