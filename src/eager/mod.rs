//! The eager evaluator. Every operator on an [`Enumerable`] runs immediately and materializes a
//! new container of the same kind as the source.
//!
//! Eager chains can be re-queried as often as you like (nothing is consumed), at the cost of one
//! full materialization per operator. For long chains over large sources, prefer the lazy
//! [`Queryable`](crate::lazy::Queryable).
//!
//! [`Enumerable`] and [`extend`] are also re-exported at the crate root.

mod enumerable;
mod iter;
mod tests;

pub use enumerable::*;
