//! A fluent query layer over plain Rust containers, in the style of C#'s LINQ.
//!
//! # Purpose
//! I kept writing the same `filter`/`map`/`collect` pipelines with the same re-collection
//! boilerplate at the end, so this crate wraps a container once and lets the rest of the query read
//! as a chain: `where`, `select`, `order_by`, `distinct`, `group_by` and friends. It is as much an
//! exercise in API design (generic containers, GATs, ownership of a cursor) as a tool I actually
//! use.
//!
//! # Method
//! There are two evaluators with the same operator surface:
//! - [`Enumerable`] is **eager**: every operator immediately materializes a new container of the
//!   same kind as the source. Wrap a [`Vec`], get [`Vec`]s all the way down.
//! - [`Queryable`] is **lazy**: operators compose a single-pass cursor and nothing runs until a
//!   terminal operation (`to_list`, `to_set`, `to_tuple`, ...) drains it. Lazy here means deferred
//!   *execution*, not deferred *memory*: `order_by` and `distinct` still have to materialize, they
//!   just do it mid-pipeline.
//!
//! The container kind (list-like, set-like, tuple-like) is part of the wrapper's type via the
//! [`Sequence`] trait, so "an `Enumerable` over a set" and "an `Enumerable` over a list" are
//! different types and transformations can't silently change the kind. Anything that isn't a
//! list/set/tuple-like container simply doesn't implement [`Sequence`], which moves the classic
//! "you can't query a string" runtime error to compile time.
//!
//! # Error Handling
//! The query surface itself has nothing to fail with: empty sequences produce [`Option`]s or empty
//! collections, over-long `skip`s produce empty results, and reading a lazy cursor past exhaustion
//! yields empty results by contract. The one place errors exist is *user* code: a fallible
//! selector goes through [`Enumerable::try_select`], and whatever error it returns comes back to
//! the caller unchanged. This crate never translates or swallows it.
//!
//! Grouping is the deliberate exception to fail-fast: records that lack the group key are skipped
//! with a `tracing` diagnostic rather than aborting the whole grouping pass.
//!
//! [`Enumerable`]: eager::Enumerable
//! [`Queryable`]: lazy::Queryable
//! [`Sequence`]: sequence::Sequence
//! [`Enumerable::try_select`]: eager::Enumerable::try_select

#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod group;
pub mod sequence;

#[cfg(feature = "eager")]
pub mod eager;
#[cfg(feature = "lazy")]
pub mod lazy;

#[cfg(feature = "eager")]
#[doc(inline)]
pub use eager::{Enumerable, extend};
#[cfg(feature = "lazy")]
#[doc(inline)]
pub use lazy::{Queryable, query};

#[doc(inline)]
pub use group::{Grouping, Record};
#[doc(inline)]
pub use sequence::{Sequence, SequenceKind, Tuple};
