//! The lazy evaluator. A [`Queryable`] owns a single-pass cursor over the source; chaining
//! operators stack onto the cursor without running anything, and terminal operations
//! (`to_list`, `to_set`, `to_tuple`, ...) drain it.
//!
//! A drained cursor stays drained: calling a second terminal yields an empty result, never an
//! error. That is a contract of this module, not an accident - it mirrors how a consumed iterator
//! behaves, and makes "did I already run this query?" a question with a harmless answer.
//!
//! [`Queryable`] and [`query`] are also re-exported at the crate root.

mod queryable;

pub use queryable::*;
