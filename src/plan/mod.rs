//! Group-size planning.
//!
//! Turns a class size and a target — either a desired group size or a
//! desired group count — into an ordered list of group sizes summing to
//! the class size, with any remainder distributed.
//!
//! Two divergent remainder policies for by-size planning survive from the
//! system's history and behave materially differently (a class of 8 with
//! target size 3 plans as `[4, 4]` under one and `[3, 3, 2]` under the
//! other), so both are exposed as [`RemainderPolicy`] variants and
//! callers must name one explicitly.

mod sizes;

pub use sizes::{by_count, by_size, RemainderPolicy};
