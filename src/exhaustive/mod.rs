//! Exhaustive minimal-cost partition search.
//!
//! Enumerates candidate partitions of the roster lazily, scores each one
//! against the pairwise history matrix, and selects one minimum-cost
//! partition uniformly at random among ties.
//!
//! # Algorithm
//!
//! 1. Generate candidates one at a time ([`PermutationPartitions`] or
//!    [`DistinctPartitions`])
//! 2. Score each candidate: sum of history entries over all intra-group
//!    pairs ([`score`])
//! 3. Track the running minimum and its ties in a single pass
//! 4. Return one tied candidate chosen uniformly at random ([`TieBreak`])
//!
//! # Candidate generation
//!
//! The default mode walks all `n!` permutations of the roster and slices
//! each into plan-sized runs, exactly as the original brute force did —
//! including its redundant candidates (reorderings within a group, or of
//! same-size groups, score identically). The opt-in
//! [`EnumerationMode::DistinctPartitions`] mode visits each distinct
//! set-partition once instead; see its docs for the tie-distribution
//! caveat.
//!
//! # Complexity
//!
//! `O(n! * g)` for `g` groups in the default mode. Exact search is only
//! tractable for single-digit rosters; for anything larger, supply a
//! cancellation flag to [`SearchRunner::run_with_cancel`].

mod config;
mod enumerate;
mod runner;
mod score;

pub use config::{EnumerationMode, SearchConfig, TieBreak};
pub use enumerate::{
    distinct_partitions, permutation_partitions, DistinctPartitions, PermutationPartitions,
};
pub use runner::{SearchResult, SearchRunner};
pub use score::{choose_one, find_best, score};
