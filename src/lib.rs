//! Minimal-repeat group assignment for course rosters.
//!
//! Given the pairwise co-grouping history of a roster, this crate plans
//! group sizes, enumerates every candidate grouping, scores each one by
//! how often its members have already worked together, and returns a
//! minimum-cost grouping chosen uniformly at random among ties.
//!
//! - **`plan`**: Turns a class size and a target (group size or group
//!   count) into an ordered list of group sizes, with both historical
//!   remainder policies exposed.
//! - **`exhaustive`**: The brute-force search — lazy candidate
//!   enumeration, pairwise scoring, and tie-aware selection with an
//!   injectable random source.
//! - **`assign`**: One-call orchestration composing the planner and the
//!   search.
//! - **`types`** / **`error`**: The cost matrix, partition aliases, and
//!   the input-contract error taxonomy.
//!
//! The crate is a pure library: roster persistence, name mapping, and any
//! user interface belong to the caller.
//!
//! # Complexity
//!
//! The default search walks all `n!` permutations of the roster, so it is
//! `O(n! * g)` for `g` groups. This is a deliberate ceiling, not an
//! oversight: the search is exact and only meant for single-digit class
//! sizes. See [`exhaustive::EnumerationMode`] for the symmetry-reduced
//! alternative.
//!
//! # Examples
//!
//! ```
//! use groupwise::assign::{make_groups, GroupTarget};
//! use groupwise::types::CostMatrix;
//!
//! // Four students; 0 and 1 have been grouped together before.
//! let mut rows = vec![vec![0u32; 4]; 4];
//! rows[0][1] = 5;
//! rows[1][0] = 5;
//! let matrix = CostMatrix::from_rows(rows).unwrap();
//!
//! let groups = make_groups(&matrix, GroupTarget::ByCount { count: 2 }).unwrap();
//! assert_eq!(groups.len(), 2);
//! // A zero-cost grouping exists, so 0 and 1 end up separated.
//! assert!(!groups.iter().any(|g| g.contains(&0) && g.contains(&1)));
//! ```

pub mod assign;
pub mod error;
pub mod exhaustive;
pub mod plan;
pub mod types;
