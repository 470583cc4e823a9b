//! One-call orchestration: plan group sizes, search every candidate,
//! return a winning partition.

use crate::error::GroupingError;
use crate::exhaustive::{SearchConfig, SearchResult, SearchRunner};
use crate::plan::{self, RemainderPolicy};
use crate::types::{CostMatrix, Partition};

/// What the caller is asking the planner for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GroupTarget {
    /// Groups of roughly this size, with an explicit remainder policy.
    BySize {
        /// Desired group size.
        size: usize,
        /// How leftover students are placed.
        policy: RemainderPolicy,
    },

    /// Exactly this many groups, sizes differing by at most one.
    ByCount {
        /// Desired number of groups.
        count: usize,
    },
}

impl GroupTarget {
    /// Produces the group-size plan for a roster of `class_size`.
    ///
    /// # Errors
    ///
    /// Returns [`GroupingError::TargetOutOfRange`] when the target is
    /// zero or exceeds the class size.
    pub fn plan(self, class_size: usize) -> Result<Vec<usize>, GroupingError> {
        match self {
            GroupTarget::BySize { size, policy } => plan::by_size(class_size, size, policy),
            GroupTarget::ByCount { count } => plan::by_count(class_size, count),
        }
    }
}

/// Builds minimum-cost groups for the roster behind `matrix`.
///
/// Equivalent to [`make_groups_with`] under the default [`SearchConfig`]:
/// permutation enumeration, reservoir tie-breaking, unseeded RNG. The
/// roster size is taken from the matrix.
///
/// The search examines every candidate, so this is `O(n! * g)` — only
/// tractable for single-digit class sizes.
///
/// # Errors
///
/// Returns [`GroupingError::TargetOutOfRange`] for a target outside
/// `[1, n]`.
///
/// # Examples
///
/// ```
/// use groupwise::assign::{make_groups, GroupTarget};
/// use groupwise::plan::RemainderPolicy;
/// use groupwise::types::CostMatrix;
///
/// let matrix = CostMatrix::zeros(8);
/// let target = GroupTarget::BySize {
///     size: 3,
///     policy: RemainderPolicy::SplitOff,
/// };
/// let groups = make_groups(&matrix, target).unwrap();
/// let sizes: Vec<usize> = groups.iter().map(Vec::len).collect();
/// assert_eq!(sizes, vec![3, 3, 2]);
/// ```
pub fn make_groups(matrix: &CostMatrix, target: GroupTarget) -> Result<Partition, GroupingError> {
    make_groups_with(matrix, target, &SearchConfig::default()).map(|result| result.best)
}

/// As [`make_groups`], with explicit search configuration, returning the
/// full [`SearchResult`].
pub fn make_groups_with(
    matrix: &CostMatrix,
    target: GroupTarget,
    config: &SearchConfig,
) -> Result<SearchResult, GroupingError> {
    let sizes = target.plan(matrix.len())?;
    SearchRunner::run(matrix, &sizes, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exhaustive::EnumerationMode;

    #[test]
    fn test_make_groups_by_count() {
        let matrix = CostMatrix::zeros(6);
        let groups = make_groups(&matrix, GroupTarget::ByCount { count: 3 }).unwrap();
        let sizes: Vec<usize> = groups.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![2, 2, 2]);
    }

    #[test]
    fn test_make_groups_by_size_policies_diverge() {
        let matrix = CostMatrix::zeros(8);

        let distribute = make_groups(
            &matrix,
            GroupTarget::BySize {
                size: 3,
                policy: RemainderPolicy::Distribute,
            },
        )
        .unwrap();
        assert_eq!(distribute.iter().map(Vec::len).collect::<Vec<_>>(), vec![4, 4]);

        let split_off = make_groups(
            &matrix,
            GroupTarget::BySize {
                size: 3,
                policy: RemainderPolicy::SplitOff,
            },
        )
        .unwrap();
        assert_eq!(
            split_off.iter().map(Vec::len).collect::<Vec<_>>(),
            vec![3, 3, 2]
        );
    }

    #[test]
    fn test_make_groups_avoids_repeat_pairing() {
        let mut rows = vec![vec![0u32; 4]; 4];
        rows[0][1] = 5;
        rows[1][0] = 5;
        let matrix = CostMatrix::from_rows(rows).unwrap();

        for seed in 0..10 {
            let config = SearchConfig::default().with_seed(seed);
            let result =
                make_groups_with(&matrix, GroupTarget::ByCount { count: 2 }, &config).unwrap();
            assert_eq!(result.best_score, 0);
            assert!(!result
                .best
                .iter()
                .any(|g| g.contains(&0) && g.contains(&1)));
        }
    }

    #[test]
    fn test_make_groups_with_distinct_mode() {
        let matrix = CostMatrix::zeros(6);
        let config = SearchConfig::default()
            .with_enumeration(EnumerationMode::DistinctPartitions)
            .with_seed(5);
        let result =
            make_groups_with(&matrix, GroupTarget::ByCount { count: 3 }, &config).unwrap();
        // 6! / (2!^3 * 3!) distinct ways to form three pairs.
        assert_eq!(result.candidates, 15);
        assert_eq!(result.best_score, 0);
    }

    #[test]
    fn test_make_groups_rejects_empty_roster() {
        let matrix = CostMatrix::zeros(0);
        assert_eq!(
            make_groups(&matrix, GroupTarget::ByCount { count: 2 }).unwrap_err(),
            GroupingError::TargetOutOfRange {
                target: 2,
                class_size: 0
            }
        );
    }

    #[test]
    fn test_make_groups_rejects_oversize_target() {
        let matrix = CostMatrix::zeros(3);
        let target = GroupTarget::BySize {
            size: 4,
            policy: RemainderPolicy::Distribute,
        };
        assert!(make_groups(&matrix, target).is_err());
    }
}
