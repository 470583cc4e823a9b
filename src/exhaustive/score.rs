//! Partition scoring and minimum-cost selection.

use itertools::Itertools;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::error::GroupingError;
use crate::types::{CostMatrix, Group, Partition};

/// Total historical cost of a candidate: for every group, the sum of
/// matrix entries over all unordered member pairs.
///
/// Zero exactly when no two students sharing a group have ever been
/// grouped together. Pure in both arguments; diagonal entries are never
/// read.
pub fn score(partition: &[Group], matrix: &CostMatrix) -> u64 {
    partition
        .iter()
        .map(|group| {
            group
                .iter()
                .tuple_combinations()
                .map(|(&a, &b)| u64::from(matrix.cost(a, b)))
                .sum::<u64>()
        })
        .sum()
}

/// Single pass over `candidates`, keeping every partition tied at the
/// running minimum score, in first-seen order.
///
/// The running minimum starts at `u64::MAX`, which exceeds any achievable
/// score: a partition contributes fewer than `n^2` pair terms, each at
/// most `u32::MAX`.
///
/// Memory grows with the number of ties — for an all-zero matrix that is
/// every candidate. Callers that only need one winner should prefer the
/// reservoir selection in [`SearchRunner`](super::SearchRunner).
pub fn find_best<I>(candidates: I, matrix: &CostMatrix) -> Vec<Partition>
where
    I: IntoIterator<Item = Partition>,
{
    let mut best: Vec<Partition> = Vec::new();
    let mut min_score = u64::MAX;
    for candidate in candidates {
        let candidate_score = score(&candidate, matrix);
        if candidate_score < min_score {
            min_score = candidate_score;
            best.clear();
            best.push(candidate);
        } else if candidate_score == min_score {
            best.push(candidate);
        }
    }
    best
}

/// Picks one partition uniformly at random from `best`.
///
/// The random source is injected so tie-breaking is reproducible under a
/// seeded generator.
///
/// # Errors
///
/// Returns [`GroupingError::NoCandidates`] when `best` is empty — which
/// for output of [`find_best`] means the candidate sequence itself was
/// empty.
pub fn choose_one<R: Rng + ?Sized>(
    best: &[Partition],
    rng: &mut R,
) -> Result<Partition, GroupingError> {
    best.choose(rng).cloned().ok_or(GroupingError::NoCandidates)
}
