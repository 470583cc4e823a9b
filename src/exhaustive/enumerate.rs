//! Lazy candidate-partition generation.
//!
//! Both generators are pull-based, single-pass iterators: each candidate
//! is built, handed to the caller, and dropped before the next one is
//! produced. Nothing close to the full candidate space is ever resident.

use itertools::structs::{Combinations, Permutations};
use itertools::Itertools;

use crate::error::GroupingError;
use crate::types::Partition;

/// All `n!` candidate partitions, one per permutation of `indices`.
///
/// Each permutation is sliced sequentially into consecutive runs whose
/// lengths follow `sizes` in order. Permutations that merely reorder a
/// group's members, or swap same-size groups, are distinct candidates
/// here — intentional fidelity to the original brute force. Use
/// [`distinct_partitions`] for the symmetry-reduced space.
///
/// # Errors
///
/// Returns [`GroupingError::SizeSumMismatch`] when `sizes` does not sum
/// to `indices.len()`.
///
/// # Examples
///
/// ```
/// use groupwise::exhaustive::permutation_partitions;
///
/// let candidates = permutation_partitions(vec![0, 1, 2, 3], vec![2, 2]).unwrap();
/// assert_eq!(candidates.count(), 24); // 4!
/// ```
pub fn permutation_partitions(
    indices: Vec<usize>,
    sizes: Vec<usize>,
) -> Result<PermutationPartitions, GroupingError> {
    check_plan(&indices, &sizes)?;
    let n = indices.len();
    Ok(PermutationPartitions {
        perms: indices.into_iter().permutations(n),
        sizes,
    })
}

/// Iterator over permutation-derived partitions. See
/// [`permutation_partitions`].
#[derive(Debug)]
pub struct PermutationPartitions {
    perms: Permutations<std::vec::IntoIter<usize>>,
    sizes: Vec<usize>,
}

impl Iterator for PermutationPartitions {
    type Item = Partition;

    fn next(&mut self) -> Option<Partition> {
        self.perms
            .next()
            .map(|perm| slice_into_groups(&perm, &self.sizes))
    }
}

/// Every distinct set-partition of `indices` into groups of the planned
/// sizes, each exactly once.
///
/// Groups are emitted in plan order with members ascending, and runs of
/// equal-size groups are canonicalized by ascending minimum member, so
/// the candidate count is `n!` divided by all within-group and
/// same-size-group symmetries.
///
/// # Errors
///
/// Returns [`GroupingError::SizeSumMismatch`] when `sizes` does not sum
/// to `indices.len()`.
///
/// # Examples
///
/// ```
/// use groupwise::exhaustive::distinct_partitions;
///
/// let candidates = distinct_partitions(vec![0, 1, 2, 3], vec![2, 2]).unwrap();
/// // {01|23}, {02|13}, {03|12}
/// assert_eq!(candidates.count(), 3);
/// ```
pub fn distinct_partitions(
    indices: Vec<usize>,
    sizes: Vec<usize>,
) -> Result<DistinctPartitions, GroupingError> {
    check_plan(&indices, &sizes)?;
    let mut pool = indices;
    pool.sort_unstable();
    Ok(DistinctPartitions {
        sizes,
        stack: Vec::new(),
        start_pool: pool,
        exhausted: false,
    })
}

/// Iterator over distinct set-partitions. See [`distinct_partitions`].
pub struct DistinctPartitions {
    sizes: Vec<usize>,
    /// One frame per planned group, deepest last.
    stack: Vec<Frame>,
    start_pool: Vec<usize>,
    exhausted: bool,
}

struct Frame {
    /// Member choices for this group, drawn from `pool`.
    combos: Combinations<std::vec::IntoIter<usize>>,
    /// Indices still unassigned when this frame was opened, ascending.
    pool: Vec<usize>,
    /// The currently selected group.
    group: Vec<usize>,
}

impl Frame {
    fn new(pool: Vec<usize>, size: usize) -> Self {
        Self {
            combos: pool.clone().into_iter().combinations(size),
            pool,
            group: Vec::new(),
        }
    }
}

impl Iterator for DistinctPartitions {
    type Item = Partition;

    fn next(&mut self) -> Option<Partition> {
        if self.exhausted {
            return None;
        }

        // A roster of zero students has exactly one (empty) partition.
        if self.sizes.is_empty() {
            self.exhausted = true;
            return Some(Vec::new());
        }

        if self.stack.is_empty() {
            self.stack
                .push(Frame::new(self.start_pool.clone(), self.sizes[0]));
        }

        loop {
            let depth = self.stack.len() - 1;
            match self.stack[depth].combos.next() {
                None => {
                    self.stack.pop();
                    if self.stack.is_empty() {
                        self.exhausted = true;
                        return None;
                    }
                }
                Some(group) => {
                    // Canonical form: within a run of equal-size groups,
                    // minimum members must ascend.
                    if depth > 0
                        && self.sizes[depth] == self.sizes[depth - 1]
                        && group.first() < self.stack[depth - 1].group.first()
                    {
                        continue;
                    }
                    self.stack[depth].group = group;
                    if depth + 1 == self.sizes.len() {
                        return Some(self.stack.iter().map(|f| f.group.clone()).collect());
                    }
                    let pool = remaining(&self.stack[depth].pool, &self.stack[depth].group);
                    self.stack.push(Frame::new(pool, self.sizes[depth + 1]));
                }
            }
        }
    }
}

/// Elements of `pool` not taken by `group`. Both ascending.
fn remaining(pool: &[usize], group: &[usize]) -> Vec<usize> {
    pool.iter()
        .filter(|index| !group.contains(index))
        .copied()
        .collect()
}

/// Slices a permutation into consecutive runs of the planned sizes.
fn slice_into_groups(perm: &[usize], sizes: &[usize]) -> Partition {
    let mut groups = Vec::with_capacity(sizes.len());
    let mut rest = perm;
    for &size in sizes {
        let (group, tail) = rest.split_at(size);
        groups.push(group.to_vec());
        rest = tail;
    }
    groups
}

fn check_plan(indices: &[usize], sizes: &[usize]) -> Result<(), GroupingError> {
    let sum: usize = sizes.iter().sum();
    if sum != indices.len() {
        return Err(GroupingError::SizeSumMismatch {
            sum,
            expected: indices.len(),
        });
    }
    Ok(())
}
