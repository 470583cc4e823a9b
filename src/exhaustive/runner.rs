//! Search execution loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::{EnumerationMode, SearchConfig, TieBreak};
use super::enumerate::{distinct_partitions, permutation_partitions};
use super::score::{choose_one, score};
use crate::error::GroupingError;
use crate::types::{CostMatrix, Partition};

/// Result of one exhaustive search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The selected minimum-cost partition.
    pub best: Partition,

    /// Score of the selected partition.
    pub best_score: u64,

    /// Number of candidates examined.
    pub candidates: u64,

    /// Number of examined candidates tied at the final minimum.
    pub ties: u64,

    /// Whether the run was cancelled before examining every candidate.
    pub cancelled: bool,
}

/// Executes the exhaustive minimal-cost search.
pub struct SearchRunner;

impl SearchRunner {
    /// Searches every candidate partition of the roster behind `matrix`
    /// into groups of the planned `sizes`.
    ///
    /// # Errors
    ///
    /// Returns [`GroupingError::SizeSumMismatch`] when `sizes` does not
    /// sum to the roster size.
    pub fn run(
        matrix: &CostMatrix,
        sizes: &[usize],
        config: &SearchConfig,
    ) -> Result<SearchResult, GroupingError> {
        Self::run_with_cancel(matrix, sizes, config, None)
    }

    /// Runs the search with an optional cancellation flag.
    ///
    /// The flag is checked once per candidate, so a runaway factorial
    /// search can be aborted from another thread. A cancelled run returns
    /// the best partition seen so far with `cancelled` set; when no flag
    /// is supplied the semantics are identical to [`run`](Self::run).
    pub fn run_with_cancel(
        matrix: &CostMatrix,
        sizes: &[usize],
        config: &SearchConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SearchResult, GroupingError> {
        let indices: Vec<usize> = (0..matrix.len()).collect();
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        debug!(
            "searching groups of {:?} over {} students ({:?}, {:?})",
            sizes,
            matrix.len(),
            config.enumeration,
            config.tie_break
        );

        match config.enumeration {
            EnumerationMode::Permutations => {
                let candidates = permutation_partitions(indices, sizes.to_vec())?;
                Self::select(candidates, matrix, config.tie_break, cancel, &mut rng)
            }
            EnumerationMode::DistinctPartitions => {
                let candidates = distinct_partitions(indices, sizes.to_vec())?;
                Self::select(candidates, matrix, config.tie_break, cancel, &mut rng)
            }
        }
    }

    /// Single pass: track the running minimum and resolve ties as
    /// configured.
    fn select<I, R>(
        candidates: I,
        matrix: &CostMatrix,
        tie_break: TieBreak,
        cancel: Option<Arc<AtomicBool>>,
        rng: &mut R,
    ) -> Result<SearchResult, GroupingError>
    where
        I: Iterator<Item = Partition>,
        R: Rng,
    {
        let mut examined = 0u64;
        // Sentinel above any achievable score: fewer than n^2 pair terms,
        // each at most u32::MAX.
        let mut min_score = u64::MAX;
        let mut ties = 0u64;
        let mut cancelled = false;
        let mut winner: Option<Partition> = None;
        let mut tied: Vec<Partition> = Vec::new();

        for candidate in candidates {
            let candidate_score = score(&candidate, matrix);
            examined += 1;

            if candidate_score < min_score {
                min_score = candidate_score;
                ties = 1;
                debug!("new minimum {candidate_score} after {examined} candidates");
                match tie_break {
                    TieBreak::Reservoir => winner = Some(candidate),
                    TieBreak::CollectAll => {
                        tied.clear();
                        tied.push(candidate);
                    }
                }
            } else if candidate_score == min_score {
                ties += 1;
                match tie_break {
                    TieBreak::Reservoir => {
                        // Replace with probability 1/ties; after the full
                        // pass every tie is equally likely to be held.
                        if rng.random_range(0..ties) == 0 {
                            winner = Some(candidate);
                        }
                    }
                    TieBreak::CollectAll => tied.push(candidate),
                }
            }

            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
        }

        let best = match tie_break {
            TieBreak::Reservoir => winner.ok_or(GroupingError::NoCandidates)?,
            TieBreak::CollectAll => choose_one(&tied, rng)?,
        };

        debug!("examined {examined} candidates, minimum {min_score} ({ties} tied)");

        Ok(SearchResult {
            best,
            best_score: min_score,
            candidates: examined,
            ties,
            cancelled,
        })
    }
}
