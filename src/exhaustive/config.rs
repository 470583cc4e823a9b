//! Search configuration.

/// How candidate partitions are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumerationMode {
    /// Every permutation of the roster, sliced into plan-sized runs.
    ///
    /// Yields all `n!` candidates, counting reorderings within a group
    /// and reorderings of same-size groups as separate candidates even
    /// though their membership is identical. This reproduces the original
    /// brute-force search exactly.
    Permutations,

    /// Every distinct set-partition exactly once.
    ///
    /// Divides the candidate count by the within-group and same-size-group
    /// symmetries (8 students into groups of `[3, 3, 2]`: 280 candidates
    /// instead of 40320). Note that uniform tie-breaking over distinct
    /// partitions is a *different distribution* than uniform over
    /// permutations — under [`Permutations`](Self::Permutations), larger
    /// groups contribute more symmetric duplicates and so win ties more
    /// often.
    DistinctPartitions,
}

impl Default for EnumerationMode {
    fn default() -> Self {
        EnumerationMode::Permutations
    }
}

/// How one winner is selected among tied minimum-cost candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// Keep a single running winner, replacing it with probability `1/k`
    /// on the k-th tie. Uniform over all ties in O(1) space.
    Reservoir,

    /// Collect every tied candidate, then pick one at the end.
    ///
    /// Same distribution as [`Reservoir`](Self::Reservoir), but memory
    /// grows with the tie count — which for an all-zero history matrix is
    /// the entire candidate space.
    CollectAll,
}

impl Default for TieBreak {
    fn default() -> Self {
        TieBreak::Reservoir
    }
}

/// Configuration for the exhaustive search.
///
/// # Examples
///
/// ```
/// use groupwise::exhaustive::{EnumerationMode, SearchConfig, TieBreak};
///
/// let config = SearchConfig::default()
///     .with_enumeration(EnumerationMode::DistinctPartitions)
///     .with_tie_break(TieBreak::CollectAll)
///     .with_seed(42);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Candidate generation mode.
    pub enumeration: EnumerationMode,

    /// Tie-selection strategy.
    pub tie_break: TieBreak,

    /// Random seed for tie-breaking reproducibility (None for random).
    pub seed: Option<u64>,
}

impl SearchConfig {
    /// Sets the candidate generation mode.
    pub fn with_enumeration(mut self, mode: EnumerationMode) -> Self {
        self.enumeration = mode;
        self
    }

    /// Sets the tie-selection strategy.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
