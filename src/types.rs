//! Core data types shared across the planner and the search.

use crate::error::GroupingError;

/// One group: the roster indices of its members.
///
/// Order within a group carries no meaning; scoring only looks at
/// membership.
pub type Group = Vec<usize>;

/// A candidate grouping: an ordered sequence of groups whose sizes follow
/// the plan in order, with every roster index in exactly one group.
pub type Partition = Vec<Group>;

/// Pairwise co-grouping history for one roster.
///
/// Entry `(i, j)` counts how many times students `i` and `j` have been
/// grouped together before. Symmetric by convention; the search only ever
/// reads entries with `i != j` and never touches the diagonal, so neither
/// is enforced here. Produced by whatever owns the roster; read-only to
/// the optimizer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostMatrix {
    rows: Vec<Vec<u32>>,
}

impl CostMatrix {
    /// Builds a matrix from row data.
    ///
    /// # Errors
    ///
    /// Returns [`GroupingError::MalformedMatrix`] if any row's length
    /// differs from the number of rows.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, GroupingError> {
        let n = rows.len();
        for (row, entries) in rows.iter().enumerate() {
            if entries.len() != n {
                return Err(GroupingError::MalformedMatrix {
                    row,
                    len: entries.len(),
                    n,
                });
            }
        }
        Ok(Self { rows })
    }

    /// An all-zero `n`-by-`n` matrix: a roster with no grouping history.
    pub fn zeros(n: usize) -> Self {
        Self {
            rows: vec![vec![0; n]; n],
        }
    }

    /// Roster size.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Co-grouping count for the pair `(a, b)`.
    ///
    /// # Panics
    ///
    /// Panics if `a` or `b` is not in `[0, len)`.
    pub fn cost(&self, a: usize, b: usize) -> u32 {
        self.rows[a][b]
    }
}
