//! Square value matrix used as a ready-made scoring oracle.

use std::ops::RangeInclusive;

use rand::Rng;

use super::types::{is_permutation, ScoringOracle};
use crate::error::{AssignError, AssignResult};

/// `N x N` table of worker/task values.
///
/// `value(w, t)` is what worker `w` contributes when given task `t`. The
/// score of an assignment is the sum of the selected entries; a sum that
/// leaves the `i64` range is reported as [`AssignError::ScoreOverflow`].
///
/// # Examples
///
/// ```
/// use u_assign::assign::{ScoringOracle, ValueMatrix};
///
/// let m = ValueMatrix::new(vec![vec![4, 1], vec![2, 3]]).unwrap();
/// assert_eq!(m.calc_score(&[0, 1]), Ok(7));
/// assert_eq!(m.calc_score(&[1, 0]), Ok(3));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueMatrix {
    values: Vec<Vec<i64>>,
}

impl ValueMatrix {
    /// Builds a matrix from its rows (one per worker).
    pub fn new(values: Vec<Vec<i64>>) -> AssignResult<Self> {
        let n = values.len();
        if let Some((row, r)) = values.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(AssignError::NonSquareMatrix {
                row,
                len: r.len(),
                expected: n,
            });
        }
        Ok(Self { values })
    }

    /// Fills an `n x n` matrix with values drawn uniformly from `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` is empty.
    pub fn random<R: Rng>(n: usize, range: RangeInclusive<i64>, rng: &mut R) -> Self {
        let values = (0..n)
            .map(|_| (0..n).map(|_| rng.random_range(range.clone())).collect())
            .collect();
        Self { values }
    }

    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Value of giving `task` to `worker`.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= size()`.
    pub fn value(&self, worker: usize, task: usize) -> i64 {
        self.values[worker][task]
    }

    pub fn rows(&self) -> &[Vec<i64>] {
        &self.values
    }
}

impl ScoringOracle for ValueMatrix {
    type Error = AssignError;

    fn num_workers(&self) -> usize {
        self.size()
    }

    fn calc_score(&self, assignment: &[usize]) -> Result<i64, AssignError> {
        if assignment.len() != self.size() || !is_permutation(assignment) {
            return Err(AssignError::InvalidAssignment {
                assignment: assignment.to_vec(),
                expected: self.size(),
            });
        }
        assignment
            .iter()
            .enumerate()
            .try_fold(0i64, |total, (worker, &task)| {
                total.checked_add(self.values[worker][task])
            })
            .ok_or_else(|| AssignError::ScoreOverflow {
                assignment: assignment.to_vec(),
            })
    }
}
