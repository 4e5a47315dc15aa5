//! Error types.

use thiserror::Error;

/// Errors raised while building a solver or its reference oracle.
///
/// Failures of a user-supplied [`ScoringOracle`](crate::assign::ScoringOracle)
/// are not wrapped here; they surface through the oracle's own error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssignError {
    #[error("invalid annealing configuration: {0}")]
    InvalidConfig(String),

    #[error("value matrix must be square: row {row} has {len} entries, expected {expected}")]
    NonSquareMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("score of assignment {assignment:?} overflows i64")]
    ScoreOverflow { assignment: Vec<usize> },

    #[error("assignment is not a permutation of 0..{expected}: {assignment:?}")]
    InvalidAssignment {
        assignment: Vec<usize>,
        expected: usize,
    },
}

pub type AssignResult<T> = Result<T, AssignError>;
