//! Scoring oracle trait and permutation helpers.

/// Scores complete assignments of workers to tasks.
///
/// An assignment is a slice of length [`num_workers`](Self::num_workers)
/// where position `i` holds the task given to worker `i`. Higher scores
/// are better; the solver maximizes.
///
/// Implementations should be pure from the solver's point of view: the
/// same permutation always yields the same score. Any error returned by
/// [`calc_score`](Self::calc_score) aborts the current pass and is handed
/// back to the caller untouched.
///
/// # Examples
///
/// ```
/// use u_assign::assign::ScoringOracle;
/// use std::convert::Infallible;
///
/// struct Diagonal(usize);
///
/// impl ScoringOracle for Diagonal {
///     type Error = Infallible;
///
///     fn num_workers(&self) -> usize {
///         self.0
///     }
///
///     fn calc_score(&self, assignment: &[usize]) -> Result<i64, Infallible> {
///         Ok(assignment.iter().enumerate().filter(|&(w, &t)| w == t).count() as i64)
///     }
/// }
///
/// assert_eq!(Diagonal(3).calc_score(&[0, 2, 1]), Ok(1));
/// ```
pub trait ScoringOracle {
    /// Failure signal of the oracle.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Number of workers (and tasks).
    fn num_workers(&self) -> usize;

    /// Total value of a complete assignment.
    fn calc_score(&self, assignment: &[usize]) -> Result<i64, Self::Error>;
}

impl<O: ScoringOracle + ?Sized> ScoringOracle for &O {
    type Error = O::Error;

    fn num_workers(&self) -> usize {
        (**self).num_workers()
    }

    fn calc_score(&self, assignment: &[usize]) -> Result<i64, Self::Error> {
        (**self).calc_score(assignment)
    }
}

/// The identity permutation: worker `i` gets task `i`.
pub fn identity(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// Returns `true` if every value in `0..assignment.len()` appears exactly once.
pub fn is_permutation(assignment: &[usize]) -> bool {
    let n = assignment.len();
    let mut seen = vec![false; n];
    for &task in assignment {
        if task >= n || seen[task] {
            return false;
        }
        seen[task] = true;
    }
    true
}

/// Exchanges the tasks of two workers.
///
/// Swapping is the only move the solver applies, so a permutation stays a
/// permutation. `a == b` leaves the slice untouched.
///
/// # Panics
///
/// Panics if either index is out of bounds.
#[inline]
pub fn swap_workers(assignment: &mut [usize], a: usize, b: usize) {
    assignment.swap(a, b);
}
