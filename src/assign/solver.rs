//! Annealing search over worker/task permutations.
//!
//! # Algorithm
//!
//! Each call to [`ConfigurationSolver::run_search`] performs one pass:
//!
//! 1. Copy the solver's current assignment into a `current` and a
//!    `candidate` buffer; set `T = initial_temperature`.
//! 2. While `T > min_temperature`:
//!    a. Draw two workers uniformly (they may coincide) and swap their
//!       tasks in `candidate`.
//!    b. Score `current` and `candidate`.
//!    c. Accept if the candidate is strictly better, otherwise with
//!       probability `exp((candidate - current) / T)`. Accepting copies
//!       `candidate` into `current`.
//!    d. Replace the best assignment on a strictly higher score
//!       (see [`BestUpdate`]).
//!    e. `T *= cooling_rate`.
//! 3. Store `current` as the solver's assignment and return it.
//!
//! The candidate buffer is never reset on rejection; it keeps walking from
//! wherever the previous swaps left it.
//!
//! # Reference
//!
//! Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use super::config::{AnnealConfig, BestUpdate};
use super::types::{identity, swap_workers, ScoringOracle};
use crate::error::AssignResult;

/// Counters from the most recent [`run_search`](ConfigurationSolver::run_search) pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchStats {
    /// Loop iterations executed.
    pub iterations: usize,

    /// Moves accepted, improving or not.
    pub accepted_moves: usize,

    /// Moves accepted because the candidate scored strictly higher.
    pub improving_moves: usize,

    /// How many times the best assignment was replaced.
    pub best_updates: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Score of the best assignment after the pass.
    pub best_score: i64,

    /// Score of the assignment the pass returned.
    pub current_score: i64,
}

/// Simulated annealing solver for an `N x N` assignment problem.
///
/// Holds the current assignment and the best one seen so far. Both start
/// as the identity permutation and remain permutations of `0..N` after
/// every pass.
///
/// A solver is single-threaded state; share it across threads only behind
/// a lock that covers both [`run_search`](Self::run_search) and
/// [`best_configuration`](Self::best_configuration).
///
/// # Examples
///
/// ```
/// use u_assign::assign::{AnnealConfig, ConfigurationSolver, ScoringOracle, ValueMatrix};
///
/// let matrix = ValueMatrix::new(vec![
///     vec![1, 9, 2],
///     vec![8, 1, 1],
///     vec![1, 2, 7],
/// ])
/// .unwrap();
///
/// let config = AnnealConfig::default().with_seed(42);
/// let mut solver = ConfigurationSolver::with_config(&matrix, config).unwrap();
/// for _ in 0..5 {
///     solver.run_search().unwrap();
/// }
///
/// let best = solver.best_configuration();
/// assert!(matrix.calc_score(&best).unwrap() >= matrix.calc_score(&[0, 1, 2]).unwrap());
/// ```
pub struct ConfigurationSolver<O: ScoringOracle, R: Rng = StdRng> {
    oracle: O,
    config: AnnealConfig,
    rng: R,
    configuration: Vec<usize>,
    best: Vec<usize>,
    best_score: Option<i64>,
    last_stats: Option<SearchStats>,
}

impl<O: ScoringOracle> ConfigurationSolver<O, StdRng> {
    /// Creates a solver with the default configuration and an entropy seed.
    pub fn new(oracle: O) -> Self {
        let config = AnnealConfig::default();
        let rng = create_rng(&config);
        Self::build(oracle, config, rng)
    }

    /// Creates a solver whose RNG is seeded from `config.seed`.
    pub fn with_config(oracle: O, config: AnnealConfig) -> AssignResult<Self> {
        config.validate()?;
        let rng = create_rng(&config);
        Ok(Self::build(oracle, config, rng))
    }
}

impl<O: ScoringOracle, R: Rng> ConfigurationSolver<O, R> {
    /// Creates a solver driven by the given random source.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(oracle: O, config: AnnealConfig, rng: R) -> AssignResult<Self> {
        config.validate()?;
        Ok(Self::build(oracle, config, rng))
    }

    fn build(oracle: O, config: AnnealConfig, rng: R) -> Self {
        let configuration = identity(oracle.num_workers());
        let best = configuration.clone();
        Self {
            oracle,
            config,
            rng,
            configuration,
            best,
            best_score: None,
            last_stats: None,
        }
    }

    /// Runs one annealing pass and returns the assignment it ends on.
    ///
    /// The returned assignment also becomes the starting point of the next
    /// pass. Oracle errors abort the pass and leave the solver exactly as it
    /// was before the call.
    pub fn run_search(&mut self) -> Result<Vec<usize>, O::Error> {
        let n = self.configuration.len();
        let mut current = self.configuration.clone();
        let mut candidate = self.configuration.clone();
        let mut best = self.best.clone();
        let mut best_score = match self.best_score {
            Some(score) => score,
            None => self.oracle.calc_score(&best)?,
        };

        let mut temperature = self.config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut best_updates = 0usize;
        let mut exit_score = None;

        while temperature > self.config.min_temperature {
            if self.config.max_iterations > 0 && iterations >= self.config.max_iterations {
                break;
            }

            if n > 0 {
                let (a, b) = self.pick_workers(n);
                swap_workers(&mut candidate, a, b);
            }

            let current_score = self.oracle.calc_score(&current)?;
            let candidate_score = self.oracle.calc_score(&candidate)?;

            let accept = if candidate_score > current_score {
                improving_moves += 1;
                true
            } else {
                let probability =
                    acceptance_probability(current_score, candidate_score, temperature);
                self.rng.random_range(0.0..1.0) < probability
            };

            let held_score = if accept {
                current.clone_from(&candidate);
                accepted_moves += 1;
                candidate_score
            } else {
                current_score
            };
            exit_score = Some(held_score);

            let observed = match self.config.best_update {
                BestUpdate::PreDecision => current_score,
                BestUpdate::Rescored => held_score,
            };
            if observed > best_score {
                best.clone_from(&current);
                // The stored best is the post-decision assignment, so track
                // its own score rather than the one that triggered the update.
                best_score = held_score;
                best_updates += 1;
                trace!(iteration = iterations, temperature, best_score, "new best assignment");
            }

            temperature *= self.config.cooling_rate;
            iterations += 1;
        }

        let current_score = match exit_score {
            Some(score) => score,
            None => self.oracle.calc_score(&current)?,
        };

        debug!(
            workers = n,
            iterations,
            accepted_moves,
            improving_moves,
            best_updates,
            best_score,
            current_score,
            final_temperature = temperature,
            "annealing pass finished"
        );

        self.configuration.clone_from(&current);
        self.best = best;
        self.best_score = Some(best_score);
        self.last_stats = Some(SearchStats {
            iterations,
            accepted_moves,
            improving_moves,
            best_updates,
            final_temperature: temperature,
            best_score,
            current_score,
        });
        Ok(current)
    }

    /// Draws the two workers whose tasks get swapped.
    fn pick_workers(&mut self, n: usize) -> (usize, usize) {
        let a = self.rng.random_range(0..n);
        let b = if self.config.distinct_swaps && n > 1 {
            let b = self.rng.random_range(0..n - 1);
            if b >= a {
                b + 1
            } else {
                b
            }
        } else {
            self.rng.random_range(0..n)
        };
        (a, b)
    }

    /// Best assignment observed so far, as an owned copy.
    ///
    /// Before the first pass this is the identity permutation.
    pub fn best_configuration(&self) -> Vec<usize> {
        self.best.clone()
    }

    /// Score of [`best_configuration`](Self::best_configuration), known once a
    /// pass has run.
    pub fn best_score(&self) -> Option<i64> {
        self.best_score
    }

    /// Assignment the next pass will start from.
    pub fn configuration(&self) -> &[usize] {
        &self.configuration
    }

    pub fn num_workers(&self) -> usize {
        self.configuration.len()
    }

    pub fn config(&self) -> &AnnealConfig {
        &self.config
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn last_stats(&self) -> Option<&SearchStats> {
        self.last_stats.as_ref()
    }
}

/// Metropolis probability of moving to a candidate that is not better:
/// `exp((candidate - current) / T)`, in (0, 1] for `candidate <= current`.
fn acceptance_probability(current_score: i64, candidate_score: i64, temperature: f64) -> f64 {
    let delta = candidate_score as f64 - current_score as f64;
    (delta / temperature).exp()
}

fn create_rng(config: &AnnealConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    }
}
