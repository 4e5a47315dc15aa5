//! Annealing configuration.

use crate::error::{AssignError, AssignResult};

/// Which score decides whether the best assignment is replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BestUpdate {
    /// Compare the score the current assignment had at the top of the
    /// iteration, before the accept/reject decision, against the best score.
    /// On success the best becomes a copy of the post-decision current
    /// assignment, so a just-accepted worse candidate can replace the best
    /// under its predecessor's score. The best score is then not monotone.
    PreDecision,

    /// Compare the score of the post-decision current assignment. The best
    /// assignment is always the highest-scoring one actually held.
    #[default]
    Rescored,
}

/// Configuration for [`ConfigurationSolver`](super::ConfigurationSolver).
///
/// Temperature starts at `initial_temperature`, is multiplied by
/// `cooling_rate` after every iteration, and the pass ends as soon as it is
/// at or below `min_temperature`.
///
/// # Examples
///
/// ```
/// use u_assign::assign::{AnnealConfig, BestUpdate};
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(500.0)
///     .with_cooling_rate(0.99)
///     .with_best_update(BestUpdate::PreDecision)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Starting temperature of each pass.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1).
    pub cooling_rate: f64,

    /// Temperature floor. The loop runs while the temperature is above it.
    pub min_temperature: f64,

    /// Hard cap on iterations per pass. 0 = no limit.
    pub max_iterations: usize,

    /// Random seed for reproducibility. `None` draws one from system entropy.
    pub seed: Option<u64>,

    /// Redraw the second worker so the two swapped workers always differ.
    ///
    /// Off by default: coinciding draws are a wasted iteration that still
    /// cools the temperature.
    pub distinct_swaps: bool,

    /// Rule for replacing the best assignment.
    pub best_update: BestUpdate,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            cooling_rate: 0.95,
            min_temperature: 1.0,
            max_iterations: 0,
            seed: None,
            distinct_swaps: false,
            best_update: BestUpdate::default(),
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_distinct_swaps(mut self, distinct: bool) -> Self {
        self.distinct_swaps = distinct;
        self
    }

    pub fn with_best_update(mut self, rule: BestUpdate) -> Self {
        self.best_update = rule;
        self
    }

    /// Number of iterations one pass performs.
    ///
    /// This is the smallest `k` with `initial * rate^k <= floor`, i.e.
    /// `ceil(ln(floor / initial) / ln(rate))`, capped by `max_iterations`.
    pub fn expected_iterations(&self) -> usize {
        let steps = ((self.min_temperature / self.initial_temperature).ln()
            / self.cooling_rate.ln())
        .ceil()
        .max(0.0) as usize;
        if self.max_iterations > 0 {
            steps.min(self.max_iterations)
        } else {
            steps
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AssignResult<()> {
        let invalid = |msg: String| -> AssignResult<()> { Err(AssignError::InvalidConfig(msg)) };
        if !(self.initial_temperature > 0.0 && self.initial_temperature.is_finite()) {
            return invalid(format!(
                "initial_temperature must be positive and finite, got {}",
                self.initial_temperature
            ));
        }
        if !(self.min_temperature > 0.0) {
            return invalid(format!(
                "min_temperature must be positive, got {}",
                self.min_temperature
            ));
        }
        if self.min_temperature >= self.initial_temperature {
            return invalid("min_temperature must be less than initial_temperature".into());
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return invalid(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            ));
        }
        Ok(())
    }
}
