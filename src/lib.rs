//! Simulated annealing solver for square linear assignment problems.
//!
//! Given `N` workers, `N` tasks and a scoring oracle that values a complete
//! assignment, [`assign::ConfigurationSolver`] searches for the permutation
//! with the highest total value. Exhaustive search over all `N!`
//! permutations is replaced by a bounded annealing pass that can be repeated
//! as often as the caller likes; the best permutation seen across all passes
//! is kept.
//!
//! - [`assign::ScoringOracle`]: the scoring interface the caller provides.
//! - [`assign::ValueMatrix`]: a ready-made oracle backed by an `N x N` table.
//! - [`assign::AnnealConfig`]: temperature schedule, seeding and best-update rule.
//!
//! The solver logs through `tracing` and installs no subscriber of its own.

pub mod assign;
pub mod error;

pub use error::{AssignError, AssignResult};
