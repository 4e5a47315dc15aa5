//! Simulated annealing for the linear assignment problem.
//!
//! `N` workers are matched one-to-one with `N` tasks so that the total
//! value reported by a [`ScoringOracle`] is as high as possible. The search
//! walks the space of permutations by swapping the tasks of two workers and
//! accepts worsening swaps with the Metropolis probability under a
//! geometric cooling schedule.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

mod config;
mod matrix;
mod solver;
mod types;

pub use config::{AnnealConfig, BestUpdate};
pub use matrix::ValueMatrix;
pub use solver::{ConfigurationSolver, SearchStats};
pub use types::{identity, is_permutation, swap_workers, ScoringOracle};
