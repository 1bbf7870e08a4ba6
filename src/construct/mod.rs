//! Constructive heuristics for initial knapsack solutions.
//!
//! Three anytime procedures build a feasible [`KnapsackSolution`](crate::knapsack::KnapsackSolution)
//! under a wall-clock budget:
//!
//! - [`greedy`]: deterministic, by descending value/weight ratio.
//! - [`random_feasible`]: uniform choice among items that still fit.
//! - [`greedy_randomized`]: GRASP semi-greedy construction with a
//!   restricted candidate list controlled by `alpha`.
//!
//! [`ConstructionRunner`] wraps them behind a [`ConstructionConfig`] and
//! reports timing and selection order.
//!
//! # References
//!
//! - Feo & Resende (1995), "Greedy Randomized Adaptive Search Procedures",
//!   *Journal of Global Optimization* 6, 109-133.

mod budget;
mod config;
mod heuristics;
mod runner;

pub use budget::Budget;
pub use config::{ConstructionConfig, ConstructionMethod};
pub use heuristics::{greedy, greedy_randomized, random_feasible};
pub use runner::{ConstructionResult, ConstructionRunner};
