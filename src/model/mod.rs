//! Generic local-search contract.
//!
//! The three central abstractions — [`Solution`], [`Evaluator`] and
//! [`Movement`] — define how a search procedure talks to a problem
//! without knowing its encoding:
//!
//! - A **solution** owns its encoding plus an [`EvaluationCache`].
//! - An **evaluator** computes the objective from scratch and serves it
//!   through the cache, applying any feasibility rule on top.
//! - A **movement** mutates a solution in place and can estimate its own
//!   effect on the objective ([`Movement::delta`]) without mutation.
//! - A **movement generator** enumerates movements eagerly, samples one at
//!   random, or walks the neighborhood lazily with a resumable cursor.
//!
//! # Maximization
//!
//! Objectives are [`Objective`] (`i64`) and larger is better. Infeasible
//! states are reported as a problem-specific sentinel that compares worse
//! than every feasible value, so comparison-based search needs no separate
//! feasibility predicate.

mod evaluator;
mod movement;
mod solution;

pub use evaluator::Evaluator;
pub use movement::{Movement, MovementGenerator};
pub use solution::{EvaluationCache, Objective, Solution};
