//! Local-search framework with incremental evaluation.
//!
//! Provides the building blocks a local-search driver (hill climbing,
//! simulated annealing, tabu search, ...) needs, without the driver itself:
//!
//! - **Model**: the generic [`Solution`](model::Solution) /
//!   [`Evaluator`](model::Evaluator) / [`Movement`](model::Movement) /
//!   [`MovementGenerator`](model::MovementGenerator) contract. Solutions cache
//!   their objective and movements keep that cache valid in O(1) per change.
//! - **Knapsack**: the 0/1 knapsack instance of the contract, with pairwise
//!   bit-flip, interval bit-flip and interval inversion neighborhoods.
//!   Infeasibility is a sentinel objective ([`PUNISHMENT`](knapsack::PUNISHMENT)),
//!   never an error.
//! - **Construction**: greedy, random-feasible and GRASP semi-greedy
//!   heuristics that build initial solutions under a wall-clock budget.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use u_localsearch::construct::greedy;
//! use u_localsearch::knapsack::{FlipPairGenerator, KnapsackEvaluator};
//! use u_localsearch::model::{Evaluator, Movement, MovementGenerator};
//!
//! let evaluator = KnapsackEvaluator::new(10, vec![10, 10, 12, 18], vec![2, 4, 6, 9]);
//! let mut solution = greedy(&evaluator, Duration::from_secs(1));
//! assert_eq!(evaluator.get_evaluation(&mut solution), 20);
//!
//! // One best-improvement step over the pairwise flip neighborhood.
//! let generator = FlipPairGenerator::for_evaluator(&evaluator);
//! let best = generator
//!     .get_all(&solution)
//!     .into_iter()
//!     .max_by_key(|m| m.delta(&solution))
//!     .unwrap();
//! if best.delta(&solution) > 0 {
//!     best.apply(&mut solution);
//! }
//! assert_eq!(evaluator.get_evaluation(&mut solution), 22);
//! ```
//!
//! # Architecture
//!
//! Single-threaded and in-memory. Input parsing, reporting and the search
//! loop belong to callers.

pub mod construct;
pub mod error;
pub mod knapsack;
pub mod model;

pub use error::{Error, Result};
