//! Construction runner.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::Result;
use crate::knapsack::{KnapsackEvaluator, KnapsackSolution};
use crate::model::{Evaluator, Objective};

use super::budget::Budget;
use super::config::{ConstructionConfig, ConstructionMethod};
use super::heuristics::{build_greedy, build_greedy_randomized, build_random};

/// Result of a construction run.
#[derive(Debug, Clone)]
pub struct ConstructionResult {
    /// The constructed solution, already evaluated.
    pub solution: KnapsackSolution,

    /// Feasibility-adjusted objective of the solution.
    pub objective: Objective,

    /// Total weight of the selected items.
    pub weight: i64,

    /// Items in the order they were selected.
    pub picked: Vec<usize>,

    /// Wall-clock time spent.
    pub elapsed: Duration,

    /// Whether the time budget cut construction short.
    pub timed_out: bool,
}

/// Runs a configured constructive heuristic.
pub struct ConstructionRunner;

impl ConstructionRunner {
    /// Builds an initial solution for `evaluator` as described by `config`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_localsearch::construct::{ConstructionConfig, ConstructionRunner};
    /// use u_localsearch::knapsack::KnapsackEvaluator;
    ///
    /// let evaluator = KnapsackEvaluator::new(10, vec![10, 10, 12, 18], vec![2, 4, 6, 9]);
    /// let result = ConstructionRunner::run(&evaluator, &ConstructionConfig::default()).unwrap();
    /// assert_eq!(result.objective, 20);
    /// assert_eq!(result.weight, 6);
    /// ```
    #[tracing::instrument(level = "debug", skip_all, fields(items = evaluator.len(), method = ?config.method))]
    pub fn run(
        evaluator: &KnapsackEvaluator,
        config: &ConstructionConfig,
    ) -> Result<ConstructionResult> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let budget = Budget::start(config.time_limit);
        let run = match config.method {
            ConstructionMethod::Greedy => build_greedy(evaluator, &budget),
            ConstructionMethod::Random => build_random(evaluator, &budget, &mut rng),
            ConstructionMethod::GreedyRandomized { alpha } => {
                build_greedy_randomized(evaluator, alpha, &budget, &mut rng)
            }
        };

        let mut solution = run.solution;
        let objective = evaluator.get_evaluation(&mut solution);
        let weight = evaluator.capacity() - run.remaining;
        debug_assert_eq!(solution.weight(), Some(weight));

        Ok(ConstructionResult {
            solution,
            objective,
            weight,
            picked: run.picked,
            elapsed: budget.elapsed(),
            timed_out: run.timed_out,
        })
    }
}
