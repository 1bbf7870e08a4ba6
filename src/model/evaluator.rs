//! Evaluator trait.

use super::solution::{Objective, Solution};

/// Computes and caches the objective of a [`Solution`].
///
/// The only required method is [`evaluate`](Evaluator::evaluate), a pure
/// from-scratch computation. [`get_evaluation`](Evaluator::get_evaluation)
/// is what search procedures call: it serves the cached value when valid and
/// falls back to a full evaluation otherwise. Problems with constraints
/// override `get_evaluation` to replace the objective of infeasible states
/// with a sentinel.
pub trait Evaluator {
    /// The solution variant this evaluator understands.
    type Solution: Solution;

    /// Recomputes the objective from scratch. Does not touch the cache.
    fn evaluate(&self, solution: &Self::Solution) -> Objective;

    /// Recomputes the objective and stores it in the solution's cache.
    ///
    /// Implementors that keep auxiliary running totals next to the cache
    /// override this to refresh them in the same pass.
    fn evaluate_into(&self, solution: &mut Self::Solution) -> Objective {
        let value = self.evaluate(solution);
        solution.cache_mut().store(value);
        value
    }

    /// Returns the raw objective, computing and caching it if needed.
    fn objective(&self, solution: &mut Self::Solution) -> Objective {
        match solution.cache().get() {
            Some(value) => value,
            None => self.evaluate_into(solution),
        }
    }

    /// Returns the feasibility-adjusted objective.
    ///
    /// The default has no feasibility rule and equals [`objective`](Evaluator::objective).
    fn get_evaluation(&self, solution: &mut Self::Solution) -> Objective {
        self.objective(solution)
    }
}
