//! Movement and movement generator traits.

use rand::Rng;

use super::solution::{Objective, Solution};

/// An atomic transformation of a solution.
///
/// Movements are evaluator-aware: they hold a borrow of the evaluator whose
/// tables they need, and take the solution only when applied or queried.
pub trait Movement<S: Solution> {
    /// Mutates the solution in place.
    ///
    /// The solution's cache must stay consistent afterwards, either through
    /// incremental maintenance or by being invalidated.
    fn apply(&self, solution: &mut S);

    /// Returns the change in objective that [`apply`](Movement::apply) would
    /// cause right now, without mutating the solution.
    ///
    /// Problems with constraints return their infeasibility sentinel when the
    /// resulting state would violate them.
    fn delta(&self, solution: &S) -> Objective;
}

/// Produces movements from a solution's neighborhood.
///
/// Three independent access modes are supported:
///
/// - [`get_all`](MovementGenerator::get_all): eager enumeration of the full
///   neighborhood, for best-improvement search.
/// - [`get_random`](MovementGenerator::get_random): one uniformly sampled
///   movement in O(1).
/// - [`has_next`](MovementGenerator::has_next) / [`next`](MovementGenerator::next) /
///   [`reset`](MovementGenerator::reset): a resumable cursor over the same order
///   as `get_all`, for first-improvement search without materializing the
///   neighborhood.
pub trait MovementGenerator {
    /// The solution variant the movements act on.
    type Solution: Solution;

    /// The movement type produced.
    type Movement: Movement<Self::Solution>;

    /// Builds every movement of the neighborhood.
    fn get_all(&self, solution: &Self::Solution) -> Vec<Self::Movement>;

    /// Samples a single movement uniformly.
    fn get_random<R: Rng>(&self, rng: &mut R) -> Self::Movement;

    /// Returns `true` while the cursor has movements left.
    fn has_next(&self) -> bool;

    /// Yields the movement under the cursor and advances it.
    ///
    /// Returns `None` once the neighborhood is exhausted.
    fn next(&mut self) -> Option<Self::Movement>;

    /// Rewinds the cursor to the first movement.
    fn reset(&mut self);

    /// Iterates over the movements the cursor has not yet yielded.
    fn remaining(&mut self) -> impl Iterator<Item = Self::Movement> + '_
    where
        Self: Sized,
    {
        std::iter::from_fn(move || self.next())
    }
}
