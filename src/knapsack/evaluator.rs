//! Knapsack evaluator and the infeasibility sentinel.

use crate::error::{Error, Result};
use crate::model::{Evaluator, Objective, Solution};

use super::solution::KnapsackSolution;

/// Objective reported for any state whose weight exceeds the capacity.
///
/// Smaller than every feasible objective, and far enough from `i64::MIN`
/// that adding a movement delta to it cannot overflow.
pub const PUNISHMENT: Objective = -1_000_000_000_000_000_000;

/// 0/1 knapsack instance: capacity plus index-aligned value and weight tables.
///
/// The tables are immutable after construction, so movements and solutions
/// borrow the evaluator freely.
///
/// # Examples
///
/// ```
/// use u_localsearch::knapsack::{KnapsackEvaluator, KnapsackSolution, PUNISHMENT};
/// use u_localsearch::model::Evaluator;
///
/// let evaluator = KnapsackEvaluator::new(10, vec![10, 10, 12, 18], vec![2, 4, 6, 9]);
/// let mut s = KnapsackSolution::new(evaluator.len());
/// s.set(0, true, None);
/// s.set(1, true, None);
/// assert_eq!(evaluator.get_evaluation(&mut s), 20);
///
/// s.flip(2, Some(&evaluator));
/// assert_eq!(evaluator.get_evaluation(&mut s), PUNISHMENT);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackEvaluator {
    capacity: i64,
    values: Vec<i64>,
    weights: Vec<i64>,
}

impl KnapsackEvaluator {
    /// Creates an evaluator without validating the instance.
    ///
    /// # Panics
    /// Panics if `values` and `weights` have different lengths.
    pub fn new(capacity: i64, values: Vec<i64>, weights: Vec<i64>) -> Self {
        assert_eq!(
            values.len(),
            weights.len(),
            "values and weights must be index-aligned"
        );
        Self {
            capacity,
            values,
            weights,
        }
    }

    /// Creates an evaluator after checking the instance.
    ///
    /// Rejects mismatched table lengths, a negative capacity and
    /// non-positive weights.
    pub fn try_new(capacity: i64, values: Vec<i64>, weights: Vec<i64>) -> Result<Self> {
        if values.len() != weights.len() {
            return Err(Error::LengthMismatch {
                values: values.len(),
                weights: weights.len(),
            });
        }
        if capacity < 0 {
            return Err(Error::NegativeCapacity(capacity));
        }
        if let Some((index, &weight)) = weights.iter().enumerate().find(|&(_, &w)| w <= 0) {
            return Err(Error::NonPositiveWeight { index, weight });
        }
        Ok(Self {
            capacity,
            values,
            weights,
        })
    }

    /// Number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the instance has no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Knapsack capacity.
    #[inline]
    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    /// Value of item `i`.
    #[inline]
    pub fn value(&self, i: usize) -> i64 {
        self.values[i]
    }

    /// Weight of item `i`.
    #[inline]
    pub fn weight(&self, i: usize) -> i64 {
        self.weights[i]
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn weights(&self) -> &[i64] {
        &self.weights
    }

    /// Value per unit of weight of item `i`.
    #[inline]
    pub fn ratio(&self, i: usize) -> f64 {
        self.values[i] as f64 / self.weights[i] as f64
    }

    /// Creates an empty solution sized for this instance.
    pub fn new_solution(&self) -> KnapsackSolution {
        KnapsackSolution::new(self.len())
    }

    /// Sums the weights of the selected items from scratch.
    pub fn total_weight(&self, solution: &KnapsackSolution) -> i64 {
        solution.selected().map(|i| self.weights[i]).sum()
    }

    /// Maps an objective to [`PUNISHMENT`] when `weight` exceeds the capacity.
    #[inline]
    pub(crate) fn penalize(&self, weight: i64, value: Objective) -> Objective {
        if weight > self.capacity {
            PUNISHMENT
        } else {
            value
        }
    }
}

impl Evaluator for KnapsackEvaluator {
    type Solution = KnapsackSolution;

    fn evaluate(&self, solution: &KnapsackSolution) -> Objective {
        solution.selected().map(|i| self.values[i]).sum()
    }

    fn evaluate_into(&self, solution: &mut KnapsackSolution) -> Objective {
        let (value, weight) = solution
            .selected()
            .fold((0, 0), |(v, w), i| (v + self.values[i], w + self.weights[i]));
        solution.store_evaluation(value, weight);
        value
    }

    fn get_evaluation(&self, solution: &mut KnapsackSolution) -> Objective {
        let value = self.objective(solution);
        debug_assert!(solution.is_evaluated());
        self.penalize(solution.running_weight(), value)
    }
}
