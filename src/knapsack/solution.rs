//! Knapsack solution with O(1) incremental re-evaluation.

use crate::model::{EvaluationCache, Objective, Solution};

use super::evaluator::KnapsackEvaluator;

/// Subset of knapsack items, encoded as a fixed-length membership vector.
///
/// Next to the evaluation cache the solution keeps a running weight of the
/// selected items. The weight is authoritative only while the cache is valid:
/// a full evaluation recomputes both, and every [`flip`](Self::flip) on an
/// evaluated solution updates both in O(1).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackSolution {
    selected: Box<[bool]>,
    weight: i64,
    cache: EvaluationCache,
}

impl KnapsackSolution {
    /// Creates an empty selection over `n` items. The cache starts invalid.
    pub fn new(n: usize) -> Self {
        Self {
            selected: vec![false; n].into_boxed_slice(),
            weight: 0,
            cache: EvaluationCache::new(),
        }
    }

    /// Number of items.
    #[inline]
    pub fn size(&self) -> usize {
        self.selected.len()
    }

    /// Returns `true` if item `i` is selected.
    ///
    /// # Panics
    /// Panics if `i >= self.size()`.
    #[inline]
    pub fn get(&self, i: usize) -> bool {
        self.selected[i]
    }

    /// Total weight of the selected items, if the cache is valid.
    pub fn weight(&self) -> Option<i64> {
        self.cache.is_valid().then_some(self.weight)
    }

    /// Indices of the selected items, ascending.
    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| b.then_some(i))
    }

    /// Membership vector.
    pub fn as_slice(&self) -> &[bool] {
        &self.selected
    }

    /// Sets membership of item `i`. No-op if it already has that value.
    pub fn set(&mut self, i: usize, value: bool, evaluator: Option<&KnapsackEvaluator>) {
        if self.selected[i] != value {
            self.flip(i, evaluator);
        }
    }

    /// Toggles membership of item `i`.
    ///
    /// With an evaluator and a valid cache, the item's value and weight are
    /// applied as a signed delta to the cached objective and the running
    /// weight. Otherwise the cache is invalidated and the next
    /// [`get_evaluation`](crate::model::Evaluator::get_evaluation) pays for a
    /// full recomputation.
    ///
    /// # Panics
    /// Panics if `i >= self.size()`.
    pub fn flip(&mut self, i: usize, evaluator: Option<&KnapsackEvaluator>) {
        self.selected[i] = !self.selected[i];

        let (Some(evaluator), Some(value)) = (evaluator, self.cache.get()) else {
            self.cache.invalidate();
            return;
        };

        let sign = if self.selected[i] { 1 } else { -1 };
        self.weight += sign * evaluator.weight(i);
        self.cache.store(value + sign * evaluator.value(i));
    }

    /// Raw running weight, regardless of cache validity.
    #[inline]
    pub(crate) fn running_weight(&self) -> i64 {
        self.weight
    }

    /// Records the result of a full evaluation.
    pub(crate) fn store_evaluation(&mut self, value: Objective, weight: i64) {
        self.weight = weight;
        self.cache.store(value);
    }
}

impl From<Vec<bool>> for KnapsackSolution {
    /// Wraps a membership vector. The cache starts invalid.
    fn from(selected: Vec<bool>) -> Self {
        Self {
            selected: selected.into_boxed_slice(),
            weight: 0,
            cache: EvaluationCache::new(),
        }
    }
}

impl Solution for KnapsackSolution {
    fn cache(&self) -> &EvaluationCache {
        &self.cache
    }

    fn cache_mut(&mut self) -> &mut EvaluationCache {
        &mut self.cache
    }
}
