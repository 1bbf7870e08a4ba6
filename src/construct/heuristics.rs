//! Greedy, random-feasible and GRASP semi-greedy construction.
//!
//! All three are anytime procedures: the budget is polled before every
//! candidate-selection step and, once exhausted, whatever has been built so
//! far is returned. The result is always capacity-feasible and already
//! evaluated, but not necessarily maximal.
//!
//! # References
//!
//! - Feo & Resende (1995), "Greedy Randomized Adaptive Search Procedures"
//! - Resende & Ribeiro (2016), "Optimization by GRASP", ch. 3

use std::time::Duration;

use rand::Rng;

use crate::knapsack::{KnapsackEvaluator, KnapsackSolution};
use crate::model::Evaluator;

use super::budget::Budget;

/// Outcome of one construction run.
#[derive(Debug, Clone)]
pub(crate) struct Construction {
    pub solution: KnapsackSolution,
    /// Items in the order they were selected.
    pub picked: Vec<usize>,
    /// Capacity left unused.
    pub remaining: i64,
    /// Whether the budget stopped construction early.
    pub timed_out: bool,
}

/// Accumulates selections against the remaining capacity.
struct Builder<'a> {
    evaluator: &'a KnapsackEvaluator,
    solution: KnapsackSolution,
    picked: Vec<usize>,
    remaining: i64,
}

impl<'a> Builder<'a> {
    fn new(evaluator: &'a KnapsackEvaluator) -> Self {
        Self {
            evaluator,
            solution: evaluator.new_solution(),
            picked: Vec::new(),
            remaining: evaluator.capacity(),
        }
    }

    #[inline]
    fn fits(&self, item: usize) -> bool {
        self.evaluator.weight(item) <= self.remaining
    }

    fn pick(&mut self, item: usize) {
        self.remaining -= self.evaluator.weight(item);
        // The cache is still invalid here, so this stays on the lazy path.
        self.solution.set(item, true, None);
        self.picked.push(item);
        tracing::trace!(item, remaining = self.remaining, "picked");
    }

    fn finish(mut self, method: &'static str, timed_out: bool) -> Construction {
        self.evaluator.evaluate_into(&mut self.solution);
        if timed_out {
            tracing::debug!(
                method,
                picks = self.picked.len(),
                remaining = self.remaining,
                "construction stopped by time budget"
            );
        } else {
            tracing::debug!(
                method,
                picks = self.picked.len(),
                remaining = self.remaining,
                "construction complete"
            );
        }
        Construction {
            solution: self.solution,
            picked: self.picked,
            remaining: self.remaining,
            timed_out,
        }
    }
}

fn ratios(evaluator: &KnapsackEvaluator) -> Vec<f64> {
    (0..evaluator.len()).map(|i| evaluator.ratio(i)).collect()
}

/// Item indices sorted by descending value/weight ratio; ties keep index order.
fn by_ratio_desc(ratios: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..ratios.len()).collect();
    order.sort_by(|&a, &b| ratios[b].total_cmp(&ratios[a]));
    order
}

/// Item indices sorted by ascending weight.
fn by_weight_asc(evaluator: &KnapsackEvaluator) -> Vec<usize> {
    let mut order: Vec<usize> = (0..evaluator.len()).collect();
    order.sort_by_key(|&i| evaluator.weight(i));
    order
}

pub(crate) fn build_greedy(evaluator: &KnapsackEvaluator, budget: &Budget) -> Construction {
    let mut builder = Builder::new(evaluator);
    let mut timed_out = false;

    for item in by_ratio_desc(&ratios(evaluator)) {
        if budget.exhausted() {
            timed_out = true;
            break;
        }
        if builder.fits(item) {
            builder.pick(item);
        }
    }

    builder.finish("greedy", timed_out)
}

pub(crate) fn build_random<R: Rng>(
    evaluator: &KnapsackEvaluator,
    budget: &Budget,
    rng: &mut R,
) -> Construction {
    let mut builder = Builder::new(evaluator);
    let mut candidates = by_weight_asc(evaluator);
    let mut timed_out = false;

    prune_heaviest(&mut candidates, &builder, |_| {});
    while !candidates.is_empty() {
        if budget.exhausted() {
            timed_out = true;
            break;
        }
        let item = candidates.remove(rng.random_range(0..candidates.len()));
        builder.pick(item);
        prune_heaviest(&mut candidates, &builder, |_| {});
    }

    builder.finish("random", timed_out)
}

pub(crate) fn build_greedy_randomized<R: Rng>(
    evaluator: &KnapsackEvaluator,
    alpha: f64,
    budget: &Budget,
    rng: &mut R,
) -> Construction {
    let ratios = ratios(evaluator);
    let mut builder = Builder::new(evaluator);
    let mut by_weight = by_weight_asc(evaluator);
    let mut by_ratio = by_ratio_desc(&ratios);
    let mut timed_out = false;

    prune_heaviest(&mut by_weight, &builder, |item| {
        by_ratio.retain(|&c| c != item)
    });
    while let (Some(&best), Some(&worst)) = (by_ratio.first(), by_ratio.last()) {
        if budget.exhausted() {
            timed_out = true;
            break;
        }

        let (max, min) = (ratios[best], ratios[worst]);
        // Same as max - alpha (max - min), but exact at alpha = 1.
        let threshold = min + (1.0 - alpha) * (max - min);
        let rcl = by_ratio.partition_point(|&c| ratios[c] >= threshold);
        // At alpha = 0 tied ratios would all enter the RCL; greedy takes the lowest index.
        let item = if rcl <= 1 || alpha == 0.0 {
            best
        } else {
            by_ratio[rng.random_range(0..rcl)]
        };

        by_ratio.retain(|&c| c != item);
        by_weight.retain(|&c| c != item);
        builder.pick(item);
        prune_heaviest(&mut by_weight, &builder, |item| {
            by_ratio.retain(|&c| c != item)
        });
    }

    builder.finish("greedy_randomized", timed_out)
}

/// Pops candidates that no longer fit from the heavy end of an
/// ascending-by-weight list, reporting each one to `on_prune`.
fn prune_heaviest(
    candidates: &mut Vec<usize>,
    builder: &Builder<'_>,
    mut on_prune: impl FnMut(usize),
) {
    while let Some(&heaviest) = candidates.last() {
        if builder.fits(heaviest) {
            break;
        }
        candidates.pop();
        on_prune(heaviest);
    }
}

/// Deterministic greedy construction by value/weight ratio.
///
/// Items are visited by descending ratio (ties by index) and taken whenever
/// they fit the remaining capacity; skipped items are never reconsidered.
#[doc(alias = "cm_knapsack_greedy")]
pub fn greedy(evaluator: &KnapsackEvaluator, time_limit: Duration) -> KnapsackSolution {
    build_greedy(evaluator, &Budget::start(time_limit)).solution
}

/// Uniformly random feasible construction.
///
/// At each step one item is drawn uniformly among those that still fit,
/// until none fits. Value plays no part in the choice.
#[doc(alias = "cm_knapsack_random")]
pub fn random_feasible<R: Rng>(
    evaluator: &KnapsackEvaluator,
    time_limit: Duration,
    rng: &mut R,
) -> KnapsackSolution {
    build_random(evaluator, &Budget::start(time_limit), rng).solution
}

/// GRASP semi-greedy construction.
///
/// At each step the restricted candidate list holds every fitting item with
/// ratio `>= max - alpha (max - min)` over the fitting items, and one of
/// them is drawn uniformly. `alpha = 0` is greedy by ratio, `alpha = 1` is
/// uniform among fitting items.
///
/// # Panics
/// Panics if `alpha` is not in `[0, 1]`.
#[doc(alias = "cm_knapsack_greedy_randomized")]
pub fn greedy_randomized<R: Rng>(
    evaluator: &KnapsackEvaluator,
    alpha: f64,
    time_limit: Duration,
    rng: &mut R,
) -> KnapsackSolution {
    assert!(
        (0.0..=1.0).contains(&alpha),
        "alpha must be in [0, 1], got {alpha}"
    );
    build_greedy_randomized(evaluator, alpha, &Budget::start(time_limit), rng).solution
}
