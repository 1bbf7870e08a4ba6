//! Bit-flip movement families.
//!
//! - [`FlipPair`]: toggle bits `i` and `j` (a single bit when `i == j`).
//! - [`IntervalFlip`]: toggle every bit in `i..=j`.
//! - [`Inversion`]: toggle the mirrored pairs `(i + k, j - k)` of `i..=j`;
//!   the middle bit of an odd-length interval is left alone.
//!
//! `apply` goes through [`KnapsackSolution::flip`], so an evaluated solution
//! stays evaluated at O(1) per toggled bit. `delta` simulates the same
//! toggles against the evaluator's tables and returns
//! [`PUNISHMENT`](super::PUNISHMENT) when the resulting weight would exceed
//! the capacity.
//!
//! Interval and inversion movements built with `i > j` cover an empty range
//! and do nothing.

use crate::model::{Movement, Objective};

use super::evaluator::KnapsackEvaluator;
use super::solution::KnapsackSolution;

/// A knapsack movement parameterized by an index pair.
///
/// Lets one generator type serve every movement family.
pub trait PairMovement<'a>: Movement<KnapsackSolution> {
    /// Builds the movement for `(i, j)`.
    fn from_pair(evaluator: &'a KnapsackEvaluator, i: usize, j: usize) -> Self;

    /// The `(i, j)` pair the movement was built from.
    fn pair(&self) -> (usize, usize);
}

/// Accumulates the effect of hypothetical toggles on value and weight.
struct DeltaProbe<'s, 'a> {
    evaluator: &'a KnapsackEvaluator,
    solution: &'s KnapsackSolution,
    value: Objective,
    weight: i64,
}

impl<'s, 'a> DeltaProbe<'s, 'a> {
    fn new(evaluator: &'a KnapsackEvaluator, solution: &'s KnapsackSolution) -> Self {
        // Without a valid cache the running weight is stale.
        let weight = solution
            .weight()
            .unwrap_or_else(|| evaluator.total_weight(solution));
        Self {
            evaluator,
            solution,
            value: 0,
            weight,
        }
    }

    #[inline]
    fn toggle(&mut self, i: usize) {
        let sign = if self.solution.get(i) { -1 } else { 1 };
        self.value += sign * self.evaluator.value(i);
        self.weight += sign * self.evaluator.weight(i);
    }

    fn finish(self) -> Objective {
        self.evaluator.penalize(self.weight, self.value)
    }
}

/// Mirrored index pairs of `i..=j`, outermost first.
fn mirrored(i: usize, j: usize) -> impl Iterator<Item = (usize, usize)> {
    let half = if j >= i { (j - i + 1) / 2 } else { 0 };
    (0..half).map(move |k| (i + k, j - k))
}

/// Toggles bits `i` and `j`; a single bit when `i == j`.
#[derive(Debug, Clone, Copy)]
pub struct FlipPair<'a> {
    evaluator: &'a KnapsackEvaluator,
    i: usize,
    j: usize,
}

impl<'a> FlipPair<'a> {
    pub fn new(evaluator: &'a KnapsackEvaluator, i: usize, j: usize) -> Self {
        Self { evaluator, i, j }
    }
}

impl Movement<KnapsackSolution> for FlipPair<'_> {
    fn apply(&self, solution: &mut KnapsackSolution) {
        solution.flip(self.i, Some(self.evaluator));
        if self.i != self.j {
            solution.flip(self.j, Some(self.evaluator));
        }
    }

    fn delta(&self, solution: &KnapsackSolution) -> Objective {
        let mut probe = DeltaProbe::new(self.evaluator, solution);
        probe.toggle(self.i);
        if self.i != self.j {
            probe.toggle(self.j);
        }
        probe.finish()
    }
}

impl<'a> PairMovement<'a> for FlipPair<'a> {
    fn from_pair(evaluator: &'a KnapsackEvaluator, i: usize, j: usize) -> Self {
        Self::new(evaluator, i, j)
    }

    fn pair(&self) -> (usize, usize) {
        (self.i, self.j)
    }
}

/// Toggles every bit in the closed interval `i..=j`.
#[derive(Debug, Clone, Copy)]
pub struct IntervalFlip<'a> {
    evaluator: &'a KnapsackEvaluator,
    i: usize,
    j: usize,
}

impl<'a> IntervalFlip<'a> {
    pub fn new(evaluator: &'a KnapsackEvaluator, i: usize, j: usize) -> Self {
        Self { evaluator, i, j }
    }
}

impl Movement<KnapsackSolution> for IntervalFlip<'_> {
    fn apply(&self, solution: &mut KnapsackSolution) {
        for k in self.i..=self.j {
            solution.flip(k, Some(self.evaluator));
        }
    }

    fn delta(&self, solution: &KnapsackSolution) -> Objective {
        let mut probe = DeltaProbe::new(self.evaluator, solution);
        for k in self.i..=self.j {
            probe.toggle(k);
        }
        probe.finish()
    }
}

impl<'a> PairMovement<'a> for IntervalFlip<'a> {
    fn from_pair(evaluator: &'a KnapsackEvaluator, i: usize, j: usize) -> Self {
        Self::new(evaluator, i, j)
    }

    fn pair(&self) -> (usize, usize) {
        (self.i, self.j)
    }
}

/// Toggles the symmetric pairs `(i + k, j - k)` of the interval `i..=j`.
#[derive(Debug, Clone, Copy)]
pub struct Inversion<'a> {
    evaluator: &'a KnapsackEvaluator,
    i: usize,
    j: usize,
}

impl<'a> Inversion<'a> {
    pub fn new(evaluator: &'a KnapsackEvaluator, i: usize, j: usize) -> Self {
        Self { evaluator, i, j }
    }
}

impl Movement<KnapsackSolution> for Inversion<'_> {
    fn apply(&self, solution: &mut KnapsackSolution) {
        for (a, b) in mirrored(self.i, self.j) {
            solution.flip(a, Some(self.evaluator));
            solution.flip(b, Some(self.evaluator));
        }
    }

    fn delta(&self, solution: &KnapsackSolution) -> Objective {
        let mut probe = DeltaProbe::new(self.evaluator, solution);
        for (a, b) in mirrored(self.i, self.j) {
            probe.toggle(a);
            probe.toggle(b);
        }
        probe.finish()
    }
}

impl<'a> PairMovement<'a> for Inversion<'a> {
    fn from_pair(evaluator: &'a KnapsackEvaluator, i: usize, j: usize) -> Self {
        Self::new(evaluator, i, j)
    }

    fn pair(&self) -> (usize, usize) {
        (self.i, self.j)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knapsack::PUNISHMENT;
    use crate::model::{Evaluator, Solution};
    use proptest::prelude::*;

    fn scenario() -> KnapsackEvaluator {
        KnapsackEvaluator::new(10, vec![10, 10, 12, 18], vec![2, 4, 6, 9])
    }

    fn evaluated(evaluator: &KnapsackEvaluator, bits: Vec<bool>) -> KnapsackSolution {
        let mut s = KnapsackSolution::from(bits);
        evaluator.get_evaluation(&mut s);
        s
    }

    #[test]
    fn test_mirrored_pairs() {
        assert_eq!(mirrored(2, 5).collect::<Vec<_>>(), vec![(2, 5), (3, 4)]);
        assert_eq!(mirrored(1, 3).collect::<Vec<_>>(), vec![(1, 3)]);
        assert_eq!(mirrored(4, 4).count(), 0);
        assert_eq!(mirrored(5, 2).count(), 0);
    }

    #[test]
    fn test_flip_pair_apply_and_delta() {
        let evaluator = scenario();
        let mut s = evaluated(&evaluator, vec![true, true, false, false]);

        // Drop item 1 (-10, -4), add item 2 (+12, +6): weight 8.
        let m = FlipPair::new(&evaluator, 1, 2);
        assert_eq!(m.delta(&s), 2);
        assert!(s.get(1), "delta must not mutate");

        m.apply(&mut s);
        assert_eq!(evaluator.get_evaluation(&mut s), 22);
        assert_eq!(s.weight(), Some(8));
    }

    #[test]
    fn test_flip_pair_degenerate_is_single_flip() {
        let evaluator = scenario();
        let mut s = evaluated(&evaluator, vec![true, false, false, false]);

        let m = FlipPair::new(&evaluator, 1, 1);
        assert_eq!(m.delta(&s), 10);
        m.apply(&mut s);
        assert_eq!(s.as_slice(), &[true, true, false, false]);
    }

    #[test]
    fn test_flip_pair_infeasible_delta() {
        let evaluator = scenario();
        let s = evaluated(&evaluator, vec![true, true, false, false]);
        assert_eq!(FlipPair::new(&evaluator, 2, 2).delta(&s), PUNISHMENT);
        assert_eq!(FlipPair::new(&evaluator, 1, 3).delta(&s), PUNISHMENT);
        assert_eq!(FlipPair::new(&evaluator, 0, 1).delta(&s), -20);
    }

    #[test]
    fn test_interval_flip() {
        let evaluator = scenario();
        let mut s = evaluated(&evaluator, vec![true, false, true, false]);

        // 0..=2 -> [false, true, false, false]: value 10, weight 4.
        let m = IntervalFlip::new(&evaluator, 0, 2);
        assert_eq!(m.delta(&s), 10 - 22);
        m.apply(&mut s);
        assert_eq!(s.as_slice(), &[false, true, false, false]);
        assert_eq!(evaluator.get_evaluation(&mut s), 10);
    }

    #[test]
    fn test_interval_flip_reversed_is_empty() {
        let evaluator = scenario();
        let mut s = evaluated(&evaluator, vec![true, false, false, false]);
        let m = IntervalFlip::new(&evaluator, 3, 1);
        assert_eq!(m.delta(&s), 0);
        m.apply(&mut s);
        assert_eq!(s.as_slice(), &[true, false, false, false]);
    }

    #[test]
    fn test_inversion_toggles_mirrored_pairs() {
        let evaluator = KnapsackEvaluator::new(100, vec![1, 2, 4, 8, 16], vec![1; 5]);
        let mut s = evaluated(&evaluator, vec![true, false, true, false, false]);

        // 0..=4 toggles (0,4) and (1,3); bit 2 is the untouched middle.
        let m = Inversion::new(&evaluator, 0, 4);
        assert_eq!(m.delta(&s), -1 + 16 + 2 + 8);
        m.apply(&mut s);
        assert_eq!(s.as_slice(), &[false, true, true, true, true]);
        assert_eq!(evaluator.get_evaluation(&mut s), 30);
    }

    #[test]
    fn test_inversion_single_index_is_noop() {
        let evaluator = scenario();
        let s = evaluated(&evaluator, vec![false, false, false, false]);
        assert_eq!(Inversion::new(&evaluator, 2, 2).delta(&s), 0);
    }

    #[test]
    fn test_delta_on_unevaluated_solution() {
        let evaluator = scenario();
        let s = KnapsackSolution::from(vec![true, true, false, false]);
        assert!(!s.is_evaluated());
        assert_eq!(FlipPair::new(&evaluator, 2, 2).delta(&s), PUNISHMENT);
        assert_eq!(FlipPair::new(&evaluator, 1, 1).delta(&s), -10);
    }

    #[test]
    fn test_pair_accessor() {
        let evaluator = scenario();
        assert_eq!(FlipPair::from_pair(&evaluator, 1, 3).pair(), (1, 3));
        assert_eq!(IntervalFlip::from_pair(&evaluator, 0, 2).pair(), (0, 2));
        assert_eq!(Inversion::from_pair(&evaluator, 2, 3).pair(), (2, 3));
    }

    fn check_delta<'a, M: PairMovement<'a>>(
        evaluator: &'a KnapsackEvaluator,
        bits: &[bool],
        i: usize,
        j: usize,
    ) -> Result<(), TestCaseError> {
        let mut s = evaluated(evaluator, bits.to_vec());
        let before = evaluator.evaluate(&s);
        let m = M::from_pair(evaluator, i, j);
        let delta = m.delta(&s);
        m.apply(&mut s);

        prop_assert_eq!(s.cache().get(), Some(evaluator.evaluate(&s)));
        let after_weight = evaluator.total_weight(&s);
        if after_weight > evaluator.capacity() {
            prop_assert_eq!(delta, PUNISHMENT);
        } else {
            prop_assert_eq!(delta, evaluator.evaluate(&s) - before);
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn prop_delta_matches_apply(
            items in prop::collection::vec((0i64..50, 1i64..20), 1..16),
            bits in prop::collection::vec(any::<bool>(), 16),
            a in 0usize..16,
            b in 0usize..16,
            capacity in 0i64..200,
        ) {
            let n = items.len();
            let (i, j) = ((a % n).min(b % n), (a % n).max(b % n));
            let (values, weights): (Vec<_>, Vec<_>) = items.into_iter().unzip();
            let evaluator = KnapsackEvaluator::new(capacity, values, weights);
            let bits = &bits[..n];

            check_delta::<FlipPair>(&evaluator, bits, i, j)?;
            check_delta::<IntervalFlip>(&evaluator, bits, i, j)?;
            check_delta::<Inversion>(&evaluator, bits, i, j)?;
        }
    }
}
