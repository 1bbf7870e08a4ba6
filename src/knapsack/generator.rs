//! Movement generators over index pairs `0 <= i <= j < n`.

use std::fmt;
use std::marker::PhantomData;

use rand::Rng;

use crate::model::MovementGenerator;

use super::evaluator::KnapsackEvaluator;
use super::movement::{FlipPair, IntervalFlip, Inversion, PairMovement};
use super::solution::KnapsackSolution;

/// Resumable walk over the triangular pair set `0 <= i <= j < n`.
///
/// Pairs come out row by row: `i` ascending, and for each `i`, `j` from `i`
/// to `n - 1`. The cursor is exhausted once `i == n`.
///
/// ```
/// use u_localsearch::knapsack::TriangularCursor;
///
/// let pairs: Vec<_> = TriangularCursor::new(3).collect();
/// assert_eq!(pairs, vec![(0, 0), (0, 1), (0, 2), (1, 1), (1, 2), (2, 2)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriangularCursor {
    n: usize,
    i: usize,
    j: usize,
}

impl TriangularCursor {
    pub fn new(n: usize) -> Self {
        Self { n, i: 0, j: 0 }
    }

    /// Returns `true` while pairs remain.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.i < self.n
    }

    /// Rewinds to `(0, 0)`.
    pub fn reset(&mut self) {
        self.i = 0;
        self.j = 0;
    }

    /// Total number of pairs, `n (n + 1) / 2`.
    pub fn total(&self) -> usize {
        self.n * (self.n + 1) / 2
    }
}

impl Iterator for TriangularCursor {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        if !self.has_next() {
            return None;
        }
        let pair = (self.i, self.j);
        self.j += 1;
        if self.j == self.n {
            self.i += 1;
            self.j = self.i;
        }
        Some(pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if !self.has_next() {
            return (0, Some(0));
        }
        // Rows i+1.. are complete; row i has n - j pairs left.
        let rest = self.n - self.i - 1;
        let left = rest * (rest + 1) / 2 + (self.n - self.j);
        (left, Some(left))
    }
}

impl ExactSizeIterator for TriangularCursor {}

/// Generator for any [`PairMovement`] family over `n` items.
///
/// Use the aliases [`FlipPairGenerator`], [`IntervalFlipGenerator`] and
/// [`InversionGenerator`].
pub struct PairGenerator<'a, M> {
    evaluator: &'a KnapsackEvaluator,
    cursor: TriangularCursor,
    _movement: PhantomData<fn() -> M>,
}

impl<M> fmt::Debug for PairGenerator<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PairGenerator")
            .field("n", &self.cursor.n)
            .field("cursor", &(self.cursor.i, self.cursor.j))
            .finish()
    }
}

impl<'a, M: PairMovement<'a>> PairGenerator<'a, M> {
    /// Creates a generator over the first `n` items of `evaluator`.
    pub fn new(evaluator: &'a KnapsackEvaluator, n: usize) -> Self {
        debug_assert!(n <= evaluator.len());
        Self {
            evaluator,
            cursor: TriangularCursor::new(n),
            _movement: PhantomData,
        }
    }

    /// Creates a generator over every item of `evaluator`.
    pub fn for_evaluator(evaluator: &'a KnapsackEvaluator) -> Self {
        Self::new(evaluator, evaluator.len())
    }

    /// Number of items the generator ranges over.
    pub fn len(&self) -> usize {
        self.cursor.n
    }

    pub fn is_empty(&self) -> bool {
        self.cursor.n == 0
    }
}

impl<'a, M: PairMovement<'a>> MovementGenerator for PairGenerator<'a, M> {
    type Solution = KnapsackSolution;
    type Movement = M;

    fn get_all(&self, _solution: &KnapsackSolution) -> Vec<M> {
        TriangularCursor::new(self.cursor.n)
            .map(|(i, j)| M::from_pair(self.evaluator, i, j))
            .collect()
    }

    /// Draws `i` and `j` independently and uniformly from `[0, n)` and keeps
    /// them in draw order. A pair with `i > j` is not part of `get_all`; for
    /// interval and inversion movements it is an empty range and a no-op.
    ///
    /// # Panics
    /// Panics if the generator ranges over zero items.
    fn get_random<R: Rng>(&self, rng: &mut R) -> M {
        assert!(!self.is_empty(), "cannot sample from an empty neighborhood");
        let a = rng.random_range(0..self.cursor.n);
        let b = rng.random_range(0..self.cursor.n);
        M::from_pair(self.evaluator, a, b)
    }

    fn has_next(&self) -> bool {
        self.cursor.has_next()
    }

    fn next(&mut self) -> Option<M> {
        let (i, j) = Iterator::next(&mut self.cursor)?;
        Some(M::from_pair(self.evaluator, i, j))
    }

    fn reset(&mut self) {
        self.cursor.reset();
    }
}

/// Generator of [`FlipPair`] movements.
pub type FlipPairGenerator<'a> = PairGenerator<'a, FlipPair<'a>>;

/// Generator of [`IntervalFlip`] movements.
pub type IntervalFlipGenerator<'a> = PairGenerator<'a, IntervalFlip<'a>>;

/// Generator of [`Inversion`] movements.
pub type InversionGenerator<'a> = PairGenerator<'a, Inversion<'a>>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Evaluator, Movement};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn scenario() -> KnapsackEvaluator {
        KnapsackEvaluator::new(10, vec![10, 10, 12, 18], vec![2, 4, 6, 9])
    }

    #[test]
    fn test_cursor_order() {
        let pairs: Vec<_> = TriangularCursor::new(3).collect();
        assert_eq!(pairs, vec![(0, 0), (0, 1), (0, 2), (1, 1), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_cursor_empty() {
        let mut cursor = TriangularCursor::new(0);
        assert!(!cursor.has_next());
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.total(), 0);
    }

    #[test]
    fn test_cursor_size_hint_tracks_progress() {
        let mut cursor = TriangularCursor::new(5);
        assert_eq!(cursor.len(), 15);
        for left in (0..15).rev() {
            cursor.next();
            assert_eq!(cursor.len(), left);
        }
    }

    #[test]
    fn test_cursor_reset() {
        let mut cursor = TriangularCursor::new(2);
        assert_eq!(cursor.by_ref().count(), 3);
        cursor.reset();
        assert_eq!(cursor.next(), Some((0, 0)));
    }

    #[test]
    fn test_get_all_size_and_order() {
        let evaluator = scenario();
        let generator = FlipPairGenerator::for_evaluator(&evaluator);
        let s = evaluator.new_solution();

        let all = generator.get_all(&s);
        assert_eq!(all.len(), 10);
        assert_eq!(all[0].pair(), (0, 0));
        assert_eq!(all[9].pair(), (3, 3));
    }

    #[test]
    fn test_stateful_cursor_matches_get_all() {
        let evaluator = scenario();
        let mut generator = InversionGenerator::for_evaluator(&evaluator);
        let s = evaluator.new_solution();

        let eager: Vec<_> = generator.get_all(&s).iter().map(|m| m.pair()).collect();
        let mut lazy = Vec::new();
        while generator.has_next() {
            lazy.push(generator.next().map(|m| m.pair()).unwrap());
        }
        assert_eq!(eager, lazy);
        assert!(generator.next().is_none());

        generator.reset();
        assert!(generator.has_next());
        assert_eq!(generator.next().map(|m| m.pair()), Some((0, 0)));
    }

    #[test]
    fn test_remaining_resumes_from_cursor() {
        let evaluator = scenario();
        let mut generator = IntervalFlipGenerator::for_evaluator(&evaluator);
        generator.next();
        generator.next();

        let rest: Vec<_> = generator.remaining().map(|m| m.pair()).collect();
        assert_eq!(rest.len(), 8);
        assert_eq!(rest[0], (0, 2));
        assert!(!generator.has_next());
    }

    #[test]
    fn test_get_random_keeps_draw_order() {
        let evaluator = scenario();
        let generator = FlipPairGenerator::for_evaluator(&evaluator);
        let mut rng = StdRng::seed_from_u64(42);

        let mut seen = HashSet::new();
        for _ in 0..2000 {
            let (i, j) = generator.get_random(&mut rng).pair();
            assert!(i < 4 && j < 4);
            seen.insert((i, j));
        }
        assert_eq!(seen.len(), 16, "every ordered pair should be reachable");
    }

    #[test]
    fn test_get_random_reversed_interval_is_noop() {
        let evaluator = KnapsackEvaluator::new(100, vec![1; 6], vec![1; 6]);
        let generator = IntervalFlipGenerator::for_evaluator(&evaluator);
        let mut s = evaluator.new_solution();
        evaluator.get_evaluation(&mut s);
        let mut rng = StdRng::seed_from_u64(7);

        let mut reversed = 0;
        for _ in 0..6000 {
            let m = generator.get_random(&mut rng);
            let (i, j) = m.pair();
            if i > j {
                reversed += 1;
                assert_eq!(m.delta(&s), 0);
            }
        }
        // 15 of the 36 ordered pairs are reversed: about 2500 expected.
        assert!((2000..3000).contains(&reversed), "reversed = {reversed}");
    }

    #[test]
    #[should_panic(expected = "empty neighborhood")]
    fn test_get_random_empty_panics() {
        let evaluator = KnapsackEvaluator::new(0, vec![], vec![]);
        let generator = FlipPairGenerator::for_evaluator(&evaluator);
        let mut rng = StdRng::seed_from_u64(1);
        generator.get_random(&mut rng);
    }

    #[test]
    fn test_generator_restricted_to_prefix() {
        let evaluator = scenario();
        let generator = IntervalFlipGenerator::new(&evaluator, 2);
        let all = generator.get_all(&evaluator.new_solution());
        let pairs: Vec<_> = all.iter().map(|m| m.pair()).collect();
        assert_eq!(pairs, vec![(0, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn test_first_improvement_scan() {
        let evaluator = scenario();
        let mut s = evaluator.new_solution();
        evaluator.get_evaluation(&mut s);

        let mut generator = FlipPairGenerator::for_evaluator(&evaluator);
        let improving = generator
            .remaining()
            .find(|m| m.delta(&s) > 0)
            .expect("empty knapsack has an improving flip");
        improving.apply(&mut s);

        assert_eq!(improving.pair(), (0, 0));
        assert_eq!(evaluator.get_evaluation(&mut s), 10);
        assert!(generator.has_next(), "scan stopped early");
    }

    proptest! {
        #[test]
        fn prop_cursor_complete_and_unique(n in 0usize..40) {
            let pairs: Vec<_> = TriangularCursor::new(n).collect();
            let unique: HashSet<_> = pairs.iter().copied().collect();

            prop_assert_eq!(pairs.len(), n * (n + 1) / 2);
            prop_assert_eq!(unique.len(), pairs.len());
            for &(i, j) in &pairs {
                prop_assert!(i <= j && j < n);
            }
        }
    }
}
