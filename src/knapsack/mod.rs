//! 0/1 knapsack instance of the local-search contract.
//!
//! A [`KnapsackSolution`] is a membership vector over `n` items; the
//! [`KnapsackEvaluator`] holds the capacity and the value and weight tables
//! and reports [`PUNISHMENT`] for overweight selections.
//!
//! Three movement families act on the membership vector, each with a
//! generator over the index pairs `0 <= i <= j < n`:
//!
//! | Movement         | Generator                 | Effect                          |
//! |------------------|---------------------------|---------------------------------|
//! | [`FlipPair`]     | [`FlipPairGenerator`]     | toggle `i` and `j`              |
//! | [`IntervalFlip`] | [`IntervalFlipGenerator`] | toggle all of `i..=j`           |
//! | [`Inversion`]    | [`InversionGenerator`]    | toggle mirrored pairs of `i..=j`|

mod evaluator;
mod generator;
mod movement;
mod solution;

pub use evaluator::{KnapsackEvaluator, PUNISHMENT};
pub use generator::{
    FlipPairGenerator, IntervalFlipGenerator, InversionGenerator, PairGenerator, TriangularCursor,
};
pub use movement::{FlipPair, IntervalFlip, Inversion, PairMovement};
pub use solution::KnapsackSolution;
