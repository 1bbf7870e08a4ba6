//! Solution trait and its evaluation cache.

/// Objective value type. Larger is better.
pub type Objective = i64;

/// Lazily-valid cached objective value owned by a solution.
///
/// The cache is either empty (invalid) or holds the objective of the
/// solution's current encoding. It is only written through two paths:
/// a full evaluation ([`Evaluator::evaluate_into`](super::Evaluator::evaluate_into))
/// and an incremental update performed by the solution itself when one of
/// its components changes while the cache is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluationCache {
    value: Option<Objective>,
}

impl EvaluationCache {
    /// Creates an empty (invalid) cache.
    pub const fn new() -> Self {
        Self { value: None }
    }

    /// Returns `true` if the cached value matches the current encoding.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.value.is_some()
    }

    /// Returns the cached value, or `None` if the cache is invalid.
    #[inline]
    pub fn get(&self) -> Option<Objective> {
        self.value
    }

    /// Stores a freshly computed or incrementally maintained value.
    ///
    /// Only evaluators and the crate's own solutions write the cache; code
    /// outside the crate can read or invalidate it but not fill it:
    ///
    /// ```compile_fail
    /// use u_localsearch::model::EvaluationCache;
    ///
    /// let mut cache = EvaluationCache::new();
    /// cache.store(30);
    /// ```
    #[inline]
    pub(crate) fn store(&mut self, value: Objective) {
        self.value = Some(value);
    }

    /// Marks the cache invalid.
    #[inline]
    pub fn invalidate(&mut self) {
        self.value = None;
    }
}

/// A candidate being searched over.
///
/// Implementors own their encoding and an [`EvaluationCache`]. Cloning must
/// produce a fully independent copy that carries the cache verbatim, so a
/// clone of an evaluated solution is evaluated too.
///
/// # Implementing
///
/// ```
/// use u_localsearch::model::{EvaluationCache, Solution};
///
/// #[derive(Clone)]
/// struct Bits {
///     bits: Vec<bool>,
///     cache: EvaluationCache,
/// }
///
/// impl Solution for Bits {
///     fn cache(&self) -> &EvaluationCache { &self.cache }
///     fn cache_mut(&mut self) -> &mut EvaluationCache { &mut self.cache }
/// }
/// ```
pub trait Solution: Clone {
    /// Read access to the evaluation cache.
    fn cache(&self) -> &EvaluationCache;

    /// Write access to the evaluation cache.
    ///
    /// Outside the crate this only allows invalidation; values are stored by
    /// [`Evaluator::evaluate_into`](super::Evaluator::evaluate_into).
    fn cache_mut(&mut self) -> &mut EvaluationCache;

    /// Returns `true` if the cached objective is current.
    fn is_evaluated(&self) -> bool {
        self.cache().is_valid()
    }
}
