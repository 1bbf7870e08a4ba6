//! Construction configuration.

use std::time::Duration;

use crate::error::{Error, Result};

/// Which constructive heuristic to run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstructionMethod {
    /// Deterministic greedy by value/weight ratio.
    #[default]
    Greedy,

    /// Uniform choice among items that still fit.
    Random,

    /// GRASP semi-greedy construction.
    GreedyRandomized {
        /// Greediness dial in `[0, 1]`: 0 = pure greedy, 1 = pure random.
        alpha: f64,
    },
}

/// Configuration for a single construction run.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_localsearch::construct::{ConstructionConfig, ConstructionMethod};
///
/// let config = ConstructionConfig::default()
///     .with_method(ConstructionMethod::GreedyRandomized { alpha: 0.3 })
///     .with_time_limit(Duration::from_millis(50))
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstructionConfig {
    /// Heuristic to run.
    pub method: ConstructionMethod,

    /// Wall-clock budget. Construction returns its partial result once
    /// this much time has elapsed.
    pub time_limit: Duration,

    /// Random seed for reproducibility. Ignored by [`ConstructionMethod::Greedy`].
    pub seed: Option<u64>,
}

impl Default for ConstructionConfig {
    fn default() -> Self {
        Self {
            method: ConstructionMethod::default(),
            time_limit: Duration::MAX,
            seed: None,
        }
    }
}

impl ConstructionConfig {
    pub fn with_method(mut self, method: ConstructionMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    /// Shorthand for a GRASP run with the given `alpha`.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.method = ConstructionMethod::GreedyRandomized { alpha };
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if let ConstructionMethod::GreedyRandomized { alpha } = self.method {
            if !(0.0..=1.0).contains(&alpha) {
                return Err(Error::Config(format!("alpha must be in [0, 1], got {alpha}")));
            }
        }
        Ok(())
    }
}
