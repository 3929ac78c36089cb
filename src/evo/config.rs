//! Evolution loop configuration.
//!
//! [`EvoConfig`] holds the parameters that control [`Evo::evolve`](super::Evo::evolve).

use std::time::Duration;

/// Configuration for the evolution loop.
///
/// # Defaults
///
/// ```
/// use std::time::Duration;
/// use u_evo::evo::EvoConfig;
///
/// let config = EvoConfig::default();
/// assert_eq!(config.iterations, 1);
/// assert_eq!(config.dominance_interval, 100);
/// assert_eq!(config.status_interval, 100);
/// assert_eq!(config.time_limit, Duration::from_secs(600));
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_evo::evo::EvoConfig;
///
/// let config = EvoConfig::new(100_000)
///     .with_dominance_interval(200)
///     .with_status_interval(1000)
///     .with_time_limit_secs(600);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvoConfig {
    /// Maximum number of agent invocations.
    pub iterations: usize,

    /// Prune dominated solutions every this many iterations.
    ///
    /// Pruning happens when `iteration % dominance_interval == 0`, so the
    /// first iteration always prunes.
    pub dominance_interval: usize,

    /// Prune and emit a status report every this many iterations.
    pub status_interval: usize,

    /// Wall-clock budget for the whole run.
    ///
    /// Checked at the start of each iteration; an agent already running is
    /// never interrupted.
    pub time_limit: Duration,
}

impl Default for EvoConfig {
    fn default() -> Self {
        Self {
            iterations: 1,
            dominance_interval: 100,
            status_interval: 100,
            time_limit: Duration::from_secs(600),
        }
    }
}

impl EvoConfig {
    /// Default configuration running `iterations` agent invocations.
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            ..Self::default()
        }
    }

    /// Sets the maximum number of agent invocations.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the pruning interval.
    pub fn with_dominance_interval(mut self, n: usize) -> Self {
        self.dominance_interval = n;
        self
    }

    /// Sets the status-report interval.
    pub fn with_status_interval(mut self, n: usize) -> Self {
        self.status_interval = n;
        self
    }

    /// Sets the wall-clock budget.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    /// Sets the wall-clock budget in whole seconds.
    pub fn with_time_limit_secs(self, secs: u64) -> Self {
        self.with_time_limit(Duration::from_secs(secs))
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.dominance_interval == 0 {
            return Err("dominance_interval must be at least 1".into());
        }
        if self.status_interval == 0 {
            return Err("status_interval must be at least 1".into());
        }
        Ok(())
    }
}
