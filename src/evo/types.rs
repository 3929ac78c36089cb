//! Callable types stored in the engine's registries.
//!
//! Criteria and agents are plain closures. The engine is agnostic to the
//! solution type `S` beyond requiring `Clone`, which it treats as a deep
//! copy: a clone must share no mutable state with the original.

/// Error returned by a failing agent operator.
pub type AgentError = Box<dyn std::error::Error + Send + Sync>;

/// A scoring function. Lower scores are better.
///
/// Criteria must be pure and deterministic: the engine keys the population
/// by their output and never re-evaluates a stored solution.
pub type Criterion<S> = Box<dyn Fn(&S) -> f64 + Send + Sync>;

/// A stochastic operator producing one solution from `arity` sampled copies.
///
/// The input copies are owned by the call and may be mutated freely.
pub type AgentFn<S, R> = Box<dyn Fn(Vec<S>, &mut R) -> Result<S, AgentError> + Send + Sync>;

/// A registered agent: its operator and the number of inputs it consumes.
pub struct Agent<S, R> {
    pub(crate) op: AgentFn<S, R>,
    pub(crate) arity: usize,
}

impl<S, R> Agent<S, R> {
    /// Number of sampled solutions handed to the operator.
    pub fn arity(&self) -> usize {
        self.arity
    }
}

impl<S, R> std::fmt::Debug for Agent<S, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent").field("arity", &self.arity).finish()
    }
}
