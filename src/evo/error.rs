//! Error type for the evolution engine.

use super::types::AgentError;

/// Errors raised by [`Evo`](super::Evo).
///
/// Every variant is fatal for the run that produced it: the engine never
/// retries or swallows one internally.
#[derive(Debug, thiserror::Error)]
pub enum EvoError {
    /// A criterion was looked up by a name that was never registered.
    #[error("unknown criterion `{0}`")]
    UnknownCriterion(String),

    /// An agent was looked up by a name that was never registered.
    #[error("unknown agent `{0}`")]
    UnknownAgent(String),

    /// `evolve` was asked to run iterations with no agents registered.
    #[error("no agents registered")]
    NoAgents,

    /// An agent operator failed while producing a solution.
    #[error("agent `{agent}` failed: {source}")]
    AgentFailed {
        agent: String,
        #[source]
        source: AgentError,
    },

    /// A new criterion was registered after evaluations were produced.
    #[error("criterion `{0}` registered after the population was seeded")]
    CriteriaFrozen(String),

    /// The evolution configuration is invalid.
    #[error("invalid evolution config: {0}")]
    InvalidConfig(String),
}
