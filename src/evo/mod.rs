//! Agent-driven multi-objective evolutionary search.
//!
//! A population of solutions is keyed by its evaluation vector: the scores
//! of every registered criterion, in registration order. Randomly chosen
//! agents turn sampled copies of existing solutions into new ones, and the
//! population is periodically collapsed to its Pareto front.
//!
//! The engine knows nothing about what a solution represents. Callers
//! supply the criteria (pure `Fn(&S) -> f64`, lower is better), the agents
//! (`Fn(Vec<S>, &mut R) -> S` with a fixed arity) and at least one seed
//! solution.
//!
//! # Key Types
//!
//! - [`Evo`]: Registries, population and the evolution loop
//! - [`EvoConfig`]: Iteration count, prune/status intervals, time limit
//! - [`Evaluation`]: Ordered `(criterion, score)` vector used as population key
//! - [`Population`]: Evaluation → solution store with deep-copy sampling
//! - [`EvoObserver`]: Receives [`StatusReport`]s and the final [`EvolveSummary`]
//! - [`Clock`]: Injected time source ([`SystemClock`], [`SteppingClock`])
//!
//! # Submodules
//!
//! - [`dominance`]: Pareto dominance and front extraction
//!
//! # Concurrency
//!
//! Execution is single-threaded. Sampling hands out deep copies, so an agent
//! can never alias a stored solution. The deadline is polled once per
//! iteration; a running agent is never interrupted.

mod clock;
mod config;
pub mod dominance;
mod error;
mod evaluation;
mod observer;
mod population;
mod registry;
mod runner;
mod types;

pub use clock::{Clock, SteppingClock, SystemClock};
pub use config::EvoConfig;
pub use error::EvoError;
pub use evaluation::Evaluation;
pub use observer::{
    EvoObserver, EvolveSummary, LogObserver, RecordingObserver, StatusReport, StopReason,
};
pub use population::Population;
pub use registry::Registry;
pub use runner::Evo;
pub use types::{Agent, AgentError, AgentFn, Criterion};
