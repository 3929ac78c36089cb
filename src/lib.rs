//! Agent-driven multi-objective evolutionary search.
//!
//! - [`evo`]: Domain-agnostic engine: criterion and agent registries, a
//!   population keyed by evaluation vectors, Pareto pruning and the
//!   evolution loop.
//! - [`report`]: CSV summary of the retained front.
//! - [`assignment`]: TA-to-section assignment built on the engine: data
//!   loading, penalty criteria and mutation agents.
//!
//! # Architecture
//!
//! The engine never inspects solutions. Everything domain-specific enters
//! through closures registered on [`evo::Evo`], so `assignment` is one
//! consumer among many rather than a dependency of the engine.

pub mod assignment;
pub mod evo;
pub mod report;
