//! The evolution engine.
//!
//! [`Evo`] owns the criterion and agent registries, the population, the
//! random source and the clock, and drives the loop:
//! pick agent → sample → apply → insert → prune/report → repeat.

use super::clock::{Clock, SystemClock};
use super::config::EvoConfig;
use super::error::EvoError;
use super::evaluation::Evaluation;
use super::observer::{EvoObserver, EvolveSummary, LogObserver, StatusReport, StopReason};
use super::population::Population;
use super::registry::Registry;
use super::types::{Agent, AgentError, Criterion};
use chrono::TimeDelta;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Multi-objective evolutionary search engine.
///
/// # Usage
///
/// ```
/// use u_evo::evo::{Evo, EvoConfig};
///
/// let mut evo: Evo<Vec<i32>> = Evo::seeded(42);
/// evo.register_criterion("sum", |v: &Vec<i32>| v.iter().sum::<i32>() as f64)
///     .unwrap();
/// evo.register_criterion("len", |v: &Vec<i32>| v.len() as f64).unwrap();
/// evo.register_agent(
///     "drop_last",
///     |mut picks: Vec<Vec<i32>>, _rng: &mut _| {
///         let mut v = picks.pop().unwrap_or_default();
///         v.pop();
///         v
///     },
///     1,
/// );
///
/// evo.insert(vec![3, 1, 2]);
/// let summary = evo.evolve(&EvoConfig::new(10)).unwrap();
/// assert_eq!(summary.population_size, evo.size());
/// ```
pub struct Evo<S, R = StdRng, C = SystemClock> {
    criteria: Registry<Criterion<S>>,
    agents: Registry<Agent<S, R>>,
    population: Population<S>,
    rng: R,
    clock: C,
}

impl<S: Clone + 'static> Evo<S, StdRng, SystemClock> {
    /// Creates an engine seeded from the operating system.
    pub fn new() -> Self {
        Self::with_parts(StdRng::from_os_rng(), SystemClock)
    }

    /// Creates an engine with a reproducible random source.
    pub fn seeded(seed: u64) -> Self {
        Self::with_parts(StdRng::seed_from_u64(seed), SystemClock)
    }
}

impl<S: Clone + 'static> Default for Evo<S, StdRng, SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone + 'static, R: Rng + 'static, C: Clock> Evo<S, R, C> {
    /// Creates an engine from an explicit random source and clock.
    pub fn with_parts(rng: R, clock: C) -> Self {
        Self {
            criteria: Registry::new(),
            agents: Registry::new(),
            population: Population::new(),
            rng,
            clock,
        }
    }

    // ---- Registration ----

    /// Registers a criterion, or replaces the one already under `name`.
    ///
    /// Criteria must be pure and deterministic. Once the population holds a
    /// solution, new names are rejected with [`EvoError::CriteriaFrozen`]
    /// so that every stored evaluation has the same shape.
    pub fn register_criterion<F>(&mut self, name: impl Into<String>, f: F) -> Result<(), EvoError>
    where
        F: Fn(&S) -> f64 + Send + Sync + 'static,
    {
        let name = name.into();
        if !self.population.is_empty() && !self.criteria.contains(&name) {
            return Err(EvoError::CriteriaFrozen(name));
        }
        self.criteria.register(name, Box::new(f));
        Ok(())
    }

    /// Registers an infallible agent consuming `arity` sampled solutions.
    pub fn register_agent<F>(&mut self, name: impl Into<String>, op: F, arity: usize)
    where
        F: Fn(Vec<S>, &mut R) -> S + Send + Sync + 'static,
    {
        self.register_fallible_agent(name, move |picks, rng: &mut R| Ok(op(picks, rng)), arity);
    }

    /// Registers an agent whose operator may fail.
    ///
    /// A failure aborts [`run_agent`](Self::run_agent) and any running
    /// [`evolve`](Self::evolve) with [`EvoError::AgentFailed`].
    pub fn register_fallible_agent<F>(&mut self, name: impl Into<String>, op: F, arity: usize)
    where
        F: Fn(Vec<S>, &mut R) -> Result<S, AgentError> + Send + Sync + 'static,
    {
        self.agents.register(
            name,
            Agent {
                op: Box::new(op),
                arity,
            },
        );
    }

    /// Criterion names in registration order.
    pub fn criterion_names(&self) -> impl Iterator<Item = &str> {
        self.criteria.names()
    }

    /// Agent names in registration order.
    pub fn agent_names(&self) -> impl Iterator<Item = &str> {
        self.agents.names()
    }

    /// Declared arity of the agent registered under `name`.
    pub fn agent_arity(&self, name: &str) -> Result<usize, EvoError> {
        self.agents
            .get(name)
            .map(Agent::arity)
            .ok_or_else(|| EvoError::UnknownAgent(name.to_string()))
    }

    // ---- Evaluation & population ----

    /// Applies every criterion, in registration order, to `solution`.
    pub fn evaluate(&self, solution: &S) -> Evaluation {
        Evaluation::new(self.criteria.iter().map(|(name, f)| (name, f(solution))))
    }

    /// Scores `solution` with the single criterion registered under `name`.
    pub fn criterion_score(&self, name: &str, solution: &S) -> Result<f64, EvoError> {
        self.criteria
            .get(name)
            .map(|f| f(solution))
            .ok_or_else(|| EvoError::UnknownCriterion(name.to_string()))
    }

    /// Evaluates `solution` and stores it, replacing any solution with an
    /// identical evaluation.
    pub fn insert(&mut self, solution: S) {
        let evaluation = self.evaluate(&solution);
        self.population.insert(evaluation, solution);
    }

    /// Deep copies of `k` solutions drawn uniformly with replacement.
    ///
    /// Empty when the population is empty.
    pub fn sample(&mut self, k: usize) -> Vec<S> {
        self.population.sample(k, &mut self.rng)
    }

    /// Number of distinct evaluations in the population.
    pub fn size(&self) -> usize {
        self.population.len()
    }

    /// The population.
    pub fn population(&self) -> &Population<S> {
        &self.population
    }

    /// Retained `(evaluation, solution)` pairs in insertion order.
    ///
    /// After [`evolve`](Self::evolve) returns this is the Pareto front.
    pub fn front(&self) -> impl Iterator<Item = (&Evaluation, &S)> {
        self.population.iter()
    }

    /// Consumes the engine, returning the retained pairs.
    pub fn into_front(self) -> Vec<(Evaluation, S)> {
        self.population.into_entries()
    }

    /// Discards every dominated solution.
    pub fn prune(&mut self) {
        let before = self.population.len();
        self.population.prune();
        log::debug!("pruned population {} -> {}", before, self.population.len());
    }

    // ---- Agents ----

    /// Runs the agent registered under `name` once and inserts its output.
    pub fn run_agent(&mut self, name: &str) -> Result<(), EvoError> {
        let index = self
            .agents
            .position(name)
            .ok_or_else(|| EvoError::UnknownAgent(name.to_string()))?;
        self.run_agent_at(index)
    }

    fn run_agent_at(&mut self, index: usize) -> Result<(), EvoError> {
        let (name, agent) = self.agents.get_index(index).ok_or(EvoError::NoAgents)?;
        let picks = self.population.sample(agent.arity, &mut self.rng);
        let solution = (agent.op)(picks, &mut self.rng).map_err(|source| EvoError::AgentFailed {
            agent: name.to_string(),
            source,
        })?;
        self.insert(solution);
        Ok(())
    }

    // ---- Evolution loop ----

    /// Runs the evolution loop, logging progress through [`LogObserver`].
    pub fn evolve(&mut self, config: &EvoConfig) -> Result<EvolveSummary, EvoError> {
        self.evolve_with_observer(config, &mut LogObserver)
    }

    /// Runs the evolution loop, reporting progress to `observer`.
    pub fn evolve_with_observer(
        &mut self,
        config: &EvoConfig,
        observer: &mut dyn EvoObserver,
    ) -> Result<EvolveSummary, EvoError> {
        self.evolve_with_cancel(config, observer, None)
    }

    /// Runs the evolution loop with an optional cancellation flag.
    ///
    /// Each iteration first checks the deadline and the flag; when either
    /// has tripped the population is pruned and the loop stops. Otherwise a
    /// uniformly chosen agent runs, and the population is pruned every
    /// `dominance_interval` iterations and pruned and reported every
    /// `status_interval` iterations. The loop always ends with a final prune
    /// and a summary, except when an agent fails.
    ///
    /// # Errors
    ///
    /// - [`EvoError::InvalidConfig`] if `config` fails validation
    /// - [`EvoError::NoAgents`] if iterations are requested with no agents
    /// - [`EvoError::AgentFailed`] if an operator fails
    pub fn evolve_with_cancel(
        &mut self,
        config: &EvoConfig,
        observer: &mut dyn EvoObserver,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<EvolveSummary, EvoError> {
        config.validate().map_err(EvoError::InvalidConfig)?;
        if config.iterations > 0 && self.agents.is_empty() {
            return Err(EvoError::NoAgents);
        }

        let start = self.clock.now();
        let deadline = TimeDelta::from_std(config.time_limit)
            .ok()
            .and_then(|budget| start.checked_add_signed(budget));

        let mut stop_reason = StopReason::Completed;
        let mut iterations = 0usize;

        for i in 0..config.iterations {
            let now = self.clock.now();

            if deadline.is_some_and(|d| now >= d) {
                self.prune();
                stop_reason = StopReason::Deadline;
                break;
            }
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    self.prune();
                    stop_reason = StopReason::Cancelled;
                    break;
                }
            }

            let pick = self.rng.random_range(0..self.agents.len());
            self.run_agent_at(pick)?;
            iterations += 1;

            if i % config.dominance_interval == 0 {
                self.prune();
            }

            if i % config.status_interval == 0 {
                self.prune();
                observer.on_status(&StatusReport {
                    iteration: i,
                    population_size: self.population.len(),
                    timestamp: now,
                });
            }
        }

        self.prune();

        let summary = EvolveSummary {
            iterations,
            stop_reason,
            population_size: self.population.len(),
            finished_at: self.clock.now(),
        };
        observer.on_finish(&summary);
        Ok(summary)
    }
}

impl<S: fmt::Debug, R, C> fmt::Display for Evo<S, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (evaluation, solution) in self.population.iter() {
            writeln!(f, "{evaluation}")?;
            writeln!(f, ":\t{solution:?}")?;
        }
        Ok(())
    }
}

impl<S, R, C> fmt::Debug for Evo<S, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Evo")
            .field("criteria", &self.criteria.names().collect::<Vec<_>>())
            .field("agents", &self.agents.names().collect::<Vec<_>>())
            .field("population", &self.population.len())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
