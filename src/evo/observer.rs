//! Progress reporting for the evolution loop.

use chrono::{DateTime, Utc};
use std::fmt;

/// Snapshot emitted every `status_interval` iterations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusReport {
    /// Zero-based iteration index.
    pub iteration: usize,

    /// Population size after pruning.
    pub population_size: usize,

    /// Clock reading taken at the start of the iteration.
    pub timestamp: DateTime<Utc>,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Iteration: {}", self.iteration)?;
        writeln!(f, "Population Size: {}", self.population_size)?;
        write!(f, "{}", self.timestamp)
    }
}

/// Why the evolution loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// All configured iterations ran.
    Completed,
    /// The wall-clock budget ran out.
    Deadline,
    /// The cancellation flag was raised.
    Cancelled,
}

/// Result of an evolution run, emitted once after the final prune.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolveSummary {
    /// Number of agent invocations performed.
    pub iterations: usize,

    /// Why the loop stopped.
    pub stop_reason: StopReason,

    /// Size of the final Pareto front.
    pub population_size: usize,

    /// Clock reading taken after the final prune.
    pub finished_at: DateTime<Utc>,
}

/// Receives status reports and the final summary of a run.
///
/// Both methods default to no-ops.
pub trait EvoObserver {
    fn on_status(&mut self, _report: &StatusReport) {}

    fn on_finish(&mut self, _summary: &EvolveSummary) {}
}

/// Forwards reports to the `log` facade at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl EvoObserver for LogObserver {
    fn on_status(&mut self, report: &StatusReport) {
        log::info!(
            "iteration {} population {} at {}",
            report.iteration,
            report.population_size,
            report.timestamp
        );
    }

    fn on_finish(&mut self, summary: &EvolveSummary) {
        log::info!(
            "evolution stopped ({:?}) after {} iterations; front size {}",
            summary.stop_reason,
            summary.iterations,
            summary.population_size
        );
    }
}

/// Collects every report in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    pub reports: Vec<StatusReport>,
    pub summary: Option<EvolveSummary>,
}

impl EvoObserver for RecordingObserver {
    fn on_status(&mut self, report: &StatusReport) {
        self.reports.push(report.clone());
    }

    fn on_finish(&mut self, summary: &EvolveSummary) {
        self.summary = Some(summary.clone());
    }
}
