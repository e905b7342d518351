//! Run summary types for hosts that execute several scenarios.

use crate::scenario::Scenario;
use crate::values::ValueSet;
use serde::Serialize;
use std::process::ExitCode;

/// Outcome of one finished scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioOutcome {
    /// Scenario name.
    pub name: String,
    /// Failed assertions in that scenario.
    pub failures: u32,
}

/// Aggregated outcomes across a run of independent scenarios.
///
/// This is a reporting convenience on top of the chain aggregator: chains
/// still combine with `+`, but a host that wants per-scenario totals records
/// each finished chain here before (or instead of) summing them.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Per-scenario outcomes, in recording order.
    pub outcomes: Vec<ScenarioOutcome>,
    /// Total failed assertions across all recorded scenarios.
    pub total_failures: u32,
}

impl RunSummary {
    /// Creates an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finished chain's name and failure count.
    pub fn record<V: ValueSet>(&mut self, chain: &Scenario<V>) {
        self.outcomes.push(ScenarioOutcome {
            name: chain.name().to_string(),
            failures: chain.failure_count(),
        });
        self.total_failures += chain.failure_count();
    }

    /// Number of recorded scenarios.
    pub fn scenario_count(&self) -> usize {
        self.outcomes.len()
    }

    /// True if every recorded scenario passed.
    pub fn passed(&self) -> bool {
        self.total_failures == 0
    }

    /// Process exit status: zero on success, otherwise the total failure
    /// count clamped to the 8-bit range.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.total_failures.min(255) as u8)
    }
}
