//! Built-in dispatching rules.
//!
//! - **FCFS**: [`ArrivalOrder`]
//! - **SJF**: [`ShortestBurst`]
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{DispatchingRule, RuleScore};
use crate::models::ProcessInput;

/// First-Come-First-Served.
///
/// Prioritizes the process that arrived earliest.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrivalOrder;

impl DispatchingRule for ArrivalOrder {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, process: &ProcessInput) -> RuleScore {
        process.arrival_time
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }
}

/// Shortest Job First (non-preemptive).
///
/// Prioritizes the ready process with the smallest burst time.
/// Minimizes mean waiting time among non-preemptive policies.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &ProcessInput) -> RuleScore {
        process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}
