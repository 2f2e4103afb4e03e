//! Process descriptor model.
//!
//! A process is the unit the CPU scheduler dispatches: it becomes eligible
//! at its arrival time and needs a fixed amount of CPU time (its burst).

use serde::{Deserialize, Serialize};

/// A process submitted for simulation.
///
/// Immutable request data. The engine reads it and produces new
/// [`ProcessResult`](super::ProcessResult) values; it never mutates the
/// caller's descriptors.
///
/// # Time Representation
/// All times are integer time units relative to the simulation epoch (t=0).
/// Fields are signed so that malformed input can be represented and
/// rejected rather than silently wrapped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessInput {
    /// Caller-assigned unique identifier.
    pub id: String,
    /// Display label.
    #[serde(default)]
    pub name: String,
    /// Time at which the process becomes eligible for execution.
    pub arrival_time: i64,
    /// Total CPU time the process requires.
    pub burst_time: i64,
}

impl ProcessInput {
    /// Creates a process; the name defaults to the ID.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            arrival_time,
            burst_time,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Earliest time the process could possibly finish.
    #[inline]
    pub fn earliest_completion(&self) -> i64 {
        self.arrival_time + self.burst_time
    }
}
