//! Simulation result model.
//!
//! A scheduling result is the terminal value of one simulation run:
//! per-process timings in completion order, the CPU timeline, and
//! the aggregate averages.

use serde::{Deserialize, Serialize};

use super::ProcessInput;

/// A process after simulation, with engine-computed timings.
///
/// # Invariants
/// - `turnaround_time = completion_time - arrival_time >= burst_time`
/// - `waiting_time = turnaround_time - burst_time >= 0`
/// - `response_time = start_time - arrival_time`, at most `waiting_time`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResult {
    /// The original descriptor.
    #[serde(flatten)]
    pub process: ProcessInput,
    /// Time of first dispatch.
    pub start_time: i64,
    /// Time at which the last slice ended.
    pub completion_time: i64,
    /// Arrival to completion.
    pub turnaround_time: i64,
    /// Time spent ready but not executing.
    pub waiting_time: i64,
    /// Delay between arrival and first dispatch.
    pub response_time: i64,
}

impl ProcessResult {
    /// Derives turnaround, waiting and response time for a finished process.
    pub fn completed(process: &ProcessInput, start_time: i64, completion_time: i64) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        Self {
            process: process.clone(),
            start_time,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time,
            response_time: start_time - process.arrival_time,
        }
    }

    /// Process ID.
    #[inline]
    pub fn id(&self) -> &str {
        &self.process.id
    }
}

/// One uninterrupted stretch of CPU time given to a process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionSlice {
    /// Process that held the CPU.
    pub process_id: String,
    /// Slice start.
    pub start: i64,
    /// Slice end (exclusive).
    pub end: i64,
}

impl ExecutionSlice {
    /// Creates a slice.
    pub fn new(process_id: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            process_id: process_id.into(),
            start,
            end,
        }
    }

    /// Slice length.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Output of one scheduling run.
///
/// On empty input both lists are empty and the averages are `0.0`
/// (averages are not computed on empty input).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingResult {
    /// Finished processes in completion order.
    pub processes: Vec<ProcessResult>,
    /// CPU slices in execution order.
    pub timeline: Vec<ExecutionSlice>,
    /// Mean waiting time.
    pub average_waiting_time: f64,
    /// Mean turnaround time.
    pub average_turnaround_time: f64,
}

impl SchedulingResult {
    /// Builds a result from completed processes and computes the averages.
    pub fn from_completed(processes: Vec<ProcessResult>, timeline: Vec<ExecutionSlice>) -> Self {
        let average_waiting_time = mean(processes.iter().map(|p| p.waiting_time));
        let average_turnaround_time = mean(processes.iter().map(|p| p.turnaround_time));
        Self {
            processes,
            timeline,
            average_waiting_time,
            average_turnaround_time,
        }
    }

    /// Looks up a process result by ID.
    pub fn process(&self, id: &str) -> Option<&ProcessResult> {
        self.processes.iter().find(|p| p.id() == id)
    }

    /// Process IDs in completion order.
    pub fn completion_order(&self) -> Vec<&str> {
        self.processes.iter().map(|p| p.id()).collect()
    }

    /// Slices belonging to one process.
    pub fn slices_for(&self, id: &str) -> Vec<&ExecutionSlice> {
        self.timeline.iter().filter(|s| s.process_id == id).collect()
    }

    /// Latest completion time (0 if empty).
    pub fn makespan(&self) -> i64 {
        self.processes
            .iter()
            .map(|p| p.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Whether the run had no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}

fn mean(values: impl ExactSizeIterator<Item = i64>) -> f64 {
    let n = values.len();
    if n == 0 {
        return 0.0;
    }
    // Widened: n values near the clock limit overflow i64
    values.map(i128::from).sum::<i128>() as f64 / n as f64
}
