//! Non-preemptive rule-driven scheduler (FCFS, SJF).
//!
//! # Algorithm
//!
//! 1. At each decision point, ask the dispatcher for the best arrived process.
//! 2. If nothing has arrived, jump the clock to the earliest pending arrival.
//! 3. Run the chosen process for its whole burst in one slice.
//! 4. Repeat until every process has completed.
//!
//! The rule is only consulted when a slice ends, so a shorter job that
//! arrives mid-slice never interrupts the running one.
//!
//! # Complexity
//! O(n²) for n processes.

use crate::dispatching::{rules, Dispatcher};
use crate::models::{ExecutionSlice, ProcessInput, ProcessResult, SchedulingResult};
use crate::validation::{validate_processes, InvalidProcessError};

/// Run-to-completion scheduler parameterized by a dispatching rule.
///
/// # Example
///
/// ```
/// use u_cpusched::scheduler::NonPreemptiveScheduler;
/// use u_cpusched::models::ProcessInput;
///
/// let processes = vec![
///     ProcessInput::new("A", 0, 5),
///     ProcessInput::new("B", 1, 3),
/// ];
/// let result = NonPreemptiveScheduler::fcfs().schedule(&processes).unwrap();
/// assert_eq!(result.completion_order(), vec!["A", "B"]);
/// assert_eq!(result.process("B").unwrap().start_time, 5);
/// ```
#[derive(Debug, Clone)]
pub struct NonPreemptiveScheduler {
    dispatcher: Dispatcher,
}

impl NonPreemptiveScheduler {
    /// Creates a scheduler driven by the given dispatcher.
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// First-Come-First-Served.
    pub fn fcfs() -> Self {
        Self::new(Dispatcher::new(rules::ArrivalOrder))
    }

    /// Shortest-Job-First (non-preemptive).
    pub fn sjf() -> Self {
        Self::new(Dispatcher::new(rules::ShortestBurst))
    }

    /// Simulates the process set to completion.
    ///
    /// # Errors
    /// [`InvalidProcessError`] if any descriptor has a negative arrival
    /// or non-positive burst, or if the set would overflow the clock.
    /// Nothing is simulated in that case.
    pub fn schedule(
        &self,
        processes: &[ProcessInput],
    ) -> Result<SchedulingResult, InvalidProcessError> {
        validate_processes(processes)?;

        let mut pending: Vec<usize> = (0..processes.len()).collect();
        let mut completed = Vec::with_capacity(processes.len());
        let mut timeline = Vec::with_capacity(processes.len());
        let mut now: i64 = 0;

        while !pending.is_empty() {
            let idx = match self.dispatcher.select(processes, &pending, now) {
                Some(idx) => idx,
                None => {
                    // CPU idle until the next arrival
                    match next_arrival(processes, &pending) {
                        Some(next) => {
                            log::trace!("{}: idle {now} -> {next}", self.dispatcher.rule_name());
                            now = next;
                            continue;
                        }
                        None => break,
                    }
                }
            };

            pending.retain(|&i| i != idx);
            let process = &processes[idx];
            let start = now.max(process.arrival_time);
            let end = start + process.burst_time;

            log::trace!(
                "{}: dispatch '{}' [{start}, {end})",
                self.dispatcher.rule_name(),
                process.id
            );

            timeline.push(ExecutionSlice::new(&process.id, start, end));
            completed.push(ProcessResult::completed(process, start, end));
            now = end;
        }

        let result = SchedulingResult::from_completed(completed, timeline);
        log::debug!(
            "{}: {} processes, makespan {}, avg waiting {:.2}",
            self.dispatcher.rule_name(),
            result.processes.len(),
            result.makespan(),
            result.average_waiting_time
        );
        Ok(result)
    }
}

/// Earliest arrival among `pending` (the idle-skip target).
fn next_arrival(processes: &[ProcessInput], pending: &[usize]) -> Option<i64> {
    pending.iter().map(|&i| processes[i].arrival_time).min()
}
