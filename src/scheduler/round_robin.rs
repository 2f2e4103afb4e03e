//! Round Robin scheduler.
//!
//! # Algorithm
//!
//! 1. Admit every process whose arrival time is `<= now` into a FIFO queue,
//!    in arrival order (input order on ties).
//! 2. Pop the head and run it for `min(remaining, quantum)`.
//! 3. Admit processes that arrived during that slice.
//! 4. If the process still has work, push it to the tail, behind the
//!    newcomers from step 3.
//! 5. If the queue is empty but processes are still to arrive, jump the
//!    clock to the next arrival.
//!
//! The queue and all bookkeeping are local to one call; the input slice
//! is only read.

use std::collections::VecDeque;

use crate::models::{ExecutionSlice, ProcessInput, ProcessResult, SchedulingResult};
use crate::validation::{validate_processes, validate_quantum, InvalidProcessError};

/// Default time quantum.
pub const DEFAULT_QUANTUM: i64 = 2;

/// Preemptive fixed-quantum scheduler.
///
/// # Example
///
/// ```
/// use u_cpusched::scheduler::RoundRobinScheduler;
/// use u_cpusched::models::ProcessInput;
///
/// let processes = vec![ProcessInput::new("A", 0, 3), ProcessInput::new("B", 0, 1)];
/// let result = RoundRobinScheduler::new(2).schedule(&processes).unwrap();
/// // A runs [0,2), B runs [2,3), A finishes [3,4)
/// assert_eq!(result.completion_order(), vec!["B", "A"]);
/// assert_eq!(result.timeline.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct RoundRobinScheduler {
    quantum: i64,
}

impl RoundRobinScheduler {
    /// Creates a scheduler with the given quantum.
    ///
    /// The quantum is validated when [`schedule`](Self::schedule) runs.
    pub fn new(quantum: i64) -> Self {
        Self { quantum }
    }

    /// The configured quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }

    /// Simulates the process set to completion.
    ///
    /// Results are in completion order; `start_time` is the first dispatch.
    ///
    /// # Errors
    /// [`InvalidProcessError`] for a non-positive quantum, a negative
    /// arrival, a non-positive burst, or a set that would overflow the clock.
    pub fn schedule(
        &self,
        processes: &[ProcessInput],
    ) -> Result<SchedulingResult, InvalidProcessError> {
        validate_quantum(self.quantum)?;
        validate_processes(processes)?;

        let n = processes.len();
        let mut by_arrival: Vec<usize> = (0..n).collect();
        by_arrival.sort_by_key(|&i| processes[i].arrival_time); // stable

        let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();
        let mut first_dispatch: Vec<Option<i64>> = vec![None; n];
        let mut ready: VecDeque<usize> = VecDeque::with_capacity(n);
        let mut next_arrival = 0;
        let mut completed = Vec::with_capacity(n);
        let mut timeline = Vec::new();
        let mut now: i64 = 0;

        loop {
            admit_arrivals(processes, &by_arrival, &mut next_arrival, now, &mut ready);

            let Some(idx) = ready.pop_front() else {
                match by_arrival.get(next_arrival) {
                    Some(&i) => {
                        log::trace!("RR: idle {now} -> {}", processes[i].arrival_time);
                        now = processes[i].arrival_time;
                        continue;
                    }
                    None => break,
                }
            };

            let process = &processes[idx];
            let start = *first_dispatch[idx].get_or_insert(now);
            let run = remaining[idx].min(self.quantum);
            let end = now + run;

            log::trace!("RR: dispatch '{}' [{now}, {end})", process.id);
            timeline.push(ExecutionSlice::new(&process.id, now, end));
            remaining[idx] -= run;
            now = end;

            // Newcomers go ahead of the preempted process
            admit_arrivals(processes, &by_arrival, &mut next_arrival, now, &mut ready);

            if remaining[idx] == 0 {
                completed.push(ProcessResult::completed(process, start, now));
            } else {
                ready.push_back(idx);
            }
        }

        let result = SchedulingResult::from_completed(completed, timeline);
        log::debug!(
            "RR(q={}): {} processes, {} slices, makespan {}, avg waiting {:.2}",
            self.quantum,
            result.processes.len(),
            result.timeline.len(),
            result.makespan(),
            result.average_waiting_time
        );
        Ok(result)
    }
}

impl Default for RoundRobinScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_QUANTUM)
    }
}

fn admit_arrivals(
    processes: &[ProcessInput],
    by_arrival: &[usize],
    next: &mut usize,
    now: i64,
    ready: &mut VecDeque<usize>,
) {
    while let Some(&i) = by_arrival.get(*next) {
        if processes[i].arrival_time > now {
            break;
        }
        ready.push_back(i);
        *next += 1;
    }
}
