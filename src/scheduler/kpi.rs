//! Schedule quality metrics (KPIs).
//!
//! Computes standard CPU scheduling indicators from a finished run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | Idle Time | Span minus busy time, where span = makespan - first arrival |
//! | CPU Utilization | Busy time / span |
//! | Throughput | Processes completed per time unit of span |
//! | Avg Response | Mean of start - arrival |
//! | Burst Range | Min and max burst time |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use crate::models::SchedulingResult;

/// Schedule performance indicators.
///
/// All zero for an empty result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleKpi {
    /// Number of processes.
    pub process_count: usize,
    /// Latest completion time.
    pub makespan: i64,
    /// Chart horizon: max of makespan and every `arrival + burst`.
    pub total_time: i64,
    /// Sum of burst times (CPU busy time).
    pub total_burst: i64,
    /// CPU idle time between the first arrival and the makespan.
    pub idle_time: i64,
    /// Busy fraction of the span (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Mean burst time.
    pub average_burst_time: f64,
    /// Mean arrival time.
    pub average_arrival_time: f64,
    /// Smallest burst time.
    pub min_burst_time: i64,
    /// Largest burst time.
    pub max_burst_time: i64,
    /// Mean waiting time.
    pub average_waiting_time: f64,
    /// Mean turnaround time.
    pub average_turnaround_time: f64,
    /// Mean delay between arrival and first dispatch.
    pub average_response_time: f64,
    /// Longest waiting time of any single process.
    pub max_waiting_time: i64,
}

impl ScheduleKpi {
    /// Computes KPIs from a finished run.
    pub fn calculate(result: &SchedulingResult) -> Self {
        let processes = &result.processes;
        if processes.is_empty() {
            return Self::default();
        }

        let n = processes.len() as f64;
        let makespan = result.makespan();
        let first_arrival = processes
            .iter()
            .map(|p| p.process.arrival_time)
            .min()
            .unwrap_or(0);
        let total_time = processes
            .iter()
            .map(|p| p.process.earliest_completion())
            .fold(makespan, i64::max);

        let mut total_burst: i64 = 0;
        let mut total_arrival: i128 = 0;
        let mut total_response: i128 = 0;
        let mut min_burst = i64::MAX;
        let mut max_burst = i64::MIN;
        let mut max_waiting: i64 = 0;

        for p in processes {
            total_burst += p.process.burst_time;
            total_arrival += i128::from(p.process.arrival_time);
            total_response += i128::from(p.response_time);
            min_burst = min_burst.min(p.process.burst_time);
            max_burst = max_burst.max(p.process.burst_time);
            max_waiting = max_waiting.max(p.waiting_time);
        }

        let span = makespan - first_arrival;
        let (cpu_utilization, throughput) = if span > 0 {
            (total_burst as f64 / span as f64, n / span as f64)
        } else {
            (0.0, 0.0)
        };

        Self {
            process_count: processes.len(),
            makespan,
            total_time,
            total_burst,
            idle_time: (span - total_burst).max(0),
            cpu_utilization,
            throughput,
            average_burst_time: total_burst as f64 / n,
            average_arrival_time: total_arrival as f64 / n,
            min_burst_time: min_burst,
            max_burst_time: max_burst,
            average_waiting_time: result.average_waiting_time,
            average_turnaround_time: result.average_turnaround_time,
            average_response_time: total_response as f64 / n,
            max_waiting_time: max_waiting,
        }
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_waiting: i64, min_utilization: f64) -> bool {
        self.max_waiting_time <= max_waiting && self.cpu_utilization >= min_utilization
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessInput;
    use crate::scheduler::{run_fcfs, run_rr};

    #[test]
    fn test_kpi_busy_cpu() {
        let ps = vec![
            ProcessInput::new("A", 0, 5),
            ProcessInput::new("B", 1, 3),
            ProcessInput::new("C", 2, 8),
        ];
        let kpi = ScheduleKpi::calculate(&run_fcfs(&ps).unwrap());

        assert_eq!(kpi.process_count, 3);
        assert_eq!(kpi.makespan, 16);
        assert_eq!(kpi.total_time, 16);
        assert_eq!(kpi.total_burst, 16);
        assert_eq!(kpi.idle_time, 0);
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
        assert!((kpi.throughput - 3.0 / 16.0).abs() < 1e-10);
        assert_eq!((kpi.min_burst_time, kpi.max_burst_time), (3, 8));
        assert!((kpi.average_burst_time - 16.0 / 3.0).abs() < 1e-10);
        assert!((kpi.average_arrival_time - 1.0).abs() < 1e-10);
        assert_eq!(kpi.max_waiting_time, 6);
        // Non-preemptive: response time equals waiting time
        assert!((kpi.average_response_time - kpi.average_waiting_time).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_idle_gap() {
        let ps = vec![ProcessInput::new("A", 5, 2), ProcessInput::new("B", 20, 3)];
        let kpi = ScheduleKpi::calculate(&run_fcfs(&ps).unwrap());

        // Span [5, 23) = 18, busy 5
        assert_eq!(kpi.makespan, 23);
        assert_eq!(kpi.idle_time, 13);
        assert!((kpi.cpu_utilization - 5.0 / 18.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_response_under_rr() {
        let ps = vec![
            ProcessInput::new("A", 0, 5),
            ProcessInput::new("B", 1, 3),
            ProcessInput::new("C", 2, 8),
        ];
        let kpi = ScheduleKpi::calculate(&run_rr(&ps, 4).unwrap());
        // Responses: A 0, B 3, C 5
        assert!((kpi.average_response_time - 8.0 / 3.0).abs() < 1e-10);
        assert!(kpi.average_response_time < kpi.average_waiting_time);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = ScheduleKpi::calculate(&SchedulingResult::default());
        assert_eq!(kpi, ScheduleKpi::default());
        assert_eq!(kpi.makespan, 0);
        assert_eq!(kpi.cpu_utilization, 0.0);
    }

    #[test]
    fn test_meets_thresholds() {
        let ps = vec![ProcessInput::new("A", 0, 4), ProcessInput::new("B", 0, 2)];
        let kpi = ScheduleKpi::calculate(&run_fcfs(&ps).unwrap()); // B waits 4
        assert!(kpi.meets_thresholds(4, 1.0));
        assert!(!kpi.meets_thresholds(3, 0.0));
        assert!(!kpi.meets_thresholds(10, 1.5));
    }
}
