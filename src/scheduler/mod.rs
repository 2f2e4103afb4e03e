//! CPU scheduling algorithms and KPI evaluation.
//!
//! # Algorithms
//!
//! | Entry point | Policy | Preemptive |
//! |-------------|--------|------------|
//! | [`run_fcfs`] | earliest arrival first | no |
//! | [`run_sjf`] | shortest burst first among arrived | no |
//! | [`run_rr`] | FIFO queue, fixed quantum | yes |
//!
//! Every entry point validates its input first, then replays the whole
//! process set deterministically: identical input always yields an
//! identical [`SchedulingResult`]. When no process is ready the clock
//! jumps straight to the next arrival.
//!
//! # KPI
//!
//! [`ScheduleKpi`] derives utilization, idle time, throughput, response
//! time, and burst statistics from a result.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod algorithm;
mod kpi;
mod non_preemptive;
mod round_robin;

pub use algorithm::{Algorithm, AlgorithmKind, ParseAlgorithmError, SimulationRequest};
pub use kpi::ScheduleKpi;
pub use non_preemptive::NonPreemptiveScheduler;
pub use round_robin::{RoundRobinScheduler, DEFAULT_QUANTUM};

use crate::models::{ProcessInput, SchedulingResult};
use crate::validation::InvalidProcessError;

/// First-Come-First-Served.
pub fn run_fcfs(processes: &[ProcessInput]) -> Result<SchedulingResult, InvalidProcessError> {
    NonPreemptiveScheduler::fcfs().schedule(processes)
}

/// Shortest-Job-First, non-preemptive.
pub fn run_sjf(processes: &[ProcessInput]) -> Result<SchedulingResult, InvalidProcessError> {
    NonPreemptiveScheduler::sjf().schedule(processes)
}

/// Round Robin with the given quantum ([`DEFAULT_QUANTUM`] is the usual choice).
pub fn run_rr(
    processes: &[ProcessInput],
    quantum: i64,
) -> Result<SchedulingResult, InvalidProcessError> {
    RoundRobinScheduler::new(quantum).schedule(processes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workload::WorkloadGenerator;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn all_algorithms() -> Vec<Algorithm> {
        vec![
            Algorithm::Fcfs,
            Algorithm::Sjf,
            Algorithm::RoundRobin { quantum: 1 },
            Algorithm::round_robin(),
            Algorithm::RoundRobin { quantum: 4 },
        ]
    }

    fn random_workloads() -> Vec<Vec<ProcessInput>> {
        let mut rng = SmallRng::seed_from_u64(42);
        let generator = WorkloadGenerator::new(8).with_arrival_window(30);
        (0..50).map(|_| generator.generate(&mut rng)).collect()
    }

    #[test]
    fn test_timing_invariants_hold() {
        for ps in random_workloads() {
            for algorithm in all_algorithms() {
                let result = algorithm.run(&ps).unwrap();
                assert_eq!(result.processes.len(), ps.len(), "{algorithm}");
                for r in &result.processes {
                    assert!(r.waiting_time >= 0, "{algorithm}: {r:?}");
                    assert!(r.turnaround_time >= r.process.burst_time, "{algorithm}: {r:?}");
                    assert!(r.start_time >= r.process.arrival_time, "{algorithm}: {r:?}");
                }
            }
        }
    }

    #[test]
    fn test_cpu_time_conserved() {
        for ps in random_workloads() {
            let bursts: i64 = ps.iter().map(|p| p.burst_time).sum();
            for algorithm in all_algorithms() {
                let result = algorithm.run(&ps).unwrap();
                let busy: i64 = result.timeline.iter().map(|s| s.duration()).sum();
                assert_eq!(busy, bursts, "{algorithm}");

                // Slices never overlap
                for pair in result.timeline.windows(2) {
                    assert!(pair[0].end <= pair[1].start, "{algorithm}");
                }
            }
        }
    }

    #[test]
    fn test_non_preemptive_single_slice() {
        for ps in random_workloads() {
            for algorithm in [Algorithm::Fcfs, Algorithm::Sjf] {
                let result = algorithm.run(&ps).unwrap();
                let charged: i64 = result
                    .processes
                    .iter()
                    .map(|r| r.completion_time - r.start_time)
                    .sum();
                let bursts: i64 = ps.iter().map(|p| p.burst_time).sum();
                assert_eq!(charged, bursts);
            }
        }
    }

    #[test]
    fn test_rr_slices_bounded_by_quantum() {
        for ps in random_workloads() {
            let result = run_rr(&ps, 3).unwrap();
            assert!(result.timeline.iter().all(|s| s.duration() <= 3));
        }
    }

    #[test]
    fn test_deterministic_and_idempotent() {
        for ps in random_workloads().into_iter().take(10) {
            let before = ps.clone();
            for algorithm in all_algorithms() {
                let first = algorithm.run(&ps).unwrap();
                let second = algorithm.run(&ps).unwrap();
                assert_eq!(first, second);
                assert_eq!(
                    serde_json::to_string(&first).unwrap(),
                    serde_json::to_string(&second).unwrap()
                );
            }
            assert_eq!(ps, before);
        }
    }

    #[test]
    fn test_first_arrival_not_before_its_time() {
        let ps = vec![
            ProcessInput::new("late", 7, 2),
            ProcessInput::new("first", 5, 4),
            ProcessInput::new("last", 9, 1),
        ];
        for algorithm in all_algorithms() {
            let result = algorithm.run(&ps).unwrap();
            assert_eq!(result.process("first").unwrap().start_time, 5, "{algorithm}");
            assert_eq!(result.timeline[0].start, 5, "{algorithm}");
        }
    }

    #[test]
    fn test_sjf_never_worse_on_average_waiting() {
        // All processes ready at t=0: SJF is optimal for mean waiting time
        let mut rng = SmallRng::seed_from_u64(7);
        let generator = WorkloadGenerator::new(6).with_arrival_window(0);
        for _ in 0..20 {
            let ps = generator.generate(&mut rng);
            let fcfs = run_fcfs(&ps).unwrap();
            let sjf = run_sjf(&ps).unwrap();
            assert!(sjf.average_waiting_time <= fcfs.average_waiting_time + 1e-10);
        }
    }

    #[test]
    fn test_empty_input_all_algorithms() {
        for algorithm in all_algorithms() {
            let result = algorithm.run(&[]).unwrap();
            assert!(result.is_empty());
            assert_eq!(result.average_waiting_time, 0.0);
            assert_eq!(result.average_turnaround_time, 0.0);
        }
    }

    #[test]
    fn test_invalid_input_rejected_by_all() {
        let ps = vec![ProcessInput::new("A", -1, 3)];
        for algorithm in all_algorithms() {
            let err = algorithm.run(&ps).unwrap_err();
            assert_eq!(err.process_id.as_deref(), Some("A"));
        }
    }

    #[test]
    fn test_clock_overflow_rejected_by_all() {
        let ps = vec![ProcessInput::new("A", 0, 4), ProcessInput::new("B", i64::MAX - 1, 5)];
        for algorithm in all_algorithms() {
            let err = algorithm.run(&ps).unwrap_err();
            assert_eq!(err.field, crate::validation::ProcessField::BurstTime);
            assert_eq!(err.process_id.as_deref(), Some("B"));
        }
    }

    #[test]
    fn test_near_limit_workload_averages() {
        // Turnarounds sum past i64::MAX even though each one fits
        let half = i64::MAX / 2;
        let ps = vec![ProcessInput::new("A", 0, half), ProcessInput::new("B", 0, half)];
        let algorithms = [
            Algorithm::Fcfs,
            Algorithm::Sjf,
            Algorithm::RoundRobin { quantum: half },
        ];
        for algorithm in algorithms {
            let result = algorithm.run(&ps).unwrap();
            assert_eq!(result.makespan(), 2 * half);
            assert!(result.average_turnaround_time > half as f64);
            let kpi = ScheduleKpi::calculate(&result);
            assert!(kpi.average_response_time >= 0.0);
        }
    }
}
