//! Random workload generation.
//!
//! Produces reproducible process sets for demos and property checks.
//! Every generated set satisfies the engine preconditions and the
//! configured [`InputLimits`].

use rand::Rng;

use crate::models::ProcessInput;
use crate::validation::InputLimits;

/// Generator of random process sets.
///
/// Processes are named `P1..Pn` with IDs `p1..pn`. Arrivals are drawn from
/// `0..=arrival_window` (capped by the limits), bursts from the limits'
/// burst range.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_cpusched::workload::WorkloadGenerator;
///
/// let mut rng = SmallRng::seed_from_u64(1);
/// let processes = WorkloadGenerator::new(5).generate(&mut rng);
/// assert_eq!(processes.len(), 5);
/// assert_eq!(processes[0].name, "P1");
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    count: usize,
    arrival_window: i64,
    limits: InputLimits,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes (capped by the limits).
    pub fn new(count: usize) -> Self {
        Self {
            count,
            arrival_window: 20,
            limits: InputLimits::default(),
        }
    }

    /// Sets the latest possible arrival time.
    pub fn with_arrival_window(mut self, window: i64) -> Self {
        self.arrival_window = window.max(0);
        self
    }

    /// Sets the limits the generated set must respect.
    pub fn with_limits(mut self, limits: InputLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Generates one process set.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<ProcessInput> {
        let count = self.count.min(self.limits.max_processes);
        let max_arrival = self.arrival_window.min(self.limits.max_arrival_time).max(0);
        let min_burst = self.limits.min_burst_time.max(1);
        let max_burst = self.limits.max_burst_time.max(min_burst);

        (1..=count)
            .map(|i| {
                let arrival = rng.random_range(0..=max_arrival);
                let burst = rng.random_range(min_burst..=max_burst);
                ProcessInput::new(format!("p{i}"), arrival, burst).with_name(format!("P{i}"))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_processes;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_sets_are_valid() {
        let mut rng = SmallRng::seed_from_u64(42);
        let generator = WorkloadGenerator::new(10);
        let limits = InputLimits::default();
        for _ in 0..100 {
            let ps = generator.generate(&mut rng);
            assert_eq!(ps.len(), 10);
            assert!(validate_processes(&ps).is_ok());
            assert!(limits.check_set(&ps).is_ok());
            assert!(ps.iter().all(|p| p.arrival_time <= 20));
        }
    }

    #[test]
    fn test_count_capped_by_limits() {
        let mut rng = SmallRng::seed_from_u64(1);
        let ps = WorkloadGenerator::new(50)
            .with_limits(InputLimits::default().with_max_processes(4))
            .generate(&mut rng);
        assert_eq!(ps.len(), 4);
    }

    #[test]
    fn test_same_seed_same_workload() {
        let generator = WorkloadGenerator::new(6);
        let a = generator.generate(&mut SmallRng::seed_from_u64(9));
        let b = generator.generate(&mut SmallRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_ranges() {
        let mut rng = SmallRng::seed_from_u64(3);
        let ps = WorkloadGenerator::new(8)
            .with_arrival_window(0)
            .with_limits(InputLimits::default().with_burst_range(2, 3))
            .generate(&mut rng);
        assert!(ps.iter().all(|p| p.arrival_time == 0));
        assert!(ps.iter().all(|p| (2..=3).contains(&p.burst_time)));
    }
}
