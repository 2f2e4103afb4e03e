//! Algorithm selection and simulation requests.
//!
//! `Algorithm` is the tagged choice a caller makes (FCFS, SJF, or RR with a
//! quantum). `SimulationRequest` is the serializable form a front end
//! submits: an algorithm tag, an optional quantum, and the process set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{run_fcfs, run_rr, run_sjf, DEFAULT_QUANTUM};
use crate::models::{ProcessInput, SchedulingResult};
use crate::validation::InvalidProcessError;

/// Algorithm tag without parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlgorithmKind {
    /// First-Come-First-Served.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest-Job-First (non-preemptive).
    #[serde(rename = "SJF")]
    Sjf,
    /// Round Robin.
    #[serde(rename = "RR")]
    RoundRobin,
}

impl AlgorithmKind {
    /// All supported algorithms.
    pub const ALL: [AlgorithmKind; 3] = [
        AlgorithmKind::Fcfs,
        AlgorithmKind::Sjf,
        AlgorithmKind::RoundRobin,
    ];

    /// Short tag ("FCFS", "SJF", "RR").
    pub fn tag(&self) -> &'static str {
        match self {
            AlgorithmKind::Fcfs => "FCFS",
            AlgorithmKind::Sjf => "SJF",
            AlgorithmKind::RoundRobin => "RR",
        }
    }

    /// Whether a running process can be interrupted.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, AlgorithmKind::RoundRobin)
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Failure to parse an algorithm tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError {
    /// The unrecognized input.
    pub input: String,
}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown scheduling algorithm '{}' (expected FCFS, SJF or RR)",
            self.input
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for AlgorithmKind {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FCFS" => Ok(AlgorithmKind::Fcfs),
            "SJF" => Ok(AlgorithmKind::Sjf),
            "RR" => Ok(AlgorithmKind::RoundRobin),
            _ => Err(ParseAlgorithmError {
                input: s.to_string(),
            }),
        }
    }
}

/// A fully parameterized scheduling algorithm.
///
/// # Example
/// ```
/// use u_cpusched::scheduler::Algorithm;
/// use u_cpusched::models::ProcessInput;
///
/// let ps = vec![ProcessInput::new("A", 0, 3)];
/// let algorithm: Algorithm = "rr".parse().unwrap();
/// assert_eq!(algorithm, Algorithm::RoundRobin { quantum: 2 });
/// assert_eq!(algorithm.run(&ps).unwrap().timeline.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "algorithm")]
pub enum Algorithm {
    /// First-Come-First-Served.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest-Job-First (non-preemptive).
    #[serde(rename = "SJF")]
    Sjf,
    /// Round Robin with a fixed quantum.
    #[serde(rename = "RR")]
    RoundRobin {
        /// Maximum slice length.
        quantum: i64,
    },
}

impl Algorithm {
    /// Round Robin with the default quantum.
    pub fn round_robin() -> Self {
        Algorithm::RoundRobin {
            quantum: DEFAULT_QUANTUM,
        }
    }

    /// The parameterless tag.
    pub fn kind(&self) -> AlgorithmKind {
        match self {
            Algorithm::Fcfs => AlgorithmKind::Fcfs,
            Algorithm::Sjf => AlgorithmKind::Sjf,
            Algorithm::RoundRobin { .. } => AlgorithmKind::RoundRobin,
        }
    }

    /// Runs this algorithm over `processes`.
    pub fn run(&self, processes: &[ProcessInput]) -> Result<SchedulingResult, InvalidProcessError> {
        match *self {
            Algorithm::Fcfs => run_fcfs(processes),
            Algorithm::Sjf => run_sjf(processes),
            Algorithm::RoundRobin { quantum } => run_rr(processes, quantum),
        }
    }
}

impl From<AlgorithmKind> for Algorithm {
    fn from(kind: AlgorithmKind) -> Self {
        match kind {
            AlgorithmKind::Fcfs => Algorithm::Fcfs,
            AlgorithmKind::Sjf => Algorithm::Sjf,
            AlgorithmKind::RoundRobin => Algorithm::round_robin(),
        }
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<AlgorithmKind>().map(Algorithm::from)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::RoundRobin { quantum } => write!(f, "RR(q={quantum})"),
            other => f.write_str(other.kind().tag()),
        }
    }
}

/// Input container for one simulation.
///
/// `quantum` is only read for Round Robin; when absent the default (2)
/// applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    /// Which algorithm to run.
    pub algorithm: AlgorithmKind,
    /// Round Robin quantum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<i64>,
    /// Processes to simulate.
    #[serde(default)]
    pub processes: Vec<ProcessInput>,
}

impl SimulationRequest {
    /// Creates a request.
    pub fn new(algorithm: AlgorithmKind, processes: Vec<ProcessInput>) -> Self {
        Self {
            algorithm,
            quantum: None,
            processes,
        }
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Resolves the tag and quantum into an [`Algorithm`].
    pub fn algorithm(&self) -> Algorithm {
        match self.algorithm {
            AlgorithmKind::RoundRobin => Algorithm::RoundRobin {
                quantum: self.quantum.unwrap_or(DEFAULT_QUANTUM),
            },
            kind => kind.into(),
        }
    }

    /// Runs the requested simulation.
    pub fn run(&self) -> Result<SchedulingResult, InvalidProcessError> {
        self.algorithm().run(&self.processes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ProcessField;

    fn sample() -> Vec<ProcessInput> {
        vec![
            ProcessInput::new("A", 0, 8),
            ProcessInput::new("B", 1, 4),
            ProcessInput::new("C", 2, 9),
            ProcessInput::new("D", 3, 5),
        ]
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!("FCFS".parse::<AlgorithmKind>(), Ok(AlgorithmKind::Fcfs));
        assert_eq!(" sjf ".parse::<AlgorithmKind>(), Ok(AlgorithmKind::Sjf));
        assert_eq!("Rr".parse::<Algorithm>(), Ok(Algorithm::round_robin()));
        let err = "LIFO".parse::<AlgorithmKind>().unwrap_err();
        assert!(err.to_string().contains("LIFO"));
    }

    #[test]
    fn test_display() {
        assert_eq!(AlgorithmKind::Sjf.to_string(), "SJF");
        assert_eq!(Algorithm::Fcfs.to_string(), "FCFS");
        assert_eq!(Algorithm::RoundRobin { quantum: 4 }.to_string(), "RR(q=4)");
    }

    #[test]
    fn test_run_dispatches_by_tag() {
        let ps = sample();
        let fcfs = Algorithm::Fcfs.run(&ps).unwrap();
        let sjf = Algorithm::Sjf.run(&ps).unwrap();
        assert_eq!(fcfs.completion_order(), vec!["A", "B", "C", "D"]);
        assert_eq!(sjf.completion_order(), vec!["A", "B", "D", "C"]);
        assert!(AlgorithmKind::RoundRobin.is_preemptive());
        assert!(!AlgorithmKind::Sjf.is_preemptive());
    }

    #[test]
    fn test_request_default_quantum() {
        let request = SimulationRequest::new(AlgorithmKind::RoundRobin, sample());
        assert_eq!(request.algorithm(), Algorithm::RoundRobin { quantum: 2 });

        let request = request.with_quantum(5);
        assert_eq!(request.algorithm(), Algorithm::RoundRobin { quantum: 5 });
        assert_eq!(request.run().unwrap().processes.len(), 4);
    }

    #[test]
    fn test_request_rejects_zero_quantum() {
        let request = SimulationRequest::new(AlgorithmKind::RoundRobin, sample()).with_quantum(0);
        let err = request.run().unwrap_err();
        assert_eq!(err.field, ProcessField::Quantum);
    }

    #[test]
    fn test_request_from_json() {
        let json = r#"{
            "algorithm": "RR",
            "quantum": 4,
            "processes": [
                {"id": "1", "name": "A", "arrivalTime": 0, "burstTime": 5},
                {"id": "2", "name": "B", "arrivalTime": 1, "burstTime": 3}
            ]
        }"#;
        let request: SimulationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.algorithm(), Algorithm::RoundRobin { quantum: 4 });
        let result = request.run().unwrap();
        assert_eq!(result.process("1").unwrap().process.name, "A");
    }

    #[test]
    fn test_algorithm_json_tag() {
        let json = serde_json::to_value(Algorithm::RoundRobin { quantum: 3 }).unwrap();
        assert_eq!(json["algorithm"], "RR");
        assert_eq!(json["quantum"], 3);
        let back: Algorithm = serde_json::from_str(r#"{"algorithm":"SJF"}"#).unwrap();
        assert_eq!(back, Algorithm::Sjf);
    }
}
