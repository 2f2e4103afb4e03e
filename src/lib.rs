//! CPU scheduling simulation for the U-Engine ecosystem.
//!
//! Replays a set of processes (arrival time + burst time) under a classic
//! single-CPU policy and reports per-process timings and averages.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessInput`, `ProcessResult`,
//!   `ExecutionSlice`, `SchedulingResult`
//! - **`dispatching`**: Selection rules for non-preemptive policies
//! - **`scheduler`**: FCFS, SJF, Round Robin, algorithm selection, KPIs
//! - **`validation`**: Engine preconditions and entry-form limits
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use u_cpusched::{run_fcfs, ProcessInput};
//!
//! let processes = vec![
//!     ProcessInput::new("A", 0, 5),
//!     ProcessInput::new("B", 1, 3),
//!     ProcessInput::new("C", 2, 8),
//! ];
//! let result = run_fcfs(&processes).unwrap();
//! assert_eq!(result.completion_order(), vec!["A", "B", "C"]);
//! assert!((result.average_waiting_time - 10.0 / 3.0).abs() < 1e-10);
//! ```
//!
//! # Architecture
//!
//! The engine is a family of pure, synchronous functions. Nothing is shared
//! between calls; each run validates its input, then recomputes the whole
//! schedule from scratch.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use models::{ExecutionSlice, ProcessInput, ProcessResult, SchedulingResult};
pub use scheduler::{run_fcfs, run_rr, run_sjf, Algorithm, DEFAULT_QUANTUM};
pub use validation::{InvalidProcessError, ProcessField};
