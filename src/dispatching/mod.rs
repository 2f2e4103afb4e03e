//! Dispatching rules for non-preemptive CPU scheduling.
//!
//! A rule scores each ready process; the [`Dispatcher`] picks the lowest
//! score and breaks ties by input position, so equal-scored processes
//! run in the order the caller listed them.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, Dispatcher};
//! use u_cpusched::models::ProcessInput;
//!
//! let processes = vec![
//!     ProcessInput::new("A", 0, 8),
//!     ProcessInput::new("B", 0, 3),
//! ];
//! let dispatcher = Dispatcher::new(rules::ShortestBurst);
//! assert_eq!(dispatcher.select(&processes, &[0, 1], 0), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod engine;
pub mod rules;

pub use engine::Dispatcher;

use crate::models::ProcessInput;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first). Integer, since all
/// simulated times are integral.
pub type RuleScore = i64;

/// A rule that ranks ready processes at a decision point.
///
/// # Score Convention
/// **Lower score = higher priority.**
pub trait DispatchingRule: Send + Sync + Debug {
    /// Short rule name (e.g., "FCFS", "SJF").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a ready process.
    fn evaluate(&self, process: &ProcessInput) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
