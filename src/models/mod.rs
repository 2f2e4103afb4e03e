//! CPU scheduling domain models.
//!
//! Provides the data types exchanged between the caller and the engine:
//! the process descriptors that go in and the results that come out.
//!
//! | Type | Role |
//! |------|------|
//! | `ProcessInput` | Caller-supplied descriptor (arrival, burst) |
//! | `ProcessResult` | Descriptor plus start/completion/waiting/turnaround |
//! | `ExecutionSlice` | One uninterrupted CPU slice (Gantt bar) |
//! | `SchedulingResult` | Completed processes, timeline, averages |

mod process;
mod result;

pub use process::ProcessInput;
pub use result::{ExecutionSlice, ProcessResult, SchedulingResult};
