//! Input validation for scheduling runs.
//!
//! Two layers live here:
//!
//! - **Engine preconditions** ([`validate_processes`], [`validate_quantum`]):
//!   checked by every algorithm before simulation starts. A violation
//!   rejects the whole run with an [`InvalidProcessError`]; no partial
//!   results are ever produced.
//! - **Submission limits** ([`InputLimits`]): the entry-form policy of an
//!   interactive simulator (process cap, name rules, value ranges). The
//!   engine never applies these; callers opt in.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::ProcessInput;

/// The descriptor field an [`InvalidProcessError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProcessField {
    /// Arrival time was negative.
    ArrivalTime,
    /// Burst time was zero or negative.
    BurstTime,
    /// Round Robin quantum was zero or negative.
    Quantum,
}

impl ProcessField {
    /// Field name as it appears in serialized descriptors.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessField::ArrivalTime => "arrivalTime",
            ProcessField::BurstTime => "burstTime",
            ProcessField::Quantum => "quantum",
        }
    }
}

impl fmt::Display for ProcessField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejection of malformed engine input.
///
/// Raised before simulation for a negative arrival time, a non-positive
/// burst time, or a non-positive quantum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidProcessError {
    /// Offending process. `None` when the quantum is at fault.
    pub process_id: Option<String>,
    /// Offending field.
    pub field: ProcessField,
    /// The rejected value.
    pub value: i64,
}

impl InvalidProcessError {
    fn for_process(process: &ProcessInput, field: ProcessField, value: i64) -> Self {
        Self {
            process_id: Some(process.id.clone()),
            field,
            value,
        }
    }

    /// Error for a non-positive quantum.
    pub fn quantum(value: i64) -> Self {
        Self {
            process_id: None,
            field: ProcessField::Quantum,
            value,
        }
    }
}

impl fmt::Display for InvalidProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let requirement = match self.field {
            ProcessField::ArrivalTime => "must not be negative",
            ProcessField::BurstTime if self.value > 0 => "overflows the simulation clock",
            ProcessField::BurstTime | ProcessField::Quantum => "must be positive",
        };
        match &self.process_id {
            Some(id) => write!(
                f,
                "invalid process '{id}': {} {requirement} (got {})",
                self.field, self.value
            ),
            None => write!(f, "invalid {} {requirement} (got {})", self.field, self.value),
        }
    }
}

impl std::error::Error for InvalidProcessError {}

/// Checks every descriptor against the engine preconditions.
///
/// Scans in input order, arrival before burst, and returns the first
/// violation. An empty slice is valid.
///
/// The simulation clock never passes `max(arrival) + sum(burst)`, so a set
/// whose bound does not fit in `i64` is rejected here, blaming the burst
/// of the process at which the bound first overflows.
pub fn validate_processes(processes: &[ProcessInput]) -> Result<(), InvalidProcessError> {
    let mut total_burst: i64 = 0;
    let mut max_arrival: i64 = 0;

    for p in processes {
        if p.arrival_time < 0 {
            return Err(InvalidProcessError::for_process(
                p,
                ProcessField::ArrivalTime,
                p.arrival_time,
            ));
        }
        if p.burst_time <= 0 {
            return Err(InvalidProcessError::for_process(
                p,
                ProcessField::BurstTime,
                p.burst_time,
            ));
        }

        let overflow =
            || InvalidProcessError::for_process(p, ProcessField::BurstTime, p.burst_time);
        max_arrival = max_arrival.max(p.arrival_time);
        total_burst = total_burst.checked_add(p.burst_time).ok_or_else(overflow)?;
        p.arrival_time
            .checked_add(p.burst_time)
            .and_then(|_| max_arrival.checked_add(total_burst))
            .ok_or_else(overflow)?;
    }
    Ok(())
}

/// Checks a Round Robin quantum.
pub fn validate_quantum(quantum: i64) -> Result<(), InvalidProcessError> {
    if quantum <= 0 {
        return Err(InvalidProcessError::quantum(quantum));
    }
    Ok(())
}

// ======================== Submission limits ========================

/// Result of a submission check: all violations, or `Ok`.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A submission-limit violation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of submission-limit violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Name is blank after trimming.
    EmptyName,
    /// Name exceeds the length cap.
    NameTooLong,
    /// Name already used by another process.
    DuplicateName,
    /// ID already used by another process.
    DuplicateId,
    /// Arrival time outside the accepted range.
    ArrivalOutOfRange,
    /// Burst time outside the accepted range.
    BurstOutOfRange,
    /// Process set is already at capacity.
    TooManyProcesses,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Entry-form limits for an interactive simulator.
///
/// Presentation-layer policy: the engine accepts any set that passes
/// [`validate_processes`], whatever its size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputLimits {
    /// Maximum number of processes in one set.
    pub max_processes: usize,
    /// Maximum name length in characters (after trimming).
    pub max_name_len: usize,
    /// Largest accepted arrival time.
    pub max_arrival_time: i64,
    /// Smallest accepted burst time.
    pub min_burst_time: i64,
    /// Largest accepted burst time.
    pub max_burst_time: i64,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_processes: 10,
            max_name_len: 10,
            max_arrival_time: 1000,
            min_burst_time: 1,
            max_burst_time: 100,
        }
    }
}

impl InputLimits {
    /// Sets the process cap.
    pub fn with_max_processes(mut self, max: usize) -> Self {
        self.max_processes = max;
        self
    }

    /// Sets the name length cap.
    pub fn with_max_name_len(mut self, max: usize) -> Self {
        self.max_name_len = max;
        self
    }

    /// Sets the accepted burst range.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.min_burst_time = min;
        self.max_burst_time = max;
        self
    }

    /// Sets the largest accepted arrival time.
    pub fn with_max_arrival_time(mut self, max: i64) -> Self {
        self.max_arrival_time = max;
        self
    }

    /// Checks a candidate before it joins an existing set.
    ///
    /// Checks:
    /// 1. The set is below the process cap
    /// 2. The trimmed name is non-empty and within the length cap
    /// 3. The trimmed name and the ID are unused in `existing`
    /// 4. Arrival and burst lie within their ranges
    ///
    /// # Returns
    /// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
    pub fn check_submission(
        &self,
        existing: &[ProcessInput],
        candidate: &ProcessInput,
    ) -> ValidationResult {
        let mut errors = Vec::new();

        if existing.len() >= self.max_processes {
            errors.push(ValidationError::new(
                ValidationErrorKind::TooManyProcesses,
                format!("At most {} processes are allowed", self.max_processes),
            ));
        }

        let name = candidate.name.trim();
        if name.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                "Process name is required",
            ));
        } else if name.chars().count() > self.max_name_len {
            errors.push(ValidationError::new(
                ValidationErrorKind::NameTooLong,
                format!(
                    "Process name '{name}' exceeds {} characters",
                    self.max_name_len
                ),
            ));
        } else if existing.iter().any(|p| p.name.trim() == name) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Process name '{name}' is already used"),
            ));
        }

        if existing.iter().any(|p| p.id == candidate.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", candidate.id),
            ));
        }

        self.check_ranges(candidate, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Checks a whole process set at once.
    ///
    /// Equivalent to submitting the processes one by one, collecting
    /// every violation along the way.
    pub fn check_set(&self, processes: &[ProcessInput]) -> ValidationResult {
        let mut errors = Vec::new();
        let mut names = HashSet::new();
        let mut ids = HashSet::new();

        if processes.len() > self.max_processes {
            errors.push(ValidationError::new(
                ValidationErrorKind::TooManyProcesses,
                format!(
                    "{} processes given, at most {} are allowed",
                    processes.len(),
                    self.max_processes
                ),
            ));
        }

        for p in processes {
            let name = p.name.trim();
            if name.is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::EmptyName,
                    format!("Process '{}' has no name", p.id),
                ));
            } else if name.chars().count() > self.max_name_len {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NameTooLong,
                    format!(
                        "Process name '{name}' exceeds {} characters",
                        self.max_name_len
                    ),
                ));
            } else if !names.insert(name) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateName,
                    format!("Process name '{name}' is already used"),
                ));
            }

            if !ids.insert(p.id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!("Duplicate process ID: {}", p.id),
                ));
            }

            self.check_ranges(p, &mut errors);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn check_ranges(&self, p: &ProcessInput, errors: &mut Vec<ValidationError>) {
        if !(0..=self.max_arrival_time).contains(&p.arrival_time) {
            errors.push(ValidationError::new(
                ValidationErrorKind::ArrivalOutOfRange,
                format!(
                    "Process '{}' arrival time {} is outside 0..={}",
                    p.id, p.arrival_time, self.max_arrival_time
                ),
            ));
        }
        if !(self.min_burst_time..=self.max_burst_time).contains(&p.burst_time) {
            errors.push(ValidationError::new(
                ValidationErrorKind::BurstOutOfRange,
                format!(
                    "Process '{}' burst time {} is outside {}..={}",
                    p.id, p.burst_time, self.min_burst_time, self.max_burst_time
                ),
            ));
        }
    }
}
