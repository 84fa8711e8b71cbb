//! Input validation for assignment problems.
//!
//! Checks structural integrity of the duration table and the worker
//! roster before any model is built. Detects:
//! - Empty task or worker sets
//! - Blank and duplicate IDs
//! - Duration columns without a roster row, and roster workers without a column
//! - Missing, non-numeric, negative or non-finite availability
//! - Rows whose cell count does not match the column count
//!
//! Every issue is collected; nothing is coerced. A missing availability
//! is never read as zero and an unmatched worker is never dropped.

use crate::models::{AvailabilityTable, DurationTable};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The duration table has no task rows.
    EmptyTaskSet,
    /// The roster has no workers.
    EmptyWorkerSet,
    /// Two entities share the same ID.
    DuplicateId,
    /// A task or worker ID is empty or whitespace.
    BlankId,
    /// A duration column names a worker absent from the roster.
    UnknownWorker,
    /// A roster worker has no duration column.
    MissingDuration,
    /// Availability is missing, non-numeric, negative or not finite.
    InvalidAvailability,
    /// A task row's cell count differs from the worker column count.
    MalformedRow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input tables of an assignment problem.
///
/// Checks:
/// 1. At least one roster worker and one task row
/// 2. No blank or duplicate worker IDs in the roster
/// 3. Every availability is present, finite and non-negative
/// 4. No blank or duplicate duration columns
/// 5. Every duration column matches a roster worker, and vice versa
/// 6. No blank or duplicate task IDs
/// 7. Every task row has exactly one cell per column
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    durations: &DurationTable,
    availability: &AvailabilityTable,
) -> ValidationResult {
    let mut errors = Vec::new();

    if availability.rows.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyWorkerSet,
            "Worker roster is empty",
        ));
    }
    if durations.rows.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyTaskSet,
            "Duration table has no tasks",
        ));
    }

    // Roster
    let mut roster_ids = HashSet::new();
    for row in &availability.rows {
        if row.worker.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankId,
                "Roster contains a worker with a blank ID",
            ));
            continue;
        }
        if !roster_ids.insert(row.worker.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate worker ID in roster: {}", row.worker),
            ));
        }
        match row.hours {
            None => errors.push(ValidationError::new(
                ValidationErrorKind::InvalidAvailability,
                format!("Worker '{}' has missing or non-numeric availability", row.worker),
            )),
            Some(h) if !h.is_finite() || h < 0.0 => errors.push(ValidationError::new(
                ValidationErrorKind::InvalidAvailability,
                format!("Worker '{}' has invalid availability {h}", row.worker),
            )),
            Some(_) => {}
        }
    }

    // Duration columns
    let mut column_ids = HashSet::new();
    for worker in &durations.workers {
        if worker.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankId,
                "Duration table contains a worker column with a blank header",
            ));
            continue;
        }
        if !column_ids.insert(worker.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate worker column in duration table: {worker}"),
            ));
        }
        if !roster_ids.contains(worker.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownWorker,
                format!("Duration column '{worker}' has no matching roster row"),
            ));
        }
    }
    for row in &availability.rows {
        if !row.worker.trim().is_empty() && !column_ids.contains(row.worker.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingDuration,
                format!("Roster worker '{}' has no duration column", row.worker),
            ));
        }
    }

    // Task rows
    let mut task_ids = HashSet::new();
    for row in &durations.rows {
        if row.task.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankId,
                "Duration table contains a task with a blank ID",
            ));
        } else if !task_ids.insert(row.task.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task ID: {}", row.task),
            ));
        }
        if row.cells.len() != durations.workers.len() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedRow,
                format!(
                    "Task '{}' has {} cells but the table has {} worker columns",
                    row.task,
                    row.cells.len(),
                    durations.workers.len()
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
