//! Tabular inputs.
//!
//! Two tables describe an assignment problem:
//!
//! - [`DurationTable`]: wide form, one row per task, one column per worker,
//!   cells are durations in hours (blank / non-numeric cells are `None`).
//! - [`AvailabilityTable`]: the worker roster, pairing each worker with
//!   its hour capacity.
//!
//! Where the tables come from (an editor grid, a file, hard-coded samples)
//! is the caller's concern. Long-form `(worker, task, hours)` triples can be
//! pivoted into the wide form with [`DurationTable::from_entries`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::CostEntry;
use crate::validation::{ValidationError, ValidationErrorKind};

/// Parses a textual cell into a number.
///
/// Blank, non-numeric and NaN text yields `None`.
pub fn parse_cell(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Wide-form duration matrix.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DurationTable {
    /// Worker column headers, in column order.
    pub workers: Vec<String>,
    /// One row per task.
    pub rows: Vec<TaskRow>,
}

/// A single task row of the duration matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRow {
    /// Task identifier.
    pub task: String,
    /// Durations aligned with [`DurationTable::workers`].
    pub cells: Vec<Option<f64>>,
}

impl TaskRow {
    /// Creates a row from numeric cells.
    pub fn new(task: impl Into<String>, cells: Vec<Option<f64>>) -> Self {
        Self {
            task: task.into(),
            cells,
        }
    }

    /// Creates a row from hours, treating every value as present.
    pub fn from_hours(task: impl Into<String>, hours: &[f64]) -> Self {
        Self::new(task, hours.iter().copied().map(Some).collect())
    }

    /// Creates a row from textual cells (see [`parse_cell`]).
    pub fn from_text(task: impl Into<String>, cells: &[&str]) -> Self {
        Self::new(task, cells.iter().map(|c| parse_cell(c)).collect())
    }
}

impl DurationTable {
    /// Creates an empty table with the given worker columns.
    pub fn new<I, S>(workers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            workers: workers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a task row.
    pub fn with_row(mut self, row: TaskRow) -> Self {
        self.rows.push(row);
        self
    }

    /// Pivots long-form entries into a wide table.
    ///
    /// Worker columns and task rows follow first-appearance order. Pairs
    /// without an entry become blank cells. Two entries for the same pair
    /// are rejected.
    pub fn from_entries<I>(entries: I) -> Result<Self, Vec<ValidationError>>
    where
        I: IntoIterator<Item = CostEntry>,
    {
        let mut workers: Vec<String> = Vec::new();
        let mut tasks: Vec<String> = Vec::new();
        let mut worker_idx: HashMap<String, usize> = HashMap::new();
        let mut task_idx: HashMap<String, usize> = HashMap::new();
        let mut cells: HashMap<(usize, usize), f64> = HashMap::new();
        let mut errors = Vec::new();

        for entry in entries {
            let w = *worker_idx.entry(entry.worker.clone()).or_insert_with(|| {
                workers.push(entry.worker.clone());
                workers.len() - 1
            });
            let t = *task_idx.entry(entry.task.clone()).or_insert_with(|| {
                tasks.push(entry.task.clone());
                tasks.len() - 1
            });
            if cells.insert((t, w), entry.hours).is_some() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!(
                        "Duplicate cost entry for worker '{}' and task '{}'",
                        entry.worker, entry.task
                    ),
                ));
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let rows = tasks
            .into_iter()
            .enumerate()
            .map(|(t, task)| {
                let row_cells = (0..workers.len())
                    .map(|w| cells.get(&(t, w)).copied())
                    .collect();
                TaskRow::new(task, row_cells)
            })
            .collect();

        Ok(Self { workers, rows })
    }

    /// Column index of a worker, if present.
    pub fn column_of(&self, worker: &str) -> Option<usize> {
        self.workers.iter().position(|w| w == worker)
    }

    /// Task identifiers in row order.
    pub fn task_ids(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.task.as_str()).collect()
    }

    /// Raw cell for a (task, worker) pair. `None` if blank or unknown.
    pub fn cell(&self, task: &str, worker: &str) -> Option<f64> {
        let col = self.column_of(worker)?;
        self.rows
            .iter()
            .find(|r| r.task == task)
            .and_then(|r| r.cells.get(col).copied().flatten())
    }

    /// Number of task rows.
    pub fn task_count(&self) -> usize {
        self.rows.len()
    }
}

/// Worker roster with hour capacities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityTable {
    /// Roster rows, in roster order.
    pub rows: Vec<AvailabilityRow>,
}

/// One roster row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityRow {
    /// Worker identifier.
    pub worker: String,
    /// Capacity in hours. `None` when the source value was blank or non-numeric.
    pub hours: Option<f64>,
}

impl AvailabilityRow {
    /// Creates a roster row with a numeric capacity.
    pub fn new(worker: impl Into<String>, hours: f64) -> Self {
        Self {
            worker: worker.into(),
            hours: Some(hours),
        }
    }

    /// Creates a roster row from textual capacity (see [`parse_cell`]).
    pub fn from_text(worker: impl Into<String>, hours: &str) -> Self {
        Self {
            worker: worker.into(),
            hours: parse_cell(hours),
        }
    }
}

impl AvailabilityTable {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a worker with a numeric capacity.
    pub fn with_worker(mut self, worker: impl Into<String>, hours: f64) -> Self {
        self.rows.push(AvailabilityRow::new(worker, hours));
        self
    }

    /// Adds a raw roster row.
    pub fn with_row(mut self, row: AvailabilityRow) -> Self {
        self.rows.push(row);
        self
    }

    /// Worker identifiers in roster order.
    pub fn worker_ids(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.worker.as_str()).collect()
    }

    /// Capacity of a worker, if listed and numeric.
    pub fn hours_of(&self, worker: &str) -> Option<f64> {
        self.rows
            .iter()
            .find(|r| r.worker == worker)
            .and_then(|r| r.hours)
    }

    /// Number of roster rows.
    pub fn worker_count(&self) -> usize {
        self.rows.len()
    }
}

impl FromIterator<AvailabilityRow> for AvailabilityTable {
    fn from_iter<T: IntoIterator<Item = AvailabilityRow>>(iter: T) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
