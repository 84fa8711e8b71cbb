//! Validated assignment problem.

use serde::{Deserialize, Serialize};

use crate::error::AssignError;
use crate::models::{AvailabilityTable, DurationTable, PairCost, Task, Worker};
use std::collections::HashSet;

use crate::validation::{validate_input, ValidationError, ValidationErrorKind};

/// Validated workers, tasks and resolved pair costs.
///
/// Workers follow roster order and tasks follow duration-table row order.
/// Every (worker, task) pair carries an explicit [`PairCost`].
///
/// Deserialization re-runs the structural checks of [`validate_input`]
/// and rejects a `costs` matrix whose shape differs from workers × tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProblem")]
pub struct AssignmentProblem {
    workers: Vec<Worker>,
    tasks: Vec<Task>,
    /// `costs[w][t]`
    costs: Vec<Vec<PairCost>>,
}

impl AssignmentProblem {
    /// Validates the tables and resolves every pair's eligibility.
    ///
    /// Fails with [`AssignError::Validation`] listing every detected issue.
    pub fn from_tables(
        durations: &DurationTable,
        availability: &AvailabilityTable,
    ) -> Result<Self, AssignError> {
        validate_input(durations, availability)?;

        let tasks: Vec<Task> = durations.rows.iter().map(|r| Task::new(&r.task)).collect();

        let mut workers = Vec::with_capacity(availability.rows.len());
        let mut costs = Vec::with_capacity(availability.rows.len());
        for row in &availability.rows {
            // Presence of both the hours and the column is guaranteed by validation.
            workers.push(Worker::new(&row.worker, row.hours.unwrap_or_default()));
            let col = durations.column_of(&row.worker);
            let worker_costs = durations
                .rows
                .iter()
                .map(|task_row| {
                    let cell = col.and_then(|c| task_row.cells.get(c).copied().flatten());
                    PairCost::from_cell(cell)
                })
                .collect();
            costs.push(worker_costs);
        }

        Ok(Self {
            workers,
            tasks,
            costs,
        })
    }

    /// Workers in roster order.
    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    /// Tasks in row order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of workers.
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Number of tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Resolved cost of a (worker, task) index pair.
    ///
    /// # Panics
    /// Panics if `worker >= worker_count()` or `task >= task_count()`.
    pub fn cost(&self, worker: usize, task: usize) -> PairCost {
        self.costs[worker][task]
    }

    /// Indices of workers eligible for a task.
    pub fn eligible_workers(&self, task: usize) -> Vec<usize> {
        (0..self.workers.len())
            .filter(|&w| self.costs[w][task].is_eligible())
            .collect()
    }

    /// Indices of tasks a worker is eligible for.
    pub fn eligible_tasks(&self, worker: usize) -> Vec<usize> {
        (0..self.tasks.len())
            .filter(|&t| self.costs[worker][t].is_eligible())
            .collect()
    }
}

/// Unchecked wire form of [`AssignmentProblem`].
#[derive(Deserialize)]
struct RawProblem {
    workers: Vec<Worker>,
    tasks: Vec<Task>,
    costs: Vec<Vec<PairCost>>,
}

impl TryFrom<RawProblem> for AssignmentProblem {
    type Error = AssignError;

    fn try_from(raw: RawProblem) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();

        if raw.workers.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyWorkerSet,
                "Worker roster is empty",
            ));
        }
        if raw.tasks.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyTaskSet,
                "Problem has no tasks",
            ));
        }

        let mut worker_ids = HashSet::new();
        for worker in &raw.workers {
            if worker.id.trim().is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::BlankId,
                    "Problem contains a worker with a blank ID",
                ));
            } else if !worker_ids.insert(worker.id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!("Duplicate worker ID: {}", worker.id),
                ));
            }
            let h = worker.availability_hours;
            if !h.is_finite() || h < 0.0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidAvailability,
                    format!("Worker '{}' has invalid availability {h}", worker.id),
                ));
            }
        }

        let mut task_ids = HashSet::new();
        for task in &raw.tasks {
            if task.id.trim().is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::BlankId,
                    "Problem contains a task with a blank ID",
                ));
            } else if !task_ids.insert(task.id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!("Duplicate task ID: {}", task.id),
                ));
            }
        }

        if raw.costs.len() != raw.workers.len() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedRow,
                format!(
                    "Cost matrix has {} worker rows but the problem has {} workers",
                    raw.costs.len(),
                    raw.workers.len()
                ),
            ));
        }
        for (worker, row) in raw.workers.iter().zip(&raw.costs) {
            if row.len() != raw.tasks.len() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MalformedRow,
                    format!(
                        "Worker '{}' has {} costs but the problem has {} tasks",
                        worker.id,
                        row.len(),
                        raw.tasks.len()
                    ),
                ));
            }
            for (task, cost) in raw.tasks.iter().zip(row) {
                // An eligible cost must survive the same rule as a raw cell.
                if PairCost::from_cell(Some(cost.hours())) != *cost {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::MalformedRow,
                        format!(
                            "Worker '{}' has non-positive eligible hours for task '{}'",
                            worker.id, task.id
                        ),
                    ));
                }
            }
        }

        if !errors.is_empty() {
            return Err(AssignError::Validation(errors));
        }

        Ok(Self {
            workers: raw.workers,
            tasks: raw.tasks,
            costs: raw.costs,
        })
    }
}
