//! Solve result (solution bundle) model.
//!
//! A [`SolveResult`] is the sole contract handed back to presentation
//! layers. When the solver did not prove optimality the tables are empty
//! and `objective` is `None`; callers must branch on [`SolveResult::status`]
//! before trusting any numeric output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Terminal status of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolveStatus {
    /// A minimum-cost assignment was found.
    Optimal,
    /// No assignment satisfies every constraint.
    Infeasible,
    /// The objective is unbounded (cannot occur with non-negative costs).
    Unbounded,
    /// The solver failed without a verdict.
    Error,
}

impl SolveStatus {
    /// Human-readable status label.
    pub fn as_str(&self) -> &'static str {
        match self {
            SolveStatus::Optimal => "Optimal",
            SolveStatus::Infeasible => "Infeasible",
            SolveStatus::Unbounded => "Unbounded",
            SolveStatus::Error => "Error",
        }
    }
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One task-to-worker assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentRow {
    /// Assigned task.
    pub task: String,
    /// Worker performing the task.
    pub worker: String,
    /// Hours consumed.
    pub hours: f64,
}

/// Total assigned hours for one worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadRow {
    /// Worker identifier.
    pub worker: String,
    /// Sum of hours of the tasks assigned to this worker (0.0 if none).
    pub assigned_hours: f64,
    /// Declared capacity.
    pub availability_hours: f64,
}

impl LoadRow {
    /// Fraction of capacity used. `None` when capacity is zero.
    pub fn utilization(&self) -> Option<f64> {
        if self.availability_hours <= 0.0 {
            return None;
        }
        Some(self.assigned_hours / self.availability_hours)
    }

    /// Unused capacity in hours.
    pub fn slack_hours(&self) -> f64 {
        self.availability_hours - self.assigned_hours
    }
}

/// Rounded binary decisions, indexed `[worker][task]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionMatrix {
    /// Row labels, in roster order.
    pub workers: Vec<String>,
    /// Column labels, in task order.
    pub tasks: Vec<String>,
    /// `cells[w][t]` is true iff worker `w` performs task `t`.
    pub cells: Vec<Vec<bool>>,
}

impl DecisionMatrix {
    /// Whether `worker` performs `task`.
    pub fn is_assigned(&self, worker: &str, task: &str) -> bool {
        let Some(w) = self.workers.iter().position(|x| x == worker) else {
            return false;
        };
        let Some(t) = self.tasks.iter().position(|x| x == task) else {
            return false;
        };
        self.cells.get(w).and_then(|row| row.get(t)).copied().unwrap_or(false)
    }

    /// Number of true cells.
    pub fn assigned_count(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&c| c).count())
            .sum()
    }

    /// Whether the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Complete result of one assignment solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResult {
    /// Terminal status.
    pub status: SolveStatus,
    /// Total assigned hours. `None` unless optimal.
    pub objective: Option<f64>,
    /// One row per task, in task order. Empty unless optimal.
    pub assignment: Vec<AssignmentRow>,
    /// One row per roster worker, in roster order. Empty unless optimal.
    pub load: Vec<LoadRow>,
    /// Binary decision matrix. Empty unless optimal.
    pub decisions: DecisionMatrix,
    /// Solver diagnostic for non-optimal outcomes.
    pub message: Option<String>,
}

impl SolveResult {
    /// Creates a result for a non-optimal outcome: empty tables, no objective.
    pub fn without_solution(status: SolveStatus, message: Option<String>) -> Self {
        Self {
            status,
            objective: None,
            assignment: Vec::new(),
            load: Vec::new(),
            decisions: DecisionMatrix::default(),
            message,
        }
    }

    /// Whether the solver proved optimality.
    pub fn is_optimal(&self) -> bool {
        self.status == SolveStatus::Optimal
    }

    /// Worker assigned to a task.
    pub fn worker_for(&self, task: &str) -> Option<&str> {
        self.assignment
            .iter()
            .find(|a| a.task == task)
            .map(|a| a.worker.as_str())
    }

    /// Assignments of a given worker.
    pub fn assignments_for_worker(&self, worker: &str) -> Vec<&AssignmentRow> {
        self.assignment
            .iter()
            .filter(|a| a.worker == worker)
            .collect()
    }

    /// Load row of a worker.
    pub fn load_for(&self, worker: &str) -> Option<&LoadRow> {
        self.load.iter().find(|l| l.worker == worker)
    }

    /// Sum of hours across all assignment rows.
    pub fn assigned_hours_total(&self) -> f64 {
        self.assignment.iter().map(|a| a.hours).sum()
    }
}
