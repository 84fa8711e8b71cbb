//! Solution interpretation.
//!
//! Converts a raw [`SolverOutcome`] back into the domain result bundle.
//!
//! # Algorithm
//!
//! 1. Non-optimal status: return empty tables, `objective = None`, status verbatim.
//! 2. Round every value to the nearest integer; reject values farther than
//!    the integrality tolerance, or rounding to anything but 0/1.
//! 3. Reject decisions of 1 on ineligible pairs.
//! 4. Build one assignment row per task; reject tasks with 0 or >1 workers.
//! 5. Build one load row per roster worker, zero-filled.
//! 6. Cross-check loads against availability and the reported objective
//!    against the recomputed sum of assigned hours.

use tracing::{debug, warn};

use crate::config::SolveOptions;
use crate::error::IntegrityFault;
use crate::formulation::AssignmentModel;
use crate::models::{AssignmentRow, DecisionMatrix, LoadRow, SolveResult, SolveStatus};
use crate::solver::{SolverOutcome, SolverStatus};

/// Interprets a solver outcome against the model it was produced from.
///
/// A non-optimal outcome is not an error. An optimal outcome whose values
/// contradict the model is an [`IntegrityFault`].
pub fn interpret(
    model: &AssignmentModel,
    outcome: SolverOutcome,
    options: &SolveOptions,
) -> Result<SolveResult, IntegrityFault> {
    if outcome.status != SolverStatus::Optimal {
        warn!(status = ?outcome.status, message = ?outcome.message, "no optimal solution");
        return Ok(SolveResult::without_solution(
            SolveStatus::from(outcome.status),
            outcome.message,
        ));
    }

    let problem = model.problem();
    let workers = problem.workers();
    let tasks = problem.tasks();

    if outcome.values.len() != model.variable_count() {
        return Err(IntegrityFault::VariableCount {
            expected: model.variable_count(),
            actual: outcome.values.len(),
        });
    }

    // Round-then-compare decisions.
    let mut cells = vec![vec![false; tasks.len()]; workers.len()];
    let mut decisions = vec![0.0; model.variable_count()];
    for var in model.variables() {
        let value = outcome.values[model.var_index(var.worker, var.task)];
        let rounded = value.round();
        if !value.is_finite()
            || (value - rounded).abs() > options.integrality_tolerance
            || !(rounded == 0.0 || rounded == 1.0)
        {
            return Err(IntegrityFault::NonIntegral {
                worker: workers[var.worker].id.clone(),
                task: tasks[var.task].id.clone(),
                value,
            });
        }
        if rounded == 1.0 {
            if !problem.cost(var.worker, var.task).is_eligible() {
                return Err(IntegrityFault::IneligibleAssignment {
                    worker: workers[var.worker].id.clone(),
                    task: tasks[var.task].id.clone(),
                });
            }
            cells[var.worker][var.task] = true;
            decisions[model.var_index(var.worker, var.task)] = 1.0;
        }
    }

    let mut assignment = Vec::with_capacity(tasks.len());
    for (t, task) in tasks.iter().enumerate() {
        let chosen: Vec<usize> = (0..workers.len()).filter(|&w| cells[w][t]).collect();
        let &[w] = chosen.as_slice() else {
            return Err(IntegrityFault::Coverage {
                task: task.id.clone(),
                count: chosen.len(),
            });
        };
        assignment.push(AssignmentRow {
            task: task.id.clone(),
            worker: workers[w].id.clone(),
            hours: problem.cost(w, t).hours(),
        });
    }

    let mut load = Vec::with_capacity(workers.len());
    for (w, worker) in workers.iter().enumerate() {
        let assigned_hours: f64 = (0..tasks.len())
            .filter(|&t| cells[w][t])
            .map(|t| problem.cost(w, t).hours())
            .sum();
        if !worker.can_absorb(assigned_hours, options.capacity_tolerance) {
            return Err(IntegrityFault::CapacityExceeded {
                worker: worker.id.clone(),
                assigned: assigned_hours,
                availability: worker.availability_hours,
            });
        }
        load.push(LoadRow {
            worker: worker.id.clone(),
            assigned_hours,
            availability_hours: worker.availability_hours,
        });
    }

    // Length checked above.
    let recomputed = model.evaluate(&decisions);
    let objective = match outcome.objective {
        Some(reported) if (reported - recomputed).abs() > options.objective_tolerance => {
            return Err(IntegrityFault::ObjectiveMismatch {
                reported,
                recomputed,
            });
        }
        Some(reported) => reported,
        None => recomputed,
    };

    debug!(
        objective,
        assigned = assignment.len(),
        "solution interpreted"
    );

    Ok(SolveResult {
        status: SolveStatus::Optimal,
        objective: Some(objective),
        assignment,
        load,
        decisions: DecisionMatrix {
            workers: workers.iter().map(|w| w.id.clone()).collect(),
            tasks: tasks.iter().map(|t| t.id.clone()).collect(),
            cells,
        },
        message: None,
    })
}
