//! Pure-Rust backend: `good_lp` modelling over the `microlp` engine.

use std::time::Instant;

use good_lp::solvers::microlp::microlp;
use good_lp::{
    constraint, variable, Expression, ProblemVariables, ResolutionError, Solution, SolverModel,
    Variable,
};
use tracing::{debug, warn};

use super::{SolverBackend, SolverOutcome, SolverStatus};
use crate::formulation::{AssignmentModel, ConstraintSense, LinearConstraint};

/// Solves assignment models with `microlp` (simplex + branch-and-bound).
///
/// Every call declares a fresh `good_lp` problem, so one backend value
/// can serve concurrent callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct MicroLpBackend;

impl MicroLpBackend {
    /// Creates the backend.
    pub fn new() -> Self {
        Self
    }
}

impl SolverBackend for MicroLpBackend {
    fn name(&self) -> &str {
        "microlp"
    }

    fn solve(&self, model: &AssignmentModel) -> SolverOutcome {
        // Rows without variables never reach the engine.
        if let Some(row) = model
            .constraints()
            .iter()
            .find(|c| c.terms.is_empty() && !c.is_satisfied_by(&[], 0.0))
        {
            return SolverOutcome::failed(
                SolverStatus::Infeasible,
                format!("constraint '{}' has no variables and cannot hold", row.name),
            );
        }

        let mut vars = ProblemVariables::new();
        let xs: Vec<Variable> = model
            .variables()
            .iter()
            .map(|v| vars.add(variable().binary().name(v.name.clone())))
            .collect();

        let objective = linear_expression(model.objective(), &xs);
        let mut problem = vars.minimise(objective.clone()).using(microlp);
        for row in model.constraints().iter().filter(|c| !c.terms.is_empty()) {
            problem = problem.with(to_constraint(row, &xs));
        }

        let started = Instant::now();
        let result = problem.solve();
        debug!(
            backend = self.name(),
            elapsed = ?started.elapsed(),
            "solver returned"
        );

        match result {
            Ok(solution) => {
                let values = xs.iter().map(|&x| solution.value(x)).collect();
                SolverOutcome::optimal(values, solution.eval(objective))
            }
            Err(ResolutionError::Infeasible) => {
                SolverOutcome::failed(SolverStatus::Infeasible, "model is infeasible")
            }
            Err(ResolutionError::Unbounded) => {
                SolverOutcome::failed(SolverStatus::Unbounded, "objective is unbounded")
            }
            Err(e) => {
                warn!(backend = self.name(), error = %e, "solver failed");
                SolverOutcome::failed(SolverStatus::Error, e.to_string())
            }
        }
    }
}

fn linear_expression(terms: &[(usize, f64)], xs: &[Variable]) -> Expression {
    terms.iter().map(|&(i, coef)| coef * xs[i]).sum()
}

fn to_constraint(row: &LinearConstraint, xs: &[Variable]) -> good_lp::Constraint {
    let lhs = linear_expression(&row.terms, xs);
    let rhs = row.rhs;
    match row.sense {
        ConstraintSense::Eq => constraint!(lhs == rhs),
        ConstraintSense::Le => constraint!(lhs <= rhs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formulation::AssignmentProblem;
    use crate::models::{AvailabilityTable, DurationTable, TaskRow};

    fn model(rows: Vec<TaskRow>, a: f64, b: f64) -> AssignmentModel {
        let mut durations = DurationTable::new(["A", "B"]);
        for row in rows {
            durations = durations.with_row(row);
        }
        let roster = AvailabilityTable::new()
            .with_worker("A", a)
            .with_worker("B", b);
        AssignmentModel::build(AssignmentProblem::from_tables(&durations, &roster).unwrap())
    }

    #[test]
    fn test_solves_small_model() {
        // A is cheaper for both, but can only fit one task.
        let m = model(
            vec![
                TaskRow::from_hours("T1", &[3.0, 4.0]),
                TaskRow::from_hours("T2", &[3.0, 6.0]),
            ],
            5.0,
            10.0,
        );
        let out = MicroLpBackend::new().solve(&m);

        assert_eq!(out.status, SolverStatus::Optimal);
        assert_eq!(out.values.len(), 4);
        assert!(m.is_feasible(&out.values, 1e-6));
        // Best: A→T2 (3), B→T1 (4) = 7
        assert!((out.objective.unwrap() - 7.0).abs() < 1e-6);
        assert!((m.evaluate(&out.values) - 7.0).abs() < 1e-6);
    }

    #[test]
    fn test_reports_infeasible() {
        let m = model(
            vec![TaskRow::from_hours("T1", &[8.0, 9.0])],
            5.0,
            5.0,
        );
        let out = MicroLpBackend::new().solve(&m);

        assert_eq!(out.status, SolverStatus::Infeasible);
        assert!(out.values.is_empty());
        assert_eq!(out.objective, None);
    }

    #[test]
    fn test_backend_name() {
        assert_eq!(MicroLpBackend.name(), "microlp");
        let boxed: Box<dyn SolverBackend> = Box::new(MicroLpBackend);
        assert_eq!(boxed.name(), "microlp");
    }
}
