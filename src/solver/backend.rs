//! Backend trait and raw solver outcome.

use serde::{Deserialize, Serialize};

use crate::formulation::AssignmentModel;
use crate::models::SolveStatus;

/// Terminal status reported by a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolverStatus {
    /// Proven optimal; `values` holds one entry per variable.
    Optimal,
    /// No feasible point exists.
    Infeasible,
    /// Objective unbounded below.
    Unbounded,
    /// The engine failed without a verdict.
    Error,
}

impl From<SolverStatus> for SolveStatus {
    fn from(status: SolverStatus) -> Self {
        match status {
            SolverStatus::Optimal => SolveStatus::Optimal,
            SolverStatus::Infeasible => SolveStatus::Infeasible,
            SolverStatus::Unbounded => SolveStatus::Unbounded,
            SolverStatus::Error => SolveStatus::Error,
        }
    }
}

/// Raw result of one backend call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverOutcome {
    /// Terminal status.
    pub status: SolverStatus,
    /// Variable values in model order. Empty unless optimal.
    pub values: Vec<f64>,
    /// Objective value as reported by the engine.
    pub objective: Option<f64>,
    /// Engine diagnostic.
    pub message: Option<String>,
}

impl SolverOutcome {
    /// An optimal outcome.
    pub fn optimal(values: Vec<f64>, objective: f64) -> Self {
        Self {
            status: SolverStatus::Optimal,
            values,
            objective: Some(objective),
            message: None,
        }
    }

    /// A non-optimal outcome with no values.
    pub fn failed(status: SolverStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            values: Vec::new(),
            objective: None,
            message: Some(message.into()),
        }
    }
}

/// An integer-programming engine.
///
/// Implementations must build fresh engine state on every call; a
/// backend value may be shared across threads and reused across solves.
pub trait SolverBackend {
    /// Short engine name for logs.
    fn name(&self) -> &str;

    /// Solves the model to optimality or reports why it could not.
    fn solve(&self, model: &AssignmentModel) -> SolverOutcome;
}

impl<B: SolverBackend + ?Sized> SolverBackend for &B {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn solve(&self, model: &AssignmentModel) -> SolverOutcome {
        (**self).solve(model)
    }
}

impl<B: SolverBackend + ?Sized> SolverBackend for Box<B> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn solve(&self, model: &AssignmentModel) -> SolverOutcome {
        (**self).solve(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(SolveStatus::from(SolverStatus::Optimal), SolveStatus::Optimal);
        assert_eq!(SolveStatus::from(SolverStatus::Infeasible), SolveStatus::Infeasible);
        assert_eq!(SolveStatus::from(SolverStatus::Unbounded), SolveStatus::Unbounded);
        assert_eq!(SolveStatus::from(SolverStatus::Error), SolveStatus::Error);
    }

    #[test]
    fn test_outcome_constructors() {
        let ok = SolverOutcome::optimal(vec![1.0, 0.0], 3.0);
        assert_eq!(ok.status, SolverStatus::Optimal);
        assert_eq!(ok.objective, Some(3.0));

        let bad = SolverOutcome::failed(SolverStatus::Infeasible, "no point");
        assert!(bad.values.is_empty());
        assert_eq!(bad.objective, None);
        assert_eq!(bad.message.as_deref(), Some("no point"));
    }
}
