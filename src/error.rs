//! Error types.
//!
//! Only malformed input and broken solver output are errors. A solver
//! verdict of infeasibility is a normal [`SolveResult`](crate::models::SolveResult).

use crate::validation::ValidationError;

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AssignError {
    #[error("Invalid input: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    #[error("Solution integrity fault: {0}")]
    Integrity(#[from] IntegrityFault),
}

impl From<Vec<ValidationError>> for AssignError {
    fn from(errors: Vec<ValidationError>) -> Self {
        AssignError::Validation(errors)
    }
}

/// Solver output that contradicts the model it claims to solve optimally.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntegrityFault {
    #[error("expected {expected} decision values, solver returned {actual}")]
    VariableCount { expected: usize, actual: usize },

    #[error("decision for worker '{worker}' and task '{task}' is not binary: {value}")]
    NonIntegral {
        worker: String,
        task: String,
        value: f64,
    },

    #[error("ineligible worker '{worker}' was assigned task '{task}'")]
    IneligibleAssignment { worker: String, task: String },

    #[error("task '{task}' is assigned to {count} workers")]
    Coverage { task: String, count: usize },

    #[error("worker '{worker}' is loaded with {assigned} h, above availability {availability} h")]
    CapacityExceeded {
        worker: String,
        assigned: f64,
        availability: f64,
    },

    #[error("reported objective {reported} differs from recomputed {recomputed}")]
    ObjectiveMismatch { reported: f64, recomputed: f64 },
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_validation_display_joins_messages() {
        let err = AssignError::from(vec![
            ValidationError::new(ValidationErrorKind::EmptyTaskSet, "no tasks"),
            ValidationError::new(ValidationErrorKind::EmptyWorkerSet, "no workers"),
        ]);
        assert_eq!(err.to_string(), "Invalid input: no tasks; no workers");
    }

    #[test]
    fn test_integrity_display() {
        let err = AssignError::from(IntegrityFault::Coverage {
            task: "T1".into(),
            count: 2,
        });
        assert_eq!(
            err.to_string(),
            "Solution integrity fault: task 'T1' is assigned to 2 workers"
        );
    }
}
