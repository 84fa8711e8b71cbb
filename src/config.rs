//! Solve configuration.

use serde::{Deserialize, Serialize};

/// Numeric tolerances used when interpreting solver output.
///
/// # Example
/// ```
/// use u_assign::SolveOptions;
///
/// let opts: SolveOptions = serde_json::from_str(r#"{ "objective_tolerance": 1e-4 }"#).unwrap();
/// assert_eq!(opts.objective_tolerance, 1e-4);
/// assert_eq!(opts.integrality_tolerance, SolveOptions::default().integrality_tolerance);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveOptions {
    /// Maximum distance between a decision value and its rounded integer.
    pub integrality_tolerance: f64,
    /// Maximum gap between the reported and the recomputed objective.
    pub objective_tolerance: f64,
    /// Slack allowed when re-checking per-worker load against availability.
    pub capacity_tolerance: f64,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            integrality_tolerance: 1e-6,
            objective_tolerance: 1e-6,
            capacity_tolerance: 1e-6,
        }
    }
}

impl SolveOptions {
    /// Creates options with default tolerances.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the integrality tolerance.
    pub fn with_integrality_tolerance(mut self, tolerance: f64) -> Self {
        self.integrality_tolerance = tolerance;
        self
    }

    /// Sets the objective tolerance.
    pub fn with_objective_tolerance(mut self, tolerance: f64) -> Self {
        self.objective_tolerance = tolerance;
        self
    }

    /// Sets the capacity tolerance.
    pub fn with_capacity_tolerance(mut self, tolerance: f64) -> Self {
        self.capacity_tolerance = tolerance;
        self
    }
}
