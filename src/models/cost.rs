//! Worker × task cost model.
//!
//! Tabular inputs encode "this worker cannot do this task" as a zero or
//! blank duration. That sentinel is resolved here, once, into an explicit
//! eligibility flag so that no downstream code has to tell "cannot do"
//! apart from "takes zero time".

use serde::{Deserialize, Serialize};

/// Resolved cost of assigning one task to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PairCost {
    /// The worker may perform the task, taking `hours`.
    Eligible {
        /// Strictly positive, finite duration in hours.
        hours: f64,
    },
    /// The worker may never be assigned the task.
    Ineligible,
}

impl PairCost {
    /// Resolves a raw duration cell.
    ///
    /// Eligible iff the cell is present, finite, and strictly positive.
    /// Zero, negative, NaN, infinite and absent cells are all ineligible.
    pub fn from_cell(cell: Option<f64>) -> Self {
        match cell {
            Some(hours) if hours.is_finite() && hours > 0.0 => PairCost::Eligible { hours },
            _ => PairCost::Ineligible,
        }
    }

    /// Whether the pair may be assigned.
    #[inline]
    pub fn is_eligible(&self) -> bool {
        matches!(self, PairCost::Eligible { .. })
    }

    /// Duration in hours (0.0 for ineligible pairs).
    #[inline]
    pub fn hours(&self) -> f64 {
        match self {
            PairCost::Eligible { hours } => *hours,
            PairCost::Ineligible => 0.0,
        }
    }
}

/// Long-form cost entry: one (worker, task, hours) triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEntry {
    /// Worker identifier.
    pub worker: String,
    /// Task identifier.
    pub task: String,
    /// Raw duration in hours. Non-positive values mark ineligibility.
    pub hours: f64,
}

impl CostEntry {
    /// Creates a cost entry.
    pub fn new(worker: impl Into<String>, task: impl Into<String>, hours: f64) -> Self {
        Self {
            worker: worker.into(),
            task: task.into(),
            hours,
        }
    }
}
