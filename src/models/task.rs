//! Task model.
//!
//! A task is an indivisible unit of work that must be performed by
//! exactly one worker. Tasks carry no attributes beyond identity; their
//! per-worker durations live in the cost matrix.

use serde::{Deserialize, Serialize};

/// A task to be assigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: String,
}

impl Task {
    /// Creates a new task with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
