//! Worker model.
//!
//! Workers are the entities that perform tasks: developers, operators,
//! technicians. Each worker has a fixed hour budget (availability) that
//! bounds the total duration of the tasks assigned to it.

use serde::{Deserialize, Serialize};

/// A worker that can be assigned tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    /// Unique worker identifier (roster name).
    pub id: String,
    /// Maximum total hours this worker may be assigned.
    pub availability_hours: f64,
}

impl Worker {
    /// Creates a worker with the given hour capacity.
    pub fn new(id: impl Into<String>, availability_hours: f64) -> Self {
        Self {
            id: id.into(),
            availability_hours,
        }
    }

    /// Whether `hours` of work fits in this worker's availability.
    ///
    /// `tolerance` absorbs floating-point slack from summed durations.
    pub fn can_absorb(&self, hours: f64, tolerance: f64) -> bool {
        hours <= self.availability_hours + tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_new() {
        let w = Worker::new("W1", 20.0);
        assert_eq!(w.id, "W1");
        assert!((w.availability_hours - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_can_absorb() {
        let w = Worker::new("W1", 20.0);
        assert!(w.can_absorb(20.0, 0.0));
        assert!(w.can_absorb(20.0 + 1e-9, 1e-6));
        assert!(!w.can_absorb(20.5, 1e-6));
    }
}
