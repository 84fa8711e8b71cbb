//! Worked example: a four-person development team.
//!
//! | Hours | Sergio Robles | Saúl Barbero | Carlos Urías | Mateo Alfredo |
//! |-------|---------------|--------------|--------------|---------------|
//! | Frontend  | 10 |  9 |  8 | 12 |
//! | Backend   | 12 | 11 |  9 | 13 |
//! | Testing   |  9 | 10 |  7 | 11 |
//! | BaseDatos |  8 | 12 | 10 | 15 |
//!
//! Every developer has 20 h. Carlos is fastest at three tasks but can only
//! fit two of them, so the optimum (33 h) hands Frontend to Saúl and leaves
//! Mateo idle. Without the capacity limit the optimum would be 32 h.

use crate::models::{AvailabilityTable, DurationTable, TaskRow};

/// Developers, in roster and column order.
pub const DEVELOPERS: [&str; 4] = [
    "Sergio Robles",
    "Saúl Barbero",
    "Carlos Urías",
    "Mateo Alfredo",
];

/// Tasks, in row order.
pub const TASKS: [&str; 4] = ["Frontend", "Backend", "Testing", "BaseDatos"];

/// Hours per task (rows) and developer (columns).
pub const HOURS: [[f64; 4]; 4] = [
    [10.0, 9.0, 8.0, 12.0],
    [12.0, 11.0, 9.0, 13.0],
    [9.0, 10.0, 7.0, 11.0],
    [8.0, 12.0, 10.0, 15.0],
];

/// Default availability per developer.
pub const AVAILABILITY_HOURS: f64 = 20.0;

/// The example duration table and roster.
pub fn developer_team() -> (DurationTable, AvailabilityTable) {
    developer_team_with_availability(AVAILABILITY_HOURS)
}

/// The example team with a uniform availability.
pub fn developer_team_with_availability(hours: f64) -> (DurationTable, AvailabilityTable) {
    let durations = TASKS
        .iter()
        .zip(HOURS.iter())
        .fold(DurationTable::new(DEVELOPERS), |table, (task, row)| {
            table.with_row(TaskRow::from_hours(*task, row))
        });
    let roster = DEVELOPERS
        .iter()
        .fold(AvailabilityTable::new(), |roster, dev| roster.with_worker(*dev, hours));
    (durations, roster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_input;

    #[test]
    fn test_sample_is_valid() {
        let (durations, roster) = developer_team();
        assert!(validate_input(&durations, &roster).is_ok());
        assert_eq!(durations.task_count(), 4);
        assert_eq!(roster.worker_count(), 4);
        assert_eq!(durations.cell("Frontend", "Carlos Urías"), Some(8.0));
        assert_eq!(durations.cell("BaseDatos", "Sergio Robles"), Some(8.0));
        assert_eq!(roster.hours_of("Mateo Alfredo"), Some(20.0));
    }
}
