//! Assignment domain models.
//!
//! Provides the data types for describing an assignment problem
//! (workers, tasks, durations, capacities) and its solution.
//!
//! # Domain Mappings
//!
//! | u-assign | Software team | Field service | Manufacturing |
//! |----------|---------------|---------------|---------------|
//! | Worker | Developer | Technician | Operator |
//! | Task | Work item | Job ticket | Work order |
//! | Availability | Sprint hours | Shift hours | Machine hours |
//! | SolveResult | Sprint plan | Dispatch plan | Shift plan |

mod cost;
mod result;
mod table;
mod task;
mod worker;

pub use cost::{CostEntry, PairCost};
pub use result::{AssignmentRow, DecisionMatrix, LoadRow, SolveResult, SolveStatus};
pub use table::{parse_cell, AvailabilityRow, AvailabilityTable, DurationTable, TaskRow};
pub use task::Task;
pub use worker::Worker;
