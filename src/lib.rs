//! Capacitated task assignment for the U-Engine ecosystem.
//!
//! Assigns every task to exactly one eligible worker, minimising total
//! hours, without exceeding any worker's availability. The crate owns the
//! model construction and the interpretation of solver output; the numeric
//! search is delegated to a [`SolverBackend`](solver::SolverBackend)
//! (`microlp` by default).
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Worker`, `Task`, `PairCost`, input tables,
//!   and the `SolveResult` bundle
//! - **`validation`**: Input integrity checks (empty sets, duplicate IDs,
//!   unmatched workers, invalid availability)
//! - **`formulation`**: 0-1 program builder (coverage, capacity, eligibility bans)
//! - **`solver`**: Backend trait and the `good_lp`/`microlp` backend
//! - **`interpret`**: Decision rounding, integrity checks, result tables
//! - **`sample`**: Worked example dataset
//!
//! # Example
//!
//! ```
//! use u_assign::{build_and_solve, sample};
//!
//! let (durations, roster) = sample::developer_team();
//! let result = build_and_solve(&durations, &roster).unwrap();
//!
//! assert!(result.is_optimal());
//! assert_eq!(result.assignment.len(), 4);
//! assert_eq!(result.load.len(), 4);
//! assert!((result.objective.unwrap() - 33.0).abs() < 1e-6);
//! ```
//!
//! # References
//!
//! - Martello & Toth (1990), "Knapsack Problems: Algorithms and Computer Implementations", Ch. 7
//! - Wolsey (1998), "Integer Programming"

pub mod assigner;
pub mod config;
pub mod error;
pub mod formulation;
pub mod interpret;
pub mod models;
pub mod sample;
pub mod solver;
pub mod validation;

pub use assigner::{build_and_solve, Assigner};
pub use config::SolveOptions;
pub use error::{AssignError, IntegrityFault};
