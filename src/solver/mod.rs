//! Solver backends.
//!
//! The numeric search (simplex, branch-and-bound) is delegated to an
//! external engine behind [`SolverBackend`]. A backend receives a fully
//! specified [`AssignmentModel`](crate::formulation::AssignmentModel) and
//! returns a terminal [`SolverOutcome`]; it never interprets the values.

mod backend;
mod microlp;

pub use backend::{SolverBackend, SolverOutcome, SolverStatus};
pub use microlp::MicroLpBackend;
