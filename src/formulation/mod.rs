//! Binary integer formulation of the assignment problem.
//!
//! Turns validated tabular input into a backend-neutral 0-1 program:
//!
//! ```text
//! minimise    Σ_w Σ_t  d[w][t] · x[w][t]                 (eligible pairs only)
//! subject to  Σ_w x[w][t] = 1              ∀ t           (coverage)
//!             Σ_t d[w][t] · x[w][t] ≤ a[w] ∀ w           (capacity)
//!             x[w][t] = 0                  ∀ ineligible  (ban)
//!             x[w][t] ∈ {0, 1}
//! ```
//!
//! The model is plain data. Any [`SolverBackend`](crate::solver::SolverBackend)
//! can consume it, and tests can inspect it without solving.
//!
//! # Reference
//! Martello & Toth (1990), "Knapsack Problems", Ch. 7 (Generalized Assignment Problem)

mod model;
mod problem;

pub use model::{AssignmentModel, ConstraintKind, ConstraintSense, DecisionVar, LinearConstraint};
pub use problem::AssignmentProblem;
