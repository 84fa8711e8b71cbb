//! Assignment model: decision variables, objective, and constraints.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::AssignmentProblem;

/// One binary decision variable: "worker performs task".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionVar {
    /// Display name, `x_{worker}_{task}`.
    pub name: String,
    /// Worker index.
    pub worker: usize,
    /// Task index.
    pub task: usize,
}

/// Row sense of a linear constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintSense {
    /// `lhs == rhs`
    Eq,
    /// `lhs <= rhs`
    Le,
}

/// Role of a constraint row in the formulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstraintKind {
    /// Each task is performed by exactly one worker.
    Coverage,
    /// Each worker's assigned hours stay within availability.
    Capacity,
    /// An ineligible pair is pinned to zero.
    Ban,
}

/// A linear row `Σ coef · x[var]  (== | <=)  rhs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearConstraint {
    /// Row name (`assign_{task}`, `cap_{worker}`, `ban_{worker}_{task}`).
    pub name: String,
    /// Role in the formulation.
    pub kind: ConstraintKind,
    /// `(variable index, coefficient)` pairs.
    pub terms: Vec<(usize, f64)>,
    /// Row sense.
    pub sense: ConstraintSense,
    /// Right-hand side.
    pub rhs: f64,
}

impl LinearConstraint {
    /// Left-hand side under the given variable values.
    ///
    /// # Panics
    /// Panics if a term refers to an index outside `values`.
    pub fn lhs(&self, values: &[f64]) -> f64 {
        self.terms.iter().map(|&(i, c)| c * values[i]).sum()
    }

    /// Whether the row holds under `values`, within `tolerance`.
    ///
    /// # Panics
    /// Panics if a term refers to an index outside `values`.
    pub fn is_satisfied_by(&self, values: &[f64], tolerance: f64) -> bool {
        let lhs = self.lhs(values);
        match self.sense {
            ConstraintSense::Eq => (lhs - self.rhs).abs() <= tolerance,
            ConstraintSense::Le => lhs <= self.rhs + tolerance,
        }
    }
}

/// A fully specified 0-1 assignment program.
///
/// Owns the [`AssignmentProblem`] it was built from, so a solved model
/// carries everything needed to interpret its variable values. Each
/// solve builds its own model; nothing in it is shared.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentModel {
    problem: AssignmentProblem,
    variables: Vec<DecisionVar>,
    objective: Vec<(usize, f64)>,
    constraints: Vec<LinearConstraint>,
    uncoverable_tasks: Vec<usize>,
}

impl AssignmentModel {
    /// Builds the formulation.
    ///
    /// Creates:
    /// - One binary variable per (worker, task) pair
    /// - Objective: minimise Σ hours · x over eligible pairs
    /// - `assign_{task}`: Σ x over eligible workers == 1
    /// - `cap_{worker}`: Σ hours · x over eligible tasks <= availability
    /// - `ban_{worker}_{task}`: x == 0 for every ineligible pair
    ///
    /// A task with no eligible worker keeps its coverage row, written over
    /// its banned variables, so the solver reports the infeasibility.
    pub fn build(problem: AssignmentProblem) -> Self {
        let n_workers = problem.worker_count();
        let n_tasks = problem.task_count();

        let mut variables = Vec::with_capacity(n_workers * n_tasks);
        for (w, worker) in problem.workers().iter().enumerate() {
            for (t, task) in problem.tasks().iter().enumerate() {
                variables.push(DecisionVar {
                    name: format!("x_{}_{}", worker.id, task.id),
                    worker: w,
                    task: t,
                });
            }
        }

        let index = |w: usize, t: usize| w * n_tasks + t;

        let mut objective = Vec::new();
        for w in 0..n_workers {
            for t in problem.eligible_tasks(w) {
                objective.push((index(w, t), problem.cost(w, t).hours()));
            }
        }

        let mut constraints = Vec::with_capacity(n_tasks + n_workers);
        let mut uncoverable_tasks = Vec::new();

        for (t, task) in problem.tasks().iter().enumerate() {
            let eligible = problem.eligible_workers(t);
            let terms: Vec<(usize, f64)> = if eligible.is_empty() {
                warn!(task = %task.id, "task has no eligible worker; model is infeasible");
                uncoverable_tasks.push(t);
                (0..n_workers).map(|w| (index(w, t), 1.0)).collect()
            } else {
                eligible.into_iter().map(|w| (index(w, t), 1.0)).collect()
            };
            constraints.push(LinearConstraint {
                name: format!("assign_{}", task.id),
                kind: ConstraintKind::Coverage,
                terms,
                sense: ConstraintSense::Eq,
                rhs: 1.0,
            });
        }

        for (w, worker) in problem.workers().iter().enumerate() {
            let terms = problem
                .eligible_tasks(w)
                .into_iter()
                .map(|t| (index(w, t), problem.cost(w, t).hours()))
                .collect();
            constraints.push(LinearConstraint {
                name: format!("cap_{}", worker.id),
                kind: ConstraintKind::Capacity,
                terms,
                sense: ConstraintSense::Le,
                rhs: worker.availability_hours,
            });
        }

        for (w, worker) in problem.workers().iter().enumerate() {
            for (t, task) in problem.tasks().iter().enumerate() {
                if !problem.cost(w, t).is_eligible() {
                    constraints.push(LinearConstraint {
                        name: format!("ban_{}_{}", worker.id, task.id),
                        kind: ConstraintKind::Ban,
                        terms: vec![(index(w, t), 1.0)],
                        sense: ConstraintSense::Eq,
                        rhs: 0.0,
                    });
                }
            }
        }

        debug!(
            variables = variables.len(),
            constraints = constraints.len(),
            bans = constraints.len() - n_tasks - n_workers,
            "assignment model built"
        );

        Self {
            problem,
            variables,
            objective,
            constraints,
            uncoverable_tasks,
        }
    }

    /// The problem this model encodes.
    pub fn problem(&self) -> &AssignmentProblem {
        &self.problem
    }

    /// Decision variables, indexed `worker * task_count + task`.
    pub fn variables(&self) -> &[DecisionVar] {
        &self.variables
    }

    /// Objective as `(variable index, coefficient)` terms (minimised).
    pub fn objective(&self) -> &[(usize, f64)] {
        &self.objective
    }

    /// All constraint rows.
    pub fn constraints(&self) -> &[LinearConstraint] {
        &self.constraints
    }

    /// Constraint rows of one kind.
    pub fn constraints_of(&self, kind: ConstraintKind) -> impl Iterator<Item = &LinearConstraint> {
        self.constraints.iter().filter(move |c| c.kind == kind)
    }

    /// Tasks with no eligible worker.
    pub fn uncoverable_tasks(&self) -> &[usize] {
        &self.uncoverable_tasks
    }

    /// Variable index of a (worker, task) pair.
    #[inline]
    pub fn var_index(&self, worker: usize, task: usize) -> usize {
        worker * self.problem.task_count() + task
    }

    /// Number of decision variables.
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// Number of constraint rows.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Objective value under the given variable values.
    ///
    /// # Panics
    /// Panics if `values` is shorter than [`variable_count`](Self::variable_count).
    pub fn evaluate(&self, values: &[f64]) -> f64 {
        self.objective.iter().map(|&(i, c)| c * values[i]).sum()
    }

    /// Whether every row holds under `values`, within `tolerance`.
    pub fn is_feasible(&self, values: &[f64], tolerance: f64) -> bool {
        values.len() == self.variables.len()
            && self
                .constraints
                .iter()
                .all(|c| c.is_satisfied_by(values, tolerance))
    }
}
