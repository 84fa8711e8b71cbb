//! Build-solve-interpret pipeline.
//!
//! Every call validates its input, builds an independent model, hands it
//! to the backend, and interprets the outcome. The model is dropped once
//! the result is materialised; no state survives between calls.

use tracing::info;

use crate::config::SolveOptions;
use crate::error::AssignError;
use crate::formulation::{AssignmentModel, AssignmentProblem};
use crate::interpret::interpret;
use crate::models::{AvailabilityTable, DurationTable, SolveResult};
use crate::solver::{MicroLpBackend, SolverBackend};

/// Solves assignment problems with a configurable backend.
///
/// # Example
///
/// ```
/// use u_assign::{Assigner, SolveOptions};
/// use u_assign::models::{AvailabilityTable, DurationTable, TaskRow};
///
/// let durations = DurationTable::new(["Ana", "Ben"])
///     .with_row(TaskRow::from_hours("API", &[4.0, 6.0]))
///     .with_row(TaskRow::from_text("UI", &["", "3"]));
/// let roster = AvailabilityTable::new()
///     .with_worker("Ana", 8.0)
///     .with_worker("Ben", 8.0);
///
/// let result = Assigner::new()
///     .with_options(SolveOptions::default())
///     .solve(&durations, &roster)
///     .unwrap();
/// assert!(result.is_optimal());
/// assert_eq!(result.worker_for("UI"), Some("Ben"));
/// assert_eq!(result.objective, Some(7.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Assigner<B = MicroLpBackend> {
    backend: B,
    options: SolveOptions,
}

impl Assigner<MicroLpBackend> {
    /// Creates an assigner using the `microlp` backend and default options.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B: SolverBackend> Assigner<B> {
    /// Replaces the solver backend.
    pub fn with_backend<C: SolverBackend>(self, backend: C) -> Assigner<C> {
        Assigner {
            backend,
            options: self.options,
        }
    }

    /// Sets the interpretation tolerances.
    pub fn with_options(mut self, options: SolveOptions) -> Self {
        self.options = options;
        self
    }

    /// Current options.
    pub fn options(&self) -> &SolveOptions {
        &self.options
    }

    /// Validates the tables, then solves.
    pub fn solve(
        &self,
        durations: &DurationTable,
        availability: &AvailabilityTable,
    ) -> Result<SolveResult, AssignError> {
        let problem = AssignmentProblem::from_tables(durations, availability)?;
        self.solve_problem(problem)
    }

    /// Solves an already validated problem.
    pub fn solve_problem(&self, problem: AssignmentProblem) -> Result<SolveResult, AssignError> {
        let model = AssignmentModel::build(problem);
        info!(
            backend = self.backend.name(),
            workers = model.problem().worker_count(),
            tasks = model.problem().task_count(),
            variables = model.variable_count(),
            constraints = model.constraint_count(),
            "solving assignment model"
        );

        let outcome = self.backend.solve(&model);
        let result = interpret(&model, outcome, &self.options)?;

        info!(status = %result.status, objective = ?result.objective, "assignment solved");
        Ok(result)
    }
}

/// Solves with the default backend and options.
///
/// Malformed tables fail with [`AssignError::Validation`]. Infeasibility
/// is reported through [`SolveResult::status`], not as an error.
pub fn build_and_solve(
    durations: &DurationTable,
    availability: &AvailabilityTable,
) -> Result<SolveResult, AssignError> {
    Assigner::new().solve(durations, availability)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IntegrityFault;
    use crate::models::{AvailabilityRow, PairCost, SolveStatus};
    use crate::sample::{developer_team, developer_team_with_availability};
    use crate::solver::{SolverOutcome, SolverStatus};
    use crate::validation::ValidationErrorKind;

    const CARLOS: &str = "Carlos Urías";
    const SERGIO: &str = "Sergio Robles";
    const SAUL: &str = "Saúl Barbero";
    const MATEO: &str = "Mateo Alfredo";

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn set_cell(durations: &mut DurationTable, task: &str, worker: &str, cell: Option<f64>) {
        let col = durations.column_of(worker).unwrap();
        let row = durations.rows.iter_mut().find(|r| r.task == task).unwrap();
        row.cells[col] = cell;
    }

    /// Checks every property an optimal result must satisfy.
    fn assert_invariants(
        result: &SolveResult,
        durations: &DurationTable,
        roster: &AvailabilityTable,
    ) {
        assert!(result.is_optimal());

        for task in durations.task_ids() {
            let rows = result.assignment.iter().filter(|a| a.task == task).count();
            assert_eq!(rows, 1, "task {task} has {rows} assignment rows");
        }

        for row in &result.assignment {
            let cell = durations.cell(&row.task, &row.worker);
            assert!(PairCost::from_cell(cell).is_eligible(), "{row:?} is ineligible");
            assert_eq!(cell, Some(row.hours));
        }

        assert_eq!(result.load.len(), roster.rows.len());
        for roster_row in &roster.rows {
            let load = result.load_for(&roster_row.worker).unwrap();
            let summed: f64 = result
                .assignments_for_worker(&roster_row.worker)
                .iter()
                .map(|a| a.hours)
                .sum();
            assert!((load.assigned_hours - summed).abs() < 1e-9);
            assert!(load.assigned_hours <= roster_row.hours.unwrap() + 1e-6);
        }

        let objective = result.objective.unwrap();
        assert!((objective - result.assigned_hours_total()).abs() < 1e-6);
    }

    #[test]
    fn test_sample_team_capacity_binding() {
        init_tracing();
        let (durations, roster) = developer_team();
        let result = build_and_solve(&durations, &roster).unwrap();

        assert_invariants(&result, &durations, &roster);
        assert_eq!(result.status, SolveStatus::Optimal);
        assert!((result.objective.unwrap() - 33.0).abs() < 1e-6);
        assert_eq!(result.worker_for("Frontend"), Some(SAUL));
        assert_eq!(result.worker_for("Backend"), Some(CARLOS));
        assert_eq!(result.worker_for("Testing"), Some(CARLOS));
        assert_eq!(result.worker_for("BaseDatos"), Some(SERGIO));
    }

    #[test]
    fn test_sample_team_capacity_slack() {
        let (durations, roster) = developer_team_with_availability(40.0);
        let result = build_and_solve(&durations, &roster).unwrap();

        assert_invariants(&result, &durations, &roster);
        // Sum of per-task minima: 8 + 9 + 7 + 8.
        assert!((result.objective.unwrap() - 32.0).abs() < 1e-6);
        assert!((result.load_for(CARLOS).unwrap().assigned_hours - 24.0).abs() < 1e-6);
    }

    #[test]
    fn test_ineligible_pair_never_assigned() {
        let (mut durations, roster) = developer_team();
        // Carlos would be the cheapest tester.
        set_cell(&mut durations, "Testing", CARLOS, Some(0.0));

        let result = build_and_solve(&durations, &roster).unwrap();
        assert_invariants(&result, &durations, &roster);
        assert!(!result.decisions.is_assigned(CARLOS, "Testing"));
        assert_ne!(result.worker_for("Testing"), Some(CARLOS));
        assert!((result.objective.unwrap() - 34.0).abs() < 1e-6);
    }

    #[test]
    fn test_blank_cell_is_ineligible() {
        let (mut durations, roster) = developer_team();
        set_cell(&mut durations, "Frontend", SAUL, None);

        let result = build_and_solve(&durations, &roster).unwrap();
        assert_invariants(&result, &durations, &roster);
        assert_ne!(result.worker_for("Frontend"), Some(SAUL));
    }

    #[test]
    fn test_uncoverable_task_is_infeasible() {
        let (mut durations, roster) = developer_team();
        for dev in [SERGIO, SAUL, CARLOS, MATEO] {
            set_cell(&mut durations, "Testing", dev, Some(0.0));
        }

        let result = build_and_solve(&durations, &roster).unwrap();
        assert_eq!(result.status, SolveStatus::Infeasible);
        assert_eq!(result.objective, None);
        assert!(result.assignment.is_empty());
        assert!(result.load.is_empty());
    }

    #[test]
    fn test_insufficient_capacity_is_infeasible() {
        let (mut durations, mut roster) = developer_team();
        // Only Sergio can do BaseDatos (8 h), and he has 5 h.
        for dev in [SAUL, CARLOS, MATEO] {
            set_cell(&mut durations, "BaseDatos", dev, Some(0.0));
        }
        roster.rows[0] = AvailabilityRow::new(SERGIO, 5.0);

        let result = build_and_solve(&durations, &roster).unwrap();
        assert_ne!(result.status, SolveStatus::Optimal);
        assert_eq!(result.objective, None);
        assert!(result.assignment.is_empty());
        assert!(result.load.is_empty());
    }

    #[test]
    fn test_total_capacity_shortfall_is_infeasible() {
        let (durations, roster) = developer_team_with_availability(7.5);
        let result = build_and_solve(&durations, &roster).unwrap();
        assert_eq!(result.status, SolveStatus::Infeasible);
    }

    #[test]
    fn test_idle_worker_in_load_table() {
        let (durations, roster) = developer_team();
        let result = build_and_solve(&durations, &roster).unwrap();

        assert!(result.assignments_for_worker(MATEO).is_empty());
        let idle = result.load_for(MATEO).unwrap();
        assert_eq!(idle.assigned_hours, 0.0);
        assert_eq!(idle.utilization(), Some(0.0));
        let workers: Vec<_> = result.load.iter().map(|l| l.worker.as_str()).collect();
        assert_eq!(workers, vec![SERGIO, SAUL, CARLOS, MATEO]);
    }

    #[test]
    fn test_zero_availability_worker() {
        let (durations, mut roster) = developer_team();
        roster.rows[3] = AvailabilityRow::new(MATEO, 0.0);

        let result = build_and_solve(&durations, &roster).unwrap();
        assert_invariants(&result, &durations, &roster);
        assert_eq!(result.load_for(MATEO).unwrap().assigned_hours, 0.0);
    }

    #[test]
    fn test_malformed_input_fails_fast() {
        let (durations, _) = developer_team();
        let roster = AvailabilityTable::new()
            .with_worker(SERGIO, 20.0)
            .with_worker(SAUL, 20.0)
            .with_row(AvailabilityRow::from_text(CARLOS, "twenty"));

        match build_and_solve(&durations, &roster) {
            Err(AssignError::Validation(errors)) => {
                assert!(errors
                    .iter()
                    .any(|e| e.kind == ValidationErrorKind::InvalidAvailability));
                assert!(errors
                    .iter()
                    .any(|e| e.kind == ValidationErrorKind::UnknownWorker
                        && e.message.contains(MATEO)));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_repeated_solves_are_identical() {
        let (durations, roster) = developer_team();
        let assigner = Assigner::new();
        let first = assigner.solve(&durations, &roster).unwrap();
        let second = assigner.solve(&durations, &roster).unwrap();
        assert_eq!(first.assignment, second.assignment);
        assert_eq!(first.load, second.load);
    }

    #[test]
    fn test_concurrent_solves_are_isolated() {
        let assigner = Assigner::new();
        let assigner = &assigner;
        let inputs: Vec<_> = [20.0, 40.0, 7.5, 20.0]
            .into_iter()
            .map(developer_team_with_availability)
            .collect();

        let statuses: Vec<_> = std::thread::scope(|s| {
            let handles: Vec<_> = inputs
                .iter()
                .map(|(d, r)| s.spawn(move || assigner.solve(d, r).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!((statuses[0].objective.unwrap() - 33.0).abs() < 1e-6);
        assert!((statuses[1].objective.unwrap() - 32.0).abs() < 1e-6);
        assert_eq!(statuses[2].status, SolveStatus::Infeasible);
        assert_eq!(statuses[0].assignment, statuses[3].assignment);
    }

    /// Replays a fixed outcome regardless of the model.
    struct ScriptedBackend(SolverOutcome);

    impl SolverBackend for ScriptedBackend {
        fn name(&self) -> &str {
            "scripted"
        }

        fn solve(&self, _model: &AssignmentModel) -> SolverOutcome {
            self.0.clone()
        }
    }

    #[test]
    fn test_non_optimal_status_is_not_success() {
        let (durations, roster) = developer_team();
        for status in [SolverStatus::Unbounded, SolverStatus::Error] {
            let assigner = Assigner::new()
                .with_backend(ScriptedBackend(SolverOutcome::failed(status, "scripted")));
            let result = assigner.solve(&durations, &roster).unwrap();
            assert!(!result.is_optimal());
            assert_eq!(result.status, SolveStatus::from(status));
            assert_eq!(result.objective, None);
            assert!(result.assignment.is_empty());
        }
    }

    #[test]
    fn test_integrity_fault_surfaces_as_error() {
        let (durations, roster) = developer_team();
        let assigner = Assigner::new()
            .with_backend(ScriptedBackend(SolverOutcome::optimal(vec![0.5; 16], 0.0)));

        match assigner.solve(&durations, &roster) {
            Err(AssignError::Integrity(IntegrityFault::NonIntegral { value, .. })) => {
                assert_eq!(value, 0.5);
            }
            other => panic!("expected integrity fault, got {other:?}"),
        }
    }

    #[test]
    fn test_options_are_kept_across_backend_swap() {
        let opts = SolveOptions::new().with_objective_tolerance(0.25);
        let assigner = Assigner::new()
            .with_options(opts.clone())
            .with_backend(ScriptedBackend(SolverOutcome::failed(SolverStatus::Error, "x")));
        assert_eq!(assigner.options(), &opts);
    }
}
