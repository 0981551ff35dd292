use super::{Literal, SatSolver};

/// A trait for (weighted partial) MaxSAT solvers.
///
/// Clauses added through [`SatSolver::add_clause`] are hard clauses.
/// The [`SatSolver::solve`] function returns an assignment satisfying all the
/// hard clauses and maximizing the total weight of the satisfied soft clauses,
/// or reports the hard clauses admit no model.
pub trait MaxSatSolver: SatSolver {
    /// Adds a soft clause with the provided weight to this solver.
    fn add_soft_clause(&mut self, cl: Vec<Literal>, weight: usize);

    /// Gives a view of this solver restricted to its hard clause interface.
    fn as_sat_solver_mut(&mut self) -> &mut dyn SatSolver;
}

/// A function able to create MaxSAT solvers.
pub type MaxSatSolverFactoryFn = dyn Fn() -> Box<dyn MaxSatSolver>;
