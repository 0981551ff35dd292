//! SAT and MaxSAT solver interfaces used by the SAT-backed semantics solvers.

mod buffered_maxsat_solver;
pub use buffered_maxsat_solver::BufferedMaxSatSolver;
pub use buffered_maxsat_solver::MaxSatSolvingFn;
pub use buffered_maxsat_solver::WcnfInstanceRead;

mod buffered_sat_solver;
pub use buffered_sat_solver::BufferedSatSolver;
pub use buffered_sat_solver::DimacsInstanceRead;
pub use buffered_sat_solver::SolvingFn;

mod cadical_solver;
pub use cadical_solver::CadicalSolver;

mod external_maxsat_solver;
pub use external_maxsat_solver::ExternalMaxSatSolver;

mod external_sat_solver;
pub use external_sat_solver::ExternalSatSolver;

mod maxsat_solver;
pub use maxsat_solver::MaxSatSolver;
pub use maxsat_solver::MaxSatSolverFactoryFn;

mod sat_solver;
pub use sat_solver::default_solver;
pub use sat_solver::Assignment;
pub use sat_solver::Literal;
pub use sat_solver::SatSolver;
pub use sat_solver::SatSolverFactoryFn;
pub use sat_solver::SolvingListener;
pub use sat_solver::SolvingResult;
pub use sat_solver::Variable;
