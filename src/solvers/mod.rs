//! Objects dedicated to the computation of extensions and acceptance queries.

mod cf2_solver;
pub use cf2_solver::Cf2SemanticsSolver;
pub use cf2_solver::Cf2Strategy;

mod complete_semantics_solver;
pub use complete_semantics_solver::CompleteSemanticsSolver;

mod dispatch;
pub use dispatch::compute_extensions;
pub use dispatch::compute_extensions_with_budget;
pub use dispatch::compute_one_extension;
pub use dispatch::compute_one_extension_with_budget;
pub use dispatch::query;
pub use dispatch::query_with_certificate;

mod enumeration_solver;
pub use enumeration_solver::EnumerationSolver;

mod grounded_semantics_solver;
pub use grounded_semantics_solver::GroundedSemanticsSolver;

mod ideal_semantics_solver;
pub use ideal_semantics_solver::IdealSemanticsSolver;

mod incremental_acceptability_computer;
pub use incremental_acceptability_computer::IncrementalAcceptabilityComputer;

mod maxsat_acceptability_computer;
pub use maxsat_acceptability_computer::MaxSatAcceptabilityComputer;

mod specs;
pub use specs::CredulousAcceptanceComputer;
pub use specs::ExtensionSetComputer;
pub use specs::SingleExtensionComputer;
pub use specs::SkepticalAcceptanceComputer;

mod stable_semantics_solver;
pub use stable_semantics_solver::StableSemanticsSolver;
