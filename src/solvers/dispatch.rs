use super::{
    Cf2SemanticsSolver, CompleteSemanticsSolver, CredulousAcceptanceComputer, EnumerationSolver,
    ExtensionSetComputer, GroundedSemanticsSolver, IdealSemanticsSolver, SingleExtensionComputer,
    SkepticalAcceptanceComputer, StableSemanticsSolver,
};
use crate::aa::{AAFramework, Argument, LabelType, Query, Semantics};
use anyhow::{anyhow, Result};

/// Computes the set of extensions of an AF under a semantics.
///
/// The solver strategy is chosen from the semantics; see
/// [compute_extensions_with_budget] for the budget-bounded variant.
pub fn compute_extensions<T>(
    af: &AAFramework<T>,
    semantics: Semantics,
) -> Result<Vec<Vec<&Argument<T>>>>
where
    T: LabelType,
{
    compute_extensions_with_budget(af, semantics, None)
}

/// Computes the set of extensions of an AF under a semantics, with an optional
/// candidate budget bounding the exponential strategies.
pub fn compute_extensions_with_budget<T>(
    af: &AAFramework<T>,
    semantics: Semantics,
    budget: Option<usize>,
) -> Result<Vec<Vec<&Argument<T>>>>
where
    T: LabelType,
{
    let ids = extension_set_ids(af, semantics, budget)?;
    Ok(ids
        .iter()
        .map(|ext| {
            ext.iter()
                .map(|id| af.argument_set().get_argument_by_id(*id))
                .collect()
        })
        .collect())
}

/// Computes a single extension of an AF under a semantics.
///
/// In case the semantics admits no extension for this AF, [Option::None] is returned.
pub fn compute_one_extension<T>(
    af: &AAFramework<T>,
    semantics: Semantics,
) -> Result<Option<Vec<&Argument<T>>>>
where
    T: LabelType,
{
    compute_one_extension_with_budget(af, semantics, None)
}

/// Computes a single extension of an AF under a semantics, with an optional
/// candidate budget bounding the exponential strategies.
pub fn compute_one_extension_with_budget<T>(
    af: &AAFramework<T>,
    semantics: Semantics,
    budget: Option<usize>,
) -> Result<Option<Vec<&Argument<T>>>>
where
    T: LabelType,
{
    let ids = match semantics {
        Semantics::GR | Semantics::CO => {
            to_opt_ids(GroundedSemanticsSolver::new(af).compute_one_extension()?)
        }
        Semantics::ST => to_opt_ids(StableSemanticsSolver::new(af).compute_one_extension()?),
        Semantics::ID => {
            let mut solver = IdealSemanticsSolver::new(af);
            solver.set_budget(budget);
            to_opt_ids(solver.compute_one_extension()?)
        }
        Semantics::CF2 => {
            let mut solver = Cf2SemanticsSolver::new(af);
            solver.set_budget(budget);
            to_opt_ids(solver.compute_one_extension()?)
        }
        _ => {
            let mut solver = enumeration_solver_for(af, semantics, budget);
            to_opt_ids(solver.compute_one_extension()?)
        }
    };
    Ok(ids.map(|ext| {
        ext.iter()
            .map(|id| af.argument_set().get_argument_by_id(*id))
            .collect()
    }))
}

/// Answers an acceptance query for an argument of an AF under a semantics.
///
/// The query must be [Query::DC] or [Query::DS]; an error is returned for the
/// extension computation queries.
pub fn query<T>(
    af: &AAFramework<T>,
    arg: &Argument<T>,
    semantics: Semantics,
    query: Query,
) -> Result<bool>
where
    T: LabelType,
{
    Ok(query_with_certificate(af, arg, semantics, query, None)?.0)
}

/// Answers an acceptance query for an argument of an AF under a semantics,
/// providing a certificate extension when one proves the answer.
///
/// For a credulous query, the certificate is an extension containing the
/// argument when the answer is `true`.
/// For a skeptical query, the certificate is an extension that does not
/// contain the argument when the answer is `false`.
pub fn query_with_certificate<'a, T>(
    af: &'a AAFramework<T>,
    arg: &Argument<T>,
    semantics: Semantics,
    query: Query,
    budget: Option<usize>,
) -> Result<(bool, Option<Vec<&'a Argument<T>>>)>
where
    T: LabelType,
{
    let (result, certificate_ids) = match query {
        Query::DC => credulous_acceptance_ids(af, arg, semantics, budget)?,
        Query::DS => skeptical_acceptance_ids(af, arg, semantics, budget)?,
        _ => {
            return Err(anyhow!(
                r#"query "{}" is not an acceptance query"#,
                query.to_short_str()
            ))
        }
    };
    Ok((
        result,
        certificate_ids.map(|ext| {
            ext.iter()
                .map(|id| af.argument_set().get_argument_by_id(*id))
                .collect()
        }),
    ))
}

fn credulous_acceptance_ids<T>(
    af: &AAFramework<T>,
    arg: &Argument<T>,
    semantics: Semantics,
    budget: Option<usize>,
) -> Result<(bool, Option<Vec<usize>>)>
where
    T: LabelType,
{
    match semantics {
        Semantics::GR => {
            to_acceptance_ids(GroundedSemanticsSolver::new(af).is_credulously_accepted_with_certificate(arg)?)
        }
        Semantics::CO => {
            to_acceptance_ids(CompleteSemanticsSolver::new(af).is_credulously_accepted_with_certificate(arg)?)
        }
        Semantics::ST => {
            to_acceptance_ids(StableSemanticsSolver::new(af).is_credulously_accepted_with_certificate(arg)?)
        }
        Semantics::ID => {
            let mut solver = IdealSemanticsSolver::new(af);
            solver.set_budget(budget);
            to_acceptance_ids(solver.is_credulously_accepted_with_certificate(arg)?)
        }
        _ => {
            let extensions = extension_set_ids(af, semantics, budget)?;
            let witness = extensions.into_iter().find(|ext| ext.contains(&arg.id()));
            Ok((witness.is_some(), witness))
        }
    }
}

fn skeptical_acceptance_ids<T>(
    af: &AAFramework<T>,
    arg: &Argument<T>,
    semantics: Semantics,
    budget: Option<usize>,
) -> Result<(bool, Option<Vec<usize>>)>
where
    T: LabelType,
{
    match semantics {
        Semantics::GR => {
            to_acceptance_ids(GroundedSemanticsSolver::new(af).is_skeptically_accepted_with_certificate(arg)?)
        }
        Semantics::CO => {
            to_acceptance_ids(CompleteSemanticsSolver::new(af).is_skeptically_accepted_with_certificate(arg)?)
        }
        Semantics::ST => {
            to_acceptance_ids(StableSemanticsSolver::new(af).is_skeptically_accepted_with_certificate(arg)?)
        }
        Semantics::ID => {
            let mut solver = IdealSemanticsSolver::new(af);
            solver.set_budget(budget);
            to_acceptance_ids(solver.is_skeptically_accepted_with_certificate(arg)?)
        }
        _ => {
            let extensions = extension_set_ids(af, semantics, budget)?;
            let counterexample = extensions.into_iter().find(|ext| !ext.contains(&arg.id()));
            Ok((counterexample.is_none(), counterexample))
        }
    }
}

fn extension_set_ids<T>(
    af: &AAFramework<T>,
    semantics: Semantics,
    budget: Option<usize>,
) -> Result<Vec<Vec<usize>>>
where
    T: LabelType,
{
    match semantics {
        Semantics::GR => Ok(to_ids(GroundedSemanticsSolver::new(af).compute_extensions()?)),
        Semantics::ID => {
            let mut solver = IdealSemanticsSolver::new(af);
            solver.set_budget(budget);
            Ok(to_ids(solver.compute_extensions()?))
        }
        Semantics::CF2 => {
            let mut solver = Cf2SemanticsSolver::new(af);
            solver.set_budget(budget);
            Ok(to_ids(solver.compute_extensions()?))
        }
        _ => {
            let mut solver = enumeration_solver_for(af, semantics, budget);
            Ok(to_ids(solver.compute_extensions()?))
        }
    }
}

fn enumeration_solver_for<'a, T>(
    af: &'a AAFramework<T>,
    semantics: Semantics,
    budget: Option<usize>,
) -> EnumerationSolver<'a, T>
where
    T: LabelType,
{
    let mut solver = match semantics {
        Semantics::CF => EnumerationSolver::new_for_conflict_freeness(af),
        Semantics::AD => EnumerationSolver::new_for_admissibility(af),
        Semantics::CO => EnumerationSolver::new_for_complete_semantics(af),
        Semantics::PR => EnumerationSolver::new_for_preferred_semantics(af),
        Semantics::ST => EnumerationSolver::new_for_stable_semantics(af),
        Semantics::SST => EnumerationSolver::new_for_semi_stable_semantics(af),
        Semantics::NA => EnumerationSolver::new_for_naive_semantics(af),
        Semantics::GR | Semantics::ID | Semantics::CF2 => {
            unreachable!("these semantics have a dedicated solver")
        }
    };
    solver.set_budget(budget);
    solver
}

fn to_ids<T>(extensions: Vec<Vec<&Argument<T>>>) -> Vec<Vec<usize>>
where
    T: LabelType,
{
    extensions
        .iter()
        .map(|ext| ext.iter().map(|arg| arg.id()).collect())
        .collect()
}

fn to_opt_ids<T>(extension: Option<Vec<&Argument<T>>>) -> Option<Vec<usize>>
where
    T: LabelType,
{
    extension.map(|ext| ext.iter().map(|arg| arg.id()).collect())
}

fn to_acceptance_ids<T>(
    acceptance: (bool, Option<Vec<&Argument<T>>>),
) -> Result<(bool, Option<Vec<usize>>)>
where
    T: LabelType,
{
    Ok((acceptance.0, to_opt_ids(acceptance.1)))
}
