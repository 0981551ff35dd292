use super::enumeration_solver::EnumerationSolver;
use super::specs::{
    CredulousAcceptanceComputer, ExtensionSetComputer, SingleExtensionComputer,
    SkepticalAcceptanceComputer,
};
use crate::aa::{AAFramework, Argument, LabelType, Labeling, LabelingValue};
use anyhow::Result;

/// A solver used to solve queries for the ideal semantics.
///
/// The ideal extension is computed by enumerating the admissible sets and the
/// preferred extensions of the framework. An admissible set is a candidate when
/// the in and out parts of its labeling are included in those of the labeling
/// of every preferred extension; the ideal extension is the unique candidate
/// whose labeling is not contained in the one of another candidate.
///
/// Since the ideal extension is unique, credulous and skeptical acceptance
/// coincide and resume to a membership test.
///
/// Both enumerations are exponential in the number of arguments; an optional
/// candidate budget makes the solver fail fast instead.
pub struct IdealSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    budget: Option<usize>,
}

impl<'a, T> IdealSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver dedicated to the ideal semantics.
    ///
    /// # Example
    ///
    /// ```
    /// # use rhetor::aa::{AAFramework, LabelType};
    /// # use rhetor::solvers::{SingleExtensionComputer, IdealSemanticsSolver};
    /// fn search_one_extension<T>(af: &AAFramework<T>) where T: LabelType {
    ///     let mut solver = IdealSemanticsSolver::new(af);
    ///     let ext = solver.compute_one_extension().unwrap().unwrap();
    ///     println!("found the ideal extension: {:?}", ext);
    /// }
    /// # search_one_extension::<usize>(&AAFramework::default());
    /// ```
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af, budget: None }
    }

    /// Sets the candidate budget of the underlying enumerations.
    pub fn set_budget(&mut self, budget: Option<usize>) {
        self.budget = budget;
    }

    /// Computes the ideal extension.
    ///
    /// # Panics
    ///
    /// The theory guarantees a unique ideal extension exists.
    /// This function panics if this invariant is broken.
    fn compute_ideal(&self) -> Result<Vec<&'a Argument<T>>> {
        let mut admissible_solver = EnumerationSolver::new_for_admissibility(self.af);
        admissible_solver.set_budget(self.budget);
        let admissible = admissible_solver.compute_extensions_as_bitsets()?;
        let mut preferred_solver = EnumerationSolver::new_for_preferred_semantics(self.af);
        preferred_solver.set_budget(self.budget);
        let preferred = preferred_solver.compute_extensions_as_bitsets()?;
        let preferred_labelings = preferred
            .iter()
            .map(|set| self.labeling_parts_of(set))
            .collect::<Vec<(Vec<bool>, Vec<bool>)>>();
        let candidates = admissible
            .iter()
            .map(|set| self.labeling_parts_of(set))
            .filter(|(in_part, out_part)| {
                preferred_labelings.iter().all(|(pref_in, pref_out)| {
                    is_subset(in_part, pref_in) && is_subset(out_part, pref_out)
                })
            })
            .collect::<Vec<(Vec<bool>, Vec<bool>)>>();
        let mut maximal = candidates.iter().filter(|(in_a, out_a)| {
            !candidates.iter().any(|(in_b, out_b)| {
                (in_a != in_b || out_a != out_b)
                    && is_subset(in_a, in_b)
                    && is_subset(out_a, out_b)
            })
        });
        let ideal = match (maximal.next(), maximal.next()) {
            (Some(ext), None) => ext,
            _ => panic!("no unique ideal extension found"),
        };
        Ok(ideal
            .0
            .iter()
            .enumerate()
            .filter(|(_, b)| **b)
            .map(|(id, _)| self.af.argument_set().get_argument_by_id(id))
            .collect())
    }

    fn labeling_parts_of(&self, set: &[bool]) -> (Vec<bool>, Vec<bool>) {
        let args = set
            .iter()
            .enumerate()
            .filter(|(_, b)| **b)
            .map(|(id, _)| self.af.argument_set().get_argument_by_id(id))
            .collect::<Vec<&Argument<T>>>();
        let labeling = Labeling::new_from_extension(self.af, &args);
        (
            labeling.bitset_of(LabelingValue::In),
            labeling.bitset_of(LabelingValue::Out),
        )
    }
}

fn is_subset(a: &[bool], b: &[bool]) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| !*x || *y)
}

impl<T> SingleExtensionComputer<T> for IdealSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_one_extension(&mut self) -> Result<Option<Vec<&Argument<T>>>> {
        Ok(Some(self.compute_ideal()?))
    }
}

impl<T> ExtensionSetComputer<T> for IdealSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_extensions(&mut self) -> Result<Vec<Vec<&Argument<T>>>> {
        Ok(vec![self.compute_ideal()?])
    }
}

impl<T> CredulousAcceptanceComputer<T> for IdealSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_credulously_accepted(&mut self, arg: &Argument<T>) -> Result<bool> {
        Ok(self.compute_ideal()?.contains(&arg))
    }

    fn is_credulously_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> Result<(bool, Option<Vec<&Argument<T>>>)> {
        let ext = self.compute_ideal()?;
        if ext.contains(&arg) {
            Ok((true, Some(ext)))
        } else {
            Ok((false, None))
        }
    }
}

impl<T> SkepticalAcceptanceComputer<T> for IdealSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_skeptically_accepted(&mut self, arg: &Argument<T>) -> Result<bool> {
        Ok(self.compute_ideal()?.contains(&arg))
    }

    fn is_skeptically_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> Result<(bool, Option<Vec<&Argument<T>>>)> {
        let ext = self.compute_ideal()?;
        if ext.contains(&arg) {
            Ok((true, None))
        } else {
            Ok((false, Some(ext)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{AspartixReader, InstanceReader};

    fn read_af(instance: &str) -> AAFramework<String> {
        AspartixReader::default().read(&mut instance.as_bytes()).unwrap()
    }

    #[test]
    fn test_compute_ideal_ext_is_grounded() {
        let af = read_af(
            "arg(a0).\narg(a1).\narg(a2).\natt(a0,a1).\natt(a0,a2).\natt(a1,a0).\natt(a1,a2).\n",
        );
        let mut solver = IdealSemanticsSolver::new(&af);
        assert!(solver.compute_one_extension().unwrap().unwrap().is_empty())
    }

    #[test]
    fn test_compute_ideal_ext_is_single_preferred() {
        let af = read_af("arg(a0).\narg(a1).\natt(a0,a1).\natt(a1,a0).\natt(a1,a1).\n");
        let mut solver = IdealSemanticsSolver::new(&af);
        assert_eq!(
            vec!["a0"],
            solver
                .compute_one_extension()
                .unwrap()
                .unwrap()
                .iter()
                .map(|arg| arg.label().to_string())
                .collect::<Vec<String>>()
        )
    }

    #[test]
    fn test_compute_ideal_ext_is_not_grounded() {
        let af = read_af(
            "arg(a0).\narg(a1).\narg(a2).\narg(a3).\natt(a0,a1).\natt(a0,a2).\natt(a1,a0).\natt(a1,a2).\natt(a2,a3).\natt(a3,a2).\n",
        );
        let mut solver = IdealSemanticsSolver::new(&af);
        assert_eq!(
            vec!["a3"],
            solver
                .compute_one_extension()
                .unwrap()
                .unwrap()
                .iter()
                .map(|arg| arg.label().to_string())
                .collect::<Vec<String>>()
        )
    }

    #[test]
    fn test_ideal_acceptance() {
        let af = read_af(
            "arg(a0).\narg(a1).\narg(a2).\narg(a3).\natt(a0,a1).\natt(a0,a2).\natt(a1,a0).\natt(a1,a2).\natt(a2,a3).\natt(a3,a2).\n",
        );
        let mut solver = IdealSemanticsSolver::new(&af);
        let arg = |l: &str| af.argument_set().get_argument(&l.to_string()).unwrap();
        assert!(!solver.is_credulously_accepted(arg("a0")).unwrap());
        assert!(!solver.is_credulously_accepted(arg("a1")).unwrap());
        assert!(!solver.is_credulously_accepted(arg("a2")).unwrap());
        assert!(solver.is_credulously_accepted(arg("a3")).unwrap());
        assert!(!solver.is_skeptically_accepted(arg("a0")).unwrap());
        assert!(solver.is_skeptically_accepted(arg("a3")).unwrap());
    }

    #[test]
    fn test_ideal_acceptance_in_all_preferred_but_not_in_ideal() {
        let af = read_af(
            "arg(a0).\narg(a1).\narg(a2).\narg(a3).\natt(a0,a1).\natt(a0,a2).\natt(a1,a0).\natt(a1,a2).\natt(a2,a3).\n",
        );
        let mut solver = IdealSemanticsSolver::new(&af);
        let arg = |l: &str| af.argument_set().get_argument(&l.to_string()).unwrap();
        assert!(!solver.is_credulously_accepted(arg("a0")).unwrap());
        assert!(!solver.is_credulously_accepted(arg("a1")).unwrap());
        assert!(!solver.is_credulously_accepted(arg("a2")).unwrap());
        assert!(!solver.is_credulously_accepted(arg("a3")).unwrap());
    }

    #[test]
    fn test_with_certificate() {
        let af = read_af(
            "arg(a0).\narg(a1).\narg(a2).\narg(a3).\narg(a4).\natt(a0,a1).\natt(a0,a2).\natt(a1,a0).\natt(a1,a2).\natt(a2,a3).\natt(a3,a2).\n",
        );
        let arg = |l: &str| af.argument_set().get_argument(&l.to_string()).unwrap();
        let mut solver = IdealSemanticsSolver::new(&af);
        assert_eq!(
            (false, None),
            solver
                .is_credulously_accepted_with_certificate(arg("a0"))
                .unwrap()
        );
        assert_eq!(
            (true, Some(vec![arg("a3"), arg("a4")])),
            solver
                .is_credulously_accepted_with_certificate(arg("a3"))
                .unwrap()
        );
        assert_eq!(
            (false, Some(vec![arg("a3"), arg("a4")])),
            solver
                .is_skeptically_accepted_with_certificate(arg("a0"))
                .unwrap()
        );
        assert_eq!(
            (true, None),
            solver
                .is_skeptically_accepted_with_certificate(arg("a3"))
                .unwrap()
        );
    }

    #[test]
    fn test_budget_exhaustion() {
        let af = read_af("arg(a0).\narg(a1).\narg(a2).\narg(a3).\n");
        let mut solver = IdealSemanticsSolver::new(&af);
        solver.set_budget(Some(2));
        assert!(solver.compute_one_extension().is_err());
    }
}
