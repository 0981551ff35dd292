use super::specs::{
    CredulousAcceptanceComputer, ExtensionSetComputer, SingleExtensionComputer,
    SkepticalAcceptanceComputer,
};
use crate::aa::{AAFramework, Argument, LabelType};
use anyhow::Result;

/// A solver used to solve queries for the grounded semantics.
///
/// The (unique) grounded extension is the minimal complete extension.
/// It is computed as the least fixpoint of the characteristic function of the
/// framework, in time polynomial in its size.
///
/// Since the grounded extension is unique, credulous and skeptical acceptance
/// coincide and resume to a membership test.
/// When a certificate is provided, the certificate is the grounded extension itself.
pub struct GroundedSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> GroundedSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver dedicated to the grounded semantics.
    ///
    /// # Example
    ///
    /// ```
    /// # use rhetor::aa::{AAFramework, LabelType};
    /// # use rhetor::solvers::{SingleExtensionComputer, GroundedSemanticsSolver};
    /// fn search_one_extension<T>(af: &AAFramework<T>) where T: LabelType {
    ///     let mut solver = GroundedSemanticsSolver::new(af);
    ///     let ext = solver.compute_one_extension().unwrap().unwrap();
    ///     println!("found the grounded extension: {:?}", ext);
    /// }
    /// # search_one_extension::<usize>(&AAFramework::default());
    /// ```
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }

    fn membership(&self, arg: &Argument<T>) -> (bool, Vec<&Argument<T>>) {
        let ext = self.af.grounded_extension();
        (ext.contains(&arg), ext)
    }
}

impl<T> SingleExtensionComputer<T> for GroundedSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_one_extension(&mut self) -> Result<Option<Vec<&Argument<T>>>> {
        Ok(Some(self.af.grounded_extension()))
    }
}

impl<T> ExtensionSetComputer<T> for GroundedSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_extensions(&mut self) -> Result<Vec<Vec<&Argument<T>>>> {
        Ok(vec![self.af.grounded_extension()])
    }
}

impl<T> CredulousAcceptanceComputer<T> for GroundedSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_credulously_accepted(&mut self, arg: &Argument<T>) -> Result<bool> {
        Ok(self.membership(arg).0)
    }

    fn is_credulously_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> Result<(bool, Option<Vec<&Argument<T>>>)> {
        Ok(match self.membership(arg) {
            (true, ext) => (true, Some(ext)),
            (false, _) => (false, None),
        })
    }
}

impl<T> SkepticalAcceptanceComputer<T> for GroundedSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_skeptically_accepted(&mut self, arg: &Argument<T>) -> Result<bool> {
        Ok(self.membership(arg).0)
    }

    fn is_skeptically_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> Result<(bool, Option<Vec<&Argument<T>>>)> {
        Ok(match self.membership(arg) {
            (true, _) => (true, None),
            (false, ext) => (false, Some(ext)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{AspartixReader, InstanceReader};

    fn read_af(instance: &str) -> AAFramework<String> {
        AspartixReader::default()
            .read(&mut instance.as_bytes())
            .unwrap()
    }

    fn labels_of(ext: &[&Argument<String>]) -> Vec<String> {
        ext.iter().map(|a| a.label().clone()).collect()
    }

    #[test]
    fn test_grounded_solver() {
        let af = read_af("arg(a0).\narg(a1).\natt(a0,a1).\n");
        let a0 = af.argument_set().get_argument(&"a0".to_string()).unwrap();
        let a1 = af.argument_set().get_argument(&"a1".to_string()).unwrap();
        let mut solver = GroundedSemanticsSolver::new(&af);
        let ext = solver.compute_one_extension().unwrap().unwrap();
        assert_eq!(vec!["a0".to_string()], labels_of(&ext));
        assert!(solver.is_credulously_accepted(a0).unwrap());
        assert!(!solver.is_credulously_accepted(a1).unwrap());
        assert!(solver.is_skeptically_accepted(a0).unwrap());
        assert!(!solver.is_skeptically_accepted(a1).unwrap());
    }

    #[test]
    fn test_grounded_of_cycle_is_empty() {
        let af = read_af("arg(a0).\narg(a1).\natt(a0,a1).\natt(a1,a0).\n");
        let mut solver = GroundedSemanticsSolver::new(&af);
        assert!(solver.compute_one_extension().unwrap().unwrap().is_empty());
    }

    #[test]
    fn test_certificates() {
        let af = read_af("arg(a0).\narg(a1).\natt(a0,a1).\n");
        let a0 = af.argument_set().get_argument(&"a0".to_string()).unwrap();
        let a1 = af.argument_set().get_argument(&"a1".to_string()).unwrap();
        let mut solver = GroundedSemanticsSolver::new(&af);
        let (accepted, certificate) =
            solver.is_credulously_accepted_with_certificate(a0).unwrap();
        assert!(accepted);
        assert_eq!(vec!["a0".to_string()], labels_of(&certificate.unwrap()));
        let (accepted, certificate) =
            solver.is_skeptically_accepted_with_certificate(a1).unwrap();
        assert!(!accepted);
        assert_eq!(vec!["a0".to_string()], labels_of(&certificate.unwrap()));
        assert_eq!(
            (true, None),
            solver.is_skeptically_accepted_with_certificate(a0).unwrap()
        );
    }
}
