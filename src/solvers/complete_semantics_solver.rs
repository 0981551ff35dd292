use super::specs::{CredulousAcceptanceComputer, SkepticalAcceptanceComputer};
use crate::aa::{AAFramework, Argument, LabelType};
use crate::encodings::{CompleteLabelingEncoder, ConstraintsEncoder};
use crate::sat::{self, SatSolverFactoryFn};
use anyhow::Result;

/// A SAT-based solver for the complete semantics.
///
/// The minimal complete extension is the grounded extension.
/// Thus, this solver does not provide a function to compute an extension or to
/// check the skeptical acceptance of an argument through a SAT call, as both
/// resume to the grounded extension which a
/// [GroundedSemanticsSolver](super::GroundedSemanticsSolver) computes in
/// polynomial time; skeptical acceptance is answered here by a membership test
/// in the grounded extension.
///
/// Checking the credulous acceptance of an argument relies on a single call to
/// a SAT solver, with the literal stating the argument is accepted used as an
/// assumption.
/// The certificate provided in case an argument is credulously accepted is a
/// complete extension containing the argument.
pub struct CompleteSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    solver_factory: Box<SatSolverFactoryFn>,
    constraints_encoder: CompleteLabelingEncoder,
}

impl<'a, T> CompleteSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new SAT based solver for the complete semantics.
    ///
    /// The underlying SAT solver is one returned by [default_solver](crate::sat::default_solver).
    ///
    /// # Example
    ///
    /// ```
    /// # use rhetor::aa::{AAFramework, Argument, LabelType};
    /// # use rhetor::solvers::{CredulousAcceptanceComputer, CompleteSemanticsSolver};
    /// fn check_credulous_acceptance<T>(af: &AAFramework<T>, arg: &Argument<T>) where T: LabelType {
    ///     let mut solver = CompleteSemanticsSolver::new(af);
    ///     if solver.is_credulously_accepted(arg).unwrap() {
    ///         println!("there exists complete extension(s) with {}", arg)
    ///     } else {
    ///         println!("there is no complete extension with {}", arg)
    ///     }
    /// }
    /// ```
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self::new_with_sat_solver_factory(af, Box::new(sat::default_solver))
    }

    /// Builds a new SAT based solver for the complete semantics.
    ///
    /// The SAT solver to use is given through the solver factory.
    ///
    /// # Example
    ///
    /// ```
    /// # use rhetor::aa::{AAFramework, Argument, LabelType};
    /// # use rhetor::sat::CadicalSolver;
    /// # use rhetor::solvers::{CredulousAcceptanceComputer, CompleteSemanticsSolver};
    /// fn check_credulous_acceptance<T>(af: &AAFramework<T>, arg: &Argument<T>) where T: LabelType {
    ///     let mut solver = CompleteSemanticsSolver::new_with_sat_solver_factory(
    ///         af,
    ///         Box::new(|| Box::new(CadicalSolver::default())),
    ///     );
    ///     if solver.is_credulously_accepted(arg).unwrap() {
    ///         println!("there exists complete extension(s) with {}", arg)
    ///     } else {
    ///         println!("there is no complete extension with {}", arg)
    ///     }
    /// }
    /// ```
    pub fn new_with_sat_solver_factory(
        af: &'a AAFramework<T>,
        solver_factory: Box<SatSolverFactoryFn>,
    ) -> Self {
        Self {
            af,
            solver_factory,
            constraints_encoder: CompleteLabelingEncoder,
        }
    }
}

impl<T> CredulousAcceptanceComputer<T> for CompleteSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_credulously_accepted(&mut self, arg: &Argument<T>) -> Result<bool> {
        Ok(self.is_credulously_accepted_with_certificate(arg)?.0)
    }

    fn is_credulously_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> Result<(bool, Option<Vec<&Argument<T>>>)> {
        let mut solver = (self.solver_factory)();
        self.constraints_encoder
            .encode_constraints(self.af, solver.as_mut());
        let arg_in = self.constraints_encoder.arg_to_lit(arg);
        match solver.solve_under_assumptions(&[arg_in]).unwrap_model() {
            Some(assignment) => Ok((
                true,
                Some(
                    self.constraints_encoder
                        .assignment_to_extension(&assignment, self.af),
                ),
            )),
            None => Ok((false, None)),
        }
    }
}

impl<T> SkepticalAcceptanceComputer<T> for CompleteSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_skeptically_accepted(&mut self, arg: &Argument<T>) -> Result<bool> {
        Ok(self.af.grounded_extension().contains(&arg))
    }

    fn is_skeptically_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> Result<(bool, Option<Vec<&Argument<T>>>)> {
        let ext = self.af.grounded_extension();
        if ext.contains(&arg) {
            Ok((true, None))
        } else {
            Ok((false, Some(ext)))
        }
    }
}
