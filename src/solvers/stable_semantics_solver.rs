use super::specs::{
    CredulousAcceptanceComputer, SingleExtensionComputer, SkepticalAcceptanceComputer,
};
use crate::aa::{AAFramework, Argument, LabelType};
use crate::encodings::{ConstraintsEncoder, StableLabelingEncoder};
use crate::sat::{self, SatSolverFactoryFn};
use anyhow::Result;

/// A SAT-based solver for the stable semantics.
///
/// Each problem is solved by a single call to the underlying SAT solver.
/// Acceptance queries use the literal stating the argument is accepted as an
/// assumption, asserted positively for credulous acceptance and negatively for
/// skeptical acceptance.
///
/// When a framework admits no stable extension, every argument is skeptically
/// accepted and no argument is credulously accepted.
pub struct StableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    solver_factory: Box<SatSolverFactoryFn>,
    constraints_encoder: StableLabelingEncoder,
}

impl<'a, T> StableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new SAT based solver for the stable semantics.
    ///
    /// The underlying SAT solver is one returned by [default_solver](crate::sat::default_solver).
    ///
    /// # Example
    ///
    /// ```
    /// # use rhetor::aa::{AAFramework, LabelType};
    /// # use rhetor::solvers::{SingleExtensionComputer, StableSemanticsSolver};
    /// fn search_one_extension<T>(af: &AAFramework<T>) where T: LabelType {
    ///     let mut solver = StableSemanticsSolver::new(af);
    ///     match solver.compute_one_extension().unwrap() {
    ///         Some(ext) => println!("found a stable extension: {:?}", ext),
    ///         None => println!("the framework has no stable extension"),
    ///     }
    /// }
    /// # search_one_extension::<usize>(&AAFramework::default());
    /// ```
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self::new_with_sat_solver_factory(af, Box::new(sat::default_solver))
    }

    /// Builds a new SAT based solver for the stable semantics.
    ///
    /// The SAT solver to use is given through the solver factory.
    ///
    /// # Example
    ///
    /// ```
    /// # use rhetor::aa::{AAFramework, LabelType};
    /// # use rhetor::sat::CadicalSolver;
    /// # use rhetor::solvers::{SingleExtensionComputer, StableSemanticsSolver};
    /// fn search_one_extension<T>(af: &AAFramework<T>) where T: LabelType {
    ///     let mut solver = StableSemanticsSolver::new_with_sat_solver_factory(
    ///         af,
    ///         Box::new(|| Box::new(CadicalSolver::default())),
    ///     );
    ///     match solver.compute_one_extension().unwrap() {
    ///         Some(ext) => println!("found a stable extension: {:?}", ext),
    ///         None => println!("the framework has no stable extension"),
    ///     }
    /// }
    /// # search_one_extension::<usize>(&AAFramework::default());
    /// ```
    pub fn new_with_sat_solver_factory(
        af: &'a AAFramework<T>,
        solver_factory: Box<SatSolverFactoryFn>,
    ) -> Self {
        Self {
            af,
            solver_factory,
            constraints_encoder: StableLabelingEncoder::default(),
        }
    }
}

impl<T> SingleExtensionComputer<T> for StableSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_one_extension(&mut self) -> Result<Option<Vec<&Argument<T>>>> {
        let mut solver = (self.solver_factory)();
        self.constraints_encoder
            .encode_constraints(self.af, solver.as_mut());
        Ok(solver.solve().unwrap_model().map(|assignment| {
            self.constraints_encoder
                .assignment_to_extension(&assignment, self.af)
        }))
    }
}

impl<T> CredulousAcceptanceComputer<T> for StableSemanticsSolver<'_, T>
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

impl<T> SkepticalAcceptanceComputer<T> for StableSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_skeptically_accepted(&mut self, arg: &Argument<T>) -> Result<bool> {
        Ok(self.is_skeptically_accepted_with_certificate(arg)?.0)
    }

    fn is_skeptically_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> Result<(bool, Option<Vec<&Argument<T>>>)> {
        let mut solver = (self.solver_factory)();
        self.constraints_encoder
            .encode_constraints(self.af, solver.as_mut());
        let arg_in = self.constraints_encoder.arg_to_lit(arg);
        match solver
            .solve_under_assumptions(&[arg_in.negate()])
            .unwrap_model()
        {
            Some(assignment) => Ok((
                false,
                Some(
                    self.constraints_encoder
                        .assignment_to_extension(&assignment, self.af),
                ),
            )),
            None => Ok((true, None)),
        }
    }
}
