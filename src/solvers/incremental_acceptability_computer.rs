use crate::aa::{AAFramework, Argument, LabelType};
use crate::encodings::{CompleteLabelingEncoder, ConstraintsEncoder, StableLabelingEncoder};
use crate::sat::{self, Literal, SatSolverFactoryFn};
use anyhow::Result;

/// A computer for the set of credulously accepted arguments relying on a
/// single incremental SAT solver.
///
/// The labeling encoding is loaded once in the solver.
/// Then, a clause requiring at least one not-yet-accepted argument to be
/// labeled in is added and a witness is asked for; each witness marks all the
/// arguments it labels in as accepted.
/// The process iterates until no argument remains or the solver reports the
/// requirement cannot be met anymore.
///
/// The witness clauses are guarded by selector literals so they can be
/// deactivated when the set of not-yet-accepted arguments shrinks.
pub struct IncrementalAcceptabilityComputer<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    solver_factory: Box<SatSolverFactoryFn>,
    constraints_encoder: Box<dyn ConstraintsEncoder<T>>,
}

impl<'a, T> IncrementalAcceptabilityComputer<'a, T>
where
    T: LabelType,
{
    /// Builds a computer for the arguments credulously accepted under the
    /// complete semantics.
    ///
    /// # Example
    ///
    /// ```
    /// # use rhetor::aa::{AAFramework, LabelType};
    /// # use rhetor::solvers::IncrementalAcceptabilityComputer;
    /// fn list_acceptable<T>(af: &AAFramework<T>) where T: LabelType {
    ///     let mut computer = IncrementalAcceptabilityComputer::new_for_complete_semantics(af);
    ///     for arg in computer.compute_acceptable_arguments().unwrap() {
    ///         println!("{} is credulously accepted", arg);
    ///     }
    /// }
    /// # list_acceptable::<usize>(&AAFramework::default());
    /// ```
    pub fn new_for_complete_semantics(af: &'a AAFramework<T>) -> Self {
        Self::new_with_sat_solver_factory_and_constraints_encoder(
            af,
            Box::new(sat::default_solver),
            Box::new(CompleteLabelingEncoder),
        )
    }

    /// Builds a computer for the arguments credulously accepted under the
    /// stable semantics.
    pub fn new_for_stable_semantics(af: &'a AAFramework<T>) -> Self {
        Self::new_with_sat_solver_factory_and_constraints_encoder(
            af,
            Box::new(sat::default_solver),
            Box::new(StableLabelingEncoder::default()),
        )
    }

    /// Builds a computer given the SAT solver factory and the labeling encoder to use.
    pub fn new_with_sat_solver_factory_and_constraints_encoder(
        af: &'a AAFramework<T>,
        solver_factory: Box<SatSolverFactoryFn>,
        constraints_encoder: Box<dyn ConstraintsEncoder<T>>,
    ) -> Self {
        Self {
            af,
            solver_factory,
            constraints_encoder,
        }
    }

    /// Computes the set of credulously accepted arguments.
    ///
    /// The arguments are returned in the canonical argument order of the framework.
    pub fn compute_acceptable_arguments(&mut self) -> Result<Vec<&'a Argument<T>>> {
        let mut solver = (self.solver_factory)();
        self.constraints_encoder
            .encode_constraints(self.af, solver.as_mut());
        let mut accepted = vec![false; self.af.n_arguments()];
        let mut remaining = self
            .af
            .argument_set()
            .iter()
            .map(|arg| (arg.id(), self.constraints_encoder.arg_to_lit(arg)))
            .collect::<Vec<(usize, Literal)>>();
        while !remaining.is_empty() {
            let selector = Literal::from(1 + solver.n_vars() as isize);
            let mut witness_clause = remaining
                .iter()
                .map(|(_, lit)| *lit)
                .collect::<Vec<Literal>>();
            witness_clause.push(selector.negate());
            solver.add_clause(witness_clause);
            match solver.solve_under_assumptions(&[selector]).unwrap_model() {
                Some(assignment) => remaining.retain(|(id, lit)| {
                    if assignment.value_of(lit.var()) == Some(true) {
                        accepted[*id] = true;
                        false
                    } else {
                        true
                    }
                }),
                None => break,
            }
            solver.add_clause(vec![selector.negate()]);
        }
        Ok(accepted
            .iter()
            .enumerate()
            .filter(|(_, b)| **b)
            .map(|(id, _)| self.af.argument_set().get_argument_by_id(id))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{AspartixReader, InstanceReader};

    fn read_af(instance: &str) -> AAFramework<String> {
        AspartixReader::default().read(&mut instance.as_bytes()).unwrap()
    }

    fn acceptable_labels(computer: &mut IncrementalAcceptabilityComputer<String>) -> Vec<String> {
        computer
            .compute_acceptable_arguments()
            .unwrap()
            .iter()
            .map(|arg| arg.label().to_string())
            .collect()
    }

    #[test]
    fn test_acceptable_args_in_chain() {
        let af = read_af("arg(a0).\narg(a1).\narg(a2).\natt(a0,a1).\natt(a1,a2).\n");
        let mut computer = IncrementalAcceptabilityComputer::new_for_complete_semantics(&af);
        assert_eq!(vec!["a0", "a2"], acceptable_labels(&mut computer));
    }

    #[test]
    fn test_acceptable_args_in_two_cycle() {
        let af = read_af("arg(a0).\narg(a1).\narg(a2).\natt(a0,a1).\natt(a1,a0).\natt(a1,a2).\n");
        let mut computer = IncrementalAcceptabilityComputer::new_for_complete_semantics(&af);
        assert_eq!(vec!["a0", "a1", "a2"], acceptable_labels(&mut computer));
    }

    #[test]
    fn test_no_acceptable_args_in_three_cycle() {
        let af = read_af("arg(a0).\narg(a1).\narg(a2).\natt(a0,a1).\natt(a1,a2).\natt(a2,a0).\n");
        let mut computer = IncrementalAcceptabilityComputer::new_for_complete_semantics(&af);
        assert!(acceptable_labels(&mut computer).is_empty());
    }

    #[test]
    fn test_acceptable_args_under_stable_semantics() {
        let af = read_af("arg(a0).\narg(a1).\natt(a0,a1).\natt(a1,a0).\n");
        let mut computer = IncrementalAcceptabilityComputer::new_for_stable_semantics(&af);
        assert_eq!(vec!["a0", "a1"], acceptable_labels(&mut computer));
    }

    #[test]
    fn test_no_acceptable_args_without_stable_extension() {
        let af = read_af("arg(a0).\narg(a1).\narg(a2).\natt(a0,a1).\natt(a1,a2).\natt(a2,a0).\n");
        let mut computer = IncrementalAcceptabilityComputer::new_for_stable_semantics(&af);
        assert!(acceptable_labels(&mut computer).is_empty());
    }

    #[test]
    fn test_acceptable_args_in_empty_af() {
        let af = read_af("");
        let mut computer = IncrementalAcceptabilityComputer::new_for_complete_semantics(&af);
        assert!(acceptable_labels(&mut computer).is_empty());
    }
}
