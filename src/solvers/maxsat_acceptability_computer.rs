use crate::aa::{AAFramework, Argument, LabelType};
use crate::encodings::{CompleteLabelingEncoder, ConstraintsEncoder, StableLabelingEncoder};
use crate::sat::{MaxSatSolverFactoryFn, SolvingResult};
use anyhow::Result;

/// A computer for the set of credulously accepted arguments relying on a
/// MaxSAT oracle.
///
/// At each iteration, a fresh MaxSAT instance is built from the labeling
/// encoding and a unit soft clause of weight 1 per not-yet-accepted argument,
/// stating it is labeled in.
/// A maximum weight witness marks as accepted all the arguments it labels in.
/// The process stops when no argument remains, when the oracle reports the
/// hard clauses admit no model, or when an iteration accepts no new argument.
///
/// Stopping on an unproductive iteration bounds the number of oracle calls but
/// may under-approximate the set of acceptable arguments.
pub struct MaxSatAcceptabilityComputer<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    solver_factory: Box<MaxSatSolverFactoryFn>,
    constraints_encoder: Box<dyn ConstraintsEncoder<T>>,
}

impl<'a, T> MaxSatAcceptabilityComputer<'a, T>
where
    T: LabelType,
{
    /// Builds a computer for the arguments credulously accepted under the
    /// complete semantics.
    pub fn new_for_complete_semantics(
        af: &'a AAFramework<T>,
        solver_factory: Box<MaxSatSolverFactoryFn>,
    ) -> Self {
        Self::new_with_constraints_encoder(af, solver_factory, Box::new(CompleteLabelingEncoder))
    }

    /// Builds a computer for the arguments credulously accepted under the
    /// stable semantics.
    pub fn new_for_stable_semantics(
        af: &'a AAFramework<T>,
        solver_factory: Box<MaxSatSolverFactoryFn>,
    ) -> Self {
        Self::new_with_constraints_encoder(
            af,
            solver_factory,
            Box::new(StableLabelingEncoder::default()),
        )
    }

    /// Builds a computer given the MaxSAT solver factory and the labeling encoder to use.
    pub fn new_with_constraints_encoder(
        af: &'a AAFramework<T>,
        solver_factory: Box<MaxSatSolverFactoryFn>,
        constraints_encoder: Box<dyn ConstraintsEncoder<T>>,
    ) -> Self {
        Self {
            af,
            solver_factory,
            constraints_encoder,
        }
    }

    /// Computes a subset of the credulously accepted arguments.
    ///
    /// The arguments are returned in the canonical argument order of the framework.
    pub fn compute_acceptable_arguments(&mut self) -> Result<Vec<&'a Argument<T>>> {
        let mut accepted = vec![false; self.af.n_arguments()];
        let mut remaining = self
            .af
            .argument_set()
            .iter()
            .map(|arg| arg.id())
            .collect::<Vec<usize>>();
        while !remaining.is_empty() {
            let mut solver = (self.solver_factory)();
            self.constraints_encoder
                .encode_constraints(self.af, solver.as_sat_solver_mut());
            for id in &remaining {
                let arg = self.af.argument_set().get_argument_by_id(*id);
                solver.add_soft_clause(vec![self.constraints_encoder.arg_to_lit(arg)], 1);
            }
            match solver.solve() {
                SolvingResult::Satisfiable(assignment) => {
                    let n_before = remaining.len();
                    remaining.retain(|id| {
                        let arg = self.af.argument_set().get_argument_by_id(*id);
                        let lit = self.constraints_encoder.arg_to_lit(arg);
                        if assignment.value_of(lit.var()) == Some(true) {
                            accepted[*id] = true;
                            false
                        } else {
                            true
                        }
                    });
                    if remaining.len() == n_before {
                        break;
                    }
                }
                SolvingResult::Unsatisfiable => break,
                SolvingResult::Unknown => {
                    panic!(r#"cannot compute acceptable arguments when the oracle returned "Unknown""#)
                }
            }
        }
        Ok(accepted
            .iter()
            .enumerate()
            .filter(|(_, b)| **b)
            .map(|(id, _)| self.af.argument_set().get_argument_by_id(id))
            .collect())
    }
}
