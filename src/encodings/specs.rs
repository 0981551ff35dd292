use crate::{
    aa::{AAFramework, Argument, LabelType},
    sat::{Assignment, Literal, SatSolver},
};

/// The trait for encoders from AF labelings to SAT.
///
/// An encoder translates the constraints defining the labelings of a semantics
/// into clauses added to a SAT solver, and translates assignments back into
/// extensions.
pub trait ConstraintsEncoder<T>
where
    T: LabelType,
{
    /// Encodes the constraints for the underlying semantics into the SAT solver.
    fn encode_constraints(&self, af: &AAFramework<T>, solver: &mut dyn SatSolver);

    /// Translates back a SAT assignment into the corresponding set of arguments.
    fn assignment_to_extension<'a>(
        &self,
        assignment: &Assignment,
        af: &'a AAFramework<T>,
    ) -> Vec<&'a Argument<T>>;

    /// Translates an argument into the literal stating it is accepted.
    fn arg_to_lit(&self, arg: &Argument<T>) -> Literal;
}
