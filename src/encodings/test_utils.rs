use super::ConstraintsEncoder;
use crate::aa::{AAFramework, LabelType};
use crate::sat::{CadicalSolver, SatSolver, SolvingResult};

/// Enumerates the extensions described by an encoding, by iterated solving
/// with blocking clauses over the acceptance literals.
///
/// Extensions and the returned list are sorted so that tests can compare them
/// as sets.
pub(crate) fn enumerate_encoded_extensions<T>(
    encoder: &dyn ConstraintsEncoder<T>,
    af: &AAFramework<T>,
) -> Vec<Vec<T>>
where
    T: LabelType + Ord,
{
    let mut solver = CadicalSolver::default();
    encoder.encode_constraints(af, &mut solver);
    let mut result = Vec::new();
    loop {
        match solver.solve() {
            SolvingResult::Satisfiable(assignment) => {
                let extension = encoder.assignment_to_extension(&assignment, af);
                let blocking_clause = af
                    .argument_set()
                    .iter()
                    .map(|arg| {
                        let lit = encoder.arg_to_lit(arg);
                        if assignment.value_of(lit.var()) == Some(true) {
                            lit.negate()
                        } else {
                            lit
                        }
                    })
                    .collect();
                solver.add_clause(blocking_clause);
                let mut labels = extension
                    .iter()
                    .map(|a| a.label().clone())
                    .collect::<Vec<T>>();
                labels.sort_unstable();
                result.push(labels);
            }
            SolvingResult::Unsatisfiable => break,
            SolvingResult::Unknown => panic!("SAT solver returned an unknown status"),
        }
    }
    result.sort_unstable();
    result
}
