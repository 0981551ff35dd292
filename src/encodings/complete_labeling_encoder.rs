use super::ConstraintsEncoder;
use crate::{
    aa::{AAFramework, Argument, LabelType},
    clause,
    sat::{Assignment, Literal, SatSolver},
};

/// An encoder of the complete labelings of an AF.
///
/// Each argument is given three variables stating it is labeled in, out or
/// undecided. An assignment of the encoding is in bijection with a complete
/// labeling; the extension associated with an assignment is the set of
/// arguments labeled in.
#[derive(Default)]
pub struct CompleteLabelingEncoder;

impl CompleteLabelingEncoder {
    pub(crate) fn arg_id_to_in_var(id: usize) -> usize {
        3 * id + 1
    }

    pub(crate) fn arg_id_to_out_var(id: usize) -> usize {
        3 * id + 2
    }

    pub(crate) fn arg_id_to_undec_var(id: usize) -> usize {
        3 * id + 3
    }

    fn encode_labeling_partition_for_arg(solver: &mut dyn SatSolver, arg_id: usize) {
        let in_var = Self::arg_id_to_in_var(arg_id) as isize;
        let out_var = Self::arg_id_to_out_var(arg_id) as isize;
        let undec_var = Self::arg_id_to_undec_var(arg_id) as isize;
        solver.add_clause(clause![in_var, out_var, undec_var]);
        solver.add_clause(clause![-in_var, -out_var]);
        solver.add_clause(clause![-in_var, -undec_var]);
        solver.add_clause(clause![-out_var, -undec_var]);
    }

    fn encode_attack_constraints_for_arg<T>(
        af: &AAFramework<T>,
        solver: &mut dyn SatSolver,
        arg: &Argument<T>,
    ) where
        T: LabelType,
    {
        let attacked_id = arg.id();
        let in_var = Self::arg_id_to_in_var(attacked_id) as isize;
        let out_var = Self::arg_id_to_out_var(attacked_id) as isize;
        let undec_var = Self::arg_id_to_undec_var(attacked_id) as isize;
        let attacker_ids = af
            .iter_attacks_to(arg)
            .map(|att| att.attacker().id())
            .collect::<Vec<usize>>();
        if attacker_ids.is_empty() {
            solver.add_clause(clause![in_var]);
            return;
        }
        let mut out_implicant = Vec::with_capacity(attacker_ids.len() + 1);
        out_implicant.push(Literal::from(-out_var));
        let mut in_implied = Vec::with_capacity(attacker_ids.len() + 1);
        in_implied.push(Literal::from(in_var));
        let mut undec_implicant = Vec::with_capacity(attacker_ids.len() + 1);
        undec_implicant.push(Literal::from(-undec_var));
        for attacker_id in attacker_ids {
            let attacker_in_var = Self::arg_id_to_in_var(attacker_id) as isize;
            let attacker_out_var = Self::arg_id_to_out_var(attacker_id) as isize;
            let attacker_undec_var = Self::arg_id_to_undec_var(attacker_id) as isize;
            solver.add_clause(clause![-attacker_in_var, out_var]);
            solver.add_clause(clause![-in_var, attacker_out_var]);
            out_implicant.push(Literal::from(attacker_in_var));
            in_implied.push(Literal::from(-attacker_out_var));
            undec_implicant.push(Literal::from(attacker_undec_var));
        }
        solver.add_clause(out_implicant);
        solver.add_clause(in_implied);
        solver.add_clause(undec_implicant);
    }
}

impl<T> ConstraintsEncoder<T> for CompleteLabelingEncoder
where
    T: LabelType,
{
    fn encode_constraints(&self, af: &AAFramework<T>, solver: &mut dyn SatSolver) {
        af.argument_set().iter().for_each(|arg| {
            Self::encode_labeling_partition_for_arg(solver, arg.id());
            Self::encode_attack_constraints_for_arg(af, solver, arg);
        });
        solver.reserve(3 * af.n_arguments());
    }

    fn assignment_to_extension<'a>(
        &self,
        assignment: &Assignment,
        af: &'a AAFramework<T>,
    ) -> Vec<&'a Argument<T>> {
        (0..af.n_arguments())
            .filter(|id| assignment.value_of(Self::arg_id_to_in_var(*id)) == Some(true))
            .map(|id| af.argument_set().get_argument_by_id(id))
            .collect()
    }

    fn arg_to_lit(&self, arg: &Argument<T>) -> Literal {
        Literal::from(Self::arg_id_to_in_var(arg.id()) as isize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;
    use crate::encodings::test_utils::enumerate_encoded_extensions;

    #[test]
    fn test_unattacked_arg_is_in() {
        let args = ArgumentSet::new_with_labels(&["a", "b"]);
        let mut af = AAFramework::new_with_argument_set(args);
        af.new_attack(&"a", &"b").unwrap();
        let extensions = enumerate_encoded_extensions(&CompleteLabelingEncoder, &af);
        assert_eq!(vec![vec!["a"]], extensions);
    }

    #[test]
    fn test_two_cycle_complete_labelings() {
        let args = ArgumentSet::new_with_labels(&["a", "b"]);
        let mut af = AAFramework::new_with_argument_set(args);
        af.new_attack(&"a", &"b").unwrap();
        af.new_attack(&"b", &"a").unwrap();
        let extensions = enumerate_encoded_extensions(&CompleteLabelingEncoder, &af);
        assert_eq!(
            vec![vec![] as Vec<&str>, vec!["a"], vec!["b"]],
            extensions
        );
    }

    #[test]
    fn test_three_cycle_single_complete_labeling() {
        let args = ArgumentSet::new_with_labels(&["a", "b", "c"]);
        let mut af = AAFramework::new_with_argument_set(args);
        af.new_attack(&"a", &"b").unwrap();
        af.new_attack(&"b", &"c").unwrap();
        af.new_attack(&"c", &"a").unwrap();
        let extensions = enumerate_encoded_extensions(&CompleteLabelingEncoder, &af);
        assert_eq!(vec![vec![] as Vec<&str>], extensions);
    }

    #[test]
    fn test_chain_complete_labelings() {
        let args = ArgumentSet::new_with_labels(&["a", "b", "c"]);
        let mut af = AAFramework::new_with_argument_set(args);
        af.new_attack(&"a", &"b").unwrap();
        af.new_attack(&"b", &"c").unwrap();
        let extensions = enumerate_encoded_extensions(&CompleteLabelingEncoder, &af);
        assert_eq!(vec![vec!["a", "c"]], extensions);
    }
}
