use super::{complete_labeling_encoder::CompleteLabelingEncoder, ConstraintsEncoder};
use crate::{
    aa::{AAFramework, Argument, LabelType},
    clause,
    sat::{Assignment, Literal, SatSolver},
};

/// An encoder of the stable labelings of an AF.
///
/// A stable labeling is a complete labeling with no undecided argument.
/// This encoder adds to the complete labeling encoding a unit clause
/// forbidding the undecided value for each argument.
#[derive(Default)]
pub struct StableLabelingEncoder {
    complete_encoder: CompleteLabelingEncoder,
}

impl<T> ConstraintsEncoder<T> for StableLabelingEncoder
where
    T: LabelType,
{
    fn encode_constraints(&self, af: &AAFramework<T>, solver: &mut dyn SatSolver) {
        self.complete_encoder.encode_constraints(af, solver);
        (0..af.n_arguments()).for_each(|id| {
            solver.add_clause(clause![
                -(CompleteLabelingEncoder::arg_id_to_undec_var(id) as isize)
            ]);
        });
    }

    fn assignment_to_extension<'a>(
        &self,
        assignment: &Assignment,
        af: &'a AAFramework<T>,
    ) -> Vec<&'a Argument<T>> {
        self.complete_encoder.assignment_to_extension(assignment, af)
    }

    fn arg_to_lit(&self, arg: &Argument<T>) -> Literal {
        self.complete_encoder.arg_to_lit(arg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;
    use crate::encodings::test_utils::enumerate_encoded_extensions;

    #[test]
    fn test_chain_stable_labelings() {
        let args = ArgumentSet::new_with_labels(&["a", "b", "c"]);
        let mut af = AAFramework::new_with_argument_set(args);
        af.new_attack(&"a", &"b").unwrap();
        af.new_attack(&"b", &"c").unwrap();
        let extensions = enumerate_encoded_extensions(&StableLabelingEncoder::default(), &af);
        assert_eq!(vec![vec!["a", "c"]], extensions);
    }

    #[test]
    fn test_two_cycle_stable_labelings() {
        let args = ArgumentSet::new_with_labels(&["a", "b"]);
        let mut af = AAFramework::new_with_argument_set(args);
        af.new_attack(&"a", &"b").unwrap();
        af.new_attack(&"b", &"a").unwrap();
        let extensions = enumerate_encoded_extensions(&StableLabelingEncoder::default(), &af);
        assert_eq!(vec![vec!["a"], vec!["b"]], extensions);
    }

    #[test]
    fn test_three_cycle_has_no_stable_labeling() {
        let args = ArgumentSet::new_with_labels(&["a", "b", "c"]);
        let mut af = AAFramework::new_with_argument_set(args);
        af.new_attack(&"a", &"b").unwrap();
        af.new_attack(&"b", &"c").unwrap();
        af.new_attack(&"c", &"a").unwrap();
        let extensions = enumerate_encoded_extensions(&StableLabelingEncoder::default(), &af);
        assert!(extensions.is_empty());
    }
}
