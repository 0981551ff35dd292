use crate::aa::{AAFramework, Argument, LabelType};

/// A ranking mapping each argument of an AF to a numeric acceptability value.
///
/// Higher values denote more acceptable arguments.
/// The values are listed in the canonical argument order of the framework the
/// ranking was computed over.
pub struct NumericalRanking<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    values: Vec<f64>,
}

impl<'a, T> NumericalRanking<'a, T>
where
    T: LabelType,
{
    pub(crate) fn new(af: &'a AAFramework<T>, values: Vec<f64>) -> Self {
        debug_assert_eq!(af.n_arguments(), values.len());
        Self { af, values }
    }

    /// Returns the value associated with an argument.
    ///
    /// # Panics
    ///
    /// Panics if the argument does not belong to the framework the ranking was
    /// computed over.
    pub fn value_of(&self, arg: &Argument<T>) -> f64 {
        if self.af.argument_set().get_argument(arg.label()).is_err() {
            panic!("no such argument in the framework: {}", arg);
        }
        self.values[arg.id()]
    }

    /// Iterates over the arguments and their values, following the canonical
    /// argument order of the framework.
    pub fn iter(&self) -> impl Iterator<Item = (&'a Argument<T>, f64)> + '_ {
        self.af
            .argument_set()
            .iter()
            .map(move |arg| (arg, self.values[arg.id()]))
    }
}
