use super::{AAFramework, Argument, LabelType};

/// The value given to an argument by a [`Labeling`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LabelingValue {
    /// The argument is accepted.
    In,
    /// The argument is attacked by an accepted argument.
    Out,
    /// The argument is neither accepted nor attacked by an accepted argument.
    Undecided,
}

/// A labeling of the arguments of an AA framework.
///
/// A labeling maps each argument of a framework to exactly one of the three
/// [`LabelingValue`] values, partitioning the argument set.
pub struct Labeling<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    values: Vec<LabelingValue>,
}

impl<'a, T> Labeling<'a, T>
where
    T: LabelType,
{
    /// Builds the labeling associated with an extension of a framework.
    ///
    /// The arguments of the extension are labeled [`LabelingValue::In`],
    /// the arguments they attack are labeled [`LabelingValue::Out`] and the
    /// remaining ones are labeled [`LabelingValue::Undecided`].
    ///
    /// # Panics
    ///
    /// Panics if an argument of the extension does not belong to the framework.
    ///
    /// # Example
    ///
    /// ```
    /// # use rhetor::aa::{AAFramework, ArgumentSet, Labeling, LabelingValue};
    /// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b", "c"]));
    /// af.new_attack(&"a", &"b").unwrap();
    /// let a = af.argument_set().get_argument(&"a").unwrap();
    /// let labeling = Labeling::new_from_extension(&af, &[a]);
    /// assert_eq!(LabelingValue::In, labeling.value_of(a));
    /// assert_eq!(1, labeling.iter_out().count());
    /// assert_eq!(1, labeling.iter_undecided().count());
    /// ```
    pub fn new_from_extension(af: &'a AAFramework<T>, extension: &[&Argument<T>]) -> Self {
        let mut values = vec![LabelingValue::Undecided; af.n_arguments()];
        extension.iter().for_each(|a| {
            if af.argument_set().get_argument(a.label()).is_err() {
                panic!("no such argument in the framework: {}", a);
            }
            values[a.id()] = LabelingValue::In;
        });
        extension.iter().for_each(|a| {
            af.iter_attacks_from(a).for_each(|att| {
                values[att.attacked().id()] = LabelingValue::Out;
            })
        });
        Labeling { af, values }
    }

    /// Returns the value given to an argument by this labeling.
    ///
    /// # Panics
    ///
    /// Panics if the argument does not belong to the underlying framework.
    pub fn value_of(&self, arg: &Argument<T>) -> LabelingValue {
        self.values[arg.id()]
    }

    /// Provides an iterator to the arguments labeled [`LabelingValue::In`].
    pub fn iter_in(&self) -> impl Iterator<Item = &Argument<T>> + '_ {
        self.iter_with_value(LabelingValue::In)
    }

    /// Provides an iterator to the arguments labeled [`LabelingValue::Out`].
    pub fn iter_out(&self) -> impl Iterator<Item = &Argument<T>> + '_ {
        self.iter_with_value(LabelingValue::Out)
    }

    /// Provides an iterator to the arguments labeled [`LabelingValue::Undecided`].
    pub fn iter_undecided(&self) -> impl Iterator<Item = &Argument<T>> + '_ {
        self.iter_with_value(LabelingValue::Undecided)
    }

    fn iter_with_value(&self, value: LabelingValue) -> impl Iterator<Item = &Argument<T>> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter(move |(_, v)| **v == value)
            .map(|(id, _)| self.af.argument_set().get_argument_by_id(id))
    }

    /// Returns the arguments labeled with the provided value as a boolean vector indexed by argument ids.
    pub(crate) fn bitset_of(&self, value: LabelingValue) -> Vec<bool> {
        self.values.iter().map(|v| *v == value).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;

    fn chain_af() -> AAFramework<&'static str> {
        let args = ArgumentSet::new_with_labels(&["a", "b", "c"]);
        let mut af = AAFramework::new_with_argument_set(args);
        af.new_attack(&"a", &"b").unwrap();
        af.new_attack(&"b", &"c").unwrap();
        af
    }

    #[test]
    fn test_labeling_from_extension() {
        let af = chain_af();
        let a = af.argument_set().get_argument(&"a").unwrap();
        let b = af.argument_set().get_argument(&"b").unwrap();
        let c = af.argument_set().get_argument(&"c").unwrap();
        let labeling = Labeling::new_from_extension(&af, &[a, c]);
        assert_eq!(LabelingValue::In, labeling.value_of(a));
        assert_eq!(LabelingValue::Out, labeling.value_of(b));
        assert_eq!(LabelingValue::In, labeling.value_of(c));
    }

    #[test]
    fn test_labeling_partitions_the_arguments() {
        let af = chain_af();
        let a = af.argument_set().get_argument(&"a").unwrap();
        let labeling = Labeling::new_from_extension(&af, &[a]);
        let n = labeling.iter_in().count()
            + labeling.iter_out().count()
            + labeling.iter_undecided().count();
        assert_eq!(af.n_arguments(), n);
        assert_eq!(1, labeling.iter_in().count());
        assert_eq!(1, labeling.iter_out().count());
        assert_eq!(1, labeling.iter_undecided().count());
    }

    #[test]
    fn test_labeling_from_empty_extension() {
        let af = chain_af();
        let labeling = Labeling::new_from_extension(&af, &[]);
        assert_eq!(0, labeling.iter_in().count());
        assert_eq!(0, labeling.iter_out().count());
        assert_eq!(3, labeling.iter_undecided().count());
    }

    #[test]
    #[should_panic(expected = "no such argument")]
    fn test_labeling_foreign_argument() {
        let af = chain_af();
        let other = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["d"]));
        let d = other.argument_set().get_argument(&"d").unwrap();
        Labeling::new_from_extension(&af, &[d]);
    }
}
