use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// The trait for argument labels.
///
/// Any type usable as a map key and printable may label arguments; this
/// trait alias groups the required bounds.
pub trait LabelType: Clone + Debug + Display + Eq + Hash {}
impl<T: Clone + Debug + Display + Eq + Hash> LabelType for T {}

/// A single argument, identified by a label and a set-unique id.
///
/// Arguments are only created through [`ArgumentSet`] objects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Argument<T: LabelType> {
    id: usize,
    label: T,
}

impl<T> Argument<T>
where
    T: LabelType,
{
    /// Returns the label of the argument.
    ///
    /// Example
    ///
    /// ```
    /// # use rhetor::aa::{Argument, LabelType};
    /// fn describe_argument<T: LabelType>(a: &Argument<T>) {
    ///     println!("argument with id {} has the label {}", a.id(), a.label());
    /// }
    /// ```
    pub fn label(&self) -> &T {
        &self.label
    }

    /// Returns the id of the argument.
    ///
    /// Ids are dense; a set of `n` arguments uses the ids `0` to `n-1`, in
    /// creation order.
    pub fn id(&self) -> usize {
        self.id
    }
}

impl<T> Display for Argument<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.label, f)
    }
}

/// The set of arguments of an AA framework.
#[derive(Default)]
pub struct ArgumentSet<T>
where
    T: LabelType,
{
    arguments: Vec<Argument<T>>,
    label_to_id: HashMap<T, usize>,
}

impl<T> ArgumentSet<T>
where
    T: LabelType,
{
    /// Builds an argument set from a slice of labels.
    ///
    /// Ids follow the slice order. A label given several times is registered
    /// on its first occurrence only.
    ///
    /// # Arguments
    ///
    /// * `labels` - the argument labels
    ///
    /// # Example
    ///
    /// ```
    /// # use rhetor::aa::ArgumentSet;
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
    /// assert_eq!(3, arguments.len());
    /// ```
    pub fn new_with_labels(labels: &[T]) -> Self {
        let mut set = ArgumentSet {
            arguments: Vec::with_capacity(labels.len()),
            label_to_id: HashMap::with_capacity(labels.len()),
        };
        for label in labels {
            set.register(label.clone());
        }
        set.arguments.shrink_to_fit();
        set.label_to_id.shrink_to_fit();
        set
    }

    fn register(&mut self, label: T) {
        if self.label_to_id.contains_key(&label) {
            return;
        }
        let id = self.arguments.len();
        self.label_to_id.insert(label.clone(), id);
        self.arguments.push(Argument { id, label });
    }

    /// Returns the number of arguments in the set.
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Returns `true` iff the set has no argument.
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Returns the id bound to an argument label, or an error if the label is
    /// unknown.
    ///
    /// # Arguments
    ///
    /// * `label` - the argument label
    ///
    /// # Example
    ///
    /// ```
    /// # use rhetor::aa::ArgumentSet;
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
    /// assert_eq!(0, arguments.get_argument_index(&"a").unwrap());
    /// assert_eq!(2, arguments.get_argument_index(&"c").unwrap());
    /// ```
    pub fn get_argument_index(&self, label: &T) -> Result<usize> {
        self.label_to_id
            .get(label)
            .copied()
            .ok_or_else(|| anyhow!("no such argument: {}", label))
    }

    /// Returns the argument bound to a label, or an error if the label is
    /// unknown.
    ///
    /// # Arguments
    ///
    /// * `label` - the argument label
    ///
    /// # Example
    ///
    /// ```
    /// # use rhetor::aa::ArgumentSet;
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
    /// assert!(arguments.get_argument(&"a").is_ok());
    /// assert!(arguments.get_argument(&"d").is_err());
    /// ```
    pub fn get_argument(&self, label: &T) -> Result<&Argument<T>> {
        self.get_argument_index(label).map(|i| &self.arguments[i])
    }

    /// Returns the argument with the given id.
    ///
    /// # Panics
    ///
    /// Panics if no argument has such id.
    pub fn get_argument_by_id(&self, id: usize) -> &Argument<T> {
        &self.arguments[id]
    }

    /// Iterates over the arguments by increasing id.
    ///
    /// This order is the canonical argument order of the set.
    ///
    /// # Example
    ///
    /// ```
    /// # use rhetor::aa::ArgumentSet;
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
    /// assert_eq!(3, arguments.iter().count());
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = &Argument<T>> + '_ {
        self.arguments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_labels() {
        let labels = ["a", "b", "c"];
        let args = ArgumentSet::new_with_labels(&labels);
        assert_eq!(3, args.len());
        assert!(!args.is_empty());
        for (i, a) in args.iter().enumerate() {
            assert_eq!(i, a.id());
            assert_eq!(labels[i], *a.label());
            assert_eq!(i, args.get_argument_index(a.label()).unwrap());
        }
    }

    #[test]
    fn test_new_with_empty_labels() {
        let args = ArgumentSet::new_with_labels(&[] as &[String]);
        assert_eq!(0, args.len());
        assert!(args.is_empty());
    }

    #[test]
    fn test_repeated_labels_register_once() {
        let args = ArgumentSet::new_with_labels(&["a", "b", "a"]);
        assert_eq!(2, args.len());
        assert_eq!(0, args.get_argument_index(&"a").unwrap());
        assert_eq!(1, args.get_argument_index(&"b").unwrap());
    }

    #[test]
    fn test_iter_in_canonical_order() {
        let labels = ["a", "b", "c"];
        let args = ArgumentSet::new_with_labels(&labels);
        let seen = args.iter().map(|a| *a.label()).collect::<Vec<&str>>();
        assert_eq!(labels.as_slice(), seen.as_slice());
    }

    #[test]
    fn test_get_argument() {
        let args = ArgumentSet::new_with_labels(&["a", "b", "c"]);
        assert_eq!("b", *args.get_argument(&"b").unwrap().label());
        assert!(args.get_argument(&"d").is_err());
        assert_eq!("c", *args.get_argument_by_id(2).label());
    }
}
