use super::{Argument, ArgumentSet, LabelType};
use anyhow::{anyhow, Context, Result};

/// An Abstract Argumentation framework as defined in Dung semantics.
///
/// A framework is built from an [`ArgumentSet`] and a set of attacks.
/// Once the attacks are registered, the framework is meant to be read-only:
/// solvers never mutate it, and derived frameworks (see [restriction](Self::restriction))
/// share no mutable state with their parent.
#[derive(Default)]
pub struct AAFramework<T>
where
    T: LabelType,
{
    arguments: ArgumentSet<T>,
    attacks: Vec<(usize, usize)>,
    attacks_from: Vec<Vec<usize>>,
    attacks_to: Vec<Vec<usize>>,
}

/// An attack, linking an attacker to the argument it attacks.
///
/// Attacks are built by [`AAFramework`] objects.
pub struct Attack<'a, T>
where
    T: LabelType,
{
    attacker: &'a Argument<T>,
    attacked: &'a Argument<T>,
}

impl<'a, T> Attack<'a, T>
where
    T: LabelType,
{
    /// Returns the attacker.
    ///
    /// Example
    ///
    /// ```
    /// # use rhetor::aa::{Attack, LabelType};
    /// fn describe_attack<T: LabelType>(attack: &Attack<T>) {
    ///     println!("{} attacks {}", attack.attacker(), attack.attacked());
    /// }
    /// ```
    pub fn attacker(&self) -> &'a Argument<T> {
        self.attacker
    }

    /// Returns the attacked argument.
    ///
    /// Example
    ///
    /// ```
    /// # use rhetor::aa::{Attack, LabelType};
    /// fn describe_attack<T: LabelType>(attack: &Attack<T>) {
    ///     println!("{} attacks {}", attack.attacker(), attack.attacked());
    /// }
    /// ```
    pub fn attacked(&self) -> &'a Argument<T> {
        self.attacked
    }
}

impl<T> AAFramework<T>
where
    T: LabelType,
{
    /// Builds a framework over the given argument set, with no attack yet.
    ///
    /// # Arguments
    ///
    /// * `arguments` - the set of arguments
    ///
    /// # Example
    ///
    /// ```
    /// # use rhetor::aa::{ArgumentSet, AAFramework};
    /// let af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b", "c"]));
    /// assert_eq!(3, af.argument_set().len());
    /// assert_eq!(0, af.iter_attacks().count());
    /// ```
    pub fn new_with_argument_set(arguments: ArgumentSet<T>) -> Self {
        let n = arguments.len();
        AAFramework {
            arguments,
            attacks: vec![],
            attacks_from: vec![Vec::new(); n],
            attacks_to: vec![Vec::new(); n],
        }
    }

    /// Registers an attack given the labels of its endpoints.
    ///
    /// An error is returned if one of the labels is unknown.
    /// No duplicate check is made; registering an attack twice stores it twice.
    ///
    /// # Arguments
    ///
    /// * `from` - the label of the attacker
    /// * `to` - the label of the attacked argument
    ///
    /// # Example
    ///
    /// ```
    /// # use rhetor::aa::{ArgumentSet, AAFramework};
    /// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]));
    /// af.new_attack(&"a", &"b").unwrap();
    /// assert_eq!(1, af.iter_attacks().count());
    /// ```
    pub fn new_attack(&mut self, from: &T, to: &T) -> Result<()> {
        let context = || format!("cannot add an attack from {:?} to {:?}", from, to);
        let attacker_id = self
            .arguments
            .get_argument_index(from)
            .with_context(context)?;
        let attacked_id = self
            .arguments
            .get_argument_index(to)
            .with_context(context)?;
        self.register_attack(attacker_id, attacked_id);
        Ok(())
    }

    /// Registers an attack given the ids of its endpoints.
    ///
    /// An error is returned if one of the ids is out of bounds.
    ///
    /// # Arguments
    ///
    /// * `from` - the id of the attacker
    /// * `to` - the id of the attacked argument
    ///
    /// # Example
    ///
    /// ```
    /// # use rhetor::aa::{ArgumentSet, AAFramework};
    /// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]));
    /// af.new_attack_by_ids(0, 1); // "a" attacks "b"
    /// assert_eq!(1, af.iter_attacks().count());
    /// ```
    pub fn new_attack_by_ids(&mut self, from: usize, to: usize) -> Result<()> {
        let n_arguments = self.arguments.len();
        if from >= n_arguments || to >= n_arguments {
            return Err(anyhow!(
                "cannot add an attack from identifiers {:?} to {:?}; max id is {}",
                from,
                to,
                n_arguments - 1
            ));
        }
        self.register_attack(from, to);
        Ok(())
    }

    fn register_attack(&mut self, attacker_id: usize, attacked_id: usize) {
        let attack_index = self.attacks.len();
        self.attacks.push((attacker_id, attacked_id));
        self.attacks_from[attacker_id].push(attack_index);
        self.attacks_to[attacked_id].push(attack_index);
    }

    /// Returns the argument set of the framework.
    pub fn argument_set(&self) -> &ArgumentSet<T> {
        &self.arguments
    }

    fn attack_at(&self, index: usize) -> Attack<'_, T> {
        let (attacker_id, attacked_id) = self.attacks[index];
        Attack {
            attacker: self.arguments.get_argument_by_id(attacker_id),
            attacked: self.arguments.get_argument_by_id(attacked_id),
        }
    }

    /// Iterates over the attacks of the framework.
    pub fn iter_attacks(&self) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        (0..self.attacks.len()).map(|i| self.attack_at(i))
    }

    /// Iterates over the attacks whose attacker is the given argument.
    pub fn iter_attacks_from(&self, arg: &Argument<T>) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.attacks_from[arg.id()]
            .iter()
            .map(|i| self.attack_at(*i))
    }

    /// Iterates over the attacks whose target is the given argument.
    pub fn iter_attacks_to(&self, arg: &Argument<T>) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.iter_attacks_to_id(arg.id())
    }

    /// Iterates over the attacks whose target is the argument with the given id.
    pub fn iter_attacks_to_id(
        &self,
        attacked_id: usize,
    ) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.attacks_to[attacked_id]
            .iter()
            .map(|i| self.attack_at(*i))
    }

    /// Returns `true` iff some member of the provided set attacks the given argument.
    ///
    /// The set is given as a slice of boolean values indexed by argument ids.
    pub(crate) fn is_attacked_by_set(&self, attacked_id: usize, set: &[bool]) -> bool {
        self.attacks_to[attacked_id]
            .iter()
            .any(|i| set[self.attacks[*i].0])
    }

    /// Builds the sub-framework induced by a subset of the arguments.
    ///
    /// The new framework contains the provided arguments (in the order in which
    /// they are given, dropping repetitions) and the attacks of this framework
    /// involving only provided arguments.
    /// The new framework is independent from this one.
    ///
    /// # Panics
    ///
    /// Panics if one of the provided arguments does not belong to this framework,
    /// as this is a programming error and not a user error.
    ///
    /// # Example
    ///
    /// ```
    /// # use rhetor::aa::{ArgumentSet, AAFramework};
    /// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b", "c"]));
    /// af.new_attack(&"a", &"b").unwrap();
    /// af.new_attack(&"b", &"c").unwrap();
    /// let args = af.argument_set();
    /// let restricted = af.restriction(&[args.get_argument(&"a").unwrap(), args.get_argument(&"b").unwrap()]);
    /// assert_eq!(2, restricted.n_arguments());
    /// assert_eq!(1, restricted.n_attacks());
    /// ```
    pub fn restriction(&self, args: &[&Argument<T>]) -> AAFramework<T> {
        let mut selected = vec![false; self.arguments.len()];
        let labels = args
            .iter()
            .map(|a| {
                if self.arguments.get_argument(a.label()).is_err() {
                    panic!("cannot restrict a framework to a foreign argument: {}", a);
                }
                selected[a.id()] = true;
                a.label().clone()
            })
            .collect::<Vec<T>>();
        let mut restricted =
            AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&labels));
        self.attacks
            .iter()
            .filter(|(a, b)| selected[*a] && selected[*b])
            .for_each(|(a, b)| {
                restricted
                    .new_attack(
                        self.arguments.get_argument_by_id(*a).label(),
                        self.arguments.get_argument_by_id(*b).label(),
                    )
                    .unwrap();
            });
        restricted
    }

    /// Computes the partition of the arguments into the strongly connected
    /// components of the attack graph.
    ///
    /// Each component is given as a vector of argument ids.
    pub fn strongly_connected_components(&self) -> Vec<Vec<usize>> {
        crate::utils::strongly_connected_components(self)
    }

    /// Computes the grounded extension of this framework.
    ///
    /// The grounded extension is the least fixpoint of the characteristic function of the framework.
    pub fn grounded_extension(&self) -> Vec<&Argument<T>> {
        crate::utils::grounded_extension(self)
    }

    /// Returns the number of arguments in this framework.
    pub fn n_arguments(&self) -> usize {
        self.argument_set().len()
    }

    /// Returns the number of attacks in this framework.
    pub fn n_attacks(&self) -> usize {
        self.attacks.len()
    }
}
