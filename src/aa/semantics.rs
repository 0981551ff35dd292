//! Pure predicates for the Dung acceptability semantics.
//!
//! These functions are the building blocks of the extension solvers.
//! They take a set of arguments from a single framework and tell if the set
//! satisfies a semantics requirement.

use super::{AAFramework, Argument, LabelType};

/// Returns `true` iff the provided set of arguments is conflict-free.
///
/// A set is conflict-free iff none of its members attacks another one (or itself).
///
/// # Panics
///
/// Panics if one of the arguments does not belong to the framework.
///
/// # Example
///
/// ```
/// # use rhetor::aa::{AAFramework, ArgumentSet, semantics};
/// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]));
/// af.new_attack(&"a", &"b").unwrap();
/// let a = af.argument_set().get_argument(&"a").unwrap();
/// let b = af.argument_set().get_argument(&"b").unwrap();
/// assert!(semantics::is_conflict_free(&af, &[a]));
/// assert!(!semantics::is_conflict_free(&af, &[a, b]));
/// ```
pub fn is_conflict_free<T>(af: &AAFramework<T>, args: &[&Argument<T>]) -> bool
where
    T: LabelType,
{
    is_conflict_free_bitset(af, &to_bitset(af, args))
}

pub(crate) fn is_conflict_free_bitset<T>(af: &AAFramework<T>, set: &[bool]) -> bool
where
    T: LabelType,
{
    !(0..set.len()).any(|id| set[id] && af.is_attacked_by_set(id, set))
}

/// Returns `true` iff the provided set of arguments defends the given argument.
///
/// A set defends an argument iff each attacker of this argument is attacked by a member of the set.
///
/// # Panics
///
/// Panics if one of the arguments does not belong to the framework.
pub fn is_defended_by<T>(af: &AAFramework<T>, args: &[&Argument<T>], arg: &Argument<T>) -> bool
where
    T: LabelType,
{
    is_defended_by_bitset(af, &to_bitset(af, args), arg.id())
}

pub(crate) fn is_defended_by_bitset<T>(af: &AAFramework<T>, set: &[bool], arg_id: usize) -> bool
where
    T: LabelType,
{
    af.iter_attacks_to_id(arg_id)
        .all(|att| af.is_attacked_by_set(att.attacker().id(), set))
}

/// Returns `true` iff the provided set of arguments is admissible.
///
/// A set is admissible iff it is conflict-free and defends each of its members.
///
/// # Panics
///
/// Panics if one of the arguments does not belong to the framework.
pub fn is_admissible<T>(af: &AAFramework<T>, args: &[&Argument<T>]) -> bool
where
    T: LabelType,
{
    is_admissible_bitset(af, &to_bitset(af, args))
}

pub(crate) fn is_admissible_bitset<T>(af: &AAFramework<T>, set: &[bool]) -> bool
where
    T: LabelType,
{
    is_conflict_free_bitset(af, set)
        && (0..set.len()).all(|id| !set[id] || is_defended_by_bitset(af, set, id))
}

/// Returns `true` iff the provided set of arguments is a complete extension.
///
/// A set is a complete extension iff it is admissible and contains every argument it defends.
///
/// # Panics
///
/// Panics if one of the arguments does not belong to the framework.
pub fn is_complete<T>(af: &AAFramework<T>, args: &[&Argument<T>]) -> bool
where
    T: LabelType,
{
    is_complete_bitset(af, &to_bitset(af, args))
}

pub(crate) fn is_complete_bitset<T>(af: &AAFramework<T>, set: &[bool]) -> bool
where
    T: LabelType,
{
    is_admissible_bitset(af, set)
        && (0..set.len()).all(|id| set[id] || !is_defended_by_bitset(af, set, id))
}

/// Returns `true` iff the provided set of arguments is a stable extension.
///
/// A set is a stable extension iff it is conflict-free and attacks every argument it does not contain.
///
/// # Panics
///
/// Panics if one of the arguments does not belong to the framework.
pub fn is_stable<T>(af: &AAFramework<T>, args: &[&Argument<T>]) -> bool
where
    T: LabelType,
{
    is_stable_bitset(af, &to_bitset(af, args))
}

pub(crate) fn is_stable_bitset<T>(af: &AAFramework<T>, set: &[bool]) -> bool
where
    T: LabelType,
{
    is_conflict_free_bitset(af, set)
        && (0..set.len()).all(|id| set[id] || af.is_attacked_by_set(id, set))
}

/// Computes the set of arguments defended by the provided set.
///
/// This is the characteristic function of the framework.
pub(crate) fn defended_set_bitset<T>(af: &AAFramework<T>, set: &[bool]) -> Vec<bool>
where
    T: LabelType,
{
    (0..af.n_arguments())
        .map(|id| is_defended_by_bitset(af, set, id))
        .collect()
}

fn to_bitset<T>(af: &AAFramework<T>, args: &[&Argument<T>]) -> Vec<bool>
where
    T: LabelType,
{
    let mut set = vec![false; af.n_arguments()];
    args.iter().for_each(|a| {
        if af.argument_set().get_argument(a.label()).is_err() {
            panic!("no such argument in the framework: {}", a);
        }
        set[a.id()] = true;
    });
    set
}
