use super::specs::{ExtensionSetComputer, SingleExtensionComputer};
use crate::aa::{semantics, AAFramework, Argument, LabelType};
use anyhow::{anyhow, Result};

/// A solver enumerating the extensions of an AF by brute force.
///
/// The whole power set of the arguments is examined and filtered by the
/// predicate of the semantics, with a potential maximality selection.
/// The cost is exponential in the number of arguments; this solver is intended
/// for small and medium frameworks only.
///
/// An optional candidate budget makes the enumeration fail fast with an error
/// once the number of examined subsets exceeds it.
pub struct EnumerationSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    predicate: fn(&AAFramework<T>, &[bool]) -> bool,
    selection: Selection,
    budget: Option<usize>,
}

#[derive(Copy, Clone)]
enum Selection {
    All,
    SubsetMaximal,
    RangeMaximal,
}

impl<'a, T> EnumerationSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a solver enumerating the conflict-free sets of an AF.
    ///
    /// The empty set is always conflict-free and is the first enumerated one.
    pub fn new_for_conflict_freeness(af: &'a AAFramework<T>) -> Self {
        Self::new(af, semantics::is_conflict_free_bitset, Selection::All)
    }

    /// Builds a solver enumerating the admissible sets of an AF.
    pub fn new_for_admissibility(af: &'a AAFramework<T>) -> Self {
        Self::new(af, semantics::is_admissible_bitset, Selection::All)
    }

    /// Builds a solver enumerating the complete extensions of an AF.
    pub fn new_for_complete_semantics(af: &'a AAFramework<T>) -> Self {
        Self::new(af, semantics::is_complete_bitset, Selection::All)
    }

    /// Builds a solver enumerating the stable extensions of an AF.
    pub fn new_for_stable_semantics(af: &'a AAFramework<T>) -> Self {
        Self::new(af, semantics::is_stable_bitset, Selection::All)
    }

    /// Builds a solver enumerating the naive extensions of an AF,
    /// that is, its maximal conflict-free sets.
    pub fn new_for_naive_semantics(af: &'a AAFramework<T>) -> Self {
        Self::new(
            af,
            semantics::is_conflict_free_bitset,
            Selection::SubsetMaximal,
        )
    }

    /// Builds a solver enumerating the preferred extensions of an AF,
    /// that is, its maximal admissible sets.
    pub fn new_for_preferred_semantics(af: &'a AAFramework<T>) -> Self {
        Self::new(af, semantics::is_admissible_bitset, Selection::SubsetMaximal)
    }

    /// Builds a solver enumerating the semi-stable extensions of an AF,
    /// that is, its complete extensions with a maximal range.
    pub fn new_for_semi_stable_semantics(af: &'a AAFramework<T>) -> Self {
        Self::new(af, semantics::is_complete_bitset, Selection::RangeMaximal)
    }

    fn new(
        af: &'a AAFramework<T>,
        predicate: fn(&AAFramework<T>, &[bool]) -> bool,
        selection: Selection,
    ) -> Self {
        Self {
            af,
            predicate,
            selection,
            budget: None,
        }
    }

    /// Sets the candidate budget of this solver.
    ///
    /// When set, enumerations that examine more subsets than the budget fail
    /// with an error carrying the budget value.
    pub fn set_budget(&mut self, budget: Option<usize>) {
        self.budget = budget;
    }

    pub(crate) fn compute_extensions_as_bitsets(&self) -> Result<Vec<Vec<bool>>> {
        let n = self.af.n_arguments();
        let mut matching = Vec::new();
        let mut current = vec![false; n];
        let mut n_examined = 0usize;
        loop {
            n_examined += 1;
            if let Some(budget) = self.budget {
                if n_examined > budget {
                    return Err(anyhow!(
                        "enumeration budget of {} candidate sets exhausted",
                        budget
                    ));
                }
            }
            if (self.predicate)(self.af, &current) {
                matching.push(current.clone());
            }
            let mut i = 0;
            while i < n && current[i] {
                current[i] = false;
                i += 1;
            }
            if i == n {
                break;
            }
            current[i] = true;
        }
        Ok(match self.selection {
            Selection::All => matching,
            Selection::SubsetMaximal => keep_maximal(matching, |s| s.clone()),
            Selection::RangeMaximal => {
                keep_maximal(matching, |s| self.range_of(s))
            }
        })
    }

    fn range_of(&self, set: &[bool]) -> Vec<bool> {
        let mut range = set.to_vec();
        (0..set.len()).for_each(|id| {
            if self.af.is_attacked_by_set(id, set) {
                range[id] = true;
            }
        });
        range
    }
}

fn keep_maximal<F>(candidates: Vec<Vec<bool>>, key: F) -> Vec<Vec<bool>>
where
    F: Fn(&Vec<bool>) -> Vec<bool>,
{
    let keys = candidates.iter().map(&key).collect::<Vec<Vec<bool>>>();
    candidates
        .iter()
        .enumerate()
        .filter(|(i, _)| {
            !keys
                .iter()
                .enumerate()
                .any(|(j, other)| *i != j && is_strict_subset(&keys[*i], other))
        })
        .map(|(_, c)| c.clone())
        .collect()
}

fn is_strict_subset(a: &[bool], b: &[bool]) -> bool {
    a != b && a.iter().zip(b.iter()).all(|(x, y)| !*x || *y)
}

impl<T> ExtensionSetComputer<T> for EnumerationSolver<'_, T>
where
    T: LabelType,
{
    fn compute_extensions(&mut self) -> Result<Vec<Vec<&Argument<T>>>> {
        let bitsets = self.compute_extensions_as_bitsets()?;
        Ok(bitsets
            .iter()
            .map(|set| {
                set.iter()
                    .enumerate()
                    .filter(|(_, b)| **b)
                    .map(|(id, _)| self.af.argument_set().get_argument_by_id(id))
                    .collect()
            })
            .collect())
    }
}

impl<T> SingleExtensionComputer<T> for EnumerationSolver<'_, T>
where
    T: LabelType,
{
    fn compute_one_extension(&mut self) -> Result<Option<Vec<&Argument<T>>>> {
        let mut extensions = self.compute_extensions()?;
        if extensions.is_empty() {
            Ok(None)
        } else {
            Ok(Some(extensions.swap_remove(0)))
        }
    }
}
