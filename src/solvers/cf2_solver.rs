use super::enumeration_solver::EnumerationSolver;
use super::specs::{ExtensionSetComputer, SingleExtensionComputer};
use crate::aa::{AAFramework, Argument, LabelType};
use anyhow::{anyhow, Result};
use permutator::CartesianProduct;
use std::collections::HashSet;

/// The algorithm used to compute the CF2 extensions.
///
/// Both strategies decompose the framework into its strongly connected
/// components and rely on naive extensions of sub-frameworks.
/// They compute the same set of extensions; having two of them allows
/// cross-checking the results.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cf2Strategy {
    /// Processes the components in topological order, propagating the accepted
    /// and rejected arguments and recursively decomposing the components that
    /// split once the rejected arguments are removed.
    SccPropagation,
    /// Computes the candidate sets of each component locally, for each possible
    /// status of its parents, and combines them by a cartesian product keeping
    /// the compatible combinations.
    SccCombination,
}

/// A solver used to compute the CF2 extensions of an AF.
///
/// CF2 is a SCC-recursive semantics built on top of the naive extensions.
/// Odd-length cycles get a treatment similar to even-length ones, unlike in
/// the admissibility based semantics.
///
/// The solver relies on the brute force naive enumerator on sub-frameworks;
/// an optional candidate budget makes the computation fail fast instead of
/// exploding on large components.
pub struct Cf2SemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    strategy: Cf2Strategy,
    budget: Option<usize>,
}

struct PropagationState {
    scc_list: Vec<Vec<usize>>,
    next_scc: usize,
    in_set: Vec<bool>,
    out_set: Vec<bool>,
}

impl<'a, T> Cf2SemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver dedicated to the CF2 semantics, using the default
    /// (propagation based) strategy.
    ///
    /// # Example
    ///
    /// ```
    /// # use rhetor::aa::{AAFramework, LabelType};
    /// # use rhetor::solvers::{ExtensionSetComputer, Cf2SemanticsSolver};
    /// fn enumerate_extensions<T>(af: &AAFramework<T>) where T: LabelType {
    ///     let mut solver = Cf2SemanticsSolver::new(af);
    ///     let extensions = solver.compute_extensions().unwrap();
    ///     println!("found {} CF2 extensions", extensions.len());
    /// }
    /// # enumerate_extensions::<usize>(&AAFramework::default());
    /// ```
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self::new_with_strategy(af, Cf2Strategy::SccPropagation)
    }

    /// Builds a new solver dedicated to the CF2 semantics using the given strategy.
    pub fn new_with_strategy(af: &'a AAFramework<T>, strategy: Cf2Strategy) -> Self {
        Self {
            af,
            strategy,
            budget: None,
        }
    }

    /// Sets the candidate budget of this solver.
    ///
    /// The budget bounds both the number of steps of the decomposition and the
    /// enumerations performed on the sub-frameworks.
    pub fn set_budget(&mut self, budget: Option<usize>) {
        self.budget = budget;
    }

    pub(crate) fn compute_extensions_as_bitsets(&self) -> Result<Vec<Vec<bool>>> {
        match self.strategy {
            Cf2Strategy::SccPropagation => self.compute_by_propagation(),
            Cf2Strategy::SccCombination => self.compute_by_combination(),
        }
    }

    fn compute_by_propagation(&self) -> Result<Vec<Vec<bool>>> {
        let n = self.af.n_arguments();
        let mut worklist = vec![PropagationState {
            scc_list: topological_scc_order(self.af),
            next_scc: 0,
            in_set: vec![false; n],
            out_set: vec![false; n],
        }];
        let mut seen = HashSet::new();
        let mut result = Vec::new();
        let mut n_examined = 0usize;
        while let Some(state) = worklist.pop() {
            n_examined += 1;
            self.check_budget(n_examined)?;
            if state.next_scc == state.scc_list.len() {
                if seen.insert(state.in_set.clone()) {
                    result.push(state.in_set);
                }
                continue;
            }
            let scc = &state.scc_list[state.next_scc];
            let mut in_scc = vec![false; n];
            scc.iter().for_each(|a| in_scc[*a] = true);
            let alive = scc
                .iter()
                .copied()
                .filter(|a| !state.out_set[*a])
                .collect::<Vec<usize>>();
            let alive_restriction = self.restriction_to_ids(&alive);
            if alive_restriction.strongly_connected_components().len() > 1 {
                // removing the rejected arguments split the component;
                // reprocess it as its own topologically ordered sub-components
                let sub_sccs = self.components_by_original_ids(&alive_restriction);
                let mut new_list = state.scc_list.clone();
                new_list.splice(state.next_scc..state.next_scc + 1, sub_sccs);
                worklist.push(PropagationState {
                    scc_list: new_list,
                    next_scc: state.next_scc,
                    in_set: state.in_set,
                    out_set: state.out_set,
                });
                continue;
            }
            let mut sub = alive.clone();
            let mut outer = Vec::new();
            for &attacked in scc {
                for attack in self.af.iter_attacks_to_id(attacked) {
                    let attacker = attack.attacker().id();
                    if state.in_set[attacker] && !in_scc[attacker] && !outer.contains(&attacker) {
                        outer.push(attacker);
                        sub.push(attacker);
                    }
                }
            }
            for candidate in self.naive_extensions_by_original_ids(&sub)? {
                if outer.iter().any(|a| !candidate[*a]) {
                    continue;
                }
                let mut new_in = state.in_set.clone();
                let mut new_out = state.out_set.clone();
                for &a in scc {
                    if candidate[a] {
                        new_in[a] = true;
                        let arg = self.af.argument_set().get_argument_by_id(a);
                        for attack in self.af.iter_attacks_from(arg) {
                            new_out[attack.attacked().id()] = true;
                        }
                    }
                }
                worklist.push(PropagationState {
                    scc_list: state.scc_list.clone(),
                    next_scc: state.next_scc + 1,
                    in_set: new_in,
                    out_set: new_out,
                });
            }
        }
        Ok(result)
    }

    fn compute_by_combination(&self) -> Result<Vec<Vec<bool>>> {
        let n = self.af.n_arguments();
        let sccs = topological_scc_order(self.af);
        if sccs.is_empty() {
            return Ok(vec![vec![]]);
        }
        let mut n_examined = 0usize;
        let mut scc_members = Vec::with_capacity(sccs.len());
        let mut domains = Vec::with_capacity(sccs.len());
        let mut local_candidates = Vec::with_capacity(sccs.len());
        for scc in &sccs {
            let mut members = vec![false; n];
            scc.iter().for_each(|a| members[*a] = true);
            let mut parents = Vec::new();
            for &attacked in scc {
                for attack in self.af.iter_attacks_to_id(attacked) {
                    let attacker = attack.attacker().id();
                    if !members[attacker] && !parents.contains(&attacker) {
                        parents.push(attacker);
                    }
                }
            }
            let mut domain = members.clone();
            parents.iter().for_each(|a| domain[*a] = true);
            let mut candidates = Vec::new();
            let mut parent_selection = vec![false; parents.len()];
            loop {
                n_examined += 1;
                self.check_budget(n_examined)?;
                let survivors = scc
                    .iter()
                    .copied()
                    .filter(|a| {
                        !parents
                            .iter()
                            .enumerate()
                            .any(|(i, p)| parent_selection[i] && self.attacks_id(*p, *a))
                    })
                    .collect::<Vec<usize>>();
                for local in self.local_extensions_by_original_ids(&survivors)? {
                    let mut candidate = local;
                    parents
                        .iter()
                        .enumerate()
                        .filter(|(i, _)| parent_selection[*i])
                        .for_each(|(_, p)| candidate[*p] = true);
                    candidates.push(candidate);
                }
                let mut i = 0;
                while i < parent_selection.len() && parent_selection[i] {
                    parent_selection[i] = false;
                    i += 1;
                }
                if i == parent_selection.len() {
                    break;
                }
                parent_selection[i] = true;
            }
            scc_members.push(members);
            domains.push(domain);
            local_candidates.push(candidates);
        }
        let candidate_refs = local_candidates
            .iter()
            .map(|v| v.as_slice())
            .collect::<Vec<&[Vec<bool>]>>();
        let mut seen = HashSet::new();
        let mut result: Vec<Vec<bool>> = Vec::new();
        for combination in candidate_refs.cart_prod() {
            n_examined += 1;
            self.check_budget(n_examined)?;
            if !combination_is_compatible(&combination, &domains) {
                continue;
            }
            let mut extension = vec![false; n];
            for (candidate, members) in combination.iter().zip(scc_members.iter()) {
                (0..n).for_each(|a| extension[a] |= candidate[a] && members[a]);
            }
            if seen.insert(extension.clone()) {
                result.push(extension);
            }
        }
        Ok(result)
    }

    fn attacks_id(&self, from: usize, to: usize) -> bool {
        self.af
            .iter_attacks_to_id(to)
            .any(|attack| attack.attacker().id() == from)
    }

    fn check_budget(&self, n_examined: usize) -> Result<()> {
        if let Some(budget) = self.budget {
            if n_examined > budget {
                return Err(anyhow!(
                    "enumeration budget of {} candidate sets exhausted",
                    budget
                ));
            }
        }
        Ok(())
    }

    fn restriction_to_ids(&self, ids: &[usize]) -> AAFramework<T> {
        let args = ids
            .iter()
            .map(|id| self.af.argument_set().get_argument_by_id(*id))
            .collect::<Vec<&Argument<T>>>();
        self.af.restriction(&args)
    }

    /// Computes the topologically ordered SCCs of a restriction,
    /// mapped back to the argument ids of the initial framework.
    fn components_by_original_ids(&self, restricted: &AAFramework<T>) -> Vec<Vec<usize>> {
        topological_scc_order(restricted)
            .iter()
            .map(|scc| {
                scc.iter()
                    .map(|id| {
                        self.original_id_of(restricted.argument_set().get_argument_by_id(*id))
                    })
                    .collect()
            })
            .collect()
    }

    /// Computes the candidate sets of a suppression-free sub-framework.
    ///
    /// When the sub-framework is a single component, its candidates are its
    /// naive extensions; when the suppression of the attacked arguments made it
    /// split, the semantics applies recursively.
    fn local_extensions_by_original_ids(&self, ids: &[usize]) -> Result<Vec<Vec<bool>>> {
        let restricted = self.restriction_to_ids(ids);
        if restricted.strongly_connected_components().len() > 1 {
            let mut sub_solver =
                Cf2SemanticsSolver::new_with_strategy(&restricted, Cf2Strategy::SccCombination);
            sub_solver.set_budget(self.budget);
            let extensions = sub_solver.compute_extensions_as_bitsets()?;
            Ok(extensions
                .iter()
                .map(|ext| {
                    let mut bits = vec![false; self.af.n_arguments()];
                    ext.iter().enumerate().filter(|(_, b)| **b).for_each(|(id, _)| {
                        bits[self.original_id_of(restricted.argument_set().get_argument_by_id(id))] =
                            true
                    });
                    bits
                })
                .collect())
        } else {
            self.naive_extensions_by_original_ids(ids)
        }
    }

    fn naive_extensions_by_original_ids(&self, ids: &[usize]) -> Result<Vec<Vec<bool>>> {
        let restricted = self.restriction_to_ids(ids);
        let mut solver = EnumerationSolver::new_for_naive_semantics(&restricted);
        solver.set_budget(self.budget);
        let extensions = solver.compute_extensions()?;
        Ok(extensions
            .iter()
            .map(|ext| {
                let mut bits = vec![false; self.af.n_arguments()];
                ext.iter()
                    .for_each(|arg| bits[self.original_id_of(arg)] = true);
                bits
            })
            .collect())
    }

    fn original_id_of(&self, arg: &Argument<T>) -> usize {
        self.af
            .argument_set()
            .get_argument(arg.label())
            .expect("restricted arguments must stem from the initial framework")
            .id()
    }
}

/// Checks that the candidates of a combination agree on the status of the
/// arguments their domains share.
fn combination_is_compatible(combination: &[&Vec<bool>], domains: &[Vec<bool>]) -> bool {
    for i in 0..combination.len() {
        for j in i + 1..combination.len() {
            let disagree = (0..domains[i].len())
                .any(|a| domains[i][a] && domains[j][a] && combination[i][a] != combination[j][a]);
            if disagree {
                return false;
            }
        }
    }
    true
}

/// Computes the SCCs of a framework, ordered topologically.
///
/// Ties are broken by taking the first source component in the order in which
/// Tarjan's algorithm discovered them.
fn topological_scc_order<T>(af: &AAFramework<T>) -> Vec<Vec<usize>>
where
    T: LabelType,
{
    let sccs = af.strongly_connected_components();
    let n = af.n_arguments();
    let mut scc_of = vec![0usize; n];
    for (i, scc) in sccs.iter().enumerate() {
        scc.iter().for_each(|a| scc_of[*a] = i);
    }
    let mut successors = vec![HashSet::new(); sccs.len()];
    let mut in_degree = vec![0usize; sccs.len()];
    for attack in af.iter_attacks() {
        let from = scc_of[attack.attacker().id()];
        let to = scc_of[attack.attacked().id()];
        if from != to && successors[from].insert(to) {
            in_degree[to] += 1;
        }
    }
    let mut emitted = vec![false; sccs.len()];
    let mut order = Vec::with_capacity(sccs.len());
    while order.len() < sccs.len() {
        let next = (0..sccs.len())
            .find(|i| !emitted[*i] && in_degree[*i] == 0)
            .expect("the condensation of an attack graph must be acyclic");
        emitted[next] = true;
        successors[next]
            .iter()
            .for_each(|succ| in_degree[*succ] -= 1);
        order.push(sccs[next].clone());
    }
    order
}

impl<T> ExtensionSetComputer<T> for Cf2SemanticsSolver<'_, T>
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

impl<T> SingleExtensionComputer<T> for Cf2SemanticsSolver<'_, T>
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
