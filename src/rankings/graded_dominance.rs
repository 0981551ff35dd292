use super::LatticeRanking;
use crate::aa::{AAFramework, LabelType};
use anyhow::{anyhow, Result};

/// A ranker comparing arguments through their graded-dominance status.
///
/// For a pair of grades `(m, n)`, a set of arguments `S` is an `mn`-complete
/// extension when each of its members has less than `m` attackers in `S` and
/// when `S` is exactly the set of the arguments having less than `m` attackers
/// with at least `n` attackers in `S`.
/// The usual complete extensions are recovered with `m = n = 1`.
///
/// An argument dominates another one when, for every pair of grades, the
/// second one belonging to all the `mn`-complete extensions implies the first
/// one does too.
/// The resulting relation is a partial order; it is returned as a [LatticeRanking].
///
/// The extensions of each grade pair are enumerated by brute force over the
/// subsets of the arguments, so a budget on the number of candidate sets may
/// be given to keep the computation bounded.
pub struct GradedDominanceRanker<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    budget: Option<usize>,
}

impl<'a, T> GradedDominanceRanker<'a, T>
where
    T: LabelType,
{
    /// Builds a new ranker for the provided framework.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af, budget: None }
    }

    /// Sets the maximal number of candidate sets that may be examined while
    /// enumerating the graded extensions.
    pub fn set_budget(&mut self, budget: Option<usize>) {
        self.budget = budget;
    }

    /// Computes the graded-dominance ranking of the framework.
    ///
    /// An error is returned if the candidate set budget is exhausted.
    pub fn compute(&self) -> Result<LatticeRanking<'a, T>> {
        let n = self.af.n_arguments();
        let attackers = (0..n)
            .map(|id| {
                self.af
                    .iter_attacks_to_id(id)
                    .map(|att| att.attacker().id())
                    .collect::<Vec<usize>>()
            })
            .collect::<Vec<Vec<usize>>>();
        let mut families = Vec::new();
        let mut n_candidates = 0;
        for m in 1..n.max(2) {
            for grade_n in 1..n.max(2) {
                families.push(self.member_of_all_extensions(
                    m,
                    grade_n,
                    &attackers,
                    &mut n_candidates,
                )?);
            }
        }
        let mut geq = vec![vec![true; n]; n];
        for a in 0..n {
            for b in 0..n {
                if a == b {
                    continue;
                }
                for member_of_all in &families {
                    if !geq[a][b] && !geq[b][a] {
                        break;
                    }
                    if member_of_all[b] && !member_of_all[a] {
                        geq[a][b] = false;
                    }
                    if member_of_all[a] && !member_of_all[b] {
                        geq[b][a] = false;
                    }
                }
            }
        }
        Ok(LatticeRanking::new(self.af, geq))
    }

    // Computes, for a pair of grades, which arguments belong to all the
    // mn-complete extensions.
    // A family with no extension imposes no constraint, so all the arguments
    // are flagged in this case.
    fn member_of_all_extensions(
        &self,
        m: usize,
        n: usize,
        attackers: &[Vec<usize>],
        n_candidates: &mut usize,
    ) -> Result<Vec<bool>> {
        let n_args = self.af.n_arguments();
        let mut member_of_all = vec![true; n_args];
        let mut in_set = vec![false; n_args];
        loop {
            *n_candidates += 1;
            if let Some(budget) = self.budget {
                if *n_candidates > budget {
                    return Err(anyhow!(
                        "enumeration budget of {} candidate sets exhausted",
                        budget
                    ));
                }
            }
            if is_graded_complete(&in_set, m, n, attackers) {
                for (id, member) in member_of_all.iter_mut().enumerate() {
                    *member &= in_set[id];
                }
            }
            if !next_subset(&mut in_set) {
                break;
            }
        }
        Ok(member_of_all)
    }
}

fn is_graded_complete(in_set: &[bool], m: usize, n: usize, attackers: &[Vec<usize>]) -> bool {
    let n_attackers_in_set = |id: usize| attackers[id].iter().filter(|a| in_set[**a]).count();
    for (id, in_extension) in in_set.iter().enumerate() {
        if *in_extension && n_attackers_in_set(id) >= m {
            return false;
        }
        let n_weak_attackers = attackers[id]
            .iter()
            .filter(|attacker| n_attackers_in_set(**attacker) < n)
            .count();
        if (n_weak_attackers < m) != *in_extension {
            return false;
        }
    }
    true
}

fn next_subset(in_set: &mut [bool]) -> bool {
    for b in in_set.iter_mut() {
        if *b {
            *b = false;
        } else {
            *b = true;
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{AspartixReader, InstanceReader};

    fn read_af(instance: &str) -> AAFramework<String> {
        AspartixReader::default().read(&mut instance.as_bytes()).unwrap()
    }

    #[test]
    fn test_attacker_dominates_attacked() {
        let af = read_af("arg(a0).\narg(a1).\natt(a0,a1).\n");
        let ranking = GradedDominanceRanker::new(&af).compute().unwrap();
        let arg = |l: &str| af.argument_set().get_argument(&l.to_string()).unwrap();
        assert!(ranking.is_strictly_more_acceptable(arg("a0"), arg("a1")));
    }

    #[test]
    fn test_chain_ranking() {
        let af = read_af("arg(a0).\narg(a1).\narg(a2).\natt(a0,a1).\natt(a1,a2).\n");
        let ranking = GradedDominanceRanker::new(&af).compute().unwrap();
        let arg = |l: &str| af.argument_set().get_argument(&l.to_string()).unwrap();
        assert!(ranking.is_strictly_more_acceptable(arg("a0"), arg("a2")));
        assert!(ranking.is_strictly_more_acceptable(arg("a2"), arg("a1")));
        assert!(ranking.is_strictly_more_acceptable(arg("a0"), arg("a1")));
    }

    #[test]
    fn test_symmetric_cycle_yields_equivalence() {
        let af = read_af("arg(a0).\narg(a1).\natt(a0,a1).\natt(a1,a0).\n");
        let ranking = GradedDominanceRanker::new(&af).compute().unwrap();
        let arg = |l: &str| af.argument_set().get_argument(&l.to_string()).unwrap();
        assert!(ranking.is_equally_acceptable(arg("a0"), arg("a1")));
    }

    #[test]
    fn test_budget_exhaustion() {
        let af = read_af("arg(a0).\narg(a1).\narg(a2).\natt(a0,a1).\natt(a1,a2).\n");
        let mut ranker = GradedDominanceRanker::new(&af);
        ranker.set_budget(Some(2));
        assert!(ranker.compute().is_err());
    }

    #[test]
    fn test_empty_af() {
        let af = read_af("");
        let ranking = GradedDominanceRanker::new(&af).compute().unwrap();
        assert_eq!(0, ranking.iter_strict_pairs().count());
    }
}
