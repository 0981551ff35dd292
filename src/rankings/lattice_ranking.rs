use crate::aa::{AAFramework, Argument, LabelType};

/// A ranking given as a partial order over the arguments of an AF.
///
/// The order is built from pairwise dominance comparisons; two arguments may
/// be incomparable.
pub struct LatticeRanking<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    // geq[a][b] holds iff a is at least as acceptable as b
    geq: Vec<Vec<bool>>,
}

impl<'a, T> LatticeRanking<'a, T>
where
    T: LabelType,
{
    pub(crate) fn new(af: &'a AAFramework<T>, geq: Vec<Vec<bool>>) -> Self {
        debug_assert_eq!(af.n_arguments(), geq.len());
        Self { af, geq }
    }

    /// Returns `true` iff the first argument is at least as acceptable as the second one.
    ///
    /// # Panics
    ///
    /// Panics if one of the arguments does not belong to the framework the
    /// ranking was computed over.
    pub fn is_at_least_as_acceptable(&self, first: &Argument<T>, second: &Argument<T>) -> bool {
        self.check_argument(first);
        self.check_argument(second);
        self.geq[first.id()][second.id()]
    }

    /// Returns `true` iff the first argument is strictly more acceptable than the second one.
    pub fn is_strictly_more_acceptable(&self, first: &Argument<T>, second: &Argument<T>) -> bool {
        self.is_at_least_as_acceptable(first, second)
            && !self.is_at_least_as_acceptable(second, first)
    }

    /// Returns `true` iff both arguments are as acceptable as each other.
    pub fn is_equally_acceptable(&self, first: &Argument<T>, second: &Argument<T>) -> bool {
        self.is_at_least_as_acceptable(first, second)
            && self.is_at_least_as_acceptable(second, first)
    }

    /// Returns `true` iff the arguments are incomparable in this ranking.
    pub fn is_incomparable(&self, first: &Argument<T>, second: &Argument<T>) -> bool {
        !self.is_at_least_as_acceptable(first, second)
            && !self.is_at_least_as_acceptable(second, first)
    }

    /// Iterates over the pairs of arguments in which the first member is
    /// strictly more acceptable than the second one.
    pub fn iter_strict_pairs(&self) -> impl Iterator<Item = (&'a Argument<T>, &'a Argument<T>)> {
        self.pairs_matching(|geq_ab, geq_ba| geq_ab && !geq_ba)
            .into_iter()
    }

    /// Iterates over the pairs of distinct arguments that are as acceptable as
    /// each other; each pair is yielded once.
    pub fn iter_equivalent_pairs(
        &self,
    ) -> impl Iterator<Item = (&'a Argument<T>, &'a Argument<T>)> {
        self.pairs_matching(|geq_ab, geq_ba| geq_ab && geq_ba)
            .into_iter()
            .filter(|(a, b)| a.id() < b.id())
    }

    fn pairs_matching<F>(&self, predicate: F) -> Vec<(&'a Argument<T>, &'a Argument<T>)>
    where
        F: Fn(bool, bool) -> bool,
    {
        let argument_set = self.af.argument_set();
        let mut pairs = Vec::new();
        for a in 0..self.geq.len() {
            for b in 0..self.geq.len() {
                if a != b && predicate(self.geq[a][b], self.geq[b][a]) {
                    pairs.push((
                        argument_set.get_argument_by_id(a),
                        argument_set.get_argument_by_id(b),
                    ));
                }
            }
        }
        pairs
    }

    fn check_argument(&self, arg: &Argument<T>) {
        if self.af.argument_set().get_argument(arg.label()).is_err() {
            panic!("no such argument in the framework: {}", arg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;

    fn ranking_of(geq: Vec<Vec<bool>>, labels: &[&str]) -> (AAFramework<String>, Vec<Vec<bool>>) {
        let labels = labels.iter().map(|s| s.to_string()).collect::<Vec<String>>();
        let args = ArgumentSet::new_with_labels(&labels);
        (AAFramework::new_with_argument_set(args), geq)
    }

    #[test]
    fn test_pairwise_relations() {
        // a above b, c incomparable with both
        let (af, geq) = ranking_of(
            vec![
                vec![true, true, false],
                vec![false, true, false],
                vec![false, false, true],
            ],
            &["a", "b", "c"],
        );
        let ranking = LatticeRanking::new(&af, geq);
        let arg = |l: &str| af.argument_set().get_argument(&l.to_string()).unwrap();
        assert!(ranking.is_strictly_more_acceptable(arg("a"), arg("b")));
        assert!(!ranking.is_strictly_more_acceptable(arg("b"), arg("a")));
        assert!(ranking.is_equally_acceptable(arg("a"), arg("a")));
        assert!(ranking.is_incomparable(arg("a"), arg("c")));
        assert_eq!(1, ranking.iter_strict_pairs().count());
        assert_eq!(0, ranking.iter_equivalent_pairs().count());
    }

    #[test]
    fn test_equivalent_pairs_are_yielded_once() {
        let (af, geq) = ranking_of(
            vec![vec![true, true], vec![true, true]],
            &["a", "b"],
        );
        let ranking = LatticeRanking::new(&af, geq);
        assert_eq!(1, ranking.iter_equivalent_pairs().count());
        assert_eq!(0, ranking.iter_strict_pairs().count());
    }
}
