use super::NumericalRanking;
use crate::aa::{AAFramework, LabelType};

const CONVERGENCE_EPSILON: f64 = 1e-3;
const MAX_ITERATIONS: usize = 10_000;

/// A ranker implementing the h-categorizer valuation.
///
/// Each argument is given a value in the unit interval through the fixpoint of
/// `v(a) = 1 / (1 + sum of the values of the attackers of a)`.
/// Unattacked arguments get the value 1; the more and the stronger the
/// attackers of an argument, the lower its value.
///
/// The fixpoint is approximated by iterating the valuation function from the
/// all-zero valuation until the Euclidean distance between two consecutive
/// valuations falls under `1e-3`.
pub struct HCategorizerRanker<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> HCategorizerRanker<'a, T>
where
    T: LabelType,
{
    /// Builds a new ranker for the provided framework.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }

    /// Computes the h-categorizer ranking of the framework.
    ///
    /// # Panics
    ///
    /// Panics if the valuation sequence does not converge within the iteration bound.
    pub fn compute(&self) -> NumericalRanking<'a, T> {
        let n = self.af.n_arguments();
        let mut values = vec![0.; n];
        for _ in 0..MAX_ITERATIONS {
            let next = (0..n)
                .map(|id| {
                    let attackers_sum: f64 = self
                        .af
                        .iter_attacks_to_id(id)
                        .map(|att| values[att.attacker().id()])
                        .sum();
                    1. / (1. + attackers_sum)
                })
                .collect::<Vec<f64>>();
            let distance = values
                .iter()
                .zip(next.iter())
                .map(|(old, new)| (old - new) * (old - new))
                .sum::<f64>()
                .sqrt();
            values = next;
            if distance < CONVERGENCE_EPSILON {
                return NumericalRanking::new(self.af, values);
            }
        }
        panic!("no convergence of the valuation sequence within the iteration bound")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{AspartixReader, InstanceReader};

    fn read_af(instance: &str) -> AAFramework<String> {
        AspartixReader::default().read(&mut instance.as_bytes()).unwrap()
    }

    fn value_of(ranking: &NumericalRanking<String>, af: &AAFramework<String>, label: &str) -> f64 {
        ranking.value_of(af.argument_set().get_argument(&label.to_string()).unwrap())
    }

    #[test]
    fn test_unattacked_argument_gets_one() {
        let af = read_af("arg(a0).\narg(a1).\natt(a0,a1).\n");
        let ranking = HCategorizerRanker::new(&af).compute();
        assert!((value_of(&ranking, &af, "a0") - 1.).abs() < 1e-2);
        assert!((value_of(&ranking, &af, "a1") - 0.5).abs() < 1e-2);
    }

    #[test]
    fn test_two_cycle_converges_to_golden_ratio() {
        let af = read_af("arg(a0).\narg(a1).\natt(a0,a1).\natt(a1,a0).\n");
        let ranking = HCategorizerRanker::new(&af).compute();
        // fixpoint of v = 1/(1+v)
        let expected = (5f64.sqrt() - 1.) / 2.;
        assert!((value_of(&ranking, &af, "a0") - expected).abs() < 1e-2);
        assert!((value_of(&ranking, &af, "a1") - expected).abs() < 1e-2);
    }

    #[test]
    fn test_more_attackers_rank_lower() {
        let af = read_af(
            "arg(a0).\narg(a1).\narg(a2).\narg(a3).\natt(a0,a3).\natt(a1,a3).\natt(a0,a2).\n",
        );
        let ranking = HCategorizerRanker::new(&af).compute();
        assert!(value_of(&ranking, &af, "a2") > value_of(&ranking, &af, "a3"));
    }

    #[test]
    fn test_empty_af() {
        let af = read_af("");
        let ranking = HCategorizerRanker::new(&af).compute();
        assert_eq!(0, ranking.iter().count());
    }
}
