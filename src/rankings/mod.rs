//! Objects dedicated to the computation of argument rankings.

mod graded_dominance;
pub use graded_dominance::GradedDominanceRanker;

mod h_categorizer;
pub use h_categorizer::HCategorizerRanker;

mod lattice_ranking;
pub use lattice_ranking::LatticeRanking;

mod numerical_ranking;
pub use numerical_ranking::NumericalRanking;

use crate::aa::{AAFramework, LabelType};
use anyhow::Result;
use strum_macros::{Display, EnumString, EnumVariantNames};

/// The ranking-based semantics handled by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, EnumVariantNames)]
#[strum(serialize_all = "kebab-case")]
pub enum RankingKind {
    /// The h-categorizer valuation, mapping each argument to a numeric value.
    HCategorizer,
    /// The graded-dominance comparison, yielding a partial order.
    GradedDominance,
}

/// A ranking of the arguments of an AF, either numerical or given as a partial order.
pub enum Ranking<'a, T>
where
    T: LabelType,
{
    /// A ranking mapping each argument to a numeric value.
    Numerical(NumericalRanking<'a, T>),
    /// A ranking given as a partial order.
    Lattice(LatticeRanking<'a, T>),
}

/// Computes the ranking of the arguments of a framework under a ranking-based semantics.
pub fn compute_ranking<T>(af: &AAFramework<T>, kind: RankingKind) -> Result<Ranking<T>>
where
    T: LabelType,
{
    compute_ranking_with_budget(af, kind, None)
}

/// Computes the ranking of the arguments of a framework under a ranking-based
/// semantics, bounding the underlying extension enumerations when a budget is given.
pub fn compute_ranking_with_budget<T>(
    af: &AAFramework<T>,
    kind: RankingKind,
    budget: Option<usize>,
) -> Result<Ranking<T>>
where
    T: LabelType,
{
    match kind {
        RankingKind::HCategorizer => Ok(Ranking::Numerical(HCategorizerRanker::new(af).compute())),
        RankingKind::GradedDominance => {
            let mut ranker = GradedDominanceRanker::new(af);
            ranker.set_budget(budget);
            Ok(Ranking::Lattice(ranker.compute()?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{AspartixReader, InstanceReader};
    use std::str::FromStr;

    #[test]
    fn test_ranking_kind_from_str() {
        assert_eq!(
            RankingKind::HCategorizer,
            RankingKind::from_str("h-categorizer").unwrap()
        );
        assert_eq!(
            RankingKind::GradedDominance,
            RankingKind::from_str("graded-dominance").unwrap()
        );
        assert!(RankingKind::from_str("unknown").is_err());
    }

    #[test]
    fn test_compute_ranking_dispatch() {
        let af = AspartixReader::default()
            .read(&mut "arg(a0).\narg(a1).\natt(a0,a1).\n".as_bytes())
            .unwrap();
        match compute_ranking(&af, RankingKind::HCategorizer).unwrap() {
            Ranking::Numerical(_) => {}
            _ => panic!(),
        }
        match compute_ranking(&af, RankingKind::GradedDominance).unwrap() {
            Ranking::Lattice(_) => {}
            _ => panic!(),
        }
    }
}
