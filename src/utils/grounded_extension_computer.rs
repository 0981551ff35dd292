use crate::aa::{semantics, AAFramework, Argument, LabelType};

/// Computes the grounded extension of an AF.
///
/// The grounded extension is obtained as the least fixpoint of the characteristic
/// function of the framework, starting from the empty set.
///
/// # Panics
///
/// The characteristic function is monotone, so the fixpoint must be reached within
/// `n_arguments + 1` rounds. Exceeding this bound reveals a broken framework and
/// makes this function panic.
pub(crate) fn grounded_extension<T>(af: &AAFramework<T>) -> Vec<&Argument<T>>
where
    T: LabelType,
{
    let mut current = vec![false; af.n_arguments()];
    let mut n_in = 0;
    let mut n_rounds = 0;
    loop {
        if n_rounds > af.n_arguments() + 1 {
            panic!("no grounded extension found within the iteration bound");
        }
        n_rounds += 1;
        let next = semantics::defended_set_bitset(af, &current);
        let next_n_in = next.iter().filter(|b| **b).count();
        if next_n_in == n_in {
            break;
        }
        current = next;
        n_in = next_n_in;
    }
    current
        .iter()
        .enumerate()
        .filter(|(_, b)| **b)
        .map(|(id, _)| af.argument_set().get_argument_by_id(id))
        .collect()
}
