use crate::aa::{AAFramework, LabelType};

/// Computes the strongly connected components of the attack graph of an AF.
///
/// The result is a partition of the argument ids.
/// Inside a component, ids are sorted in increasing order.
/// No order is guaranteed between the components.
pub(crate) fn strongly_connected_components<T>(af: &AAFramework<T>) -> Vec<Vec<usize>>
where
    T: LabelType,
{
    let n = af.n_arguments();
    let mut successors = vec![vec![]; n];
    af.iter_attacks()
        .for_each(|att| successors[att.attacker().id()].push(att.attacked().id()));
    let mut data = TarjanData {
        successors,
        index: vec![usize::MAX; n],
        lowlink: vec![0; n],
        on_stack: vec![false; n],
        stack: Vec::new(),
        next_index: 0,
        components: Vec::new(),
    };
    for root in 0..n {
        if data.index[root] == usize::MAX {
            data.visit_from(root);
        }
    }
    data.components
        .iter_mut()
        .for_each(|c| c.sort_unstable());
    data.components
}

struct TarjanData {
    successors: Vec<Vec<usize>>,
    index: Vec<usize>,
    lowlink: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<usize>,
    next_index: usize,
    components: Vec<Vec<usize>>,
}

impl TarjanData {
    // Tarjan's algorithm with an explicit DFS stack; each frame stores the
    // node and the position of the next successor to visit.
    fn visit_from(&mut self, root: usize) {
        self.open(root);
        let mut frames: Vec<(usize, usize)> = vec![(root, 0)];
        loop {
            let (node, next_successor) = match frames.last() {
                Some(f) => *f,
                None => break,
            };
            if next_successor < self.successors[node].len() {
                if let Some(f) = frames.last_mut() {
                    f.1 += 1;
                }
                let successor = self.successors[node][next_successor];
                if self.index[successor] == usize::MAX {
                    self.open(successor);
                    frames.push((successor, 0));
                } else if self.on_stack[successor] {
                    self.lowlink[node] = self.lowlink[node].min(self.index[successor]);
                }
            } else {
                frames.pop();
                if let Some(f) = frames.last() {
                    self.lowlink[f.0] = self.lowlink[f.0].min(self.lowlink[node]);
                }
                if self.lowlink[node] == self.index[node] {
                    let mut component = Vec::new();
                    loop {
                        let member = self.stack.pop().unwrap();
                        self.on_stack[member] = false;
                        component.push(member);
                        if member == node {
                            break;
                        }
                    }
                    self.components.push(component);
                }
            }
        }
    }

    fn open(&mut self, node: usize) {
        self.index[node] = self.next_index;
        self.lowlink[node] = self.next_index;
        self.next_index += 1;
        self.stack.push(node);
        self.on_stack[node] = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;

    fn sorted_components(mut components: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
        components.sort_unstable();
        components
    }

    #[test]
    fn test_scc_no_attacks() {
        let args = ArgumentSet::new_with_labels(&["a", "b", "c"]);
        let af = AAFramework::new_with_argument_set(args);
        assert_eq!(
            vec![vec![0], vec![1], vec![2]],
            sorted_components(strongly_connected_components(&af))
        );
    }

    #[test]
    fn test_scc_single_cycle() {
        let args = ArgumentSet::new_with_labels(&["a", "b", "c"]);
        let mut af = AAFramework::new_with_argument_set(args);
        af.new_attack(&"a", &"b").unwrap();
        af.new_attack(&"b", &"c").unwrap();
        af.new_attack(&"c", &"a").unwrap();
        assert_eq!(
            vec![vec![0, 1, 2]],
            sorted_components(strongly_connected_components(&af))
        );
    }

    #[test]
    fn test_scc_cycle_and_tail() {
        let args = ArgumentSet::new_with_labels(&["a", "b", "c", "d"]);
        let mut af = AAFramework::new_with_argument_set(args);
        af.new_attack(&"a", &"b").unwrap();
        af.new_attack(&"b", &"a").unwrap();
        af.new_attack(&"b", &"c").unwrap();
        af.new_attack(&"c", &"d").unwrap();
        assert_eq!(
            vec![vec![0, 1], vec![2], vec![3]],
            sorted_components(strongly_connected_components(&af))
        );
    }

    #[test]
    fn test_scc_two_cycles() {
        let args = ArgumentSet::new_with_labels(&["a", "b", "c", "d"]);
        let mut af = AAFramework::new_with_argument_set(args);
        af.new_attack(&"a", &"b").unwrap();
        af.new_attack(&"b", &"a").unwrap();
        af.new_attack(&"b", &"c").unwrap();
        af.new_attack(&"c", &"d").unwrap();
        af.new_attack(&"d", &"c").unwrap();
        assert_eq!(
            vec![vec![0, 1], vec![2, 3]],
            sorted_components(strongly_connected_components(&af))
        );
    }

    #[test]
    fn test_scc_empty_af() {
        let args = ArgumentSet::new_with_labels(&[] as &[&str]);
        let af = AAFramework::new_with_argument_set(args);
        assert!(strongly_connected_components(&af).is_empty());
    }
}
