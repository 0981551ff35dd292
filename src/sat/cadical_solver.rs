use super::{
    sat_solver::{SolvingListener, SolvingResult},
    Assignment, Literal, SatSolver,
};
use cadical::Solver as CadicalCSolver;

/// A wrapper around the Cadical SAT solver.
#[derive(Default)]
pub struct CadicalSolver {
    solver: CadicalCSolver,
    n_clauses: usize,
    reserved_vars: usize,
    listeners: Vec<Box<dyn SolvingListener>>,
}

impl CadicalSolver {
    fn extract_model(&self) -> Assignment {
        let values = (1..=self.solver.max_variable())
            .map(|i| self.solver.value(i))
            .collect();
        Assignment::new(values)
    }
}

fn to_cadical_lit(l: &Literal) -> i32 {
    isize::from(*l) as i32
}

impl SatSolver for CadicalSolver {
    fn add_clause(&mut self, cl: Vec<Literal>) {
        self.n_clauses += 1;
        self.solver.add_clause(cl.iter().map(to_cadical_lit))
    }

    fn solve(&mut self) -> SolvingResult {
        self.solve_under_assumptions(&[])
    }

    fn solve_under_assumptions(&mut self, assumptions: &[Literal]) -> SolvingResult {
        self.listeners
            .iter()
            .for_each(|l| l.solving_start(self.n_vars(), self.n_clauses));
        let solving_result = match self.solver.solve_with(assumptions.iter().map(to_cadical_lit)) {
            Some(true) => SolvingResult::Satisfiable(self.extract_model()),
            Some(false) => SolvingResult::Unsatisfiable,
            None => SolvingResult::Unknown,
        };
        self.listeners
            .iter()
            .for_each(|l| l.solving_end(&solving_result));
        solving_result
    }

    fn n_vars(&self) -> usize {
        usize::max(self.solver.max_variable() as usize, self.reserved_vars)
    }

    fn add_listener(&mut self, listener: Box<dyn SolvingListener>) {
        self.listeners.push(listener);
    }

    fn reserve(&mut self, new_max_id: usize) {
        self.reserved_vars = usize::max(self.reserved_vars, new_max_id);
    }
}
