use super::{
    buffered_maxsat_solver::BufferedMaxSatSolver,
    external_sat_solver::exec_solver,
    maxsat_solver::MaxSatSolver,
    sat_solver::{SolvingListener, SolvingResult},
    Literal, SatSolver,
};

/// A MaxSAT solver which execution is made by a system command.
///
/// The solver must read a WCNF instance from the standard input and write its
/// answer following the MaxSAT evaluation conventions (`o` cost lines, a final
/// `s` status line, `v` value lines).
pub struct ExternalMaxSatSolver {
    buffered_maxsat_solver: BufferedMaxSatSolver,
}

impl ExternalMaxSatSolver {
    /// Builds a new external MaxSAT solver.
    ///
    /// The `program` argument is the path from a directory in execution path to the software to execute.
    /// The `options` parameter is the CLI options to provide to the software under execution.
    pub fn new(program: String, options: Vec<String>) -> Self {
        Self {
            buffered_maxsat_solver: BufferedMaxSatSolver::new(Box::new(move |r| {
                exec_solver(r, &program, &options)
            })),
        }
    }
}

impl SatSolver for ExternalMaxSatSolver {
    fn add_clause(&mut self, cl: Vec<Literal>) {
        self.buffered_maxsat_solver.add_clause(cl)
    }

    fn solve(&mut self) -> SolvingResult {
        self.buffered_maxsat_solver.solve()
    }

    fn solve_under_assumptions(&mut self, assumptions: &[Literal]) -> SolvingResult {
        self.buffered_maxsat_solver
            .solve_under_assumptions(assumptions)
    }

    fn n_vars(&self) -> usize {
        self.buffered_maxsat_solver.n_vars()
    }

    fn add_listener(&mut self, listener: Box<dyn SolvingListener>) {
        self.buffered_maxsat_solver.add_listener(listener);
    }

    fn reserve(&mut self, new_max_id: usize) {
        self.buffered_maxsat_solver.reserve(new_max_id)
    }
}

impl MaxSatSolver for ExternalMaxSatSolver {
    fn add_soft_clause(&mut self, cl: Vec<Literal>, weight: usize) {
        self.buffered_maxsat_solver.add_soft_clause(cl, weight)
    }

    fn as_sat_solver_mut(&mut self) -> &mut dyn SatSolver {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause;

    fn get_echo_command(content: &str) -> Option<(String, Vec<String>)> {
        if cfg!(target_family = "unix") {
            Some(("echo".to_string(), vec![content.to_string()]))
        } else {
            None
        }
    }

    #[test]
    fn test_solve_output() {
        let (program, options) = match get_echo_command("o 0\ns OPTIMUM FOUND\nv 1 2 0\n") {
            Some(cmd) => cmd,
            None => return,
        };
        let mut s = ExternalMaxSatSolver::new(program, options);
        s.add_clause(clause![1, 2]);
        s.add_soft_clause(clause![1], 1);
        let model = s.solve().unwrap_model().unwrap();
        assert!(model.value_of(1).unwrap());
        assert!(model.value_of(2).unwrap());
    }
}
