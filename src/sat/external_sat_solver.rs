use super::{
    buffered_sat_solver::BufferedSatSolver,
    sat_solver::{SolvingListener, SolvingResult},
    Literal, SatSolver,
};
use std::{
    io::{Read, Write},
    process::{Command, Stdio},
};

/// A SAT solver run as a system command.
///
/// The command is an executable program and an optional list of CLI arguments.
/// The program must read the instance on its standard input and answer on its
/// standard output, both following the SAT competition conventions.
pub struct ExternalSatSolver {
    inner: BufferedSatSolver,
}

impl ExternalSatSolver {
    /// Builds a new external SAT solver.
    ///
    /// The `program` argument locates the executable; `options` holds the CLI
    /// arguments it is launched with.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use rhetor::sat::{ExternalSatSolver, Literal, SatSolver, self};
    /// let mut solver = ExternalSatSolver::new(
    ///     "/opt/solvers/kissat".to_string(),
    ///     vec!["-q".to_string()],
    /// );
    /// solver.add_clause(vec![Literal::from(1), Literal::from(2)]);
    /// solver.add_clause(vec![Literal::from(-1)]);
    /// let model = solver.solve().unwrap_model().unwrap();
    /// assert_eq!(Some(true), model.value_of(2));
    /// ```
    pub fn new(program: String, options: Vec<String>) -> Self {
        Self {
            inner: BufferedSatSolver::new(Box::new(move |r| {
                exec_solver(r, &program, &options)
            })),
        }
    }
}

impl SatSolver for ExternalSatSolver {
    fn add_clause(&mut self, cl: Vec<Literal>) {
        self.inner.add_clause(cl)
    }

    fn solve(&mut self) -> SolvingResult {
        self.inner.solve()
    }

    fn solve_under_assumptions(&mut self, assumptions: &[Literal]) -> SolvingResult {
        self.inner
            .solve_under_assumptions(assumptions)
    }

    fn n_vars(&self) -> usize {
        self.inner.n_vars()
    }

    fn add_listener(&mut self, listener: Box<dyn SolvingListener>) {
        self.inner.add_listener(listener);
    }

    fn reserve(&mut self, new_max_id: usize) {
        self.inner.reserve(new_max_id)
    }
}

/// Spawns a solver process, feeds it the instance on its standard input and
/// returns a reader on its standard output.
pub(crate) fn exec_solver<R>(mut instance: R, program: &str, options: &[String]) -> Box<dyn Read>
where
    R: Read + Send + 'static,
{
    let mut child = Command::new(program)
        .args(options)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("cannot spawn the solver process");
    let mut stdin = child.stdin.take().expect("cannot access the solver stdin");
    std::thread::spawn(move || {
        std::io::copy(&mut instance, &mut stdin)
            .expect("cannot feed the instance to the solver");
        stdin.flush()
    });
    let stdout = child.stdout.take().expect("cannot access the solver stdout");
    child.wait().expect("cannot wait for the solver process");
    Box::new(stdout)
}
