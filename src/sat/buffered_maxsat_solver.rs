use super::{
    maxsat_solver::MaxSatSolver,
    sat_solver::{SolvingListener, SolvingResult},
    Assignment, Literal, SatSolver,
};
use std::io::{BufRead, BufReader, Cursor, Read};

/// A function mapping a WCNF instance to the output of a MaxSAT solver.
///
/// Such functions back [`BufferedMaxSatSolver`] objects.
/// In the tests, closures of this kind act as deterministic fake oracles.
pub type MaxSatSolvingFn = dyn Fn(WcnfInstanceRead) -> Box<dyn Read>;

/// A [`Read`] implementation giving access to a WCNF instance.
///
/// The preamble, the clauses and the assumptions (encoded as hard unit clauses)
/// are read in sequence.
pub struct WcnfInstanceRead {
    preamble: Cursor<String>,
    clauses: Cursor<String>,
    assumptions: Cursor<String>,
}

impl Read for WcnfInstanceRead {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let r = self.preamble.read(buf)?;
        if r > 0 {
            return Ok(r);
        }
        let r = self.clauses.read(buf)?;
        if r > 0 {
            return Ok(r);
        }
        let r = self.assumptions.read(buf)?;
        if r > 0 {
            return Ok(r);
        }
        Ok(0)
    }
}

/// A MaxSAT solver that buffers the clauses as WCNF text and delegates the
/// solving process to a function.
///
/// The instance follows the weighted partial WCNF convention with an explicit
/// top weight in the preamble; hard clauses carry the top weight.
/// The solving function returns a reader on an output following the MaxSAT
/// evaluation conventions (`o` cost lines, `s` status line, `v` value lines).
pub struct BufferedMaxSatSolver {
    n_vars: usize,
    hard_clauses: Vec<String>,
    soft_clauses: Vec<(usize, String)>,
    solving_fn: Box<MaxSatSolvingFn>,
    listeners: Vec<Box<dyn SolvingListener>>,
}

impl BufferedMaxSatSolver {
    /// Builds a new buffered MaxSAT solver given its solving function.
    pub fn new(solving_fn: Box<MaxSatSolvingFn>) -> Self {
        Self {
            n_vars: 0,
            hard_clauses: Vec::new(),
            soft_clauses: Vec::new(),
            solving_fn,
            listeners: Vec::new(),
        }
    }

    fn clause_body(&mut self, cl: Vec<Literal>) -> String {
        let mut body = String::new();
        cl.iter().for_each(|l| {
            self.n_vars = usize::max(self.n_vars, usize::from(l.var()));
            body.push_str(&format!("{} ", l));
        });
        body.push('0');
        body.push('\n');
        body
    }

    fn top_weight(&self) -> usize {
        1 + self.soft_clauses.iter().map(|(w, _)| *w).sum::<usize>()
    }

    fn parse_solver_output(&self, output: Box<dyn Read>) -> SolvingResult {
        let context = "error while reading solving function output in BufferedMaxSatSolver";
        let mut status = None;
        let mut assignment = vec![None; self.n_vars];
        let mut assignment_line_seen = false;
        for line in BufReader::new(output).lines().map(|r| match r {
            Ok(l) => l,
            Err(e) => panic!("{}: {}", context, e),
        }) {
            let mut set_status = |b| {
                if status.is_some() {
                    panic!("{}: multiple status lines", context)
                }
                status = Some(b);
            };
            if line == "s OPTIMUM FOUND" || line == "s SATISFIABLE" {
                set_status(true);
            } else if line == "s UNSATISFIABLE" {
                set_status(false);
            } else if line.starts_with("v ") {
                assignment_line_seen = true;
                line.split_ascii_whitespace().skip(1).for_each(|w| {
                    let n = match w.parse::<isize>() {
                        Ok(n) => n,
                        Err(_) => panic!(r#"{}: "{}" is not a literal"#, context, w),
                    };
                    if n != 0 {
                        let v = n.unsigned_abs() - 1;
                        if v >= self.n_vars {
                            panic!("{}: a variable in value line is out of bounds", context)
                        }
                        assignment[v] = Some(n > 0);
                    }
                });
            } else if !line.starts_with("o ")
                && !line.starts_with("c ")
                && line != "c"
                && line != "v"
                && !line.is_empty()
            {
                panic!(r#"{}: unexpected line "{}""#, context, line)
            }
        }
        match status {
            Some(true) => {
                if assignment_line_seen {
                    SolvingResult::Satisfiable(Assignment::new(assignment))
                } else {
                    SolvingResult::Unknown
                }
            }
            Some(false) => SolvingResult::Unsatisfiable,
            None => SolvingResult::Unknown,
        }
    }
}

impl SatSolver for BufferedMaxSatSolver {
    fn add_clause(&mut self, cl: Vec<Literal>) {
        let body = self.clause_body(cl);
        self.hard_clauses.push(body);
    }

    fn solve(&mut self) -> SolvingResult {
        self.solve_under_assumptions(&[])
    }

    fn solve_under_assumptions(&mut self, assumptions: &[Literal]) -> SolvingResult {
        let n_clauses = self.hard_clauses.len() + self.soft_clauses.len() + assumptions.len();
        self.listeners
            .iter()
            .for_each(|l| l.solving_start(self.n_vars, n_clauses));
        let top = self.top_weight();
        let preamble = format!("p wcnf {} {} {}\n", self.n_vars, n_clauses, top);
        let mut clauses = String::new();
        self.hard_clauses
            .iter()
            .for_each(|body| clauses.push_str(&format!("{} {}", top, body)));
        self.soft_clauses
            .iter()
            .for_each(|(w, body)| clauses.push_str(&format!("{} {}", w, body)));
        let assumptions =
            assumptions
                .iter()
                .map(|a| format!("{} {} 0\n", top, a))
                .fold(String::new(), |mut acc, a| {
                    acc.push_str(&a);
                    acc
                });
        let instance_reader = WcnfInstanceRead {
            preamble: Cursor::new(preamble),
            clauses: Cursor::new(clauses),
            assumptions: Cursor::new(assumptions),
        };
        let solver_output = (self.solving_fn)(instance_reader);
        let solving_result = self.parse_solver_output(solver_output);
        self.listeners
            .iter()
            .for_each(|l| l.solving_end(&solving_result));
        solving_result
    }

    fn n_vars(&self) -> usize {
        self.n_vars
    }

    fn add_listener(&mut self, listener: Box<dyn SolvingListener>) {
        self.listeners.push(listener);
    }

    fn reserve(&mut self, new_max_id: usize) {
        if new_max_id > self.n_vars {
            self.n_vars = new_max_id;
        }
    }
}

impl MaxSatSolver for BufferedMaxSatSolver {
    fn add_soft_clause(&mut self, cl: Vec<Literal>, weight: usize) {
        let body = self.clause_body(cl);
        self.soft_clauses.push((weight, body));
    }

    fn as_sat_solver_mut(&mut self) -> &mut dyn SatSolver {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause;

    fn input_check_solving_fn(expected_input: &'static str) -> Box<MaxSatSolvingFn> {
        Box::new(move |mut r| {
            let mut buffer = String::new();
            r.read_to_string(&mut buffer).unwrap();
            assert_eq!(expected_input, buffer);
            Box::new(&[] as &[u8])
        })
    }

    #[test]
    fn test_input_ok() {
        let expected = "p wcnf 2 3 3\n3 -1 -2 0\n1 1 0\n2 2 0\n";
        let mut s = BufferedMaxSatSolver::new(input_check_solving_fn(expected));
        s.add_clause(clause![-1, -2]);
        s.add_soft_clause(clause![1], 1);
        s.add_soft_clause(clause![2], 2);
        s.solve();
    }

    #[test]
    fn test_input_with_assumptions() {
        let expected = "p wcnf 1 2 2\n1 1 0\n2 -1 0\n";
        let mut s = BufferedMaxSatSolver::new(input_check_solving_fn(expected));
        s.add_soft_clause(clause![1], 1);
        s.solve_under_assumptions(&[Literal::from(-1)]);
    }

    fn fake_output_solving_fn(output: &'static str) -> Box<MaxSatSolvingFn> {
        Box::new(|_| Box::new(output.as_bytes()))
    }

    #[test]
    fn test_output_optimum_ok() {
        let solver_output = "o 1\ns OPTIMUM FOUND\nv -1 2 0\n";
        let mut s = BufferedMaxSatSolver::new(fake_output_solving_fn(solver_output));
        s.add_clause(clause![-1, 2]);
        s.add_soft_clause(clause![1], 1);
        let assignment = s.solve().unwrap_model().unwrap();
        assert!(!assignment.value_of(1).unwrap());
        assert!(assignment.value_of(2).unwrap());
    }

    #[test]
    fn test_output_unsat_ok() {
        let solver_output = "s UNSATISFIABLE\n";
        let mut s = BufferedMaxSatSolver::new(fake_output_solving_fn(solver_output));
        s.add_clause(clause![1]);
        s.add_clause(clause![-1]);
        assert!(s.solve().unwrap_model().is_none());
    }

    #[test]
    fn test_output_no_status_line() {
        let solver_output = "o 1\n";
        let mut s = BufferedMaxSatSolver::new(fake_output_solving_fn(solver_output));
        s.add_soft_clause(clause![1], 1);
        assert_eq!(SolvingResult::Unknown, s.solve());
    }

    #[test]
    #[should_panic(
        expected = r#"error while reading solving function output in BufferedMaxSatSolver: unexpected line "foo""#
    )]
    fn test_output_unexpected_line() {
        let solver_output = "foo\ns OPTIMUM FOUND\nv 1 0\n";
        let mut s = BufferedMaxSatSolver::new(fake_output_solving_fn(solver_output));
        s.add_soft_clause(clause![1], 1);
        s.solve();
    }
}
