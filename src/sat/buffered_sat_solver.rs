use super::{
    sat_solver::{SolvingListener, SolvingResult},
    Assignment, Literal, SatSolver,
};
use std::io::{BufRead, BufReader, Cursor, Read};

/// A function mapping a DIMACS instance to the output of a SAT solver.
///
/// Such functions back [`BufferedSatSolver`] objects.
/// In the tests, closures of this kind act as deterministic fake oracles.
pub type SolvingFn = dyn Fn(DimacsInstanceRead) -> Box<dyn Read>;

/// A [`Read`] implementation giving access to a DIMACS instance.
pub struct DimacsInstanceRead {
    content: Cursor<String>,
}

impl Read for DimacsInstanceRead {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.content.read(buf)
    }
}

const DEFAULT_BUFFER_CAP: usize = 1 << 20;

/// A SAT solver that buffers the clauses as DIMACS text and delegates the
/// solving process to a function.
///
/// The solving function receives the whole instance and returns a reader on an
/// output following the SAT competition conventions (`s` status line, `v` value
/// lines, `c` comments).
pub struct BufferedSatSolver {
    n_vars: usize,
    n_clauses: usize,
    clauses: String,
    solving_fn: Box<SolvingFn>,
    listeners: Vec<Box<dyn SolvingListener>>,
}

impl BufferedSatSolver {
    /// Builds a new buffered SAT solver given its solving function.
    pub fn new(solving_fn: Box<SolvingFn>) -> Self {
        Self {
            n_vars: 0,
            n_clauses: 0,
            clauses: String::with_capacity(DEFAULT_BUFFER_CAP),
            solving_fn,
            listeners: Vec::new(),
        }
    }

    fn dimacs_instance(&self, assumptions: &[Literal]) -> DimacsInstanceRead {
        let mut content = format!(
            "p cnf {} {}\n",
            self.n_vars,
            self.n_clauses + assumptions.len()
        );
        content.push_str(&self.clauses);
        for a in assumptions {
            content.push_str(&format!("{} 0\n", a));
        }
        DimacsInstanceRead {
            content: Cursor::new(content),
        }
    }
}

const OUTPUT_CONTEXT: &str = "error while reading solving function output in BufferedSatSolver";

fn parse_competition_output(n_vars: usize, output: Box<dyn Read>) -> SolvingResult {
    let mut status = None;
    let mut values = vec![None; n_vars];
    let mut has_value_lines = false;
    let mut value_lines_closed = false;
    for line in BufReader::new(output).lines() {
        let line = line.unwrap_or_else(|e| panic!("{}: {}", OUTPUT_CONTEXT, e));
        if line.is_empty() || line == "c" || line == "v" || line.starts_with("c ") {
            continue;
        }
        if let Some(new_status) = match line.as_str() {
            "s SATISFIABLE" => Some(true),
            "s UNSATISFIABLE" => Some(false),
            _ => None,
        } {
            if status.replace(new_status).is_some() {
                panic!("{}: multiple status lines", OUTPUT_CONTEXT);
            }
            continue;
        }
        if let Some(literals) = line.strip_prefix("v ") {
            has_value_lines = true;
            for word in literals.split_ascii_whitespace() {
                let n = word
                    .parse::<isize>()
                    .unwrap_or_else(|_| panic!(r#"{}: "{}" is not a literal"#, OUTPUT_CONTEXT, word));
                if n == 0 {
                    if value_lines_closed {
                        panic!("{}: multiple zeroes on value line", OUTPUT_CONTEXT);
                    }
                    value_lines_closed = true;
                } else {
                    let index = n.unsigned_abs() - 1;
                    if index >= n_vars {
                        panic!("{}: a variable in value line is out of bounds", OUTPUT_CONTEXT);
                    }
                    values[index] = Some(n > 0);
                }
            }
            continue;
        }
        panic!(r#"{}: unexpected line "{}""#, OUTPUT_CONTEXT, line);
    }
    match status {
        Some(true) if has_value_lines => SolvingResult::Satisfiable(Assignment::new(values)),
        Some(false) => SolvingResult::Unsatisfiable,
        _ => SolvingResult::Unknown,
    }
}

impl SatSolver for BufferedSatSolver {
    fn add_clause(&mut self, cl: Vec<Literal>) {
        for l in &cl {
            self.n_vars = usize::max(self.n_vars, usize::from(l.var()));
            self.clauses.push_str(&format!("{} ", l));
        }
        self.clauses.push_str("0\n");
        self.n_clauses += 1;
    }

    fn solve(&mut self) -> SolvingResult {
        self.solve_under_assumptions(&[])
    }

    fn solve_under_assumptions(&mut self, assumptions: &[Literal]) -> SolvingResult {
        self.listeners
            .iter()
            .for_each(|l| l.solving_start(self.n_vars, self.n_clauses));
        let solver_output = (self.solving_fn)(self.dimacs_instance(assumptions));
        let solving_result = parse_competition_output(self.n_vars, solver_output);
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
