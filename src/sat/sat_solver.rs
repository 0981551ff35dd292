use super::cadical_solver::CadicalSolver;
use std::{
    fmt::Display,
    num::{NonZeroIsize, NonZeroUsize},
};

/// A variable in a SAT solver.
///
/// Variables are non-null positive integers and are built from any integer
/// type through the [From] trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variable(NonZeroUsize);

macro_rules! var_from_int {
    ($($t:ty),+) => {$(
        impl From<$t> for Variable {
            fn from(v: $t) -> Self {
                let raw = usize::try_from(v).expect("variables are positive integers");
                Self(NonZeroUsize::new(raw).expect("variables cannot be null"))
            }
        }
    )+};
}
var_from_int!(usize, u128, u64, u32, u16, u8, isize, i128, i64, i32, i16, i8);

impl From<Variable> for usize {
    fn from(v: Variable) -> Self {
        v.0.into()
    }
}

/// A literal in a SAT solver.
///
/// Literals are non-null integers and are built from any signed integer type
/// through the [From] trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal(NonZeroIsize);

impl Literal {
    /// Returns the negation of this literal.
    pub fn negate(self) -> Self {
        Self::from(-self.0.get())
    }

    /// Returns the variable this literal is built on.
    pub fn var(&self) -> Variable {
        Variable(self.0.unsigned_abs())
    }
}

macro_rules! lit_from_int {
    ($($t:ty),+) => {$(
        impl From<$t> for Literal {
            fn from(l: $t) -> Self {
                let raw = isize::try_from(l).expect("literals must fit in an isize");
                Self(NonZeroIsize::new(raw).expect("literals cannot be null"))
            }
        }
    )+};
}
lit_from_int!(isize, i128, i64, i32, i16, i8);

impl From<Literal> for isize {
    fn from(l: Literal) -> Self {
        l.0.into()
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Builds a clause from a list of integers.
#[macro_export]
macro_rules! clause {
    () => (
        vec![] as Vec<Literal>
    );
    ($($x:expr),+ $(,)?) => (
        vec![$(Literal::from($x)),+]
    );
}

/// An assignment of a set of variables.
///
/// Some of the variables involved in the assignment may be left unassigned,
/// hence the [Option<bool>] values.
#[derive(Debug, PartialEq, Eq)]
pub struct Assignment {
    values: Vec<Option<bool>>,
}

impl Assignment {
    pub(crate) fn new(values: Vec<Option<bool>>) -> Self {
        Self { values }
    }

    /// Returns the value assigned to a variable, or [Option::None] if the
    /// variable is left unassigned.
    pub fn value_of<T>(&self, v: T) -> Option<bool>
    where
        T: Into<Variable>,
    {
        self.values[usize::from(v.into()) - 1]
    }
}

/// The result of a call to a SAT solver.
#[derive(Debug, PartialEq, Eq)]
pub enum SolvingResult {
    /// The instance is satisfiable; a model is given.
    Satisfiable(Assignment),
    /// The instance is unsatisfiable.
    Unsatisfiable,
    /// The solver was unable to decide the instance.
    Unknown,
}

impl SolvingResult {
    /// Returns the underlying model if it exists, or [Option::None].
    ///
    /// # Panics
    ///
    /// Panics if the solving result is [SolvingResult::Unknown].
    pub fn unwrap_model(self) -> Option<Assignment> {
        match self {
            SolvingResult::Satisfiable(model) => Some(model),
            SolvingResult::Unsatisfiable => None,
            SolvingResult::Unknown => {
                panic!(r#"cannot unwrap solving result when the solver returned "Unknown""#)
            }
        }
    }
}

/// A trait for objects listening to the activity of a SAT solver.
pub trait SolvingListener {
    /// Called when a solving process begins.
    fn solving_start(&self, n_vars: usize, n_clauses: usize);

    /// Called when a solving process ends.
    fn solving_end(&self, result: &SolvingResult);
}

/// A trait for SAT solvers.
pub trait SatSolver {
    /// Adds a clause to this solver.
    fn add_clause(&mut self, cl: Vec<Literal>);

    /// Solves the problem formed by the clauses added so far.
    fn solve(&mut self) -> SolvingResult;

    /// Solves the problem formed by the clauses added so far and the provided assumptions.
    fn solve_under_assumptions(&mut self, assumptions: &[Literal]) -> SolvingResult;

    /// Returns the number of variables declared so far in this solver.
    fn n_vars(&self) -> usize;

    /// Adds a listener notified of the solving activity of this solver.
    fn add_listener(&mut self, listener: Box<dyn SolvingListener>);

    /// Declares the variables with an id lower or equal to the provided one,
    /// even if no clause refers to them yet.
    fn reserve(&mut self, new_max_id: usize);
}

/// A function able to create SAT solvers.
pub type SatSolverFactoryFn = dyn Fn() -> Box<dyn SatSolver>;

/// Returns the default SAT solver (Cadical).
pub fn default_solver() -> Box<dyn SatSolver> {
    Box::new(CadicalSolver::default())
}
