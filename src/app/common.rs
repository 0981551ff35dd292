use super::{
    app_helper::AppHelper, command::Command, AuthorsCommand, ProblemsCommand, RankCommand,
    SolveCommand,
};
use anyhow::{Context, Result};
use clap::{Arg, ArgMatches};
use log::{info, warn};
use rhetor::{
    aa::{AAFramework, LabelType},
    io::InstanceReader,
    sat::{
        self, ExternalMaxSatSolver, ExternalSatSolver, MaxSatSolverFactoryFn, SatSolver,
        SatSolverFactoryFn, SolvingListener, SolvingResult,
    },
};
use std::{
    fs::{self, File},
    io::{BufReader, Read},
    path::PathBuf,
};

pub(crate) fn create_app_helper() -> AppHelper<'static> {
    let app_name = option_env!("CARGO_PKG_NAME").unwrap_or("unknown app name");
    let app_version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown version");
    let authors = option_env!("CARGO_PKG_AUTHORS").unwrap_or("unknown authors");
    let mut app = AppHelper::new(
        app_name,
        app_version,
        authors,
        "Rhetor, an abstract argumentation extension and ranking engine.",
    );
    app.add_command(Box::new(AuthorsCommand::new(app_name, app_version, authors)));
    app.add_command(Box::new(ProblemsCommand::new()));
    app.add_command(Box::new(RankCommand::new()));
    app.add_command(Box::new(SolveCommand::new()));
    app
}

fn single_valued_arg(name: &'static str, help: &'static str) -> Arg<'static, 'static> {
    Arg::with_name(name)
        .empty_values(false)
        .multiple(false)
        .help(help)
        .required(false)
}

pub(crate) const ARG_INPUT: &str = "INPUT";

pub(crate) fn input_args() -> Arg<'static, 'static> {
    single_valued_arg(ARG_INPUT, "the input file that contains the AF")
        .short("f")
        .required(true)
}

pub(crate) const ARG_PROBLEM: &str = "PROBLEM";
pub(crate) const ARG_ARG: &str = "ARG";

pub(crate) fn problem_args() -> Vec<Arg<'static, 'static>> {
    vec![
        single_valued_arg(ARG_PROBLEM, "the problem to solve")
            .short("p")
            .required(true),
        single_valued_arg(ARG_ARG, "the argument (for DC/DS queries)").short("a"),
    ]
}

pub(crate) const ARG_READER: &str = "READER";

pub(crate) fn reader_arg() -> Arg<'static, 'static> {
    single_valued_arg(ARG_READER, "the input file format")
        .short("r")
        .long("reader")
        .possible_values(&["apx", "iccma23"])
        .default_value("iccma23")
}

pub(crate) const ARG_BUDGET: &str = "BUDGET";

pub(crate) fn budget_arg() -> Arg<'static, 'static> {
    single_valued_arg(
        ARG_BUDGET,
        "the maximal number of candidate sets examined by the enumerating strategies",
    )
    .long("budget")
}

pub(crate) fn read_budget(arg_matches: &ArgMatches<'_>) -> Result<Option<usize>> {
    arg_matches
        .value_of(ARG_BUDGET)
        .map(|s| {
            s.parse::<usize>()
                .with_context(|| format!(r#"while parsing the budget "{}""#, s))
        })
        .transpose()
}

pub(crate) fn read_file_path<T>(
    file_path: &str,
    reader: &mut dyn InstanceReader<T>,
) -> Result<AAFramework<T>>
where
    T: LabelType,
{
    reader.add_warning_handler(Box::new(|line, msg| warn!("at line {}: {}", line, msg)));
    let af = read_file_path_with(file_path, &|r| reader.read(r))?;
    info!(
        "the argumentation framework has {} argument(s) and {} attack(s)",
        af.n_arguments(),
        af.n_attacks(),
    );
    Ok(af)
}

pub(crate) fn read_file_path_with<F, R>(file_path: &str, reader: &F) -> Result<R>
where
    F: Fn(&mut dyn Read) -> Result<R>,
{
    let canonicalized = canonicalize_file_path(file_path)?;
    info!("reading input file {:?}", canonicalized);
    let mut file_reader = BufReader::new(File::open(canonicalized)?);
    (reader)(&mut file_reader)
}

/// Canonicalize a path given by the user.
pub(crate) fn canonicalize_file_path(file_path: &str) -> Result<PathBuf> {
    fs::canonicalize(PathBuf::from(file_path))
        .with_context(|| format!(r#"while opening file "{}""#, file_path))
}

fn external_solver_args(
    solver_arg: &'static str,
    solver_long: &'static str,
    solver_help: &'static str,
    options_arg: &'static str,
    options_long: &'static str,
) -> Vec<Arg<'static, 'static>> {
    vec![
        single_valued_arg(solver_arg, solver_help).long(solver_long),
        Arg::with_name(options_arg)
            .long(options_long)
            .requires(solver_arg)
            .empty_values(false)
            .multiple(true)
            .help("an option to give to the external solver")
            .required(false),
    ]
}

fn external_solver_command(
    arg_matches: &ArgMatches<'_>,
    solver_arg: &str,
    options_arg: &str,
) -> Result<Option<(String, Vec<String>)>> {
    let program = match arg_matches.value_of(solver_arg) {
        Some(s) => canonicalize_file_path(s)?,
        None => return Ok(None),
    };
    let options = arg_matches
        .values_of(options_arg)
        .map(|v| v.map(str::to_string).collect::<Vec<String>>())
        .unwrap_or_default();
    Ok(Some((program.to_str().unwrap().to_string(), options)))
}

const ARG_EXTERNAL_SAT_SOLVER: &str = "EXTERNAL_SAT_SOLVER";
const ARG_EXTERNAL_SAT_SOLVER_OPTIONS: &str = "EXTERNAL_SAT_SOLVER_OPTIONS";

pub(crate) fn external_sat_solver_args() -> Vec<Arg<'static, 'static>> {
    external_solver_args(
        ARG_EXTERNAL_SAT_SOLVER,
        "external-sat-solver",
        "a path to an external SAT solver to replace the embedded one",
        ARG_EXTERNAL_SAT_SOLVER_OPTIONS,
        "external-sat-solver-opt",
    )
}

pub(crate) fn create_sat_solver_factory(
    arg_matches: &ArgMatches<'_>,
) -> Result<Box<SatSolverFactoryFn>> {
    match external_solver_command(
        arg_matches,
        ARG_EXTERNAL_SAT_SOLVER,
        ARG_EXTERNAL_SAT_SOLVER_OPTIONS,
    )? {
        Some((program, options)) => {
            info!("using {:?} for problems requiring a SAT solver", program);
            Ok(Box::new(move || {
                let mut solver = ExternalSatSolver::new(program.clone(), options.clone());
                solver.add_listener(Box::new(SatSolvingLogger));
                Box::new(solver)
            }))
        }
        None => {
            info!("using the default SAT solver for problems requiring a SAT solver");
            Ok(Box::new(|| {
                let mut solver = sat::default_solver();
                solver.add_listener(Box::new(SatSolvingLogger));
                solver
            }))
        }
    }
}

const ARG_EXTERNAL_MAXSAT_SOLVER: &str = "EXTERNAL_MAXSAT_SOLVER";
const ARG_EXTERNAL_MAXSAT_SOLVER_OPTIONS: &str = "EXTERNAL_MAXSAT_SOLVER_OPTIONS";

pub(crate) fn external_maxsat_solver_args() -> Vec<Arg<'static, 'static>> {
    external_solver_args(
        ARG_EXTERNAL_MAXSAT_SOLVER,
        "external-maxsat-solver",
        "a path to an external MaxSAT solver",
        ARG_EXTERNAL_MAXSAT_SOLVER_OPTIONS,
        "external-maxsat-solver-opt",
    )
}

pub(crate) fn create_maxsat_solver_factory(
    arg_matches: &ArgMatches<'_>,
) -> Result<Option<Box<MaxSatSolverFactoryFn>>> {
    Ok(external_solver_command(
        arg_matches,
        ARG_EXTERNAL_MAXSAT_SOLVER,
        ARG_EXTERNAL_MAXSAT_SOLVER_OPTIONS,
    )?
    .map(|(program, options)| {
        info!("using {:?} for problems requiring a MaxSAT solver", program);
        Box::new(move || {
            Box::new(ExternalMaxSatSolver::new(program.clone(), options.clone()))
                as Box<dyn sat::MaxSatSolver>
        }) as Box<MaxSatSolverFactoryFn>
    }))
}

struct SatSolvingLogger;

impl SolvingListener for SatSolvingLogger {
    fn solving_start(&self, n_vars: usize, n_clauses: usize) {
        info!(
            "launching SAT solver on an instance with {} variables and {} clauses",
            n_vars, n_clauses
        );
    }

    fn solving_end(&self, result: &SolvingResult) {
        let r = match result {
            SolvingResult::Satisfiable(_) => "SAT",
            SolvingResult::Unsatisfiable => "UNSAT",
            SolvingResult::Unknown => "UNKNOWN",
        };
        info!("SAT solver ended with result {}", r);
    }
}
