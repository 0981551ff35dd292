use super::{cli_manager::logging_level_cli_arg, command::Command, common};
use anyhow::{anyhow, Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::warn;
use rhetor::{
    aa::{read_problem_string, AAFramework, Argument, LabelType, Query, Semantics},
    encodings::{CompleteLabelingEncoder, ConstraintsEncoder, StableLabelingEncoder},
    io::{AspartixReader, AspartixWriter, Iccma23Reader, InstanceReader, ResponseWriter},
    solvers::{
        compute_extensions_with_budget, compute_one_extension_with_budget, query_with_certificate,
        Cf2SemanticsSolver, CompleteSemanticsSolver, CredulousAcceptanceComputer,
        GroundedSemanticsSolver, IdealSemanticsSolver, IncrementalAcceptabilityComputer,
        MaxSatAcceptabilityComputer, SingleExtensionComputer, SkepticalAcceptanceComputer,
        StableSemanticsSolver,
    },
};

const CMD_NAME: &str = "solve";

const ARG_CERTIFICATE: &str = "CERTIFICATE";
const ARG_ACCEPTABILITY_MODE: &str = "ACCEPTABILITY_MODE";

/// The command dedicated to the computation of extensions and acceptance statuses.
pub(crate) struct SolveCommand;

impl SolveCommand {
    pub(crate) fn new() -> Self {
        SolveCommand
    }
}

impl<'a> Command<'a> for SolveCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Solves an argumentation framework problem")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .args(&common::problem_args())
            .arg(common::reader_arg())
            .arg(common::budget_arg())
            .arg(
                Arg::with_name(ARG_CERTIFICATE)
                    .long("with-certificate")
                    .takes_value(false)
                    .help("display a certificate along with the acceptance status")
                    .required(false),
            )
            .arg(
                Arg::with_name(ARG_ACCEPTABILITY_MODE)
                    .long("acceptability-mode")
                    .empty_values(false)
                    .multiple(false)
                    .possible_values(&["direct", "incremental-sat", "maxsat"])
                    .default_value("direct")
                    .help("the strategy used for DC queries on the CO and ST semantics; the non-direct ones list every accepted argument")
                    .required(false),
            )
            .args(&common::external_sat_solver_args())
            .args(&common::external_maxsat_solver_args())
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        match arg_matches.value_of(common::ARG_READER).unwrap() {
            "apx" => execute_with_reader(arg_matches, &mut AspartixReader::default()),
            "iccma23" => execute_with_reader(arg_matches, &mut Iccma23Reader::default()),
            _ => unreachable!("clap checks the reader against its possible values"),
        }
    }
}

fn execute_with_reader<T>(
    arg_matches: &ArgMatches<'_>,
    reader: &mut dyn InstanceReader<T>,
) -> Result<()>
where
    T: LabelType,
{
    let file = arg_matches.value_of(common::ARG_INPUT).unwrap();
    let af = common::read_file_path(file, reader)?;
    let arg = arg_matches
        .value_of(common::ARG_ARG)
        .map(|a| reader.read_arg_from_str(&af, a))
        .transpose()
        .context("while parsing the argument passed to the command line")?;
    let (query, semantics) =
        read_problem_string(arg_matches.value_of(common::ARG_PROBLEM).unwrap())?;
    let budget = common::read_budget(arg_matches)?;
    match arg_matches.value_of(ARG_ACCEPTABILITY_MODE).unwrap() {
        "direct" => {}
        mode => return list_acceptable_arguments(&af, query, semantics, mode, arg_matches),
    }
    check_arg_definition(query, &arg)?;
    match query {
        Query::SE => compute_one_extension(&af, semantics, budget, arg_matches),
        Query::EE => enumerate_extensions(&af, semantics, budget),
        Query::DC | Query::DS => {
            check_acceptance(&af, semantics, query, arg.unwrap(), budget, arg_matches)
        }
    }
}

fn check_arg_definition<T>(query: Query, arg: &Option<&Argument<T>>) -> Result<()>
where
    T: LabelType,
{
    match query {
        Query::SE | Query::EE => {
            if arg.is_some() {
                warn!(
                    "unexpected argument on the command line (useless for query {})",
                    query.to_short_str()
                );
            }
            Ok(())
        }
        Query::DC | Query::DS => {
            if arg.is_none() {
                Err(anyhow!(
                    "missing argument on the command line (required for query {})",
                    query.to_short_str()
                ))
            } else {
                Ok(())
            }
        }
    }
}

fn compute_one_extension<T>(
    af: &AAFramework<T>,
    semantics: Semantics,
    budget: Option<usize>,
    arg_matches: &ArgMatches<'_>,
) -> Result<()>
where
    T: LabelType,
{
    let writer = AspartixWriter::default();
    let mut out = std::io::stdout();
    let mut solver: Box<dyn SingleExtensionComputer<T> + '_> = match semantics {
        Semantics::GR | Semantics::CO => Box::new(GroundedSemanticsSolver::new(af)),
        Semantics::ST => Box::new(StableSemanticsSolver::new_with_sat_solver_factory(
            af,
            common::create_sat_solver_factory(arg_matches)?,
        )),
        Semantics::ID => {
            let mut solver = IdealSemanticsSolver::new(af);
            solver.set_budget(budget);
            Box::new(solver)
        }
        Semantics::CF2 => {
            let mut solver = Cf2SemanticsSolver::new(af);
            solver.set_budget(budget);
            Box::new(solver)
        }
        _ => {
            return match compute_one_extension_with_budget(af, semantics, budget)? {
                Some(ext) => writer.write_single_extension(&mut out, &ext),
                None => ResponseWriter::<T>::write_no_extension(&writer, &mut out),
            }
        }
    };
    match solver.compute_one_extension()? {
        Some(ext) => writer.write_single_extension(&mut out, &ext),
        None => ResponseWriter::<T>::write_no_extension(&writer, &mut out),
    }
}

fn enumerate_extensions<T>(
    af: &AAFramework<T>,
    semantics: Semantics,
    budget: Option<usize>,
) -> Result<()>
where
    T: LabelType,
{
    let writer = AspartixWriter::default();
    let mut out = std::io::stdout();
    for extension in compute_extensions_with_budget(af, semantics, budget)? {
        writer.write_single_extension(&mut out, &extension)?;
    }
    Ok(())
}

fn check_acceptance<T>(
    af: &AAFramework<T>,
    semantics: Semantics,
    query: Query,
    arg: &Argument<T>,
    budget: Option<usize>,
    arg_matches: &ArgMatches<'_>,
) -> Result<()>
where
    T: LabelType,
{
    let with_certificate = arg_matches.is_present(ARG_CERTIFICATE);
    match (query, semantics) {
        (Query::DC, Semantics::CO) => {
            let mut solver = CompleteSemanticsSolver::new_with_sat_solver_factory(
                af,
                common::create_sat_solver_factory(arg_matches)?,
            );
            let (status, certificate) = solver.is_credulously_accepted_with_certificate(arg)?;
            write_acceptance(status, certificate, with_certificate)
        }
        (Query::DS, Semantics::CO) => {
            let mut solver = CompleteSemanticsSolver::new_with_sat_solver_factory(
                af,
                common::create_sat_solver_factory(arg_matches)?,
            );
            let (status, certificate) = solver.is_skeptically_accepted_with_certificate(arg)?;
            write_acceptance(status, certificate, with_certificate)
        }
        (Query::DC, Semantics::ST) => {
            let mut solver = StableSemanticsSolver::new_with_sat_solver_factory(
                af,
                common::create_sat_solver_factory(arg_matches)?,
            );
            let (status, certificate) = solver.is_credulously_accepted_with_certificate(arg)?;
            write_acceptance(status, certificate, with_certificate)
        }
        (Query::DS, Semantics::ST) => {
            let mut solver = StableSemanticsSolver::new_with_sat_solver_factory(
                af,
                common::create_sat_solver_factory(arg_matches)?,
            );
            let (status, certificate) = solver.is_skeptically_accepted_with_certificate(arg)?;
            write_acceptance(status, certificate, with_certificate)
        }
        _ => {
            let (status, certificate) = query_with_certificate(af, arg, semantics, query, budget)?;
            write_acceptance(status, certificate, with_certificate)
        }
    }
}

fn write_acceptance<T>(
    status: bool,
    certificate: Option<Vec<&Argument<T>>>,
    with_certificate: bool,
) -> Result<()>
where
    T: LabelType,
{
    let writer = AspartixWriter::default();
    let mut out = std::io::stdout();
    ResponseWriter::<T>::write_acceptance_status(&writer, &mut out, status)?;
    if with_certificate {
        if let Some(certificate) = certificate {
            writer.write_single_extension(&mut out, &certificate)?;
        }
    }
    Ok(())
}

fn list_acceptable_arguments<T>(
    af: &AAFramework<T>,
    query: Query,
    semantics: Semantics,
    mode: &str,
    arg_matches: &ArgMatches<'_>,
) -> Result<()>
where
    T: LabelType,
{
    if query != Query::DC {
        return Err(anyhow!(
            r#"the "{}" acceptability mode only applies to DC queries"#,
            mode
        ));
    }
    let constraints_encoder: Box<dyn ConstraintsEncoder<T>> = match semantics {
        Semantics::CO => Box::new(CompleteLabelingEncoder),
        Semantics::ST => Box::new(StableLabelingEncoder::default()),
        _ => {
            return Err(anyhow!(
                r#"the "{}" acceptability mode only applies to the CO and ST semantics"#,
                mode
            ))
        }
    };
    let acceptable = match mode {
        "incremental-sat" => {
            let mut computer =
                IncrementalAcceptabilityComputer::new_with_sat_solver_factory_and_constraints_encoder(
                    af,
                    common::create_sat_solver_factory(arg_matches)?,
                    constraints_encoder,
                );
            computer.compute_acceptable_arguments()?
        }
        "maxsat" => {
            let solver_factory = common::create_maxsat_solver_factory(arg_matches)?.ok_or_else(
                || anyhow!(r#"the "maxsat" acceptability mode requires an external MaxSAT solver"#),
            )?;
            let mut computer = MaxSatAcceptabilityComputer::new_with_constraints_encoder(
                af,
                solver_factory,
                constraints_encoder,
            );
            computer.compute_acceptable_arguments()?
        }
        _ => unreachable!("clap checks the acceptability mode against its possible values"),
    };
    let writer = AspartixWriter::default();
    let mut out = std::io::stdout();
    writer.write_single_extension(&mut out, &acceptable)
}
