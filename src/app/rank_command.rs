use super::{cli_manager::logging_level_cli_arg, command::Command, common};
use anyhow::{anyhow, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use rhetor::{
    aa::{AAFramework, LabelType},
    io::{AspartixReader, Iccma23Reader, InstanceReader},
    rankings::{compute_ranking_with_budget, Ranking, RankingKind},
};
use std::str::FromStr;
use strum::VariantNames;

const CMD_NAME: &str = "rank";

const ARG_KIND: &str = "KIND";

/// The command dedicated to the computation of argument rankings.
pub(crate) struct RankCommand;

impl RankCommand {
    pub(crate) fn new() -> Self {
        RankCommand
    }
}

impl<'a> Command<'a> for RankCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Ranks the arguments of an argumentation framework")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(
                Arg::with_name(ARG_KIND)
                    .short("k")
                    .long("kind")
                    .empty_values(false)
                    .multiple(false)
                    .possible_values(RankingKind::VARIANTS)
                    .help("the ranking-based semantics to compute")
                    .required(true),
            )
            .arg(common::reader_arg())
            .arg(common::budget_arg())
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
    let af: AAFramework<T> = common::read_file_path(file, reader)?;
    let str_kind = arg_matches.value_of(ARG_KIND).unwrap();
    let kind = RankingKind::from_str(str_kind)
        .map_err(|_| anyhow!(r#"undefined ranking kind "{}""#, str_kind))?;
    let budget = common::read_budget(arg_matches)?;
    match compute_ranking_with_budget(&af, kind, budget)? {
        Ranking::Numerical(ranking) => ranking
            .iter()
            .for_each(|(arg, value)| println!("value({})={}", arg, value)),
        Ranking::Lattice(ranking) => {
            ranking
                .iter_strict_pairs()
                .for_each(|(more, less)| println!("{} > {}", more, less));
            ranking
                .iter_equivalent_pairs()
                .for_each(|(first, second)| println!("{} = {}", first, second));
        }
    }
    Ok(())
}
