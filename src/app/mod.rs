mod app_helper;

mod authors_command;
pub(crate) use authors_command::AuthorsCommand;

mod cli_manager;

mod command;
pub(crate) use command::Command;

pub(crate) mod common;

mod problems_command;
pub(crate) use problems_command::ProblemsCommand;

mod rank_command;
pub(crate) use rank_command::RankCommand;

mod solve_command;
pub(crate) use solve_command::SolveCommand;

mod writable_string;
