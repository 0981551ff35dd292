use anyhow::Result;
use clap::{App, ArgMatches};

/// A trait for the subcommands of the app.
///
/// A command declares its CLI surface as a clap subcommand and executes
/// itself against the matched arguments.
/// Command names must be unique within the app.
pub trait Command<'a> {
    /// Returns the name of the command.
    fn name(&self) -> &str;

    /// Returns the clap subcommand describing the available CLI arguments for this command.
    fn clap_subcommand(&self) -> App<'a, 'a>;

    /// Executes the command given the matches produced by clap.
    ///
    /// Returning `Ok(())` makes the app exit with a success status code.
    ///
    /// # Arguments
    ///
    /// * `arg_matches` - the arguments for the command
    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()>;
}
