use super::{
    app_helper::{init_logger, init_logger_with_level},
    command::Command,
    writable_string::WritableString,
};
use anyhow::{anyhow, Result};
use clap::{App, AppSettings, Arg};
use log::info;
use std::{ffi::OsString, str::FromStr};
use sysinfo::System;

/// Handles the set of commands and processes the CLI arguments against them.
pub(crate) struct CliManager<'a> {
    app_name: &'a str,
    version: &'a str,
    author: &'a str,
    about: &'a str,
    commands: Vec<Box<dyn Command<'a>>>,
}

pub(crate) const ARG_LOGGING_LEVEL: &str = "LOGGING_LEVEL";

pub(crate) fn logging_level_cli_arg<'a>() -> Arg<'a, 'a> {
    Arg::with_name(ARG_LOGGING_LEVEL)
        .long("logging-level")
        .multiple(false)
        .default_value("info")
        .possible_values(&["trace", "debug", "info", "warn", "error", "off"])
        .help("set the minimal logging level")
}

impl<'a> CliManager<'a> {
    pub fn new(app_name: &'a str, version: &'a str, author: &'a str, about: &'a str) -> Self {
        CliManager {
            app_name,
            version,
            author,
            about,
            commands: vec![],
        }
    }

    pub fn add_command(&mut self, command: Box<dyn Command<'a>>) {
        self.commands.push(command);
    }

    pub fn parse_cli<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<T> = args.into_iter().collect();
        let mut app = self.clap_app();
        match app.clone().get_matches_from_safe(args.iter().cloned()) {
            Ok(matches) => self.execute_matched_command(&matches),
            Err(clap::Error {
                kind: clap::ErrorKind::HelpDisplayed,
                ..
            }) => {
                init_logger();
                self.print_help(&mut app, args.as_slice());
                Ok(())
            }
            Err(e) => {
                init_logger();
                info!("{} {}", self.app_name, self.version);
                Err(anyhow!("{}", e))
            }
        }
    }

    fn clap_app(&self) -> App<'a, 'a> {
        let mut app = App::new(self.app_name)
            .global_setting(AppSettings::DisableVersion)
            .global_setting(AppSettings::VersionlessSubcommands)
            .setting(AppSettings::NeedsSubcommandHelp)
            .setting(AppSettings::SubcommandRequired)
            .version(self.version)
            .author(self.author)
            .about(self.about);
        for c in &self.commands {
            app = app.subcommand(c.clap_subcommand());
        }
        app
    }

    fn execute_matched_command(&self, matches: &clap::ArgMatches<'_>) -> Result<()> {
        let command = self
            .commands
            .iter()
            .find(|c| matches.subcommand_matches(c.name()).is_some())
            .expect("a subcommand match always names a registered command");
        let matches = matches.subcommand_matches(command.name()).unwrap();
        let log_level = matches
            .value_of(ARG_LOGGING_LEVEL)
            .map(|s| log::LevelFilter::from_str(s).unwrap())
            .unwrap_or(log::LevelFilter::Info);
        init_logger_with_level(log_level);
        info!("{} {}", self.app_name, self.version);
        log_sys_info();
        command.execute(matches)
    }

    fn print_help<T>(&self, app: &mut App, args: &[T])
    where
        T: Into<OsString> + Clone,
    {
        const HELP_STRINGS: [&str; 3] = ["help", "-h", "--help"];
        let arg_str = |i: usize| args[i].clone().into().into_string().unwrap();
        // "app sub -h" asks for the subcommand help; so does "app help sub".
        let subcommand_name = if args.len() >= 3 && HELP_STRINGS.contains(&arg_str(1).as_str()) {
            Some(arg_str(2))
        } else if args.len() >= 2 && !HELP_STRINGS.contains(&arg_str(1).as_str()) {
            Some(arg_str(1))
        } else {
            None
        };
        let mut message = WritableString::default();
        match subcommand_name.and_then(|n| self.commands.iter().find(|c| c.name() == n)) {
            Some(c) => c.clap_subcommand().write_long_help(&mut message).unwrap(),
            None => app.write_long_help(&mut message).unwrap(),
        }
        message.to_string().split('\n').for_each(|s| info!("{}", s));
        info!("");
    }
}

fn log_sys_info() {
    info!("----------------------------------------");
    let sys = System::new_all();
    let unknown = || "[unknown]".to_string();
    info!("running on {}", System::host_name().unwrap_or_else(unknown));
    info!(
        "OS is {} {} with kernel {}",
        System::name().unwrap_or_else(unknown),
        System::os_version().unwrap_or_else(unknown),
        System::kernel_version().unwrap_or_else(unknown)
    );
    let mut cpu_brands: Vec<&str> = sys.cpus().iter().map(|c| c.brand()).collect();
    cpu_brands.sort_unstable();
    cpu_brands.dedup();
    info!(
        "physical core count: {} {:?}",
        sys.physical_core_count().unwrap_or_default(),
        cpu_brands
    );
    info!("total memory: {} bytes", sys.total_memory());
    info!("----------------------------------------");
}
