//! `clap`-backed implementation of the flag parser

use super::{FlagParser, HELP_FLAG, POSITIONALS, ParsedArgs, check_registration};
use crate::error::CliError;
use crate::registry::{OptionDecl, OptionKind, OptionValue};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use std::collections::HashMap;
use std::ffi::OsString;

/// Production implementation of `FlagParser`
///
/// Flags are kept as declarations and turned into a fresh `clap::Command` on every
/// parse or render, so registration order is preserved and nothing global is touched.
#[derive(Debug, Clone)]
pub struct ClapParser {
    program: String,
    flags: Vec<OptionDecl>,
}

impl ClapParser {
    /// Create a parser for `program`
    #[must_use]
    #[inline]
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self {
            program: program.into(),
            flags: Vec::new(),
        }
    }

    fn command(&self) -> Command {
        let command = Command::new(self.program.clone())
            .override_usage(format!("{} [option...] command [arg...]", self.program))
            .disable_help_flag(true)
            .disable_version_flag(true)
            .arg(
                Arg::new(HELP_FLAG)
                    .short('h')
                    .long(HELP_FLAG)
                    .action(ArgAction::SetTrue)
                    .hide(true),
            )
            .arg(
                Arg::new(POSITIONALS)
                    .action(ArgAction::Append)
                    .num_args(1..)
                    .trailing_var_arg(true)
                    .value_parser(value_parser!(String))
                    .hide(true),
            );

        self.flags
            .iter()
            .fold(command, |command, decl| command.arg(flag_arg(decl)))
    }
}

impl FlagParser for ClapParser {
    fn register_flag(&mut self, decl: &OptionDecl) -> Result<(), CliError> {
        let names: Vec<String> = self.flags.iter().map(|flag| flag.name.clone()).collect();
        check_registration(&names, decl)?;
        self.flags.push(decl.clone());
        Ok(())
    }

    fn parse(&self, argv: &[OsString]) -> Result<ParsedArgs, CliError> {
        let matches = self
            .command()
            .try_get_matches_from(argv.iter())
            .map_err(|err| {
                let rendered = err.to_string();
                let first = rendered.lines().next().unwrap_or_default();
                CliError::invalid_flags(first.strip_prefix("error: ").unwrap_or(first))
            })?;

        let values = self
            .flags
            .iter()
            .filter_map(|decl| {
                flag_value(&matches, decl).map(|value| (decl.name.clone(), value))
            })
            .collect::<HashMap<_, _>>();

        let positionals = matches
            .get_many::<String>(POSITIONALS)
            .map(|tokens| tokens.cloned().collect())
            .unwrap_or_default();

        Ok(ParsedArgs {
            values,
            positionals,
            help_requested: matches.get_flag(HELP_FLAG),
        })
    }

    fn render_options(&self) -> String {
        let mut command = self.command().help_template("{options}");
        command.render_help().to_string()
    }
}

fn flag_arg(decl: &OptionDecl) -> Arg {
    let mut arg = Arg::new(decl.name.clone())
        .long(decl.name.clone())
        .help(decl.usage.clone())
        .default_value(decl.default.to_string());

    let mut chars = decl.name.chars();
    if let (Some(short), None) = (chars.next(), chars.next()) {
        arg = arg.short(short);
    }

    arg = match decl.kind() {
        // `--flag` alone means true, `--flag=false` turns it off
        OptionKind::Bool => arg
            .num_args(0..=1)
            .require_equals(true)
            .default_missing_value("true")
            .value_parser(value_parser!(bool)),
        OptionKind::String => arg
            .value_name("STRING")
            .value_parser(value_parser!(String)),
        OptionKind::Int => arg
            .value_name("INT")
            .allow_negative_numbers(true)
            .value_parser(value_parser!(i64)),
    };

    if let Some(ref var) = decl.env {
        arg = arg.env(var.clone());
    }
    arg
}

fn flag_value(matches: &ArgMatches, decl: &OptionDecl) -> Option<OptionValue> {
    match decl.kind() {
        OptionKind::Bool => matches
            .get_one::<bool>(&decl.name)
            .copied()
            .map(OptionValue::Bool),
        OptionKind::String => matches
            .get_one::<String>(&decl.name)
            .cloned()
            .map(OptionValue::String),
        OptionKind::Int => matches
            .get_one::<i64>(&decl.name)
            .copied()
            .map(OptionValue::Int),
    }
}
