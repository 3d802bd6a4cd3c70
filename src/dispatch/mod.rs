//! Argument resolution and command dispatch

use crate::cli::Cli;
use crate::error::CliError;
use std::ffi::OsString;
use tracing::debug;

impl Cli {
    /// Parse `argv` and invoke the matching command
    ///
    /// `argv` starts with the program name. Flag parsing fills in the option values,
    /// the first remaining token names the command and the rest become its arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The flags are malformed (`InvalidFlags`)
    /// - Help was requested (`HelpRequested`)
    /// - No command token remains (`NoCommandSupplied`)
    /// - The command is not registered (`UnknownCommand`)
    /// - Fewer arguments than the command's minimum were given (`NotEnoughArguments`)
    /// - The command callback fails (`Command`, unchanged)
    pub fn dispatch<I, T>(mut self, argv: I) -> Result<(), CliError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
        let parsed = self.parser.parse(&argv)?;

        for (name, value) in parsed.values {
            self.options.set(&name, value)?;
        }

        if parsed.help_requested {
            return Err(CliError::HelpRequested);
        }

        let Some((name, args)) = parsed.positionals.split_first() else {
            return Err(CliError::NoCommandSupplied);
        };

        let command = self
            .commands
            .get(name)
            .ok_or_else(|| CliError::unknown_command(name.clone()))?;

        if !command.accepts(args.len()) {
            return Err(CliError::NotEnoughArguments {
                command: name.clone(),
                expected: command.min_args(),
                got: args.len(),
            });
        }

        debug!("Dispatching '{}' with {} arguments", name, args.len());
        command.invoke(&self.options, args).map_err(CliError::Command)
    }

    /// Run against the process arguments
    ///
    /// When no command is given the usage text is written to stderr and the process
    /// exits with status 1. A help request prints the same text and exits with 0.
    /// Malformed flags also print the usage text but the error is still returned.
    /// Every other outcome is returned to the caller.
    ///
    /// # Errors
    ///
    /// See [`Cli::dispatch`]
    pub fn run(self) -> Result<(), CliError> {
        let usage = self.usage();
        match self.dispatch(std::env::args_os()) {
            Err(err @ (CliError::NoCommandSupplied | CliError::HelpRequested)) => {
                eprint!("{usage}");
                std::process::exit(err.exit_code());
            }
            Err(err @ CliError::InvalidFlags { .. }) => {
                eprint!("{usage}");
                Err(err)
            }
            result => result,
        }
    }
}
