//! Declarative construction of a `Cli`
//!
//! A CLI is described by an ordered list of [`Element`]s. Each element is a plain
//! description record; [`build`] applies them in order against empty registries.

use crate::cli::{Cli, program_name};
use crate::error::CliError;
use crate::parser::{ClapParser, FlagParser};
use crate::registry::{CommandDecl, CommandMap, OptionDecl, OptionMap};
use tracing::{debug, warn};

/// One declaration step
#[derive(Debug)]
pub enum Element {
    Command(CommandDecl),
    Option(OptionDecl),
}

impl From<CommandDecl> for Element {
    #[inline]
    fn from(decl: CommandDecl) -> Self {
        Self::Command(decl)
    }
}

impl From<OptionDecl> for Element {
    #[inline]
    fn from(decl: OptionDecl) -> Self {
        Self::Option(decl)
    }
}

/// Declare a command
///
/// `min_args` is the minimum number of positional arguments the command needs;
/// 0 disables the check.
#[inline]
pub fn with_command<N, U, F>(name: N, usage: U, min_args: usize, callback: F) -> Element
where
    N: Into<String>,
    U: Into<String>,
    F: Fn(&OptionMap, &[String]) -> anyhow::Result<()> + 'static,
{
    Element::Command(CommandDecl::new(name, usage, min_args, callback))
}

/// Declare a boolean option
#[inline]
pub fn with_bool_option<N: Into<String>, U: Into<String>>(
    name: N,
    usage: U,
    default: bool,
) -> Element {
    Element::Option(OptionDecl::bool(name, usage, default))
}

/// Declare a string option
#[inline]
pub fn with_string_option<N: Into<String>, U: Into<String>, D: Into<String>>(
    name: N,
    usage: U,
    default: D,
) -> Element {
    Element::Option(OptionDecl::string(name, usage, default))
}

/// Declare an integer option
#[inline]
pub fn with_int_option<N: Into<String>, U: Into<String>>(
    name: N,
    usage: U,
    default: i64,
) -> Element {
    Element::Option(OptionDecl::int(name, usage, default))
}

/// Build a `Cli` from `elements`, registering options with `parser`
///
/// A command declared twice keeps the last declaration. Options are registered
/// with the parser, which refuses duplicates.
///
/// # Errors
///
/// Returns an error if:
/// - A command or option has an empty name
/// - The parser rejects an option
pub fn build<P, I>(program: impl Into<String>, parser: P, elements: I) -> Result<Cli, CliError>
where
    P: FlagParser + 'static,
    I: IntoIterator<Item = Element>,
{
    let mut parser = parser;
    let mut commands = CommandMap::new();
    let mut options = OptionMap::new();

    for element in elements {
        match element {
            Element::Command(decl) => {
                if decl.name.is_empty() {
                    return Err(CliError::invalid_declaration("command name is empty"));
                }
                let name = decl.name.clone();
                if commands.declare(decl) {
                    warn!("Command '{}' declared more than once, keeping the last", name);
                }
            }
            Element::Option(decl) => {
                if decl.name.is_empty() {
                    return Err(CliError::invalid_declaration("option name is empty"));
                }
                parser.register_flag(&decl)?;
                options.declare(decl);
            }
        }
    }

    let program = program.into();
    debug!(
        "Built {} with {} commands and {} options",
        program,
        commands.len(),
        options.len()
    );

    Ok(Cli {
        program,
        commands,
        options,
        parser: Box::new(parser),
    })
}

impl Cli {
    /// Build a `Cli` for the current process using `clap` as the flag parser
    ///
    /// # Errors
    ///
    /// See [`build`]
    pub fn new<I>(elements: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = Element>,
    {
        let program = program_name();
        let parser = ClapParser::new(program.clone());
        build(program, parser, elements)
    }
}
