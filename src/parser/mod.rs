//! Argument parser abstraction
//!
//! This module isolates the flag-parsing facility behind a narrow trait so the
//! registries and the dispatcher can be exercised without real process arguments.
//!
//! # Implementations
//! - `ClapParser`: Production implementation backed by `clap`
//! - `MockParser`: Test implementation returning scripted results

use crate::error::CliError;
use crate::registry::{OptionDecl, OptionValue};
use std::collections::HashMap;
use std::ffi::OsString;

pub mod clap_parser;
pub mod mock;

pub use clap_parser::ClapParser;
pub use mock::MockParser;

/// Flag name the parser keeps for itself
pub const HELP_FLAG: &str = "help";

/// Argument id holding the command name and its arguments
pub const POSITIONALS: &str = "cmdkit:positionals";

/// Names that cannot be declared as options
pub const RESERVED_FLAGS: [&str; 3] = [HELP_FLAG, "h", POSITIONALS];

/// Result of splitting an argument vector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    /// Values for registered flags, keyed by flag name
    pub values: HashMap<String, OptionValue>,
    /// Tokens left after flag parsing: command name followed by its arguments
    pub positionals: Vec<String>,
    pub help_requested: bool,
}

/// Flag-parsing facility used by the builder and the dispatcher
pub trait FlagParser {
    /// Register a flag
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A flag with the same name is already registered or the name is reserved
    ///   (`DuplicateOption`)
    /// - The name cannot be spelled as a flag (`InvalidDeclaration`)
    fn register_flag(&mut self, decl: &OptionDecl) -> Result<(), CliError>;

    /// Parse `argv`, whose first element is the program name
    ///
    /// Flag parsing stops at the first positional token; everything after it is
    /// returned untouched in `positionals`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFlags` if a flag is unknown or its value is malformed
    fn parse(&self, argv: &[OsString]) -> Result<ParsedArgs, CliError>;

    /// Render the registered flags with their defaults
    fn render_options(&self) -> String;
}

fn check_registration(names: &[String], decl: &OptionDecl) -> Result<(), CliError> {
    let name = decl.name.as_str();
    if name.is_empty()
        || name.starts_with('-')
        || name.contains('=')
        || name.contains(char::is_whitespace)
    {
        return Err(CliError::invalid_declaration(format!(
            "'{name}' is not a valid option name"
        )));
    }
    if RESERVED_FLAGS.contains(&name) || names.iter().any(|known| known == name) {
        return Err(CliError::duplicate_option(name));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(name: &str) -> Result<(), CliError> {
        check_registration(&["loud".to_owned()], &OptionDecl::bool(name, "", false))
    }

    #[test]
    fn accepts_plain_names() {
        assert!(check("dry-run").is_ok());
        assert!(check("v").is_ok());
    }

    #[test]
    fn rejects_names_that_cannot_be_flags() {
        for name in ["", "-x", "--loud", "a=b", "two words", "tab\tname"] {
            assert!(
                matches!(check(name), Err(CliError::InvalidDeclaration { .. })),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_reserved_and_known_names() {
        for name in ["help", "h", POSITIONALS, "loud"] {
            assert!(
                matches!(check(name), Err(CliError::DuplicateOption { .. })),
                "{name:?} should be rejected"
            );
        }
    }
}
