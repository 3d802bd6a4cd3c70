//! Error types surfaced by building and running a CLI

use crate::registry::OptionKind;
use thiserror::Error;

/// Main error type for cmdkit operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CliError {
    /// The command token does not match any registered command
    #[error("unknown command: {name}")]
    UnknownCommand { name: String },

    /// The command requires more positional arguments than were supplied
    #[error("not enough arguments for '{command}': expected at least {expected}, got {got}")]
    NotEnoughArguments {
        command: String,
        expected: usize,
        got: usize,
    },

    /// No command token was left after option parsing
    #[error("no command supplied")]
    NoCommandSupplied,

    /// `-h` or `--help` was given
    #[error("help requested")]
    HelpRequested,

    /// The argument parser rejected the flags
    #[error("invalid flags: {message}")]
    InvalidFlags { message: String },

    /// An option name was registered twice with the argument parser
    #[error("option '{name}' is already defined")]
    DuplicateOption { name: String },

    /// A declaration step is malformed
    #[error("invalid declaration: {message}")]
    InvalidDeclaration { message: String },

    /// An accessor asked for an option that was never declared
    #[error("option '{name}' is not declared")]
    UnknownOption { name: String },

    /// An accessor asked for an option with the wrong concrete type
    #[error("option '{name}' is declared as {found}, not {expected}")]
    OptionType {
        name: String,
        expected: OptionKind,
        found: OptionKind,
    },

    /// Error returned by the command callback, passed through unchanged
    #[error(transparent)]
    Command(anyhow::Error),
}

impl CliError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::HelpRequested => 0,
            Self::UnknownCommand { .. }
            | Self::NotEnoughArguments { .. }
            | Self::InvalidFlags { .. } => 2,
            Self::NoCommandSupplied
            | Self::DuplicateOption { .. }
            | Self::InvalidDeclaration { .. }
            | Self::UnknownOption { .. }
            | Self::OptionType { .. }
            | Self::Command(_) => 1,
        }
    }

    /// Create an unknown command error
    #[inline]
    pub fn unknown_command<S: Into<String>>(name: S) -> Self {
        Self::UnknownCommand { name: name.into() }
    }

    /// Create an invalid flags error
    #[inline]
    pub fn invalid_flags<S: Into<String>>(message: S) -> Self {
        Self::InvalidFlags {
            message: message.into(),
        }
    }

    /// Create a duplicate option error
    #[inline]
    pub fn duplicate_option<S: Into<String>>(name: S) -> Self {
        Self::DuplicateOption { name: name.into() }
    }

    /// Create an invalid declaration error
    #[inline]
    pub fn invalid_declaration<S: Into<String>>(message: S) -> Self {
        Self::InvalidDeclaration {
            message: message.into(),
        }
    }

    /// Create an unknown option error
    #[inline]
    pub fn unknown_option<S: Into<String>>(name: S) -> Self {
        Self::UnknownOption { name: name.into() }
    }
}
