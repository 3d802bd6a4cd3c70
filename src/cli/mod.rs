//! The CLI aggregate
//!
//! Owns the command and option registries together with the flag parser they were
//! registered with. A `Cli` is obtained only from the builder and consumed by a
//! single dispatch.

pub mod usage;

use crate::parser::FlagParser;
use crate::registry::{CommandMap, OptionMap};
use std::fmt;
use std::path::Path;

pub use usage::render_usage;

/// A fully built command-line interface
pub struct Cli {
    pub(crate) program: String,
    pub(crate) commands: CommandMap,
    pub(crate) options: OptionMap,
    pub(crate) parser: Box<dyn FlagParser>,
}

impl Cli {
    /// Program name shown in usage text
    #[must_use]
    #[inline]
    pub fn program(&self) -> &str {
        &self.program
    }

    #[must_use]
    #[inline]
    pub const fn commands(&self) -> &CommandMap {
        &self.commands
    }

    #[must_use]
    #[inline]
    pub const fn options(&self) -> &OptionMap {
        &self.options
    }

    /// Render the usage text written to stderr when no command is given
    #[must_use]
    pub fn usage(&self) -> String {
        render_usage(&self.program, &self.commands, &self.parser.render_options())
    }
}

impl fmt::Debug for Cli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cli")
            .field("program", &self.program)
            .field("commands", &self.commands)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Program name from the first process argument, without its directory
#[must_use]
pub fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_owned())
}
