//! Command registry

use super::OptionMap;
use std::collections::BTreeMap;
use std::fmt;

/// Handler invoked with the parsed options and the command's positional arguments
pub type CommandCallback = Box<dyn Fn(&OptionMap, &[String]) -> anyhow::Result<()>>;

/// Declaration of a named command
pub struct CommandDecl {
    pub name: String,
    pub usage: String,
    /// Minimum number of positional arguments, 0 disables the check
    pub min_args: usize,
    pub callback: CommandCallback,
}

impl CommandDecl {
    #[inline]
    pub fn new<N, U, F>(name: N, usage: U, min_args: usize, callback: F) -> Self
    where
        N: Into<String>,
        U: Into<String>,
        F: Fn(&OptionMap, &[String]) -> anyhow::Result<()> + 'static,
    {
        Self {
            name: name.into(),
            usage: usage.into(),
            min_args,
            callback: Box::new(callback),
        }
    }
}

impl fmt::Debug for CommandDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDecl")
            .field("name", &self.name)
            .field("usage", &self.usage)
            .field("min_args", &self.min_args)
            .finish_non_exhaustive()
    }
}

/// A registered command
pub struct Command {
    usage: String,
    min_args: usize,
    callback: CommandCallback,
}

impl Command {
    #[must_use]
    #[inline]
    pub fn usage(&self) -> &str {
        &self.usage
    }

    #[must_use]
    #[inline]
    pub const fn min_args(&self) -> usize {
        self.min_args
    }

    /// Whether `count` positional arguments satisfy this command
    #[must_use]
    #[inline]
    pub const fn accepts(&self, count: usize) -> bool {
        self.min_args == 0 || count >= self.min_args
    }

    /// Run the callback
    ///
    /// # Errors
    ///
    /// Returns whatever error the callback returns
    #[inline]
    pub fn invoke(&self, opts: &OptionMap, args: &[String]) -> anyhow::Result<()> {
        (self.callback)(opts, args)
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("usage", &self.usage)
            .field("min_args", &self.min_args)
            .finish_non_exhaustive()
    }
}

/// Mapping of command name to command, ordered by name
#[derive(Debug, Default)]
pub struct CommandMap {
    commands: BTreeMap<String, Command>,
}

impl CommandMap {
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command, returning `true` if it replaced an existing one
    pub fn declare(&mut self, decl: CommandDecl) -> bool {
        let command = Command {
            usage: decl.usage,
            min_args: decl.min_args,
            callback: decl.callback,
        };
        self.commands.insert(decl.name, command).is_some()
    }

    #[must_use]
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Command)> {
        self.commands.iter().map(|(name, command)| (name.as_str(), command))
    }
}
