//! Option registry and typed accessors

use crate::error::CliError;
use std::collections::HashMap;
use std::fmt;

/// Concrete type of an option, fixed at declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Bool,
    String,
    Int,
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Self::Bool => "bool",
            Self::String => "string",
            Self::Int => "int",
        };
        f.write_str(name)
    }
}

/// Value held by an option
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Bool(bool),
    String(String),
    Int(i64),
}

impl OptionValue {
    /// Kind of this value
    #[must_use]
    #[inline]
    pub const fn kind(&self) -> OptionKind {
        match *self {
            Self::Bool(_) => OptionKind::Bool,
            Self::String(_) => OptionKind::String,
            Self::Int(_) => OptionKind::Int,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::String(ref value) => f.write_str(value),
            Self::Int(value) => write!(f, "{value}"),
        }
    }
}

/// Declaration of a named option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDecl {
    pub name: String,
    pub usage: String,
    pub default: OptionValue,
    /// Environment variable read when the flag is absent
    pub env: Option<String>,
}

impl OptionDecl {
    /// Declare a boolean option
    #[inline]
    pub fn bool<N: Into<String>, U: Into<String>>(name: N, usage: U, default: bool) -> Self {
        Self::new(name, usage, OptionValue::Bool(default))
    }

    /// Declare a string option
    #[inline]
    pub fn string<N: Into<String>, U: Into<String>, D: Into<String>>(
        name: N,
        usage: U,
        default: D,
    ) -> Self {
        Self::new(name, usage, OptionValue::String(default.into()))
    }

    /// Declare an integer option
    #[inline]
    pub fn int<N: Into<String>, U: Into<String>>(name: N, usage: U, default: i64) -> Self {
        Self::new(name, usage, OptionValue::Int(default))
    }

    fn new<N: Into<String>, U: Into<String>>(name: N, usage: U, default: OptionValue) -> Self {
        Self {
            name: name.into(),
            usage: usage.into(),
            default,
            env: None,
        }
    }

    /// Fall back to an environment variable when the flag is not given
    #[must_use]
    #[inline]
    pub fn env<S: Into<String>>(mut self, var: S) -> Self {
        self.env = Some(var.into());
        self
    }

    #[must_use]
    #[inline]
    pub const fn kind(&self) -> OptionKind {
        self.default.kind()
    }
}

/// A registered option with its current value
#[derive(Debug, Clone)]
pub struct CliOption {
    pub usage: String,
    pub default: OptionValue,
    pub env: Option<String>,
    value: OptionValue,
}

impl CliOption {
    /// Current value, the declared default until a parse step overwrites it
    #[must_use]
    #[inline]
    pub const fn value(&self) -> &OptionValue {
        &self.value
    }

    #[must_use]
    #[inline]
    pub const fn kind(&self) -> OptionKind {
        self.default.kind()
    }
}

/// Mapping of option name to option
#[derive(Debug, Clone, Default)]
pub struct OptionMap {
    options: HashMap<String, CliOption>,
}

impl OptionMap {
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an option, replacing any previous one with the same name
    pub fn declare(&mut self, decl: OptionDecl) {
        let option = CliOption {
            usage: decl.usage,
            value: decl.default.clone(),
            default: decl.default,
            env: decl.env,
        };
        self.options.insert(decl.name, option);
    }

    /// Store a parsed value
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The option was never declared
    /// - The value kind differs from the declared kind
    pub fn set(&mut self, name: &str, value: OptionValue) -> Result<(), CliError> {
        let option = self
            .options
            .get_mut(name)
            .ok_or_else(|| CliError::unknown_option(name))?;
        if option.kind() != value.kind() {
            return Err(CliError::OptionType {
                name: name.to_owned(),
                expected: option.kind(),
                found: value.kind(),
            });
        }
        option.value = value;
        Ok(())
    }

    #[must_use]
    #[inline]
    pub fn get(&self, name: &str) -> Option<&CliOption> {
        self.options.get(name)
    }

    #[must_use]
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CliOption)> {
        self.options.iter().map(|(name, option)| (name.as_str(), option))
    }

    /// Read a boolean option
    ///
    /// # Errors
    ///
    /// Returns an error if the option is undeclared or not a boolean
    pub fn get_bool(&self, name: &str) -> Result<bool, CliError> {
        match *self.lookup(name)? {
            OptionValue::Bool(value) => Ok(value),
            ref other => Err(mismatch(name, OptionKind::Bool, other)),
        }
    }

    /// Read a string option
    ///
    /// # Errors
    ///
    /// Returns an error if the option is undeclared or not a string
    pub fn get_string(&self, name: &str) -> Result<&str, CliError> {
        match *self.lookup(name)? {
            OptionValue::String(ref value) => Ok(value),
            ref other => Err(mismatch(name, OptionKind::String, other)),
        }
    }

    /// Read an integer option
    ///
    /// # Errors
    ///
    /// Returns an error if the option is undeclared or not an integer
    pub fn get_int(&self, name: &str) -> Result<i64, CliError> {
        match *self.lookup(name)? {
            OptionValue::Int(value) => Ok(value),
            ref other => Err(mismatch(name, OptionKind::Int, other)),
        }
    }

    fn lookup(&self, name: &str) -> Result<&OptionValue, CliError> {
        self.options
            .get(name)
            .map(CliOption::value)
            .ok_or_else(|| CliError::unknown_option(name))
    }
}

fn mismatch(name: &str, expected: OptionKind, found: &OptionValue) -> CliError {
    CliError::OptionType {
        name: name.to_owned(),
        expected,
        found: found.kind(),
    }
}

/// Read a boolean option from `opts`
///
/// # Errors
///
/// Returns an error if the option is undeclared or not a boolean
#[inline]
pub fn get_bool_option(opts: &OptionMap, name: &str) -> Result<bool, CliError> {
    opts.get_bool(name)
}
