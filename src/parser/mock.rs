//! Scripted parser implementation for testing

use super::{FlagParser, ParsedArgs, check_registration};
use crate::error::CliError;
use crate::registry::{OptionDecl, OptionValue};
use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::OsString;

/// Parser that ignores its input and returns a scripted result
///
/// `MockParser` lets the dispatcher be tested without going through real flag
/// syntax: the positional tokens and flag values are configured up front.
///
/// # Example
/// ```
/// use cmdkit::parser::{FlagParser, MockParser};
/// use cmdkit::registry::OptionValue;
///
/// let parser = MockParser::new()
///     .with_positionals(["greet", "world"])
///     .with_value("loud", OptionValue::Bool(true));
///
/// let parsed = parser.parse(&[]).unwrap();
/// assert_eq!(parsed.positionals, ["greet", "world"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockParser {
    flags: Vec<OptionDecl>,
    script: ParsedArgs,
    failure: Option<String>,
    calls: RefCell<Vec<Vec<OsString>>>,
}

impl MockParser {
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokens returned as the residual positional sequence
    #[must_use]
    pub fn with_positionals<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.script.positionals = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Value reported for a flag as if it were given on the command line
    #[must_use]
    pub fn with_value<S: Into<String>>(mut self, name: S, value: OptionValue) -> Self {
        self.script.values.insert(name.into(), value);
        self
    }

    /// Report a help request
    #[must_use]
    #[inline]
    pub fn with_help(mut self) -> Self {
        self.script.help_requested = true;
        self
    }

    /// Make `parse` fail with `InvalidFlags`
    #[must_use]
    pub fn failing<S: Into<String>>(mut self, message: S) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Names of the flags registered so far, in registration order
    #[must_use]
    pub fn registered(&self) -> Vec<&str> {
        self.flags.iter().map(|flag| flag.name.as_str()).collect()
    }

    /// Argument vectors passed to `parse`
    #[must_use]
    pub fn calls(&self) -> Vec<Vec<OsString>> {
        self.calls.borrow().clone()
    }
}

impl FlagParser for MockParser {
    fn register_flag(&mut self, decl: &OptionDecl) -> Result<(), CliError> {
        let names: Vec<String> = self.flags.iter().map(|flag| flag.name.clone()).collect();
        check_registration(&names, decl)?;
        self.flags.push(decl.clone());
        Ok(())
    }

    fn parse(&self, argv: &[OsString]) -> Result<ParsedArgs, CliError> {
        self.calls.borrow_mut().push(argv.to_vec());
        if let Some(ref message) = self.failure {
            return Err(CliError::invalid_flags(message.clone()));
        }

        // Unscripted flags keep their defaults, like the real parser
        let mut values: HashMap<String, OptionValue> = self
            .flags
            .iter()
            .map(|flag| (flag.name.clone(), flag.default.clone()))
            .collect();
        values.extend(self.script.values.clone());

        Ok(ParsedArgs {
            values,
            ..self.script.clone()
        })
    }

    fn render_options(&self) -> String {
        self.flags
            .iter()
            .map(|flag| {
                format!(
                    "  --{}\n    \t{} (default {})\n",
                    flag.name, flag.usage, flag.default
                )
            })
            .collect()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;

    #[test]
    fn unscripted_flags_keep_defaults() {
        let mut parser = MockParser::new().with_positionals(["run"]);
        parser
            .register_flag(&OptionDecl::bool("dry", "dry run", true))
            .unwrap();
        let parsed = parser.parse(&[]).unwrap();
        assert_eq!(parsed.values.get("dry"), Some(&OptionValue::Bool(true)));
        assert_eq!(parser.registered(), ["dry"]);
    }

    #[test]
    fn records_calls() {
        let parser = MockParser::new();
        parser.parse(&[OsString::from("prog")]).unwrap();
        assert_eq!(parser.calls(), [vec![OsString::from("prog")]]);
    }

    #[test]
    fn scripted_failure() {
        let parser = MockParser::new().failing("bad flag");
        assert_eq!(
            parser.parse(&[]).unwrap_err().to_string(),
            "invalid flags: bad flag"
        );
    }
}
