//! Dispatch behavior through the public API

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use cmdkit::parser::{ClapParser, MockParser, POSITIONALS};
    use cmdkit::registry::OptionValue;
    use cmdkit::{CliError, Element, build, get_bool_option, with_bool_option, with_command};
    use std::cell::RefCell;
    use std::rc::Rc;

    type Calls = Rc<RefCell<Vec<(String, Vec<String>)>>>;

    /// Commands `A` (needs two arguments) and `B` (no minimum) recording their calls
    fn recording_commands(calls: &Calls) -> Vec<Element> {
        ["A", "B"]
            .into_iter()
            .zip([2, 0])
            .map(|(name, min_args)| {
                let calls = Rc::clone(calls);
                with_command(name, format!("command {name}"), min_args, move |_, args| {
                    calls.borrow_mut().push((name.to_owned(), args.to_vec()));
                    Ok(())
                })
            })
            .collect()
    }

    fn run_clap(elements: Vec<Element>, tokens: &[&str]) -> Result<(), CliError> {
        let cli = build("prog", ClapParser::new("prog"), elements).unwrap();
        cli.dispatch(std::iter::once("prog").chain(tokens.iter().copied()))
    }

    #[test]
    fn too_few_arguments() {
        let calls = Calls::default();
        let err = run_clap(recording_commands(&calls), &["A", "x"]).unwrap_err();

        assert!(matches!(
            err,
            CliError::NotEnoughArguments {
                ref command,
                expected: 2,
                got: 1
            } if command == "A"
        ));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn enough_arguments() {
        let calls = Calls::default();
        run_clap(recording_commands(&calls), &["A", "x", "y"]).unwrap();

        assert_eq!(
            *calls.borrow(),
            [("A".to_owned(), vec!["x".to_owned(), "y".to_owned()])]
        );
    }

    #[test]
    fn zero_minimum_accepts_anything() {
        let calls = Calls::default();
        run_clap(recording_commands(&calls), &["B"]).unwrap();
        run_clap(recording_commands(&calls), &["B", "1", "2", "3"]).unwrap();

        let calls = calls.borrow();
        assert_eq!(calls.len(), 2);
        assert!(calls[0].1.is_empty());
        assert_eq!(calls[1].1, ["1", "2", "3"]);
    }

    #[test]
    fn unknown_command_regardless_of_arguments() {
        for tokens in [&["Z"][..], &["Z", "x", "y", "z"][..]] {
            let calls = Calls::default();
            let err = run_clap(recording_commands(&calls), tokens).unwrap_err();
            assert!(matches!(err, CliError::UnknownCommand { ref name } if name == "Z"));
            assert_eq!(err.to_string(), "unknown command: Z");
            assert!(calls.borrow().is_empty());
        }
    }

    #[test]
    fn only_options_means_no_command() {
        let calls = Calls::default();
        let mut elements = recording_commands(&calls);
        elements.push(with_bool_option("loud", "shout", false));

        let err = run_clap(elements, &["--loud"]).unwrap_err();
        assert!(matches!(err, CliError::NoCommandSupplied));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn last_command_declaration_wins() {
        let calls = Rc::new(RefCell::new(Vec::<&str>::new()));
        let first = Rc::clone(&calls);
        let second = Rc::clone(&calls);

        let cli = build(
            "prog",
            MockParser::new().with_positionals(["run"]),
            [
                with_command("run", "first", 0, move |_, _| {
                    first.borrow_mut().push("first");
                    Ok(())
                }),
                with_command("run", "second", 0, move |_, _| {
                    second.borrow_mut().push("second");
                    Ok(())
                }),
            ],
        )
        .unwrap();

        assert_eq!(cli.commands().len(), 1);
        cli.dispatch(["prog"]).unwrap();
        assert_eq!(*calls.borrow(), ["second"]);
    }

    #[test]
    fn bool_option_absent_and_present() {
        for (tokens, expected) in [(&["check"][..], false), (&["--loud", "check"][..], true)] {
            let seen = Rc::new(RefCell::new(None));
            let sink = Rc::clone(&seen);
            let elements = vec![
                with_bool_option("loud", "shout", false),
                with_command("check", "record loud", 0, move |opts, _| {
                    *sink.borrow_mut() = Some(get_bool_option(opts, "loud")?);
                    Ok(())
                }),
            ];
            run_clap(elements, tokens).unwrap();
            assert_eq!(*seen.borrow(), Some(expected));
        }
    }

    #[test]
    fn declared_default_reads_back_without_parsing() {
        let cli = build(
            "prog",
            MockParser::new(),
            [
                with_bool_option("on", "", true),
                with_bool_option("off", "", false),
            ],
        )
        .unwrap();

        assert!(cli.options().get_bool("on").unwrap());
        assert!(!cli.options().get_bool("off").unwrap());
    }

    #[test]
    fn greet_scenario() {
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        let elements = vec![
            with_command("greet", "greet someone", 1, move |opts, args| {
                *sink.borrow_mut() = Some((opts.get_bool("loud")?, args.to_vec()));
                Ok(())
            }),
            with_bool_option("loud", "shout", false),
        ];

        run_clap(elements, &["--loud", "greet", "world"]).unwrap();
        assert_eq!(*seen.borrow(), Some((true, vec!["world".to_owned()])));
    }

    #[test]
    fn callback_error_passes_through() {
        #[derive(Debug, thiserror::Error)]
        #[error("quota exceeded")]
        struct QuotaExceeded;

        let elements = vec![with_command("upload", "", 0, |_, _| {
            Err(QuotaExceeded.into())
        })];
        let err = run_clap(elements, &["upload"]).unwrap_err();

        let CliError::Command(inner) = err else {
            panic!("expected a callback error");
        };
        assert!(inner.downcast_ref::<QuotaExceeded>().is_some());
        assert_eq!(inner.to_string(), "quota exceeded");
    }

    #[test]
    fn built_cli_owns_its_parser() {
        let parser = MockParser::new().with_positionals(["B"]);
        let calls = Calls::default();
        let cli = build("prog", parser.clone(), recording_commands(&calls)).unwrap();
        cli.dispatch(["prog", "B"]).unwrap();

        assert!(parser.calls().is_empty());
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn scripted_value_for_undeclared_option() {
        let parser = MockParser::new()
            .with_positionals(["B"])
            .with_value("ghost", OptionValue::Bool(true));
        let calls = Calls::default();
        let cli = build("prog", parser, recording_commands(&calls)).unwrap();

        assert!(matches!(
            cli.dispatch(["prog"]),
            Err(CliError::UnknownOption { ref name }) if name == "ghost"
        ));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn option_names_clap_cannot_spell_fail_the_build() {
        for name in ["-x", "--loud", "a=b", "two words"] {
            let calls = Calls::default();
            let mut elements = recording_commands(&calls);
            elements.push(with_bool_option(name, "", false));

            let err = build("prog", ClapParser::new("prog"), elements).unwrap_err();
            assert!(
                matches!(err, CliError::InvalidDeclaration { .. }),
                "{name:?} built: {err}"
            );
        }

        let err = build(
            "prog",
            ClapParser::new("prog"),
            [with_bool_option(POSITIONALS, "", false)],
        )
        .unwrap_err();
        assert!(matches!(err, CliError::DuplicateOption { .. }));
    }

    #[test]
    fn usage_lists_commands_and_options() {
        let calls = Calls::default();
        let mut elements = recording_commands(&calls);
        elements.push(with_bool_option("loud", "Shout the greeting", false));
        let cli = build("prog", ClapParser::new("prog"), elements).unwrap();

        let usage = cli.usage();
        assert!(usage.starts_with(
            "Usage: prog [option...] command [arg...]\n\nCommand is one of:\n\n"
        ));
        assert!(usage.contains("A - command A\nB - command B\n"));
        assert!(usage.contains("\nOptions:\n\n"));
        assert!(usage.contains("--loud"));
        assert!(usage.contains("Shout the greeting"));
        assert!(usage.ends_with("\n\n"));
    }
}
