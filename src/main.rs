//! # `cmdkit`
//!
//! Demo tool built on the `cmdkit` framework.
//!
//! ## Usage
//!
//! ```sh
//! cmdkit [option...] command [arg...]
//! cmdkit --loud greet world
//! cmdkit --greeting=Howdy --repeat 2 greet partner
//! cmdkit sum 1 2 3
//! ```
//!
//! Set `RUST_LOG=debug` to see how arguments are resolved.

use anyhow::{Context as _, Result};
use cmdkit::registry::{OptionDecl, OptionMap};
use cmdkit::{Cli, CliError, with_command, with_int_option, with_string_option};
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let cli = Cli::new([
        OptionDecl::bool("loud", "Shout the greeting", false)
            .env("CMDKIT_LOUD")
            .into(),
        with_string_option("greeting", "Word used to greet", "Hello"),
        with_int_option("repeat", "How many times to greet", 1),
        with_command("greet", "Greet one or more names", 1, greet),
        with_command("echo", "Print the arguments separated by spaces", 0, echo),
        with_command("sum", "Add two or more integers", 2, sum),
    ])?;

    match cli.run() {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{}", err);
            let code = match err {
                CliError::Command(ref inner) => inner
                    .downcast_ref::<CliError>()
                    .map_or(1, CliError::exit_code),
                ref other => other.exit_code(),
            };
            std::process::exit(code);
        }
    }
}

fn greet(opts: &OptionMap, args: &[String]) -> Result<()> {
    let times = opts.get_int("repeat")?;
    if times < 1 {
        return Err(CliError::invalid_flags(format!(
            "--repeat must be at least 1, got {times}"
        ))
        .into());
    }

    let mut line = format!("{}, {}!", opts.get_string("greeting")?, args.join(" "));
    if opts.get_bool("loud")? {
        line = line.to_uppercase();
    }
    for _ in 0..times {
        println!("{line}");
    }
    Ok(())
}

fn echo(_opts: &OptionMap, args: &[String]) -> Result<()> {
    println!("{}", args.join(" "));
    Ok(())
}

fn sum(_opts: &OptionMap, args: &[String]) -> Result<()> {
    let mut total: i64 = 0;
    for arg in args {
        let value: i64 = arg
            .parse()
            .with_context(|| format!("'{arg}' is not an integer"))?;
        total = total
            .checked_add(value)
            .context("sum overflows a 64-bit integer")?;
    }
    println!("{total}");
    Ok(())
}
