//! `cmdkit` - A minimal declarative framework for command-line tools
//!
//! Callers describe their commands and options as a list of declaration steps.
//! The framework parses the process arguments, checks that the named command
//! exists and received enough arguments, and invokes its callback.
//!
//! ```no_run
//! use cmdkit::{Cli, with_bool_option, with_command};
//!
//! fn main() -> anyhow::Result<()> {
//!     let cli = Cli::new([
//!         with_bool_option("loud", "shout the greeting", false),
//!         with_command("greet", "greet someone", 1, |opts, args| {
//!             let greeting = format!("Hello, {}!", args.join(" "));
//!             if opts.get_bool("loud")? {
//!                 println!("{}", greeting.to_uppercase());
//!             } else {
//!                 println!("{greeting}");
//!             }
//!             Ok(())
//!         }),
//!     ])?;
//!     cli.run()?;
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod cli;
pub mod dispatch;
pub mod error;
pub mod parser;
pub mod registry;

pub use builder::{
    Element, build, with_bool_option, with_command, with_int_option, with_string_option,
};
pub use cli::Cli;
pub use error::CliError;
pub use registry::{OptionMap, get_bool_option};
