//! Command and option registries
//!
//! Both registries are populated once by the builder and are read-only afterwards,
//! except for option values which the dispatcher fills in from the parsed arguments.

pub mod command;
pub mod option;

pub use command::*;
pub use option::*;
