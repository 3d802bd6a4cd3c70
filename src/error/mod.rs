//! Error handling module
//!
//! Defines the error type returned by the builder and the dispatcher

pub mod types;

pub use types::*;
