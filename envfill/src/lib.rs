//! Populate configuration structs from environment variables
//!
//! `envfill` fills the annotated fields of a struct from the process
//! environment. Each field names its variable, and optionally a default, in a
//! single annotation string; `String` fields take the raw value and every
//! other field type is converted by a parser registered for that type.
//!
//! # Example
//!
//! ```rust
//! use envfill::Populate;
//!
//! #[derive(Debug, Default, Populate)]
//! struct Config {
//!     // Required: population fails if API_HOST is not set
//!     #[environment = "API_HOST"]
//!     pub host: String,
//!
//!     // Optional: falls back to 8080
//!     #[environment = "API_PORT, 8080"]
//!     pub port: u16,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! #     std::env::set_var("API_HOST", "localhost");
//! envfill::use_parser(envfill::parser::from_str::<u16>);
//!
//! let mut config = Config::default();
//! envfill::populate(&mut config)?;
//! assert_eq!(config.host, "localhost");
//! assert_eq!(config.port, 8080);
//! #     Ok(())
//! # }
//! ```
//!
//! # Annotations
//!
//! `#[environment = "NAME"]` makes `NAME` required. `#[environment = "NAME,DEFAULT"]`
//! uses the literal `DEFAULT` when `NAME` is unset. Both parts are trimmed and
//! commas cannot be escaped. A payload with more than two parts is ignored and
//! the field is left untouched.
//!
//! # Parsers
//!
//! Parsers take a `&str` and return either `T` ([`use_infallible_parser`]) or
//! `Result<T, E>` ([`use_parser`]). One parser is kept per type; registering
//! another for the same type replaces it.
//!
//! The process-wide registry used by [`populate`] is meant to be filled once at
//! startup. Registration and population are not designed to run concurrently,
//! and a parser must not register parsers itself. Use [`ParserRegistry`] with
//! [`populate_with`] to keep registries local instead.
//!
//! # Errors
//!
//! Population stops at the first failing field and returns an [`Error`] naming
//! the variable, the field and the record type. Fields populated before the
//! failure keep their new values.

extern crate self as envfill;

mod annotation;
mod error;
pub mod parser;
mod populate;
mod registry;

use std::sync::LazyLock;

use parking_lot::RwLock;

pub use annotation::{Annotation, FieldDescriptor};
pub use envfill_derive::Populate;
pub use error::Error;
pub use populate::{populate_with, requirements, Populate, Populator};
pub use registry::{ParserFn, ParserRegistry};

/// Error type parsers report failures with.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

static PARSERS: LazyLock<RwLock<ParserRegistry>> =
    LazyLock::new(|| RwLock::new(ParserRegistry::new()));

/// Register a fallible parser for `T` in the process-wide registry.
///
/// # Panics
///
/// Panics if `T` is itself the boxed error type.
pub fn use_parser<T, E, F>(parser: F)
where
    T: 'static,
    E: Into<BoxError>,
    F: Fn(&str) -> Result<T, E> + Send + Sync + 'static,
{
    PARSERS.write().register(parser);
}

/// Register an infallible parser for `T` in the process-wide registry.
///
/// # Panics
///
/// Panics if `T` is itself the boxed error type.
pub fn use_infallible_parser<T, F>(parser: F)
where
    T: 'static,
    F: Fn(&str) -> T + Send + Sync + 'static,
{
    PARSERS.write().register_infallible(parser);
}

/// Drop every parser from the process-wide registry.
pub fn reset_parsers() {
    *PARSERS.write() = ParserRegistry::new();
}

/// Populate `target` using the process-wide registry.
pub fn populate<R: Populate>(target: &mut R) -> Result<(), Error> {
    populate_with(target, &PARSERS.read())
}
