//! Error types for populating configuration records

use crate::BoxError;

/// Errors that can occur while populating a record from the environment.
///
/// Population stops at the first error. Every message names the environment
/// variable, the field and the record type; parser-related errors also name
/// the target type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required environment variable is not set and no default was given.
    #[error("required environment variable \"{variable}\" for field \"{field}\" on \"{record}\" was missing")]
    MissingRequiredVariable {
        /// Name of the missing environment variable
        variable: String,
        /// Name of the field being populated
        field: &'static str,
        /// Fully qualified type name of the record
        record: &'static str,
    },

    /// The environment variable is set, but its value is not valid UTF-8.
    #[error("environment variable \"{variable}\" for field \"{field}\" on \"{record}\" was set, but its value is not valid unicode")]
    NotUnicode {
        /// Name of the environment variable
        variable: String,
        /// Name of the field being populated
        field: &'static str,
        /// Fully qualified type name of the record
        record: &'static str,
    },

    /// The field's type is not `String` and no parser is registered for it.
    #[error("the environment variable \"{variable}\" for field \"{field}\" on \"{record}\" was read, but no parser could be found for type \"{target}\"")]
    UnresolvedParser {
        /// Name of the environment variable that was read
        variable: String,
        /// Name of the field being populated
        field: &'static str,
        /// Fully qualified type name of the record
        record: &'static str,
        /// Type name of the field
        target: &'static str,
    },

    /// The registered parser rejected the value.
    #[error("the environment variable \"{variable}\" for field \"{field}\" on \"{record}\" was read, but the parser for type \"{target}\" failed: {source}")]
    ParseFailure {
        /// Name of the environment variable that was read
        variable: String,
        /// Name of the field being populated
        field: &'static str,
        /// Fully qualified type name of the record
        record: &'static str,
        /// Type name of the field
        target: &'static str,
        /// Error returned by the parser
        source: BoxError,
    },
}

impl Error {
    /// Name of the environment variable the error refers to.
    pub fn variable(&self) -> &str {
        match self {
            Self::MissingRequiredVariable { variable, .. }
            | Self::NotUnicode { variable, .. }
            | Self::UnresolvedParser { variable, .. }
            | Self::ParseFailure { variable, .. } => variable,
        }
    }

    /// Name of the field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingRequiredVariable { field, .. }
            | Self::NotUnicode { field, .. }
            | Self::UnresolvedParser { field, .. }
            | Self::ParseFailure { field, .. } => *field,
        }
    }
}
