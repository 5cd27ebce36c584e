//! Field-by-field population of records from the environment

use std::any::{type_name, Any};
use std::env::{self, VarError};

use crate::annotation::{Annotation, FieldDescriptor};
use crate::error::Error;
use crate::registry::ParserRegistry;

/// A record whose annotated fields can be populated from the environment.
///
/// Implement it with `#[derive(Populate)]`.
pub trait Populate {
    /// Annotated fields, in declaration order.
    const FIELDS: &'static [FieldDescriptor];

    /// Resolve every annotated field through `populator`, stopping at the
    /// first error.
    fn populate_fields(&mut self, populator: &Populator<'_>) -> Result<(), Error>;
}

/// Resolves the fields of a single record during one populate call.
pub struct Populator<'r> {
    record: &'static str,
    registry: &'r ParserRegistry,
}

impl<'r> Populator<'r> {
    pub(crate) fn new<R: ?Sized>(registry: &'r ParserRegistry) -> Self {
        Self {
            record: type_name::<R>(),
            registry,
        }
    }

    /// Populate `slot` according to `field`'s annotation.
    ///
    /// `String` slots receive the raw value; any other type goes through the
    /// parser registered for it. A malformed annotation leaves the slot as is.
    pub fn resolve<T: 'static>(&self, field: &FieldDescriptor, slot: &mut T) -> Result<(), Error> {
        let Some(annotation) = Annotation::parse(field.annotation) else {
            tracing::warn!(
                record = self.record,
                field = field.name,
                annotation = field.annotation,
                "skipping field with malformed annotation"
            );
            return Ok(());
        };

        let variable = annotation.variable();
        let value = match env::var(variable) {
            Ok(value) => {
                tracing::debug!(record = self.record, field = field.name, variable, "read from environment");
                value
            }
            Err(VarError::NotUnicode(_)) => {
                return Err(Error::NotUnicode {
                    variable: variable.to_string(),
                    field: field.name,
                    record: self.record,
                })
            }
            Err(VarError::NotPresent) => match annotation.default() {
                Some(default) => {
                    tracing::debug!(record = self.record, field = field.name, variable, "using default");
                    default.to_string()
                }
                None => {
                    return Err(Error::MissingRequiredVariable {
                        variable: variable.to_string(),
                        field: field.name,
                        record: self.record,
                    })
                }
            },
        };

        if let Some(text) = (&mut *slot as &mut dyn Any).downcast_mut::<String>() {
            *text = value;
            return Ok(());
        }

        let target = type_name::<T>();
        let parser = self
            .registry
            .get::<T>()
            .ok_or_else(|| Error::UnresolvedParser {
                variable: variable.to_string(),
                field: field.name,
                record: self.record,
                target,
            })?;

        *slot = parser(&value).map_err(|source| Error::ParseFailure {
            variable: variable.to_string(),
            field: field.name,
            record: self.record,
            target,
            source,
        })?;

        Ok(())
    }
}

/// Populate `target` using the parsers in `registry`.
///
/// Fields resolved before a failure keep their new values.
pub fn populate_with<R: Populate>(target: &mut R, registry: &ParserRegistry) -> Result<(), Error> {
    let populator = Populator::new::<R>(registry);
    target.populate_fields(&populator)
}

/// Describe the environment variables `R` reads, one line per annotated field.
///
/// Fields with a malformed annotation are omitted, as they are never populated.
pub fn requirements<R: Populate>() -> String {
    let mut out = String::new();
    for field in R::FIELDS {
        let Some(annotation) = field.parse() else {
            continue;
        };

        let line = match annotation.default() {
            None => format!("{} ({}): required\n", annotation.variable(), field.name),
            Some(default) => format!(
                "{} ({}): optional, default {:?}\n",
                annotation.variable(),
                field.name,
                default
            ),
        };
        out.push_str(&line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Populate;
    use serial_test::serial;

    #[derive(Debug, Default, Populate)]
    struct ServerConfig {
        #[environment = "POPULATE_TEST_HOST"]
        host: String,
        #[environment = "POPULATE_TEST_PORT, 8080"]
        port: u16,
        #[environment = "POPULATE_TEST_HOSTS,a,b"]
        malformed: String,
        untouched: String,
    }

    fn registry() -> ParserRegistry {
        let mut registry = ParserRegistry::new();
        registry.register(|value: &str| value.parse::<u16>());
        registry
    }

    #[test]
    fn test_fields_table() {
        assert_eq!(ServerConfig::FIELDS.len(), 3);
        assert_eq!(ServerConfig::FIELDS[0], FieldDescriptor::new("host", "POPULATE_TEST_HOST"));
        assert_eq!(ServerConfig::FIELDS[1].name, "port");
    }

    #[test]
    #[serial]
    fn test_populate_with_default_and_skip() {
        env::set_var("POPULATE_TEST_HOST", "localhost");
        env::remove_var("POPULATE_TEST_PORT");
        env::set_var("POPULATE_TEST_HOSTS", "ignored");

        let mut config = ServerConfig {
            malformed: "before".to_string(),
            untouched: "kept".to_string(),
            ..Default::default()
        };
        populate_with(&mut config, &registry()).unwrap();

        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 8080);
        assert_eq!(config.malformed, "before");
        assert_eq!(config.untouched, "kept");

        env::remove_var("POPULATE_TEST_HOST");
        env::remove_var("POPULATE_TEST_HOSTS");
    }

    #[test]
    #[serial]
    fn test_env_value_is_not_trimmed() {
        env::set_var("POPULATE_TEST_HOST", "  spaced  ");

        let mut config = ServerConfig::default();
        populate_with(&mut config, &registry()).unwrap();
        assert_eq!(config.host, "  spaced  ");

        env::remove_var("POPULATE_TEST_HOST");
    }

    #[test]
    #[serial]
    fn test_first_error_keeps_earlier_fields() {
        env::set_var("POPULATE_TEST_HOST", "localhost");
        env::set_var("POPULATE_TEST_PORT", "not-a-port");

        let mut config = ServerConfig::default();
        let err = populate_with(&mut config, &registry()).unwrap_err();

        assert!(matches!(err, Error::ParseFailure { field: "port", .. }));
        assert_eq!(config.host, "localhost");

        env::remove_var("POPULATE_TEST_HOST");
        env::remove_var("POPULATE_TEST_PORT");
    }

    #[test]
    fn test_requirements() {
        assert_eq!(
            requirements::<ServerConfig>(),
            "POPULATE_TEST_HOST (host): required\nPOPULATE_TEST_PORT (port): optional, default \"8080\"\n"
        );
    }
}
