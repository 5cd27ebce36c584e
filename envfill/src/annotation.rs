//! Annotation payloads and field descriptors

/// Separator between the variable name and its default.
const SEPARATOR: char = ',';

/// One annotated field of a record, as emitted by `#[derive(Populate)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name, used in diagnostics.
    pub name: &'static str,
    /// Raw annotation payload, `NAME` or `NAME,DEFAULT`.
    pub annotation: &'static str,
}

impl FieldDescriptor {
    /// Describe the field `name` annotated with `annotation`.
    pub const fn new(name: &'static str, annotation: &'static str) -> Self {
        Self { name, annotation }
    }

    /// Parse this field's payload, `None` if it is malformed.
    pub fn parse(&self) -> Option<Annotation<'static>> {
        Annotation::parse(self.annotation)
    }
}

/// A parsed annotation payload.
///
/// `NAME` makes the variable required; `NAME,DEFAULT` makes it optional with
/// `DEFAULT` as its literal fallback. Both parts are trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annotation<'a> {
    variable: &'a str,
    default: Option<&'a str>,
}

impl<'a> Annotation<'a> {
    /// Parse `NAME` or `NAME,DEFAULT`.
    ///
    /// Any other number of comma-separated parts is not an annotation and
    /// yields `None`. Commas cannot be escaped.
    pub fn parse(payload: &'a str) -> Option<Self> {
        let mut parts = payload.split(SEPARATOR);
        let variable = parts.next()?.trim();
        let default = parts.next().map(str::trim);

        if parts.next().is_some() {
            return None;
        }

        Some(Self { variable, default })
    }

    /// Name of the environment variable, trimmed.
    pub fn variable(&self) -> &'a str {
        self.variable
    }

    /// Literal default, trimmed, if one was given.
    pub fn default(&self) -> Option<&'a str> {
        self.default
    }

    /// Whether population fails when the variable is unset.
    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_required() {
        let annotation = Annotation::parse("  DATABASE_URL ").unwrap();
        assert_eq!(annotation.variable(), "DATABASE_URL");
        assert_eq!(annotation.default(), None);
        assert!(annotation.is_required());
    }

    #[test]
    fn test_parse_with_default() {
        let annotation = Annotation::parse("PORT ,  9012 ").unwrap();
        assert_eq!(annotation.variable(), "PORT");
        assert_eq!(annotation.default(), Some("9012"));
        assert!(!annotation.is_required());
    }

    #[test]
    fn test_parse_empty_default() {
        let annotation = Annotation::parse("GREETING,").unwrap();
        assert_eq!(annotation.default(), Some(""));
    }

    #[test]
    fn test_parse_too_many_parts() {
        assert_eq!(Annotation::parse("HOSTS,a,b"), None);
    }

    #[test]
    fn test_parse_empty_payload_is_required() {
        let annotation = Annotation::parse("").unwrap();
        assert_eq!(annotation.variable(), "");
        assert!(annotation.is_required());
    }

    #[test]
    fn test_descriptor_parse() {
        const FIELD: FieldDescriptor = FieldDescriptor::new("port", "PORT,8080");
        let annotation = FIELD.parse().unwrap();
        assert_eq!(annotation.variable(), "PORT");
        assert_eq!(annotation.default(), Some("8080"));
    }
}
