//! Attribute parsing for `#[environment = "..."]` annotations.
//!
//! Only the shape of the attribute is checked here. The payload itself
//! (`NAME` or `NAME,DEFAULT`) is interpreted at population time.

use syn::{Expr, ExprLit, Field, Lit};

/// Name of the field attribute carrying the annotation payload.
pub const ATTRIBUTE: &str = "environment";

/// Parsed `#[environment = "..."]` attribute from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Raw annotation payload, `None` when the field is not annotated.
    pub annotation: Option<String>,
}

impl FieldAttrs {
    /// Extract the `#[environment = "..."]` attribute from a struct field.
    ///
    /// Unrelated attributes are ignored so other derives can process them.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident(ATTRIBUTE) {
                continue;
            }

            if attrs.annotation.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "duplicate `environment` attribute",
                ));
            }

            let meta = attr.meta.require_name_value()?;
            match &meta.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(s), ..
                }) => attrs.annotation = Some(s.value()),
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "expected a string literal such as `\"NAME\"` or `\"NAME,DEFAULT\"`",
                    ))
                }
            }
        }

        Ok(attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_parse_required_annotation() {
        let field: Field = parse_quote! {
            #[environment = "DATABASE_URL"]
            pub database_url: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.annotation, Some("DATABASE_URL".to_string()));
    }

    #[test]
    fn test_parse_annotation_with_default() {
        let field: Field = parse_quote! {
            #[environment = "PORT, 8080"]
            pub port: u16
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.annotation, Some("PORT, 8080".to_string()));
    }

    #[test]
    fn test_unannotated_field() {
        let field: Field = parse_quote! {
            #[doc = "not ours"]
            pub untouched: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert!(attrs.annotation.is_none());
    }

    #[test]
    fn test_reject_non_string_payload() {
        let field: Field = parse_quote! {
            #[environment = 42]
            pub port: u16
        };

        assert!(FieldAttrs::from_field(&field).is_err());
    }

    #[test]
    fn test_reject_list_form() {
        let field: Field = parse_quote! {
            #[environment(name = "PORT")]
            pub port: u16
        };

        assert!(FieldAttrs::from_field(&field).is_err());
    }

    #[test]
    fn test_reject_duplicate_attribute() {
        let field: Field = parse_quote! {
            #[environment = "A"]
            #[environment = "B"]
            pub value: String
        };

        let err = FieldAttrs::from_field(&field).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }
}
