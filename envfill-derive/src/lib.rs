//! Derive macro implementation for envfill

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

mod attrs;

use attrs::FieldAttrs;

/// `Populate` derive macro
///
/// Implements `envfill::Populate` for a struct with named fields. Every field
/// annotated with `#[environment = "NAME"]` or `#[environment = "NAME,DEFAULT"]`
/// becomes an entry of the generated field table and is resolved, in
/// declaration order, when the struct is populated. Unannotated fields are
/// left untouched.
///
/// # Example
///
/// See the `envfill` crate documentation for usage examples.
#[proc_macro_derive(Populate, attributes(environment))]
pub fn derive_populate(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn invalid_target(input: &DeriveInput) -> syn::Error {
    syn::Error::new_spanned(
        &input.ident,
        format!(
            "expected Populate to be derived on a struct with named fields, not \"{}\"",
            input.ident
        ),
    )
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => return Err(invalid_target(input)),
        },
        _ => return Err(invalid_target(input)),
    };

    let mut descriptors = Vec::new();
    let mut resolutions = Vec::new();

    for field in fields {
        let Some(annotation) = FieldAttrs::from_field(field)?.annotation else {
            continue;
        };
        let Some(ident) = &field.ident else {
            continue;
        };

        let field_name = ident.unraw().to_string();
        let index = descriptors.len();

        descriptors.push(quote! {
            ::envfill::FieldDescriptor::new(#field_name, #annotation)
        });
        resolutions.push(quote! {
            populator.resolve(
                &<Self as ::envfill::Populate>::FIELDS[#index],
                &mut self.#ident,
            )?;
        });
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::envfill::Populate for #struct_name #ty_generics #where_clause {
            const FIELDS: &'static [::envfill::FieldDescriptor] = &[#(#descriptors),*];

            #[allow(unused_variables)]
            fn populate_fields(
                &mut self,
                populator: &::envfill::Populator<'_>,
            ) -> ::core::result::Result<(), ::envfill::Error> {
                #(#resolutions)*
                ::core::result::Result::Ok(())
            }
        }
    })
}
