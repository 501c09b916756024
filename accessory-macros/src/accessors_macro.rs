//! `#[derive(Accessors)]` expansion.
//!
//! The derive emits no items. It exists so `#[accessor(...)]` is accepted on
//! fields, and so malformed attributes fail at compile time instead of at
//! generation time.

use accessory_build::parse_field_tag;
use accessory_build::tag::ATTRIBUTE;
use proc_macro2::TokenStream as TokenStream2;
use syn::{Data, DeriveInput, Error, Fields, Result, spanned::Spanned};

pub(crate) fn expand(input: &DeriveInput) -> Result<TokenStream2> {
    let data = match &input.data {
        Data::Struct(data) => data,
        _ => {
            return Err(Error::new(
                input.ident.span(),
                "Accessors can only be derived for structs",
            ));
        }
    };

    let mut errors = Vec::new();

    for field in &data.fields {
        if let Err(err) = parse_field_tag(&field.attrs) {
            errors.push(err);
            continue;
        }

        if !matches!(data.fields, Fields::Named(_))
            && let Some(attr) = field.attrs.iter().find(|attr| attr.path().is_ident(ATTRIBUTE))
        {
            errors.push(Error::new(attr.span(), "#[accessor] is only supported on named fields"));
        }
    }

    match errors.into_iter().reduce(|mut combined, err| {
        combined.combine(err);
        combined
    }) {
        Some(err) => Err(err),
        None => Ok(TokenStream2::new()),
    }
}
