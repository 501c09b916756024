//! Getter and setter rendering.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Ident, Type};

use crate::errors::RenderError;
use crate::model::{Field, Struct};
use crate::naming::{getter_name, receiver_name, setter_name};

/// Accessors rendered for one struct.
#[derive(Debug, Clone)]
pub struct RenderedImpl {
    /// Method names in emission order.
    pub methods: Vec<String>,
    /// The `impl` block holding every method.
    pub tokens: TokenStream,
}

/// Render the accessors of one struct as a single `impl` block.
///
/// Returns `Ok(None)` when no field of the struct asks for an accessor.
/// Getters come before setters for the same field; fields keep source order.
pub fn render_struct(st: &Struct, receiver_override: Option<&str>) -> Result<Option<RenderedImpl>, RenderError> {
    if !st.fields.iter().any(Field::has_accessors) {
        return Ok(None);
    }

    let struct_ident = parse_ident(&st.name, st, "struct name")?;
    let receiver = receiver_binding(&receiver_name(receiver_override, &st.name), st)?;

    let mut methods = Vec::new();
    let mut items = Vec::new();

    for field in st.fields.iter().filter(|field| field.has_accessors()) {
        let field_ident = parse_ident(&field.name, st, "field name")?;
        let ty: Type = syn::parse_str(&field.declared_type).map_err(|err| {
            RenderError::new(
                &st.name,
                format!("invalid type `{}` on field `{}`: {err}", field.declared_type, field.name),
            )
        })?;

        if let Some(name) = getter_name(field) {
            let method = parse_ident(&name, st, "getter name")?;
            let doc = format!(" Returns a reference to `{}`.", field.name);
            let body = match &receiver {
                Some(recv) => quote! {
                    let #recv = self;
                    &#recv.#field_ident
                },
                None => quote! { &self.#field_ident },
            };
            items.push(quote! {
                #[doc = #doc]
                pub fn #method(&self) -> &#ty {
                    #body
                }
            });
            methods.push(name);
        }

        if let Some(name) = setter_name(field) {
            let method = parse_ident(&name, st, "setter name")?;
            let doc = format!(" Sets `{}`.", field.name);
            let body = match &receiver {
                Some(recv) => quote! {
                    let #recv = self;
                    #recv.#field_ident = val;
                },
                None => quote! { self.#field_ident = val; },
            };
            items.push(quote! {
                #[doc = #doc]
                pub fn #method(&mut self, val: #ty) {
                    #body
                }
            });
            methods.push(name);
        }
    }

    let (impl_generics, ty_generics, where_clause) = st.generics.split_for_impl();
    let tokens = quote! {
        impl #impl_generics #struct_ident #ty_generics #where_clause {
            #(#items)*
        }
    };

    Ok(Some(RenderedImpl { methods, tokens }))
}

/// `None` when the receiver is `self`; otherwise the name bound to `self`
/// at the top of every accessor body.
fn receiver_binding(receiver: &str, st: &Struct) -> Result<Option<Ident>, RenderError> {
    if receiver == "self" {
        return Ok(None);
    }
    parse_ident(receiver, st, "receiver name").map(Some)
}

fn parse_ident(name: &str, st: &Struct, what: &str) -> Result<Ident, RenderError> {
    syn::parse_str(name).map_err(|_| RenderError::new(&st.name, format!("`{name}` is not a valid {what}")))
}
