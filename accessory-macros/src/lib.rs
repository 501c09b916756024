use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod accessors_macro;

/// Register the `#[accessor(...)]` field attribute on a struct.
///
/// Expands to nothing. Accessor methods are written to a separate file by
/// `accessory-build` or the `accessory` CLI; this derive lets the annotated
/// struct compile and rejects malformed attributes early.
///
/// # Example
///
/// ```text
/// #[derive(Accessors)]
/// pub struct User {
///     #[accessor(getter)]
///     name: String,
///     #[accessor(getter, setter = "update_age")]
///     age: u32,
/// }
/// ```
#[proc_macro_derive(Accessors, attributes(accessor))]
pub fn derive_accessors(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match accessors_macro::expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
