//! Parsing of `#[accessor(...)]` field attributes.
//!
//! Shared by the directory scanner and the `Accessors` derive so both accept
//! exactly the same syntax.

use quote::ToTokens;
use syn::{Attribute, LitStr, Token};

use crate::model::{Presence, Tag};

/// Name of the field attribute that opts a field into accessor generation.
pub const ATTRIBUTE: &str = "accessor";

/// Parse every `#[accessor(...)]` attribute on a field into one [`Tag`].
///
/// Returns `Ok(None)` when the field has no such attribute. Accepted options:
///
/// ```text
/// #[accessor(getter)]
/// #[accessor(getter, setter)]
/// #[accessor(getter = "name_ref", setter = "update_name")]
/// ```
pub fn parse_field_tag(attrs: &[Attribute]) -> syn::Result<Option<Tag>> {
    let mut parsed: Option<Tag> = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident(ATTRIBUTE)) {
        let tag = parsed.get_or_insert_with(Tag::default);

        attr.parse_nested_meta(|meta| {
            let slot = if meta.path.is_ident("getter") {
                &mut tag.getter
            } else if meta.path.is_ident("setter") {
                &mut tag.setter
            } else {
                let option = meta.path.to_token_stream().to_string().replace(' ', "");
                return Err(meta.error(format!(
                    "unknown accessor option `{option}`, expected `getter` or `setter`"
                )));
            };

            if slot.is_present() {
                return Err(meta.error("accessor option given more than once"));
            }

            *slot = if meta.input.peek(Token![=]) {
                let name: LitStr = meta.value()?.parse()?;
                if name.value().is_empty() {
                    return Err(syn::Error::new(name.span(), "accessor name must not be empty"));
                }
                Presence::Named(name.value())
            } else {
                Presence::Default
            };

            Ok(())
        })?;
    }

    Ok(parsed)
}
