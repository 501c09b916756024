//! Assembly and formatting of the generated file.

use std::fmt::Write;

use crate::emitter::RenderedImpl;
use crate::errors::FormatError;
use crate::imports::ImportSet;

/// First line of every generated file.
pub const HEADER: &str = "Code generated by accessory; DO NOT EDIT.";

/// Concatenate header, module preamble, imports and `impl` blocks.
///
/// The result is valid Rust but unformatted; pass it to [`format_source`].
pub fn assemble(package_name: &str, type_name: &str, imports: &ImportSet, impls: &[RenderedImpl]) -> String {
    let mut buf = String::new();

    let _ = writeln!(buf, "//! {HEADER}");
    let _ = writeln!(buf, "//!");
    let _ = writeln!(buf, "//! Accessors for `{type_name}` in module `{package_name}`.");
    buf.push('\n');
    buf.push_str("#![allow(unused_imports)]\n\n");
    buf.push_str("use super::*;\n");

    if !imports.is_empty() {
        buf.push_str(&imports.render());
    }

    for rendered in impls {
        buf.push('\n');
        let _ = writeln!(buf, "{}", rendered.tokens);
    }

    buf
}

/// Parse and pretty-print an assembled buffer.
///
/// On failure the unformatted buffer travels with the error.
pub fn format_source(raw: String) -> Result<String, FormatError> {
    match syn::parse_file(&raw) {
        Ok(file) => Ok(prettyplease::unparse(&file)),
        Err(source) => Err(FormatError { raw, source }),
    }
}
