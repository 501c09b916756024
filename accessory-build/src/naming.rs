//! Naming rules for receivers, accessor methods and output files.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

use crate::model::{Field, Presence};

/// Suffix appended to the snake-cased type name of a default output file.
pub const OUTPUT_SUFFIX: &str = "_accessor";

/// Extension of generated files.
pub const SOURCE_EXTENSION: &str = "rs";

/// An uppercase letter followed by lowercase letters, preceded by anything.
static WORD_START: Lazy<Regex> = Lazy::new(|| Regex::new("(.)([A-Z][a-z]+)").expect("valid regex"));

/// A lowercase letter or digit directly followed by an uppercase letter.
static CAMEL_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new("([a-z0-9])([A-Z])").expect("valid regex"));

/// Receiver binding for a struct: the override if given, else the struct's
/// first letter in lowercase.
pub fn receiver_name(user_input: Option<&str>, struct_name: &str) -> String {
    match user_input {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => struct_name
            .chars()
            .next()
            .map(|first| first.to_lowercase().collect())
            .unwrap_or_default(),
    }
}

/// Method name of a field's getter, or `None` when it has none.
///
/// The default is the field name itself (`name`, not a capitalized `Name`),
/// following the Rust convention for accessors.
pub fn getter_name(field: &Field) -> Option<String> {
    match &field.tag.as_ref()?.getter {
        Presence::Absent => None,
        Presence::Default => Some(field.name.clone()),
        Presence::Named(name) => Some(name.clone()),
    }
}

/// Method name of a field's setter, or `None` when it has none.
///
/// The default is `set_<field>` rather than `SetName`.
pub fn setter_name(field: &Field) -> Option<String> {
    match &field.tag.as_ref()?.setter {
        Presence::Absent => None,
        Presence::Default => {
            let bare = field.name.strip_prefix("r#").unwrap_or(&field.name);
            Some(format!("set_{bare}"))
        }
        Presence::Named(name) => Some(name.clone()),
    }
}

/// Split boundaries where a capitalized word follows any character.
///
/// `HTTPServer` becomes `HTTP_Server`.
pub fn split_word_starts(name: &str) -> String {
    WORD_START.replace_all(name, "${1}_${2}").into_owned()
}

/// Split boundaries where an uppercase letter follows a lowercase letter or digit.
///
/// `userProfile` becomes `user_Profile`.
pub fn split_camel_boundaries(name: &str) -> String {
    CAMEL_BOUNDARY.replace_all(name, "${1}_${2}").into_owned()
}

/// Convert a type name to snake case, e.g. `HTTPServer` to `http_server`.
pub fn to_snake_case(name: &str) -> String {
    split_camel_boundaries(&split_word_starts(name)).to_lowercase()
}

/// Path of the generated file inside `dir`.
///
/// An override is used as given; otherwise the name is derived from the type,
/// so `UserProfile` is written to `user_profile_accessor.rs`.
pub fn output_file(user_input: Option<&Path>, type_name: &str, dir: &Path) -> PathBuf {
    match user_input {
        Some(path) if !path.as_os_str().is_empty() => dir.join(path),
        _ => dir.join(format!("{}{OUTPUT_SUFFIX}.{SOURCE_EXTENSION}", to_snake_case(type_name))),
    }
}
