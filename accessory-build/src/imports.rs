//! Import resolution for generated accessors.

use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::model::{Field, File};

/// Imports needed by the accessors of one generation run, keyed by alias.
///
/// Iteration is ascending by alias, so rendering is stable across runs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportSet {
    entries: BTreeMap<String, String>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the import a field's type needs, looked up in its owning file.
    ///
    /// The first path seen for an alias wins. Qualifiers with no matching
    /// `use` in `file` are skipped.
    pub fn record(&mut self, field: &Field, file: &File) {
        let Some(qualifier) = qualifier(&field.declared_type) else {
            return;
        };
        if self.entries.contains_key(qualifier) {
            return;
        }
        if let Some(import) = file.import(qualifier) {
            self.entries.insert(import.alias.clone(), import.path.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `(alias, path)` pairs in ascending alias order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(alias, path)| (alias.as_str(), path.as_str()))
    }

    /// One `use` declaration per line, valid inside the generated module.
    ///
    /// Relative paths are rebased by one level (see [`rebase`]). The alias is
    /// only spelled out when it differs from the path's last segment.
    pub fn render(&self) -> String {
        self.iter()
            .map(|(alias, path)| {
                let path = rebase(path);
                if last_segment(&path) == alias {
                    format!("use {path};\n")
                } else {
                    format!("use {path} as {alias};\n")
                }
            })
            .collect()
    }
}

/// Rewrite a `use` path taken from a scanned file so it resolves from the
/// generated module, which sits one level below that file.
///
/// `self::x` becomes `super::x` and `super::x` becomes `super::super::x`.
/// Crate-rooted, absolute and extern paths are returned unchanged.
pub fn rebase(path: &str) -> Cow<'_, str> {
    let head = path.split("::").next().unwrap_or(path);
    match head {
        "self" => Cow::Owned(format!("super{}", &path[head.len()..])),
        "super" => Cow::Owned(format!("super::{path}")),
        _ => Cow::Borrowed(path),
    }
}

/// Leading module segment of a type path, after dropping reference and
/// pointer markers. `&'a t::Duration` has qualifier `t`; `u32` and
/// `::std::time::Duration` have none.
pub fn qualifier(declared_type: &str) -> Option<&str> {
    let (head, _) = strip_pointer(declared_type).split_once("::")?;
    let head = head.trim();
    (!head.is_empty()).then_some(head)
}

fn strip_pointer(mut ty: &str) -> &str {
    loop {
        ty = ty.trim_start();
        if let Some(rest) = ty.strip_prefix('&') {
            ty = rest.trim_start();
            if ty.starts_with('\'') {
                ty = ty.split_once(char::is_whitespace).map_or("", |(_, rest)| rest);
            }
            ty = strip_keyword(ty, "mut");
        } else if let Some(rest) = ty.strip_prefix('*') {
            ty = strip_keyword(strip_keyword(rest.trim_start(), "const"), "mut");
        } else {
            return ty;
        }
    }
}

fn strip_keyword<'a>(ty: &'a str, keyword: &str) -> &'a str {
    match ty.strip_prefix(keyword) {
        Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start(),
        _ => ty,
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Import, Presence, Tag};
    use std::path::PathBuf;

    fn field(declared_type: &str) -> Field {
        Field {
            name: "value".to_string(),
            declared_type: declared_type.to_string(),
            tag: Some(Tag {
                getter: Presence::Default,
                setter: Presence::Absent,
            }),
        }
    }

    fn file(imports: &[(&str, &str)]) -> File {
        File {
            path: PathBuf::from("lib.rs"),
            imports: imports.iter().map(|(alias, path)| Import::new(*alias, *path)).collect(),
            structs: Vec::new(),
        }
    }

    #[test]
    fn test_qualifier() {
        assert_eq!(qualifier("u32"), None);
        assert_eq!(qualifier("time::Duration"), Some("time"));
        assert_eq!(qualifier("&t::Duration"), Some("t"));
        assert_eq!(qualifier("&'a mut chrono::DateTime<Utc>"), Some("chrono"));
        assert_eq!(qualifier("*const ffi::CStr"), Some("ffi"));
        assert_eq!(qualifier("&&mutex::Guard"), Some("mutex"));
        assert_eq!(qualifier("::std::time::Duration"), None);
        assert_eq!(qualifier("&mutable::Thing"), Some("mutable"));
    }

    #[test]
    fn test_local_types_need_no_import() {
        let mut set = ImportSet::new();
        set.record(&field("String"), &file(&[("String", "std::string::String")]));
        assert!(set.is_empty());
    }

    #[test]
    fn test_unresolved_qualifier_is_skipped() {
        let mut set = ImportSet::new();
        set.record(&field("chrono::NaiveDate"), &file(&[("time", "std::time")]));
        assert!(set.is_empty());
    }

    #[test]
    fn test_first_recorded_path_wins() {
        let mut set = ImportSet::new();
        set.record(&field("json::Value"), &file(&[("json", "serde_json")]));
        set.record(&field("json::Value"), &file(&[("json", "simd_json")]));
        assert_eq!(set.iter().collect::<Vec<_>>(), [("json", "serde_json")]);
    }

    #[test]
    fn test_rebase() {
        assert_eq!(rebase("super::common::ids"), "super::super::common::ids");
        assert_eq!(rebase("super::super::ids"), "super::super::super::ids");
        assert_eq!(rebase("self::ids"), "super::ids");
        assert_eq!(rebase("super"), "super::super");
        assert_eq!(rebase("crate::ids"), "crate::ids");
        assert_eq!(rebase("::std::time"), "::std::time");
        assert_eq!(rebase("std::time"), "std::time");
        assert_eq!(rebase("superb::Thing"), "superb::Thing");
    }

    #[test]
    fn test_render_rebases_relative_paths() {
        let imports = file(&[("ids", "super::common::ids"), ("local", "self::types"), ("t", "std::time")]);
        let mut set = ImportSet::new();
        set.record(&field("ids::UserId"), &imports);
        set.record(&field("local::Kind"), &imports);
        set.record(&field("t::Duration"), &imports);

        assert_eq!(
            set.render(),
            "use super::super::common::ids;\nuse super::types as local;\nuse std::time as t;\n"
        );
    }

    #[test]
    fn test_render_sorted_with_aliases() {
        let imports = file(&[("time", "std::time"), ("t", "std::time"), ("chrono", "chrono")]);
        let mut set = ImportSet::new();
        set.record(&field("time::Instant"), &imports);
        set.record(&field("chrono::Utc"), &imports);
        set.record(&field("t::Duration"), &imports);

        assert_eq!(set.len(), 3);
        assert_eq!(
            set.render(),
            "use chrono;\nuse std::time as t;\nuse std::time;\n"
        );
    }
}
