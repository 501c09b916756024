//! In-memory model of a scanned module.
//!
//! Built once by the scanner and only read afterwards. Declaration order of
//! files, structs and fields is the order used for generated output.

use std::path::PathBuf;

/// A directory of Rust source files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    /// Module name the directory represents (`crate` for a crate root).
    pub name: String,
    /// The scanned directory.
    pub directory: PathBuf,
    /// Source files, sorted by file name.
    pub files: Vec<File>,
}

impl Package {
    /// Iterate over every struct named `type_name` together with its owning file.
    pub fn structs_named<'a>(&'a self, type_name: &'a str) -> impl Iterator<Item = (&'a File, &'a Struct)> + 'a {
        self.files.iter().flat_map(move |file| {
            file.structs
                .iter()
                .filter(move |st| st.name == type_name)
                .map(move |st| (file, st))
        })
    }
}

/// One source file. Imports are scoped to the file that declares them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub path: PathBuf,
    pub imports: Vec<Import>,
    pub structs: Vec<Struct>,
}

impl File {
    /// Look up an import by the name it binds in this file.
    pub fn import(&self, alias: &str) -> Option<&Import> {
        self.imports.iter().find(|imp| imp.alias == alias)
    }
}

/// A single name brought into scope by a `use` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    /// Name used in source to refer to the path (`t` in `use std::time as t;`).
    pub alias: String,
    /// Full path (`std::time`).
    pub path: String,
}

impl Import {
    pub fn new(alias: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            path: path.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Struct {
    pub name: String,
    /// Generic parameters and where clause, repeated on the generated `impl`.
    pub generics: syn::Generics,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name as written, including any `r#` prefix.
    pub name: String,
    /// Normalized type text, e.g. `Option<chrono::DateTime<Utc>>`.
    pub declared_type: String,
    /// `None` when the field carries no `#[accessor]` attribute.
    pub tag: Option<Tag>,
}

impl Field {
    /// Whether this field produces at least one accessor.
    pub fn has_accessors(&self) -> bool {
        self.tag.as_ref().is_some_and(|tag| tag.getter.is_present() || tag.setter.is_present())
    }
}

/// Per-field accessor options parsed from `#[accessor(...)]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
    pub getter: Presence<String>,
    pub setter: Presence<String>,
}

/// Tri-state option value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Presence<T> {
    /// Option not given; no accessor.
    #[default]
    Absent,
    /// Option given without a value; use the derived name.
    Default,
    /// Option given with an explicit name, used verbatim.
    Named(T),
}

impl<T> Presence<T> {
    pub fn is_present(&self) -> bool {
        !matches!(self, Presence::Absent)
    }
}
