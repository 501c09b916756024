//! Source file scanner building a [`Package`] from a directory.

use log::{debug, info};
use quote::ToTokens;
use std::fs;
use std::path::{Path, PathBuf};
use syn::{Fields, Item, ItemStruct, ItemUse, Type, UseTree};
use walkdir::WalkDir;

use crate::assembler::HEADER;
use crate::errors::{Error, Result, ScanError};
use crate::model::{Field, File, Import, Package, Struct};
use crate::tag::parse_field_tag;

/// Scan the `.rs` files directly inside `dir`.
///
/// Files are read in file-name order and files carrying the generated-file
/// header are skipped. The first unreadable file, syntax error or malformed
/// `#[accessor]` attribute aborts the scan.
pub fn scan_directory(dir: &Path) -> Result<Package> {
    let metadata = fs::metadata(dir).map_err(|err| Error::InvalidDirectory {
        path: dir.to_path_buf(),
        reason: err.to_string(),
    })?;
    if !metadata.is_dir() {
        return Err(Error::InvalidDirectory {
            path: dir.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|err| ScanError::Io {
            path: err.path().map_or_else(|| dir.to_path_buf(), Path::to_path_buf),
            source: err.into(),
        })?;
        let path = entry.path();

        if !entry.file_type().is_file()
            || path.extension().is_none_or(|ext| ext != "rs")
            || entry.file_name().to_string_lossy().starts_with('.')
        {
            continue;
        }

        let content = fs::read_to_string(path).map_err(|source| ScanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if is_generated(&content) {
            debug!("skipping generated file {}", path.display());
            continue;
        }
        let file = scan_source(path, &content)?;
        debug!(
            "scanned {} ({} structs, {} imports)",
            path.display(),
            file.structs.len(),
            file.imports.len()
        );
        files.push(file);
    }

    if files.is_empty() {
        return Err(ScanError::NoSourceFiles { path: dir.to_path_buf() }.into());
    }

    let name = module_name(dir)?;
    info!("scanned module `{name}` from {} files", files.len());

    Ok(Package {
        name,
        directory: dir.to_path_buf(),
        files,
    })
}

/// Whether `content` starts with the generated-file header.
fn is_generated(content: &str) -> bool {
    content
        .strip_prefix("//! ")
        .is_some_and(|rest| rest.starts_with(HEADER))
}

/// Parse one file's source text.
pub fn scan_source(path: &Path, content: &str) -> Result<File, ScanError> {
    let syntax = syn::parse_file(content).map_err(|err| ScanError::syntax(path.to_path_buf(), &err))?;

    let mut imports = Vec::new();
    let mut structs = Vec::new();

    for item in &syntax.items {
        match item {
            Item::Use(item_use) => collect_imports(item_use, &mut imports),
            Item::Struct(item_struct) => structs.push(extract_struct(item_struct, path)?),
            _ => {}
        }
    }

    Ok(File {
        path: path.to_path_buf(),
        imports,
        structs,
    })
}

fn extract_struct(item: &ItemStruct, path: &Path) -> Result<Struct, ScanError> {
    let mut fields = Vec::new();

    if let Fields::Named(named) = &item.fields {
        for field in &named.named {
            let Some(ident) = &field.ident else {
                continue;
            };
            let tag = parse_field_tag(&field.attrs).map_err(|err| ScanError::tag(path.to_path_buf(), &err))?;
            fields.push(Field {
                name: ident.to_string(),
                declared_type: type_text(&field.ty),
                tag,
            });
        }
    }

    Ok(Struct {
        name: item.ident.to_string(),
        generics: item.generics.clone(),
        fields,
    })
}

/// Flatten a `use` declaration into the names it binds.
fn collect_imports(item: &ItemUse, imports: &mut Vec<Import>) {
    let prefix = if item.leading_colon.is_some() {
        vec![String::new()]
    } else {
        Vec::new()
    };
    flatten_use_tree(&item.tree, prefix, imports);
}

fn flatten_use_tree(tree: &UseTree, mut prefix: Vec<String>, imports: &mut Vec<Import>) {
    match tree {
        UseTree::Path(path) => {
            prefix.push(path.ident.to_string());
            flatten_use_tree(&path.tree, prefix, imports);
        }
        UseTree::Name(name) => {
            if name.ident == "self" {
                if let Some(last) = prefix.last().filter(|last| !last.is_empty()) {
                    imports.push(Import::new(last.clone(), prefix.join("::")));
                }
            } else {
                let alias = name.ident.to_string();
                prefix.push(alias.clone());
                imports.push(Import::new(alias, prefix.join("::")));
            }
        }
        UseTree::Rename(rename) => {
            if rename.rename == "_" {
                return;
            }
            if rename.ident != "self" {
                prefix.push(rename.ident.to_string());
            }
            if prefix.iter().any(|segment| !segment.is_empty()) {
                imports.push(Import::new(rename.rename.to_string(), prefix.join("::")));
            }
        }
        UseTree::Group(group) => {
            for item in &group.items {
                flatten_use_tree(item, prefix.clone(), imports);
            }
        }
        UseTree::Glob(_) => {}
    }
}

/// Render a type as compact source text, e.g. `&'a mut Vec<chrono::Utc>`.
pub fn type_text(ty: &Type) -> String {
    let mut text = ty.to_token_stream().to_string();
    for (from, to) in [
        (" :: ", "::"),
        (":: ", "::"),
        (" ::", "::"),
        (" <", "<"),
        ("< ", "<"),
        (" >", ">"),
        (" ,", ","),
        (" ;", ";"),
        ("& ", "&"),
    ] {
        text = text.replace(from, to);
    }
    text
}

/// Name of the module a directory represents.
///
/// A directory holding `lib.rs` or `main.rs` is a crate root.
fn module_name(dir: &Path) -> Result<String> {
    if dir.join("lib.rs").is_file() || dir.join("main.rs").is_file() {
        return Ok("crate".to_string());
    }

    let resolved: PathBuf = fs::canonicalize(dir).map_err(|err| Error::InvalidDirectory {
        path: dir.to_path_buf(),
        reason: err.to_string(),
    })?;

    resolved
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| Error::InvalidDirectory {
            path: dir.to_path_buf(),
            reason: "directory has no name".to_string(),
        })
}
