//! Accessor generation for one type of a scanned module.

use log::{debug, info, warn};
use std::path::{Path, PathBuf};

use crate::assembler::{assemble, format_source};
use crate::emitter::render_struct;
use crate::errors::{Error, Result};
use crate::fs::{Filesystem, OsFilesystem};
use crate::imports::ImportSet;
use crate::model::Package;
use crate::naming::output_file;
use crate::scanner::scan_directory;

/// Caller-supplied overrides for a generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Output path, relative to the scanned directory. Derived from the type
    /// name when unset.
    pub output: Option<PathBuf>,
    /// Receiver binding used in accessor bodies. Derived from the struct name
    /// when unset; `self` disables the binding.
    pub receiver: Option<String>,
    /// Write the unformatted buffer when formatting fails. The format error is
    /// still returned. The kept file starts with the generated-file header, so
    /// later scans skip it.
    pub persist_unformatted: bool,
}

/// Generated source for one type, not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub path: PathBuf,
    pub source: String,
    /// Number of getter and setter methods in `source`.
    pub accessors: usize,
}

/// Outcome of [`generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub path: PathBuf,
    pub accessors: usize,
    /// `false` when the file already held identical content.
    pub written: bool,
}

/// Render the accessor file for `type_name` without writing it.
///
/// Every struct named `type_name` contributes one `impl` block, in source
/// order. Fails with [`Error::TypeNotFound`] when no struct matches, with
/// [`Error::AmbiguousType`] when matches come from more than one file and with
/// [`Error::NoAccessors`] when the matches have no tagged fields.
pub fn render(package: &Package, type_name: &str, options: &GenerateOptions) -> Result<Rendered> {
    let mut imports = ImportSet::new();
    let mut impls = Vec::new();
    let mut files: Vec<&Path> = Vec::new();

    for (file, st) in package.structs_named(type_name) {
        if !files.contains(&file.path.as_path()) {
            files.push(&file.path);
        }

        for field in st.fields.iter().filter(|field| field.has_accessors()) {
            imports.record(field, file);
        }

        if let Some(rendered) = render_struct(st, options.receiver.as_deref())? {
            debug!(
                "rendered {} accessors for `{}` from {}",
                rendered.methods.len(),
                st.name,
                file.path.display()
            );
            impls.push(rendered);
        }
    }

    match files.as_slice() {
        [] => {
            return Err(Error::TypeNotFound {
                type_name: type_name.to_string(),
                directory: package.directory.clone(),
            });
        }
        [_] => {}
        _ => {
            return Err(Error::AmbiguousType {
                type_name: type_name.to_string(),
                files: files.iter().map(|path| path.to_path_buf()).collect(),
            });
        }
    }

    if impls.is_empty() {
        return Err(Error::NoAccessors {
            type_name: type_name.to_string(),
        });
    }

    let accessors = impls.iter().map(|rendered| rendered.methods.len()).sum();
    let raw = assemble(&package.name, type_name, &imports, &impls);
    let source = format_source(raw)?;

    Ok(Rendered {
        path: output_file(options.output.as_deref(), type_name, &package.directory),
        source,
        accessors,
    })
}

/// Generate the accessor file for `type_name` and persist it through `fs`.
///
/// Identical existing content is left untouched. Nothing is written on
/// failure, except the unformatted buffer when
/// [`GenerateOptions::persist_unformatted`] is set.
pub fn generate(
    fs: &dyn Filesystem,
    package: &Package,
    type_name: &str,
    options: &GenerateOptions,
) -> Result<GenerateReport> {
    let rendered = match render(package, type_name, options) {
        Ok(rendered) => rendered,
        Err(Error::Format(err)) if options.persist_unformatted => {
            let path = output_file(options.output.as_deref(), type_name, &package.directory);
            warn!("writing unformatted output to {} for inspection", path.display());
            persist(fs, &path, err.raw())?;
            return Err(Error::Format(err));
        }
        Err(err) => return Err(err),
    };

    if is_up_to_date(fs, &rendered) {
        debug!("{} is up to date", rendered.path.display());
        return Ok(GenerateReport {
            path: rendered.path,
            accessors: rendered.accessors,
            written: false,
        });
    }

    persist(fs, &rendered.path, &rendered.source)?;
    info!("generated {} with {} accessors", rendered.path.display(), rendered.accessors);

    Ok(GenerateReport {
        path: rendered.path,
        accessors: rendered.accessors,
        written: true,
    })
}

/// Whether the file on `fs` already holds exactly the rendered source.
pub fn is_up_to_date(fs: &dyn Filesystem, rendered: &Rendered) -> bool {
    fs.read_to_string(&rendered.path)
        .is_ok_and(|existing| existing == rendered.source)
}

fn persist(fs: &dyn Filesystem, path: &Path, contents: &str) -> Result<()> {
    fs.write(path, contents).map_err(|source| Error::Persist {
        path: path.to_path_buf(),
        source,
    })
}

/// Builder for scanning a directory and generating accessors for one type.
pub struct AccessorGenerator {
    type_name: String,
    scan_path: PathBuf,
    options: GenerateOptions,
}

impl AccessorGenerator {
    /// Create a generator for `type_name`, scanning the current directory.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            scan_path: PathBuf::from("."),
            options: GenerateOptions::default(),
        }
    }

    /// Set the directory holding the type's source files.
    ///
    /// Default: `.`
    pub fn scan_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.scan_path = path.into();
        self
    }

    /// Set the output file, relative to the scanned directory.
    ///
    /// Default: `<type_name in snake case>_accessor.rs`
    pub fn output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = Some(path.into());
        self
    }

    /// Set the receiver binding used in accessor bodies.
    ///
    /// Default: first letter of the struct name, lowercased.
    pub fn receiver(mut self, name: impl Into<String>) -> Self {
        self.options.receiver = Some(name.into());
        self
    }

    /// Keep the unformatted output on disk when formatting fails.
    pub fn persist_unformatted(mut self, enabled: bool) -> Self {
        self.options.persist_unformatted = enabled;
        self
    }

    /// Scan and render without writing.
    pub fn render(&self) -> Result<Rendered> {
        let package = scan_directory(&self.scan_path)?;
        render(&package, &self.type_name, &self.options)
    }

    /// Scan, generate and write through `fs`.
    pub fn run_with(&self, fs: &dyn Filesystem) -> Result<GenerateReport> {
        let package = scan_directory(&self.scan_path)?;
        generate(fs, &package, &self.type_name, &self.options)
    }

    /// Scan, generate and write to disk.
    pub fn run(&self) -> Result<GenerateReport> {
        self.run_with(&OsFilesystem)
    }
}
