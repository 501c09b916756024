//! Error types for scanning and generation.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Top-level error returned by the scanner and the generator.
#[derive(Debug, Error)]
pub enum Error {
    /// The scan target is missing, unreadable, or not a directory.
    #[error("invalid directory {path}: {reason}")]
    InvalidDirectory { path: PathBuf, reason: String },

    /// Source files could not be read or parsed.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// An accessor could not be turned into tokens.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The assembled output is not valid Rust.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Writing the generated file failed.
    #[error("failed to write {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No struct with the requested name exists in the scanned module.
    #[error("no struct named `{type_name}` found in {directory}")]
    TypeNotFound { type_name: String, directory: PathBuf },

    /// Structs with the requested name live in more than one file. The
    /// generated file is a child of a single module, so only one can be served.
    #[error("struct `{type_name}` is declared in several files: {}", display_paths(.files))]
    AmbiguousType { type_name: String, files: Vec<PathBuf> },

    /// The requested struct exists but none of its fields carry `#[accessor]`.
    #[error("struct `{type_name}` has no fields tagged with #[accessor]")]
    NoAccessors { type_name: String },
}

/// Error raised while reading source files into a [`Package`](crate::Package).
#[derive(Debug, Error)]
pub enum ScanError {
    /// The directory contains no `.rs` files.
    #[error("no Rust source files found in {path}")]
    NoSourceFiles { path: PathBuf },

    /// A directory entry or file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file is not valid Rust.
    #[error("syntax error in {file}:{line}:{column}: {message}")]
    Syntax {
        file: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// An `#[accessor]` attribute is malformed.
    #[error("invalid #[accessor] attribute in {file}:{line}:{column}: {message}")]
    Tag {
        file: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
}

impl ScanError {
    /// Build a syntax error positioned at the start of the syn error's span.
    pub fn syntax(file: PathBuf, err: &syn::Error) -> Self {
        let start = err.span().start();
        Self::Syntax {
            file,
            line: start.line,
            column: start.column + 1,
            message: err.to_string(),
        }
    }

    /// Build a tag error positioned at the start of the syn error's span.
    pub fn tag(file: PathBuf, err: &syn::Error) -> Self {
        let start = err.span().start();
        Self::Tag {
            file,
            line: start.line,
            column: start.column + 1,
            message: err.to_string(),
        }
    }
}

/// Failure to turn a struct's accessors into tokens.
#[derive(Debug, Error)]
#[error("cannot render accessors for `{type_name}`: {message}")]
pub struct RenderError {
    pub type_name: String,
    pub message: String,
}

impl RenderError {
    pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message: message.into(),
        }
    }
}

/// The assembled buffer did not parse as a Rust file.
///
/// Carries the unformatted buffer so callers can inspect or persist it.
#[derive(Debug, Error)]
#[error("generated source is not valid Rust: {source}")]
pub struct FormatError {
    pub raw: String,
    #[source]
    pub source: syn::Error,
}

impl FormatError {
    /// The unformatted buffer that failed to parse.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
