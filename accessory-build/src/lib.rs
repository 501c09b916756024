//! Getter and setter generator for Rust structs.
//!
//! This crate scans a directory of source files for struct fields marked with
//! `#[accessor(...)]` and writes accessor methods for one type into a
//! generated file next to them.
//!
//! # Example
//!
//! In your `build.rs`:
//!
//! ```ignore
//! fn main() {
//!     accessory_build::generate_accessors("User")
//!         .scan_path("src/models")
//!         .run()
//!         .expect("Failed to generate User accessors");
//!
//!     println!("cargo:rerun-if-changed=src/models/");
//! }
//! ```
//!
//! The generated `user_accessor.rs` starts with `use super::*;`, so declare it
//! as a child of the module that defines the struct:
//!
//! ```ignore
//! // src/models/user.rs
//! #[path = "user_accessor.rs"]
//! mod user_accessor;
//! ```

pub mod assembler;
pub mod emitter;
pub mod errors;
pub mod fs;
pub mod generator;
pub mod imports;
pub mod model;
pub mod naming;
pub mod scanner;
pub mod tag;

pub use errors::{Error, FormatError, RenderError, Result, ScanError};
pub use fs::{Filesystem, MemoryFilesystem, OsFilesystem};
pub use generator::{AccessorGenerator, GenerateOptions, GenerateReport, Rendered, generate, is_up_to_date, render};
pub use model::{Field, File, Import, Package, Presence, Struct, Tag};
pub use scanner::scan_directory;
pub use tag::parse_field_tag;

/// Create a generator for `type_name` with default settings.
///
/// # Example
///
/// ```ignore
/// accessory_build::generate_accessors("UserProfile")
///     .scan_path("src/models")
///     .receiver("self")
///     .run()
///     .expect("Failed to generate accessors");
/// ```
pub fn generate_accessors(type_name: impl Into<String>) -> AccessorGenerator {
    AccessorGenerator::new(type_name)
}
