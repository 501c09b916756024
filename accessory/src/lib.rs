//! Getter and setter generation for tagged struct fields.
//!
//! Mark fields with `#[accessor(...)]` on a struct deriving [`Accessors`], then
//! run the `accessory` CLI (or [`generate_accessors`] from a build script) to
//! write the accessor methods into a generated file.
//!
//! ```text
//! use accessory::Accessors;
//!
//! #[derive(Accessors)]
//! pub struct User {
//!     #[accessor(getter)]
//!     name: String,
//!     #[accessor(getter, setter)]
//!     age: u32,
//! }
//!
//! #[path = "user_accessor.rs"]
//! mod user_accessor;
//! ```
//!
//! `accessory --type User src/models` then writes `src/models/user_accessor.rs`
//! with `name()`, `age()` and `set_age(val: u32)`.

pub use accessory_build::*;
pub use accessory_macros::Accessors;

/// Version reported by the CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
