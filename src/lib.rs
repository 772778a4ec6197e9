//! # bundled-config
//!
//! Load configuration resources that ship inside the program, let a deployed copy
//! on disk replace them, and let environment variables override individual values.
//!
//! ## Overview
//!
//! For a requested relative path such as `app.yml`:
//! - If a regular file exists at that path next to the program, its bytes are
//!   returned exactly as read
//! - Otherwise the bundled copy is used, and for YAML and properties resources each
//!   string value is checked for an override
//!
//! An override for the key path `db.host` is looked up as `DB_HOST`: first in the
//! process environment, then in the process-level property table. Blank values are
//! ignored.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bundled_config::prelude::*;
//!
//! # fn example() -> Result<()> {
//! let loader = ResourceLoader::builder()
//!     .with_resource("app.yml", b"db:\n  host: localhost\n  port: \"5432\"\n")?
//!     .build()?;
//!
//! // DB_HOST=prod.example.com replaces db.host
//! let yaml = loader.get_resource_string("app.yml")?;
//! println!("{}", yaml);
//! # Ok(())
//! # }
//! ```
//!
//! ## Failure behavior
//!
//! Locating a resource fails loudly: missing resources and unreadable external files
//! are errors. Merging overrides fails soft: a bundled YAML or properties resource
//! that cannot be parsed or re-serialized comes back as empty content. Check
//! [`LoadedResource::is_empty`](core::LoadedResource::is_empty) when that matters.
//!
//! ## Limitations
//!
//! - Only string values in YAML are override-eligible; numbers and booleans keep
//!   their bundled values. Quote a value (`port: "5432"`) to make it overridable.
//! - When any YAML override applies, the document is re-serialized and its comments
//!   and formatting are lost.
//! - A YAML document that repeats a key within one mapping fails to parse, so a
//!   bundled copy like that comes back as empty content.

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod format;
pub mod sources;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::core::{LoadedResource, OverrideKey, Overrides, ResourceLoader};
    pub use crate::error::{ConfigError, Result};
    pub use crate::format::ConfigFormat;
    pub use crate::sources::{Bundle, ConfigSource};
}
