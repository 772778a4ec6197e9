//! Resources embedded in the program.

use super::ResourcePath;
use crate::error::Result;
use std::borrow::Cow;
use std::collections::HashMap;

/// Set of configuration resources packaged with the program.
///
/// Typically filled from `include_bytes!` so the defaults travel inside the
/// binary.
///
/// # Examples
///
/// ```rust
/// use bundled_config::sources::Bundle;
///
/// let bundle = Bundle::new()
///     .with_static("app.yml", b"db:\n  host: localhost\n")
///     .unwrap();
/// assert!(bundle.contains("/app.yml"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Bundle {
    resources: HashMap<String, Cow<'static, [u8]>>,
}

impl Bundle {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource whose bytes live for the whole program.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is not a valid relative resource path.
    pub fn with_static(self, path: &str, bytes: &'static [u8]) -> Result<Self> {
        self.with_cow(path, Cow::Borrowed(bytes))
    }

    /// Add a resource from owned bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is not a valid relative resource path.
    pub fn with_bytes(self, path: &str, bytes: impl Into<Vec<u8>>) -> Result<Self> {
        self.with_cow(path, Cow::Owned(bytes.into()))
    }

    fn with_cow(mut self, path: &str, bytes: Cow<'static, [u8]>) -> Result<Self> {
        let key = ResourcePath::parse(path)?.as_key();
        self.resources.insert(key, bytes);
        Ok(self)
    }

    /// Get the bytes of a bundled resource.
    pub fn get(&self, path: &ResourcePath) -> Option<&[u8]> {
        self.resources.get(&path.as_key()).map(|b| b.as_ref())
    }

    /// Check whether a resource is bundled under `path`.
    pub fn contains(&self, path: &str) -> bool {
        ResourcePath::parse(path)
            .map(|p| self.get(&p).is_some())
            .unwrap_or(false)
    }

    /// Number of bundled resources.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether the bundle is empty.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
