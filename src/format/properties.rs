//! Properties (`key=value`) codec and override merging.

use super::{ConfigFormat, Merged};
use crate::core::{AppliedOverride, OverrideKey, Overrides};
use crate::error::{ConfigError, Result};
use encoding_rs::UTF_8;
use java_properties::{PropertiesIter, PropertiesWriter};
use std::collections::HashMap;
use tracing::debug;

/// Merge overrides into a properties document, failing soft to empty bytes.
///
/// The document is always re-serialized, so comments and layout are dropped
/// even when nothing is overridden.
pub fn merge_properties(bytes: &[u8], overrides: &Overrides) -> Vec<u8> {
    ConfigFormat::Properties.merge(bytes, overrides).bytes
}

/// Merge overrides into a properties document.
///
/// Each key is looked up under its [`OverrideKey`]: `db.host` under `DB_HOST`.
///
/// # Errors
///
/// Returns [`ConfigError::ParseError`] if the input is not UTF-8 or contains a
/// malformed `\u` escape, and [`ConfigError::SerializeError`] if writing fails.
pub fn try_merge_properties(bytes: &[u8], overrides: &Overrides) -> Result<Merged> {
    let text = std::str::from_utf8(bytes).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    let mut map = PropertyMap::parse(text)?;

    let mut applied = Vec::new();
    for (key, value) in map.iter_mut() {
        let override_key = OverrideKey::from_dotted(key);
        if let Some(found) = overrides.resolve(&override_key) {
            debug!(key = %override_key, path = %key, source = %found.source, "applying override");
            *value = found.value;
            applied.push(AppliedOverride {
                path: key.to_string(),
                key: override_key,
                source: found.source,
            });
        }
    }

    Ok(Merged {
        bytes: map.to_bytes()?,
        applied,
    })
}

/// Flat string-to-string map that keeps insertion order.
///
/// Re-inserting an existing key replaces its value in place.
///
/// # Examples
///
/// ```rust
/// use bundled_config::format::PropertyMap;
///
/// let map = PropertyMap::parse("# comment\ndb.host = localhost\ndb.port:5432\n").unwrap();
/// assert_eq!(map.get("db.host"), Some("localhost"));
/// assert_eq!(map.to_bytes().unwrap(), b"db.host=localhost\ndb.port=5432\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl PropertyMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse properties text, keeping entries in file order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseError`] on a malformed `\u` escape.
    pub fn parse(text: &str) -> Result<Self> {
        let mut map = Self::new();
        PropertiesIter::new_with_encoding(text.as_bytes(), UTF_8)
            .read_into(|key, value| {
                map.insert(key, value);
            })
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        Ok(map)
    }

    /// Write one `key=value` line per entry in insertion order, UTF-8 encoded.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SerializeError`] if the writer fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let serialize_error =
            |e: java_properties::PropertiesError| ConfigError::SerializeError(e.to_string());

        let mut bytes = Vec::new();
        {
            let mut writer = PropertiesWriter::new_with_encoding(&mut bytes, UTF_8);
            for (key, value) in &self.entries {
                writer.write(key, value).map_err(serialize_error)?;
            }
            writer.finish().map_err(serialize_error)?;
        }
        Ok(bytes)
    }

    /// Insert a value, returning the previous one for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&i| self.entries[i].1.as_str())
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate entries in insertion order with mutable values.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut String)> {
        self.entries.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
