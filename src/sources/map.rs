//! In-memory override source.

use super::OverrideSource;
use std::collections::HashMap;

/// Override source backed by an in-memory map.
///
/// Useful for passing a snapshot of overrides explicitly instead of reading
/// process state.
///
/// # Examples
///
/// ```rust
/// use bundled_config::sources::{MapSource, OverrideSource};
///
/// let source = MapSource::new("fixture").with_value("DB_HOST", "prod.example.com");
/// assert_eq!(source.lookup("DB_HOST").as_deref(), Some("prod.example.com"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    name: String,
    values: HashMap<String, String>,
}

impl MapSource {
    /// Create an empty source with a name used in log lines.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: HashMap::new(),
        }
    }

    /// Add a value under an exact override name.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapSource {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            name: "map".to_string(),
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl OverrideSource for MapSource {
    fn lookup(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}
