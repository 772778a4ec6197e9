//! Process-level property table.
//!
//! A process-wide string table consulted after the environment. The program sets
//! entries at startup (from its own command line, a launcher file, ...) and the
//! loader only ever reads them.

use super::OverrideSource;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::LazyLock;

static PROPERTIES: LazyLock<RwLock<HashMap<String, String>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Set a process-level property, returning the previous value.
pub fn set_property(key: impl Into<String>, value: impl Into<String>) -> Option<String> {
    PROPERTIES.write().insert(key.into(), value.into())
}

/// Get a process-level property.
pub fn property(key: &str) -> Option<String> {
    PROPERTIES.read().get(key).cloned()
}

/// Remove a process-level property, returning its value.
pub fn remove_property(key: &str) -> Option<String> {
    PROPERTIES.write().remove(key)
}

/// Set many process-level properties at once.
///
/// # Examples
///
/// ```rust
/// use bundled_config::sources::properties;
///
/// properties::load_properties([("DOC_LOAD_A", "1"), ("DOC_LOAD_B", "2")]);
/// assert_eq!(properties::property("DOC_LOAD_B").as_deref(), Some("2"));
/// ```
pub fn load_properties<I, K, V>(entries: I)
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut table = PROPERTIES.write();
    for (key, value) in entries {
        table.insert(key.into(), value.into());
    }
}

/// Override source backed by the process-level property table.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertySource;

impl PropertySource {
    /// Create a new property table source.
    pub fn new() -> Self {
        Self
    }
}

impl OverrideSource for PropertySource {
    fn lookup(&self, key: &str) -> Option<String> {
        property(key)
    }

    fn name(&self) -> String {
        "properties".to_string()
    }
}
