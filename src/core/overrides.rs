//! Ordered chain of override sources.

use crate::core::OverrideKey;
use crate::sources::{EnvSource, OverrideSource, PropertySource};
use std::fmt;

/// A value found for an override key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOverride {
    /// The replacement value.
    pub value: String,
    /// Name of the source that supplied it.
    pub source: String,
}

/// Record of one value replaced during a merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedOverride {
    /// Dotted path of the replaced value, e.g. `db.host`.
    pub path: String,
    /// The key the override was found under.
    pub key: OverrideKey,
    /// Name of the source that supplied it.
    pub source: String,
}

/// Override sources consulted in order; the first non-blank value wins.
///
/// A value that is empty or only whitespace counts as absent, so a blank
/// environment variable falls through to the property table.
///
/// # Examples
///
/// ```rust
/// use bundled_config::core::{OverrideKey, Overrides};
/// use bundled_config::sources::MapSource;
///
/// let overrides = Overrides::empty()
///     .with_source(MapSource::new("env").with_value("DB_HOST", "  "))
///     .with_source(MapSource::new("props").with_value("DB_HOST", "db.internal"));
///
/// let found = overrides.resolve(&OverrideKey::from_dotted("db.host")).unwrap();
/// assert_eq!(found.value, "db.internal");
/// assert_eq!(found.source, "props");
/// ```
pub struct Overrides {
    sources: Vec<Box<dyn OverrideSource>>,
}

impl Overrides {
    /// A chain with no sources; nothing is ever overridden.
    pub fn empty() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// The process environment, then the process-level property table.
    pub fn process() -> Self {
        Self::empty()
            .with_source(EnvSource::new())
            .with_source(PropertySource::new())
    }

    /// Append a source with lower precedence than those already present.
    pub fn push<S: OverrideSource + 'static>(&mut self, source: S) {
        self.sources.push(Box::new(source));
    }

    /// Builder form of [`push`](Self::push).
    pub fn with_source<S: OverrideSource + 'static>(mut self, source: S) -> Self {
        self.push(source);
        self
    }

    /// Find the first non-blank value for `key`.
    pub fn resolve(&self, key: &OverrideKey) -> Option<ResolvedOverride> {
        self.sources.iter().find_map(|source| {
            source
                .lookup(key.as_str())
                .filter(|value| !value.trim().is_empty())
                .map(|value| ResolvedOverride {
                    value,
                    source: source.name(),
                })
        })
    }

    /// Get the list of source names in precedence order.
    pub fn source_names(&self) -> Vec<String> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Whether the chain has no sources.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl Default for Overrides {
    fn default() -> Self {
        Self::process()
    }
}

impl fmt::Debug for Overrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overrides")
            .field("sources", &self.source_names())
            .finish()
    }
}
