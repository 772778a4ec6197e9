//! Derivation of override lookup names from configuration key paths.

use std::fmt;

/// Name under which an override for one configuration key is looked up.
///
/// Derived by joining the key path with `.`, upper-casing, and replacing every `.`
/// with `_`. No other character is touched: `db-pool.size` becomes `DB-POOL_SIZE`.
///
/// # Examples
///
/// ```rust
/// use bundled_config::core::OverrideKey;
///
/// assert_eq!(OverrideKey::from_segments(["db", "host"]).as_str(), "DB_HOST");
/// assert_eq!(OverrideKey::from_dotted("server.port").as_str(), "SERVER_PORT");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OverrideKey(String);

impl OverrideKey {
    /// Derive the key from a dotted configuration key such as `db.host`.
    pub fn from_dotted(path: &str) -> Self {
        Self(path.to_uppercase().replace('.', "_"))
    }

    /// Derive the key from the sequence of mapping keys leading to a value.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dotted = segments
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(".");
        Self::from_dotted(&dotted)
    }

    /// The derived name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OverrideKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for OverrideKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
