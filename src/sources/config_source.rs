//! Override source trait.

use std::collections::HashMap;

/// Trait for sources of override values.
///
/// A source answers a single question: is there a value registered under this
/// exact [`OverrideKey`](crate::core::OverrideKey) name? Sources are consulted in
/// chain order by [`Overrides`](crate::core::Overrides).
///
/// Implement this trait to feed overrides from somewhere other than the process
/// environment or property table (a secrets file, a test fixture, ...).
pub trait OverrideSource: Send + Sync {
    /// Look up a raw value by its exact override name.
    ///
    /// Blank values may be returned; the chain treats them as absent.
    fn lookup(&self, key: &str) -> Option<String>;

    /// Get a human-readable name for this source (for logging/debugging).
    fn name(&self) -> String;
}

impl OverrideSource for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }

    fn name(&self) -> String {
        "map".to_string()
    }
}

impl<S: OverrideSource + ?Sized> OverrideSource for Box<S> {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{OverrideKey, Overrides};

    #[test]
    fn test_hash_map_source() {
        let mut values = HashMap::new();
        values.insert("DB_HOST".to_string(), "db.internal".to_string());

        let overrides = Overrides::empty().with_source(values);
        let found = overrides
            .resolve(&OverrideKey::from_dotted("db.host"))
            .unwrap();
        assert_eq!(found.value, "db.internal");
        assert_eq!(found.source, "map");
    }

    #[test]
    fn test_boxed_source() {
        let mut values = HashMap::new();
        values.insert("A".to_string(), "1".to_string());
        let boxed: Box<dyn OverrideSource> = Box::new(values);

        let overrides = Overrides::empty().with_source(boxed);
        assert_eq!(overrides.source_names(), vec!["map"]);
        assert!(overrides.resolve(&OverrideKey::from_dotted("a")).is_some());
    }
}
