//! Environment variable override source.

use super::OverrideSource;

/// Environment variable override source.
///
/// Reads the live process environment on every lookup. Variables are never written.
///
/// # Examples
///
/// ```rust
/// use bundled_config::sources::{EnvSource, OverrideSource};
///
/// // DB_HOST overrides db.host
/// let source = EnvSource::new();
/// assert_eq!(source.name(), "env");
///
/// // MYAPP_DB_HOST overrides db.host
/// let scoped = EnvSource::with_prefix("MYAPP_");
/// assert_eq!(scoped.name(), "env:MYAPP_*");
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    prefix: String,
}

impl EnvSource {
    /// Create a source that looks up override names verbatim.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source that prepends `prefix` to every override name.
    ///
    /// The prefix is used as given; include any separator yourself (`"APP_"`).
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn variable_name(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

impl OverrideSource for EnvSource {
    fn lookup(&self, key: &str) -> Option<String> {
        // Non-unicode values are treated as unset.
        std::env::var(self.variable_name(key)).ok()
    }

    fn name(&self) -> String {
        if self.prefix.is_empty() {
            "env".to_string()
        } else {
            format!("env:{}*", self.prefix)
        }
    }
}

#[cfg(test)]
#[allow(unsafe_code)] // For env var manipulation in tests
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    fn test_variable_name() {
        assert_eq!(EnvSource::new().variable_name("DB_HOST"), "DB_HOST");
        assert_eq!(
            EnvSource::with_prefix("APP_").variable_name("DB_HOST"),
            "APP_DB_HOST"
        );
    }

    #[test]
    #[serial]
    fn test_lookup_reads_process_env() {
        unsafe {
            env::set_var("BUNDLED_CONFIG_ENV_TEST_HOST", "db.internal");
        }

        let source = EnvSource::with_prefix("BUNDLED_CONFIG_ENV_TEST_");
        assert_eq!(source.lookup("HOST"), Some("db.internal".to_string()));
        assert_eq!(source.lookup("MISSING"), None);

        unsafe {
            env::remove_var("BUNDLED_CONFIG_ENV_TEST_HOST");
        }
        assert_eq!(source.lookup("HOST"), None);
    }
}
