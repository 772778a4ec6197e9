//! Builder for constructing ResourceLoader instances.

use crate::core::{Overrides, ResourceLoader};
use crate::error::Result;
use crate::sources::{Bundle, OverrideSource, ResourceLocator};
use std::path::PathBuf;

/// Builder for constructing a [`ResourceLoader`].
///
/// Defaults: external files are searched next to the running executable, and
/// overrides come from the process environment and then the process-level
/// property table.
///
/// # Examples
///
/// ```rust,no_run
/// use bundled_config::prelude::*;
/// use bundled_config::sources::MapSource;
///
/// # fn example() -> Result<()> {
/// let loader = ResourceLoader::builder()
///     .with_resource("app.yml", b"db:\n  password: changeme\n")?
///     .with_base_dir("/etc/myapp")
///     .without_process_overrides()
///     .with_override_source(MapSource::new("secrets").with_value("DB_PASSWORD", "hunter2"))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ResourceLoaderBuilder {
    bundle: Bundle,
    base_dir: Option<PathBuf>,
    overrides: Overrides,
}

impl ResourceLoaderBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            bundle: Bundle::new(),
            base_dir: None,
            overrides: Overrides::process(),
        }
    }

    /// Replace the bundled resources.
    pub fn with_bundle(mut self, bundle: Bundle) -> Self {
        self.bundle = bundle;
        self
    }

    /// Add one bundled resource.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is not a valid relative resource path.
    pub fn with_resource(mut self, path: &str, bytes: &'static [u8]) -> Result<Self> {
        self.bundle = self.bundle.with_static(path, bytes)?;
        Ok(self)
    }

    /// Search for external files under `dir` instead of next to the executable.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Drop the default environment and property table sources.
    pub fn without_process_overrides(mut self) -> Self {
        self.overrides = Overrides::empty();
        self
    }

    /// Append an override source after the ones already configured.
    pub fn with_override_source<S: OverrideSource + 'static>(mut self, source: S) -> Self {
        self.overrides.push(source);
        self
    }

    /// Build the loader.
    ///
    /// # Errors
    ///
    /// Returns an error if no base directory was given and the executable path
    /// cannot be determined.
    pub fn build(self) -> Result<ResourceLoader> {
        let locator = match self.base_dir {
            Some(dir) => ResourceLocator::new(dir, self.bundle),
            None => ResourceLocator::from_executable(self.bundle)?,
        };
        Ok(ResourceLoader::new(locator, self.overrides))
    }
}

impl Default for ResourceLoaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::MapSource;
    use std::path::Path;

    #[test]
    fn test_builder_defaults_to_process_overrides() {
        let builder = ResourceLoaderBuilder::new();
        assert_eq!(builder.overrides.source_names(), vec!["env", "properties"]);
        assert!(builder.base_dir.is_none());
    }

    #[test]
    fn test_builder_override_chain_order() {
        let loader = ResourceLoaderBuilder::new()
            .with_base_dir("/srv/app")
            .with_override_source(MapSource::new("extra"))
            .build()
            .unwrap();
        assert_eq!(
            loader.overrides().source_names(),
            vec!["env", "properties", "extra"]
        );
    }

    #[test]
    fn test_builder_without_process_overrides() {
        let loader = ResourceLoaderBuilder::new()
            .with_base_dir("/srv/app")
            .without_process_overrides()
            .with_override_source(MapSource::new("only"))
            .build()
            .unwrap();
        assert_eq!(loader.overrides().source_names(), vec!["only"]);
    }

    #[test]
    fn test_builder_accumulates_resources() {
        let loader = ResourceLoaderBuilder::new()
            .with_resource("a.yml", b"a: b\n")
            .unwrap()
            .with_resource("conf/b.properties", b"b=c\n")
            .unwrap()
            .with_base_dir("/srv/app")
            .build()
            .unwrap();

        assert_eq!(loader.locator().bundle().len(), 2);
        assert_eq!(loader.locator().base_dir(), Path::new("/srv/app"));
    }

    #[test]
    fn test_builder_rejects_invalid_resource_path() {
        assert!(ResourceLoaderBuilder::new().with_resource("", b"").is_err());
    }

    #[test]
    fn test_builder_uses_executable_dir() {
        let loader = ResourceLoaderBuilder::new().build().unwrap();
        assert!(!loader.locator().base_dir().as_os_str().is_empty());
    }
}
