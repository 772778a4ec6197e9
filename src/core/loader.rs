//! Top-level resource loader.

use crate::core::{AppliedOverride, Overrides, ResourceLoaderBuilder};
use crate::error::Result;
use crate::format::ConfigFormat;
use crate::sources::{Bundle, ConfigSource, ResourceLocator};
use std::io::Cursor;
use tracing::debug;

/// A resource after resolution and override merging.
#[derive(Debug, Clone)]
pub struct LoadedResource {
    /// Where the content came from.
    pub source: ConfigSource,
    /// Format selected from the extension. External files are always `Passthrough`.
    pub format: ConfigFormat,
    /// Final content. Empty if a bundled resource failed to merge.
    pub bytes: Vec<u8>,
    /// Values replaced by overrides.
    pub applied: Vec<AppliedOverride>,
}

impl LoadedResource {
    /// Whether there is no content; a failed merge produces empty content.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Loads configuration resources, applying overrides to bundled defaults.
///
/// External files found next to the program are returned exactly as read.
/// Bundled YAML and properties resources get environment (then property table)
/// overrides merged in; anything else is returned as bundled.
///
/// # Examples
///
/// ```rust,no_run
/// use bundled_config::prelude::*;
///
/// # fn example() -> Result<()> {
/// let loader = ResourceLoader::builder()
///     .with_resource("app.yml", b"db:\n  host: localhost\n")?
///     .build()?;
///
/// let text = loader.get_resource_string("app.yml")?;
/// println!("{}", text);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ResourceLoader {
    locator: ResourceLocator,
    overrides: Overrides,
}

impl ResourceLoader {
    /// Create a loader from its parts.
    pub fn new(locator: ResourceLocator, overrides: Overrides) -> Self {
        Self { locator, overrides }
    }

    /// Create a loader with the executable-derived base directory and
    /// process overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the executable path cannot be determined.
    pub fn from_bundle(bundle: Bundle) -> Result<Self> {
        Ok(Self::new(
            ResourceLocator::from_executable(bundle)?,
            Overrides::process(),
        ))
    }

    /// Create a new builder.
    pub fn builder() -> ResourceLoaderBuilder {
        ResourceLoaderBuilder::new()
    }

    /// The locator used to find resources.
    pub fn locator(&self) -> &ResourceLocator {
        &self.locator
    }

    /// The override chain applied to bundled resources.
    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }

    /// Resolve `path` and merge overrides if it is bundled.
    ///
    /// # Errors
    ///
    /// Propagates locator errors (not found, unreadable external file, invalid
    /// path). Merge failures are not errors; they yield empty content.
    pub fn load(&self, path: &str) -> Result<LoadedResource> {
        let resource = self.locator.resolve(path)?;

        let resource_path = match resource.source {
            ConfigSource::External(path) => {
                return Ok(LoadedResource {
                    source: ConfigSource::External(path),
                    format: ConfigFormat::Passthrough,
                    bytes: resource.bytes,
                    applied: Vec::new(),
                });
            }
            ConfigSource::Bundled(resource_path) => resource_path,
        };

        let format = ConfigFormat::from_path(&resource_path);
        let merged = format.merge(&resource.bytes, &self.overrides);
        debug!(
            path = %resource_path,
            format = ?format,
            overrides = merged.applied.len(),
            "loaded bundled resource"
        );

        Ok(LoadedResource {
            source: ConfigSource::Bundled(resource_path),
            format,
            bytes: merged.bytes,
            applied: merged.applied,
        })
    }

    /// Final bytes for `path`.
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn get_resource(&self, path: &str) -> Result<Vec<u8>> {
        Ok(self.load(path)?.bytes)
    }

    /// Final content for `path` as a readable stream.
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn get_resource_reader(&self, path: &str) -> Result<Cursor<Vec<u8>>> {
        Ok(Cursor::new(self.get_resource(path)?))
    }

    /// Final content for `path` decoded as UTF-8, replacing invalid sequences.
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn get_resource_string(&self, path: &str) -> Result<String> {
        let bytes = self.get_resource(path)?;
        Ok(String::from_utf8(bytes)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
    }
}
