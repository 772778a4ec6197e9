//! Resource locator: external files first, bundled defaults second.

use super::{Bundle, ResourcePath};
use crate::error::{ConfigError, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where a resolved resource came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A file found next to the program on disk.
    External(PathBuf),
    /// The copy packaged with the program.
    Bundled(ResourcePath),
}

impl ConfigSource {
    /// Whether the resource came from an external file.
    pub fn is_external(&self) -> bool {
        matches!(self, Self::External(_))
    }

    /// Get a human-readable name for this source (for logging/debugging).
    pub fn name(&self) -> String {
        match self {
            Self::External(path) => format!("file:{}", path.display()),
            Self::Bundled(path) => format!("bundled:{}", path),
        }
    }
}

/// A resolved resource, fully read into memory.
#[derive(Debug, Clone)]
pub struct Resource {
    /// Where the bytes came from.
    pub source: ConfigSource,
    /// The raw content.
    pub bytes: Vec<u8>,
}

/// Decides between an external file and the bundled default for a path.
///
/// # Examples
///
/// ```rust,no_run
/// use bundled_config::sources::{Bundle, ResourceLocator};
///
/// # fn example() -> bundled_config::error::Result<()> {
/// let bundle = Bundle::new().with_static("app.yml", b"db:\n  host: localhost\n")?;
/// let locator = ResourceLocator::from_executable(bundle)?;
/// let resource = locator.resolve("app.yml")?;
/// println!("loaded {}", resource.source.name());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ResourceLocator {
    base_dir: PathBuf,
    bundle: Bundle,
}

impl ResourceLocator {
    /// Create a locator that looks for external files under `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>, bundle: Bundle) -> Self {
        Self {
            base_dir: base_dir.into(),
            bundle,
        }
    }

    /// Create a locator whose base directory is derived from the running executable.
    ///
    /// See [`base_dir_for_executable`] for the derivation.
    ///
    /// # Errors
    ///
    /// Returns an error if the executable path cannot be determined.
    pub fn from_executable(bundle: Bundle) -> Result<Self> {
        let exe = std::env::current_exe().map_err(|e| ConfigError::io("<current executable>", e))?;
        Ok(Self::new(base_dir_for_executable(&exe), bundle))
    }

    /// The directory searched for external files.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// The bundled defaults.
    pub fn bundle(&self) -> &Bundle {
        &self.bundle
    }

    /// Resolve `path`, preferring an external regular file over the bundled copy.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidPath`] if `path` is not a relative resource path
    /// - [`ConfigError::IoError`] if the external file exists but cannot be read
    /// - [`ConfigError::ResourceNotFound`] if neither copy exists
    pub fn resolve(&self, path: &str) -> Result<Resource> {
        let resource_path = ResourcePath::parse(path)?;
        let external = resource_path.to_fs_path(&self.base_dir);

        debug!(path = %external.display(), "checking for external resource");
        if external.is_file() {
            let bytes = std::fs::read(&external).map_err(|e| ConfigError::io(&external, e))?;
            debug!(path = %external.display(), bytes = bytes.len(), "using external resource");
            return Ok(Resource {
                source: ConfigSource::External(external),
                bytes,
            });
        }

        match self.bundle.get(&resource_path) {
            Some(bytes) => {
                debug!(path = %resource_path, bytes = bytes.len(), "using bundled resource");
                Ok(Resource {
                    bytes: bytes.to_vec(),
                    source: ConfigSource::Bundled(resource_path),
                })
            }
            None => Err(ConfigError::ResourceNotFound(resource_path.as_key())),
        }
    }
}

/// Directory that holds external resources for a program at `exe`.
///
/// An installed program keeps its overrides next to the executable. A program
/// run from a cargo build tree keeps them in the project directory, the one
/// containing `target/`. Only the layouts cargo produces count as a build tree:
/// `target/<profile>`, `target/<triple>/<profile>`, each optionally followed by
/// `deps/` or `examples/`. A `target` directory anywhere else in the path is an
/// ordinary directory.
pub fn base_dir_for_executable(exe: &Path) -> PathBuf {
    let exe_dir = exe.parent().unwrap_or_else(|| Path::new("."));
    cargo_project_dir(exe_dir).unwrap_or(exe_dir).to_path_buf()
}

fn cargo_project_dir(exe_dir: &Path) -> Option<&Path> {
    let is_named = |dir: &Path, name: &str| dir.file_name() == Some(OsStr::new(name));

    let profile_dir = if is_named(exe_dir, "deps") || is_named(exe_dir, "examples") {
        exe_dir.parent()?
    } else {
        exe_dir
    };

    let above_profile = profile_dir.parent()?;
    let target_dir = if is_named(above_profile, "target") {
        above_profile
    } else if is_target_triple(above_profile) {
        above_profile.parent().filter(|dir| is_named(*dir, "target"))?
    } else {
        return None;
    };
    target_dir.parent()
}

/// `x86_64-unknown-linux-gnu`, `aarch64-apple-darwin`, ...
fn is_target_triple(dir: &Path) -> bool {
    dir.file_name()
        .and_then(OsStr::to_str)
        .is_some_and(|name| name.matches('-').count() >= 2)
}
