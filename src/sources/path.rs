//! Relative resource paths.

use crate::error::{ConfigError, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// A validated, slash-separated path relative to the resource root.
///
/// Both `/` and `\` separate segments. Empty and `.` segments are dropped, so
/// `/conf//./app.yml` and `conf/app.yml` name the same resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourcePath {
    segments: Vec<String>,
}

impl ResourcePath {
    /// Parse and validate a requested path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPath`] if the path is empty, has a drive or
    /// scheme prefix, or contains a `..` segment.
    pub fn parse(path: &str) -> Result<Self> {
        let invalid = |reason| ConfigError::InvalidPath {
            path: path.to_string(),
            reason,
        };

        let mut segments = Vec::new();
        for segment in path.split(['/', '\\']) {
            match segment {
                "" | "." => continue,
                ".." => return Err(invalid("parent directory segments are not allowed")),
                s if s.contains(':') && segments.is_empty() => {
                    return Err(invalid("drive or scheme prefixes are not allowed"));
                }
                s => segments.push(s.to_string()),
            }
        }

        if segments.is_empty() {
            return Err(invalid("path names no resource"));
        }
        Ok(Self { segments })
    }

    /// Canonical `/`-joined form, used as the bundle key.
    pub fn as_key(&self) -> String {
        self.segments.join("/")
    }

    /// Join onto a filesystem directory using the platform separator.
    pub fn to_fs_path(&self, base: &Path) -> PathBuf {
        let mut full = base.to_path_buf();
        full.extend(&self.segments);
        full
    }

    /// The lowercased extension of the final segment, if any.
    pub fn extension(&self) -> Option<String> {
        let file_name = self.segments.last()?;
        let (stem, ext) = file_name.rsplit_once('.')?;
        if stem.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_separators() {
        let path = ResourcePath::parse("/conf//./app.yml").unwrap();
        assert_eq!(path.as_key(), "conf/app.yml");

        let path = ResourcePath::parse("conf\\app.yml").unwrap();
        assert_eq!(path.as_key(), "conf/app.yml");
    }

    #[test]
    fn test_rejects_parent_segments() {
        let err = ResourcePath::parse("conf/../../etc/passwd").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPath { .. }));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(ResourcePath::parse("").is_err());
        assert!(ResourcePath::parse("/./").is_err());
    }

    #[test]
    fn test_rejects_drive_prefix() {
        assert!(ResourcePath::parse("C:\\app.yml").is_err());
        assert!(ResourcePath::parse("file:app.yml").is_err());
    }

    #[test]
    fn test_extension_is_lowercased() {
        let path = ResourcePath::parse("App.YML").unwrap();
        assert_eq!(path.extension().as_deref(), Some("yml"));
    }

    #[test]
    fn test_no_extension() {
        assert_eq!(ResourcePath::parse("Makefile").unwrap().extension(), None);
        assert_eq!(ResourcePath::parse(".env").unwrap().extension(), None);
    }

    #[test]
    fn test_to_fs_path() {
        let path = ResourcePath::parse("conf/app.yml").unwrap();
        assert_eq!(
            path.to_fs_path(Path::new("/srv/app")),
            Path::new("/srv/app").join("conf").join("app.yml")
        );
    }
}
