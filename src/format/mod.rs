//! Format detection and override merging for bundled resources.

mod properties;
mod yaml;

pub use properties::{PropertyMap, merge_properties, try_merge_properties};
pub use yaml::{merge_yaml, try_merge_yaml};

use crate::core::{AppliedOverride, Overrides};
use crate::error::Result;
use crate::sources::ResourcePath;
use tracing::warn;

/// Content format of a resource, selected from its file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    /// `.yml` / `.yaml`
    Yaml,
    /// `.properties`
    Properties,
    /// Anything else; bytes are returned untouched.
    Passthrough,
}

impl ConfigFormat {
    /// Select the format for a resource path. Extension matching ignores case.
    pub fn from_path(path: &ResourcePath) -> Self {
        match path.extension().as_deref() {
            Some("yml" | "yaml") => Self::Yaml,
            Some("properties") => Self::Properties,
            _ => Self::Passthrough,
        }
    }

    /// Apply overrides, returning the error instead of degrading.
    pub fn try_merge(self, bytes: &[u8], overrides: &Overrides) -> Result<Merged> {
        match self {
            Self::Yaml => try_merge_yaml(bytes, overrides),
            Self::Properties => try_merge_properties(bytes, overrides),
            Self::Passthrough => Ok(Merged::unchanged(bytes)),
        }
    }

    /// Apply overrides; any parse or serialize failure yields empty content.
    ///
    /// This is the one place merge errors stop. Callers must treat empty bytes
    /// as "no configuration available".
    pub fn merge(self, bytes: &[u8], overrides: &Overrides) -> Merged {
        self.try_merge(bytes, overrides).unwrap_or_else(|e| {
            warn!(format = ?self, error = %e, "override merge failed, returning empty content");
            Merged::default()
        })
    }
}

/// Result of merging overrides into a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Merged {
    /// The final content.
    pub bytes: Vec<u8>,
    /// Every value that was replaced, in traversal order.
    pub applied: Vec<AppliedOverride>,
}

impl Merged {
    pub(crate) fn unchanged(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            applied: Vec::new(),
        }
    }
}
