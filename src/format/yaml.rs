//! YAML override merging.

use super::{ConfigFormat, Merged};
use crate::core::{AppliedOverride, OverrideKey, Overrides};
use crate::error::{ConfigError, Result};
use serde_yaml::{Mapping, Value};
use tracing::debug;

/// Merge overrides into a YAML document, failing soft to empty bytes.
///
/// When nothing is overridden the input is returned byte-for-byte, comments
/// included. Otherwise the whole document is re-serialized and comments and
/// original formatting are lost.
pub fn merge_yaml(bytes: &[u8], overrides: &Overrides) -> Vec<u8> {
    ConfigFormat::Yaml.merge(bytes, overrides).bytes
}

/// Merge overrides into a YAML document.
///
/// Only string scalars are eligible; numbers, booleans, nulls and anything
/// inside a sequence keep their bundled values. A document that repeats a key
/// within one mapping is rejected.
///
/// # Errors
///
/// - [`ConfigError::ParseError`] if the input is malformed or its root is not a mapping
/// - [`ConfigError::SerializeError`] if the merged tree cannot be written back
pub fn try_merge_yaml(bytes: &[u8], overrides: &Overrides) -> Result<Merged> {
    let document: Value =
        serde_yaml::from_slice(bytes).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    let mut root = match document {
        Value::Mapping(mapping) => mapping,
        other => {
            return Err(ConfigError::ParseError(format!(
                "expected a mapping at the document root, found {}",
                kind(&other)
            )));
        }
    };

    let mut applied = Vec::new();
    apply_overrides(&mut root, &mut Vec::new(), overrides, &mut applied);

    if applied.is_empty() {
        return Ok(Merged::unchanged(bytes));
    }

    let text = serde_yaml::to_string(&Value::Mapping(root))
        .map_err(|e| ConfigError::SerializeError(e.to_string()))?;
    debug!(overrides = applied.len(), "re-serialized YAML after overrides");

    Ok(Merged {
        bytes: text.into_bytes(),
        applied,
    })
}

/// Depth-first walk in mapping order.
fn apply_overrides(
    mapping: &mut Mapping,
    path: &mut Vec<String>,
    overrides: &Overrides,
    applied: &mut Vec<AppliedOverride>,
) {
    for (key, value) in mapping.iter_mut() {
        let Some(segment) = key_segment(key) else {
            continue;
        };
        path.push(segment);

        match value {
            Value::Mapping(nested) => apply_overrides(nested, path, overrides, applied),
            Value::String(current) => {
                let key = OverrideKey::from_segments(path.iter());
                if let Some(found) = overrides.resolve(&key) {
                    let dotted = path.join(".");
                    debug!(key = %key, path = %dotted, source = %found.source, "applying override");
                    *current = found.value;
                    applied.push(AppliedOverride {
                        path: dotted,
                        key,
                        source: found.source,
                    });
                }
            }
            _ => {}
        }

        path.pop();
    }
}

fn key_segment(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
