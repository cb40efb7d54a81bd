//! Common types for version metadata

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::metadata::UNKNOWN_VERSION;
use crate::metadata::error::MetadataError;

/// Version variants loaded from a version file, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VersionInfo {
    entries: IndexMap<String, String>,
}

impl VersionInfo {
    /// Parses a flat JSON object of version strings.
    ///
    /// Entries with non-string values, and entries holding the
    /// `UNKNOWN.VERSION` sentinel, are dropped.
    pub fn from_json(content: &str) -> Result<Self, MetadataError> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        let serde_json::Value::Object(object) = value else {
            return Err(MetadataError::NotAnObject);
        };

        let mut entries = IndexMap::with_capacity(object.len());
        for (key, value) in object {
            match value {
                serde_json::Value::String(version) if version != UNKNOWN_VERSION => {
                    entries.insert(key, version);
                }
                serde_json::Value::String(_) => {
                    debug!("Dropping version entry {:?} holding the sentinel value", key);
                }
                other => {
                    debug!("Dropping non-string version entry {:?}: {}", key, other);
                }
            }
        }

        Ok(Self { entries })
    }

    /// Returns the version string stored under `key`, if any
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|s| s.as_str())
    }

    /// Iterates over `(key, version)` pairs in file order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Package metadata as reported by the CLI's JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageMetadata {
    /// Crate version the binary was built as
    pub version: String,
    /// Long version string read from the version file (may be the sentinel)
    pub long_version: String,
    pub author: String,
    pub description: String,
    pub copyright: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_json_keeps_string_entries_in_file_order() {
        let info =
            VersionInfo::from_json(r#"{"short": "0.2.8", "long": "0.2.8~a1b2c3d"}"#).unwrap();

        let entries: Vec<_> = info.iter().collect();
        assert_eq!(entries, vec![("short", "0.2.8"), ("long", "0.2.8~a1b2c3d")]);
    }

    #[test]
    fn from_json_drops_non_string_values() {
        let info =
            VersionInfo::from_json(r#"{"long": "0.2.8", "build": 42, "extra": null}"#).unwrap();

        assert_eq!(info.len(), 1);
        assert_eq!(info.get("build"), None);
        assert_eq!(info.get("long"), Some("0.2.8"));
    }

    #[test]
    fn from_json_drops_sentinel_entries() {
        let info = VersionInfo::from_json(r#"{"long": "UNKNOWN.VERSION"}"#).unwrap();

        assert!(info.is_empty());
    }

    #[test]
    fn from_json_rejects_non_object_documents() {
        let err = VersionInfo::from_json(r#"["0.2.8"]"#).unwrap_err();

        assert!(matches!(err, MetadataError::NotAnObject));
    }

    #[test]
    fn from_json_rejects_invalid_json() {
        let err = VersionInfo::from_json("not json").unwrap_err();

        assert!(matches!(err, MetadataError::Parse(_)));
    }
}
