//! Reads version strings from a version file

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config;
use crate::metadata::error::MetadataError;
use crate::metadata::types::VersionInfo;
use crate::metadata::{DEFAULT_VERSION_KEY, UNKNOWN_VERSION};

/// Reader bound to a single version file.
///
/// The file is read on every call; nothing is cached, so edits to the
/// file are picked up by the next lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionReader {
    path: PathBuf,
}

impl VersionReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reader for the configured version file location
    pub fn from_env() -> Self {
        Self::new(config::version_file_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and parses the whole version file
    pub fn load(&self) -> Result<VersionInfo, MetadataError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| MetadataError::Io {
            path: self.path.clone(),
            source,
        })?;

        VersionInfo::from_json(&content)
    }

    /// Looks up a single version variant
    pub fn lookup(&self, key: &str) -> Result<String, MetadataError> {
        let info = self.load()?;
        info.get(key)
            .map(str::to_string)
            .ok_or_else(|| MetadataError::MissingKey(key.to_string()))
    }

    /// Returns the version string stored under `key`, or `UNKNOWN.VERSION`
    /// if the file is missing, is not valid JSON, or lacks the key.
    pub fn read_version_string(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_else(|e| {
            debug!("Falling back to {} for key {:?}: {}", UNKNOWN_VERSION, key, e);
            UNKNOWN_VERSION.to_string()
        })
    }

    pub fn long_version(&self) -> String {
        self.read_version_string(DEFAULT_VERSION_KEY)
    }

    pub fn short_version(&self) -> String {
        self.read_version_string("short")
    }
}

impl Default for VersionReader {
    fn default() -> Self {
        Self::from_env()
    }
}
