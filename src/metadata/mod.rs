//! Version and package metadata
//! - error.rs: MetadataError
//! - types.rs: VersionInfo, PackageMetadata
//! - reader.rs: VersionReader over a version.json file

pub mod error;
pub mod reader;
pub mod types;

pub use error::MetadataError;
pub use reader::VersionReader;
pub use types::{PackageMetadata, VersionInfo};

/// Returned in place of a version string whenever none can be read
pub const UNKNOWN_VERSION: &str = "UNKNOWN.VERSION";

/// Version variant read when no key is given
pub const DEFAULT_VERSION_KEY: &str = "long";

/// Version of this crate as built. The installed Unmanic version is the one
/// in the version file; see [`read_version_string`].
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHOR: &str = "Josh.5 <jsunnex@gmail.com>";
pub const DESCRIPTION: &str = "UNMANIC - Library Optimiser";
pub const COPYRIGHT: &str = "Copyright (C) Josh Sunnex - All Rights Reserved";

/// Reads `key` (or `"long"` when `None`) from the configured version file.
/// Never fails: returns [`UNKNOWN_VERSION`] instead.
pub fn read_version_string(key: Option<&str>) -> String {
    VersionReader::from_env().read_version_string(key.unwrap_or(DEFAULT_VERSION_KEY))
}

impl PackageMetadata {
    pub fn collect(reader: &VersionReader) -> Self {
        Self {
            version: VERSION.to_string(),
            long_version: reader.long_version(),
            author: AUTHOR.to_string(),
            description: DESCRIPTION.to_string(),
            copyright: COPYRIGHT.to_string(),
        }
    }
}
