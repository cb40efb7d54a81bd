use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Failed to read version file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Version file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Version file must contain a JSON object")]
    NotAnObject,

    #[error("Version key not found: {0}")]
    MissingKey(String),
}
