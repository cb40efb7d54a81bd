pub mod cli;
pub mod config;
pub mod log;
pub mod metadata;

pub use metadata::{
    AUTHOR, COPYRIGHT, DESCRIPTION, UNKNOWN_VERSION, VERSION, VersionReader, read_version_string,
};
