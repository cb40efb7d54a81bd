use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::metadata::{DEFAULT_VERSION_KEY, DESCRIPTION, PackageMetadata, VersionReader};

#[derive(Debug, Parser)]
#[command(name = "unmanic-metadata", version, about = DESCRIPTION)]
pub struct Args {
    /// Version variant to print
    #[arg(long, value_name = "KEY", default_value = DEFAULT_VERSION_KEY)]
    pub key: String,

    /// Print the short version (same as `--key short`)
    #[arg(long, conflicts_with = "key")]
    pub short: bool,

    /// Read this version file instead of the configured one
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Print every version variant as `key = value`
    #[arg(long, conflicts_with_all = ["json", "short", "key"])]
    pub all: bool,

    /// Print package metadata as JSON
    #[arg(long)]
    pub json: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    fn reader(&self) -> VersionReader {
        match &self.file {
            Some(path) => VersionReader::new(path),
            None => VersionReader::from_env(),
        }
    }

    fn version_key(&self) -> &str {
        if self.short { "short" } else { &self.key }
    }
}

/// Writes the output selected by `args` to `out`.
///
/// Only `--all` can fail on an unreadable version file; every other mode
/// prints `UNKNOWN.VERSION` instead.
pub fn run(args: &Args, out: &mut impl Write) -> anyhow::Result<()> {
    let reader = args.reader();
    info!("Reading version metadata from {:?}", reader.path());

    if args.all {
        let info = reader.load()?;
        for (key, version) in info.iter() {
            writeln!(out, "{} = {}", key, version)?;
        }
        return Ok(());
    }

    if args.json {
        let metadata = PackageMetadata::collect(&reader);
        serde_json::to_writer_pretty(&mut *out, &metadata)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{}", reader.read_version_string(args.version_key()))?;
    Ok(())
}
