use clap::Parser;

use unmanic_metadata::cli::{Args, run};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Version output must not depend on the log file being writable
    if let Err(e) = unmanic_metadata::log::init(args.verbose) {
        eprintln!("Logging disabled: {:#}", e);
    }

    let stdout = std::io::stdout();
    run(&args, &mut stdout.lock())
}
