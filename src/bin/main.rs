use std::process;
use clap::Parser;

#[macro_use]
extern crate log;

use anyhow::Result;

/// Parse command line arguments and run `pedigree_profiler::run()`
fn main() -> Result<()> {
    // ----------------------------- Run CLI Parser
    let cli = parser::Cli::parse();

    // ----------------------------- Init logger.
    logger::Logger::init(cli.verbosity())?;

    // ----------------------------- Serialize command line arguments
    if let Err(e) = cli.serialize() {
        error!("{:?}", e);
        process::exit(1);
    };

    // ----------------------------- unpack Cli and run the appropriate modules.
    if let Err(e) = pedigree_profiler::run(cli) {
        error!("{:?}", e);
        process::exit(1);
    };

    Ok(())
}
