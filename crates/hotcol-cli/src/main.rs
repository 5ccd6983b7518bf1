mod commands;
mod io_args;
mod logging;
mod records;

use clap::Parser;
use commands::Commands;

/// hotcol-cli
#[derive(clap::Parser, Debug)]
pub struct Args {
    #[command(flatten)]
    pub logging: logging::LoggingArgs,

    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.logging.init()?;

    args.command.run()
}
