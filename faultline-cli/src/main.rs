//! faultline command-line entry point

use clap::Parser;
use faultline_cli::commands::Commands;
use faultline_cli::CliResult;

/// Run a division written once under either failure-signaling policy
#[derive(Debug, Parser)]
#[command(name = "faultline", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress log output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    faultline_cli::init_logging(cli.verbose, cli.quiet);
    cli.command.execute()
}
