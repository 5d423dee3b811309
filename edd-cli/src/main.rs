//! EDD CLI - Command line tool for due-date delivery probability tables.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "edd-cli",
    version,
    about = "Due-date delivery probability toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: edd_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    edd_cmd::run(cli.command)
}
