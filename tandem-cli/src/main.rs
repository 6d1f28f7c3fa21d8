//! Tandem - derive Ethereum and Solana wallets side by side from one mnemonic.

mod commands;
mod logging;

use clap::Parser;
use commands::{Cli, Commands};

fn main() {
    logging::init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Mnemonic(cmd) => cmd.execute()?,
        Commands::Derive(cmd) => cmd.execute()?,
        Commands::Shell(cmd) => cmd.execute()?,
    }
    Ok(())
}
