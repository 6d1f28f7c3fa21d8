//! CLI command definitions and handlers.

mod derive;
mod mnemonic;
mod shell;

use clap::{Parser, Subcommand};
pub use derive::DeriveCommand;
pub use mnemonic::MnemonicCommand;
pub use shell::ShellCommand;
use tandem::Wallet;

/// Tandem - derive Ethereum and Solana wallets side by side from one mnemonic.
#[derive(Parser)]
#[command(name = "tandem")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate or check BIP-39 mnemonics.
    #[command(alias = "m")]
    Mnemonic(MnemonicCommand),

    /// Derive a batch of wallets for both chains from a mnemonic.
    #[command(alias = "d")]
    Derive(DeriveCommand),

    /// Drive an interactive wallet session from stdin.
    Shell(ShellCommand),
}

/// Render one wallet in the shared layout.
#[rustfmt::skip]
pub(crate) fn format_wallet(wallet: &Wallet, reveal: bool) -> String {
    use colored::Colorize;
    use std::fmt::Write;

    let mut out = String::new();
    let _ = writeln!(out, "      {}      {}", "Account".cyan().bold(), format!("[{}]", wallet.index()).dimmed());
    let _ = writeln!(out, "      {}         {}", "Path".cyan().bold(), wallet.path());
    let _ = writeln!(out, "      {}      {}", "Address".cyan().bold(), wallet.address().green());
    let _ = writeln!(out, "      {}   {}", "Public Key".cyan().bold(), wallet.public_key().dimmed());
    if reveal {
        let _ = writeln!(out, "      {}  {}", "Private Key".cyan().bold(), wallet.reveal_private_key());
    }
    out
}
