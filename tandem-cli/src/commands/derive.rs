//! Batch derivation for both chains.

use clap::Args;
use colored::Colorize;
use tandem::{Chain, SessionConfig, WalletSession};
use tracing::debug;

/// Derive wallets for both chains from a mnemonic.
#[derive(Args)]
pub struct DeriveCommand {
    /// BIP-39 mnemonic phrase. Whitespace and case are normalized.
    #[arg(short, long, env = "TANDEM_MNEMONIC", hide_env_values = true)]
    mnemonic: String,

    /// BIP-39 passphrase (optional extra security).
    #[arg(short, long, env = "TANDEM_PASSPHRASE", hide_env_values = true, default_value = "")]
    passphrase: String,

    /// Number of Ethereum wallets to derive.
    #[arg(long, default_value = "1")]
    eth: u32,

    /// Number of Solana wallets to derive.
    #[arg(long, default_value = "1")]
    sol: u32,

    /// Print private keys as well.
    #[arg(long)]
    reveal: bool,
}

impl DeriveCommand {
    /// Execute the derive command.
    pub fn execute(self) -> anyhow::Result<()> {
        let config = SessionConfig::new().with_passphrase(self.passphrase);
        let mut session = WalletSession::with_config(config);
        session.set_mnemonic(&self.mnemonic)?;

        for (chain, count) in [(Chain::Ethereum, self.eth), (Chain::Solana, self.sol)] {
            for _ in 0..count {
                session.add_wallet(chain)?;
            }
            debug!(chain = %chain, count, "batch derived");
        }

        print_session(&session, self.reveal);
        Ok(())
    }
}

#[rustfmt::skip]
fn print_session(session: &WalletSession, reveal: bool) {
    println!();
    if !session.config().passphrase().is_empty() {
        println!("      {}   {}", "Passphrase".cyan().bold(), "(set)".dimmed());
        println!();
    }

    for &chain in Chain::all() {
        let wallets = session.wallets(chain);
        if wallets.is_empty() {
            continue;
        }
        println!("   {}", chain.name().bold().underline());
        for wallet in wallets {
            print!("{}", super::format_wallet(wallet, reveal));
            println!();
        }
    }
}
