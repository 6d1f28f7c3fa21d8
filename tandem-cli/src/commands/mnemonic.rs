//! Mnemonic utility CLI commands.

use anyhow::bail;
use clap::{Args, Subcommand};
use colored::Colorize;
use tandem::WordCount;

/// Mnemonic utility operations.
#[derive(Args)]
pub struct MnemonicCommand {
    #[command(subcommand)]
    command: MnemonicSubcommand,
}

#[derive(Subcommand)]
enum MnemonicSubcommand {
    /// Generate a fresh mnemonic from the OS random number generator.
    New {
        /// Number of mnemonic words (12, 15, 18, 21, or 24).
        #[arg(short, long, default_value = "12")]
        words: usize,
    },

    /// Normalize a phrase and check it against the BIP-39 English wordlist.
    ///
    /// Exits with status 1 when the phrase is invalid.
    Check {
        /// Phrase to check. Quote it so the shell passes it as one argument.
        phrase: String,
    },
}

impl MnemonicCommand {
    /// Execute the mnemonic command.
    pub fn execute(self) -> anyhow::Result<()> {
        match self.command {
            MnemonicSubcommand::New { words } => {
                let word_count = WordCount::try_from(words)?;
                let phrase = tandem::generate_mnemonic_with(word_count, &mut tandem::rand_core::OsRng)?;
                print_new_result(&phrase, word_count);
            }
            MnemonicSubcommand::Check { phrase } => {
                let normalized = tandem::normalize_mnemonic_text(&phrase);
                let valid = tandem::is_valid_mnemonic(&normalized);
                print_check_result(&normalized, valid);
                if !valid {
                    bail!("mnemonic failed validation");
                }
            }
        }
        Ok(())
    }
}

#[rustfmt::skip]
fn print_new_result(phrase: &str, word_count: WordCount) {
    println!();
    println!("      {}        {}", "Words".cyan().bold(), word_count);
    println!("      {}     {}", "Mnemonic".cyan().bold(), phrase.green());
    println!();
}

#[rustfmt::skip]
fn print_check_result(normalized: &str, valid: bool) {
    let words = normalized.split_whitespace().count();
    let status = if valid { "valid".green() } else { "invalid".red() };

    println!();
    println!("      {}        {words} words", "Words".cyan().bold());
    println!("      {}   {}", "Normalized".cyan().bold(), normalized);
    println!("      {}       {}", "Status".cyan().bold(), status);
    println!();
}
