//! Line-oriented session driver.
//!
//! Reads one command per line from stdin and applies it to a single
//! [`WalletSession`], so every transition the library supports can be
//! exercised by hand or from a script.

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, bail, Context};
use clap::Args;
use colored::Colorize;
use tandem::{Chain, SessionConfig, SessionState, WalletSession, WordCount};
use tracing::debug;

const HELP: &str = "\
commands:
  use <phrase>             lock a mnemonic (clears all wallets)
  generate                 generate a mnemonic and lock it
  add eth|sol              derive the next wallet for a chain
  clear eth|sol            drop a chain's wallets
  list                     show session state and wallets
  reveal eth|sol <index>   print a wallet's private key
  reset                    forget the mnemonic and all wallets
  help                     show this text
  quit                     leave the shell";

/// Interactive wallet session.
#[derive(Args)]
pub struct ShellCommand {
    /// BIP-39 passphrase used when deriving the session seed.
    #[arg(short, long, env = "TANDEM_PASSPHRASE", hide_env_values = true, default_value = "")]
    passphrase: String,

    /// Number of words for `generate` (12, 15, 18, 21, or 24).
    #[arg(short, long, default_value = "12")]
    words: usize,
}

impl ShellCommand {
    /// Execute the shell command.
    pub fn execute(self) -> anyhow::Result<()> {
        let config = SessionConfig::new()
            .with_passphrase(self.passphrase)
            .with_word_count(WordCount::try_from(self.words)?);
        let mut shell = Shell::new(WalletSession::with_config(config));

        let stdin = io::stdin();
        let mut stdout = io::stdout();
        shell.run(stdin.lock(), &mut stdout)
    }
}

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

struct Shell {
    session: WalletSession,
}

impl Shell {
    fn new(session: WalletSession) -> Self {
        Self { session }
    }

    /// Process lines until `quit` or end of input.
    ///
    /// Command errors are reported on `out` and do not stop the loop.
    fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> anyhow::Result<()> {
        writeln!(out, "{}", "tandem shell, type `help` for commands".dimmed())?;
        for line in input.lines() {
            let line = line.context("failed to read command")?;
            match self.execute_line(&line, out) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => writeln!(out, "{} {e:#}", "error:".red().bold())?,
            }
        }
        Ok(())
    }

    fn execute_line<W: Write>(&mut self, line: &str, out: &mut W) -> anyhow::Result<Flow> {
        let line = line.trim();
        let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        debug!(command, "shell command");

        match command {
            "" => {}
            "use" => {
                if rest.is_empty() {
                    bail!("usage: use <phrase>");
                }
                self.session.set_mnemonic(rest)?;
                writeln!(out, "mnemonic locked")?;
            }
            "generate" => {
                let phrase = self.session.generate_mnemonic()?;
                writeln!(out, "      {}     {}", "Mnemonic".cyan().bold(), phrase.green())?;
            }
            "add" => {
                let chain = parse_chain(rest)?;
                let wallet = self.session.add_wallet(chain)?;
                write!(out, "{}", super::format_wallet(&wallet, false))?;
            }
            "clear" => {
                let chain = parse_chain(rest)?;
                self.session.clear_wallets(chain);
                writeln!(out, "{} wallets cleared", chain.name())?;
            }
            "list" => self.list(out)?,
            "reveal" => {
                let (chain, index) = rest
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| anyhow!("usage: reveal eth|sol <index>"))?;
                let chain = parse_chain(chain)?;
                let index: usize = index.trim().parse().context("index must be a number")?;
                let wallet = self
                    .session
                    .wallets(chain)
                    .get(index)
                    .ok_or_else(|| anyhow!("no {} wallet at index {index}", chain.name()))?;
                write!(out, "{}", super::format_wallet(wallet, true))?;
            }
            "reset" => {
                self.session.reset();
                writeln!(out, "session reset")?;
            }
            "help" => writeln!(out, "{HELP}")?,
            "quit" | "exit" => return Ok(Flow::Quit),
            other => bail!("unknown command '{other}', type `help` for commands"),
        }
        Ok(Flow::Continue)
    }

    #[rustfmt::skip]
    fn list<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let state = match self.session.state() {
            SessionState::Empty => "empty",
            SessionState::Locked => "locked",
            SessionState::Active => "active",
        };
        writeln!(out, "      {}        {}", "State".cyan().bold(), state)?;
        for &chain in Chain::all() {
            let wallets = self.session.wallets(chain);
            writeln!(out, "      {}  {} wallet(s)", format!("{:<11}", chain.name()).cyan().bold(), wallets.len())?;
            for wallet in wallets {
                writeln!(out, "        [{}] {}", wallet.index(), wallet.address())?;
            }
        }
        Ok(())
    }
}

fn parse_chain(text: &str) -> anyhow::Result<Chain> {
    if text.is_empty() {
        bail!("expected a chain: eth or sol");
    }
    Ok(text.parse::<Chain>()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn run_script(script: &str) -> (Shell, String) {
        let mut shell = Shell::new(WalletSession::new());
        let mut out = Vec::new();
        shell.run(script.as_bytes(), &mut out).unwrap();
        (shell, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_add_before_use_reports_error() {
        let (shell, out) = run_script("add eth\n");
        assert!(out.contains("error:"));
        assert_eq!(shell.session.state(), SessionState::Empty);
    }

    #[test]
    fn test_use_and_add_both_chains() {
        let script = format!("use {TEST_MNEMONIC}\nadd eth\nadd sol\nadd eth\n");
        let (shell, out) = run_script(&script);

        assert!(out.contains("0x1cC31E180CCA3a8698fD6f13765209EC7CB9E755"));
        assert!(out.contains("HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk"));
        assert!(out.contains("0x3590821f4FD8B921B74d923475B7DA6c9b2aE83b"));
        assert_eq!(shell.session.state(), SessionState::Active);
        assert_eq!(shell.session.next_index(Chain::Ethereum), 2);
        assert_eq!(shell.session.next_index(Chain::Solana), 1);
    }

    #[test]
    fn test_add_does_not_print_private_key() {
        let script = format!("use {TEST_MNEMONIC}\nadd sol\n");
        let (_, out) = run_script(&script);
        assert!(!out.contains("37df573b3ac4ad5b522e064e25b63ea16bcbe79d449e81a0268d1047948bb445"));
    }

    #[test]
    fn test_reveal_prints_private_key() {
        let script = format!("use {TEST_MNEMONIC}\nadd sol\nreveal sol 0\nreveal sol 1\n");
        let (_, out) = run_script(&script);
        assert!(out.contains("37df573b3ac4ad5b522e064e25b63ea16bcbe79d449e81a0268d1047948bb445"));
        assert!(out.contains("no Solana wallet at index 1"));
    }

    #[test]
    fn test_clear_restarts_index() {
        let script = format!("use {TEST_MNEMONIC}\nadd eth\nadd eth\nclear eth\nadd eth\n");
        let (shell, _) = run_script(&script);
        let wallets = shell.session.wallets(Chain::Ethereum);
        assert_eq!(wallets.len(), 1);
        assert_eq!(wallets[0].index(), 0);
    }

    #[test]
    fn test_invalid_use_keeps_session() {
        let script = format!("use {TEST_MNEMONIC}\nadd eth\nuse abandon abandon\n");
        let (shell, out) = run_script(&script);
        assert!(out.contains("error:"));
        assert_eq!(shell.session.mnemonic(), Some(TEST_MNEMONIC));
        assert_eq!(shell.session.wallets(Chain::Ethereum).len(), 1);
    }

    #[test]
    fn test_use_same_phrase_clears_wallets() {
        let script = format!("use {TEST_MNEMONIC}\nadd eth\nuse {TEST_MNEMONIC}\n");
        let (shell, _) = run_script(&script);
        assert_eq!(shell.session.state(), SessionState::Locked);
        assert!(shell.session.wallets(Chain::Ethereum).is_empty());

        let (_, out) = run_script("help\n");
        assert!(out.contains("lock a mnemonic (clears all wallets)"));
    }

    #[test]
    fn test_generate_then_reset() {
        let (shell, out) = run_script("generate\nadd sol\nreset\n");
        assert!(out.contains("session reset"));
        assert_eq!(shell.session.state(), SessionState::Empty);
        assert!(shell.session.wallets(Chain::Solana).is_empty());
    }

    #[test]
    fn test_quit_stops_processing() {
        let script = format!("use {TEST_MNEMONIC}\nquit\nadd eth\n");
        let (shell, _) = run_script(&script);
        assert_eq!(shell.session.state(), SessionState::Locked);
    }

    #[test]
    fn test_unknown_command_and_bad_chain() {
        let (_, out) = run_script("frobnicate\nadd btc\nreveal eth\n");
        assert!(out.contains("unknown command 'frobnicate'"));
        assert!(out.contains("unknown chain 'btc'"));
        assert!(out.contains("usage: reveal"));
    }

    #[test]
    fn test_list_shows_state() {
        let script = format!("list\nuse {TEST_MNEMONIC}\nlist\n");
        let (_, out) = run_script(&script);
        assert!(out.contains("empty"));
        assert!(out.contains("locked"));
    }
}
