//! # Tandem
//!
//! Deterministic Ethereum and Solana wallets from a single BIP-39 mnemonic,
//! added one account at a time.
//!
//! The crate exposes the narrow interface a presentation layer needs:
//!
//! - [`normalize_mnemonic_text`], [`is_valid_mnemonic`] and
//!   [`generate_mnemonic`] for phrase handling;
//! - [`WalletSession`] for the lock / add / clear / reset lifecycle.
//!
//! Derivation paths are fixed and fully hardened:
//!
//! | chain    | curve     | path                   |
//! |----------|-----------|------------------------|
//! | Ethereum | secp256k1 | `m/44'/60'/{n}'/0'`    |
//! | Solana   | ed25519   | `m/44'/501'/{n}'/0'`   |
//!
//! No network access, no persistence: seeds and private keys live only in
//! the session and are zeroized when dropped.
//!
//! ## Example
//!
//! ```
//! use tandem::{Chain, WalletSession};
//!
//! let phrase = tandem::normalize_mnemonic_text(
//!     "  Abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon ABOUT",
//! );
//! assert!(tandem::is_valid_mnemonic(&phrase));
//!
//! let mut session = WalletSession::new();
//! session.set_mnemonic(&phrase)?;
//! for _ in 0..3 {
//!     session.add_wallet(Chain::Solana)?;
//! }
//! assert_eq!(session.next_index(Chain::Solana), 3);
//! # Ok::<(), tandem::Error>(())
//! ```

#![warn(missing_docs, rust_2018_idioms, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]
#![forbid(unsafe_code)]

mod error;
mod session;

pub use error::{Error, Result};
pub use session::{SessionConfig, SessionState, WalletSession};
pub use tandem_core::{
    mnemonic, Chain, ChainDeriver, Mnemonic, ParseChainError, Seed, Wallet, WordCount,
};

/// Ethereum deriver crate.
pub use tandem_eth as eth;
/// Solana deriver crate.
pub use tandem_sol as sol;
// Callers inject RNGs through these trait versions.
pub use rand_core;

use rand_core::{CryptoRngCore, OsRng};

/// Normalize raw mnemonic text: trim, lowercase, single-space the words.
///
/// ```
/// assert_eq!(
///     tandem::normalize_mnemonic_text("  Abandon   ABANDON abandon "),
///     "abandon abandon abandon"
/// );
/// ```
pub fn normalize_mnemonic_text(text: &str) -> String {
    mnemonic::normalize(text)
}

/// Whether `text`, once normalized, is a valid English BIP-39 phrase.
///
/// Never fails: malformed input simply yields `false`.
pub fn is_valid_mnemonic(text: &str) -> bool {
    mnemonic::validate(&mnemonic::normalize(text))
}

/// Generate a new 12-word mnemonic from the OS CSPRNG.
///
/// # Errors
///
/// Returns [`Error::InsecureRandomness`] if secure randomness is unavailable.
pub fn generate_mnemonic() -> Result<String> {
    generate_mnemonic_with(WordCount::default(), &mut OsRng)
}

/// Generate a new mnemonic of `word_count` words from `rng`.
///
/// # Errors
///
/// Returns [`Error::InsecureRandomness`] if `rng` fails to produce entropy.
pub fn generate_mnemonic_with<R>(word_count: WordCount, rng: &mut R) -> Result<String>
where
    R: CryptoRngCore + ?Sized,
{
    let mnemonic = Mnemonic::generate_with_rng(rng, word_count)?;
    Ok(mnemonic.phrase().to_owned())
}
