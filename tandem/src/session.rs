//! Incremental wallet session state.
//!
//! A [`WalletSession`] owns one active mnemonic, its lazily derived seed and,
//! per chain, the ordered list of wallets added so far. The next account index
//! of a chain is always the length of its list, so indices are never skipped
//! or reused.
//!
//! ```text
//! Empty --set_mnemonic--> Locked --add_wallet--> Active
//!   ^                       |                      |
//!   +--------reset----------+----------reset-------+
//! ```

use core::fmt;

use rand_core::{CryptoRngCore, OsRng};
use tandem_core::{Chain, ChainDeriver, Mnemonic, Seed, Wallet, WordCount};
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::{Error, Result};

/// Observable lifecycle state of a [`WalletSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// No mnemonic is set.
    Empty,
    /// A mnemonic is locked in; the seed has not been derived yet.
    Locked,
    /// The seed is cached and wallets may exist.
    Active,
}

/// Session settings.
#[derive(Clone, Default)]
pub struct SessionConfig {
    passphrase: Zeroizing<String>,
    word_count: WordCount,
}

impl SessionConfig {
    /// Default settings: no passphrase, 12-word generation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a BIP-39 passphrase when deriving the seed.
    #[must_use]
    pub fn with_passphrase(mut self, passphrase: impl Into<String>) -> Self {
        self.passphrase = Zeroizing::new(passphrase.into());
        self
    }

    /// Word count for mnemonics generated by the session.
    #[must_use]
    pub fn with_word_count(mut self, word_count: WordCount) -> Self {
        self.word_count = word_count;
        self
    }

    /// The BIP-39 passphrase (empty when unset).
    pub fn passphrase(&self) -> &str {
        &self.passphrase
    }

    /// Word count used for generation.
    pub const fn word_count(&self) -> WordCount {
        self.word_count
    }
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("passphrase", &!self.passphrase.is_empty())
            .field("word_count", &self.word_count)
            .finish()
    }
}

/// Per-session wallet derivation state.
///
/// All mutation goes through [`set_mnemonic`](Self::set_mnemonic),
/// [`add_wallet`](Self::add_wallet), [`clear_wallets`](Self::clear_wallets)
/// and [`reset`](Self::reset). Each of them takes `&mut self`, so calls on one
/// session are serialized, and a failed call leaves the session unchanged.
///
/// # Example
///
/// ```
/// use tandem::{Chain, WalletSession};
///
/// let mut session = WalletSession::new();
/// session.set_mnemonic(
///     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
/// )?;
///
/// let eth = session.add_wallet(Chain::Ethereum)?;
/// let sol = session.add_wallet(Chain::Solana)?;
/// assert_eq!(eth.address(), "0x1cC31E180CCA3a8698fD6f13765209EC7CB9E755");
/// assert_eq!(sol.address(), "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk");
/// # Ok::<(), tandem::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct WalletSession {
    config: SessionConfig,
    mnemonic: Option<Mnemonic>,
    seed: Option<Seed>,
    ethereum: Vec<Wallet>,
    solana: Vec<Wallet>,
}

impl WalletSession {
    /// Create an empty session with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session with the given settings.
    #[must_use]
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Session settings.
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Current lifecycle state.
    pub const fn state(&self) -> SessionState {
        match (&self.mnemonic, &self.seed) {
            (None, _) => SessionState::Empty,
            (Some(_), None) => SessionState::Locked,
            (Some(_), Some(_)) => SessionState::Active,
        }
    }

    /// Whether a mnemonic is locked in.
    pub const fn is_locked(&self) -> bool {
        self.mnemonic.is_some()
    }

    /// The active mnemonic phrase, normalized.
    ///
    /// **Security Warning**: this phrase reconstructs every derived key.
    pub fn mnemonic(&self) -> Option<&str> {
        self.mnemonic.as_ref().map(Mnemonic::phrase)
    }

    /// Lock a mnemonic into the session.
    ///
    /// The text is normalized and validated. On success the session moves to
    /// [`SessionState::Locked`], discarding the cached seed and both chains'
    /// wallets, even when the phrase equals the active one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMnemonic`] and leaves the session untouched if
    /// the phrase does not validate.
    pub fn set_mnemonic(&mut self, text: &str) -> Result<()> {
        let mnemonic = Mnemonic::parse(text).map_err(Error::InvalidMnemonic)?;
        self.lock(mnemonic);
        Ok(())
    }

    /// Generate a fresh mnemonic from the OS CSPRNG and lock it in.
    ///
    /// Returns the new phrase.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsecureRandomness`] if the generator fails; the
    /// session is left untouched.
    pub fn generate_mnemonic(&mut self) -> Result<String> {
        self.generate_mnemonic_with_rng(&mut OsRng)
    }

    /// Generate a fresh mnemonic from `rng` and lock it in.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsecureRandomness`] if the generator fails; the
    /// session is left untouched.
    pub fn generate_mnemonic_with_rng<R>(&mut self, rng: &mut R) -> Result<String>
    where
        R: CryptoRngCore + ?Sized,
    {
        let mnemonic = Mnemonic::generate_with_rng(rng, self.config.word_count)?;
        let phrase = mnemonic.phrase().to_owned();
        self.lock(mnemonic);
        Ok(phrase)
    }

    /// Derive and append the next wallet for `chain`.
    ///
    /// The seed is derived on the first call after a mnemonic is locked and
    /// cached for the rest of the session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SessionNotLocked`] when no mnemonic is set, or
    /// [`Error::DerivationFailure`] if key derivation fails. Either way the
    /// session is left untouched.
    pub fn add_wallet(&mut self, chain: Chain) -> Result<Wallet> {
        let Some(mnemonic) = &self.mnemonic else {
            return Err(Error::SessionNotLocked);
        };
        let index = self.next_index(chain);

        let wallet = match &self.seed {
            Some(seed) => derive_wallet(chain, seed, index)?,
            None => {
                let seed = mnemonic.to_seed(&self.config.passphrase);
                let wallet = derive_wallet(chain, &seed, index)?;
                debug!("seed derived and cached");
                self.seed = Some(seed);
                wallet
            }
        };

        info!(chain = %chain, index, path = wallet.path(), "wallet added");
        self.wallets_mut(chain).push(wallet.clone());
        Ok(wallet)
    }

    /// Drop every wallet of `chain` and restart its index at 0.
    ///
    /// The other chain and the cached seed are unaffected.
    pub fn clear_wallets(&mut self, chain: Chain) {
        let wallets = self.wallets_mut(chain);
        let cleared = wallets.len();
        wallets.clear();
        info!(chain = %chain, cleared, "wallet list cleared");
    }

    /// Return to the empty state, discarding mnemonic, seed and all wallets.
    pub fn reset(&mut self) {
        self.mnemonic = None;
        self.seed = None;
        self.ethereum.clear();
        self.solana.clear();
        info!("session reset");
    }

    /// Wallets derived for `chain`, in index order.
    pub fn wallets(&self, chain: Chain) -> &[Wallet] {
        match chain {
            Chain::Ethereum => &self.ethereum,
            Chain::Solana => &self.solana,
        }
    }

    /// The index the next [`add_wallet`](Self::add_wallet) call will use.
    pub fn next_index(&self, chain: Chain) -> u32 {
        // Derivation refuses indices at or above 2^31, so the length always fits.
        u32::try_from(self.wallets(chain).len()).unwrap_or(u32::MAX)
    }

    fn wallets_mut(&mut self, chain: Chain) -> &mut Vec<Wallet> {
        match chain {
            Chain::Ethereum => &mut self.ethereum,
            Chain::Solana => &mut self.solana,
        }
    }

    fn lock(&mut self, mnemonic: Mnemonic) {
        info!(words = mnemonic.word_count(), "mnemonic locked");
        self.mnemonic = Some(mnemonic);
        self.seed = None;
        self.ethereum.clear();
        self.solana.clear();
    }
}

/// Dispatch to the deriver for `chain`.
fn derive_wallet(chain: Chain, seed: &Seed, index: u32) -> Result<Wallet> {
    match chain {
        Chain::Ethereum => derive_with(&tandem_eth::Deriver::new(), seed, index),
        Chain::Solana => derive_with(&tandem_sol::Deriver::new(), seed, index),
    }
}

fn derive_with<D: ChainDeriver>(deriver: &D, seed: &Seed, index: u32) -> Result<Wallet> {
    deriver
        .derive_at(seed, index)
        .map_err(|err| Error::DerivationFailure {
            chain: deriver.chain(),
            index,
            source: Box::new(err),
        })
}
