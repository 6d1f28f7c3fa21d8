//! BIP-39 mnemonic utilities.
//!
//! Phrases enter the system as free-form user text. [`normalize`] turns that
//! text into the canonical single-spaced lowercase form, [`validate`] checks
//! it against the English wordlist and checksum, and [`Mnemonic`] is the
//! validated, immutable phrase that seeds are derived from.
//!
//! # Example
//!
//! ```
//! use tandem_core::mnemonic;
//!
//! assert_eq!(
//!     mnemonic::normalize("  Abandon   ABANDON abandon "),
//!     "abandon abandon abandon"
//! );
//! assert!(!mnemonic::validate("abandon abandon abandon"));
//! ```

use core::fmt;

use bip39::Language;
use rand_core::{CryptoRngCore, OsRng};
use tracing::debug;
use zeroize::Zeroizing;

use crate::{Error, Result, Seed};

/// Normalize raw mnemonic text.
///
/// Trims the input, lowercases it and collapses every run of whitespace into a
/// single space. No validation is performed.
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check whether `candidate` is a valid English BIP-39 phrase.
///
/// The candidate is expected to be normalized already. Returns `false` for
/// any malformed input instead of an error.
pub fn validate(candidate: &str) -> bool {
    bip39::Mnemonic::parse_in_normalized(Language::English, candidate).is_ok()
}

/// Supported mnemonic lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WordCount {
    /// 12 words, 128 bits of entropy.
    #[default]
    Words12,
    /// 15 words, 160 bits of entropy.
    Words15,
    /// 18 words, 192 bits of entropy.
    Words18,
    /// 21 words, 224 bits of entropy.
    Words21,
    /// 24 words, 256 bits of entropy.
    Words24,
}

impl WordCount {
    /// Number of words in the phrase.
    #[must_use]
    pub const fn words(self) -> usize {
        match self {
            Self::Words12 => 12,
            Self::Words15 => 15,
            Self::Words18 => 18,
            Self::Words21 => 21,
            Self::Words24 => 24,
        }
    }

    /// Entropy length in bytes.
    #[must_use]
    pub const fn entropy_len(self) -> usize {
        self.words() / 3 * 4
    }

    /// All supported word counts, shortest first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Words12,
            Self::Words15,
            Self::Words18,
            Self::Words21,
            Self::Words24,
        ]
    }
}

impl TryFrom<usize> for WordCount {
    type Error = Error;

    fn try_from(words: usize) -> Result<Self> {
        match words {
            12 => Ok(Self::Words12),
            15 => Ok(Self::Words15),
            18 => Ok(Self::Words18),
            21 => Ok(Self::Words21),
            24 => Ok(Self::Words24),
            n => Err(Error::InvalidWordCount(n)),
        }
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} words", self.words())
    }
}

/// A validated BIP-39 mnemonic phrase.
///
/// The phrase is held in normalized form. Only the rendered phrase string is
/// zeroized on drop; the wrapped `bip39::Mnemonic` word indices are not.
#[derive(Clone)]
pub struct Mnemonic {
    inner: bip39::Mnemonic,
    phrase: Zeroizing<String>,
}

impl Mnemonic {
    /// Parse user text into a mnemonic.
    ///
    /// The text is normalized first, so casing and spacing do not matter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMnemonic`] on a bad word count, an unknown
    /// word or a checksum mismatch.
    pub fn parse(text: &str) -> Result<Self> {
        let phrase = Zeroizing::new(normalize(text));
        let inner = bip39::Mnemonic::parse_in_normalized(Language::English, &phrase)?;
        Ok(Self { inner, phrase })
    }

    /// Build a mnemonic from raw entropy (16, 20, 24, 28 or 32 bytes).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMnemonic`] if the entropy length is invalid.
    pub fn from_entropy(entropy: &[u8]) -> Result<Self> {
        let inner = bip39::Mnemonic::from_entropy_in(Language::English, entropy)?;
        let phrase = Zeroizing::new(inner.to_string());
        Ok(Self { inner, phrase })
    }

    /// Generate a new mnemonic from the operating system's CSPRNG.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsecureRandomness`] if the OS generator fails.
    pub fn generate(word_count: WordCount) -> Result<Self> {
        Self::generate_with_rng(&mut OsRng, word_count)
    }

    /// Generate a new mnemonic from a caller-supplied cryptographic RNG.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsecureRandomness`] if the generator fails to
    /// produce entropy. No weaker source is ever substituted.
    pub fn generate_with_rng<R>(rng: &mut R, word_count: WordCount) -> Result<Self>
    where
        R: CryptoRngCore + ?Sized,
    {
        let mut buf = Zeroizing::new([0u8; 32]);
        let entropy = &mut buf[..word_count.entropy_len()];
        rng.try_fill_bytes(entropy)
            .map_err(Error::InsecureRandomness)?;

        debug!(words = word_count.words(), "generated mnemonic entropy");
        Self::from_entropy(entropy)
    }

    /// The normalized phrase.
    ///
    /// **Security Warning**: this phrase reconstructs every derived key.
    #[inline]
    #[must_use]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Number of words in the phrase.
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.inner.word_count()
    }

    /// Derive the 64-byte BIP-39 seed.
    ///
    /// PBKDF2-HMAC-SHA512, 2048 rounds, salt `"mnemonic" + passphrase` with
    /// the passphrase NFKD-normalized. Pass `""` for no passphrase.
    #[must_use]
    pub fn to_seed(&self, passphrase: &str) -> Seed {
        Seed::new(self.inner.to_seed(passphrase))
    }
}

impl PartialEq for Mnemonic {
    fn eq(&self, other: &Self) -> bool {
        self.phrase == other.phrase
    }
}

impl Eq for Mnemonic {}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mnemonic")
            .field("words", &self.word_count())
            .finish_non_exhaustive()
    }
}
