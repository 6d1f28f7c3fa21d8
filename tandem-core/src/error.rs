//! Error types for mnemonic and seed operations.

/// Errors that can occur in the core wallet primitives.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The phrase failed BIP-39 validation (length, unknown word or checksum).
    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(#[source] bip39::Error),

    /// Unsupported word count requested for generation.
    #[error("invalid word count {0}, must be 12, 15, 18, 21, or 24")]
    InvalidWordCount(usize),

    /// The secure random number generator could not produce entropy.
    #[error("secure randomness unavailable: {0}")]
    InsecureRandomness(#[source] rand_core::Error),

    /// Raw seed bytes were not exactly 64 bytes long.
    #[error("invalid seed length {0}, expected 64 bytes")]
    InvalidSeedLength(usize),
}

impl From<bip39::Error> for Error {
    fn from(err: bip39::Error) -> Self {
        Self::InvalidMnemonic(err)
    }
}

/// A convenient Result type alias for tandem-core operations.
pub type Result<T> = core::result::Result<T, Error>;
