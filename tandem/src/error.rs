//! Error types for wallet session operations.

use tandem_core::Chain;

/// Errors surfaced to the presentation layer.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The phrase has a bad word count, an unknown word or a bad checksum.
    #[error("invalid mnemonic")]
    InvalidMnemonic(#[source] tandem_core::Error),

    /// A wallet was requested before any mnemonic was locked in.
    #[error("no mnemonic is locked into the session")]
    SessionNotLocked,

    /// The secure random number generator failed during generation.
    #[error("secure randomness unavailable")]
    InsecureRandomness(#[source] tandem_core::Error),

    /// Key derivation failed. Unreachable for validated input.
    #[error("{chain} derivation failed at index {index}")]
    DerivationFailure {
        /// Chain being derived.
        chain: Chain,
        /// Account index being derived.
        index: u32,
        /// Underlying deriver error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<tandem_core::Error> for Error {
    fn from(err: tandem_core::Error) -> Self {
        match err {
            tandem_core::Error::InsecureRandomness(_) => Self::InsecureRandomness(err),
            _ => Self::InvalidMnemonic(err),
        }
    }
}

/// A convenient Result type alias for tandem operations.
pub type Result<T> = core::result::Result<T, Error>;
