//! Error types for Solana wallet operations.

/// Errors that can occur during Solana key derivation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// HMAC could not be keyed with the chain code.
    #[error("invalid HMAC key length")]
    InvalidKeyLength,

    /// Account index does not fit below the hardened offset.
    #[error("account index {0} is outside the hardened range")]
    IndexOutOfRange(u32),
}
