//! Error types for Ethereum wallet operations.

/// Errors that can occur during Ethereum key derivation.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// BIP-32 derivation rejected the seed or a derived key.
    #[error("key derivation error: {0}")]
    Derivation(#[from] bip32::Error),

    /// Account index does not fit below the hardened offset.
    #[error("account index {0} is outside the hardened range")]
    IndexOutOfRange(u32),
}
