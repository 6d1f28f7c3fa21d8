//! The per-chain derivation capability.

use crate::{Chain, Seed, Wallet};

/// Derives the wallet at a given account index from a root seed.
///
/// Implementations are pure functions of `(seed, index)`: the same inputs
/// always yield byte-identical wallets, and nothing is cached or logged
/// beyond the chain, index and path.
pub trait ChainDeriver {
    /// Error produced when derivation fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The chain this deriver produces wallets for.
    fn chain(&self) -> Chain;

    /// Derive the wallet at `index` along the chain's path template.
    ///
    /// # Errors
    ///
    /// Fails only when `index` is outside the hardened range or the
    /// underlying key arithmetic rejects a derived key.
    fn derive_at(&self, seed: &Seed, index: u32) -> Result<Wallet, Self::Error>;

    /// Derive `count` consecutive wallets starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns the first derivation error encountered.
    fn derive_many(&self, seed: &Seed, start: u32, count: u32) -> Result<Vec<Wallet>, Self::Error> {
        (start..start.saturating_add(count))
            .map(|index| self.derive_at(seed, index))
            .collect()
    }
}
