//! Derived wallet records.

use core::fmt;

use zeroize::Zeroizing;

use crate::Chain;

/// A keypair derived for one chain at one account index.
///
/// The private key is only reachable through [`Wallet::reveal_private_key`]
/// and is redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Wallet {
    chain: Chain,
    index: u32,
    path: String,
    address: String,
    public_key: String,
    private_key: Zeroizing<String>,
}

impl Wallet {
    /// Assemble a wallet record. The path is rendered from the chain template.
    pub fn new(
        chain: Chain,
        index: u32,
        address: String,
        public_key: String,
        private_key: Zeroizing<String>,
    ) -> Self {
        Self {
            chain,
            index,
            path: chain.path(index),
            address,
            public_key,
            private_key,
        }
    }

    /// Chain this wallet belongs to.
    #[inline]
    pub const fn chain(&self) -> Chain {
        self.chain
    }

    /// Account index within the chain's path template.
    #[inline]
    pub const fn index(&self) -> u32 {
        self.index
    }

    /// Derivation path, e.g. `m/44'/60'/0'/0'`.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Public identifier: EIP-55 address on Ethereum, base58 public key on Solana.
    #[inline]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Public key encoding for the chain.
    #[inline]
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Private key material in the chain's import format.
    ///
    /// **Security Warning**: anyone holding this value controls the account.
    /// Only call this behind an explicit user action.
    #[inline]
    pub fn reveal_private_key(&self) -> &str {
        &self.private_key
    }
}

impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet")
            .field("chain", &self.chain)
            .field("index", &self.index)
            .field("path", &self.path)
            .field("address", &self.address)
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}
