//! Ethereum account derivation from a root seed.

use bip32::{ChildNumber, XPrv};
use k256::ecdsa::SigningKey;
use tandem_core::{Chain, ChainDeriver, Seed, Wallet};
use tracing::debug;
use zeroize::Zeroizing;

use crate::{Address, Error, Result};

/// Ethereum wallet deriver.
///
/// Builds the BIP-32 master key from the seed (HMAC-SHA512 keyed
/// `"Bitcoin seed"`) and walks `m/44'/60'/{index}'/0'`, hardening every
/// level. The resulting wallet carries:
///
/// - address: EIP-55 checksummed, `0x`-prefixed
/// - public key: `0x` + 33-byte compressed SEC1 hex
/// - private key: `0x` + 32-byte hex
///
/// # Example
///
/// ```
/// use tandem_core::{ChainDeriver, Seed};
/// use tandem_eth::Deriver;
///
/// let seed = Seed::new([1u8; 64]);
/// let wallets = Deriver::new().derive_many(&seed, 0, 3).unwrap();
/// assert_eq!(wallets[2].path(), "m/44'/60'/2'/0'");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Deriver;

impl Deriver {
    /// Create a new Ethereum deriver.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Walk the hardened path template down to the account key.
    fn derive_key(seed: &Seed, index: u32) -> Result<XPrv> {
        let mut key = XPrv::new(seed.as_bytes())?;
        for segment in Chain::Ethereum.path_segments(index) {
            let child =
                ChildNumber::new(segment, true).map_err(|_| Error::IndexOutOfRange(index))?;
            key = key.derive_child(child)?;
        }
        Ok(key)
    }
}

impl ChainDeriver for Deriver {
    type Error = Error;

    fn chain(&self) -> Chain {
        Chain::Ethereum
    }

    fn derive_at(&self, seed: &Seed, index: u32) -> Result<Wallet> {
        let key = Self::derive_key(seed, index)?;
        let signing_key: &SigningKey = key.private_key();
        let verifying_key = signing_key.verifying_key();

        let address = Address::from_public_key(verifying_key.to_encoded_point(false).as_bytes());
        let public_key = verifying_key.to_encoded_point(true);

        let wallet = Wallet::new(
            Chain::Ethereum,
            index,
            address.to_checksum(),
            format!("0x{}", hex::encode(public_key.as_bytes())),
            Zeroizing::new(format!("0x{}", hex::encode(signing_key.to_bytes()))),
        );

        debug!(chain = %Chain::Ethereum, index, path = wallet.path(), "derived wallet");
        Ok(wallet)
    }
}
