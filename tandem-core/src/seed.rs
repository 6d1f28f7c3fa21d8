//! The 64-byte BIP-39 root seed.

use core::fmt;

use zeroize::Zeroizing;

use crate::{Error, Result};

/// Length of a BIP-39 seed in bytes.
pub const SEED_LEN: usize = 64;

/// A BIP-39 root seed, zeroized on drop.
///
/// Seeds are produced by [`Mnemonic::to_seed`](crate::Mnemonic::to_seed)
/// and consumed by the chain derivers. They are never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct Seed(Zeroizing<[u8; SEED_LEN]>);

impl Seed {
    /// Wrap raw seed bytes.
    #[must_use]
    pub fn new(bytes: [u8; SEED_LEN]) -> Self {
        Self(Zeroizing::new(bytes))
    }

    /// Build a seed from a byte slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSeedLength`] unless `bytes` is exactly
    /// 64 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; SEED_LEN] = bytes
            .try_into()
            .map_err(|_| Error::InvalidSeedLength(bytes.len()))?;
        Ok(Self::new(bytes))
    }

    /// The raw seed bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mnemonic;
    use hex_literal::hex;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_seed_without_passphrase() {
        let seed = Mnemonic::parse(TEST_MNEMONIC).unwrap().to_seed("");
        assert_eq!(
            seed.as_bytes(),
            &hex!("5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4")
        );
    }

    #[test]
    fn test_seed_with_trezor_passphrase() {
        let seed = Mnemonic::parse(TEST_MNEMONIC).unwrap().to_seed("TREZOR");
        assert_eq!(
            seed.as_bytes(),
            &hex!("c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e53495531f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04")
        );
    }

    #[test]
    fn test_deterministic_seed() {
        let mnemonic = Mnemonic::parse(TEST_MNEMONIC).unwrap();
        assert_eq!(mnemonic.to_seed("test"), mnemonic.to_seed("test"));
        assert_ne!(mnemonic.to_seed(""), mnemonic.to_seed("test"));
    }

    #[test]
    fn test_from_slice_length() {
        assert!(Seed::from_slice(&[0u8; 64]).is_ok());
        assert!(matches!(Seed::from_slice(&[0u8; 32]), Err(Error::InvalidSeedLength(32))));
    }

    #[test]
    fn test_debug_redacts() {
        assert_eq!(format!("{:?}", Seed::new([7u8; 64])), "Seed(..)");
    }
}
