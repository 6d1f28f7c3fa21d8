//! SLIP-0010 Ed25519 key derivation.
//!
//! Reference: <https://github.com/satoshilabs/slips/blob/master/slip-0010.md>
//!
//! Ed25519 supports hardened derivation only, so every index passed in here
//! is hardened; an index that already has the top bit set is rejected.

use ed25519_dalek::SigningKey;
use hmac::{Hmac, Mac};
use sha2::Sha512;
use tandem_core::HARDENED_OFFSET;
use zeroize::Zeroizing;

use crate::Error;

type HmacSha512 = Hmac<Sha512>;

const ED25519_CURVE: &[u8] = b"ed25519 seed";

/// SLIP-0010 derived key pair.
pub struct DerivedKey {
    /// 32-byte private key.
    pub private_key: Zeroizing<[u8; 32]>,
    /// 32-byte chain code.
    pub chain_code: Zeroizing<[u8; 32]>,
}

impl DerivedKey {
    /// Derive master key from seed.
    pub fn from_seed(seed: &[u8]) -> Result<Self, Error> {
        let mut mac = HmacSha512::new_from_slice(ED25519_CURVE).map_err(|_| Error::InvalidKeyLength)?;
        mac.update(seed);
        Ok(Self::split(&mac.finalize().into_bytes()))
    }

    /// Derive child key at hardened `index`.
    pub fn derive_hardened(&self, index: u32) -> Result<Self, Error> {
        if index >= HARDENED_OFFSET {
            return Err(Error::IndexOutOfRange(index));
        }

        let mut mac =
            HmacSha512::new_from_slice(&*self.chain_code).map_err(|_| Error::InvalidKeyLength)?;

        // 0x00 || private_key || ser32(index + 2^31)
        mac.update(&[0x00]);
        mac.update(&*self.private_key);
        mac.update(&(index | HARDENED_OFFSET).to_be_bytes());

        Ok(Self::split(&mac.finalize().into_bytes()))
    }

    /// Derive along a path of hardened indices starting from the master key.
    pub fn derive_path(seed: &[u8], path: &[u32]) -> Result<Self, Error> {
        path.iter()
            .try_fold(Self::from_seed(seed)?, |key, &index| key.derive_hardened(index))
    }

    /// Convert to Ed25519 signing key.
    pub fn to_signing_key(&self) -> SigningKey {
        SigningKey::from_bytes(&self.private_key)
    }

    fn split(output: &[u8]) -> Self {
        let mut private_key = Zeroizing::new([0u8; 32]);
        let mut chain_code = Zeroizing::new([0u8; 32]);
        private_key.copy_from_slice(&output[..32]);
        chain_code.copy_from_slice(&output[32..64]);
        Self {
            private_key,
            chain_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    // SLIP-0010 test vector 1 for ed25519.
    const VECTOR_SEED: [u8; 16] = hex!("000102030405060708090a0b0c0d0e0f");

    #[test]
    fn test_vector_1_master() {
        let master = DerivedKey::from_seed(&VECTOR_SEED).unwrap();

        assert_eq!(
            *master.private_key,
            hex!("2b4be7f19ee27bbf30c667b642d5f4aa69fd169872f8fc3059c08ebae2eb19e7")
        );
        assert_eq!(
            *master.chain_code,
            hex!("90046a93de5380a72b5e45010748567d5ea02bbf6522f979e05c0d8d8ca9fffb")
        );
        assert_eq!(
            master.to_signing_key().verifying_key().to_bytes(),
            hex!("a4b2856bfec510abab89753fac1ac0e1112364e7d250545963f135f2a33188ed")
        );
    }

    #[test]
    fn test_vector_1_first_child() {
        let child = DerivedKey::derive_path(&VECTOR_SEED, &[0]).unwrap();

        assert_eq!(
            *child.private_key,
            hex!("68e0fe46dfb67e368c75379acec591dad19df3cde26e63b93a8e704f1dade7a3")
        );
        assert_eq!(
            *child.chain_code,
            hex!("8b59aa11380b624e81507a27fedda59fea6d0b779a778918a2fd3590e16e9c69")
        );
        assert_eq!(
            child.to_signing_key().verifying_key().to_bytes(),
            hex!("8c8a13df77a28f3445213a0f432fde644acaa215fc72dcdf300d5efaa85d350c")
        );
    }

    #[test]
    fn test_path_matches_stepwise_derivation() {
        let seed = [9u8; 64];
        let stepwise = DerivedKey::from_seed(&seed)
            .and_then(|k| k.derive_hardened(44))
            .and_then(|k| k.derive_hardened(501))
            .unwrap();
        let walked = DerivedKey::derive_path(&seed, &[44, 501]).unwrap();

        assert_eq!(*stepwise.private_key, *walked.private_key);
        assert_eq!(*stepwise.chain_code, *walked.chain_code);
    }

    #[test]
    fn test_rejects_pre_hardened_index() {
        let master = DerivedKey::from_seed(&[0u8; 64]).unwrap();
        assert_eq!(
            master.derive_hardened(HARDENED_OFFSET).err(),
            Some(Error::IndexOutOfRange(HARDENED_OFFSET))
        );
    }
}
