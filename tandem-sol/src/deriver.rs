//! Solana account derivation from a root seed.

use ed25519_dalek::VerifyingKey;
use tandem_core::{Chain, ChainDeriver, Seed, Wallet};
use tracing::debug;
use zeroize::Zeroizing;

use crate::slip10::DerivedKey;
use crate::{Error, Result};

/// Solana wallet deriver.
///
/// Walks `m/44'/501'/{index}'/0'` with SLIP-0010 and expands the derived
/// 32-byte secret into an Ed25519 keypair. The resulting wallet carries:
///
/// - address: base58 public key
/// - public key: 32-byte hex
/// - private key: hex of the 32-byte derived secret (not the 64-byte
///   expanded keypair)
#[derive(Debug, Clone, Copy, Default)]
pub struct Deriver;

impl Deriver {
    /// Create a new Solana deriver.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ChainDeriver for Deriver {
    type Error = Error;

    fn chain(&self) -> Chain {
        Chain::Solana
    }

    fn derive_at(&self, seed: &Seed, index: u32) -> Result<Wallet> {
        let derived = DerivedKey::derive_path(seed.as_bytes(), &Chain::Solana.path_segments(index))?;
        let verifying_key: VerifyingKey = derived.to_signing_key().verifying_key();
        let public_key_bytes = verifying_key.as_bytes();

        let wallet = Wallet::new(
            Chain::Solana,
            index,
            bs58::encode(public_key_bytes).into_string(),
            hex::encode(public_key_bytes),
            Zeroizing::new(hex::encode(derived.private_key.as_slice())),
        );

        debug!(chain = %Chain::Solana, index, path = wallet.path(), "derived wallet");
        Ok(wallet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tandem_core::{Mnemonic, HARDENED_OFFSET};

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn test_seed() -> Seed {
        Mnemonic::parse(TEST_MNEMONIC).unwrap().to_seed("")
    }

    #[test]
    fn test_reference_account_zero() {
        let wallet = Deriver::new().derive_at(&test_seed(), 0).unwrap();

        assert_eq!(wallet.chain(), Chain::Solana);
        assert_eq!(wallet.path(), "m/44'/501'/0'/0'");
        assert_eq!(wallet.address(), "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk");
        assert_eq!(
            wallet.public_key(),
            "f036276246a75b9de3349ed42b15e232f6518fc20f5fcd4f1d64e81f9bd258f7"
        );
        assert_eq!(
            wallet.reveal_private_key(),
            "37df573b3ac4ad5b522e064e25b63ea16bcbe79d449e81a0268d1047948bb445"
        );
    }

    #[test]
    fn test_reference_accounts_one_and_two() {
        let deriver = Deriver::new();
        let seed = test_seed();

        assert_eq!(
            deriver.derive_at(&seed, 1).unwrap().address(),
            "Hh8QwFUA6MtVu1qAoq12ucvFHNwCcVTV7hpWjeY1Hztb"
        );
        assert_eq!(
            deriver.derive_at(&seed, 2).unwrap().address(),
            "7WktogJEd2wQ9eH2oWusmcoFTgeYi6rS632UviTBJ2jm"
        );
    }

    #[test]
    fn test_derive_many() {
        let wallets = Deriver::new().derive_many(&test_seed(), 0, 3).unwrap();

        assert_eq!(wallets.len(), 3);
        assert_eq!(wallets[0].path(), "m/44'/501'/0'/0'");
        assert_eq!(wallets[1].path(), "m/44'/501'/1'/0'");
        assert_eq!(wallets[2].path(), "m/44'/501'/2'/0'");

        assert_ne!(wallets[0].address(), wallets[1].address());
        assert_ne!(wallets[1].address(), wallets[2].address());
    }

    #[test]
    fn test_deterministic_derivation() {
        let first = Deriver::new().derive_at(&test_seed(), 9).unwrap();
        let second = Deriver::new().derive_at(&test_seed(), 9).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_address_is_base58_public_key() {
        let wallet = Deriver::new().derive_at(&test_seed(), 4).unwrap();
        let decoded = bs58::decode(wallet.address()).into_vec().unwrap();
        assert_eq!(hex::encode(decoded), wallet.public_key());
    }

    #[test]
    fn test_index_outside_hardened_range() {
        let result = Deriver::new().derive_at(&test_seed(), HARDENED_OFFSET);
        assert_eq!(result.err(), Some(Error::IndexOutOfRange(HARDENED_OFFSET)));
    }
}
