//! Ethereum address with EIP-55 checksum encoding.

use core::fmt;

use sha3::{Digest, Keccak256};

/// Compute a Keccak-256 hash.
#[inline]
fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Ethereum address (20 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Address([u8; 20]);

impl Address {
    /// Derive the address of a secp256k1 public key.
    ///
    /// Accepts the 65-byte SEC1 uncompressed encoding or the raw 64-byte
    /// `x || y` form. The address is the last 20 bytes of its Keccak-256.
    pub fn from_public_key(public_key: &[u8]) -> Self {
        let raw = match public_key {
            [0x04, rest @ ..] if rest.len() == 64 => rest,
            _ => public_key,
        };

        let hash = keccak256(raw);
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&hash[12..]);
        Self(bytes)
    }

    /// Render as a `0x`-prefixed EIP-55 mixed-case string.
    pub fn to_checksum(&self) -> String {
        let lower = hex::encode(self.0);
        let hash = keccak256(lower.as_bytes());

        let mut result = String::with_capacity(42);
        result.push_str("0x");
        for (i, c) in lower.chars().enumerate() {
            let nibble = (hash[i / 2] >> (4 * (1 - i % 2))) & 0xf;
            if c.is_ascii_alphabetic() && nibble >= 8 {
                result.push(c.to_ascii_uppercase());
            } else {
                result.push(c);
            }
        }
        result
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checksum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    /// Mixed-case vectors from EIP-55.
    const EIP55_VECTORS: &[&str] = &[
        "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
        "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
        "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
        "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
    ];

    #[test]
    fn test_checksum_vectors() {
        let cases = [
            (hex!("5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"), EIP55_VECTORS[0]),
            (hex!("fb6916095ca1df60bb79ce92ce3ea74c37c5d359"), EIP55_VECTORS[1]),
            (hex!("dbf03b407c01e7cd3cbea99509d93f8dddc8c6fb"), EIP55_VECTORS[2]),
            (hex!("d1220a0cf47c7b9be7a2e6ba89f429762e7b9adb"), EIP55_VECTORS[3]),
        ];
        for (bytes, expected) in cases {
            let addr = Address(bytes);
            assert_eq!(addr.to_checksum(), expected);
            assert_eq!(addr.to_string(), expected);
        }
    }

    #[test]
    fn test_checksum_digits_only() {
        let addr = Address([0x11; 20]);
        assert_eq!(addr.to_checksum(), "0x1111111111111111111111111111111111111111");
    }

    #[test]
    fn test_from_public_key_generator_point() {
        // Public key of private key 1, i.e. the secp256k1 generator.
        let uncompressed = hex!(
            "0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
            "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"
        );
        let addr = Address::from_public_key(&uncompressed);
        assert_eq!(addr.to_checksum(), "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf");

        // The prefix-less form hashes to the same address.
        assert_eq!(Address::from_public_key(&uncompressed[1..]), addr);
    }
}
