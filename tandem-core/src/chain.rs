//! Supported chains and their fixed derivation path templates.

use core::fmt;
use core::str::FromStr;

/// Offset added to a BIP-32 child index to mark it hardened.
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// The chains a session derives wallets for.
///
/// Each chain has exactly one path template, and every segment of it is
/// hardened:
///
/// - **Ethereum** (secp256k1, BIP-32): `m/44'/60'/{index}'/0'`
/// - **Solana** (Ed25519, SLIP-0010): `m/44'/501'/{index}'/0'`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Chain {
    /// Ethereum accounts on secp256k1.
    Ethereum,
    /// Solana accounts on Ed25519.
    Solana,
}

impl Chain {
    /// BIP-44 purpose level.
    pub const PURPOSE: u32 = 44;

    /// SLIP-0044 coin type.
    #[must_use]
    pub const fn coin_type(self) -> u32 {
        match self {
            Self::Ethereum => 60,
            Self::Solana => 501,
        }
    }

    /// Unhardened path segments for the account at `index`.
    ///
    /// Every segment is derived hardened.
    #[must_use]
    pub const fn path_segments(self, index: u32) -> [u32; 4] {
        [Self::PURPOSE, self.coin_type(), index, 0]
    }

    /// Derivation path string for the account at `index`.
    #[must_use]
    pub fn path(self, index: u32) -> String {
        format!("m/44'/{}'/{index}'/0'", self.coin_type())
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ethereum => "Ethereum",
            Self::Solana => "Solana",
        }
    }

    /// Short identifier for CLI usage.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Ethereum => "eth",
            Self::Solana => "sol",
        }
    }

    /// Name of the underlying curve.
    #[must_use]
    pub const fn curve(self) -> &'static str {
        match self {
            Self::Ethereum => "secp256k1",
            Self::Solana => "ed25519",
        }
    }

    /// All supported chains.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Ethereum, Self::Solana]
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Chain {
    type Err = ParseChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "eth" | "ethereum" | "evm" | "secp" | "secp256k1" => Ok(Self::Ethereum),
            "sol" | "solana" | "ed25519" => Ok(Self::Solana),
            _ => Err(ParseChainError(s.into())),
        }
    }
}

/// Error returned when parsing an unknown chain name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown chain '{0}', expected one of: eth, sol")]
pub struct ParseChainError(String);
