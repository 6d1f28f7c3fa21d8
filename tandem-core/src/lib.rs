//! Core primitives for the tandem multi-chain wallet.
//!
//! This crate owns everything that is independent of a particular curve:
//! BIP-39 mnemonic handling, seed derivation, the [`Chain`] tag, the
//! [`Wallet`] record and the [`ChainDeriver`] capability implemented by the
//! per-chain crates.
//!
//! # Example
//!
//! ```
//! use tandem_core::{mnemonic, Mnemonic};
//!
//! let phrase = mnemonic::normalize(
//!     "  Abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon ABOUT ",
//! );
//! assert!(mnemonic::validate(&phrase));
//!
//! let mnemonic = Mnemonic::parse(&phrase)?;
//! let seed = mnemonic.to_seed("");
//! assert_eq!(seed.as_bytes().len(), 64);
//! # Ok::<(), tandem_core::Error>(())
//! ```

#![warn(missing_docs, rust_2018_idioms, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]
#![forbid(unsafe_code)]

mod chain;
mod deriver;
mod error;
pub mod mnemonic;
mod seed;
mod wallet;

pub use chain::{Chain, ParseChainError, HARDENED_OFFSET};
pub use deriver::ChainDeriver;
pub use error::{Error, Result};
pub use mnemonic::{Mnemonic, WordCount};
pub use seed::{Seed, SEED_LEN};
pub use wallet::Wallet;

// Re-export rand_core so callers can inject an RNG with matching trait versions.
pub use rand_core;
