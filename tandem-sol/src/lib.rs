//! Solana wallet derivation for tandem.
//!
//! Derives Ed25519 keypairs from a [`tandem_core::Seed`] with SLIP-0010 along
//! the fixed path `m/44'/501'/{index}'/0'`. Addresses are the base58-encoded
//! public key.
//!
//! # Usage
//!
//! ```
//! use tandem_core::{ChainDeriver, Mnemonic};
//! use tandem_sol::Deriver;
//!
//! let mnemonic = Mnemonic::parse(
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
//! )
//! .unwrap();
//! let seed = mnemonic.to_seed("");
//!
//! let wallet = Deriver::new().derive_at(&seed, 0).unwrap();
//! assert_eq!(wallet.address(), "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk");
//! ```

#![warn(missing_docs, rust_2018_idioms, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]
#![forbid(unsafe_code)]

mod deriver;
mod error;
mod slip10;

pub use deriver::Deriver;
pub use error::Error;

/// A convenient Result type alias for tandem-sol operations.
pub type Result<T> = core::result::Result<T, Error>;
