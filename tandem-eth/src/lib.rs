//! Ethereum wallet derivation for tandem.
//!
//! Derives secp256k1 keypairs from a [`tandem_core::Seed`] along the fixed
//! all-hardened path `m/44'/60'/{index}'/0'` and renders EIP-55 addresses.
//!
//! # Usage
//!
//! ```
//! use tandem_core::{ChainDeriver, Mnemonic};
//! use tandem_eth::Deriver;
//!
//! let mnemonic = Mnemonic::parse(
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
//! )
//! .unwrap();
//! let seed = mnemonic.to_seed("");
//!
//! let wallet = Deriver::new().derive_at(&seed, 0).unwrap();
//! assert_eq!(wallet.address(), "0x1cC31E180CCA3a8698fD6f13765209EC7CB9E755");
//! ```

#![warn(missing_docs, rust_2018_idioms, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]
#![forbid(unsafe_code)]

mod address;
mod deriver;
mod error;

pub use address::Address;
pub use deriver::Deriver;
pub use error::Error;

/// A convenient Result type alias for tandem-eth operations.
pub type Result<T> = core::result::Result<T, Error>;
