//! # Envelope-Kit: Hybrid RSA/AES Encryption
//!
//! `envelope-kit` is a cryptographic library implementing a hybrid (envelope)
//! scheme: a fresh AES-CBC key and IV are generated for every operation,
//! wrapped with an RSA keypair, and concatenated with the symmetric
//! ciphertext into a single opaque bundle.
//!
//! Unlike a plain KEM, either half of the RSA keypair may take the
//! encrypting role:
//!
//! - **public-key path**: encrypt with the public key, decrypt with the
//!   private key. Confidentiality towards the key owner.
//! - **private-key path**: encrypt with the private key, decrypt with the
//!   public key. Anyone can read, but only the key owner could have
//!   produced the bundle.
//!
//! ## Core Concepts
//!
//! - [`AsymmetricKeyPair`]: holds an optional public and an optional private
//!   RSA key half and performs the fixed-block wrap/unwrap operations.
//! - [`SymmetricCipher`]: generates ephemeral key material and runs the
//!   AES-CBC bulk transform.
//! - [`HybridCryptosystem`]: combines the two into the bundling protocol.
//!
//! ## Quick Start
//!
//! ```rust
//! use envelope_kit::{AsymmetricKeyPair, CryptoConfig, HybridCryptosystem};
//!
//! fn main() -> Result<(), envelope_kit::Error> {
//!     let pair = AsymmetricKeyPair::generate(&CryptoConfig::default())?;
//!     let system = HybridCryptosystem::new(pair);
//!
//!     let bundle = system.encrypt_with_public_key(b"Hello, envelope!")?;
//!     let plaintext = system.decrypt_with_private_key(&bundle)?;
//!     assert_eq!(plaintext, b"Hello, envelope!");
//!     Ok(())
//! }
//! ```

pub mod asymmetric;
pub mod common;
pub mod hybrid;
pub mod symmetric;

pub use asymmetric::errors::{AsymmetricError, KeyRole};
pub use asymmetric::keypair::{AsymmetricKeyPair, KeyInput};
pub use common::config::{CryptoConfig, SymmetricAlgorithm};
pub use common::errors::Error;
pub use hybrid::HybridCryptosystem;
pub use symmetric::cipher::SymmetricCipher;
pub use symmetric::errors::SymmetricError;

/// The version of the `envelope-kit` crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
