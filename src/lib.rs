//! # ecrypto
//!
//! Asymmetric-key operations over a single secp256k1 keypair: generation,
//! persistence, public-key encryption and recoverable signatures.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          ECRYPTO MODULES                                │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │        ┌──────────────────────┐      ┌──────────────────────┐          │
//! │        │  Encryption Engine   │      │  Signature Engine    │          │
//! │        │                      │      │                      │          │
//! │        │ - encrypt            │      │ - sign / verify      │          │
//! │        │ - decrypt            │      │ - Signature (base64) │          │
//! │        └──────────┬───────────┘      └───────────┬──────────┘          │
//! │                   │    key representations       │                     │
//! │                   └──────────────┬───────────────┘                     │
//! │                                  ▼                                      │
//! │        ┌──────────────────────────────────────────────────┐            │
//! │        │                 KeyPair Model                    │            │
//! │        │                                                  │            │
//! │        │ - generate / marshal / unmarshal                 │            │
//! │        │ - save_to_file / load_from_file  ──► storage     │            │
//! │        └──────────────────────────────────────────────────┘            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation accepts its key as a [`KeyPair`], a decoded key
//! ([`PublicKey`] / [`PrivateKey`]) or serialized bytes, and behaves the
//! same for all three.
//!
//! ## Quick Start
//!
//! ```rust
//! use ecrypto::{decrypt, encrypt, sign, verify, KeyPair};
//!
//! let keypair = KeyPair::generate()?;
//!
//! let ciphertext = encrypt(keypair.public_key(), b"hello")?;
//! assert_eq!(decrypt(&keypair, &ciphertext)?, b"hello");
//!
//! let signature = sign(&keypair, b"hello")?;
//! verify(&keypair.marshal_public_key(), b"hello", &signature)?;
//! # Ok::<(), ecrypto::Error>(())
//! ```
//!
//! ## Module Hierarchy
//!
//! - [`error`] - Error type for the entire library
//! - [`crypto`] - Keys, encryption and signatures
//! - [`storage`] - Raw key files
//!
//! The library never installs a `tracing` subscriber; the few `debug!` and
//! `trace!` events it emits (file persistence, key generation) are visible
//! only if the application sets one up.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod crypto;
pub mod error;
pub mod storage;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use crypto::{
    decrypt, encrypt, load_key_pair, sign, signature_from_string, unmarshal_public_key, verify,
    KeyPair, PrivateKey, PrivateKeyLike, PublicKey, PublicKeyLike, Signature,
};
pub use error::{Error, Result};
