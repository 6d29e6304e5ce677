//! # Cryptography Module
//!
//! Key management, hybrid encryption and recoverable signatures over a
//! single secp256k1 keypair.
//!
//! ## Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CRYPTOGRAPHIC ARCHITECTURE                           │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │   Caller key argument (any of three shapes)                            │
//! │                                                                         │
//! │   ┌────────────┐   ┌─────────────────────┐   ┌──────────────────┐      │
//! │   │  KeyPair   │   │ PublicKey/PrivateKey│   │ serialized bytes │      │
//! │   └─────┬──────┘   └──────────┬──────────┘   └────────┬─────────┘      │
//! │         └─────────────────────┼───────────────────────┘                │
//! │                               ▼                                         │
//! │              PublicKeyLike / PrivateKeyLike (repr)                     │
//! │                               │  normalize                              │
//! │                               ▼                                         │
//! │                  canonical in-memory key object                         │
//! │                               │                                         │
//! │         ┌─────────────────────┼─────────────────────┐                  │
//! │         ▼                     ▼                     ▼                  │
//! │   ┌───────────┐        ┌────────────┐        ┌────────────┐            │
//! │   │  encrypt  │        │  decrypt   │        │ sign/verify│            │
//! │   │  (ECIES)  │        │  (ECIES)   │        │  (ECDSA)   │            │
//! │   └───────────┘        └────────────┘        └────────────┘            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Algorithm Choices
//!
//! | Algorithm | Purpose |
//! |-----------|---------|
//! | secp256k1 | Curve for every key |
//! | Keccak-256 | Message digest before signing |
//! | ECDSA + recovery id | 65-byte signatures |
//! | ECDH + HKDF-SHA256 + AES-256-GCM | Hybrid public-key encryption |
//!
//! ## Security Considerations
//!
//! 1. **Key Zeroization**: private scalars are zeroized when dropped, and
//!    exported secret bytes come back in `Zeroizing` buffers
//! 2. **Secure Random**: `rand::rngs::OsRng` for every random draw
//! 3. **Low-S Signatures**: signing always emits normalized signatures

mod ecies;
mod encryption;
mod hash;
mod keys;
mod repr;
mod signing;

pub use encryption::{decrypt, encrypt};
pub use hash::keccak256;
pub use keys::{load_key_pair, unmarshal_public_key, KeyPair, PrivateKey, PublicKey};
pub use repr::{PrivateKeyLike, PublicKeyLike};
pub use signing::{sign, signature_from_string, verify, Signature};

/// Size of a serialized private key (big-endian scalar)
pub const PRIVATE_KEY_SIZE: usize = 32;

/// Size of a serialized public key (compressed SEC1 point)
pub const PUBLIC_KEY_SIZE: usize = 33;

/// Size of a signature: R (32) || S (32) || recovery id (1)
pub const SIGNATURE_SIZE: usize = 65;

/// Size of the message digest fed to the signer
pub const HASH_SIZE: usize = 32;
