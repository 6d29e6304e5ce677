//! # Encryption Module
//!
//! Public-key encryption and private-key decryption, accepting any key
//! representation on either side.
//!
//! ## Encryption Flow
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      ENCRYPTION FLOW                                    │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  SENDER                                                                │
//! │  ┌─────────────────────────────────────────────────────────────┐       │
//! │  │  KeyPair │ PublicKey │ 33 compressed bytes                  │       │
//! │  │                     ↓ normalize                             │       │
//! │  │  PublicKey                                                  │       │
//! │  │                     ↓ ECIES seal (no shared info, no AAD)   │       │
//! │  │  Ciphertext (opaque bytes)                                  │       │
//! │  └─────────────────────────────────────────────────────────────┘       │
//! │                                                                         │
//! │  RECIPIENT                                                             │
//! │  ┌─────────────────────────────────────────────────────────────┐       │
//! │  │  KeyPair │ PrivateKey │ 32 scalar bytes                     │       │
//! │  │                     ↓ normalize                             │       │
//! │  │  PrivateKey                                                 │       │
//! │  │                     ↓ ECIES open (no shared info, no AAD)   │       │
//! │  │  Plaintext (or DecryptionFailed)                            │       │
//! │  └─────────────────────────────────────────────────────────────┘       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use super::ecies;
use super::repr::{PrivateKeyLike, PublicKeyLike};
use crate::error::Result;

/// Encrypt `plaintext` to the holder of the matching private key
///
/// ## Errors
///
/// - `MalformedKey` if byte input is not a valid compressed point
/// - `EncryptionFailed` if the hybrid scheme fails
///
/// ## Example
///
/// ```ignore
/// let keypair = KeyPair::generate()?;
/// let ciphertext = encrypt(&keypair, b"Hello")?;
/// let ciphertext = encrypt(keypair.public_key(), b"Hello")?;
/// let ciphertext = encrypt(&keypair.marshal_public_key(), b"Hello")?;
/// ```
pub fn encrypt<'a>(key: impl Into<PublicKeyLike<'a>>, plaintext: &[u8]) -> Result<Vec<u8>> {
    let public = key.into().to_public_key()?;
    ecies::seal(public.as_inner(), plaintext, &[], &[])
}

/// Decrypt a ciphertext produced by [`encrypt`]
///
/// ## Errors
///
/// - `MalformedKey` if byte input is not a valid scalar
/// - `InvalidState` if a public-only keypair is supplied
/// - `DecryptionFailed` on a wrong key or a corrupted/truncated ciphertext
pub fn decrypt<'a>(key: impl Into<PrivateKeyLike<'a>>, ciphertext: &[u8]) -> Result<Vec<u8>> {
    let private = key.into().to_private_key()?;
    ecies::open(private.as_inner(), ciphertext, &[], &[])
}

// ============================================================================
// TESTS
// ============================================================================
