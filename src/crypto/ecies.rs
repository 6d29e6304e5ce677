//! # Hybrid Public-Key Encryption
//!
//! ECIES-style sealing over secp256k1: an ephemeral key agreement, a key
//! derived from the shared secret, and AES-256-GCM for the payload.
//!
//! ## Sealed Layout
//!
//! ```text
//! ┌──────────────────────┬─────────────┬──────────────────────┬───────────┐
//! │ ephemeral public key │    nonce    │      ciphertext      │    tag    │
//! │ 33 bytes (SEC1 cmp.) │  12 bytes   │  len(plaintext)      │ 16 bytes  │
//! └──────────────────────┴─────────────┴──────────────────────┴───────────┘
//! ```
//!
//! ## Key Schedule
//!
//! ```text
//! shared = ECDH(ephemeral_secret, recipient_public)      (x-coordinate)
//! key    = HKDF-SHA256(salt = ephemeral_public, ikm = shared, info = shared_info)
//! body   = AES-256-GCM(key, nonce, plaintext, aad)
//! ```
//!
//! `shared_info` and `aad` are the two optional auxiliary inputs of the
//! scheme. The encryption engine always passes them empty.

use aes_gcm::{
    aead::{Aead, KeyInit, Payload},
    Aes256Gcm, Nonce as AesNonce,
};
use hkdf::Hkdf;
use k256::ecdh::{diffie_hellman, EphemeralSecret};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// Size of the ephemeral public key prefix
pub(crate) const EPHEMERAL_KEY_SIZE: usize = 33;

/// Size of the AES-GCM nonce in bytes (96 bits)
pub(crate) const NONCE_SIZE: usize = 12;

/// Size of the AES-GCM authentication tag in bytes (128 bits)
pub(crate) const TAG_SIZE: usize = 16;

/// Bytes a sealed message carries on top of the plaintext
pub(crate) const OVERHEAD: usize = EPHEMERAL_KEY_SIZE + NONCE_SIZE + TAG_SIZE;

const KEY_SIZE: usize = 32;

/// Encrypt `plaintext` to `recipient`
pub(crate) fn seal(
    recipient: &k256::PublicKey,
    plaintext: &[u8],
    shared_info: &[u8],
    aad: &[u8],
) -> Result<Vec<u8>> {
    let ephemeral = EphemeralSecret::random(&mut OsRng);
    let ephemeral_point = ephemeral.public_key().to_encoded_point(true);
    let shared = ephemeral.diffie_hellman(recipient);

    let key = derive_key(shared.raw_secret_bytes(), ephemeral_point.as_bytes(), shared_info)
        .ok_or_else(|| Error::EncryptionFailed("HKDF expansion failed".into()))?;

    let mut nonce = [0u8; NONCE_SIZE];
    OsRng
        .try_fill_bytes(&mut nonce)
        .map_err(|e| Error::EncryptionFailed(format!("Secure random source failed: {}", e)))?;

    let cipher = Aes256Gcm::new_from_slice(&key[..])
        .map_err(|e| Error::EncryptionFailed(format!("Invalid key: {}", e)))?;

    let ciphertext = cipher
        .encrypt(AesNonce::from_slice(&nonce), Payload { msg: plaintext, aad })
        .map_err(|e| Error::EncryptionFailed(format!("AES-GCM encryption failed: {}", e)))?;

    let mut sealed = Vec::with_capacity(EPHEMERAL_KEY_SIZE + NONCE_SIZE + ciphertext.len());
    sealed.extend_from_slice(ephemeral_point.as_bytes());
    sealed.extend_from_slice(&nonce);
    sealed.extend_from_slice(&ciphertext);
    Ok(sealed)
}

/// Decrypt a sealed message with the recipient's private scalar
///
/// ## Errors
///
/// Returns `DecryptionFailed` if:
/// - The input is shorter than the fixed overhead
/// - The ephemeral key is not a valid point
/// - The key is wrong, the data was tampered with, or the auxiliary
///   inputs differ from those used when sealing
pub(crate) fn open(
    recipient: &k256::SecretKey,
    sealed: &[u8],
    shared_info: &[u8],
    aad: &[u8],
) -> Result<Vec<u8>> {
    if sealed.len() < OVERHEAD {
        return Err(Error::DecryptionFailed(format!(
            "Ciphertext must be at least {} bytes, got {}",
            OVERHEAD,
            sealed.len()
        )));
    }

    let (ephemeral_bytes, rest) = sealed.split_at(EPHEMERAL_KEY_SIZE);
    let (nonce, body) = rest.split_at(NONCE_SIZE);

    let ephemeral = k256::PublicKey::from_sec1_bytes(ephemeral_bytes)
        .map_err(|_| Error::DecryptionFailed("Invalid ephemeral public key".into()))?;

    let shared = diffie_hellman(recipient.to_nonzero_scalar(), ephemeral.as_affine());

    let key = derive_key(shared.raw_secret_bytes(), ephemeral_bytes, shared_info)
        .ok_or_else(|| Error::DecryptionFailed("HKDF expansion failed".into()))?;

    let cipher = Aes256Gcm::new_from_slice(&key[..])
        .map_err(|e| Error::DecryptionFailed(format!("Invalid key: {}", e)))?;

    cipher
        .decrypt(AesNonce::from_slice(nonce), Payload { msg: body, aad })
        .map_err(|_| Error::DecryptionFailed("Authentication tag mismatch".into()))
}

fn derive_key(shared: &[u8], salt: &[u8], info: &[u8]) -> Option<Zeroizing<[u8; KEY_SIZE]>> {
    let hkdf = Hkdf::<Sha256>::new(Some(salt), shared);
    let mut key = Zeroizing::new([0u8; KEY_SIZE]);
    hkdf.expand(info, &mut key[..]).ok()?;
    Some(key)
}

// ============================================================================
// TESTS
// ============================================================================
