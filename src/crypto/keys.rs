//! # Key Management
//!
//! secp256k1 key generation, serialization and file persistence.
//!
//! ## Key Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          KEY TYPES                                      │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  PrivateKey (secp256k1 scalar)                                         │
//! │  • Serialized: 32 bytes, big-endian, no header                         │
//! │  • Valid range: 1 ..= n-1 (n = curve order)                            │
//! │  • Zeroized on drop                                                    │
//! │                                                                         │
//! │  PublicKey (secp256k1 point = PrivateKey × G)                          │
//! │  • Serialized: 33 bytes, compressed SEC1                               │
//! │    [0x02 | 0x03] (y parity) || x (32 bytes)                            │
//! │                                                                         │
//! │  KeyPair                                                               │
//! │  ┌────────────────────┐    ┌────────────────────┐                      │
//! │  │ Option<PrivateKey> │───►│     PublicKey      │  (always present)    │
//! │  └────────────────────┘    └────────────────────┘                      │
//! │  Full pair:        private present, public derived from it             │
//! │  Public-only pair: verification / encryption workflows only            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::path::Path;

use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::{FieldBytes, SecretKey};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroizing;

use super::{PRIVATE_KEY_SIZE, PUBLIC_KEY_SIZE};
use crate::error::{Error, Result};
use crate::storage;

/// Scalars outside `1..n` are redrawn; hitting this bound means the
/// random source is broken, not unlucky.
const MAX_GENERATION_ATTEMPTS: usize = 8;

// ============================================================================
// PRIVATE KEY
// ============================================================================

/// A secp256k1 private scalar
///
/// The underlying `k256::SecretKey` zeroizes itself when dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey(SecretKey);

impl PrivateKey {
    /// Decode a 32-byte big-endian scalar
    ///
    /// Fails with `MalformedKey` on any other length, on zero, and on values
    /// not below the curve order.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PRIVATE_KEY_SIZE {
            return Err(Error::MalformedKey(format!(
                "Private key must be {} bytes, got {}",
                PRIVATE_KEY_SIZE,
                bytes.len()
            )));
        }

        let secret = SecretKey::from_bytes(FieldBytes::from_slice(bytes)).map_err(|_| {
            Error::MalformedKey("Private key scalar is zero or not below the curve order".into())
        })?;

        Ok(Self(secret))
    }

    /// Serialize as a 32-byte big-endian scalar
    ///
    /// ## Security Warning
    ///
    /// Only use this for secure storage. Never log or transmit these bytes.
    pub fn to_bytes(&self) -> Zeroizing<[u8; PRIVATE_KEY_SIZE]> {
        let mut out = Zeroizing::new([0u8; PRIVATE_KEY_SIZE]);
        out.copy_from_slice(&self.0.to_bytes());
        out
    }

    /// Derive the matching public key
    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.0.public_key())
    }

    pub(crate) fn as_inner(&self) -> &SecretKey {
        &self.0
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}

// ============================================================================
// PUBLIC KEY
// ============================================================================

/// A secp256k1 public point
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PublicKey(k256::PublicKey);

impl PublicKey {
    /// Decode a 33-byte compressed SEC1 point
    ///
    /// Only the `0x02`/`0x03` prefixes are accepted. Uncompressed and other
    /// SEC1 encodings are rejected even when the point is valid, so every
    /// public key on the wire has exactly one byte form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PUBLIC_KEY_SIZE {
            return Err(Error::MalformedKey(format!(
                "Public key must be {} bytes, got {}",
                PUBLIC_KEY_SIZE,
                bytes.len()
            )));
        }

        if !matches!(bytes[0], 0x02 | 0x03) {
            return Err(Error::MalformedKey(format!(
                "Public key prefix must be 0x02 or 0x03, got 0x{:02x}",
                bytes[0]
            )));
        }

        let point = k256::PublicKey::from_sec1_bytes(bytes)
            .map_err(|_| Error::MalformedKey("Public key is not a point on secp256k1".into()))?;

        Ok(Self(point))
    }

    /// Serialize as a 33-byte compressed SEC1 point
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_SIZE] {
        let encoded = self.0.to_encoded_point(true);
        let mut out = [0u8; PUBLIC_KEY_SIZE];
        out.copy_from_slice(encoded.as_bytes());
        out
    }

    /// Encode the compressed form as hex
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Decode from a hex string holding the compressed form
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes =
            hex::decode(hex_str).map_err(|e| Error::MalformedKey(format!("Invalid hex: {}", e)))?;
        Self::from_bytes(&bytes)
    }

    pub(crate) fn as_inner(&self) -> &k256::PublicKey {
        &self.0
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

impl Serialize for PublicKey {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PublicKey::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// KEY PAIR
// ============================================================================

/// A secp256k1 keypair
///
/// The public key is always present. When the private key is present the
/// public key is the point derived from it; the two can never disagree
/// because the public half is only ever computed, never accepted alongside
/// a private key.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    private: Option<PrivateKey>,
    public: PublicKey,
}

impl KeyPair {
    /// Generate a new random keypair
    ///
    /// Uses the operating system's secure random number generator. Fails
    /// only if that source fails.
    pub fn generate() -> Result<Self> {
        let mut candidate = Zeroizing::new([0u8; PRIVATE_KEY_SIZE]);

        for _ in 0..MAX_GENERATION_ATTEMPTS {
            OsRng
                .try_fill_bytes(&mut candidate[..])
                .map_err(|e| Error::KeyGenFailed(format!("Secure random source failed: {}", e)))?;

            if let Ok(secret) = SecretKey::from_bytes(FieldBytes::from_slice(&candidate[..])) {
                tracing::trace!("Generated secp256k1 key pair");
                return Ok(Self::from_private_key(PrivateKey(secret)));
            }
        }

        Err(Error::KeyGenFailed(format!(
            "No valid scalar after {} draws",
            MAX_GENERATION_ATTEMPTS
        )))
    }

    /// Build a full keypair, deriving the public key
    pub fn from_private_key(private: PrivateKey) -> Self {
        let public = private.public_key();
        Self {
            private: Some(private),
            public,
        }
    }

    /// Build a public-only keypair
    pub fn from_public_key(public: PublicKey) -> Self {
        Self {
            private: None,
            public,
        }
    }

    /// The private key, absent for public-only pairs
    pub fn private_key(&self) -> Option<&PrivateKey> {
        self.private.as_ref()
    }

    /// The public key
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Whether this pair carries only a public key
    pub fn is_public_only(&self) -> bool {
        self.private.is_none()
    }

    /// Serialize the private key (32-byte big-endian scalar)
    ///
    /// Fails with `InvalidState` on a public-only pair.
    pub fn marshal_private_key(&self) -> Result<Zeroizing<[u8; PRIVATE_KEY_SIZE]>> {
        Ok(self.require_private()?.to_bytes())
    }

    /// Decode a private key and derive its public key
    pub fn unmarshal_private_key(bytes: &[u8]) -> Result<Self> {
        Ok(Self::from_private_key(PrivateKey::from_bytes(bytes)?))
    }

    /// Serialize the public key (33-byte compressed point)
    pub fn marshal_public_key(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.public.to_bytes()
    }

    /// Write the serialized private key to `path`, replacing any existing file
    ///
    /// A failed write can leave a partial file behind; it is not cleaned up.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.marshal_private_key()?;
        storage::write_key_file(path.as_ref(), &bytes[..])
    }

    /// Read a serialized private key from `path`
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = storage::read_key_file(path.as_ref())?;
        Self::unmarshal_private_key(&bytes)
    }

    pub(crate) fn require_private(&self) -> Result<&PrivateKey> {
        self.private
            .as_ref()
            .ok_or_else(|| Error::InvalidState("Key pair has no private key".into()))
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("private", &self.private)
            .field("public", &self.public)
            .finish()
    }
}

/// Decode a compressed public key
pub fn unmarshal_public_key(bytes: &[u8]) -> Result<PublicKey> {
    PublicKey::from_bytes(bytes)
}

/// Load a keypair from a private key file
pub fn load_key_pair(path: impl AsRef<Path>) -> Result<KeyPair> {
    KeyPair::load_from_file(path)
}

// ============================================================================
// TESTS
// ============================================================================
