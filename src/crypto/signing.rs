//! # Digital Signatures Module
//!
//! Recoverable secp256k1 ECDSA signatures over the Keccak-256 digest of a
//! message.
//!
//! ## Signature Format
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        SIGNATURE FORMAT                                 │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │   ┌──────────────────┬──────────────────┬────┐                         │
//! │   │    R (32 bytes)  │    S (32 bytes)  │ V  │   65 bytes              │
//! │   └──────────────────┴──────────────────┴────┘                         │
//! │                                               V = recovery id (0..=3)  │
//! │                                                                         │
//! │   String form: URL-safe base64, no padding (87 characters)             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Flows
//!
//! ```text
//! sign:   key ──normalize──► PrivateKey
//!         message ──Keccak-256──► digest ──ECDSA(RFC 6979)──► R || S || V
//!
//! verify: key ──normalize──► 33-byte compressed public key
//!         message ──Keccak-256──► digest
//!         signature ──drop V──► R || S ──ECDSA verify──► Ok / InvalidSignature
//! ```
//!
//! Signing is deterministic: the same key and message always produce the
//! same signature. S is always in the lower half of the group order.

use std::fmt;
use std::str::FromStr;

use base64::prelude::*;
use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::{Signature as EcdsaSignature, SigningKey, VerifyingKey};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::hash::keccak256;
use super::repr::{PrivateKeyLike, PublicKeyLike};
use super::SIGNATURE_SIZE;
use crate::error::{Error, Result};

/// Length of the (R, S) part of a signature
const RS_SIZE: usize = SIGNATURE_SIZE - 1;

/// A recoverable signature: `R || S || recovery id`
///
/// Signatures produced by [`sign`] are always 65 bytes. Signatures parsed
/// from strings are kept byte-for-byte as decoded; their length is only
/// checked when they are verified.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Signature(Vec<u8>);

impl Signature {
    /// Wrap raw signature bytes
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume into the raw bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Number of bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the signature holds no bytes at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The 64-byte (R, S) pair, if the signature has the standard length
    pub fn rs_bytes(&self) -> Option<&[u8]> {
        (self.0.len() == SIGNATURE_SIZE).then(|| &self.0[..RS_SIZE])
    }

    /// The trailing recovery id, if the signature has the standard length
    pub fn recovery_id(&self) -> Option<u8> {
        (self.0.len() == SIGNATURE_SIZE).then(|| self.0[RS_SIZE])
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&BASE64_URL_SAFE_NO_PAD.encode(&self.0))
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", self)
    }
}

impl FromStr for Signature {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        signature_from_string(s)
    }
}

impl Serialize for Signature {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        signature_from_string(&s).map_err(serde::de::Error::custom)
    }
}

/// Parse a signature from its URL-safe, unpadded base64 form
///
/// No length check is done here; see [`verify`].
pub fn signature_from_string(s: &str) -> Result<Signature> {
    let bytes = BASE64_URL_SAFE_NO_PAD.decode(s)?;
    Ok(Signature(bytes))
}

/// Sign the Keccak-256 digest of `message`
///
/// ## Errors
///
/// - `MalformedKey` if byte input is not a valid scalar
/// - `InvalidState` if a public-only keypair is supplied
/// - `SigningFailed` if the ECDSA primitive fails
///
/// ## Example
///
/// ```ignore
/// let keypair = KeyPair::generate()?;
/// let signature = sign(&keypair, b"Hello, World!")?;
/// assert_eq!(signature.len(), 65);
/// ```
pub fn sign<'a>(key: impl Into<PrivateKeyLike<'a>>, message: &[u8]) -> Result<Signature> {
    let private = key.into().to_private_key()?;
    let digest = keccak256(message);

    let signing_key = SigningKey::from(private.as_inner());
    let (sig, recovery_id) = signing_key
        .sign_prehash_recoverable(&digest)
        .map_err(|e| Error::SigningFailed(e.to_string()))?;

    let mut bytes = Vec::with_capacity(SIGNATURE_SIZE);
    bytes.extend_from_slice(&sig.to_bytes());
    bytes.push(recovery_id.to_byte());

    Ok(Signature(bytes))
}

/// Verify a signature over `message`
///
/// Every key representation is first reduced to its 33-byte compressed
/// encoding, so all three share one verification path. The recovery id is
/// dropped before the ECDSA check.
///
/// ## Returns
///
/// `Ok(())` if valid, `Err(InvalidSignature)` if not. A signature that is
/// not exactly 65 bytes is rejected without being inspected, and so are
/// key bytes that do not decode to a public key.
pub fn verify<'a>(
    key: impl Into<PublicKeyLike<'a>>,
    message: &[u8],
    signature: impl AsRef<[u8]>,
) -> Result<()> {
    // Key bytes that do not decode cannot have produced any signature
    let public = key.into().to_compressed_bytes().map_err(|e| match e {
        Error::MalformedKey(_) => Error::InvalidSignature,
        other => other,
    })?;
    verify_compressed(&public, message, signature.as_ref())
}

fn verify_compressed(public: &[u8], message: &[u8], signature: &[u8]) -> Result<()> {
    if signature.len() != SIGNATURE_SIZE {
        return Err(Error::InvalidSignature);
    }

    let verifying_key = VerifyingKey::from_sec1_bytes(public)
        .map_err(|_| Error::InvalidSignature)?;

    let sig = EcdsaSignature::from_slice(&signature[..RS_SIZE])
        .map_err(|_| Error::InvalidSignature)?;

    // High-S form is malleable; the signer never emits it
    if sig.normalize_s().is_some() {
        return Err(Error::InvalidSignature);
    }

    verifying_key
        .verify_prehash(&keccak256(message), &sig)
        .map_err(|_| Error::InvalidSignature)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::KeyPair;

    const KNOWN_SIGNATURE: &str =
        "DbnHCbFJxmcHFqK4_hks5js72_6YfzkMvEL1SdJnZx8meUKAZZ5U2BsAVRmZcdpBkCo-yKYnke7ZpB6vSvcCJQA";

    #[test]
    fn test_sign_verify() {
        let kp = KeyPair::generate().unwrap();
        let data = b"hello world";

        let sig = sign(&kp, data).unwrap();

        assert!(verify(&kp, data, &sig).is_ok());
        assert!(verify(kp.public_key(), data, &sig).is_ok());
        assert!(verify(&kp.marshal_public_key(), data, &sig).is_ok());
    }

    #[test]
    fn test_sign_with_every_representation() {
        let kp = KeyPair::generate().unwrap();
        let data = b"hello world";
        let private = kp.marshal_private_key().unwrap();

        let by_pair = sign(&kp, data).unwrap();
        let by_key = sign(kp.private_key().unwrap(), data).unwrap();
        let by_bytes = sign(&*private, data).unwrap();

        // RFC 6979 makes all three identical
        assert_eq!(by_pair, by_key);
        assert_eq!(by_key, by_bytes);
        assert!(verify(&kp, data, &by_bytes).is_ok());
    }

    #[test]
    fn test_signature_shape() {
        let kp = KeyPair::generate().unwrap();
        let sig = sign(&kp, b"hello world").unwrap();

        assert_eq!(sig.len(), SIGNATURE_SIZE);
        assert!(sig.recovery_id().unwrap() <= 3);
        assert_eq!(sig.rs_bytes().unwrap().len(), 64);

        let s = sig.to_string();
        assert_eq!(s.len(), 87);
        assert!(!s.contains('='));
        assert_eq!(signature_from_string(&s).unwrap().len(), SIGNATURE_SIZE);
    }

    #[test]
    fn test_deterministic_signatures() {
        let kp = KeyPair::generate().unwrap();
        let sig1 = sign(&kp, b"Hello, World!").unwrap();
        let sig2 = sign(&kp, b"Hello, World!").unwrap();
        assert_eq!(sig1, sig2);
    }

    #[test]
    fn test_verify_wrong_message_fails() {
        let kp = KeyPair::generate().unwrap();
        let sig = sign(&kp, b"Hello, World!").unwrap();

        assert!(matches!(
            verify(&kp, b"Wrong message!", &sig),
            Err(Error::InvalidSignature)
        ));
    }

    #[test]
    fn test_verify_wrong_key_fails() {
        let kp1 = KeyPair::generate().unwrap();
        let kp2 = KeyPair::generate().unwrap();
        let sig = sign(&kp1, b"Hello, World!").unwrap();

        assert!(matches!(
            verify(&kp2, b"Hello, World!", &sig),
            Err(Error::InvalidSignature)
        ));
    }

    #[test]
    fn test_verify_ignores_recovery_id() {
        let kp = KeyPair::generate().unwrap();
        let sig = sign(&kp, b"data").unwrap();

        let mut bytes = sig.into_bytes();
        bytes[RS_SIZE] ^= 0x01;
        assert!(verify(&kp, b"data", &bytes).is_ok());
    }

    #[test]
    fn test_verify_tampered_signature_fails() {
        let kp = KeyPair::generate().unwrap();
        let mut bytes = sign(&kp, b"data").unwrap().into_bytes();
        bytes[10] ^= 0x01;

        assert!(verify(&kp, b"data", &bytes).is_err());
    }

    #[test]
    fn test_verify_rejects_wrong_length_without_panicking() {
        let kp = KeyPair::generate().unwrap();
        let sig = sign(&kp, b"data").unwrap();

        assert!(matches!(
            verify(&kp, b"data", &[] as &[u8]),
            Err(Error::InvalidSignature)
        ));
        assert!(matches!(
            verify(&kp, b"data", &sig.as_bytes()[..RS_SIZE]),
            Err(Error::InvalidSignature)
        ));

        let mut long = sig.into_bytes();
        long.push(0);
        assert!(matches!(
            verify(&kp, b"data", &long),
            Err(Error::InvalidSignature)
        ));
    }

    #[test]
    fn test_verify_with_public_only_pair() {
        let kp = KeyPair::generate().unwrap();
        let public_only = KeyPair::from_public_key(*kp.public_key());
        let sig = sign(&kp, b"data").unwrap();

        assert!(verify(&public_only, b"data", &sig).is_ok());
        assert!(matches!(
            sign(&public_only, b"data"),
            Err(Error::InvalidState(_))
        ));
    }

    #[test]
    fn test_sign_with_malformed_key_bytes() {
        assert!(matches!(sign(&[0u8; 32], b"data"), Err(Error::MalformedKey(_))));
        assert!(matches!(sign(&[1u8; 3], b"data"), Err(Error::MalformedKey(_))));
    }

    #[test]
    fn test_verify_with_undecodable_key_is_invalid_signature() {
        let kp = KeyPair::generate().unwrap();
        let sig = sign(&kp, b"data").unwrap();

        let mut wrong_prefix = kp.marshal_public_key();
        wrong_prefix[0] = 0x05;

        let keys: [&[u8]; 4] = [&[0u8; 33], &[2u8; 5], &[], &wrong_prefix];
        for key in keys {
            let err = verify(key, b"data", &sig).unwrap_err();
            assert!(matches!(err, Error::InvalidSignature));
            assert!(err.is_negative_result());
        }
    }

    #[test]
    fn test_signature_from_known_string() {
        let sig = signature_from_string(KNOWN_SIGNATURE).unwrap();
        assert_eq!(sig.len(), SIGNATURE_SIZE);
        assert_eq!(sig.recovery_id(), Some(0));
        assert_eq!(sig.to_string(), KNOWN_SIGNATURE);

        let parsed: Signature = KNOWN_SIGNATURE.parse().unwrap();
        assert_eq!(parsed, sig);
    }

    #[test]
    fn test_signature_from_string_keeps_any_length() {
        let sig = signature_from_string("YWJj").unwrap();
        assert_eq!(sig.as_bytes(), b"abc");
        assert_eq!(sig.recovery_id(), None);
        assert_eq!(sig.rs_bytes(), None);
    }

    #[test]
    fn test_signature_from_invalid_string() {
        assert!(matches!(
            signature_from_string("not base64!"),
            Err(Error::DecodeFailed(_))
        ));
        // Standard alphabet characters are not part of the URL-safe alphabet
        assert!(signature_from_string("ab+/").is_err());
        // Padding is not accepted
        assert!(signature_from_string("YWI=").is_err());
    }

    #[test]
    fn test_signature_serialization() {
        let kp = KeyPair::generate().unwrap();
        let sig = sign(&kp, b"test").unwrap();

        let json = serde_json::to_string(&sig).unwrap();
        assert_eq!(json, format!("\"{}\"", sig));

        let restored: Signature = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, sig);
    }
}
