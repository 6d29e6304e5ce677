//! # Key Representations
//!
//! Every engine entry point accepts a key in one of three shapes and
//! normalizes it before touching the curve.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      KEY REPRESENTATIONS                                │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  PublicKeyLike  (encrypt, verify)                                      │
//! │  ├── KeyPair(&KeyPair)      → its public key                           │
//! │  ├── PublicKey(&PublicKey)  → as is                                    │
//! │  └── Bytes(&[u8])           → 33-byte compressed point, decoded        │
//! │                                                                         │
//! │  PrivateKeyLike (decrypt, sign)                                        │
//! │  ├── KeyPair(&KeyPair)      → its private key (InvalidState if none)   │
//! │  ├── PrivateKey(&PrivateKey)→ as is                                    │
//! │  └── Bytes(&[u8])           → 32-byte scalar, decoded                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `From` conversions let callers pass `&KeyPair`, `&PublicKey`,
//! `&PrivateKey`, `&[u8]`, `&Vec<u8>` or `&[u8; N]` directly. Callers that
//! only know the key's type at runtime go through `from_any`, which is
//! where `UnknownKeyRepresentation` comes from.

use std::any::Any;
use std::borrow::Cow;

use super::keys::{KeyPair, PrivateKey, PublicKey};
use super::PUBLIC_KEY_SIZE;
use crate::error::{Error, Result};

// ============================================================================
// PUBLIC SIDE
// ============================================================================

/// A key usable wherever a public key is needed
#[derive(Debug, Clone, Copy)]
pub enum PublicKeyLike<'a> {
    /// Full or public-only keypair
    KeyPair(&'a KeyPair),
    /// Decoded public key
    PublicKey(&'a PublicKey),
    /// Compressed public key bytes
    Bytes(&'a [u8]),
}

impl<'a> PublicKeyLike<'a> {
    /// Interpret a dynamically typed value as a public key representation
    ///
    /// Accepts `KeyPair`, `PublicKey`, `Vec<u8>` and `[u8; 33]`.
    pub fn from_any(value: &'a dyn Any) -> Result<Self> {
        if let Some(kp) = value.downcast_ref::<KeyPair>() {
            Ok(Self::KeyPair(kp))
        } else if let Some(pk) = value.downcast_ref::<PublicKey>() {
            Ok(Self::PublicKey(pk))
        } else if let Some(bytes) = value.downcast_ref::<Vec<u8>>() {
            Ok(Self::Bytes(bytes))
        } else if let Some(bytes) = value.downcast_ref::<[u8; PUBLIC_KEY_SIZE]>() {
            Ok(Self::Bytes(bytes))
        } else {
            Err(Error::UnknownKeyRepresentation(
                "expected KeyPair, PublicKey or public key bytes".into(),
            ))
        }
    }

    /// Normalize to a decoded public key
    pub fn to_public_key(&self) -> Result<PublicKey> {
        match self {
            Self::KeyPair(kp) => Ok(*kp.public_key()),
            Self::PublicKey(pk) => Ok(**pk),
            Self::Bytes(bytes) => PublicKey::from_bytes(bytes),
        }
    }

    /// Normalize to the 33-byte compressed encoding
    ///
    /// Byte input is decoded first so malformed points are caught here
    /// rather than deeper in the primitive.
    pub fn to_compressed_bytes(&self) -> Result<[u8; PUBLIC_KEY_SIZE]> {
        match self {
            Self::KeyPair(kp) => Ok(kp.marshal_public_key()),
            Self::PublicKey(pk) => Ok(pk.to_bytes()),
            Self::Bytes(bytes) => Ok(PublicKey::from_bytes(bytes)?.to_bytes()),
        }
    }
}

impl<'a> From<&'a KeyPair> for PublicKeyLike<'a> {
    fn from(kp: &'a KeyPair) -> Self {
        Self::KeyPair(kp)
    }
}

impl<'a> From<&'a PublicKey> for PublicKeyLike<'a> {
    fn from(pk: &'a PublicKey) -> Self {
        Self::PublicKey(pk)
    }
}

impl<'a> From<&'a [u8]> for PublicKeyLike<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for PublicKeyLike<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Self::Bytes(bytes.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for PublicKeyLike<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Self::Bytes(bytes.as_slice())
    }
}

// ============================================================================
// PRIVATE SIDE
// ============================================================================

/// A key usable wherever a private key is needed
#[derive(Debug, Clone, Copy)]
pub enum PrivateKeyLike<'a> {
    /// Full keypair
    KeyPair(&'a KeyPair),
    /// Decoded private key
    PrivateKey(&'a PrivateKey),
    /// 32-byte scalar
    Bytes(&'a [u8]),
}

impl<'a> PrivateKeyLike<'a> {
    /// Interpret a dynamically typed value as a private key representation
    ///
    /// Accepts `KeyPair`, `PrivateKey`, `Vec<u8>` and `[u8; 32]`.
    pub fn from_any(value: &'a dyn Any) -> Result<Self> {
        if let Some(kp) = value.downcast_ref::<KeyPair>() {
            Ok(Self::KeyPair(kp))
        } else if let Some(sk) = value.downcast_ref::<PrivateKey>() {
            Ok(Self::PrivateKey(sk))
        } else if let Some(bytes) = value.downcast_ref::<Vec<u8>>() {
            Ok(Self::Bytes(bytes))
        } else if let Some(bytes) = value.downcast_ref::<[u8; super::PRIVATE_KEY_SIZE]>() {
            Ok(Self::Bytes(bytes))
        } else {
            Err(Error::UnknownKeyRepresentation(
                "expected KeyPair, PrivateKey or private key bytes".into(),
            ))
        }
    }

    /// Normalize to a decoded private key
    ///
    /// Borrowed variants are passed through without copying the scalar.
    pub fn to_private_key(&self) -> Result<Cow<'a, PrivateKey>> {
        match *self {
            Self::KeyPair(kp) => kp.require_private().map(Cow::Borrowed),
            Self::PrivateKey(sk) => Ok(Cow::Borrowed(sk)),
            Self::Bytes(bytes) => PrivateKey::from_bytes(bytes).map(Cow::Owned),
        }
    }
}

impl<'a> From<&'a KeyPair> for PrivateKeyLike<'a> {
    fn from(kp: &'a KeyPair) -> Self {
        Self::KeyPair(kp)
    }
}

impl<'a> From<&'a PrivateKey> for PrivateKeyLike<'a> {
    fn from(sk: &'a PrivateKey) -> Self {
        Self::PrivateKey(sk)
    }
}

impl<'a> From<&'a [u8]> for PrivateKeyLike<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for PrivateKeyLike<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Self::Bytes(bytes.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for PrivateKeyLike<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Self::Bytes(bytes.as_slice())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_normalization_agrees() {
        let kp = KeyPair::generate().unwrap();
        let bytes = kp.marshal_public_key();

        let from_pair = PublicKeyLike::from(&kp).to_public_key().unwrap();
        let from_key = PublicKeyLike::from(kp.public_key()).to_public_key().unwrap();
        let from_bytes = PublicKeyLike::from(&bytes).to_public_key().unwrap();

        assert_eq!(from_pair, from_key);
        assert_eq!(from_key, from_bytes);
    }

    #[test]
    fn test_compressed_bytes_agree() {
        let kp = KeyPair::generate().unwrap();
        let expected = kp.marshal_public_key();

        assert_eq!(PublicKeyLike::from(&kp).to_compressed_bytes().unwrap(), expected);
        assert_eq!(
            PublicKeyLike::from(kp.public_key()).to_compressed_bytes().unwrap(),
            expected
        );
        assert_eq!(
            PublicKeyLike::from(&expected[..]).to_compressed_bytes().unwrap(),
            expected
        );
    }

    #[test]
    fn test_private_normalization_agrees() {
        let kp = KeyPair::generate().unwrap();
        let bytes = kp.marshal_private_key().unwrap();

        let from_pair = PrivateKeyLike::from(&kp).to_private_key().unwrap();
        let from_key = PrivateKeyLike::from(kp.private_key().unwrap())
            .to_private_key()
            .unwrap();
        let from_bytes = PrivateKeyLike::from(&*bytes).to_private_key().unwrap();

        assert!(matches!(from_pair, Cow::Borrowed(_)));
        assert!(matches!(from_bytes, Cow::Owned(_)));
        assert_eq!(from_pair, from_key);
        assert_eq!(from_key, from_bytes);
    }

    #[test]
    fn test_public_only_pair_has_no_private_representation() {
        let kp = KeyPair::generate().unwrap();
        let public_only = KeyPair::from_public_key(*kp.public_key());

        assert!(matches!(
            PrivateKeyLike::from(&public_only).to_private_key(),
            Err(Error::InvalidState(_))
        ));
    }

    #[test]
    fn test_bad_bytes_are_malformed() {
        assert!(matches!(
            PublicKeyLike::from(&[1u8, 2, 3]).to_public_key(),
            Err(Error::MalformedKey(_))
        ));
        assert!(matches!(
            PrivateKeyLike::from(&[0u8; 32]).to_private_key(),
            Err(Error::MalformedKey(_))
        ));
    }

    #[test]
    fn test_from_any_accepts_supported_types() {
        let kp = KeyPair::generate().unwrap();
        let public_vec = kp.marshal_public_key().to_vec();
        let public_arr = kp.marshal_public_key();
        let private_vec = kp.marshal_private_key().unwrap().to_vec();

        assert!(matches!(
            PublicKeyLike::from_any(&kp),
            Ok(PublicKeyLike::KeyPair(_))
        ));
        assert!(matches!(
            PublicKeyLike::from_any(kp.public_key()),
            Ok(PublicKeyLike::PublicKey(_))
        ));
        assert!(matches!(
            PublicKeyLike::from_any(&public_vec),
            Ok(PublicKeyLike::Bytes(_))
        ));
        assert!(matches!(
            PublicKeyLike::from_any(&public_arr),
            Ok(PublicKeyLike::Bytes(_))
        ));
        assert!(matches!(
            PrivateKeyLike::from_any(kp.private_key().unwrap()),
            Ok(PrivateKeyLike::PrivateKey(_))
        ));
        assert!(matches!(
            PrivateKeyLike::from_any(&private_vec),
            Ok(PrivateKeyLike::Bytes(_))
        ));
    }

    #[test]
    fn test_from_any_rejects_unknown_types() {
        let kp = KeyPair::generate().unwrap();
        let text = String::from("not a key");

        assert!(matches!(
            PublicKeyLike::from_any(&text),
            Err(Error::UnknownKeyRepresentation(_))
        ));
        assert!(matches!(
            PublicKeyLike::from_any(&42u64),
            Err(Error::UnknownKeyRepresentation(_))
        ));
        // A private key is not a public representation, and vice versa
        assert!(matches!(
            PublicKeyLike::from_any(kp.private_key().unwrap()),
            Err(Error::UnknownKeyRepresentation(_))
        ));
        assert!(matches!(
            PrivateKeyLike::from_any(kp.public_key()),
            Err(Error::UnknownKeyRepresentation(_))
        ));
    }
}
