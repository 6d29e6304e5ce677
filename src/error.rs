//! # Error Handling
//!
//! A single error type covers every operation in the crate.
//!
//! ## Error Hierarchy
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           ERROR HIERARCHY                               │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  Error (top-level)                                                     │
//! │  │                                                                      │
//! │  ├── Key Errors (100-199)                                              │
//! │  │   ├── KeyGenFailed             - RNG or derivation failed           │
//! │  │   ├── MalformedKey             - Bytes are not a valid key          │
//! │  │   ├── UnknownKeyRepresentation - Unsupported runtime key type       │
//! │  │   └── InvalidState             - Public-only keypair used privately │
//! │  │                                                                      │
//! │  ├── Encryption Errors (200-299)                                       │
//! │  │   ├── EncryptionFailed         - Hybrid scheme rejected encrypt     │
//! │  │   └── DecryptionFailed         - Wrong key / tampered ciphertext    │
//! │  │                                                                      │
//! │  ├── Signature Errors (300-399)                                        │
//! │  │   ├── SigningFailed            - Signing primitive failed           │
//! │  │   ├── InvalidSignature         - Signature does not verify          │
//! │  │   └── DecodeFailed             - Signature string is not base64     │
//! │  │                                                                      │
//! │  └── Storage Errors (400-499)                                          │
//! │      └── Io                       - Key file create/read/write failed  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is retried or swallowed internally. Each variant carries the step
//! that failed so callers can report it as they see fit.

use thiserror::Error;

/// Result type alias for ecrypto operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for ecrypto
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Key Errors (100-199)
    // ========================================================================

    /// Random source or key derivation failed during generation
    #[error("Failed to generate key pair: {0}")]
    KeyGenFailed(String),

    /// Byte input does not decode to a valid key
    #[error("Malformed key: {0}")]
    MalformedKey(String),

    /// The runtime type of a key argument is not supported by the operation
    #[error("Unknown key representation: {0}")]
    UnknownKeyRepresentation(String),

    /// The key pair is in a state that cannot serve the operation
    #[error("Invalid key pair state: {0}")]
    InvalidState(String),

    // ========================================================================
    // Encryption Errors (200-299)
    // ========================================================================

    /// Encryption failed
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Decryption failed
    #[error("Decryption failed: {0}")]
    DecryptionFailed(String),

    // ========================================================================
    // Signature Errors (300-399)
    // ========================================================================

    /// Signing failed
    #[error("Signing failed: {0}")]
    SigningFailed(String),

    /// Signature does not match the data and key
    #[error("Invalid signature")]
    InvalidSignature,

    /// Signature string could not be decoded
    #[error("Failed to decode signature: {0}")]
    DecodeFailed(String),

    // ========================================================================
    // Storage Errors (400-499)
    // ========================================================================

    /// Key file create/read/write error
    #[error("I/O failure while {context}: {source}")]
    Io {
        /// What was being attempted
        context: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Wrap an I/O error with the step that produced it
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            context: context.into(),
            source,
        }
    }

    /// Stable numeric code for the error
    ///
    /// - 100-199: Keys
    /// - 200-299: Encryption
    /// - 300-399: Signatures
    /// - 400-499: Storage
    pub fn code(&self) -> i32 {
        match self {
            // Keys (100-199)
            Error::KeyGenFailed(_) => 100,
            Error::MalformedKey(_) => 101,
            Error::UnknownKeyRepresentation(_) => 102,
            Error::InvalidState(_) => 103,

            // Encryption (200-299)
            Error::EncryptionFailed(_) => 200,
            Error::DecryptionFailed(_) => 201,

            // Signatures (300-399)
            Error::SigningFailed(_) => 300,
            Error::InvalidSignature => 301,
            Error::DecodeFailed(_) => 302,

            // Storage (400-499)
            Error::Io { .. } => 400,
        }
    }

    /// Whether this is an expected negative outcome rather than a fault
    ///
    /// A signature that fails to verify is a normal answer to the question
    /// "is this signature valid?", not a malfunction.
    pub fn is_negative_result(&self) -> bool {
        matches!(self, Error::InvalidSignature)
    }
}

// ============================================================================
// ERROR CONVERSIONS
// ============================================================================

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Error::DecodeFailed(err.to_string())
    }
}

// ============================================================================
// TESTS
// ============================================================================
