//! Keccak-256 message digest.

use sha3::{Digest, Keccak256};

use super::HASH_SIZE;

/// Hash `data` with Keccak-256 (the original Keccak padding, not SHA3-256)
pub fn keccak256(data: &[u8]) -> [u8; HASH_SIZE] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keccak256_empty() {
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_keccak256_differs_from_sha3() {
        use sha3::Sha3_256;

        let sha3: [u8; 32] = Sha3_256::digest(b"").into();
        assert_ne!(keccak256(b""), sha3);
    }

    #[test]
    fn test_keccak256_deterministic() {
        assert_eq!(keccak256(b"hello world"), keccak256(b"hello world"));
        assert_ne!(keccak256(b"hello world"), keccak256(b"hello world!"));
    }
}
