//! # Key File Storage
//!
//! Raw key bytes written to and read from a filesystem path.
//!
//! ## File Format
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  private.key                                                           │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  32 bytes: big-endian secp256k1 scalar                           │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │  No header, no framing, no version byte. Permissions are whatever the │
//! │  platform gives a newly created file.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//!
//! No locking is performed. Two writers racing on the same path leave an
//! unspecified file behind.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// Create (or truncate) `path` and write `bytes` to it
///
/// The file handle is closed on every exit path. A write that fails part
/// way through leaves whatever reached the disk; nothing is rolled back.
pub fn write_key_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = File::create(path)
        .map_err(|e| Error::io(format!("creating key file {}", path.display()), e))?;

    file.write_all(bytes)
        .map_err(|e| Error::io(format!("writing key file {}", path.display()), e))?;

    file.flush()
        .map_err(|e| Error::io(format!("flushing key file {}", path.display()), e))?;

    tracing::debug!("Wrote {} bytes to key file {}", bytes.len(), path.display());
    Ok(())
}

/// Read the entire contents of `path`
///
/// The buffer is zeroized when dropped since it normally holds a secret.
pub fn read_key_file(path: &Path) -> Result<Zeroizing<Vec<u8>>> {
    let bytes = fs::read(path)
        .map_err(|e| Error::io(format!("reading key file {}", path.display()), e))?;

    tracing::debug!("Read {} bytes from key file {}", bytes.len(), path.display());
    Ok(Zeroizing::new(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("key.bin");

        write_key_file(&path, &[1, 2, 3, 4]).unwrap();
        let read = read_key_file(&path).unwrap();

        assert_eq!(read.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_write_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("key.bin");

        write_key_file(&path, &[9u8; 64]).unwrap();
        write_key_file(&path, &[1u8; 8]).unwrap();

        assert_eq!(read_key_file(&path).unwrap().as_slice(), &[1u8; 8]);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("key.bin");

        let err = write_key_file(&path, &[0u8; 32]).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("creating key file"));
    }

    #[test]
    fn test_read_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_key_file(&dir.path().join("absent.bin")).unwrap_err();
        assert!(err.to_string().contains("reading key file"));
    }
}
