//! Content-encryption key handles.

use std::fmt;

use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::errors::{JoseError, KeyExportError};
use crate::types::ContentEncryptionAlgorithm;

/// A symmetric key that can hand out its raw bytes for wrapping.
///
/// Hardware-backed or otherwise non-extractable keys report
/// [`KeyExportError`] instead of returning bytes.
pub trait ExportableKey {
    fn export_raw(&self) -> Result<Zeroizing<Vec<u8>>, KeyExportError>;
}

/// In-memory content-encryption key. Zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ContentEncryptionKey {
    #[zeroize(skip)]
    algorithm: ContentEncryptionAlgorithm,
    bytes: Vec<u8>,
}

impl ContentEncryptionKey {
    /// Fresh random key sized for `algorithm`.
    pub fn generate(algorithm: ContentEncryptionAlgorithm) -> Self {
        let mut bytes = vec![0u8; algorithm.key_len()];
        OsRng.fill_bytes(&mut bytes);
        Self { algorithm, bytes }
    }

    /// Wrap existing key bytes.
    ///
    /// # Errors
    ///
    /// [`JoseError::InvalidKey`] if `bytes` is not [`ContentEncryptionAlgorithm::key_len`] long.
    pub fn from_bytes(algorithm: ContentEncryptionAlgorithm, bytes: &[u8]) -> Result<Self, JoseError> {
        if bytes.len() != algorithm.key_len() {
            return Err(JoseError::InvalidKey("content key length"));
        }
        Ok(Self {
            algorithm,
            bytes: bytes.to_vec(),
        })
    }

    pub fn algorithm(&self) -> ContentEncryptionAlgorithm {
        self.algorithm
    }
}

impl ExportableKey for ContentEncryptionKey {
    fn export_raw(&self) -> Result<Zeroizing<Vec<u8>>, KeyExportError> {
        Ok(Zeroizing::new(self.bytes.clone()))
    }
}

impl fmt::Debug for ContentEncryptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentEncryptionKey")
            .field("algorithm", &self.algorithm)
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}
