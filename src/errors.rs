//! Error types for DER parsing and hybrid encryption.

use thiserror::Error;

/// Errors raised while parsing a DER Tag-Length-Value structure.
///
/// None of these are recoverable: a parse failure means the input is not the
/// key material it claims to be, and no default value is substituted.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DerError {
    /// The buffer is too short to hold a tag byte and a length byte.
    #[error("buffer too short for a TLV header")]
    IncorrectTlvLength,

    /// A long-form length field declares zero or too many extension bytes, or
    /// more extension bytes than the buffer holds.
    #[error("invalid length field length")]
    IncorrectLengthFieldLength,

    /// The declared value length exceeds the bytes remaining in the buffer.
    #[error("value length exceeds remaining buffer")]
    IncorrectValueLength,

    /// The parsed tag is not the one the caller asked for.
    #[error("unexpected tag: expected {expected:#04x}, found {found:#04x}")]
    UnexpectedTag {
        /// Tag the caller expected.
        expected: u8,
        /// Tag found in the buffer.
        found: u8,
    },
}

/// A symmetric key handle refused to hand out its raw bytes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct KeyExportError(pub String);

/// Errors that can occur while composing or opening an encryption context.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum JoseError {
    /// DER key material could not be parsed.
    #[error("der: {0}")]
    Der(#[from] DerError),

    /// The content-encryption key could not be exported for wrapping.
    #[error("content key export failed: {0}")]
    KeyExportFailure(#[from] KeyExportError),

    /// The key-encryption primitive rejected the content key.
    #[error("key wrapping failed: {0}")]
    AsymmetricEncryptionFailure(String),

    /// The content-encryption primitive rejected the payload or key.
    #[error("content encryption failed: {0}")]
    SymmetricEncryptionFailure(String),

    /// The wrapped key could not be unwrapped.
    #[error("key unwrapping failed")]
    AsymmetricDecryptionFailure,

    /// The ciphertext, tag, IV or header failed authentication.
    #[error("content decryption failed")]
    SymmetricDecryptionFailure,

    /// An algorithm name is not one this crate implements.
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Key material is structurally invalid.
    #[error("invalid key: {0}")]
    InvalidKey(&'static str),

    /// Header serialization error.
    #[error("serialization error: {0}")]
    Ser(String),
}
