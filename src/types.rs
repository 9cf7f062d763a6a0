//! Algorithm identifiers, the encryption result, and the protected header model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::JoseError;

/// Length of every AEAD authentication tag produced by this crate.
pub const TAG_LEN: usize = 16;

/// Algorithm used to wrap the content-encryption key.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum KeyEncryptionAlgorithm {
    /// RSAES-PKCS1-v1_5.
    #[serde(rename = "RSA1_5")]
    Rsa1_5,
    /// RSAES-OAEP with SHA-256 and MGF1-SHA-256.
    #[serde(rename = "RSA-OAEP-256")]
    RsaOaep256,
}

impl KeyEncryptionAlgorithm {
    pub fn name(self) -> &'static str {
        match self {
            Self::Rsa1_5 => "RSA1_5",
            Self::RsaOaep256 => "RSA-OAEP-256",
        }
    }
}

impl fmt::Display for KeyEncryptionAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeyEncryptionAlgorithm {
    type Err = JoseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RSA1_5" => Ok(Self::Rsa1_5),
            "RSA-OAEP-256" => Ok(Self::RsaOaep256),
            other => Err(JoseError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

/// Authenticated cipher used to encrypt the payload.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ContentEncryptionAlgorithm {
    /// AES-128 in Galois/Counter Mode.
    #[serde(rename = "A128GCM")]
    A128Gcm,
    /// AES-256 in Galois/Counter Mode.
    #[serde(rename = "A256GCM")]
    A256Gcm,
    /// XChaCha20-Poly1305.
    #[serde(rename = "XC20P")]
    XC20P,
}

impl ContentEncryptionAlgorithm {
    pub fn name(self) -> &'static str {
        match self {
            Self::A128Gcm => "A128GCM",
            Self::A256Gcm => "A256GCM",
            Self::XC20P => "XC20P",
        }
    }

    /// Content-encryption key length in bytes.
    pub fn key_len(self) -> usize {
        match self {
            Self::A128Gcm => 16,
            Self::A256Gcm | Self::XC20P => 32,
        }
    }

    /// Initialization vector length in bytes.
    pub fn iv_len(self) -> usize {
        match self {
            Self::A128Gcm | Self::A256Gcm => 12,
            Self::XC20P => 24,
        }
    }
}

impl fmt::Display for ContentEncryptionAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContentEncryptionAlgorithm {
    type Err = JoseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A128GCM" => Ok(Self::A128Gcm),
            "A256GCM" => Ok(Self::A256Gcm),
            "XC20P" => Ok(Self::XC20P),
            other => Err(JoseError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

/// Algorithm pair fixed when an encrypter or decrypter is built.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EncrypterConfig {
    pub alg: KeyEncryptionAlgorithm,
    pub enc: ContentEncryptionAlgorithm,
}

impl Default for EncrypterConfig {
    fn default() -> Self {
        Self {
            alg: KeyEncryptionAlgorithm::RsaOaep256,
            enc: ContentEncryptionAlgorithm::A256Gcm,
        }
    }
}

/// Output of the content-encryption step.
///
/// The wrapped content key is returned next to this value by
/// [`Encrypter::encrypt`](crate::Encrypter::encrypt), not stored inside it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncryptionContext {
    ciphertext: Vec<u8>,
    authentication_tag: Vec<u8>,
    initialization_vector: Vec<u8>,
}

impl EncryptionContext {
    pub fn new(
        ciphertext: Vec<u8>,
        authentication_tag: Vec<u8>,
        initialization_vector: Vec<u8>,
    ) -> Self {
        Self {
            ciphertext,
            authentication_tag,
            initialization_vector,
        }
    }

    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    pub fn authentication_tag(&self) -> &[u8] {
        &self.authentication_tag
    }

    pub fn initialization_vector(&self) -> &[u8] {
        &self.initialization_vector
    }
}

/// JWE protected header.
///
/// Its serialized bytes are the input to the AAD computation, so the exact
/// byte string handed to the encrypter must also be handed to the decrypter.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct JweHeader {
    pub alg: KeyEncryptionAlgorithm,
    pub enc: ContentEncryptionAlgorithm,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cty: Option<String>,
}

impl JweHeader {
    pub fn for_config(config: &EncrypterConfig) -> Self {
        Self {
            alg: config.alg,
            enc: config.enc,
            kid: None,
            cty: None,
        }
    }

    /// Serialize to compact JSON.
    pub fn to_bytes(&self) -> Result<Vec<u8>, JoseError> {
        serde_json::to_vec(self).map_err(|e| JoseError::Ser(e.to_string()))
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, JoseError> {
        serde_json::from_slice(data).map_err(|e| JoseError::Ser(e.to_string()))
    }
}
