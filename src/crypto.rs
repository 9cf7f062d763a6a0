use aes_gcm::aead::{self, AeadInPlace, KeyInit};
use aes_gcm::{Aes128Gcm, Aes256Gcm};
use chacha20poly1305::XChaCha20Poly1305;
use rand::rngs::OsRng;
use rand::RngCore;
use rsa::{Oaep, Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use tracing::warn;

use crate::errors::JoseError;
use crate::types::{
    ContentEncryptionAlgorithm, EncryptionContext, KeyEncryptionAlgorithm, TAG_LEN,
};

/* ---------------- Capabilities ---------------- */

/// Wraps a content-encryption key under a public key.
pub trait AsymmetricEncrypter {
    type PublicKey: ?Sized;

    fn algorithm(&self) -> KeyEncryptionAlgorithm;

    /// Failures are reported as [`JoseError::AsymmetricEncryptionFailure`],
    /// including a plaintext too large for the key and padding.
    fn encrypt(&self, key: &Self::PublicKey, plaintext: &[u8]) -> Result<Vec<u8>, JoseError>;
}

/// Inverse of [`AsymmetricEncrypter`].
pub trait AsymmetricDecrypter {
    type PrivateKey: ?Sized;

    fn algorithm(&self) -> KeyEncryptionAlgorithm;

    fn decrypt(&self, key: &Self::PrivateKey, ciphertext: &[u8]) -> Result<Vec<u8>, JoseError>;
}

/// Authenticated encryption of a payload with associated data.
///
/// Implementations choose the IV and must never repeat it for a key.
pub trait SymmetricEncrypter {
    fn algorithm(&self) -> ContentEncryptionAlgorithm;

    fn encrypt(&self, key: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<EncryptionContext, JoseError>;
}

/// Inverse of [`SymmetricEncrypter`].
pub trait SymmetricDecrypter {
    fn algorithm(&self) -> ContentEncryptionAlgorithm;

    fn decrypt(&self, key: &[u8], context: &EncryptionContext, aad: &[u8]) -> Result<Vec<u8>, JoseError>;
}

/* ---------------- RSA key wrapping ---------------- */

/// RSA key wrapping with the padding selected by its algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RsaEncrypter {
    algorithm: KeyEncryptionAlgorithm,
}

impl RsaEncrypter {
    pub fn new(algorithm: KeyEncryptionAlgorithm) -> Self {
        Self { algorithm }
    }
}

impl AsymmetricEncrypter for RsaEncrypter {
    type PublicKey = RsaPublicKey;

    fn algorithm(&self) -> KeyEncryptionAlgorithm {
        self.algorithm
    }

    fn encrypt(&self, key: &RsaPublicKey, plaintext: &[u8]) -> Result<Vec<u8>, JoseError> {
        let mut rng = OsRng;
        let result = match self.algorithm {
            KeyEncryptionAlgorithm::Rsa1_5 => key.encrypt(&mut rng, Pkcs1v15Encrypt, plaintext),
            KeyEncryptionAlgorithm::RsaOaep256 => {
                key.encrypt(&mut rng, Oaep::new::<Sha256>(), plaintext)
            }
        };
        result.map_err(|e| {
            warn!(alg = %self.algorithm, error = %e, "rsa key wrapping failed");
            JoseError::AsymmetricEncryptionFailure(e.to_string())
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RsaDecrypter {
    algorithm: KeyEncryptionAlgorithm,
}

impl RsaDecrypter {
    pub fn new(algorithm: KeyEncryptionAlgorithm) -> Self {
        Self { algorithm }
    }
}

impl AsymmetricDecrypter for RsaDecrypter {
    type PrivateKey = RsaPrivateKey;

    fn algorithm(&self) -> KeyEncryptionAlgorithm {
        self.algorithm
    }

    fn decrypt(&self, key: &RsaPrivateKey, ciphertext: &[u8]) -> Result<Vec<u8>, JoseError> {
        let result = match self.algorithm {
            KeyEncryptionAlgorithm::Rsa1_5 => key.decrypt(Pkcs1v15Encrypt, ciphertext),
            KeyEncryptionAlgorithm::RsaOaep256 => key.decrypt(Oaep::new::<Sha256>(), ciphertext),
        };
        // Padding errors must stay indistinguishable from any other failure.
        result.map_err(|_| JoseError::AsymmetricDecryptionFailure)
    }
}

/* ---------------- AEAD content encryption ---------------- */

fn seal<C: KeyInit + AeadInPlace>(
    key: &[u8],
    iv: &[u8],
    aad: &[u8],
    plaintext: &[u8],
) -> Result<(Vec<u8>, Vec<u8>), JoseError> {
    let cipher = C::new_from_slice(key)
        .map_err(|_| JoseError::SymmetricEncryptionFailure("content key length".into()))?;
    let mut buffer = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(aead::Nonce::<C>::from_slice(iv), aad, &mut buffer)
        .map_err(|_| JoseError::SymmetricEncryptionFailure("aead failure".into()))?;
    Ok((buffer, tag.to_vec()))
}

fn open<C: KeyInit + AeadInPlace>(
    key: &[u8],
    context: &EncryptionContext,
    aad: &[u8],
) -> Result<Vec<u8>, JoseError> {
    let cipher = C::new_from_slice(key).map_err(|_| JoseError::SymmetricDecryptionFailure)?;
    let mut buffer = context.ciphertext().to_vec();
    cipher
        .decrypt_in_place_detached(
            aead::Nonce::<C>::from_slice(context.initialization_vector()),
            aad,
            &mut buffer,
            aead::Tag::<C>::from_slice(context.authentication_tag()),
        )
        .map_err(|_| JoseError::SymmetricDecryptionFailure)?;
    Ok(buffer)
}

/// AES-GCM or XChaCha20-Poly1305 with a random IV per call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AeadEncrypter {
    algorithm: ContentEncryptionAlgorithm,
}

impl AeadEncrypter {
    pub fn new(algorithm: ContentEncryptionAlgorithm) -> Self {
        Self { algorithm }
    }
}

impl SymmetricEncrypter for AeadEncrypter {
    fn algorithm(&self) -> ContentEncryptionAlgorithm {
        self.algorithm
    }

    fn encrypt(&self, key: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<EncryptionContext, JoseError> {
        if key.len() != self.algorithm.key_len() {
            return Err(JoseError::SymmetricEncryptionFailure(format!(
                "{} requires a {}-byte key, got {}",
                self.algorithm,
                self.algorithm.key_len(),
                key.len()
            )));
        }

        let mut iv = vec![0u8; self.algorithm.iv_len()];
        OsRng.fill_bytes(&mut iv);

        let (ciphertext, tag) = match self.algorithm {
            ContentEncryptionAlgorithm::A128Gcm => seal::<Aes128Gcm>(key, &iv, aad, plaintext)?,
            ContentEncryptionAlgorithm::A256Gcm => seal::<Aes256Gcm>(key, &iv, aad, plaintext)?,
            ContentEncryptionAlgorithm::XC20P => {
                seal::<XChaCha20Poly1305>(key, &iv, aad, plaintext)?
            }
        };
        Ok(EncryptionContext::new(ciphertext, tag, iv))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AeadDecrypter {
    algorithm: ContentEncryptionAlgorithm,
}

impl AeadDecrypter {
    pub fn new(algorithm: ContentEncryptionAlgorithm) -> Self {
        Self { algorithm }
    }
}

impl SymmetricDecrypter for AeadDecrypter {
    fn algorithm(&self) -> ContentEncryptionAlgorithm {
        self.algorithm
    }

    fn decrypt(&self, key: &[u8], context: &EncryptionContext, aad: &[u8]) -> Result<Vec<u8>, JoseError> {
        // from_slice panics on a length mismatch, so shapes are checked first.
        if key.len() != self.algorithm.key_len()
            || context.initialization_vector().len() != self.algorithm.iv_len()
            || context.authentication_tag().len() != TAG_LEN
        {
            return Err(JoseError::SymmetricDecryptionFailure);
        }

        match self.algorithm {
            ContentEncryptionAlgorithm::A128Gcm => open::<Aes128Gcm>(key, context, aad),
            ContentEncryptionAlgorithm::A256Gcm => open::<Aes256Gcm>(key, context, aad),
            ContentEncryptionAlgorithm::XC20P => open::<XChaCha20Poly1305>(key, context, aad),
        }
    }
}
