//! Hybrid encryption: wrap a content key, then encrypt the payload under it.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use tracing::debug;

use crate::crypto::{AeadEncrypter, AsymmetricEncrypter, RsaEncrypter, SymmetricEncrypter};
use crate::errors::JoseError;
use crate::keys::ExportableKey;
use crate::types::{EncrypterConfig, EncryptionContext};

/// Additional authenticated data for a serialized protected header: the ASCII
/// bytes of its unpadded base64url encoding.
pub fn aad_for_header(header: &[u8]) -> Vec<u8> {
    URL_SAFE_NO_PAD.encode(header).into_bytes()
}

/// Composes a key-wrapping primitive with a content-encryption primitive.
///
/// Both algorithms are fixed at construction. The encrypter holds no key
/// material and no mutable state, so one instance can serve any number of
/// concurrent [`encrypt`](Self::encrypt) calls.
#[derive(Clone, Debug)]
pub struct Encrypter<A, S> {
    asymmetric: A,
    symmetric: S,
}

impl<A: AsymmetricEncrypter, S: SymmetricEncrypter> Encrypter<A, S> {
    pub fn new(asymmetric: A, symmetric: S) -> Self {
        Self {
            asymmetric,
            symmetric,
        }
    }

    pub fn config(&self) -> EncrypterConfig {
        EncrypterConfig {
            alg: self.asymmetric.algorithm(),
            enc: self.symmetric.algorithm(),
        }
    }

    /// Wrap `cek` under `kek` and encrypt `payload` under `cek`, binding the
    /// ciphertext to `header`.
    ///
    /// Returns the wrapped key and the content encryption result. Nothing is
    /// returned unless both steps succeed.
    ///
    /// # Errors
    ///
    /// - [`JoseError::KeyExportFailure`] if `cek` will not export its bytes.
    /// - [`JoseError::AsymmetricEncryptionFailure`] if wrapping fails, e.g. the
    ///   key is too small for the content key under the configured padding.
    /// - [`JoseError::SymmetricEncryptionFailure`] if content encryption fails,
    ///   including a content key of the wrong size for the configured cipher.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(alg = %self.asymmetric.algorithm(), enc = %self.symmetric.algorithm())
    )]
    pub fn encrypt<K: ExportableKey + ?Sized>(
        &self,
        header: &[u8],
        payload: &[u8],
        kek: &A::PublicKey,
        cek: &K,
    ) -> Result<(Vec<u8>, EncryptionContext), JoseError> {
        let key_bytes = cek.export_raw()?;
        let wrapped_key = self.asymmetric.encrypt(kek, &key_bytes)?;

        let aad = aad_for_header(header);
        let context = self.symmetric.encrypt(&key_bytes, payload, &aad)?;

        debug!(
            wrapped_key_len = wrapped_key.len(),
            ciphertext_len = context.ciphertext().len(),
            "payload encrypted"
        );
        Ok((wrapped_key, context))
    }
}

impl Encrypter<RsaEncrypter, AeadEncrypter> {
    /// RSA key wrapping with AEAD content encryption, as configured.
    pub fn from_config(config: &EncrypterConfig) -> Self {
        Self::new(RsaEncrypter::new(config.alg), AeadEncrypter::new(config.enc))
    }
}
