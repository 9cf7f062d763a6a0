//! Inverse of [`Encrypter`](crate::Encrypter).

use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::crypto::{AeadDecrypter, AsymmetricDecrypter, RsaDecrypter, SymmetricDecrypter};
use crate::encrypter::aad_for_header;
use crate::errors::JoseError;
use crate::types::{EncrypterConfig, EncryptionContext};

#[derive(Clone, Debug)]
pub struct Decrypter<A, S> {
    asymmetric: A,
    symmetric: S,
}

impl<A: AsymmetricDecrypter, S: SymmetricDecrypter> Decrypter<A, S> {
    pub fn new(asymmetric: A, symmetric: S) -> Self {
        Self {
            asymmetric,
            symmetric,
        }
    }

    /// Unwrap the content key with `kdk` and authenticate and decrypt the payload.
    ///
    /// `header` must be the exact bytes passed to the encrypter.
    ///
    /// # Errors
    ///
    /// [`JoseError::AsymmetricDecryptionFailure`] if the wrapped key does not
    /// open, [`JoseError::SymmetricDecryptionFailure`] if the ciphertext, tag,
    /// IV or header were altered.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(alg = %self.asymmetric.algorithm(), enc = %self.symmetric.algorithm())
    )]
    pub fn decrypt(
        &self,
        header: &[u8],
        wrapped_key: &[u8],
        context: &EncryptionContext,
        kdk: &A::PrivateKey,
    ) -> Result<Vec<u8>, JoseError> {
        let key_bytes = Zeroizing::new(self.asymmetric.decrypt(kdk, wrapped_key)?);

        let aad = aad_for_header(header);
        let plaintext = self
            .symmetric
            .decrypt(&key_bytes, context, &aad)
            .map_err(|e| {
                warn!("content authentication failed");
                e
            })?;

        debug!(plaintext_len = plaintext.len(), "payload decrypted");
        Ok(plaintext)
    }
}

impl Decrypter<RsaDecrypter, AeadDecrypter> {
    pub fn from_config(config: &EncrypterConfig) -> Self {
        Self::new(RsaDecrypter::new(config.alg), AeadDecrypter::new(config.enc))
    }
}
