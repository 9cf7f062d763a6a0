#![allow(dead_code)]

use std::sync::OnceLock;

use jose_envelope::*;
use rsa::{BigUint, RsaPrivateKey, RsaPublicKey};
use zeroize::Zeroizing;

/// One 2048-bit recipient key pair per test binary; generation dominates test time.
pub fn recipient() -> &'static (RsaPrivateKey, RsaPublicKey) {
    static KEYS: OnceLock<(RsaPrivateKey, RsaPublicKey)> = OnceLock::new();
    KEYS.get_or_init(|| {
        let sk = RsaPrivateKey::new(&mut rand::rngs::OsRng, 2048).unwrap();
        let pk = RsaPublicKey::from(&sk);
        (sk, pk)
    })
}

/// A 512-bit public key: too small to wrap anything under RSA-OAEP-256.
pub fn undersized_public_key() -> RsaPublicKey {
    RsaPublicKey::new(BigUint::from_bytes_be(&[0xc5; 64]), BigUint::from_bytes_be(&[0x01, 0x00, 0x01])).unwrap()
}

pub const ALL_CONFIGS: [EncrypterConfig; 6] = [
    EncrypterConfig { alg: KeyEncryptionAlgorithm::Rsa1_5, enc: ContentEncryptionAlgorithm::A128Gcm },
    EncrypterConfig { alg: KeyEncryptionAlgorithm::Rsa1_5, enc: ContentEncryptionAlgorithm::A256Gcm },
    EncrypterConfig { alg: KeyEncryptionAlgorithm::Rsa1_5, enc: ContentEncryptionAlgorithm::XC20P },
    EncrypterConfig { alg: KeyEncryptionAlgorithm::RsaOaep256, enc: ContentEncryptionAlgorithm::A128Gcm },
    EncrypterConfig { alg: KeyEncryptionAlgorithm::RsaOaep256, enc: ContentEncryptionAlgorithm::A256Gcm },
    EncrypterConfig { alg: KeyEncryptionAlgorithm::RsaOaep256, enc: ContentEncryptionAlgorithm::XC20P },
];

/// Content key that refuses export, like a non-extractable keychain entry.
pub struct NonExtractableKey;

impl ExportableKey for NonExtractableKey {
    fn export_raw(&self) -> Result<Zeroizing<Vec<u8>>, KeyExportError> {
        Err(KeyExportError("key is not extractable".to_string()))
    }
}

/// Raw bytes exported as-is, whatever their length.
pub struct RawKey(pub Vec<u8>);

impl ExportableKey for RawKey {
    fn export_raw(&self) -> Result<Zeroizing<Vec<u8>>, KeyExportError> {
        Ok(Zeroizing::new(self.0.clone()))
    }
}
