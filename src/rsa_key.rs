//! RSA public key components in and out of their DER forms.
//!
//! ```text
//! RSAPublicKey ::= SEQUENCE {
//!     modulus           INTEGER,  -- n
//!     publicExponent    INTEGER   -- e
//! }
//!
//! SubjectPublicKeyInfo ::= SEQUENCE {
//!     algorithm         AlgorithmIdentifier,
//!     subjectPublicKey  BIT STRING  -- DER of RSAPublicKey
//! }
//! ```

use rsa::traits::PublicKeyParts;
use rsa::{BigUint, RsaPublicKey};

use crate::der::{self, Asn1Type};
use crate::errors::JoseError;

/// Unsigned big-endian RSA public key components, without leading zero octets.
///
/// This is the shape JWK `n` and `e` members carry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaPublicComponents {
    pub modulus: Vec<u8>,
    pub exponent: Vec<u8>,
}

impl RsaPublicComponents {
    /// Parse a PKCS#1 `RSAPublicKey`.
    ///
    /// # Errors
    ///
    /// [`JoseError::Der`] for malformed TLV data, [`JoseError::InvalidKey`] for
    /// empty integers or bytes trailing the exponent.
    pub fn from_pkcs1_der(data: &[u8]) -> Result<Self, JoseError> {
        let body = der::read(data, Asn1Type::Sequence)?;

        let modulus = der::read(body, Asn1Type::Integer)?;
        let rest = der::skip(body, Asn1Type::Integer)?;
        let exponent = der::read(rest, Asn1Type::Integer)?;
        if !der::skip(rest, Asn1Type::Integer)?.is_empty() {
            return Err(JoseError::InvalidKey("trailing data after public exponent"));
        }

        Ok(Self {
            modulus: unsigned(modulus, "empty modulus")?,
            exponent: unsigned(exponent, "empty exponent")?,
        })
    }

    /// Parse a `SubjectPublicKeyInfo` wrapping a PKCS#1 key.
    ///
    /// The algorithm identifier is skipped, not checked.
    pub fn from_spki_der(data: &[u8]) -> Result<Self, JoseError> {
        let body = der::read(data, Asn1Type::Sequence)?;
        let rest = der::skip(body, Asn1Type::Sequence)?;
        let bits = der::read(rest, Asn1Type::BitString)?;
        match bits.split_first() {
            Some((0, key)) => Self::from_pkcs1_der(key),
            _ => Err(JoseError::InvalidKey("subjectPublicKey has unused bits")),
        }
    }

    /// Encode as a PKCS#1 `RSAPublicKey`.
    pub fn to_pkcs1_der(&self) -> Vec<u8> {
        let mut body = der::encode_tlv(Asn1Type::Integer, &signed(&self.modulus));
        body.extend(der::encode_tlv(Asn1Type::Integer, &signed(&self.exponent)));
        der::encode_tlv(Asn1Type::Sequence, &body)
    }

    /// Build an `rsa` crate key from these components.
    pub fn to_rsa_public_key(&self) -> Result<RsaPublicKey, JoseError> {
        RsaPublicKey::new(
            BigUint::from_bytes_be(&self.modulus),
            BigUint::from_bytes_be(&self.exponent),
        )
        .map_err(|_| JoseError::InvalidKey("rsa public key rejected"))
    }
}

impl From<&RsaPublicKey> for RsaPublicComponents {
    fn from(key: &RsaPublicKey) -> Self {
        Self {
            modulus: key.n().to_bytes_be(),
            exponent: key.e().to_bytes_be(),
        }
    }
}

fn unsigned(integer: &[u8], what: &'static str) -> Result<Vec<u8>, JoseError> {
    if integer.is_empty() {
        return Err(JoseError::InvalidKey(what));
    }
    let start = integer.iter().take_while(|b| **b == 0).count();
    let magnitude = &integer[start..];
    // An all-zero integer keeps a single zero octet.
    if magnitude.is_empty() {
        return Ok(vec![0]);
    }
    Ok(magnitude.to_vec())
}

// DER INTEGERs are two's complement: a set high bit needs a 0x00 prefix.
fn signed(magnitude: &[u8]) -> Vec<u8> {
    let start = magnitude.iter().take_while(|b| **b == 0).count();
    let trimmed = &magnitude[start..];
    match trimmed.first() {
        None => vec![0],
        Some(b) if b & 0x80 != 0 => {
            let mut out = Vec::with_capacity(trimmed.len() + 1);
            out.push(0);
            out.extend_from_slice(trimmed);
            out
        }
        Some(_) => trimmed.to_vec(),
    }
}
