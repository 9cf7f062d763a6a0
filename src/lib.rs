//! # jose-envelope
//!
//! The two low-level building blocks behind JWE-style encryption of a message
//! to an RSA public key.
//!
//! ## DER TLV engine
//!
//! [`der`] parses and writes ASN.1 DER Tag-Length-Value triplets. It is the
//! wire boundary for RSA key material: [`RsaPublicComponents`] uses it to move
//! a public key between PKCS#1 / SPKI DER and its raw modulus and exponent.
//!
//! ## Hybrid encryption
//!
//! [`Encrypter`] wraps a content-encryption key under the recipient's public
//! key and encrypts the payload under the content key. The base64url form of
//! the serialized protected header is the AEAD additional authenticated data,
//! so neither the header nor the ciphertext can be swapped independently.
//!
//! ## Algorithm Suite
//!
//! - **Key Encryption:** `RSA1_5`, `RSA-OAEP-256`
//! - **Content Encryption:** `A128GCM`, `A256GCM`, `XC20P` (XChaCha20-Poly1305)
//!
//! ## Example
//!
//! ```rust
//! use jose_envelope::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut rng = rand::rngs::OsRng;
//! let private_key = rsa::RsaPrivateKey::new(&mut rng, 2048)?;
//! let public_key = rsa::RsaPublicKey::from(&private_key);
//!
//! let config = EncrypterConfig::default();
//! let header = JweHeader::for_config(&config).to_bytes()?;
//! let cek = ContentEncryptionKey::generate(config.enc);
//!
//! let (wrapped_key, context) =
//!     Encrypter::from_config(&config).encrypt(&header, b"Live long and prosper.", &public_key, &cek)?;
//!
//! let plaintext =
//!     Decrypter::from_config(&config).decrypt(&header, &wrapped_key, &context, &private_key)?;
//! assert_eq!(plaintext, b"Live long and prosper.");
//! # Ok(())
//! # }
//! ```
//!
//! ## Security Considerations
//!
//! - IVs and content keys come from the operating system CSPRNG
//! - Content keys are zeroized when dropped and never logged
//! - Compact or JSON serialization of the final message is left to the caller
//!
//! ## License
//!
//! Licensed under the Apache License, Version 2.0.

pub mod der;
mod errors;
mod types;
mod keys;
mod crypto;
mod rsa_key;
mod encrypter;
mod decrypter;

pub use errors::{DerError, JoseError, KeyExportError};
pub use types::*;
pub use keys::*;
pub use crypto::*;
pub use rsa_key::RsaPublicComponents;
pub use encrypter::{aad_for_header, Encrypter};
pub use decrypter::Decrypter;
