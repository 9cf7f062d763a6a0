//! jose-envelope demo main.rs
//! Demonstrates:
//! - DER round trip of an RSA public key
//! - RSA key wrapping of a fresh content key
//! - AEAD payload encryption bound to the protected header
//!
//! Algorithms come from `JOSE_ALG` / `JOSE_ENC`, defaulting to RSA-OAEP-256 + A256GCM.

use jose_envelope::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn config_from_env() -> Result<EncrypterConfig, JoseError> {
    let mut config = EncrypterConfig::default();
    if let Ok(alg) = std::env::var("JOSE_ALG") {
        config.alg = alg.parse()?;
    }
    if let Ok(enc) = std::env::var("JOSE_ENC") {
        config.enc = enc.parse()?;
    }
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = config_from_env()?;
    info!(alg = %config.alg, enc = %config.enc, "configuration loaded");

    // --- Recipient key pair, shipped as PKCS#1 DER ---
    let mut rng = rand::rngs::OsRng;
    let private_key = rsa::RsaPrivateKey::new(&mut rng, 2048)?;
    let der = RsaPublicComponents::from(&rsa::RsaPublicKey::from(&private_key)).to_pkcs1_der();
    println!("Recipient public key: {} bytes of DER", der.len());

    let components = RsaPublicComponents::from_pkcs1_der(&der)?;
    println!(
        "  modulus {} bytes, exponent {:02x?}\n",
        components.modulus.len(),
        components.exponent
    );
    let public_key = components.to_rsa_public_key()?;

    // --- Encrypt ---
    let header = JweHeader::for_config(&config).to_bytes()?;
    let cek = ContentEncryptionKey::generate(config.enc);
    let message = b"Hello JWE - one content key, wrapped once.";

    let (wrapped_key, context) =
        Encrypter::from_config(&config).encrypt(&header, message, &public_key, &cek)?;
    println!("Protected header: {}", String::from_utf8_lossy(&header));
    println!("Wrapped key:      {} bytes", wrapped_key.len());
    println!("IV:               {} bytes", context.initialization_vector().len());
    println!("Ciphertext:       {} bytes", context.ciphertext().len());
    println!("Tag:              {} bytes\n", context.authentication_tag().len());

    // --- Decrypt ---
    let decrypter = Decrypter::from_config(&config);
    let pt = decrypter.decrypt(&header, &wrapped_key, &context, &private_key)?;
    println!("Decrypted: {}", String::from_utf8_lossy(&pt));
    assert_eq!(pt, message);

    // --- Header substitution is rejected ---
    let mut forged = JweHeader::for_config(&config);
    forged.kid = Some("mallory".to_string());
    match decrypter.decrypt(&forged.to_bytes()?, &wrapped_key, &context, &private_key) {
        Err(e) => println!("Substituted header rejected: {e}"),
        Ok(_) => return Err("substituted header was accepted".into()),
    }

    Ok(())
}
